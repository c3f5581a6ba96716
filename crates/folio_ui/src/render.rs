//! Drawing commands and the surfaces that execute them.
//!
//! A frame is built as a flat list of commands and handed to a [`Surface`] in
//! one call. The browser surface replays them onto a 2D canvas context; the
//! recording surface keeps them for tests and headless replays.

use folio_shared::{Vec2, Viewport};

use crate::style::Color;

/// A drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Clear the whole surface to transparent.
    Clear {
        /// Area to clear.
        viewport: Viewport,
    },
    /// Filled circle.
    FillCircle {
        /// Center.
        center: Vec2,
        /// Radius in pixels.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// Straight line.
    StrokeLine {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Stroke color.
        color: Color,
        /// Line width in pixels.
        width: f32,
    },
}

/// Something a frame can be drawn onto.
pub trait Surface {
    /// Current size.
    fn viewport(&self) -> Viewport;

    /// Changes the size. Drops whatever was drawn.
    fn resize(&mut self, viewport: Viewport);

    /// Executes one frame of commands in order.
    fn draw(&mut self, commands: &[RenderCommand]);
}

/// Collects commands for one frame.
#[derive(Debug, Default)]
pub struct FrameRenderer {
    commands: Vec<RenderCommand>,
}

impl FrameRenderer {
    /// Creates a renderer sized for `capacity` commands per frame.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Commands recorded since `begin_frame`.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }
}

/// Surface that keeps the last frame in memory.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    viewport: Viewport,
    last_frame: Vec<RenderCommand>,
    frames_drawn: u64,
    resize_count: u64,
}

impl RecordingSurface {
    /// Creates a recording surface of the given size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Commands of the most recent frame.
    #[must_use]
    pub fn last_frame(&self) -> &[RenderCommand] {
        &self.last_frame
    }

    /// Number of frames drawn.
    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Number of resizes applied.
    #[must_use]
    pub fn resize_count(&self) -> u64 {
        self.resize_count
    }

    /// Circles in the last frame.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.last_frame
            .iter()
            .filter(|c| matches!(c, RenderCommand::FillCircle { .. }))
            .count()
    }

    /// Lines in the last frame.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.last_frame
            .iter()
            .filter(|c| matches!(c, RenderCommand::StrokeLine { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.last_frame.clear();
        self.resize_count += 1;
    }

    fn draw(&mut self, commands: &[RenderCommand]) {
        self.last_frame.clear();
        self.last_frame.extend_from_slice(commands);
        self.frames_drawn += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_frame() {
        let mut renderer = FrameRenderer::with_capacity(8);

        renderer.begin_frame();
        renderer.push(RenderCommand::Clear {
            viewport: Viewport::new(100, 50),
        });
        assert_eq!(renderer.commands().len(), 1);

        renderer.begin_frame();
        assert!(renderer.commands().is_empty());
    }

    #[test]
    fn test_recording_surface() {
        let mut surface = RecordingSurface::new(Viewport::new(800, 600));
        let frame = [
            RenderCommand::Clear {
                viewport: Viewport::new(800, 600),
            },
            RenderCommand::FillCircle {
                center: Vec2::new(1.0, 1.0),
                radius: 3.0,
                color: Color::WHITE,
            },
        ];

        surface.draw(&frame);
        assert_eq!(surface.frames_drawn(), 1);
        assert_eq!(surface.circle_count(), 1);
        assert_eq!(surface.line_count(), 0);

        surface.resize(Viewport::new(1024, 768));
        assert_eq!(surface.viewport(), Viewport::new(1024, 768));
        assert!(surface.last_frame().is_empty());
    }
}
