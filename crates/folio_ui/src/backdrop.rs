//! The particle backdrop component.
//!
//! Owns the field, the resize debouncer and the drawing surface. The host
//! (browser driver or replay tool) forwards pointer moves, resizes and frame
//! ticks; the backdrop never reports anything back.
//!
//! ```text
//! on_pointer_move ──> field.spawn (throttled)
//! on_resize ────────> debouncer.schedule
//! on_frame ─────────> debouncer.poll ──> surface.resize
//!                     field.advance
//!                     paint_field ─────> surface.draw
//! ```

use folio_core::{ParticleField, ParticleId};
use folio_shared::{InputEvent, Vec2, Viewport};

use crate::debounce::ResizeDebouncer;
use crate::paint::{paint_field, PaintCounts};
use crate::render::{FrameRenderer, Surface};
use crate::style::Palette;

/// What happened during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Size applied by the debouncer this frame.
    pub resized: Option<Viewport>,
    /// Particles retired this frame.
    pub expired: usize,
    /// What was painted, if a surface is mounted.
    pub painted: Option<PaintCounts>,
}

/// Lifetime counters of the component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackdropStats {
    /// Frames processed.
    pub frames: u64,
    /// Frames actually drawn.
    pub frames_drawn: u64,
    /// Resizes applied to the surface.
    pub resizes_applied: u64,
    /// Links drawn in total.
    pub links_drawn: u64,
}

/// Full-viewport decorative particle trail.
pub struct ParticleBackdrop<S: Surface> {
    field: ParticleField,
    surface: Option<S>,
    palette: Palette,
    debouncer: ResizeDebouncer,
    renderer: FrameRenderer,
    running: bool,
    stats: BackdropStats,
}

impl<S: Surface> ParticleBackdrop<S> {
    /// Creates an unmounted backdrop. Frames advance the field but draw nothing.
    #[must_use]
    pub fn new(field: ParticleField, dark: bool) -> Self {
        let config = field.config();
        let debouncer = ResizeDebouncer::new(config.resize_debounce_ms);
        // Clear + two circles per particle + every pair
        let max = config.max_particles();
        let renderer = FrameRenderer::with_capacity(1 + 2 * max + max * (max - 1) / 2);
        Self {
            field,
            surface: None,
            palette: Palette::for_dark(dark),
            debouncer,
            renderer,
            running: true,
            stats: BackdropStats::default(),
        }
    }

    /// Attaches a surface and sizes it to the viewport.
    pub fn mount(&mut self, mut surface: S, viewport: Viewport) {
        surface.resize(viewport);
        tracing::debug!(width = viewport.width, height = viewport.height, "backdrop mounted");
        self.surface = Some(surface);
    }

    /// True if a surface is attached.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// True until `shutdown` is called.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Switches between white (dark) and black (light) ink.
    pub fn set_dark(&mut self, dark: bool) {
        self.palette = Palette::for_dark(dark);
    }

    /// Current palette.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Pointer moved. Spawns a particle unless throttled or shut down.
    pub fn on_pointer_move(&mut self, position: Vec2, now_ms: f64) -> Option<ParticleId> {
        if !self.running {
            return None;
        }
        self.field.spawn(position, now_ms)
    }

    /// Viewport resized. Applied on the first frame after the debounce window.
    pub fn on_resize(&mut self, viewport: Viewport, now_ms: f64) {
        if !self.running {
            return;
        }
        self.debouncer.schedule(viewport, now_ms);
    }

    /// Display refresh: apply a due resize, advance, then paint.
    pub fn on_frame(&mut self, now_ms: f64) -> FrameReport {
        if !self.running {
            return FrameReport::default();
        }

        let resized = self.apply_due_resize(now_ms);
        let expired = self.field.advance().expired;
        let painted = self.paint();

        self.stats.frames += 1;
        if let Some(counts) = painted {
            self.stats.frames_drawn += 1;
            self.stats.links_drawn += counts.links as u64;
        }

        #[cfg(feature = "frame_trace")]
        tracing::trace!(
            particles = self.field.len(),
            expired,
            drawn = painted.is_some(),
            "frame"
        );

        FrameReport {
            resized,
            expired,
            painted,
        }
    }

    /// Dispatches a host event.
    pub fn handle(&mut self, event: InputEvent) -> Option<FrameReport> {
        match event {
            InputEvent::PointerMove { position, at_ms } => {
                self.on_pointer_move(position, at_ms);
                None
            }
            InputEvent::Resize { viewport, at_ms } => {
                self.on_resize(viewport, at_ms);
                None
            }
            InputEvent::Frame { at_ms } => Some(self.on_frame(at_ms)),
        }
    }

    /// Stops the component and hands the surface back.
    ///
    /// Afterwards every input and frame is ignored.
    pub fn shutdown(&mut self) -> Option<S> {
        if self.running {
            tracing::debug!(frames = self.stats.frames, "backdrop shut down");
        }
        self.running = false;
        self.debouncer.cancel();
        self.surface.take()
    }

    /// The particle field.
    #[must_use]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// The mounted surface.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Lifetime counters.
    #[must_use]
    pub fn stats(&self) -> BackdropStats {
        self.stats
    }

    fn apply_due_resize(&mut self, now_ms: f64) -> Option<Viewport> {
        let viewport = self.debouncer.poll(now_ms)?;
        // Without a surface there is nothing to size; the field is unaffected either way
        let surface = self.surface.as_mut()?;
        surface.resize(viewport);
        self.stats.resizes_applied += 1;
        Some(viewport)
    }

    fn paint(&mut self) -> Option<PaintCounts> {
        let surface = self.surface.as_mut()?;
        self.renderer.begin_frame();
        let counts = paint_field(
            &self.field,
            &self.palette,
            surface.viewport(),
            &mut self.renderer,
        );
        surface.draw(self.renderer.commands());
        Some(counts)
    }
}
