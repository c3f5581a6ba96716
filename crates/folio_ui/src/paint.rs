//! Turns the particle field into drawing commands.

use folio_core::ParticleField;
use folio_shared::Viewport;

use crate::render::{FrameRenderer, RenderCommand};
use crate::style::Palette;

/// What one painted frame contained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaintCounts {
    /// Particles drawn (two circles each).
    pub particles: usize,
    /// Links drawn.
    pub links: usize,
}

/// Paints one frame: clear, then glow + core per particle, then links.
///
/// Alphas scale with life, so a fading particle fades its links too.
pub fn paint_field(
    field: &ParticleField,
    palette: &Palette,
    viewport: Viewport,
    renderer: &mut FrameRenderer,
) -> PaintCounts {
    let config = field.config();
    let ink = palette.particle;

    renderer.push(RenderCommand::Clear { viewport });

    for p in field.particles() {
        renderer.push(RenderCommand::FillCircle {
            center: p.position,
            radius: p.size + config.glow_padding,
            color: ink.with_alpha(p.life * config.glow_alpha),
        });
        renderer.push(RenderCommand::FillCircle {
            center: p.position,
            radius: p.size,
            color: ink.with_alpha(p.life * config.core_alpha),
        });
    }

    let mut links = 0;
    for link in field.links() {
        renderer.push(RenderCommand::StrokeLine {
            from: link.from,
            to: link.to,
            color: ink.with_alpha(link.alpha),
            width: config.link_width,
        });
        links += 1;
    }

    PaintCounts {
        particles: field.len(),
        links,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use folio_core::FieldConfig;
    use folio_shared::Vec2;

    #[test]
    fn test_glow_and_core_circles() {
        let mut field = ParticleField::with_seed(FieldConfig::default(), 3);
        field.insert(Vec2::new(10.0, 20.0), Vec2::ZERO, 3.0);

        let mut renderer = FrameRenderer::default();
        let counts = paint_field(&field, &Palette::DARK, Viewport::new(100, 100), &mut renderer);
        assert_eq!(counts, PaintCounts { particles: 1, links: 0 });

        let commands = renderer.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[1],
            RenderCommand::FillCircle {
                center: Vec2::new(10.0, 20.0),
                radius: 5.0,
                color: Color::WHITE.with_alpha(0.2),
            }
        );
        assert_eq!(
            commands[2],
            RenderCommand::FillCircle {
                center: Vec2::new(10.0, 20.0),
                radius: 3.0,
                color: Color::WHITE.with_alpha(0.8),
            }
        );
    }

    #[test]
    fn test_light_mode_uses_black_ink() {
        let mut field = ParticleField::with_seed(FieldConfig::default(), 3);
        field.insert(Vec2::ZERO, Vec2::ZERO, 2.0);
        field.insert(Vec2::new(30.0, 40.0), Vec2::ZERO, 2.0);

        let mut renderer = FrameRenderer::default();
        paint_field(&field, &Palette::LIGHT, Viewport::new(100, 100), &mut renderer);

        let RenderCommand::StrokeLine { color, width, .. } = renderer.commands()[5] else {
            panic!("expected a link after the circles");
        };
        assert_eq!((color.r, color.g, color.b), (0.0, 0.0, 0.0));
        // distance 50: (1 - 50/150) * 0.5
        assert!((color.a - 1.0 / 3.0).abs() < 1e-5);
        assert_eq!(width, 1.2);
    }
}
