//! Proximity links between live particles.

use folio_shared::Vec2;

use super::particle::Particle;

/// A line between two particles closer than the link distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Index of the first particle in the active set
    pub a: usize,
    /// Index of the second particle (`b > a`)
    pub b: usize,
    /// Start point
    pub from: Vec2,
    /// End point
    pub to: Vec2,
    /// Euclidean distance between the two
    pub distance: f32,
    /// Stroke alpha
    pub alpha: f32,
}

/// Alpha of a link: fades linearly with distance and with both lives.
///
/// `(1 - distance / max_distance) * life_a * life_b * scale`
#[inline]
#[must_use]
pub fn link_alpha(distance: f32, max_distance: f32, life_a: f32, life_b: f32, scale: f32) -> f32 {
    (1.0 - distance / max_distance) * life_a * life_b * scale
}

/// Enumerates every unordered pair closer than `max_distance`.
///
/// Quadratic in the set size, which the field caps.
pub(crate) fn sweep(
    particles: &[Particle],
    max_distance: f32,
    scale: f32,
) -> impl Iterator<Item = Link> + '_ {
    (0..particles.len()).flat_map(move |a| {
        ((a + 1)..particles.len()).filter_map(move |b| {
            let pa = &particles[a];
            let pb = &particles[b];
            let distance = pa.position.distance(pb.position);
            (distance < max_distance).then(|| Link {
                a,
                b,
                from: pa.position,
                to: pb.position,
                distance,
                alpha: link_alpha(distance, max_distance, pa.life, pb.life, scale),
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ParticleId;

    fn at(id: u64, x: f32, y: f32) -> Particle {
        Particle::new(ParticleId(id), Vec2::new(x, y), Vec2::ZERO, 3.0)
    }

    #[test]
    fn test_alpha_formula() {
        let alpha = link_alpha(100.0, 150.0, 1.0, 1.0, 0.5);
        assert!((alpha - 0.166_666_67).abs() < 1e-5);

        // Touching full-life particles hit the scale ceiling
        assert!((link_alpha(0.0, 150.0, 1.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
        // Fading particles fade the link
        assert!((link_alpha(0.0, 150.0, 0.5, 0.5, 0.5) - 0.125).abs() < 1e-6);
    }

    #[test]
    fn test_threshold_is_strict() {
        let particles = [at(0, 0.0, 0.0), at(1, 150.0, 0.0), at(2, 0.0, 149.0)];
        let links: Vec<Link> = sweep(&particles, 150.0, 0.5).collect();

        // 0-1 is exactly 150 apart: no link. 0-2 is 149: linked.
        // 1-2 is ~212: no link.
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 2));
        assert!(links[0].alpha > 0.0);
    }

    #[test]
    fn test_pair_count_at_cap() {
        // 26 particles on top of each other: every pair links
        let particles: Vec<Particle> = (0..26).map(|i| at(i, 5.0, 5.0)).collect();
        assert_eq!(sweep(&particles, 150.0, 0.5).count(), 325);
    }
}
