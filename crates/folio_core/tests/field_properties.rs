//! Behavioural properties of the particle field.

use folio_core::{FieldConfig, ParticleField};
use folio_shared::Vec2;

fn field(seed: u64) -> ParticleField {
    ParticleField::with_seed(FieldConfig::default(), seed)
}

#[test]
fn test_cap_never_exceeded() {
    let mut field = field(1);
    let mut t = 0.0;
    for i in 0..500 {
        // Mix of throttled and accepted spawns, with frames in between
        t += if i % 3 == 0 { 10.0 } else { 45.0 };
        field.spawn(Vec2::new(i as f32, (i * 7 % 300) as f32), t);
        assert!(field.len() <= 26, "cap exceeded: {}", field.len());
        if i % 5 == 0 {
            field.advance();
            assert!(field.len() <= 26);
        }
    }
}

#[test]
fn test_decay_is_exact_per_frame() {
    let mut field = field(2);
    let id = field.spawn(Vec2::new(50.0, 50.0), 0.0).unwrap();

    let mut previous = field.get(id).unwrap().life;
    loop {
        field.advance();
        let Some(p) = field.get(id) else { break };
        assert!((previous - p.life - 0.012).abs() < 1e-6);
        assert!(p.life > 0.0, "dead particle still present");
        previous = p.life;
    }
    // Removed exactly when its life would drop to zero or below
    assert!(previous - 0.012 <= 0.0);
}

#[test]
fn test_everything_gone_after_84_frames() {
    let mut field = field(3);
    for i in 0..10 {
        field.spawn(Vec2::new(10.0 * i as f32, 0.0), f64::from(i) * 40.0);
    }
    assert_eq!(field.len(), 10);

    for _ in 0..84 {
        field.advance();
    }
    assert!(field.is_empty());
}

#[test]
fn test_throttle_pairs() {
    let mut close = field(4);
    close.spawn(Vec2::ZERO, 100.0);
    close.spawn(Vec2::ZERO, 139.0);
    assert_eq!(close.len(), 1);

    let mut apart = field(4);
    apart.spawn(Vec2::ZERO, 100.0);
    apart.spawn(Vec2::ZERO, 140.0);
    assert_eq!(apart.len(), 2);
}

#[test]
fn test_two_particles_one_link() {
    let mut field = field(5);
    field.insert(Vec2::new(0.0, 0.0), Vec2::ZERO, 3.0);
    field.insert(Vec2::new(100.0, 0.0), Vec2::ZERO, 3.0);

    let links: Vec<_> = field.links().collect();
    assert_eq!(links.len(), 1);
    assert!((links[0].alpha - 0.1667).abs() < 1e-4);
}

#[test]
fn test_link_alpha_bounded() {
    let mut field = field(6);
    for i in 0..26 {
        field.insert(Vec2::new(i as f32 * 3.0, i as f32 * 2.0), Vec2::ZERO, 3.0);
    }
    for _ in 0..40 {
        for link in field.links() {
            assert!(link.distance < 150.0);
            assert!((0.0..=0.5).contains(&link.alpha), "alpha {}", link.alpha);
        }
        field.advance();
    }
}

#[test]
fn test_rapid_burst_of_thirty() {
    let mut field = field(7);
    // 30 events 15ms apart: only those at least 40ms after the last accepted one spawn
    let accepted: Vec<f64> = (0..30)
        .map(|i| f64::from(i) * 15.0)
        .filter(|&t| field.spawn(Vec2::new(t as f32, 0.0), t).is_some())
        .collect();

    assert_eq!(accepted[0], 0.0);
    for pair in accepted.windows(2) {
        assert!(pair[1] - pair[0] >= 40.0);
    }
    // 0, 45, 90, ... 435: every third event
    assert_eq!(accepted.len(), 10);
    assert_eq!(field.len(), 10);
    assert!(field.len() <= 26);
}

#[test]
fn test_sustained_movement_saturates_at_cap() {
    let mut field = field(8);
    for i in 0..30 {
        field.spawn(Vec2::new(i as f32, 0.0), f64::from(i) * 40.0);
    }
    assert_eq!(field.len(), 26);
    assert_eq!(field.stats().evicted, 4);
}

#[test]
fn test_seeded_fields_agree() {
    let mut a = field(99);
    let mut b = field(99);
    for i in 0..20 {
        let t = f64::from(i) * 50.0;
        a.spawn(Vec2::new(1.0, 2.0), t);
        b.spawn(Vec2::new(1.0, 2.0), t);
        a.advance();
        b.advance();
    }
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn test_oversized_retained_still_capped() {
    let config = FieldConfig {
        retained: 100,
        ..FieldConfig::default()
    };
    assert!(config.validate().is_err());

    // Built directly, skipping validation
    let mut field = ParticleField::with_seed(config, 1);
    for i in 0..200 {
        field.spawn(Vec2::new(i as f32, 0.0), f64::from(i) * 40.0);
    }
    assert_eq!(field.len(), 26);
}
