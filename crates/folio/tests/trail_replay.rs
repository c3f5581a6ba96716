//! Headless replay through the producer/consumer channel.

use folio::core::FieldConfig;
use folio::replay::{self, ReplayConfig};
use folio::shared::Viewport;
use folio::ui::Surface;

fn config(frames: u64, seed: u64) -> ReplayConfig {
    ReplayConfig {
        frames,
        seed,
        viewport: Viewport::new(1280, 720),
        field: FieldConfig::default(),
    }
}

#[test]
fn test_replay_respects_cap_and_applies_resize() {
    let summary = replay::run(&config(300, 1));

    assert_eq!(summary.stats.frames, 300);
    assert!(summary.stats.peak_particles <= 26);
    assert!(summary.stats.peak_links <= 325);
    assert_eq!(summary.stats.resizes, 1);
    assert_eq!(summary.surface.viewport(), Viewport::new(960, 720));

    // Pointer every 8 ms against a 40 ms throttle
    assert!(summary.field.throttled > summary.field.spawned);
    assert!(summary.field.evicted > 0);
}

#[test]
fn test_replay_is_reproducible() {
    let a = replay::run(&config(120, 9));
    let b = replay::run(&config(120, 9));

    assert_eq!(a.stats, b.stats);
    assert_eq!(a.field, b.field);
    assert_eq!(a.surface.last_frame(), b.surface.last_frame());
}

#[test]
fn test_zero_frames() {
    let summary = replay::run(&config(0, 2));
    assert_eq!(summary.stats.frames, 0);
    assert_eq!(summary.field.spawned, 0);
}
