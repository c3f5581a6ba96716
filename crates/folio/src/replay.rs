//! # Headless Trail Replay
//!
//! Drives the backdrop without a browser:
//!
//! ```text
//! producer thread                       frame loop
//! ┌──────────────────────┐   channel   ┌──────────────────────────┐
//! │ synthetic pointer    │────────────>│ ParticleBackdrop         │
//! │ path + frame ticks   │             │   + RecordingSurface     │
//! │ + one resize         │             │ ReplayStats per frame    │
//! └──────────────────────┘             └──────────────────────────┘
//! ```
//!
//! Time is simulated, so a replay with a fixed seed is reproducible.

use std::thread;

use folio_core::{FieldConfig, FieldStats, ParticleField};
use folio_shared::{InputEvent, Vec2, Viewport};
use folio_ui::{FrameReport, ParticleBackdrop, RecordingSurface};

use crate::events::{EventBus, EventSender};

/// Simulated display refresh (ms).
pub const FRAME_INTERVAL_MS: f64 = 16.0;

/// Simulated pointer event spacing (ms). Below the spawn throttle on purpose.
pub const POINTER_INTERVAL_MS: f64 = 8.0;

/// Frames between two progress log lines (one simulated second).
pub const LOG_EVERY_FRAMES: u64 = 60;

/// Events in flight between producer and frame loop.
const CHANNEL_CAPACITY: usize = 256;

/// Replay parameters.
#[derive(Clone, Debug)]
pub struct ReplayConfig {
    /// Frames to run.
    pub frames: u64,
    /// Sampler seed.
    pub seed: u64,
    /// Starting viewport.
    pub viewport: Viewport,
    /// Field tuning.
    pub field: FieldConfig,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            seed: 0x00F0_110F,
            viewport: Viewport::new(1280, 720),
            field: FieldConfig::default(),
        }
    }
}

/// Pointer position at `t_ms`: a Lissajous sweep across the viewport.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn pointer_at(viewport: Viewport, t_ms: f64) -> Vec2 {
    let t = t_ms / 1000.0;
    let half_w = f64::from(viewport.width) / 2.0;
    let half_h = f64::from(viewport.height) / 2.0;
    Vec2::new(
        (half_w + 0.8 * half_w * (t * 1.3).sin()) as f32,
        (half_h + 0.8 * half_h * (t * 2.1).cos()) as f32,
    )
}

/// Emits the replay's events in time order, then hangs up.
///
/// Halfway through, the viewport is resized once.
#[allow(clippy::cast_precision_loss)]
pub fn produce(sender: &EventSender, config: &ReplayConfig) {
    let end_ms = config.frames as f64 * FRAME_INTERVAL_MS;
    let resize_at = end_ms / 2.0;
    let resized = Viewport::new(config.viewport.width * 3 / 4, config.viewport.height);

    let mut next_pointer = 0.0;
    let mut resize_sent = false;

    for frame in 1..=config.frames {
        let frame_at = frame as f64 * FRAME_INTERVAL_MS;

        while next_pointer < frame_at {
            let viewport = if resize_sent { resized } else { config.viewport };
            let event = InputEvent::PointerMove {
                position: pointer_at(viewport, next_pointer),
                at_ms: next_pointer,
            };
            if !sender.send_blocking(event) {
                return;
            }
            next_pointer += POINTER_INTERVAL_MS;
        }

        if !resize_sent && frame_at >= resize_at {
            resize_sent = true;
            let event = InputEvent::Resize {
                viewport: resized,
                at_ms: frame_at - 1.0,
            };
            if !sender.send_blocking(event) {
                return;
            }
        }

        if !sender.send_blocking(InputEvent::Frame { at_ms: frame_at }) {
            return;
        }
    }
}

/// Per-replay frame statistics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplayStats {
    /// Frames processed.
    pub frames: u64,
    /// Largest particle count seen after a frame.
    pub peak_particles: usize,
    /// Largest link count seen in a frame.
    pub peak_links: usize,
    /// Links drawn in total.
    pub total_links: u64,
    /// Resizes applied.
    pub resizes: u64,
}

impl ReplayStats {
    /// Records one frame.
    pub fn record(&mut self, report: &FrameReport, particles: usize) {
        self.frames += 1;
        self.peak_particles = self.peak_particles.max(particles);
        if let Some(painted) = report.painted {
            self.peak_links = self.peak_links.max(painted.links);
            self.total_links += painted.links as u64;
        }
        if report.resized.is_some() {
            self.resizes += 1;
        }
    }

    /// Mean links per frame.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_links(&self) -> f64 {
        if self.frames == 0 {
            return 0.0;
        }
        self.total_links as f64 / self.frames as f64
    }
}

/// Result of a finished replay.
#[derive(Debug)]
pub struct ReplaySummary {
    /// Frame statistics.
    pub stats: ReplayStats,
    /// Field counters at the end.
    pub field: FieldStats,
    /// The surface, holding the last frame.
    pub surface: RecordingSurface,
}

/// Runs a replay: a producer thread feeds the frame loop over a channel.
#[must_use]
pub fn run(config: &ReplayConfig) -> ReplaySummary {
    let (sender, receiver) = EventBus::new(CHANNEL_CAPACITY).split();

    let producer = {
        let config = config.clone();
        thread::spawn(move || produce(&sender, &config))
    };

    let field = ParticleField::with_seed(config.field.clone(), config.seed);
    let mut backdrop = ParticleBackdrop::new(field, true);
    backdrop.mount(RecordingSurface::default(), config.viewport);

    let mut stats = ReplayStats::default();
    while let Some(event) = receiver.recv() {
        let Some(report) = backdrop.handle(event) else {
            continue;
        };
        stats.record(&report, backdrop.field().len());

        if stats.frames % LOG_EVERY_FRAMES == 0 {
            let field = backdrop.field().stats();
            tracing::info!(
                frame = stats.frames,
                particles = backdrop.field().len(),
                links = report.painted.map_or(0, |p| p.links),
                spawned = field.spawned,
                throttled = field.throttled,
                evicted = field.evicted,
                "replay progress"
            );
        }
    }

    if producer.join().is_err() {
        tracing::error!("pointer producer panicked");
    }

    let field = backdrop.field().stats();
    let surface = backdrop.shutdown().unwrap_or_default();
    ReplaySummary {
        stats,
        field,
        surface,
    }
}
