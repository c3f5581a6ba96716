//! # Trail Replay
//!
//! Runs the particle backdrop headless over a synthetic pointer trail and
//! reports what it drew.
//!
//! ```bash
//! trail_replay --frames 1200 --seed 7
//! trail_replay --config tuning.toml
//! RUST_LOG=folio=debug trail_replay
//! ```
//!
//! NO browser, NO window. Frames go to a recording surface.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use folio::core::FieldConfig;
    use folio::replay::{self, ReplayConfig};
    use folio::ui::Surface;
    use tracing_subscriber::EnvFilter;

    const USAGE: &str = "usage: trail_replay [--frames N] [--seed S] [--config path.toml]";

    #[derive(Debug, Default)]
    struct Args {
        frames: Option<u64>,
        seed: Option<u64>,
        config: Option<PathBuf>,
    }

    fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
        let mut parsed = Args::default();
        while let Some(flag) = args.next() {
            let mut value = || args.next().ok_or_else(|| format!("{flag} needs a value"));
            match flag.as_str() {
                "--frames" => {
                    let v = value()?;
                    parsed.frames = Some(v.parse().map_err(|_| format!("bad frame count {v:?}"))?);
                }
                "--seed" => {
                    let v = value()?;
                    parsed.seed = Some(v.parse().map_err(|_| format!("bad seed {v:?}"))?);
                }
                "--config" => parsed.config = Some(PathBuf::from(value()?)),
                "-h" | "--help" => return Err(USAGE.into()),
                other => return Err(format!("unknown argument {other:?}\n{USAGE}")),
            }
        }
        Ok(parsed)
    }

    pub fn main() -> ExitCode {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt().with_env_filter(filter).init();

        let args = match parse_args(std::env::args().skip(1)) {
            Ok(args) => args,
            Err(message) => {
                eprintln!("{message}");
                return ExitCode::from(2);
            }
        };

        let field = match &args.config {
            Some(path) => match FieldConfig::load(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!(error = %e, "cannot use tuning file");
                    return ExitCode::FAILURE;
                }
            },
            None => FieldConfig::default(),
        };

        let defaults = ReplayConfig::default();
        let config = ReplayConfig {
            frames: args.frames.unwrap_or(defaults.frames),
            seed: args.seed.unwrap_or(defaults.seed),
            field,
            ..defaults
        };

        tracing::info!(frames = config.frames, seed = config.seed, "replay starting");
        let summary = replay::run(&config);

        println!("═══════════════════════════════════════════════════════════════════");
        println!("                       TRAIL REPLAY SUMMARY");
        println!("═══════════════════════════════════════════════════════════════════");
        println!("  Frames:           {}", summary.stats.frames);
        println!("  Spawned:          {}", summary.field.spawned);
        println!("  Throttled:        {}", summary.field.throttled);
        println!("  Evicted:          {}", summary.field.evicted);
        println!("  Expired:          {}", summary.field.expired);
        println!("  Peak particles:   {}", summary.stats.peak_particles);
        println!("  Peak links:       {}", summary.stats.peak_links);
        println!("  Avg links/frame:  {:.2}", summary.stats.avg_links());
        println!("  Resizes applied:  {}", summary.stats.resizes);
        println!(
            "  Final surface:    {}x{}",
            summary.surface.viewport().width,
            summary.surface.viewport().height
        );

        ExitCode::SUCCESS
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn args(list: &[&str]) -> Result<Args, String> {
            parse_args(list.iter().map(|s| (*s).to_owned()))
        }

        #[test]
        fn test_parse_flags() {
            let parsed = args(&["--frames", "90", "--seed", "3"]).unwrap();
            assert_eq!(parsed.frames, Some(90));
            assert_eq!(parsed.seed, Some(3));
            assert!(parsed.config.is_none());
        }

        #[test]
        fn test_parse_errors() {
            assert!(args(&["--frames"]).is_err());
            assert!(args(&["--frames", "many"]).is_err());
            assert!(args(&["--verbose"]).is_err());
        }
    }
}
