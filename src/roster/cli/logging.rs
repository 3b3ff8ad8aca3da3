//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Library code logs through `tracing` macros; the binary decides where it
//! goes. Output is stderr so it never mixes with command output.
//!
//! - default: `warn`
//! - `-v`: `debug`
//! - `-vv`: `trace`
//!
//! `RUST_LOG` overrides the flag-derived level.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init_logging(verbose: u8) {
    let level = level_for_verbosity(verbose);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,roster={level}",
            level = level.as_str().to_lowercase()
        ))
    });

    let layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // A second init (e.g. in tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
