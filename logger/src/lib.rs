//! `tracing` logger setup for binaries and tests built on the Lightspark
//! crates.
//!
//! The library crates only emit events. Whoever owns `main` (or a test) picks
//! the subscriber; this crate provides the default one.
//!
//! Targets worth filtering on:
//!
//! | Target | Level | Event |
//! |---|---|---|
//! | `lightspark_objects::enums` | DEBUG | an enum value the decoder did not recognize, kept as `Undefined` |
//! | `lightspark_webhooks` | DEBUG | a webhook body parsed into an event |
//! | `lightspark_webhooks` | WARN | a webhook body rejected for a bad signature |
//!
//! Decode errors are never logged here; they are returned to the caller.

use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::{
    filter::Targets,
    layer::{Layer, SubscriberExt},
    util::{SubscriberInitExt, TryInitError},
};

/// Initialize a global `tracing` logger.
///
/// + The logger will print enabled `tracing` events and spans to stdout.
/// + The default log level includes INFO, WARN, and ERROR events.
/// + The default keeps webhook signature rejections (WARN) and hides the
///   per-event DEBUG logs of the decoder and webhook parser.
/// + Set `RUST_LOG` to a comma-separated `target=level` list to change that,
///   e.g. `RUST_LOG=info,lightspark_objects::enums=debug` to see which enum
///   values a newer API sent that this build does not know yet. Syntax:
///   <https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/targets/struct.Targets.html>
/// + An unparseable `RUST_LOG` falls back to the INFO default.
///
/// Panics if a logger is already initialized. This will fail if used in tests,
/// since multiple test threads will compete to set the global logger.
pub fn init() {
    try_init().expect("Failed to setup logger");
}

/// Use this to initialize the global logger in tests.
///
/// Does nothing unless `RUST_LOG` is set, so `cargo test` stays quiet by
/// default. Run e.g. `RUST_LOG=lightspark_webhooks=debug cargo test` to see a
/// test's events.
pub fn init_for_testing() {
    // Quickly skip logger setup if no env var set.
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    // Multiple tests race to set the global logger; only the first wins.
    let _ = try_init();
}

/// Try to initialize a global logger. Will return an `Err` if there is another
/// global logger already set.
pub fn try_init() -> Result<(), TryInitError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let stdout_log = tracing_subscriber::fmt::layer()
        .compact()
        .with_level(true)
        .with_target(true)
        .with_ansi(true)
        .with_filter(targets_filter(rust_log.as_deref()));

    tracing_subscriber::registry().with(stdout_log).try_init()
}

/// Parse a `RUST_LOG` value, falling back to INFO if it is unset or invalid.
fn targets_filter(rust_log: Option<&str>) -> Targets {
    rust_log
        .and_then(|rust_log| Targets::from_str(rust_log).ok())
        .unwrap_or_else(|| Targets::new().with_default(Level::INFO))
}

#[cfg(test)]
mod test {
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[test]
    fn default_filter_is_info() {
        let filter = targets_filter(None);
        assert_eq!(filter.default_level(), Some(LevelFilter::INFO));
        assert!(filter.would_enable("lightspark_objects", &Level::INFO));
        assert!(!filter.would_enable("lightspark_objects", &Level::DEBUG));
    }

    #[test]
    fn rust_log_targets() {
        let filter = targets_filter(Some("warn,lightspark_objects=debug"));
        let target = "lightspark_objects::enums";
        assert!(filter.would_enable(target, &Level::DEBUG));
        assert!(!filter.would_enable("lightspark_webhooks", &Level::INFO));
        assert!(filter.would_enable("lightspark_webhooks", &Level::WARN));
    }

    #[test]
    fn unparseable_rust_log_falls_back_to_info() {
        let filter = targets_filter(Some("lightspark_objects=loud"));
        assert_eq!(filter.default_level(), Some(LevelFilter::INFO));
        assert!(!filter.would_enable("lightspark_objects", &Level::DEBUG));
        assert!(filter.would_enable("lightspark_webhooks", &Level::WARN));
    }
}
