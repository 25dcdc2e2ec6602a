//! ## linkstack-telemetry::logging
//! **Structured logging with `tracing`**
//!
//! `RUST_LOG` takes precedence over the configured default level.

use tracing::{debug, info_span};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global fmt subscriber. Later calls are ignored.
    pub fn init(default_level: &str) {
        let _ = fmt()
            .with_env_filter(Self::filter(default_level))
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::NONE)
            .try_init();
    }

    fn filter(default_level: &str) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    }

    /// Records that a word was longer than the stack could hold.
    pub fn log_truncation(word: &str, kept: usize, dropped: usize) {
        let span = info_span!("reverse", word = word);
        let _guard = span.enter();
        debug!(kept, dropped, "Capacity reached, input truncated");
    }
}
