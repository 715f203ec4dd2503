//! Diagnostic logging for the command-line driver.
//!
//! Engine transitions are traced at `debug`, non-finite results at `warn`.
//! `RUST_LOG` takes precedence over the level passed in:
//!
//! ```bash
//! RUST_LOG=keycalc=debug keycalc 7 / 0 =
//! ```

use std::sync::Once;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Install the stderr subscriber.
///
/// Only the first call takes effect. `level` is any `EnvFilter` directive
/// string such as `warn` or `keycalc=debug`.
pub fn init(level: &str) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
