//! Logging configuration using tracing
//!
//! The library only emits events; installing a subscriber is left to the
//! binary. Level is controlled by the `LESSON_LOG` environment variable.
//!
//! ```bash
//! LESSON_LOG=debug lesson render notes.json
//! LESSON_LOG=lesson::lesson::i18n=trace lesson lang fr
//! ```

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "LESSON_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. Calling it twice is a no-op.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init();

    tracing::debug!("logging initialized");
}
