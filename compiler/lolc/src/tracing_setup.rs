//! Tracing subscriber for the `lol` binary.
//!
//! Filter directives come from `LOL_LOG`, then `RUST_LOG`. With neither set
//! no subscriber is installed and library events cost nothing.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "LOL_LOG";

/// Install the stderr subscriber once per process.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = filter_directives() else {
            return;
        };
        let filter = EnvFilter::builder().parse_lossy(directives);
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}

fn filter_directives() -> Option<String> {
    [LOG_ENV, "RUST_LOG"]
        .into_iter()
        .find_map(|var| std::env::var(var).ok())
        .filter(|value| !value.trim().is_empty())
}
