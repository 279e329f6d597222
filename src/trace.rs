//! Tracing setup for binaries and tests.
//!
//! The library only emits `tracing` events; nothing is printed until a
//! subscriber is installed.

/// Install a fmt subscriber with thread ids, thread names and uptime stamps.
///
/// The filter comes from `RUST_LOG` and defaults to `nmqueue=info`. Calling
/// this more than once is harmless, so every test may call it.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nmqueue=info"));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_file(false)
                .with_line_number(false)
                .with_timer(fmt::time::uptime()),
        )
        .with(filter)
        .try_init();
}
