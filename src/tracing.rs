use std::io;
use tracing::Level;
use tracing_subscriber::{filter, fmt, prelude::*, EnvFilter};

pub fn start_fasplit_tracing_subscriber() {
    // Progress and per-part summaries go to stdout
    //   - INFO messages are always logged
    //   - If RUST_LOG=debug, DEBUG messages (one per split step and written file) are included
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_log = fmt::layer().with_target(false);

    // Warnings and errors go to stderr only
    let stderr_log = fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(env_filter)
                .with_filter(filter::filter_fn(|metadata| {
                    *metadata.level() >= Level::INFO
                })),
        )
        .with(stderr_log.with_filter(filter::LevelFilter::WARN))
        .init()
}
