use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Installs the stderr subscriber used by every solution binary.
///
/// `RUST_LOG` overrides the default `info` filter. Spans report their busy
/// and idle time when they close, which is how reading and solving are timed.
///
/// ```bash
/// RUST_LOG=aoc2025_day_4=debug cargo run --bin part2
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::CLOSE)
                .compact(),
        )
        .init();
}
