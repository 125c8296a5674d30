use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The filter for the given level. `RUST_LOG` is already folded into the level by the CLI,
/// so the environment is not read again here.
pub fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::new(level)
}

/// Installs the global subscriber: fmt output filtered at `level`, written through
/// indicatif so progress bars stay intact.
pub fn init_tracing(level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(log_filter(level))
        .with(fmt::layer().with_writer(indicatif_layer.get_stderr_writer()).with_target(false))
        .with(indicatif_layer)
        .try_init()
}
