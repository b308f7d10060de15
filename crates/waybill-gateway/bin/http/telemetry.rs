use crate::cli::LogFormatArg;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Installs the global tracing subscriber. `RUST_LOG` overrides the level.
pub fn init(format: LogFormatArg) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormatArg::Text => registry.with(fmt::layer()).init(),
        LogFormatArg::Json => registry.with(fmt::layer().json()).init(),
    }
}
