// src/logging.rs
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Console logging. `RUST_LOG` wins when set; otherwise everything else is
/// held at `warn` and this crate logs at `level`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("warn,arkhived={level}")))
        .unwrap_or_else(|_| EnvFilter::new("warn,arkhived=info"));

    let console = fmt::layer().with_target(false);

    if tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .try_init()
        .is_err()
    {
        tracing::warn!("logging was already initialised");
    }
}
