use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global fmt subscriber. `RUST_LOG` wins when set; otherwise
/// this crate and the HTTP trace layer log at `default_level`.
pub fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive(default_level))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn default_directive(level: &str) -> String {
    format!("{}={level},tower_http={level}", env!("CARGO_CRATE_NAME"))
}
