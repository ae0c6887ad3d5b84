//! Finquest server entry point
//!
//! Bootstrap order matters: configuration, tracing, then the one-time model
//! training pass before the listener accepts any traffic. A degenerate
//! training corpus aborts startup; after that no per-request failure exists.

use std::net::SocketAddr;

use finquest_advice::{Advisor, AdvisorOptions, ClassifierOptions};
use finquest_config::{load_settings, ModelConfig, Settings};
use finquest_server::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Priority: env vars > config/{env} > config/default > defaults
    let env = std::env::var("FINQUEST_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing();

    tracing::info!("Starting finquest server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        environment = ?settings.environment,
        config = env.as_deref().unwrap_or("default"),
        "Configuration loaded"
    );

    // One-time training pass; the trained model is immutable afterwards.
    let advisor = Advisor::train(&advisor_options(&settings.model))?;
    tracing::info!(
        vocabulary_size = advisor.vocabulary_size(),
        "Advice model ready"
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let router = create_router(AppState::new(advisor, settings));

    tracing::info!(%addr, "Listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn advisor_options(model: &ModelConfig) -> AdvisorOptions {
    AdvisorOptions {
        max_features: model.max_features,
        classifier: ClassifierOptions {
            max_iterations: model.max_iterations,
            learning_rate: model.learning_rate,
            convergence_tolerance: model.convergence_tolerance,
        },
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
