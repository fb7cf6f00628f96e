//! parlor-server: hosts the conversation and intent endpoints.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use parlor::agents::Registry;
use parlor::config::Config;
use parlor::error::Result;
use parlor::intent::IntentClassifier;
use parlor::orchestrator::RunOrchestrator;
use parlor::provider::openai::OpenAiClient;
use parlor::server;
use parlor::service::ChatService;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging();

    let registry = match &config.agents_path {
        Some(path) => Registry::from_toml_path(path)?,
        None => Registry::default_pair(),
    };
    info!(agents = registry.agents().len(), "agent registry loaded");

    let client = Arc::new(OpenAiClient::from_config(&config));
    let orchestrator = RunOrchestrator::new(client.clone(), config.poll.clone());
    let classifier = IntentClassifier::new(client, config.classifier_model.clone());
    let service = Arc::new(ChatService::new(registry, orchestrator, classifier));

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!(bind = %config.bind, "parlor server listening");

    axum::serve(listener, server::router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("parlor server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
