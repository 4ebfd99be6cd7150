use std::sync::Arc;

use cliq_brief::cliq::CliqClient;
use cliq_brief::config::AppConfig;
use cliq_brief::llm::OpenAiClient;
use cliq_brief::pipeline::DocumentPipeline;
use cliq_brief::server::app_routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env()?;

    eprintln!("📄 Cliq Brief v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!("   Webhook: http://0.0.0.0:{}/cliq/webhook", config.port);
    match &config.default_channel {
        Some(channel) => eprintln!("   Default channel: {channel}"),
        None => eprintln!("   Default channel: none (events must carry one)"),
    }

    let llm = Arc::new(OpenAiClient::new(
        config.openai_api_key.clone(),
        config.openai_api_base.clone(),
        config.model.clone(),
    ));
    let cliq = Arc::new(CliqClient::new(
        config.cliq_token.clone(),
        config.cliq_api_base.clone(),
    ));
    let pipeline = Arc::new(DocumentPipeline::new(
        llm,
        cliq,
        config.default_channel.clone(),
    ));

    let app = app_routes(pipeline);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "Server started");
    axum::serve(listener, app).await?;

    Ok(())
}
