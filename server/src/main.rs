#![recursion_limit = "256"]

mod config;
mod llm;
mod routes;
mod services;
mod state;

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Chat is optional: a missing provider key disables it instead of aborting.
    let llm_client: Option<Arc<dyn llm::LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(provider = client.provider(), model = llm::LlmChat::model(&client), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured, chat disabled");
            None
        }
    };

    let context = services::assistant::load_context(&config.data_dir).await;
    let system_prompt = services::assistant::build_system_prompt(&context);
    let state = state::AppState::new(config.data_dir.clone(), llm_client, system_prompt);

    let app = match routes::leptos_app(state, &config.allowed_origins) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            return ExitCode::FAILURE;
        }
    };

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%addr, data_dir = %config.data_dir.display(), "folio listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
