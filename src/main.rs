use advisor_gateway::app::app;
use advisor_gateway::config;
use advisor_gateway::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up BACKEND_BASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!(
        "Starting Advisor Gateway in {:?} mode, backend at {}",
        config.environment,
        config.backend.base_url
    );

    let state = AppState::from_config(config)
        .unwrap_or_else(|e| panic!("invalid backend configuration: {}", e));

    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Advisor Gateway listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
