mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let state = state::AppState::from_config(&config).expect("http client init failed");
    tracing::info!(backend = %config.backend_url, timeout = ?config.proxy_timeout, "forwarding account endpoints");

    let app = routes::app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "voiceai listening");
    axum::serve(listener, app).await.expect("server failed");
}
