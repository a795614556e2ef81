use hueshift_server::{build_router, start_server, telemetry, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = ServerConfig::from_env()?;
    telemetry::init_tracing();

    let state = AppState::new(config.clone())?;
    let router = build_router(state);

    start_server(&config, router).await
}
