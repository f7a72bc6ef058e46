use hugo_server::{build_router, config::Config, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::load()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState::new(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Hugo Hotel API listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET    /api/rooms");
    tracing::info!("  - POST   /api/rooms");
    tracing::info!("  - GET    /api/rooms/:id");
    tracing::info!("  - PUT    /api/rooms/:id");
    tracing::info!("  - DELETE /api/rooms/:id");
    tracing::info!("  - GET    /api/rooms/:id/pdf");
    tracing::info!("  - GET    /health");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hugo_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
