use axum::{
    routing::{get, post},
    Router,
};
use cp2k_xml_service::{api, state::AppState, Config};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting CP2K input transformer service...");

    let config = Config::load()?;
    tracing::info!("Serving schemas from {}", config.schemas.dir.display());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - POST /:template_id/transform");
    tracing::info!("  - GET  /verify");

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/:template_id/transform", post(api::transform_input_file))
        .route("/verify", get(api::verify))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cp2k_xml_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
