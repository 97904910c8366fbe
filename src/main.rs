use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{routing::get, Router, ServiceExt};
use hoppin_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware, routes, AppState,
};
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::{normalize_path::NormalizePathLayer, services::ServeFile, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let logo_path: PathBuf = [config.media_dir.as_str(), "images", "logo.png"]
        .iter()
        .collect();
    info!("Serving logo from: {}", logo_path.display());

    let router = Router::new()
        .route("/health", get(routes::health::health))
        .merge(routes::api_router())
        .route_service("/images/logo.png", ServeFile::new(logo_path))
        .with_state(app_state)
        .layer(middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http());

    // The original URL scheme uses trailing slashes; accept both forms.
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, ServiceExt::<axum::extract::Request>::into_make_service(app)).await?;

    Ok(())
}
