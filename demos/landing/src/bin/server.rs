use axum::{Router, http::StatusCode, response::Html, routing::get};
use landing::config::ServerConfig;
use landing::{PageData, build_registry, page_shell};
use tower_http::services::ServeDir;

async fn index() -> Result<Html<String>, StatusCode> {
    let registry = build_registry();

    page_shell(&registry, &PageData::default())
        .map(Html)
        .map_err(|err| {
            tracing::error!(%err, "failed to render landing page");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    stencil::logging::init();

    let config = ServerConfig::from_env()?;

    let app = Router::new()
        .route("/", get(index))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, pkg_dir = %config.pkg_dir.display(), "landing server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
