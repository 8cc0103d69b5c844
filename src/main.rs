mod api_doc;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use db::Db;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("item-service starting");

    let config = Config::from_env()?;
    config.log_startup();

    let db = Db::from_config(&config)?;
    db.ensure_schema().await?;

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        db,
        config: Arc::new(config),
    };

    let app = Router::new()
        .merge(SwaggerUi::new(routes::DOCS).url(routes::OPENAPI, ApiDoc::openapi()))
        .route(routes::ROOT, get(handlers::root_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(
            routes::ITEMS,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            routes::ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
