// src/routes.rs

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::{AppState, Config}, docs::ApiDoc, handlers};

/// Monta o router com todas as rotas e middlewares.
pub fn create_router(app_state: AppState, config: &Config) -> Router {
    let warehouse_routes = Router::new()
        .route(
            "/warehouses",
            get(handlers::warehouses::list_warehouses)
                .post(handlers::warehouses::create_warehouse),
        )
        .route(
            "/warehouses/{id}",
            get(handlers::warehouses::get_warehouse)
                .put(handlers::warehouses::update_warehouse)
                .delete(handlers::warehouses::delete_warehouse),
        )
        .route(
            "/warehouses/{id}/inventories",
            get(handlers::warehouses::list_warehouse_inventories),
        );

    let inventory_routes = Router::new()
        .route(
            "/inventories",
            get(handlers::inventories::list_inventories)
                .post(handlers::inventories::create_inventory),
        )
        .route(
            "/inventories/{id}",
            get(handlers::inventories::get_inventory)
                .put(handlers::inventories::update_inventory)
                .delete(handlers::inventories::delete_inventory),
        );

    // Combina tudo no router principal
    Router::new()
        .route("/", get(root))
        .merge(warehouse_routes)
        .merge(inventory_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Qualquer outro caminho é servido da pasta de arquivos estáticos
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(build_timeout_layer(config))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config))
        .with_state(app_state)
}

// Requisição que passa do limite recebe 408, sem corpo.
fn build_timeout_layer(config: &Config) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, config.request_timeout)
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}

async fn root() -> &'static str {
    "HELLO WORLD"
}
