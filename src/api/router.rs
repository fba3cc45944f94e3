use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

use crate::api::handlers::{
    create_port_handler, get_port_handler, health_handler, update_port_handler,
};
use crate::api::openapi::swagger_ui;
use crate::application::use_cases::{CreatePortUseCase, GetPortUseCase, UpdatePortUseCase};

/// Application state container
pub struct AppState {
    pub create_use_case: Arc<CreatePortUseCase>,
    pub get_use_case: Arc<GetPortUseCase>,
    pub update_use_case: Arc<UpdatePortUseCase>,
    /// Upper bound for request bodies
    pub max_body_bytes: usize,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/v1/ports/{id}",
            get(get_port_handler).with_state(state.get_use_case),
        )
        .route(
            "/api/v1/ports/{id}",
            post(create_port_handler).with_state(state.create_use_case),
        )
        .route(
            "/api/v1/ports/{id}",
            put(update_port_handler).with_state(state.update_use_case),
        )
        .merge(swagger_ui())
        .layer(RequestBodyLimitLayer::new(state.max_body_bytes))
}
