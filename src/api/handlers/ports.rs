use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::warn;

use crate::api::errors::ApiError;
use crate::application::dto::PortDto;
use crate::application::use_cases::{CreatePortUseCase, GetPortUseCase, UpdatePortUseCase};

const PARSE_FAILURE: &str = "failed to parse input port's data";

fn parse_port(body: &[u8]) -> Result<PortDto, serde_json::Error> {
    serde_json::from_slice(body).inspect_err(|e| {
        warn!("failed to parse input port's data: {}", e);
    })
}

/// GET /api/v1/ports/{id}
/// Fetch a port by ID
#[utoipa::path(
    get,
    path = "/api/v1/ports/{id}",
    tag = "ports",
    params(
        ("id" = String, Path, description = "Port identifier")
    ),
    responses(
        (status = 200, description = "Port found", body = PortDto),
        (status = 404, description = "Port not found")
    )
)]
pub async fn get_port_handler(
    State(use_case): State<Arc<GetPortUseCase>>,
    Path(id): Path<String>,
) -> Result<Json<PortDto>, ApiError> {
    let port = use_case.execute(&id).await?;

    Ok(Json(port))
}

/// POST /api/v1/ports/{id}
/// Create a new port
#[utoipa::path(
    post,
    path = "/api/v1/ports/{id}",
    tag = "ports",
    params(
        ("id" = String, Path, description = "Port identifier")
    ),
    request_body = PortDto,
    responses(
        (status = 201, description = "Port created"),
        (status = 400, description = "Malformed or invalid port data"),
        (status = 409, description = "Port already exists")
    )
)]
pub async fn create_port_handler(
    State(use_case): State<Arc<CreatePortUseCase>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let request = parse_port(&body).map_err(|_| ApiError::bad_request(PARSE_FAILURE))?;

    use_case.execute(&id, request).await?;

    Ok(StatusCode::CREATED)
}

/// PUT /api/v1/ports/{id}
/// Replace an existing port
#[utoipa::path(
    put,
    path = "/api/v1/ports/{id}",
    tag = "ports",
    params(
        ("id" = String, Path, description = "Port identifier")
    ),
    request_body = PortDto,
    responses(
        (status = 200, description = "Port updated"),
        (status = 400, description = "Invalid port data"),
        (status = 404, description = "Port not found"),
        (status = 500, description = "Malformed port data")
    )
)]
pub async fn update_port_handler(
    State(use_case): State<Arc<UpdatePortUseCase>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    // Existing clients expect 500 for unparsable update bodies
    let request = parse_port(&body).map_err(|_| ApiError::internal_error(PARSE_FAILURE))?;

    use_case.execute(&id, request).await?;

    Ok(StatusCode::OK)
}
