use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::health::HealthResponse;
use crate::application::dto::PortDto;

/// OpenAPI specification for the ports API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Port Store API",
        version = "1.0.0",
        description = "In-memory store of geographic port records"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::ports::get_port_handler,
        crate::api::handlers::ports::create_port_handler,
        crate::api::handlers::ports::update_port_handler,
    ),
    components(
        schemas(PortDto, HealthResponse)
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "ports", description = "Port record operations")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
