//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, user_handler};
use crate::domain::UserResponse;

/// OpenAPI documentation for the Dagym API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dagym API",
        version = "0.1.0",
        description = "User account API for the Dagym platform",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // User endpoints
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            UserResponse,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            user_handler::UpdateUserRequest,
        )
    ),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Users", description = "User record operations")
    )
)]
pub struct ApiDoc;
