//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::UserRecord;
use crate::errors::ErrorResponse;
use crate::types::{MessageResponse, NameResponse};

/// OpenAPI documentation for the user records service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Records",
        version = "0.1.0",
        description = "Store and look up user records keyed by a caller-supplied id",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::add_user,
        user_handler::get_user_name,
        user_handler::get_user,
        user_handler::find_user,
        user_handler::list_users,
    ),
    components(
        schemas(
            UserRecord,
            user_handler::CreateUserRequest,
            MessageResponse,
            NameResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Users", description = "User record storage and lookup")
    )
)]
pub struct ApiDoc;
