//! User record handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::ValidatedBody;
use crate::api::AppState;
use crate::config::{MSG_MISSING_USER_ID, MSG_USER_SAVED};
use crate::domain::UserRecord;
use crate::errors::{AppError, AppResult, ErrorResponse};
use crate::types::{MessageResponse, NameResponse};

/// User creation request (JSON or form-encoded)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Unique user identifier
    #[serde(default)]
    #[validate(
        required(message = "id required"),
        length(min = 1, message = "id required")
    )]
    #[schema(example = "u1")]
    pub id: Option<String>,
    /// User display name
    #[serde(default)]
    #[validate(
        required(message = "name required"),
        length(min = 1, message = "name required")
    )]
    #[schema(example = "Alice")]
    pub name: Option<String>,
}

/// Query string for the legacy `/user?id=` lookup
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// User ID
    pub id: Option<String>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_user))
        .route("/get/:id", get(get_user_name))
        .route("/user", get(find_user))
        .route("/user/:id", get(get_user))
        .route("/users", get(list_users))
}

/// Store a new user record
#[utoipa::path(
    post,
    path = "/add",
    tag = "Users",
    request_body(
        content = CreateUserRequest,
        description = "Accepted as `application/json` or `application/x-www-form-urlencoded`"
    ),
    responses(
        (status = 200, description = "User saved", body = MessageResponse),
        (status = 400, description = "Missing field or user already exists", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn add_user(
    State(state): State<AppState>,
    ValidatedBody(payload): ValidatedBody<CreateUserRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .user_service
        .create_user(
            payload.id.unwrap_or_default(),
            payload.name.unwrap_or_default(),
        )
        .await?;

    Ok(Json(MessageResponse::new(MSG_USER_SAVED)))
}

/// Look up a user's name by ID
#[utoipa::path(
    get,
    path = "/get/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Stored name", body = NameResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn get_user_name(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<NameResponse>> {
    let user = state.user_service.get_user(&id).await?;
    Ok(Json(NameResponse { name: user.name }))
}

/// Look up a full user record by ID (deprecated alias of `/get/{id}`)
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Stored record", body = UserRecord),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserRecord>> {
    let user = state.user_service.get_user(&id).await?;
    Ok(Json(user))
}

/// Look up a full user record by `?id=` (deprecated alias of `/get/{id}`)
#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    params(UserQuery),
    responses(
        (status = 200, description = "Stored record", body = UserRecord),
        (status = 400, description = "Missing user id parameter", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn find_user(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<UserRecord>> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::validation(MSG_MISSING_USER_ID))?;

    let user = state.user_service.get_user(&id).await?;
    Ok(Json(user))
}

/// List all user records ordered by ID
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All stored records", body = Vec<UserRecord>),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserRecord>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}
