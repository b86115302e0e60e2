use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::user::{Model as UserModel, Role};
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::auth::generate_jwt;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 64, message = "Username must be 3 to 64 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Optional requested role; defaults to `student`. `admin` cannot be
    /// self-assigned.
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub token: String,
    pub expires_at: String,
}

impl UserResponse {
    fn from_user(user: UserModel) -> Self {
        let (token, expires_at) = generate_jwt(user.id, user.role);
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role.to_string(),
            token,
            expires_at,
        }
    }
}

/// POST /auth/register
///
/// Register a new user and return a signed JWT.
///
/// ### Responses
/// - `201 Created` with the user profile and token
/// - `400 Bad Request` (validation failure, or an attempt to register as admin)
/// - `409 Conflict` (duplicate username or email)
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<UserResponse>::error(format_validation_errors(
                &validation_errors,
            ))),
        );
    }

    let role = req.role.unwrap_or(Role::Student);
    if role == Role::Admin {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<UserResponse>::error(
                "Admin accounts cannot be self-registered",
            )),
        );
    }

    let db = app_state.db();

    match UserModel::get_by_email(db, &req.email).await {
        Ok(Some(_)) => {
            return (
                StatusCode::CONFLICT,
                Json(ApiResponse::<UserResponse>::error(
                    "A user with this email already exists",
                )),
            );
        }
        Ok(None) => {}
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UserResponse>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    }

    if let Ok(Some(_)) = UserModel::get_by_username(db, &req.username).await {
        return (
            StatusCode::CONFLICT,
            Json(ApiResponse::<UserResponse>::error(
                "A user with this username already exists",
            )),
        );
    }

    match UserModel::create(db, &req.username, &req.email, &req.password, role).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                UserResponse::from_user(user),
                "User registered successfully",
            )),
        ),
        // The pre-checks race against concurrent registrations; the unique
        // indexes have the final say.
        Err(e) => {
            let msg = e.to_string();
            if msg.contains("users.email") {
                (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<UserResponse>::error(
                        "A user with this email already exists",
                    )),
                )
            } else if msg.contains("users.username") {
                (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<UserResponse>::error(
                        "A user with this username already exists",
                    )),
                )
            } else {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<UserResponse>::error(format!(
                        "Database error: {msg}"
                    ))),
                )
            }
        }
    }
}

/// POST /auth/login
///
/// Verify credentials and return a signed JWT.
///
/// ### Responses
/// - `200 OK` with the user profile and token
/// - `401 Unauthorized` for an unknown username or wrong password (the two
///   cases are deliberately indistinguishable)
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<UserResponse>::error(format_validation_errors(
                &validation_errors,
            ))),
        );
    }

    let user = match UserModel::get_by_username(app_state.db(), &req.username).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<UserResponse>::error(
                    "Invalid username or password",
                )),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UserResponse>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    if !user.verify_password(&req.password) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<UserResponse>::error(
                "Invalid username or password",
            )),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            UserResponse::from_user(user),
            "Login successful",
        )),
    )
}
