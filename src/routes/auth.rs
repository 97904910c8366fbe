use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::dto::auth_dto::{AuthUserResponse, LoginPayload, RegisterPayload, UserProfileResponse};
use crate::error::{Error, Result};
use crate::middleware::auth::Claims;
use crate::utils::token::issue_access_token;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "User created", body = Json<AuthUserResponse>),
        (status = 400, description = "Invalid payload or duplicate email")
    )
)]
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state.auth_service.register(payload).await?;
    let token = issue_access_token(&user)?;
    Ok((StatusCode::CREATED, Json(AuthUserResponse::new(user, token))))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Logged in", body = Json<AuthUserResponse>),
        (status = 400, description = "Missing email or password"),
        (status = 401, description = "Invalid credentials")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(Error::BadRequest(
            "Email and password are required".to_string(),
        ));
    }
    let user = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;
    let token = issue_access_token(&user)?;
    Ok(Json(AuthUserResponse::new(user, token)))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Caller profile", body = Json<UserProfileResponse>),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    // A valid token whose user row is gone is treated as unauthenticated.
    let user = state
        .auth_service
        .get_by_id(claims.sub)
        .await?
        .ok_or_else(|| Error::Unauthorized("User not found".to_string()))?;
    Ok(Json(UserProfileResponse::from(user)))
}
