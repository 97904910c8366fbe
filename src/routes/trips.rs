use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::trip_dto::{CreateTripPayload, TripResponse};
use crate::error::Result;
use crate::middleware::auth::{ensure_admin, Claims};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/trips",
    responses(
        (status = 200, description = "All trips, newest first", body = Json<Vec<TripResponse>>),
        (status = 403, description = "Caller is not an admin")
    )
)]
#[axum::debug_handler]
pub async fn list_trips(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    ensure_admin(&claims)?;
    let trips = state.trip_service.list_all().await?;
    let items: Vec<TripResponse> = trips.into_iter().map(TripResponse::from).collect();
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/trips/my",
    responses(
        (status = 200, description = "Caller's trips, newest first", body = Json<Vec<TripResponse>>)
    )
)]
#[axum::debug_handler]
pub async fn my_trips(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let trips = state.trip_service.list_for_user(claims.sub).await?;
    let items: Vec<TripResponse> = trips.into_iter().map(TripResponse::from).collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/trips",
    request_body = CreateTripPayload,
    responses(
        (status = 201, description = "Trip created", body = Json<TripResponse>),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_trip(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateTripPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let trip = state.trip_service.create(claims.sub, payload).await?;
    Ok((StatusCode::CREATED, Json(TripResponse::from(trip))))
}

#[utoipa::path(
    patch,
    path = "/api/trips/{id}/match",
    params(
        ("id" = Uuid, Path, description = "Trip ID")
    ),
    responses(
        (status = 200, description = "Updated trip", body = Json<TripResponse>),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Trip not found")
    )
)]
#[axum::debug_handler]
pub async fn toggle_match(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    ensure_admin(&claims)?;
    let trip = state.trip_service.toggle_match(id).await?;
    Ok(Json(TripResponse::from(trip)))
}
