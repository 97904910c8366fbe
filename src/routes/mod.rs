pub mod auth;
pub mod health;
pub mod trips;

use axum::routing::{get, patch, post};
use axum::Router;

use crate::AppState;

/// All `/api` routes. Auth routes are open; everything else sits behind
/// the bearer middleware.
pub fn api_router() -> Router<AppState> {
    let open = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login));

    let protected = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/trips", get(trips::list_trips).post(trips::create_trip))
        .route("/api/trips/my", get(trips::my_trips))
        .route("/api/trips/:id/match", patch(trips::toggle_match))
        .route_layer(axum::middleware::from_fn(
            crate::middleware::auth::require_bearer_auth,
        ));

    open.merge(protected)
}
