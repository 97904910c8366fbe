use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: usize,
    pub exp: usize,
    pub is_admin: bool,
}

/// Validates the bearer token and stashes the claims in request
/// extensions for handlers to pick up via `Extension<Claims>`.
pub async fn require_bearer_auth(mut req: Request, next: Next) -> Response {
    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message":"Missing authorization header"})),
        )
            .into_response();
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message":"Malformed authorization header"})),
        )
            .into_response();
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message":"Unsupported authorization scheme"})),
        )
            .into_response();
    };

    let config = crate::config::get_config();
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    match decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    ) {
        Ok(data) => {
            req.extensions_mut().insert(data.claims);
            next.run(req).await
        }
        Err(_) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message":"Invalid or expired token"})),
        )
            .into_response(),
    }
}

/// Handler-level admin gate. Lives here rather than as route middleware
/// because `/api/trips` mixes an admin-only GET with an open POST.
pub fn ensure_admin(claims: &Claims) -> Result<()> {
    if claims.is_admin {
        Ok(())
    } else {
        Err(Error::Forbidden("Admin access required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_admin_rejects_plain_users() {
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: 0,
            exp: usize::MAX,
            is_admin: false,
        };
        assert!(matches!(
            ensure_admin(&claims),
            Err(Error::Forbidden(_))
        ));
    }

    #[test]
    fn ensure_admin_allows_admins() {
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: 0,
            exp: usize::MAX,
            is_admin: true,
        };
        assert!(ensure_admin(&claims).is_ok());
    }
}
