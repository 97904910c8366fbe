use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::dto::auth_dto::RegisterPayload;
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::crypto::{hash_password, verify_password};

const USER_COLUMNS: &str = "id, email, password_hash, first_name, last_name, phone, \
     whatsapp_consent, is_admin, created_at";

#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
}

impl AuthService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn register(&self, payload: RegisterPayload) -> Result<User> {
        let email = payload.email.trim().to_lowercase();

        // The field validators cannot see sibling fields, so the
        // email-similarity rule is enforced here.
        if let Some(local_part) = email.split('@').next() {
            if !local_part.is_empty() && payload.password.eq_ignore_ascii_case(local_part) {
                return Err(Error::BadRequest(
                    "The password is too similar to the email".to_string(),
                ));
            }
        }

        if self.find_by_email(&email).await?.is_some() {
            warn!(%email, "registration with already-used email");
            return Err(Error::BadRequest(
                "A user with this email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&payload.password)
            .map_err(|e| Error::Internal(format!("Password hashing failed: {}", e)))?;

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (email, password_hash, first_name, last_name, phone, whatsapp_consent)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&email)
        .bind(&password_hash)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.phone)
        .bind(payload.whatsapp_consent)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Unique violation closes the lookup/insert race above.
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code().as_deref() == Some("23505") {
                    return Error::BadRequest(
                        "A user with this email already exists".to_string(),
                    );
                }
            }
            Error::from(e)
        })?;

        info!(user_id = %user.id, email = %user.email, "user registered");
        Ok(user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let email = email.trim().to_lowercase();
        let user = match self.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                warn!(%email, "login with unknown email");
                return Err(Error::Unauthorized("Invalid credentials".to_string()));
            }
        };

        let ok = verify_password(password, &user.password_hash)
            .map_err(|e| Error::Internal(format!("Password verification failed: {}", e)))?;
        if !ok {
            warn!(user_id = %user.id, "login with wrong password");
            return Err(Error::Unauthorized("Invalid credentials".to_string()));
        }

        info!(user_id = %user.id, "user logged in");
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
