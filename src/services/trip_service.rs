use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::trip_dto::CreateTripPayload;
use crate::error::{Error, Result};
use crate::models::trip::TripWithOwner;

const TRIP_WITH_OWNER_COLUMNS: &str = "t.id, t.user_id, t.role, t.departure_location, t.arrival_location, \
     t.date, t.arrival_time, t.recurrence, t.recurring_days, t.is_matched, \
     t.created_at, t.updated_at, \
     u.first_name AS owner_first_name, u.last_name AS owner_last_name, \
     u.email AS owner_email, u.phone AS owner_phone";

#[derive(Clone)]
pub struct TripService {
    pool: PgPool,
}

impl TripService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a trip owned by `owner_id`. The owner always comes from
    /// the authenticated request, never from the payload.
    pub async fn create(&self, owner_id: Uuid, payload: CreateTripPayload) -> Result<TripWithOwner> {
        let recurring_days = payload.recurring_days.map(Json);
        let trip_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO trips (
                user_id, role, departure_location, arrival_location,
                date, arrival_time, recurrence, recurring_days
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(owner_id)
        .bind(payload.role)
        .bind(&payload.departure_location)
        .bind(&payload.arrival_location)
        .bind(payload.date)
        .bind(payload.arrival_time)
        .bind(payload.recurrence)
        .bind(recurring_days)
        .fetch_one(&self.pool)
        .await?;

        info!(%trip_id, user_id = %owner_id, "trip created");
        let trip = self
            .get_by_id(trip_id)
            .await?
            .ok_or_else(|| Error::NotFound("Trip not found".to_string()))?;
        Ok(trip)
    }

    /// Every trip in the system, newest first. Callers gate this on the
    /// admin role.
    pub async fn list_all(&self) -> Result<Vec<TripWithOwner>> {
        let trips = sqlx::query_as::<_, TripWithOwner>(&format!(
            r#"
            SELECT {TRIP_WITH_OWNER_COLUMNS}
            FROM trips t
            JOIN users u ON u.id = t.user_id
            ORDER BY t.created_at DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(trips)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<TripWithOwner>> {
        let trips = sqlx::query_as::<_, TripWithOwner>(&format!(
            r#"
            SELECT {TRIP_WITH_OWNER_COLUMNS}
            FROM trips t
            JOIN users u ON u.id = t.user_id
            WHERE t.user_id = $1
            ORDER BY t.created_at DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(trips)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<TripWithOwner>> {
        let trip = sqlx::query_as::<_, TripWithOwner>(&format!(
            r#"
            SELECT {TRIP_WITH_OWNER_COLUMNS}
            FROM trips t
            JOIN users u ON u.id = t.user_id
            WHERE t.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(trip)
    }

    /// Flips `is_matched` in place. Concurrent toggles are last-write-wins;
    /// no ordering is promised.
    pub async fn toggle_match(&self, id: Uuid) -> Result<TripWithOwner> {
        let trip = sqlx::query_as::<_, TripWithOwner>(&format!(
            r#"
            UPDATE trips t
            SET is_matched = NOT t.is_matched, updated_at = now()
            FROM users u
            WHERE t.id = $1 AND u.id = t.user_id
            RETURNING {TRIP_WITH_OWNER_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Trip not found".to_string()))?;

        info!(trip_id = %id, is_matched = trip.trip.is_matched, "trip match toggled");
        Ok(trip)
    }
}
