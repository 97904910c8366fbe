use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Whether the poster is offering a ride or looking for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum TripRole {
    Driver,
    Passenger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum Recurrence {
    Once,
    Weekly,
    Daily,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: TripRole,
    pub departure_location: String,
    pub arrival_location: String,
    pub date: NaiveDate,
    pub arrival_time: NaiveTime,
    pub recurrence: Recurrence,
    pub recurring_days: Option<Json<Vec<String>>>,
    pub is_matched: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Trip row joined with its owner's contact fields. Every trip endpoint
/// returns this shape since the wire format embeds owner details.
#[derive(Debug, Clone, FromRow)]
pub struct TripWithOwner {
    #[sqlx(flatten)]
    pub trip: Trip,
    pub owner_first_name: String,
    pub owner_last_name: String,
    pub owner_email: String,
    pub owner_phone: String,
}
