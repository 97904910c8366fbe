use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::trip::{Recurrence, TripRole, TripWithOwner};
use crate::utils::time::deserialize_arrival_time;

/// Create-trip body. The owner is never part of this payload; it is
/// taken from the authenticated caller.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripPayload {
    pub role: TripRole,
    #[validate(length(min = 1, message = "Departure location is required"))]
    pub departure_location: String,
    #[validate(length(min = 1, message = "Arrival location is required"))]
    pub arrival_location: String,
    pub date: NaiveDate,
    #[serde(deserialize_with = "deserialize_arrival_time")]
    pub arrival_time: NaiveTime,
    #[serde(default = "default_recurrence")]
    pub recurrence: Recurrence,
    #[serde(default)]
    pub recurring_days: Option<Vec<String>>,
}

fn default_recurrence() -> Recurrence {
    Recurrence::Once
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub role: TripRole,
    pub departure_location: String,
    pub arrival_location: String,
    pub date: NaiveDate,
    pub arrival_time: NaiveTime,
    pub recurrence: Recurrence,
    pub recurring_days: Option<Vec<String>>,
    pub is_matched: bool,
    pub created_at: DateTime<Utc>,
}

impl From<TripWithOwner> for TripResponse {
    fn from(row: TripWithOwner) -> Self {
        Self {
            id: row.trip.id,
            user_id: row.trip.user_id,
            user_name: format!("{} {}", row.owner_first_name, row.owner_last_name),
            user_email: row.owner_email,
            user_phone: row.owner_phone,
            role: row.trip.role,
            departure_location: row.trip.departure_location,
            arrival_location: row.trip.arrival_location,
            date: row.trip.date,
            arrival_time: row.trip.arrival_time,
            recurrence: row.trip.recurrence,
            recurring_days: row.trip.recurring_days.map(|days| days.0),
            is_matched: row.trip.is_matched,
            created_at: row.trip.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trip::Trip;
    use sqlx::types::Json;

    fn sample_row() -> TripWithOwner {
        TripWithOwner {
            trip: Trip {
                id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                role: TripRole::Driver,
                departure_location: "Lisbon".to_string(),
                arrival_location: "Porto".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                arrival_time: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
                recurrence: Recurrence::Weekly,
                recurring_days: Some(Json(vec!["monday".to_string(), "friday".to_string()])),
                is_matched: false,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            owner_first_name: "Ana".to_string(),
            owner_last_name: "Silva".to_string(),
            owner_email: "ana@example.com".to_string(),
            owner_phone: "+351111222333".to_string(),
        }
    }

    #[test]
    fn trip_response_camel_case_wire_shape() {
        let response = TripResponse::from(sample_row());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["userName"], "Ana Silva");
        assert_eq!(json["departureLocation"], "Lisbon");
        assert_eq!(json["arrivalTime"], "08:30:00");
        assert_eq!(json["role"], "driver");
        assert_eq!(json["recurrence"], "weekly");
        assert_eq!(json["recurringDays"][1], "friday");
        assert_eq!(json["isMatched"], false);
        // storage names must not leak onto the wire
        assert!(json.get("departure_location").is_none());
        assert!(json.get("is_matched").is_none());
    }

    #[test]
    fn create_payload_parses_short_arrival_time() {
        let payload: CreateTripPayload = serde_json::from_value(serde_json::json!({
            "role": "passenger",
            "departureLocation": "Lisbon",
            "arrivalLocation": "Porto",
            "date": "2026-09-01",
            "arrivalTime": "08:30"
        }))
        .unwrap();
        assert_eq!(payload.arrival_time, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(payload.recurrence, Recurrence::Once);
        assert!(payload.recurring_days.is_none());
    }

    #[test]
    fn create_payload_rejects_unknown_role() {
        let result: Result<CreateTripPayload, _> = serde_json::from_value(serde_json::json!({
            "role": "pilot",
            "departureLocation": "Lisbon",
            "arrivalLocation": "Porto",
            "date": "2026-09-01",
            "arrivalTime": "08:30"
        }));
        assert!(result.is_err());
    }
}
