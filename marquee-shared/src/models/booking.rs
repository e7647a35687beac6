use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A reservation of `seats` seats for one user against one movie showing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub movie_id: i64,
    pub booking_time: DateTime<Utc>,
    pub show_time: DateTime<Utc>,
    pub seats: i32,
    pub total_price: f64,
    pub status: BookingStatus,
}

/// A booking that has not been persisted yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub user_id: i64,
    pub movie_id: i64,
    pub booking_time: DateTime<Utc>,
    pub show_time: DateTime<Utc>,
    pub seats: i32,
    pub total_price: f64,
    pub status: BookingStatus,
}

impl NewBooking {
    pub fn with_id(self, id: i64) -> Booking {
        Booking {
            id,
            user_id: self.user_id,
            movie_id: self.movie_id,
            booking_time: self.booking_time,
            show_time: self.show_time,
            seats: self.seats,
            total_price: self.total_price,
            status: self.status,
        }
    }
}

/// Cancelled bookings are deleted, so `Booked` is the only persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Booked,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Booked => write!(f, "Booked"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown booking status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for BookingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Booked" => Ok(BookingStatus::Booked),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Creation input as received over the wire. Never persisted directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub user_id: i64,
    pub movie_id: i64,
    /// RFC 3339 with an offset, e.g. `2025-06-01T19:30:00Z`. A timestamp
    /// without an offset is rejected at deserialization.
    pub show_time: DateTime<Utc>,
    pub seats: i32,
    // Accepted for compatibility; new bookings are always `Booked`.
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booking_serializes_camel_case() {
        let show_time = "2025-06-01T19:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let booking = Booking {
            id: 7,
            user_id: 1,
            movie_id: 5,
            booking_time: show_time,
            show_time,
            seats: 3,
            total_price: 30.0,
            status: BookingStatus::Booked,
        };

        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["userId"], 1);
        assert_eq!(value["movieId"], 5);
        assert_eq!(value["totalPrice"], 30.0);
        assert_eq!(value["status"], "Booked");
        assert!(value.get("showTime").is_some());
        assert!(value.get("user_id").is_none());
    }

    #[test]
    fn test_request_status_is_optional() {
        let req: BookingRequest = serde_json::from_value(json!({
            "userId": 1,
            "movieId": 5,
            "showTime": "2025-06-01T19:30:00Z",
            "seats": 3
        }))
        .unwrap();

        assert_eq!(req.seats, 3);
        assert!(req.status.is_none());
    }

    #[test]
    fn test_request_show_time_requires_offset() {
        let result = serde_json::from_value::<BookingRequest>(json!({
            "userId": 1,
            "movieId": 5,
            "showTime": "2025-06-01T19:30:00",
            "seats": 3
        }));
        assert!(result.is_err());

        let req: BookingRequest = serde_json::from_value(json!({
            "userId": 1,
            "movieId": 5,
            "showTime": "2025-06-01T21:30:00+02:00",
            "seats": 3
        }))
        .unwrap();
        assert_eq!(req.show_time, "2025-06-01T19:30:00Z".parse::<DateTime<Utc>>().unwrap());
    }

    #[test]
    fn test_unknown_status_message() {
        let err = "Cancelled".parse::<BookingStatus>().unwrap_err();
        assert_eq!(err, UnknownStatus("Cancelled".to_string()));
        assert_eq!(err.to_string(), "unknown booking status: Cancelled");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Booked".parse::<BookingStatus>(), Ok(BookingStatus::Booked));
        assert!("Cancelled".parse::<BookingStatus>().is_err());
        assert_eq!(BookingStatus::Booked.to_string(), "Booked");
    }
}
