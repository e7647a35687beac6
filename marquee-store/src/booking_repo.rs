use async_trait::async_trait;
use chrono::{DateTime, Utc};
use marquee_core::repository::{BookingRepository, StoreError};
use marquee_shared::{Booking, NewBooking};
use sqlx::PgPool;

pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i64,
    user_id: i64,
    movie_id: i64,
    booking_time: DateTime<Utc>,
    show_time: DateTime<Utc>,
    seats: i32,
    total_price: f64,
    status: String,
}

impl TryFrom<BookingRow> for Booking {
    type Error = StoreError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(Booking {
            id: row.id,
            user_id: row.user_id,
            movie_id: row.movie_id,
            booking_time: row.booking_time,
            show_time: row.show_time,
            seats: row.seats,
            total_price: row.total_price,
            status: row.status.parse()?,
        })
    }
}

const BOOKING_COLUMNS: &str =
    "id, user_id, movie_id, booking_time, show_time, seats, total_price, status";

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn save(&self, booking: NewBooking) -> Result<Booking, StoreError> {
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            r#"
            INSERT INTO bookings (user_id, movie_id, booking_time, show_time, seats, total_price, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(booking.user_id)
        .bind(booking.movie_id)
        .bind(booking.booking_time)
        .bind(booking.show_time)
        .bind(booking.seats)
        .bind(booking.total_price)
        .bind(booking.status.to_string())
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, StoreError> {
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Booking::try_from).transpose()
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Booking>, StoreError> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn delete(&self, booking: &Booking) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(booking.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_shared::BookingStatus;

    fn row(status: &str) -> BookingRow {
        let now = Utc::now();
        BookingRow {
            id: 11,
            user_id: 1,
            movie_id: 5,
            booking_time: now,
            show_time: now,
            seats: 3,
            total_price: 30.0,
            status: status.to_string(),
        }
    }

    #[test]
    fn test_booked_row_maps_to_booking() {
        let booking = Booking::try_from(row("Booked")).unwrap();
        assert_eq!(booking.id, 11);
        assert_eq!(booking.user_id, 1);
        assert_eq!(booking.movie_id, 5);
        assert_eq!(booking.seats, 3);
        assert_eq!(booking.total_price, 30.0);
        assert_eq!(booking.status, BookingStatus::Booked);
    }

    #[test]
    fn test_unknown_status_row_is_an_error() {
        let err = Booking::try_from(row("Cancelled")).unwrap_err();
        assert_eq!(err.to_string(), "unknown booking status: Cancelled");
    }
}
