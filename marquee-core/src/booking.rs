use std::sync::Arc;

use chrono::Utc;
use marquee_shared::{Booking, BookingRequest, BookingStatus, NewBooking};
use tracing::info;

use crate::repository::{BookingRepository, MovieRepository, UserRepository};
use crate::{CoreError, CoreResult};

/// Result of a cancellation attempt. A miss is an ordinary outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled,
    NotFound,
}

impl CancelOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            CancelOutcome::Cancelled => "Booking canceled successfully.",
            CancelOutcome::NotFound => "Booking not found.",
        }
    }
}

/// Creates, looks up and cancels bookings.
///
/// Users and movies are only read here, to validate a request and to price it.
/// The price is frozen at creation time; later movie price changes do not
/// touch existing bookings.
pub struct BookingService {
    bookings: Arc<dyn BookingRepository>,
    users: Arc<dyn UserRepository>,
    movies: Arc<dyn MovieRepository>,
}

impl BookingService {
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        users: Arc<dyn UserRepository>,
        movies: Arc<dyn MovieRepository>,
    ) -> Self {
        Self {
            bookings,
            users,
            movies,
        }
    }

    /// Book `request.seats` seats. Fails without persisting anything when the
    /// user or the movie cannot be resolved.
    pub async fn create_booking(&self, request: BookingRequest) -> CoreResult<Booking> {
        let user = self
            .users
            .find_by_id(request.user_id)
            .await?
            .ok_or(CoreError::UserNotFound(request.user_id))?;

        let movie = self
            .movies
            .find_by_id(request.movie_id)
            .await?
            .ok_or(CoreError::MovieNotFound(request.movie_id))?;

        let new_booking = NewBooking {
            user_id: user.id,
            movie_id: movie.id,
            booking_time: Utc::now(),
            show_time: request.show_time,
            seats: request.seats,
            total_price: f64::from(request.seats) * movie.price_per_seat,
            status: BookingStatus::Booked,
        };

        let booking = self.bookings.save(new_booking).await?;
        info!(
            booking_id = booking.id,
            user_id = booking.user_id,
            movie_id = booking.movie_id,
            "Booking created"
        );

        Ok(booking)
    }

    pub async fn get_booking_details(&self, booking_id: i64) -> CoreResult<Option<Booking>> {
        Ok(self.bookings.find_by_id(booking_id).await?)
    }

    /// Cancellation deletes the booking outright; nothing is kept for audit.
    pub async fn cancel_booking(&self, booking_id: i64) -> CoreResult<CancelOutcome> {
        match self.bookings.find_by_id(booking_id).await? {
            Some(booking) => {
                self.bookings.delete(&booking).await?;
                info!(booking_id, "Booking cancelled");
                Ok(CancelOutcome::Cancelled)
            }
            None => Ok(CancelOutcome::NotFound),
        }
    }

    pub async fn get_user_bookings(&self, user_id: i64) -> CoreResult<Vec<Booking>> {
        Ok(self.bookings.find_by_user_id(user_id).await?)
    }
}
