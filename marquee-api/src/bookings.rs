use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use marquee_shared::{Booking, BookingRequest};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/bookings", post(create_booking))
        .route(
            "/api/bookings/{booking_id}",
            get(get_booking).delete(cancel_booking),
        )
        .route("/api/bookings/user/{user_id}", get(get_user_bookings))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<Booking>, AppError> {
    info!(user_id = req.user_id, movie_id = req.movie_id, seats = req.seats, "Creating booking");
    let booking = state.bookings.create_booking(req).await?;
    Ok(Json(booking))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<Response, AppError> {
    match state.bookings.get_booking_details(booking_id).await? {
        Some(booking) => Ok(Json(booking).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

// Both outcomes are 200; the body tells them apart.
async fn cancel_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<(StatusCode, &'static str), AppError> {
    let outcome = state.bookings.cancel_booking(booking_id).await?;
    Ok((StatusCode::OK, outcome.message()))
}

async fn get_user_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state.bookings.get_user_bookings(user_id).await?;
    Ok(Json(bookings))
}
