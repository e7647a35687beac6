use std::sync::Arc;

use marquee_core::repository::{BookingRepository, MovieRepository, UserRepository};
use marquee_core::BookingService;
use marquee_store::{
    DbClient, MemoryBookingRepository, MemoryMovieRepository, MemoryUserRepository,
    PgBookingRepository, PgMovieRepository, PgUserRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<BookingService>,
    pub users: Arc<dyn UserRepository>,
    pub movies: Arc<dyn MovieRepository>,
}

impl AppState {
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        users: Arc<dyn UserRepository>,
        movies: Arc<dyn MovieRepository>,
    ) -> Self {
        let service = BookingService::new(bookings, users.clone(), movies.clone());
        Self {
            bookings: Arc::new(service),
            users,
            movies,
        }
    }

    pub fn postgres(db: &DbClient) -> Self {
        Self::new(
            Arc::new(PgBookingRepository::new(db.pool.clone())),
            Arc::new(PgUserRepository::new(db.pool.clone())),
            Arc::new(PgMovieRepository::new(db.pool.clone())),
        )
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryBookingRepository::new()),
            Arc::new(MemoryUserRepository::new()),
            Arc::new(MemoryMovieRepository::new()),
        )
    }
}
