pub mod app_config;
pub mod booking_repo;
pub mod database;
pub mod memory;
pub mod movie_repo;
pub mod user_repo;

pub use booking_repo::PgBookingRepository;
pub use database::DbClient;
pub use memory::{MemoryBookingRepository, MemoryMovieRepository, MemoryUserRepository};
pub use movie_repo::PgMovieRepository;
pub use user_repo::PgUserRepository;
