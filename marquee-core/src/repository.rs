use async_trait::async_trait;
use marquee_shared::{Booking, Movie, NewBooking, NewMovie, NewUser, User};

/// Failure raised by a storage backend, passed through untouched.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Repository trait for booking persistence
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking, returning it with its assigned id.
    async fn save(&self, booking: NewBooking) -> Result<Booking, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, StoreError>;

    /// All bookings for a user, in insertion order.
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Booking>, StoreError>;

    async fn delete(&self, booking: &Booking) -> Result<(), StoreError>;
}

/// Repository trait for user lookup
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    async fn save(&self, user: NewUser) -> Result<User, StoreError>;
}

/// Repository trait for movie lookup
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, StoreError>;

    async fn save(&self, movie: NewMovie) -> Result<Movie, StoreError>;
}
