pub mod models;

pub use models::booking::{Booking, BookingRequest, BookingStatus, NewBooking};
pub use models::movie::{Movie, NewMovie};
pub use models::user::{NewUser, User};
