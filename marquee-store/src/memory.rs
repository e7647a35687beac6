//! In-process repositories. Ids start at 1 and are never reused.

use async_trait::async_trait;
use marquee_core::repository::{BookingRepository, MovieRepository, StoreError, UserRepository};
use marquee_shared::{Booking, Movie, NewBooking, NewMovie, NewUser, User};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

struct Table<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        self.next_id += 1;
        let row = build(self.next_id);
        self.rows.insert(self.next_id, row.clone());
        row
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            rows: BTreeMap::new(),
        }
    }
}

#[derive(Default)]
pub struct MemoryBookingRepository {
    table: RwLock<Table<Booking>>,
}

impl MemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for MemoryBookingRepository {
    async fn save(&self, booking: NewBooking) -> Result<Booking, StoreError> {
        let mut table = self.table.write().await;
        Ok(table.insert_with(|id| booking.with_id(id)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, StoreError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Booking>, StoreError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, booking: &Booking) -> Result<(), StoreError> {
        self.table.write().await.rows.remove(&booking.id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryUserRepository {
    table: RwLock<Table<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, user: NewUser) -> Result<User, StoreError> {
        let mut table = self.table.write().await;
        Ok(table.insert_with(|id| user.with_id(id)))
    }
}

#[derive(Default)]
pub struct MemoryMovieRepository {
    table: RwLock<Table<Movie>>,
}

impl MemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieRepository for MemoryMovieRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, StoreError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, movie: NewMovie) -> Result<Movie, StoreError> {
        let mut table = self.table.write().await;
        Ok(table.insert_with(|id| movie.with_id(id)))
    }
}
