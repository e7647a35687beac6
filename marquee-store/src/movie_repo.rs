use async_trait::async_trait;
use marquee_core::repository::{MovieRepository, StoreError};
use marquee_shared::{Movie, NewMovie};
use sqlx::PgPool;

pub struct PgMovieRepository {
    pool: PgPool,
}

impl PgMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MovieRow {
    id: i64,
    title: String,
    price_per_seat: f64,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: row.id,
            title: row.title,
            price_per_seat: row.price_per_seat,
        }
    }
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, StoreError> {
        let row = sqlx::query_as::<_, MovieRow>(
            "SELECT id, title, price_per_seat FROM movies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Movie::from))
    }

    async fn save(&self, movie: NewMovie) -> Result<Movie, StoreError> {
        let row = sqlx::query_as::<_, MovieRow>(
            r#"
            INSERT INTO movies (title, price_per_seat)
            VALUES ($1, $2)
            RETURNING id, title, price_per_seat
            "#,
        )
        .bind(&movie.title)
        .bind(movie.price_per_seat)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }
}
