use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use marquee_shared::{Movie, NewMovie};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/movies", post(create_movie))
        .route("/api/movies/{movie_id}", get(get_movie))
}

async fn create_movie(
    State(state): State<AppState>,
    Json(req): Json<NewMovie>,
) -> Result<Json<Movie>, AppError> {
    let movie = state.movies.save(req).await?;
    tracing::info!(movie_id = movie.id, "Movie created");
    Ok(Json(movie))
}

async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> Result<Response, AppError> {
    match state.movies.find_by_id(movie_id).await? {
        Some(movie) => Ok(Json(movie).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}
