use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use marquee_shared::{NewUser, User};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(create_user))
        .route("/api/users/{user_id}", get(get_user))
}

async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<NewUser>,
) -> Result<Json<User>, AppError> {
    let user = state.users.save(req).await?;
    tracing::info!(user_id = user.id, "User created");
    Ok(Json(user))
}

async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Response, AppError> {
    match state.users.find_by_id(user_id).await? {
        Some(user) => Ok(Json(user).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}
