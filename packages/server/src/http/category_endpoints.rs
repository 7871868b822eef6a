//! Category Endpoints
//!
//! - `GET /categories` - All categories as an `id -> type` mapping
//! - `GET /categories/:id/questions?page=N` - One page of a category's questions

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::http::payload::PageQuery;
use crate::http::{AppState, HttpError};
use trivia_core::services::{CategoriesResponse, CategoryQuestionsResponse};

/// List every category
///
/// ```bash
/// curl http://localhost:5000/categories
/// ```
async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, HttpError> {
    Ok(Json(state.service.categories().await?))
}

/// Questions of one category
///
/// ```bash
/// curl "http://localhost:5000/categories/1/questions?page=1"
/// ```
async fn category_questions(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    query: Option<Query<PageQuery>>,
) -> Result<Json<CategoryQuestionsResponse>, HttpError> {
    let Path(category_id) = id?;
    let page = query.map(|Query(q)| q.page()).unwrap_or(1);

    Ok(Json(
        state.service.category_questions(category_id, page).await?,
    ))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:id/questions", get(category_questions))
        .with_state(state)
}
