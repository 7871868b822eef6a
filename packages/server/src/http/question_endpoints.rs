//! Question Endpoints
//!
//! - `GET /questions?page=N` - Paginated listing with the category mapping
//! - `POST /questions` - Search (`{"searchTerm": ...}`) or create a question
//! - `DELETE /questions/:id` - Delete a question

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Json, Response},
    routing::{delete, get},
    Router,
};

use crate::http::payload::{PageQuery, QuestionsPostBody};
use crate::http::{AppState, ErrorKind, HttpError};
use trivia_core::services::{DeletedQuestionResponse, QuestionsPageResponse};

/// One page of all questions
///
/// ```bash
/// curl "http://localhost:5000/questions?page=2"
/// ```
async fn list_questions(
    State(state): State<AppState>,
    query: Option<Query<PageQuery>>,
) -> Result<Json<QuestionsPageResponse>, HttpError> {
    let page = query.map(|Query(q)| q.page()).unwrap_or(1);
    Ok(Json(state.service.questions_page(page).await?))
}

/// Search questions or create a new one
///
/// ```bash
/// curl -X POST http://localhost:5000/questions \
///   -H "Content-Type: application/json" \
///   -d '{"searchTerm": "title"}'
///
/// curl -X POST http://localhost:5000/questions \
///   -H "Content-Type: application/json" \
///   -d '{"question": "Q", "answer": "A", "category": 1, "difficulty": 2}'
/// ```
async fn post_questions(
    State(state): State<AppState>,
    query: Option<Query<PageQuery>>,
    body: Result<Json<QuestionsPostBody>, JsonRejection>,
) -> Result<Response, HttpError> {
    let Json(body) =
        body.map_err(|rejection| HttpError::from_json_rejection(ErrorKind::Unprocessable, rejection))?;
    let page = query.map(|Query(q)| q.page()).unwrap_or(1);

    if let Some(term) = body.search_term() {
        let response = state.service.search_questions(term, page).await?;
        return Ok(Json(response).into_response());
    }

    let new_question = body.into_new_question()?;
    let response = state.service.create_question(new_question, page).await?;

    Ok(Json(response).into_response())
}

/// Delete a question by id
///
/// ```bash
/// curl -X DELETE http://localhost:5000/questions/4
/// ```
async fn delete_question(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedQuestionResponse>, HttpError> {
    let Path(id) = id?;
    Ok(Json(state.service.delete_question(id).await?))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(post_questions))
        .route("/questions/:id", delete(delete_question))
        .with_state(state)
}
