//! Quiz Endpoint
//!
//! - `POST /quizzes` - Next unseen question for a quiz round
//!
//! `quiz_category.id` of 0 plays across all categories. Once every question
//! in the pool has been served, `question` is `null`.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};

use crate::http::payload::{FlexibleInt, QuizCategory, QuizRequest};
use crate::http::{AppState, ErrorKind, HttpError};
use trivia_core::services::QuizResponse;

/// ```bash
/// curl -X POST http://localhost:5000/quizzes \
///   -H "Content-Type: application/json" \
///   -d '{"previous_questions": [20, 21], "quiz_category": {"id": 1, "type": "Science"}}'
/// ```
async fn next_question(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, HttpError> {
    let Json(request) =
        body.map_err(|rejection| HttpError::from_json_rejection(ErrorKind::BadRequest, rejection))?;

    let previous = request.previous_questions.ok_or_else(|| {
        HttpError::with_details(ErrorKind::BadRequest, "missing previous_questions")
    })?;

    let category_id = match request.quiz_category {
        Some(QuizCategory {
            id: Some(FlexibleInt(id)),
            kind,
        }) => {
            tracing::debug!(
                "Quiz round in category {} ({})",
                id,
                kind.as_deref().unwrap_or("unnamed")
            );
            id
        }
        _ => {
            return Err(HttpError::with_details(
                ErrorKind::BadRequest,
                "missing quiz_category.id",
            ))
        }
    };

    Ok(Json(
        state
            .service
            .next_quiz_question(&previous, category_id)
            .await?,
    ))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
