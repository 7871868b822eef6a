//! HTTP API integration tests
//!
//! Drives the full router (extractors, error envelope, fallback, CORS)
//! against a temporary database seeded with the six default categories and
//! 19 questions.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;
use trivia_core::db::{DatabaseService, TriviaStore, TursoStore};
use trivia_core::models::NewQuestion;
use trivia_core::services::TriviaService;
use trivia_server::http::{create_router, AppState};

const QUESTION_COUNT: i64 = 19;

/// Seeded router; quiz picks always take the first unseen question
async fn test_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db = Arc::new(
        DatabaseService::new(temp_dir.path().join("api_test.db"))
            .await
            .unwrap(),
    );
    db.seed_default_categories().await.unwrap();

    let store = Arc::new(TursoStore::new(db));
    for i in 0..QUESTION_COUNT {
        let text = if i < 3 {
            format!("What is the title of book {}?", i)
        } else {
            format!("What is fact number {}?", i)
        };
        store
            .create_question(NewQuestion::new(
                text,
                format!("Answer {}", i),
                i % 6 + 1,
                i % 5 + 1,
            ))
            .await
            .unwrap();
    }

    let service = TriviaService::with_selector(store, Arc::new(|_len| 0));
    let app = create_router(
        AppState {
            service: Arc::new(service),
        },
        None,
    );
    (app, temp_dir)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn assert_envelope(body: &Value, code: u16, message: &str) {
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(code));
    assert_eq!(body["message"], json!(message));
}

// =========================================================================
// Categories
// =========================================================================

#[tokio::test]
async fn test_get_categories() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["categories"].as_object().unwrap().len(), 6);
    assert_eq!(body["categories"]["1"], json!("Science"));
}

#[tokio::test]
async fn test_category_questions() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/categories/1/questions", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_category"], json!(1));
    assert_eq!(body["total_questions"], json!(4));
    for question in body["questions"].as_array().unwrap() {
        assert_eq!(question["category"], json!(1));
    }
}

#[tokio::test]
async fn test_category_questions_unknown_category() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/categories/1000/questions", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400, "bad request");
}

#[tokio::test]
async fn test_category_questions_non_numeric_id() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/categories/science/questions", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400, "bad request");
}

#[tokio::test]
async fn test_category_questions_page_past_end() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/categories/1/questions?page=2", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404, "resource not found");
}

// =========================================================================
// Questions
// =========================================================================

#[tokio::test]
async fn test_get_questions_first_page() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/questions", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
    assert_eq!(body["total_questions"], json!(QUESTION_COUNT));
    assert_eq!(body["categories"].as_object().unwrap().len(), 6);
    assert!(body["current_category"].is_null());
}

#[tokio::test]
async fn test_get_questions_second_page() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/questions?page=2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_get_questions_page_past_end() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/questions?page=100", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404, "resource not found");
}

#[tokio::test]
async fn test_get_questions_negative_page_is_not_found() {
    let (app, _temp_dir) = test_app().await;

    for uri in ["/questions?page=-1", "/categories/1/questions?page=-1"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_envelope(&body, 404, "resource not found");
    }
}

#[tokio::test]
async fn test_get_questions_unparseable_page_defaults_to_first() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/questions?page=abc", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_create_question() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({"question": "Q", "answer": "A", "category": 1, "difficulty": 2})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["created"], json!(QUESTION_COUNT + 1));
    assert_eq!(body["question_created"], json!("Q"));
    assert_eq!(body["total_questions"], json!(QUESTION_COUNT + 1));
}

#[tokio::test]
async fn test_create_question_with_string_category() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({"question": "Q", "answer": "A", "category": "3", "difficulty": "1"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn test_create_question_missing_fields() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({"question": "Q", "answer": "A"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_envelope(&body, 422, "unprocessable");
}

#[tokio::test]
async fn test_create_question_unknown_category() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({"question": "Q", "answer": "A", "category": 1000, "difficulty": 2})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_envelope(&body, 422, "unprocessable");
}

#[tokio::test]
async fn test_create_question_malformed_json() {
    let (app, _temp_dir) = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/questions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_search_questions() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({"searchTerm": "TITLE"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], json!(3));
    for question in body["questions"].as_array().unwrap() {
        let text = question["question"].as_str().unwrap().to_lowercase();
        assert!(text.contains("title"));
    }
}

#[tokio::test]
async fn test_search_without_hits() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({"searchTerm": "xylophone"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404, "resource not found");
}

#[tokio::test]
async fn test_delete_question_twice() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(&app, Method::DELETE, "/questions/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "deleted": 4}));

    let (status, body) = send(&app, Method::DELETE, "/questions/4", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400, "bad request");

    let (_, listing) = send(&app, Method::GET, "/questions", None).await;
    assert_eq!(listing["total_questions"], json!(QUESTION_COUNT - 1));
}

#[tokio::test]
async fn test_post_to_question_id_is_method_not_allowed() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/questions/5",
        Some(json!({"searchTerm": "What"})),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_envelope(&body, 405, "method not allowed");
}

// =========================================================================
// Quizzes
// =========================================================================

#[tokio::test]
async fn test_quiz_skips_previous_questions() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/quizzes",
        Some(json!({
            "previous_questions": [20, 21],
            "quiz_category": {"id": 1, "type": "Science"}
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let id = body["question"]["id"].as_i64().unwrap();
    assert!(id != 20 && id != 21);
    assert_eq!(body["question"]["category"], json!(1));
}

#[tokio::test]
async fn test_quiz_all_categories_with_string_id() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/quizzes",
        Some(json!({
            "previous_questions": [],
            "quiz_category": {"id": "0", "type": "click"}
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["question"].is_object());
}

#[tokio::test]
async fn test_quiz_exhausted_category_returns_null_question() {
    let (app, _temp_dir) = test_app().await;

    // Category 1 holds ids 1, 7, 13 and 19
    let (status, body) = send(
        &app,
        Method::POST,
        "/quizzes",
        Some(json!({
            "previous_questions": [1, 7, 13, 19],
            "quiz_category": {"id": 1, "type": "Science"}
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "question": null}));
}

#[tokio::test]
async fn test_quiz_empty_body_is_bad_request() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(&app, Method::POST, "/quizzes", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400, "bad request");
}

#[tokio::test]
async fn test_quiz_missing_category_id_is_bad_request() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/quizzes",
        Some(json!({"previous_questions": [], "quiz_category": {"type": "Science"}})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400, "bad request");
}

#[tokio::test]
async fn test_quiz_unknown_category_is_not_found() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/quizzes",
        Some(json!({"previous_questions": [], "quiz_category": {"id": 1000, "type": "test"}})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404, "resource not found");
}

// =========================================================================
// Routing and CORS
// =========================================================================

#[tokio::test]
async fn test_unknown_route_is_enveloped_not_found() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/books?page=1000", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404, "resource not found");
}

#[tokio::test]
async fn test_health() {
    let (app, _temp_dir) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (app, _temp_dir) = test_app().await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/categories")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
