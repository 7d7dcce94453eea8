mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_tutor_answers_question() {
    let app = TestApp::new().await;
    let student = app.create_student("Sam", "Rivera", "sam@example.com").await;

    let res = app.request(
        "POST",
        "/api/v1/tutor/ask",
        Some(&app.token_for(&student)),
        Some(json!({ "question": "What is the quadratic formula?" })),
    ).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["success"], true);
    assert!(body["response"].as_str().unwrap().contains("What is the quadratic formula?"));
}

#[tokio::test]
async fn test_tutor_requires_question() {
    let app = TestApp::new().await;
    let student = app.create_student("Sam", "Rivera", "sam@example.com").await;
    let token = app.token_for(&student);

    let res = app.request("POST", "/api/v1/tutor/ask", Some(&token), Some(json!({}))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.request("POST", "/api/v1/tutor/ask", Some(&token), Some(json!({ "question": "   " }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tutor_requires_authentication() {
    let app = TestApp::new().await;

    let res = app.request("POST", "/api/v1/tutor/ask", None, Some(json!({ "question": "hi" }))).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
