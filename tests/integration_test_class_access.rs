mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_join_round_trips_created_class_for_roster_member() {
    let app = TestApp::new().await;
    let instructor = app.create_instructor("Ada", "Lovelace", "ada@example.com").await;
    let student = app.create_student("Sam", "Rivera", "sam@example.com").await;

    let start = Utc::now() + Duration::hours(1);
    let end = start + Duration::hours(1);

    let payload = json!({
        "title": "Algebra Review",
        "description": "Factoring practice",
        "start_time": start.to_rfc3339(),
        "end_time": end.to_rfc3339(),
        "meeting_link": "https://meet.example/abc",
        "students": [student.id.clone()]
    });
    let res = app.request("POST", "/api/v1/live-classes/create", Some(&app.token_for(&instructor)), Some(payload)).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = parse_body(res).await["data"].clone();
    let class_id = created["id"].as_str().unwrap().to_string();

    let res = app.request(
        "GET",
        &format!("/api/v1/live-classes/join?class_id={}", class_id),
        Some(&app.token_for(&student)),
        None,
    ).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["success"], true);

    let data = &body["data"];
    assert_eq!(data["id"], class_id.as_str());
    assert_eq!(data["title"], "Algebra Review");
    assert_eq!(data["description"], "Factoring practice");
    assert_eq!(data["meeting_link"], "https://meet.example/abc");
    assert_eq!(data["status"], "Scheduled");
    assert_eq!(data["instructor_id"], instructor.id.as_str());
    assert_eq!(data["instructor"]["email"], "ada@example.com");

    // Timestamps survive the store round trip.
    let fetched_start = chrono::DateTime::parse_from_rfc3339(data["start_time"].as_str().unwrap()).unwrap();
    let fetched_end = chrono::DateTime::parse_from_rfc3339(data["end_time"].as_str().unwrap()).unwrap();
    assert_eq!(fetched_start.timestamp(), start.timestamp());
    assert_eq!(fetched_end.timestamp(), end.timestamp());
}

#[tokio::test]
async fn test_join_allows_owning_instructor() {
    let app = TestApp::new().await;
    let instructor = app.create_instructor("Ada", "Lovelace", "ada@example.com").await;
    let student = app.create_student("Sam", "Rivera", "sam@example.com").await;

    let start = Utc::now() + Duration::hours(1);
    let payload = json!({
        "title": "Host View",
        "start_time": start.to_rfc3339(),
        "end_time": (start + Duration::hours(1)).to_rfc3339(),
        "meeting_link": "https://meet.example/host",
        "students": [student.id.clone()]
    });
    let res = app.request("POST", "/api/v1/live-classes/create", Some(&app.token_for(&instructor)), Some(payload)).await;
    let class_id = parse_body(res).await["data"]["id"].as_str().unwrap().to_string();

    let res = app.request(
        "GET",
        &format!("/api/v1/live-classes/join?class_id={}", class_id),
        Some(&app.token_for(&instructor)),
        None,
    ).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_join_rejects_caller_outside_roster() {
    let app = TestApp::new().await;
    let instructor = app.create_instructor("Ada", "Lovelace", "ada@example.com").await;
    let enrolled = app.create_student("Sam", "Rivera", "sam@example.com").await;
    let outsider = app.create_student("Eve", "Snoop", "eve@example.com").await;

    let start = Utc::now() + Duration::hours(1);
    let payload = json!({
        "title": "Private",
        "start_time": start.to_rfc3339(),
        "end_time": (start + Duration::hours(1)).to_rfc3339(),
        "meeting_link": "https://meet.example/secret",
        "students": [enrolled.id.clone()]
    });
    let res = app.request("POST", "/api/v1/live-classes/create", Some(&app.token_for(&instructor)), Some(payload)).await;
    let class_id = parse_body(res).await["data"]["id"].as_str().unwrap().to_string();

    let res = app.request(
        "GET",
        &format!("/api/v1/live-classes/join?class_id={}", class_id),
        Some(&app.token_for(&outsider)),
        None,
    ).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let body = parse_body(res).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_join_unknown_id_is_not_found() {
    let app = TestApp::new().await;
    let student = app.create_student("Sam", "Rivera", "sam@example.com").await;

    let res = app.request(
        "GET",
        "/api/v1/live-classes/join?class_id=does-not-exist",
        Some(&app.token_for(&student)),
        None,
    ).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_join_requires_class_id() {
    let app = TestApp::new().await;
    let student = app.create_student("Sam", "Rivera", "sam@example.com").await;

    let res = app.request("GET", "/api/v1/live-classes/join", Some(&app.token_for(&student)), None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_join_requires_authentication() {
    let app = TestApp::new().await;

    let res = app.request("GET", "/api/v1/live-classes/join?class_id=x", None, None).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
