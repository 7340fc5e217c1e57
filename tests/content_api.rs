//! Integration tests for the to-do, event and note endpoints.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn test_todo_lifecycle() {
    let app = TestApp::new();
    let created = app.create_todo("Buy milk").await;
    assert_eq!(created["completed"], false);
    assert_eq!(created["priority"], "Medium");
    let id = created["id"].as_str().unwrap();

    let fetched = app.request("GET", &format!("/api/todos/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["title"], "Buy milk");

    let updated = app
        .request(
            "PATCH",
            &format!("/api/todos/{id}"),
            Some(json!({ "priority": "high", "completed": true })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["priority"], "High");
    assert_eq!(updated.body["title"], "Buy milk");

    let deleted = app.request("DELETE", &format!("/api/todos/{id}"), None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Todo deleted");

    let missing = app.request("GET", &format!("/api/todos/{id}"), None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let again = app.request("DELETE", &format!("/api/todos/{id}"), None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_todo_list_defaults_to_newest_first() {
    let app = TestApp::new();
    app.create_todo("older").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    app.create_todo("newer").await;

    let response = app.request("GET", "/api/todos", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let titles: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["newer", "older"]);
}

#[tokio::test]
async fn test_todo_form_without_due_date() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/todos",
            Some(json!({
                "title": "Call plumber",
                "description": "",
                "priority": "Medium",
                "dueDate": ""
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["dueDate"], serde_json::Value::Null);

    let dated = app
        .request(
            "POST",
            "/api/todos",
            Some(json!({ "title": "Taxes", "priority": "High", "dueDate": "2026-04-30" })),
        )
        .await;
    assert_eq!(dated.status, StatusCode::CREATED);
    assert_eq!(dated.body["dueDate"], "2026-04-30T00:00:00Z");
}

#[tokio::test]
async fn test_todo_patch_null_clears_fields() {
    let app = TestApp::new();
    let created = app
        .request(
            "POST",
            "/api/todos",
            Some(json!({
                "title": "Renew lease",
                "description": "call landlord",
                "dueDate": "2026-06-01"
            })),
        )
        .await;
    let id = created.body["id"].as_str().unwrap();

    let untouched = app
        .request(
            "PATCH",
            &format!("/api/todos/{id}"),
            Some(json!({ "priority": "Low" })),
        )
        .await;
    assert_eq!(untouched.body["description"], "call landlord");
    assert_eq!(untouched.body["dueDate"], created.body["dueDate"]);

    let cleared = app
        .request(
            "PATCH",
            &format!("/api/todos/{id}"),
            Some(json!({ "description": null, "dueDate": null })),
        )
        .await;
    assert_eq!(cleared.status, StatusCode::OK);
    assert_eq!(cleared.body["description"], serde_json::Value::Null);
    assert_eq!(cleared.body["dueDate"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_todo_blank_title_rejected() {
    let app = TestApp::new();
    let response = app
        .request("POST", "/api/todos", Some(json!({ "title": "   " })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_todo_filter_and_sort() {
    let app = TestApp::new();
    let now = Utc::now();
    for (title, priority, due) in [
        ("later", "Low", Some(now + Duration::days(5))),
        ("soon", "High", Some(now + Duration::days(1))),
        ("someday", "High", None),
    ] {
        let response = app
            .request(
                "POST",
                "/api/todos",
                Some(json!({ "title": title, "priority": priority, "dueDate": due })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let by_due = app.request("GET", "/api/todos?sortBy=dueDate", None).await;
    assert_eq!(by_due.status, StatusCode::OK);
    let titles: Vec<&str> = by_due
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["soon", "later", "someday"]);

    let high = app.request("GET", "/api/todos?priority=High", None).await;
    assert_eq!(high.body.as_array().unwrap().len(), 2);

    let bad = app.request("GET", "/api/todos?sortBy=colour", None).await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/todos/not-a-uuid", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let unknown = uuid::Uuid::new_v4();
    let response = app.request("GET", &format!("/api/events/{unknown}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_event_lifecycle_and_range_check() {
    let app = TestApp::new();
    let start = Utc::now();

    let backwards = app
        .request(
            "POST",
            "/api/events",
            Some(json!({
                "title": "Time travel",
                "start": start.to_rfc3339(),
                "end": (start - Duration::hours(1)).to_rfc3339()
            })),
        )
        .await;
    assert_eq!(backwards.status, StatusCode::BAD_REQUEST);

    let created = app
        .request(
            "POST",
            "/api/events",
            Some(json!({
                "title": "Standup",
                "start": start.to_rfc3339(),
                "end": (start + Duration::minutes(15)).to_rfc3339()
            })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["color"], "#3788d8");
    assert_eq!(created.body["allDay"], false);
    let id = created.body["id"].as_str().unwrap();

    let moved = app
        .request(
            "PATCH",
            &format!("/api/events/{id}"),
            Some(json!({ "end": (start - Duration::hours(2)).to_rfc3339() })),
        )
        .await;
    assert_eq!(moved.status, StatusCode::BAD_REQUEST);

    let list = app.request("GET", "/api/events", None).await;
    assert_eq!(list.body.as_array().unwrap().len(), 1);
    assert_eq!(list.body[0]["title"], "Standup");

    let deleted = app.request("DELETE", &format!("/api/events/{id}"), None).await;
    assert_eq!(deleted.status, StatusCode::OK);
}

#[tokio::test]
async fn test_event_calendar_form_payloads() {
    let app = TestApp::new();
    let created = app
        .request(
            "POST",
            "/api/events",
            Some(json!({
                "title": "Review",
                "description": "quarterly numbers",
                "start": "2026-05-04T09:30",
                "end": "2026-05-04T10:30",
                "allDay": false,
                "color": "#3788d8"
            })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    assert_eq!(created.body["start"], "2026-05-04T09:30:00Z");
    let id = created.body["id"].as_str().unwrap();

    let patched = app
        .request(
            "PATCH",
            &format!("/api/events/{id}"),
            Some(json!({ "description": null, "end": "" })),
        )
        .await;
    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(patched.body["description"], serde_json::Value::Null);
    assert_eq!(patched.body["end"], created.body["end"]);

    let missing_start = app
        .request(
            "POST",
            "/api/events",
            Some(json!({ "title": "Nowhen", "start": "", "end": "" })),
        )
        .await;
    assert_eq!(missing_start.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_notes_by_tag() {
    let app = TestApp::new();
    for (title, tags) in [
        ("Groceries", vec!["home", "shopping"]),
        ("Sprint notes", vec!["work"]),
        ("Paint colours", vec!["home"]),
    ] {
        let response = app
            .request(
                "POST",
                "/api/notes",
                Some(json!({ "title": title, "content": "...", "tags": tags })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.body["category"], "Uncategorized");
    }

    let home = app.request("GET", "/api/notes/tags/home", None).await;
    assert_eq!(home.status, StatusCode::OK);
    assert_eq!(home.body.as_array().unwrap().len(), 2);

    let none = app.request("GET", "/api/notes/tags/garden", None).await;
    assert_eq!(none.status, StatusCode::OK);
    assert!(none.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_note_update_bumps_timestamp() {
    let app = TestApp::new();
    let created = app
        .request(
            "POST",
            "/api/notes",
            Some(json!({ "title": "Ideas", "content": "one", "tags": [" a ", "a", ""] })),
        )
        .await;
    assert_eq!(created.body["tags"], json!(["a"]));
    let id = created.body["id"].as_str().unwrap();

    let updated = app
        .request(
            "PATCH",
            &format!("/api/notes/{id}"),
            Some(json!({ "content": "one, two" })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["content"], "one, two");
    assert_eq!(updated.body["createdAt"], created.body["createdAt"]);
    let stamp = |v: &serde_json::Value| {
        v.as_str()
            .unwrap()
            .parse::<chrono::DateTime<Utc>>()
            .unwrap()
    };
    assert!(stamp(&updated.body["updatedAt"]) >= stamp(&created.body["updatedAt"]));
}

#[tokio::test]
async fn test_health_reports_memory_provider() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "memory");
}
