//! Tenant isolation across dashboard queries.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn cross_tenant_session_lookup_is_not_found() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let acme = app.register_tenant("acme-iso").await;
    let project = app.create_project(&acme.token).await;

    let session = app
        .device_request(
            "POST",
            "/api/sessions/create-session",
            Some(json!({
                "device_id": "device-1",
                "app_version": "1.0.0",
            })),
            &acme.tenant_id,
            &project.id,
            &project.bundle_id,
        )
        .await;
    assert_eq!(session.status, StatusCode::OK, "{:?}", session.body);
    let session_id = session.body["data"]["id"]
        .as_str()
        .expect("No session id in response")
        .to_string();

    // A foreign tenant's owner cannot even learn the session exists.
    let other = app.register_tenant("otherco").await;
    let response = app
        .request(
            "GET",
            &format!("/api/sessions/{session_id}"),
            None,
            Some(&other.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // The owning tenant still resolves it.
    let response = app
        .request(
            "GET",
            &format!("/api/sessions/{session_id}"),
            None,
            Some(&acme.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn foreign_project_event_queries_come_back_empty() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let acme = app.register_tenant("acme-events").await;
    let project = app.create_project(&acme.token).await;

    let session = app
        .device_request(
            "POST",
            "/api/sessions/create-session",
            Some(json!({
                "device_id": "device-1",
                "app_version": "1.0.0",
            })),
            &acme.tenant_id,
            &project.id,
            &project.bundle_id,
        )
        .await;
    assert_eq!(session.status, StatusCode::OK, "{:?}", session.body);
    let session_id = session.body["data"]["id"].as_str().expect("No session id");

    let tracked = app
        .device_request(
            "POST",
            "/api/events/track_event",
            Some(json!({
                "session_id": session_id,
                "event_name": "checkout",
            })),
            &acme.tenant_id,
            &project.id,
            &project.bundle_id,
        )
        .await;
    assert_eq!(tracked.status, StatusCode::OK, "{:?}", tracked.body);

    let path = format!("/api/events?project_id={}", project.id);

    let own = app.request("GET", &path, None, Some(&acme.token)).await;
    assert_eq!(own.status, StatusCode::OK);
    let own_events = own.body["data"].as_array().expect("No event array");
    assert_eq!(own_events.len(), 1);
    assert_eq!(own_events[0]["event_name"], "checkout");

    // Same project id, foreign tenant: the query is scoped to the caller's
    // tenant, so nothing comes back.
    let other = app.register_tenant("otherco-events").await;
    let foreign = app.request("GET", &path, None, Some(&other.token)).await;
    assert_eq!(foreign.status, StatusCode::OK);
    assert_eq!(
        foreign.body["data"].as_array().expect("No event array").len(),
        0
    );
}
