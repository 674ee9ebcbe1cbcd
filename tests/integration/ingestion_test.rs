//! Device-credential verification on the ingestion path.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

fn open_session_body() -> serde_json::Value {
    json!({
        "device_id": "device-1",
        "app_version": "1.0.0",
    })
}

#[tokio::test]
async fn wrong_bundle_id_is_forbidden() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let owner = app.register_tenant("bundle").await;
    let project = app.create_project(&owner.token).await;

    let response = app
        .device_request(
            "POST",
            "/api/sessions/create-session",
            Some(open_session_body()),
            &owner.tenant_id,
            &project.id,
            "com.wrong.bundle",
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn missing_device_headers_are_unauthorized() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/api/sessions/create-session",
            Some(open_session_body()),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_tenant_header_is_unauthorized() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let owner = app.register_tenant("malformed").await;
    let project = app.create_project(&owner.token).await;

    let response = app
        .device_request(
            "POST",
            "/api/sessions/create-session",
            Some(open_session_body()),
            "not-a-uuid",
            &project.id,
            &project.bundle_id,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn deactivated_project_credentials_stop_working() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let owner = app.register_tenant("revoke").await;
    let project = app.create_project(&owner.token).await;

    let before = app
        .device_request(
            "POST",
            "/api/sessions/create-session",
            Some(open_session_body()),
            &owner.tenant_id,
            &project.id,
            &project.bundle_id,
        )
        .await;
    assert_eq!(before.status, StatusCode::OK, "{:?}", before.body);

    let deactivated = app
        .request(
            "PUT",
            &format!("/api/projects/{}/deactivate", project.id),
            None,
            Some(&owner.token),
        )
        .await;
    assert_eq!(deactivated.status, StatusCode::OK, "{:?}", deactivated.body);

    // The same triple is now dead.
    let after = app
        .device_request(
            "POST",
            "/api/sessions/create-session",
            Some(open_session_body()),
            &owner.tenant_id,
            &project.id,
            &project.bundle_id,
        )
        .await;
    assert_eq!(after.status, StatusCode::FORBIDDEN);
}
