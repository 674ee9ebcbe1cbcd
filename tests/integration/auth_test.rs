//! Registration, login, and per-operation role gates over the router.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn register_login_me_round_trip() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let owner = app.register_tenant("acme").await;

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({
                "email": &owner.email,
                "password": &owner.password,
            })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK, "{:?}", login.body);
    let token = login.body["data"]["access_token"]
        .as_str()
        .expect("No access_token in login response");

    let me = app.request("GET", "/api/auth/me", None, Some(token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["email"], owner.email.as_str());
    assert_eq!(me.body["data"]["role"], "owner");
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let owner = app.register_tenant("badpw").await;

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({
                "email": &owner.email,
                "password": "not-the-password",
            })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn developer_is_forbidden_from_admin_operations() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let owner = app.register_tenant("gates").await;
    let project = app.create_project(&owner.token).await;

    let dev_email = format!("dev-{}@test.io", Uuid::new_v4().simple());
    let invitation = app
        .invite(&owner.token, &dev_email, "developer", &[&project.id])
        .await;
    let redeemed = app.redeem(&invitation, &dev_email).await;
    assert_eq!(redeemed.status, StatusCode::OK, "{:?}", redeemed.body);
    let dev_token = redeemed.body["data"]["access_token"]
        .as_str()
        .expect("No access_token in redemption response")
        .to_string();

    // Project creation, screen registration, and user listing are all
    // admin and above; project membership does not change that.
    let response = app
        .request(
            "POST",
            "/api/projects",
            Some(json!({
                "name": "Side App",
                "platform": "android",
                "bundle_id": format!("com.test.side{}", Uuid::new_v4().simple()),
            })),
            Some(&dev_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            "/api/screens",
            Some(json!({
                "project_id": &project.id,
                "name": "Checkout",
            })),
            Some(&dev_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("GET", "/api/auth/users", None, Some(&dev_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn the_owner_role_cannot_be_granted() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let owner = app.register_tenant("mint").await;

    let response = app
        .request(
            "POST",
            "/api/auth/invite",
            Some(json!({
                "email": format!("second-{}@test.io", Uuid::new_v4().simple()),
                "role": "owner",
                "project_ids": [],
            })),
            Some(&owner.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            "/api/auth/users",
            Some(json!({
                "email": format!("third-{}@test.io", Uuid::new_v4().simple()),
                "full_name": "Second Owner",
                "password": "pw1",
                "role": "owner",
                "project_permissions": [],
            })),
            Some(&owner.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
