//! Invitation single-use semantics over the router.

use axum::http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn invitation_redeems_exactly_once() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let owner = app.register_tenant("once").await;
    let project = app.create_project(&owner.token).await;
    let email = format!("joiner-{}@test.io", Uuid::new_v4().simple());
    let invitation = app
        .invite(&owner.token, &email, "developer", &[&project.id])
        .await;

    let first = app.redeem(&invitation, &email).await;
    assert_eq!(first.status, StatusCode::OK, "{:?}", first.body);

    let second = app.redeem(&invitation, &email).await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.body["error"], "INVALID_INVITATION");
}

#[tokio::test]
async fn concurrent_redemptions_have_a_single_winner() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let owner = app.register_tenant("race").await;
    let project = app.create_project(&owner.token).await;
    let email = format!("racer-{}@test.io", Uuid::new_v4().simple());
    let invitation = app
        .invite(&owner.token, &email, "developer", &[&project.id])
        .await;

    let (first, second) = tokio::join!(
        app.redeem(&invitation, &email),
        app.redeem(&invitation, &email),
    );

    let statuses = [first.status, second.status];
    assert!(statuses.contains(&StatusCode::OK), "{statuses:?}");
    assert!(statuses.contains(&StatusCode::BAD_REQUEST), "{statuses:?}");

    // Exactly one account came out of the race.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to count users");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn redemption_email_must_match_the_invitation() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };
    let owner = app.register_tenant("addr").await;
    let email = format!("invited-{}@test.io", Uuid::new_v4().simple());
    let invitation = app.invite(&owner.token, &email, "developer", &[]).await;

    let response = app.redeem(&invitation, "someone-else@test.io").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unknown_invitation_tokens_are_rejected() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let response = app.redeem("no-such-token", "nobody@test.io").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_INVITATION");
}
