//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use trackhub_core::config::AppConfig;

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Database pool for direct assertions.
    pub db_pool: PgPool,
}

/// A freshly registered tenant owner.
pub struct OwnerAccount {
    /// Bearer token from registration.
    pub token: String,
    /// The new tenant's id.
    pub tenant_id: String,
    /// Owner email.
    pub email: String,
    /// Owner password, for re-login.
    pub password: String,
}

/// A project created through the API.
pub struct TestProject {
    /// Project id.
    pub id: String,
    /// Bundle id, part of the device credential.
    pub bundle_id: String,
}

impl TestApp {
    /// Builds the full application against the test database, or `None`
    /// when no test database is configured.
    pub async fn spawn() -> Option<Self> {
        let url = std::env::var("TRACKHUB_TEST_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .ok()?;

        let mut config = AppConfig::load("test").expect("Failed to load test config");
        config.database.url = url;

        let db_pool = trackhub_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        trackhub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let state = trackhub_api::AppState::initialize(config, db_pool.clone());
        let router = trackhub_api::router::build_router(state);

        Some(Self { router, db_pool })
    }

    /// Registers a fresh tenant; emails are unique so tests can run in
    /// parallel against one database.
    pub async fn register_tenant(&self, label: &str) -> OwnerAccount {
        let email = format!("{label}-{}@test.io", Uuid::new_v4().simple());
        let password = "pw1".to_string();

        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(json!({
                    "tenant_name": format!("{label} Inc"),
                    "email": &email,
                    "full_name": "Test Owner",
                    "password": &password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Registration failed: {:?}",
            response.body
        );

        let data = &response.body["data"];
        OwnerAccount {
            token: data["access_token"]
                .as_str()
                .expect("No access_token in registration response")
                .to_string(),
            tenant_id: data["tenant"]["id"]
                .as_str()
                .expect("No tenant id in registration response")
                .to_string(),
            email,
            password,
        }
    }

    /// Creates an iOS project with a unique bundle id.
    pub async fn create_project(&self, token: &str) -> TestProject {
        let bundle_id = format!("com.test.app{}", Uuid::new_v4().simple());

        let response = self
            .request(
                "POST",
                "/api/projects",
                Some(json!({
                    "name": "Mobile App",
                    "platform": "ios",
                    "bundle_id": &bundle_id,
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Project creation failed: {:?}",
            response.body
        );

        TestProject {
            id: response.body["data"]["id"]
                .as_str()
                .expect("No project id in response")
                .to_string(),
            bundle_id,
        }
    }

    /// Issues an invitation and returns its token.
    pub async fn invite(
        &self,
        token: &str,
        email: &str,
        role: &str,
        project_ids: &[&str],
    ) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/invite",
                Some(json!({
                    "email": email,
                    "role": role,
                    "project_ids": project_ids,
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Invitation failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No invitation token in response")
            .to_string()
    }

    /// Attempts to redeem an invitation; callers assert on the outcome.
    pub async fn redeem(&self, invitation_token: &str, email: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/register-with-invite",
            Some(json!({
                "token": invitation_token,
                "email": email,
                "full_name": "Invited User",
                "password": "pw1",
            })),
            None,
        )
        .await
    }

    /// Make an HTTP request, optionally with a bearer token.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        match token {
            Some(token) => {
                let bearer = format!("Bearer {token}");
                self.send(method, path, body, &[("authorization", &bearer)])
                    .await
            }
            None => self.send(method, path, body, &[]).await,
        }
    }

    /// Make an HTTP request carrying the device-credential header triple.
    pub async fn device_request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        tenant_id: &str,
        project_id: &str,
        bundle_id: &str,
    ) -> TestResponse {
        self.send(
            method,
            path,
            body,
            &[
                ("x-tenant-id", tenant_id),
                ("x-project-id", project_id),
                ("x-bundle-id", bundle_id),
            ],
        )
        .await
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body.map(|b| b.to_string()).unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json");

        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}
