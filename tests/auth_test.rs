//! Integration tests for registration, login and the auth gate.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use helpers::{ADMIN_EMAIL, PASSWORD, TestApp};

#[tokio::test]
async fn test_register_returns_token_and_staff_profile() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "firstName": "Amina",
                "lastName": "Okello",
                "email": "Amina@Example.com",
                "password": PASSWORD,
                "position": "Analyst",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["token"].as_str().is_some());
    assert!(response.body["expiresAt"].as_str().is_some());
    assert_eq!(response.body["user"]["kind"], "StaffMember");
    assert_eq!(response.body["user"]["email"], "amina@example.com");
    assert_eq!(response.body["user"]["role"], "Employee");
    assert!(response.body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    app.register_staff("Brian", "Mutua", "Employee").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "firstName": "Brian",
                "lastName": "Mutua",
                "email": "brian.mutua@hrportal.test",
                "password": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_register_missing_fields_is_validation_error() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "x@hrportal.test" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    app.register_staff("Carol", "Wanjiru", "Employee").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "carol.wanjiru@hrportal.test", "password": "not-it" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "nobody@hrportal.test", "password": "not-it" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_admin_account_logs_in() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": ADMIN_EMAIL, "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["kind"], "Account");
    assert_eq!(response.body["user"]["role"], "Admin");
}

#[tokio::test]
async fn test_profile_requires_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/profile", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_profile_rejects_garbage_token() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/auth/profile", None, Some("not.a.token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_accepts_access_token_header() {
    let app = TestApp::new().await;
    let (token, id) = app.register_staff("Daniel", "Kiprop", "Employee").await;

    let req = Request::builder()
        .method("GET")
        .uri("/api/auth/profile")
        .header("x-access-token", token)
        .body(Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["id"], id.to_string());
}

#[tokio::test]
async fn test_token_of_deleted_employee_is_rejected() {
    let app = TestApp::new().await;
    let (token, id) = app.register_staff("Esther", "Achieng", "Employee").await;
    let admin = app.admin_token().await;

    let deleted = app
        .request("DELETE", &format!("/api/employees/{id}"), None, Some(&admin))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/auth/profile", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_admin_requires_admin_role() {
    let app = TestApp::new().await;
    let (hr_token, _) = app.register_staff("Faith", "Njeri", "HR").await;
    let body = json!({
        "username": "ops",
        "email": "ops@hrportal.test",
        "password": PASSWORD,
        "role": "Manager",
    });

    let forbidden = app
        .request(
            "POST",
            "/api/auth/register-admin",
            Some(body.clone()),
            Some(&hr_token),
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
    assert_eq!(forbidden.body["error"], "FORBIDDEN");

    let admin = app.admin_token().await;
    let created = app
        .request("POST", "/api/auth/register-admin", Some(body), Some(&admin))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["user"]["role"], "Manager");
    assert_eq!(created.body["user"]["kind"], "Account");
    assert!(created.body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_change_password_then_login_with_new_one() {
    let app = TestApp::new().await;
    let (token, _) = app.register_staff("George", "Otieno", "Employee").await;

    let wrong = app
        .request(
            "PUT",
            "/api/auth/change-password",
            Some(json!({ "currentPassword": "nope", "newPassword": "brand-new-1" })),
            Some(&token),
        )
        .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body["message"], "Incorrect current password");

    let changed = app
        .request(
            "PUT",
            "/api/employees/my-profile/change-password",
            Some(json!({ "currentPassword": PASSWORD, "newPassword": "brand-new-1" })),
            Some(&token),
        )
        .await;
    assert_eq!(changed.status, StatusCode::OK);

    app.login("george.otieno@hrportal.test", "brand-new-1").await;
}

#[tokio::test]
async fn test_logout_is_stateless() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/api/auth/logout", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["message"].as_str().is_some());
}

#[tokio::test]
async fn test_health_and_unknown_route() {
    let app = TestApp::new().await;

    let health = app.request("GET", "/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "OK");

    let missing = app.request("GET", "/api/nope", None, None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "NOT_FOUND");
    assert_eq!(missing.body["message"], "Route not found");
}
