//! Integration tests for the authentication flow.

use std::sync::Arc;

use http::StatusCode;
use serde_json::json;

use cesizen_auth::jwt::encoder::JwtEncoder;
use cesizen_core::traits::FixedClock;
use cesizen_entity::user::Role;

use crate::helpers::{TEST_PASSWORD, TestApp, test_auth_config, unique_login};

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn login_success_returns_bearer_token() {
    let app = TestApp::new().await;
    let login = unique_login("log");
    app.create_user(&login, Role::User).await;

    let response = app
        .form_request(
            "POST",
            "/auth/login",
            &format!("username={login}&password={TEST_PASSWORD}"),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["token_type"], "bearer");
    assert!(response.body["access_token"].is_string());
    assert!(response.process_time.is_some());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn login_wrong_password_and_unknown_user_are_indistinguishable() {
    let app = TestApp::new().await;
    let login = unique_login("wpw");
    app.create_user(&login, Role::User).await;

    let wrong_password = app
        .form_request(
            "POST",
            "/auth/login",
            &format!("username={login}&password=Wrongpass1!"),
            None,
        )
        .await;
    let unknown_user = app
        .form_request(
            "POST",
            "/auth/login",
            &format!("username=nobody{login}&password={TEST_PASSWORD}"),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["message"], unknown_user.body["message"]);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn disabled_account_login_is_rejected_without_side_effects() {
    let app = TestApp::new().await;
    let login = unique_login("dis");
    let user = app.create_user(&login, Role::User).await;
    app.state.user_repo.disable(user.id, chrono::Utc::now()).await.unwrap();

    let response = app
        .form_request(
            "POST",
            "/auth/login",
            &format!("username={login}&password={TEST_PASSWORD}"),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    // Same generic message as any other credentials failure.
    assert_eq!(
        response.body["message"],
        "Incorrect username or password"
    );
    assert!(response.body["access_token"].is_null());

    // No state mutation: no last-login update, no login event.
    let reloaded = app
        .state
        .user_repo
        .find_by_id(user.id)
        .await
        .unwrap()
        .unwrap();
    assert!(reloaded.last_login_at.is_none());

    let events = cesizen_database::repositories::login_event::LoginEventRepository::new(
        app.db_pool.clone(),
    )
    .count_for_user(user.id)
    .await
    .unwrap();
    assert_eq!(events, 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn ten_logins_record_ten_events_and_overwrite_last_login() {
    let app = TestApp::new().await;
    let login = unique_login("ten");
    let user = app.create_user(&login, Role::User).await;

    let mut previous_last_login = None;
    for _ in 0..10 {
        app.login(&login).await;
        let reloaded = app
            .state
            .user_repo
            .find_by_id(user.id)
            .await
            .unwrap()
            .unwrap();
        let last_login = reloaded.last_login_at.expect("last_login_at set");
        if let Some(previous) = previous_last_login {
            assert!(last_login >= previous);
        }
        previous_last_login = Some(last_login);
    }

    let events = cesizen_database::repositories::login_event::LoginEventRepository::new(
        app.db_pool.clone(),
    )
    .find_for_user(user.id)
    .await
    .unwrap();
    assert_eq!(events.len(), 10);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn session_returns_profile_for_valid_token() {
    let app = TestApp::new().await;
    let login = unique_login("ses");
    app.create_user(&login, Role::User).await;
    let token = app.login(&login).await;

    let response = app.request("GET", "/auth/session", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["login"], login.as_str());
    assert_eq!(response.body["role"], "user");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn session_without_token_is_denied() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/auth/session", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "insufficient role");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn expired_token_gets_the_expiry_message() {
    let app = TestApp::new().await;
    let login = unique_login("exp");
    let user = app.create_user(&login, Role::User).await;

    // Issue with a clock one hour in the past; the 30-minute TTL has lapsed.
    let past = chrono::Utc::now() - chrono::Duration::hours(1);
    let encoder = JwtEncoder::new(&test_auth_config(), Arc::new(FixedClock(past))).unwrap();
    let token = encoder.issue(Some(&user)).unwrap();

    let response = app.request("GET", "/auth/session", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"],
        "Token has expired, please log in again"
    );
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn register_then_login() {
    let app = TestApp::new().await;
    let login = unique_login("reg");

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(json!({
                "login": login,
                "email": format!("{login}@example.com"),
                "password": TEST_PASSWORD,
                "confirm_password": TEST_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["login"], login.as_str());
    assert_eq!(response.body["role"], "user");

    app.login(&login).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn register_duplicate_login_and_email_report_both_fields() {
    let app = TestApp::new().await;
    let login = unique_login("dup");
    app.create_user(&login, Role::User).await;

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(json!({
                "login": login,
                "email": format!("{login}@example.com"),
                "password": TEST_PASSWORD,
                "confirm_password": TEST_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = &response.body["errors"];
    assert_eq!(errors["login"]["type"], "already_exists");
    assert_eq!(errors["email"]["type"], "already_exists");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn register_weak_password_reports_policy_violations() {
    let app = TestApp::new().await;
    let login = unique_login("wk");

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(json!({
                "login": login,
                "email": format!("{login}@example.com"),
                "password": "weak",
                "confirm_password": "weak",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"]["password"]["type"], "policy");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn self_delete_requires_the_password_again() {
    let app = TestApp::new().await;
    let login = unique_login("sdl");
    app.create_user(&login, Role::User).await;
    let token = app.login(&login).await;

    // Wrong password: rejected, account untouched.
    let response = app
        .request(
            "DELETE",
            "/user/delete",
            Some(json!({ "password": "Wrongpass1!" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // Correct password: soft-deleted.
    let response = app
        .request(
            "DELETE",
            "/user/delete",
            Some(json!({ "password": TEST_PASSWORD })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The account can no longer authenticate.
    let response = app
        .form_request(
            "POST",
            "/auth/login",
            &format!("username={login}&password={TEST_PASSWORD}"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn reset_password_rotates_the_credential() {
    let app = TestApp::new().await;
    let login = unique_login("rst");
    app.create_user(&login, Role::User).await;
    let token = app.login(&login).await;

    let new_password = "Freshpass2@";
    let response = app
        .request(
            "PATCH",
            "/user/reset-password",
            Some(json!({
                "old_password": TEST_PASSWORD,
                "password": new_password,
                "confirm_password": new_password,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    // Old password no longer works; the new one does.
    let old = app
        .form_request(
            "POST",
            "/auth/login",
            &format!("username={login}&password={TEST_PASSWORD}"),
            None,
        )
        .await;
    assert_eq!(old.status, StatusCode::UNAUTHORIZED);

    let fresh = app
        .form_request(
            "POST",
            "/auth/login",
            &format!("username={login}&password={new_password}"),
            None,
        )
        .await;
    assert_eq!(fresh.status, StatusCode::OK);
}
