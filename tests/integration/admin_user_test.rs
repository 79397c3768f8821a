//! Integration tests for admin account management and route gating.

use http::StatusCode;
use serde_json::json;

use cesizen_entity::user::Role;

use crate::helpers::{TestApp, unique_login};

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn admin_route_denies_user_token_and_accepts_admin_token() {
    let app = TestApp::new().await;
    let user_login = unique_login("usr");
    let admin_login = unique_login("adm");
    app.create_user(&user_login, Role::User).await;
    app.create_user(&admin_login, Role::Admin).await;

    let user_token = app.login(&user_login).await;
    let admin_token = app.login(&admin_login).await;

    let denied = app
        .request("GET", "/admin/users", None, Some(&user_token))
        .await;
    assert_eq!(denied.status, StatusCode::UNAUTHORIZED);
    assert_eq!(denied.body["message"], "insufficient role");

    let allowed = app
        .request("GET", "/admin/users", None, Some(&admin_token))
        .await;
    assert_eq!(allowed.status, StatusCode::OK);
    assert!(allowed.body["users"].is_array());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn disable_enable_round_trip() {
    let app = TestApp::new().await;
    let admin_login = unique_login("ade");
    let target_login = unique_login("tgt");
    app.create_user(&admin_login, Role::Admin).await;
    let target = app.create_user(&target_login, Role::User).await;
    let token = app.login(&admin_login).await;

    let disable = app
        .request(
            "PATCH",
            &format!("/admin/users/disable/{}", target.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(disable.status, StatusCode::OK);

    // Second disable observes "already disabled".
    let again = app
        .request(
            "PATCH",
            &format!("/admin/users/disable/{}", target.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(again.body["message"], "Target account is already disabled");

    let enable = app
        .request(
            "PATCH",
            &format!("/admin/users/enable/{}", target.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(enable.status, StatusCode::OK);

    let again = app
        .request(
            "PATCH",
            &format!("/admin/users/enable/{}", target.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(again.body["message"], "Target account is already enabled");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn deletion_is_terminal() {
    let app = TestApp::new().await;
    let admin_login = unique_login("adt");
    let target_login = unique_login("ter");
    app.create_user(&admin_login, Role::Admin).await;
    let target = app.create_user(&target_login, Role::User).await;
    let token = app.login(&admin_login).await;

    let delete = app
        .request(
            "DELETE",
            &format!("/admin/users/delete/{}", target.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::OK);

    // Neither enable, disable, nor a second delete succeeds afterwards.
    let disable = app
        .request(
            "PATCH",
            &format!("/admin/users/disable/{}", target.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(disable.status, StatusCode::BAD_REQUEST);
    assert_eq!(disable.body["message"], "Target account is deleted");

    let enable = app
        .request(
            "PATCH",
            &format!("/admin/users/enable/{}", target.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(enable.status, StatusCode::BAD_REQUEST);
    assert_eq!(enable.body["message"], "Target account is deleted");

    let delete_again = app
        .request(
            "DELETE",
            &format!("/admin/users/delete/{}", target.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(delete_again.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        delete_again.body["message"],
        "Target account is already deleted"
    );
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn admin_accounts_are_immune_to_disable_and_delete() {
    let app = TestApp::new().await;
    let admin_login = unique_login("adi");
    let other_admin_login = unique_login("ado");
    app.create_user(&admin_login, Role::Admin).await;
    let other_admin = app.create_user(&other_admin_login, Role::Admin).await;
    let token = app.login(&admin_login).await;

    let disable = app
        .request(
            "PATCH",
            &format!("/admin/users/disable/{}", other_admin.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(disable.status, StatusCode::BAD_REQUEST);
    assert_eq!(disable.body["message"], "Target account is an administrator");

    let delete = app
        .request(
            "DELETE",
            &format!("/admin/users/delete/{}", other_admin.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::BAD_REQUEST);
    assert_eq!(delete.body["message"], "Target account is an administrator");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn promote_elevates_user_to_admin_once() {
    let app = TestApp::new().await;
    let admin_login = unique_login("adp");
    let target_login = unique_login("pro");
    app.create_user(&admin_login, Role::Admin).await;
    let target = app.create_user(&target_login, Role::User).await;
    let token = app.login(&admin_login).await;

    let promote = app
        .request(
            "PATCH",
            &format!("/admin/users/promote/{}", target.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(promote.status, StatusCode::OK);

    let reloaded = app
        .state
        .user_repo
        .find_by_id(target.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.role, Role::Admin);

    let again = app
        .request(
            "PATCH",
            &format!("/admin/users/promote/{}", target.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        again.body["message"],
        "Target account is already an administrator"
    );
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn mutations_on_unknown_targets_fail_cleanly() {
    let app = TestApp::new().await;
    let admin_login = unique_login("adu");
    app.create_user(&admin_login, Role::Admin).await;
    let token = app.login(&admin_login).await;

    let missing = uuid::Uuid::new_v4();
    for (method, path) in [
        ("PATCH", format!("/admin/users/disable/{missing}")),
        ("PATCH", format!("/admin/users/enable/{missing}")),
        ("DELETE", format!("/admin/users/delete/{missing}")),
        ("PATCH", format!("/admin/users/promote/{missing}")),
    ] {
        let response = app.request(method, &path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(response.body["message"], "Target account does not exist");
    }
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn listing_rejects_non_positive_pagination() {
    let app = TestApp::new().await;
    let admin_login = unique_login("adl");
    app.create_user(&admin_login, Role::Admin).await;
    let token = app.login(&admin_login).await;

    let response = app
        .request("GET", "/admin/users?page=0", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("GET", "/admin/users?size=0", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn listing_filters_by_derived_status() {
    let app = TestApp::new().await;
    let admin_login = unique_login("adf");
    let disabled_login = unique_login("dfl");
    app.create_user(&admin_login, Role::Admin).await;
    let disabled = app.create_user(&disabled_login, Role::User).await;
    let token = app.login(&admin_login).await;

    app.request(
        "PATCH",
        &format!("/admin/users/disable/{}", disabled.id),
        None,
        Some(&token),
    )
    .await;

    let response = app
        .request(
            "GET",
            "/admin/users?status=disabled&size=100",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let users = response.body["users"].as_array().unwrap();
    assert!(
        users
            .iter()
            .any(|u| u["login"] == disabled_login.as_str() && u["status"] == "disabled")
    );
    assert!(users.iter().all(|u| u["status"] == "disabled"));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn admin_article_lifecycle() {
    let app = TestApp::new().await;
    let admin_login = unique_login("art");
    app.create_user(&admin_login, Role::Admin).await;
    let token = app.login(&admin_login).await;

    // A category to file the article under.
    let category_id: i32 =
        sqlx::query_scalar("INSERT INTO categories (label) VALUES ($1) RETURNING id")
            .bind(format!("wellness-{admin_login}"))
            .fetch_one(&app.db_pool)
            .await
            .unwrap();

    let created = app
        .request(
            "POST",
            "/admin/article",
            Some(json!({
                "title": "Breathing through stress",
                "content": "<p>Slow down.</p>",
                "category": category_id,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);

    // Articles are publicly readable, no token required.
    let listing = app.request("GET", "/articles", None, None).await;
    assert_eq!(listing.status, StatusCode::OK);
    assert!(listing.body["count"].as_u64().unwrap() >= 1);

    // Creating against a dangling category is a validation failure.
    let dangling = app
        .request(
            "POST",
            "/admin/article",
            Some(json!({
                "title": "Orphan",
                "content": "<p>No home.</p>",
                "category": 999_999,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(dangling.status, StatusCode::BAD_REQUEST);
}
