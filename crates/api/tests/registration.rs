//! HTTP-level tests for `/register` and `/start`.

mod common;

use axum::http::StatusCode;
use common::{assert_redirect, body_text, flash_message, get, login_cookie, post_form};
use gamemaster_api::flash::encode_flash;
use gamemaster_db::repositories::AccountRepo;
use sqlx::PgPool;

fn registration<'a>(username: &'a str, password2: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("username", username),
        ("first_name", "Test"),
        ("last_name", "User"),
        ("email", "test@example.com"),
        ("password", "testpassword"),
        ("password2", password2),
    ]
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_page_renders(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/register", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("name=\"password2\""));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_password_mismatch_creates_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_form(
        app,
        "/register",
        &registration("testuser", "mismatchedpassword"),
        None,
    )
    .await;

    assert_redirect(&response, "/register");
    assert_eq!(
        flash_message(&response).as_deref(),
        Some("Passwords do not match!")
    );
    assert_eq!(AccountRepo::count_by_username(&pool, "testuser").await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_successful_registration(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_form(
        app,
        "/register",
        &registration("testuser", "testpassword"),
        None,
    )
    .await;

    assert_redirect(&response, "/start");
    assert_eq!(
        flash_message(&response).as_deref(),
        Some("Account created for testuser. You can log in now.")
    );
    assert_eq!(AccountRepo::count_by_username(&pool, "testuser").await.unwrap(), 1);
    let account = AccountRepo::find_by_username(&pool, "testuser")
        .await
        .unwrap()
        .expect("account should exist");
    assert_eq!(account.email, "test@example.com");
    assert!(account.is_active);
    assert_ne!(account.password_hash, "testpassword");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_registered_account_can_log_in(pool: PgPool) {
    let app = common::build_test_app(pool);
    post_form(
        app.clone(),
        "/register",
        &registration("testuser", "testpassword"),
        None,
    )
    .await;

    let cookie = login_cookie(app, "testuser", "testpassword").await;
    assert!(cookie.starts_with("session="));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_taken_username_is_refused(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_form(
        app.clone(),
        "/register",
        &registration("testuser", "testpassword"),
        None,
    )
    .await;

    let response = post_form(
        app,
        "/register",
        &registration("testuser", "testpassword"),
        None,
    )
    .await;

    assert_redirect(&response, "/register");
    assert_eq!(
        flash_message(&response).as_deref(),
        Some("Username or email is already taken")
    );
    assert_eq!(AccountRepo::count_by_username(&pool, "testuser").await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_taken_email_is_refused(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_form(
        app.clone(),
        "/register",
        &registration("first", "testpassword"),
        None,
    )
    .await;

    let response = post_form(
        app,
        "/register",
        &registration("second", "testpassword"),
        None,
    )
    .await;

    assert_redirect(&response, "/register");
    assert_eq!(AccountRepo::count_by_username(&pool, "second").await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_field_errors_are_flashed(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let mut fields = registration("testuser", "testpassword");
    fields[3] = ("email", "not-an-email");
    let response = post_form(app.clone(), "/register", &fields, None).await;
    assert_redirect(&response, "/register");
    assert_eq!(
        flash_message(&response).as_deref(),
        Some("Enter a valid email address")
    );

    let mut fields = registration("testuser", "testpassword");
    fields.remove(1);
    let response = post_form(app, "/register", &fields, None).await;
    assert_redirect(&response, "/register");
    assert_eq!(
        flash_message(&response).as_deref(),
        Some("First name is required")
    );

    assert_eq!(AccountRepo::count_by_username(&pool, "testuser").await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_start_page_shows_flash(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = format!("flash={}", encode_flash("Account created for testuser."));

    let response = get(app, "/start", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("Account created for testuser."));
}
