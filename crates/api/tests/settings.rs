//! HTTP-level tests for `/settings`, where accounts take on roles.

mod common;

use axum::http::StatusCode;
use common::{
    assert_redirect, body_text, create_account, flash_message, get, login_cookie,
    make_game_master, make_player, post_form, TEST_PASSWORD,
};
use gamemaster_db::repositories::{GameMasterRepo, PlayerRepo};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_requires_login(pool: PgPool) {
    let app = common::build_test_app(pool);

    assert_redirect(&get(app.clone(), "/settings", None).await, "/");
    let response = post_form(
        app,
        "/settings",
        &[("user_nickname", "N"), ("is_game_master", "on")],
        None,
    )
    .await;
    assert_redirect(&response, "/");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_become_game_master(pool: PgPool) {
    let account = create_account(&pool, "testuser").await;
    let app = common::build_test_app(pool.clone());
    let cookie = login_cookie(app.clone(), "testuser", TEST_PASSWORD).await;

    let response = post_form(
        app,
        "/settings",
        &[("user_nickname", "TestNickname"), ("is_game_master", "True")],
        Some(&cookie),
    )
    .await;

    assert_redirect(&response, "/dashboard");
    let gm = GameMasterRepo::find_by_account(&pool, account.id)
        .await
        .unwrap()
        .expect("game master row should exist");
    assert_eq!(gm.user_nickname, "TestNickname");
    assert_eq!(GameMasterRepo::count_by_account(&pool, account.id).await.unwrap(), 1);
    assert!(PlayerRepo::find_by_account(&pool, account.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_nickname_creates_nothing(pool: PgPool) {
    let account = create_account(&pool, "testuser").await;
    let app = common::build_test_app(pool.clone());
    let cookie = login_cookie(app.clone(), "testuser", TEST_PASSWORD).await;

    let response = post_form(
        app,
        "/settings",
        &[("user_nickname", ""), ("is_game_master", "True")],
        Some(&cookie),
    )
    .await;

    assert_redirect(&response, "/settings");
    assert_eq!(
        flash_message(&response).as_deref(),
        Some("Fill in all fields correctly")
    );
    assert_eq!(GameMasterRepo::count_by_account(&pool, account.id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_role_selected_creates_nothing(pool: PgPool) {
    let account = create_account(&pool, "testuser").await;
    let app = common::build_test_app(pool.clone());
    let cookie = login_cookie(app.clone(), "testuser", TEST_PASSWORD).await;

    let response = post_form(
        app,
        "/settings",
        &[("user_nickname", "Nick")],
        Some(&cookie),
    )
    .await;

    assert_redirect(&response, "/settings");
    assert_eq!(GameMasterRepo::count_by_account(&pool, account.id).await.unwrap(), 0);
    assert_eq!(PlayerRepo::count_by_account(&pool, account.id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_take_both_roles_at_once(pool: PgPool) {
    let account = create_account(&pool, "testuser").await;
    let app = common::build_test_app(pool.clone());
    let cookie = login_cookie(app.clone(), "testuser", TEST_PASSWORD).await;

    let response = post_form(
        app.clone(),
        "/settings",
        &[
            ("user_nickname", "Nick"),
            ("is_game_master", "on"),
            ("is_player", "on"),
        ],
        Some(&cookie),
    )
    .await;

    assert_redirect(&response, "/dashboard");
    assert_eq!(GameMasterRepo::count_by_account(&pool, account.id).await.unwrap(), 1);
    let player = PlayerRepo::find_by_account(&pool, account.id)
        .await
        .unwrap()
        .expect("player row should exist");
    assert_eq!(player.player_nickname, "Nick");

    let body = body_text(get(app, "/settings", Some(&cookie)).await).await;
    assert!(body.contains("Game master as Nick"));
    assert!(body.contains("Player as Nick"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_game_master_request_conflicts(pool: PgPool) {
    let account = create_account(&pool, "testuser").await;
    make_game_master(&pool, &account, "First").await;
    let app = common::build_test_app(pool.clone());
    let cookie = login_cookie(app.clone(), "testuser", TEST_PASSWORD).await;

    let response = post_form(
        app,
        "/settings",
        &[("user_nickname", "Second"), ("is_game_master", "on")],
        Some(&cookie),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(body_text(response).await.contains("CONFLICT"));
    let gm = GameMasterRepo::find_by_account(&pool, account.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(gm.user_nickname, "First");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_conflicting_role_request_grants_nothing(pool: PgPool) {
    let account = create_account(&pool, "testuser").await;
    make_player(&pool, &account, "Existing").await;
    let app = common::build_test_app(pool.clone());
    let cookie = login_cookie(app.clone(), "testuser", TEST_PASSWORD).await;

    let response = post_form(
        app,
        "/settings",
        &[
            ("user_nickname", "Nick"),
            ("is_game_master", "on"),
            ("is_player", "on"),
        ],
        Some(&cookie),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(GameMasterRepo::count_by_account(&pool, account.id).await.unwrap(), 0);
    let player = PlayerRepo::find_by_account(&pool, account.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(player.player_nickname, "Existing");
}
