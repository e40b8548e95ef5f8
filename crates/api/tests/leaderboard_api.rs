//! HTTP-level integration tests for the public `/leaderboard` endpoint.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    build_test_app, build_test_app_with_provider, create_user_with_token, delete_auth,
    expect_status, get, idea_body, post_json_auth, StubProvider, VALID_ANALYSIS,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_leaderboard_is_public_and_ranked(pool: PgPool) {
    let (_, token) = create_user_with_token(&pool, "founder@example.com", Some("Fay")).await;

    let fallback = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/sessions",
        idea_body("Middling"),
        &token,
    )
    .await;
    expect_status(fallback, StatusCode::CREATED).await;

    let real = post_json_auth(
        build_test_app_with_provider(
            pool.clone(),
            Arc::new(StubProvider::replying(VALID_ANALYSIS)),
        ),
        "/api/v1/sessions",
        idea_body("Winner"),
        &token,
    )
    .await;
    expect_status(real, StatusCode::CREATED).await;

    let response = get(build_test_app(pool), "/api/v1/leaderboard").await;
    let json = expect_status(response, StatusCode::OK).await;
    let entries = json["data"].as_array().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["idea_title"], "Winner");
    assert_eq!(entries[0]["startup_viability_index"], 77);
    assert_eq!(entries[0]["founder_name"], "Fay");
    assert_eq!(entries[1]["rank"], 2);
    assert_eq!(entries[1]["startup_viability_index"], 65);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_leaderboard_limit_and_deleted(pool: PgPool) {
    let (_, token) = create_user_with_token(&pool, "many@example.com", None).await;
    let mut ids = Vec::new();
    for title in ["One", "Two", "Three"] {
        let response = post_json_auth(
            build_test_app(pool.clone()),
            "/api/v1/sessions",
            idea_body(title),
            &token,
        )
        .await;
        let json = expect_status(response, StatusCode::CREATED).await;
        ids.push(json["data"]["id"].as_i64().unwrap());
    }

    let limited = get(build_test_app(pool.clone()), "/api/v1/leaderboard?limit=2").await;
    let json = expect_status(limited, StatusCode::OK).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // limit=0 is clamped up to 1.
    let clamped = get(build_test_app(pool.clone()), "/api/v1/leaderboard?limit=0").await;
    let json = expect_status(clamped, StatusCode::OK).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let uri = format!("/api/v1/sessions/{}", ids[0]);
    expect_status(
        delete_auth(build_test_app(pool.clone()), &uri, &token).await,
        StatusCode::NO_CONTENT,
    )
    .await;

    let response = get(build_test_app(pool), "/api/v1/leaderboard").await;
    let json = expect_status(response, StatusCode::OK).await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e["idea_title"] != "One"));
    assert!(entries.iter().all(|e| e["founder_name"] == "Anonymous"));
}
