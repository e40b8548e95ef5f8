//! Integration tests for the public leaderboard projection.

use sqlx::PgPool;
use venturevibe_core::fallback::fallback_report;
use venturevibe_core::idea::IdeaInput;
use venturevibe_core::leaderboard::ANONYMOUS_FOUNDER;
use venturevibe_db::models::user::CreateUser;
use venturevibe_db::models::venture_session::{CreateVentureAnalysis, RecordOutcome};
use venturevibe_db::repositories::{LeaderboardRepo, UserRepo, VentureSessionRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_user(pool: &PgPool, email: &str, name: Option<&str>) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            name: name.map(str::to_string),
        },
    )
    .await
    .unwrap()
    .id
}

/// Record a session whose stored index is forced to `index`.
async fn record_with_index(pool: &PgPool, user_id: i64, title: &str, index: i32) -> i64 {
    let idea = IdeaInput {
        idea_title: title.to_string(),
        idea_description: "An idea used for ranking tests.".to_string(),
        industry: "Fintech".to_string(),
        target_market: "Freelancers".to_string(),
    };
    let mut analysis = CreateVentureAnalysis::from_report(&fallback_report(&idea), false);
    analysis.startup_viability_index = index;

    match VentureSessionRepo::record(pool, user_id, &idea, &analysis, 100)
        .await
        .unwrap()
    {
        RecordOutcome::Recorded(detail) => detail.session.id,
        RecordOutcome::QuotaExhausted => panic!("quota unexpectedly exhausted"),
    }
}

// ---------------------------------------------------------------------------
// Test: ordering by index, ties in insertion order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_leaderboard_orders_by_index_then_insertion(pool: PgPool) {
    let user = new_user(&pool, "ranker@example.com", Some("Rhea")).await;
    record_with_index(&pool, user, "Middle", 70).await;
    record_with_index(&pool, user, "Top", 90).await;
    record_with_index(&pool, user, "Tie A", 50).await;
    record_with_index(&pool, user, "Tie B", 50).await;

    let board = LeaderboardRepo::top(&pool, 20).await.unwrap();

    let titles: Vec<&str> = board.iter().map(|e| e.idea_title.as_str()).collect();
    assert_eq!(titles, vec!["Top", "Middle", "Tie A", "Tie B"]);
    let ranks: Vec<usize> = board.iter().map(|e| e.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    assert_eq!(board[0].founder_name, "Rhea");
    assert_eq!(board[0].startup_viability_index, 90);
}

// ---------------------------------------------------------------------------
// Test: limit and soft delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_leaderboard_respects_limit_and_soft_delete(pool: PgPool) {
    let user = new_user(&pool, "limits@example.com", Some("Lee")).await;
    let best = record_with_index(&pool, user, "Best", 95).await;
    record_with_index(&pool, user, "Second", 80).await;
    record_with_index(&pool, user, "Third", 60).await;

    assert_eq!(LeaderboardRepo::top(&pool, 2).await.unwrap().len(), 2);

    VentureSessionRepo::soft_delete_for_user(&pool, best, user)
        .await
        .unwrap();
    let board = LeaderboardRepo::top(&pool, 20).await.unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].idea_title, "Second");
    assert_eq!(board[0].rank, 1);
}

// ---------------------------------------------------------------------------
// Test: users without a name appear as anonymous
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_leaderboard_anonymous_founder(pool: PgPool) {
    let user = new_user(&pool, "nameless@example.com", None).await;
    record_with_index(&pool, user, "Stealth", 77).await;

    let board = LeaderboardRepo::top(&pool, 20).await.unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].founder_name, ANONYMOUS_FOUNDER);
}

// ---------------------------------------------------------------------------
// Test: empty leaderboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_leaderboard_empty(pool: PgPool) {
    assert!(LeaderboardRepo::top(&pool, 20).await.unwrap().is_empty());
}
