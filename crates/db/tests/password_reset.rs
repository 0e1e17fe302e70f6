//! Integration tests for password reset code storage.
//!
//! Pins the reset-code invariants:
//! - Issuing a new code invalidates any previous one
//! - A code can be claimed exactly once
//! - A wrong code never burns the live one
//! - Expired codes are still returned by `consume`; expiry is the caller's check
//! - Codes are scoped per user

use chrono::{Duration, Utc};
use sqlx::PgPool;

use folio_db::models::user::CreateUser;
use folio_db::repositories::{PasswordResetRepo, UserRepo};

async fn seed_user(pool: &PgPool, username: &str) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "$argon2id$fake".to_string(),
            full_name: None,
            phone_number: None,
        },
    )
    .await
    .unwrap();
    user.id
}

fn in_fifteen_minutes() -> chrono::DateTime<Utc> {
    Utc::now() + Duration::minutes(15)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_code_supersedes_previous(pool: PgPool) {
    let user_id = seed_user(&pool, "alice").await;

    PasswordResetRepo::replace_for_user(&pool, user_id, "111111", in_fifteen_minutes())
        .await
        .unwrap();
    PasswordResetRepo::replace_for_user(&pool, user_id, "222222", in_fifteen_minutes())
        .await
        .unwrap();

    assert_eq!(
        PasswordResetRepo::count_for_user(&pool, user_id).await.unwrap(),
        1
    );

    // The superseded code is gone; the fresh one claims.
    let stale = PasswordResetRepo::consume(&pool, user_id, "111111")
        .await
        .unwrap();
    assert!(stale.is_none());
    let fresh = PasswordResetRepo::consume(&pool, user_id, "222222")
        .await
        .unwrap();
    assert!(fresh.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_code_claims_exactly_once(pool: PgPool) {
    let user_id = seed_user(&pool, "alice").await;
    PasswordResetRepo::replace_for_user(&pool, user_id, "123456", in_fifteen_minutes())
        .await
        .unwrap();

    let first = PasswordResetRepo::consume(&pool, user_id, "123456")
        .await
        .unwrap();
    assert!(first.is_some());

    let second = PasswordResetRepo::consume(&pool, user_id, "123456")
        .await
        .unwrap();
    assert!(second.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wrong_code_leaves_live_code_intact(pool: PgPool) {
    let user_id = seed_user(&pool, "alice").await;
    PasswordResetRepo::replace_for_user(&pool, user_id, "123456", in_fifteen_minutes())
        .await
        .unwrap();

    let miss = PasswordResetRepo::consume(&pool, user_id, "654321")
        .await
        .unwrap();
    assert!(miss.is_none());

    // The live code survives the failed attempt.
    assert_eq!(
        PasswordResetRepo::count_for_user(&pool, user_id).await.unwrap(),
        1
    );
    let hit = PasswordResetRepo::consume(&pool, user_id, "123456")
        .await
        .unwrap();
    assert!(hit.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expired_code_is_returned_for_caller_check(pool: PgPool) {
    let user_id = seed_user(&pool, "alice").await;
    PasswordResetRepo::replace_for_user(&pool, user_id, "123456", Utc::now() - Duration::minutes(1))
        .await
        .unwrap();

    let token = PasswordResetRepo::consume(&pool, user_id, "123456")
        .await
        .unwrap()
        .unwrap();
    assert!(token.is_expired(Utc::now()));

    // The claim still removed the row even though it was expired.
    assert_eq!(
        PasswordResetRepo::count_for_user(&pool, user_id).await.unwrap(),
        0
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_codes_are_scoped_per_user(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;

    PasswordResetRepo::replace_for_user(&pool, alice, "111111", in_fifteen_minutes())
        .await
        .unwrap();
    PasswordResetRepo::replace_for_user(&pool, bob, "222222", in_fifteen_minutes())
        .await
        .unwrap();

    // Alice cannot claim Bob's code, and issuing for Alice left Bob's alone.
    let cross = PasswordResetRepo::consume(&pool, alice, "222222")
        .await
        .unwrap();
    assert!(cross.is_none());
    assert_eq!(PasswordResetRepo::count_for_user(&pool, bob).await.unwrap(), 1);
}
