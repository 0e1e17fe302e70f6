//! Integration tests for profile management and password change.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, put_json_auth};
use sqlx::PgPool;

const PASSWORD: &str = "first-password";

async fn register(app: axum::Router, username: &str) -> String {
    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@example.com"),
        "password": PASSWORD,
        "fullName": "Full Name",
        "phoneNumber": "+1-555-0100",
    });
    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string()
}

// ---------------------------------------------------------------------------
// Read and update
// ---------------------------------------------------------------------------

/// The profile is the public view of the account row.
#[sqlx::test(migrations = "../../db/migrations")]
async fn profile_shows_public_fields_only(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register(app.clone(), "alice").await;

    let response = get_auth(app, "/api/profile", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["username"], "alice");
    assert_eq!(json["email"], "alice@example.com");
    assert_eq!(json["fullName"], "Full Name");
    assert_eq!(json["phoneNumber"], "+1-555-0100");
    assert!(json.as_object().unwrap().get("password").is_none());
    assert!(json.as_object().unwrap().get("passwordHash").is_none());
}

/// Unset fields keep their stored values on update.
#[sqlx::test(migrations = "../../db/migrations")]
async fn update_profile_is_partial(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register(app.clone(), "bob").await;

    let body = serde_json::json!({ "fullName": "Robert Tables" });
    let response = put_json_auth(app.clone(), "/api/profile", &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["fullName"], "Robert Tables");
    assert_eq!(json["username"], "bob");
    assert_eq!(json["phoneNumber"], "+1-555-0100");

    let body = serde_json::json!({ "username": "bobby" });
    let response = put_json_auth(app, "/api/profile", &token, body).await;
    let json = body_json(response).await;
    assert_eq!(json["username"], "bobby");
    assert_eq!(json["fullName"], "Robert Tables");
}

/// Taking another account's username is a conflict.
#[sqlx::test(migrations = "../../db/migrations")]
async fn update_profile_username_collision_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(app.clone(), "alice").await;
    let bob = register(app.clone(), "bob").await;

    let body = serde_json::json!({ "username": "alice" });
    let response = put_json_auth(app, "/api/profile", &bob, body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

/// Short usernames are rejected by validation.
#[sqlx::test(migrations = "../../db/migrations")]
async fn update_profile_validates_username(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register(app.clone(), "carol").await;

    let body = serde_json::json!({ "username": "cc" });
    let response = put_json_auth(app, "/api/profile", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Password change
// ---------------------------------------------------------------------------

/// The current password gates the change.
#[sqlx::test(migrations = "../../db/migrations")]
async fn change_password_requires_current_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register(app.clone(), "dave").await;

    let body = serde_json::json!({
        "currentPassword": "wrong-guess",
        "newPassword": "second-password",
        "confirmPassword": "second-password",
    });
    let response = put_json_auth(app, "/api/profile/change-password", &token, body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Current password is incorrect");
}

/// Changing the password swaps the credential and kills every session.
#[sqlx::test(migrations = "../../db/migrations")]
async fn change_password_swaps_credential_and_revokes_sessions(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register(app.clone(), "erin").await;

    let body = serde_json::json!({
        "currentPassword": PASSWORD,
        "newPassword": "second-password",
        "confirmPassword": "second-password",
    });
    let response = put_json_auth(app.clone(), "/api/profile/change-password", &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Password changed successfully");

    // The session that made the change is gone with the rest.
    let response = get_auth(app.clone(), "/api/profile", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Session expired");

    let body = serde_json::json!({ "identifier": "erin", "password": PASSWORD });
    let response = post_json(app.clone(), "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = serde_json::json!({ "identifier": "erin", "password": "second-password" });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Confirmation mismatch is caught by validation.
#[sqlx::test(migrations = "../../db/migrations")]
async fn change_password_checks_confirmation(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register(app.clone(), "frank").await;

    let body = serde_json::json!({
        "currentPassword": PASSWORD,
        "newPassword": "second-password",
        "confirmPassword": "different-password",
    });
    let response = put_json_auth(app, "/api/profile/change-password", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
