//! Integration tests per gli endpoints degli utenti
//!
//! Test per:
//! - PUT /users/{user_id}
//! - DELETE /users/{user_id}

mod common;

#[cfg(test)]
mod user_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_update_own_account() {
        let app = create_test_app();
        let (user_id, token) =
            register_and_login(&app.server, "alice", "a@x.com", "password123").await;

        let response = app
            .server
            .put(&format!("/users/{}", user_id))
            .add_header(authorization(), format!("Bearer {}", token))
            .json(&json!({
                "username": "alice2",
                "email": "alice@x.com",
                "password": "newpassword"
            }))
            .await;

        response.assert_status_ok();
        let user: Value = response.json();
        assert_eq!(user["username"], "alice2");
        assert_eq!(user["email"], "alice@x.com");

        // la nuova password funziona, la vecchia no
        login(&app.server, "alice@x.com", "newpassword").await;
        app.server
            .post("/users/login")
            .json(&json!({ "email": "alice@x.com", "password": "password123" }))
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_old_token_after_email_change_no_longer_resolves() {
        let app = create_test_app();
        let (user_id, token) =
            register_and_login(&app.server, "alice", "a@x.com", "password123").await;

        app.server
            .put(&format!("/users/{}", user_id))
            .add_header(authorization(), format!("Bearer {}", token))
            .json(&json!({
                "username": "alice",
                "email": "alice@x.com",
                "password": "password123"
            }))
            .await
            .assert_status_ok();

        // the old token carries the old email
        app.server
            .post("/photos")
            .add_header(authorization(), format!("Bearer {}", token))
            .json(&photo_body("stale"))
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_update_other_account_forbidden() {
        let app = create_test_app();
        let (alice_id, _) = register_and_login(&app.server, "alice", "a@x.com", "password123").await;
        let (_, bob) = register_and_login(&app.server, "bob", "b@x.com", "password123").await;

        let response = app
            .server
            .put(&format!("/users/{}", alice_id))
            .add_header(authorization(), format!("Bearer {}", bob))
            .json(&json!({
                "username": "pwned",
                "email": "a@x.com",
                "password": "password123"
            }))
            .await;

        response.assert_status_forbidden();
        let alice = app.state.users.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(alice.username, "alice");
    }

    #[tokio::test]
    async fn test_update_to_taken_email_conflicts() {
        let app = create_test_app();
        let (alice_id, alice) =
            register_and_login(&app.server, "alice", "a@x.com", "password123").await;
        register(&app.server, "bob", "b@x.com", "password123").await;

        let response = app
            .server
            .put(&format!("/users/{}", alice_id))
            .add_header(authorization(), format!("Bearer {}", alice))
            .json(&json!({
                "username": "alice",
                "email": "b@x.com",
                "password": "password123"
            }))
            .await;

        response.assert_status_conflict();
    }

    #[tokio::test]
    async fn test_update_validation() {
        let app = create_test_app();
        let (user_id, token) =
            register_and_login(&app.server, "alice", "a@x.com", "password123").await;

        let response = app
            .server
            .put(&format!("/users/{}", user_id))
            .add_header(authorization(), format!("Bearer {}", token))
            .json(&json!({
                "username": "alice",
                "email": "a@x.com",
                "password": "short"
            }))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_delete_own_account_removes_photos() {
        let app = create_test_app();
        let (user_id, token) =
            register_and_login(&app.server, "alice", "a@x.com", "password123").await;

        app.server
            .post("/photos")
            .add_header(authorization(), format!("Bearer {}", token))
            .json(&photo_body("mine"))
            .await
            .assert_status(StatusCode::CREATED);

        app.server
            .delete(&format!("/users/{}", user_id))
            .add_header(authorization(), format!("Bearer {}", token))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        assert!(app.state.photos.list(100).await.unwrap().is_empty());
        app.server
            .post("/users/login")
            .json(&json!({ "email": "a@x.com", "password": "password123" }))
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_delete_other_account_forbidden() {
        let app = create_test_app();
        let (alice_id, _) = register_and_login(&app.server, "alice", "a@x.com", "password123").await;
        let (_, bob) = register_and_login(&app.server, "bob", "b@x.com", "password123").await;

        app.server
            .delete(&format!("/users/{}", alice_id))
            .add_header(authorization(), format!("Bearer {}", bob))
            .await
            .assert_status_forbidden();

        assert!(app.state.users.find_by_email("a@x.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_invalid_user_id_is_rejected() {
        let app = create_test_app();
        let (_, token) = register_and_login(&app.server, "alice", "a@x.com", "password123").await;

        let response = app
            .server
            .delete("/users/not-a-uuid")
            .add_header(authorization(), format!("Bearer {}", token))
            .await;

        response.assert_status_bad_request();
    }
}
