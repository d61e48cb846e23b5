
use serde_json::{Value, json};
use uuid::Uuid;

use spotter_core::ApplicationError;
use spotter_domain::models::{complaint::Complaint, user::User};
use spotter_web::handlers::USER_ID_HEADER;

use crate::test_utils::tests::{error_kind, setup_web_app};

#[tokio::test]
async fn test_create_and_fetch_profile() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let user_id = app.create_user("alice").await;

    let res = app.get(user_id, "/users/me").send().await.unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"], user_id.to_string());
    assert_eq!(body["username"], "alice");
    assert_eq!(body["tier"], "free");
    assert_eq!(body["preferences"]["weight_unit"], "kilograms");

    let stored = app.test_ctx.store.document::<User>(user_id).unwrap();
    assert_eq!(stored.email, "alice@example.com");
    Ok(())
}

#[tokio::test]
async fn test_requests_without_identity_are_rejected() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;

    let res = app.client.get(app.url("/users/me")).send().await.unwrap();
    assert_eq!(res.status(), 401);
    assert_eq!(error_kind(res).await, "unauthorized");

    let res = app
        .client
        .get(app.url("/users/me"))
        .header(USER_ID_HEADER, "not-a-uuid")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);

    assert!(app.test_ctx.store.calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_and_unknown_profiles() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let user_id = app.create_user("alice").await;

    let res = app
        .post(user_id, "/users")
        .json(&json!({ "username": "alice2", "email": "alice2@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 409);
    assert_eq!(error_kind(res).await, "duplicate");

    let res = app.get(Uuid::new_v4(), "/users/me").send().await.unwrap();
    assert_eq!(res.status(), 404);
    assert_eq!(error_kind(res).await, "not_found");
    Ok(())
}

#[tokio::test]
async fn test_blank_username_is_a_validation_error() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let user_id = app.create_user("alice").await;

    let res = app
        .put(user_id, "/users/me/username")
        .json(&json!({ "username": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    assert_eq!(error_kind(res).await, "validation");
    Ok(())
}

#[tokio::test]
async fn test_settings_patch_reports_changes() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let user_id = app.create_user("alice").await;

    for expected in [true, false] {
        let res = app
            .client
            .patch(app.url("/users/me/settings"))
            .header(USER_ID_HEADER, user_id.to_string())
            .json(&json!({ "weight_unit": "pounds" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["changed"], expected);
    }

    let stored = app.test_ctx.store.document::<User>(user_id).unwrap();
    assert!(stored.preferences.notifications_enabled);
    Ok(())
}

#[tokio::test]
async fn test_icon_upload_uses_raw_body() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let user_id = app.create_user("alice").await;
    let image = vec![0x89, 0x50, 0x4e, 0x47];

    let res = app
        .put(user_id, "/users/me/icon")
        .header("content-type", "image/png")
        .body(image.clone())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body["icon_url"],
        format!("https://images.test/users/{user_id}/icon.png")
    );

    let uploads = app.test_ctx.images.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].1, image);
    assert_eq!(uploads[0].2, "image/png");
    Ok(())
}

#[tokio::test]
async fn test_icon_upload_rejects_non_images() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let user_id = app.create_user("alice").await;

    let res = app
        .put(user_id, "/users/me/icon")
        .header("content-type", "text/html")
        .body("<script>alert(1)</script>")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    assert_eq!(error_kind(res).await, "validation");

    assert!(app.test_ctx.images.uploads().is_empty());
    let stored = app.test_ctx.store.document::<User>(user_id).unwrap();
    assert_eq!(stored.icon_url, None);
    Ok(())
}

#[tokio::test]
async fn test_friendship_and_complaint_flow() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let alice = app.create_user("alice").await;
    let bob = app.create_user("bob").await;

    app.befriend(alice, bob).await;

    let res = app.get(alice, "/friends").send().await.unwrap();
    let friends: Value = res.json().await.unwrap();
    assert_eq!(friends.as_array().unwrap().len(), 1);
    assert_eq!(friends[0]["username"], "bob");

    let res = app
        .post(alice, "/complaints")
        .json(&json!({ "reported_user_id": bob, "reason": "spam" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);
    let complaint: Value = res.json().await.unwrap();
    let complaint_id: Uuid = complaint["id"].as_str().unwrap().parse().unwrap();
    assert!(app.test_ctx.store.contains::<Complaint>(complaint_id));

    // Only the reporter may withdraw it.
    let res = app
        .delete(bob, &format!("/complaints/{complaint_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 403);

    let res = app
        .delete(alice, &format!("/complaints/{complaint_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 204);
    assert!(!app.test_ctx.store.contains::<Complaint>(complaint_id));

    let res = app.delete(alice, &format!("/friends/{bob}")).send().await.unwrap();
    assert_eq!(res.status(), 204);
    let stored = app.test_ctx.store.document::<User>(bob).unwrap();
    assert!(!stored.is_friend(alice));
    Ok(())
}

#[tokio::test]
async fn test_delete_account() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let user_id = app.create_user("alice").await;

    let res = app.delete(user_id, "/users/me").send().await.unwrap();
    assert_eq!(res.status(), 204);

    let res = app.get(user_id, "/users/me").send().await.unwrap();
    assert_eq!(res.status(), 404);
    assert!(!app.test_ctx.store.contains::<User>(user_id));
    Ok(())
}
