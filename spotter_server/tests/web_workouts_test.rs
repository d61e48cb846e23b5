
use serde_json::{Value, json};
use uuid::Uuid;

use spotter_app::config::Config;
use spotter_core::ApplicationError;
use spotter_domain::models::{received_workout::ReceivedWorkout, user::User, workout::Workout};

use crate::test_utils::tests::{TestApp, error_kind, setup_web_app, setup_web_app_with_config};

fn push_day() -> Value {
    json!({
        "name": "Push day",
        "notes": "Keep rest under two minutes",
        "exercises": [
            {
                "exercise_name": "Bench Press",
                "sets": [
                    { "reps": 8, "weight": 80.0 },
                    { "reps": 6, "weight": 85.0 }
                ]
            },
            {
                "exercise_name": "Overhead Press",
                "sets": [{ "reps": 10, "weight": 40.0 }]
            }
        ]
    })
}

async fn create_workout(app: &TestApp, user_id: Uuid) -> Uuid {
    let res = app
        .post(user_id, "/workouts")
        .json(&push_day())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);
    let body: Value = res.json().await.unwrap();
    body["id"].as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_exercise_catalogue_rules() -> Result<(), ApplicationError> {
    let app = setup_web_app_with_config(Config {
        free_exercise_limit: 2,
        ..Default::default()
    })
    .await?;
    let user_id = app.create_user("alice").await;

    let res = app
        .post(user_id, "/exercises")
        .json(&json!({ "name": "Deadlift", "muscle_group": "back" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);

    // Names are unique per user regardless of case and padding.
    let res = app
        .post(user_id, "/exercises")
        .json(&json!({ "name": "  deadlift " }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 409);
    assert_eq!(error_kind(res).await, "duplicate");

    let res = app
        .post(user_id, "/exercises")
        .json(&json!({ "name": "Squat" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);

    let res = app
        .post(user_id, "/exercises")
        .json(&json!({ "name": "Row" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 422);
    assert_eq!(error_kind(res).await, "limit_exceeded");

    let res = app.get(user_id, "/exercises").send().await.unwrap();
    let exercises: Value = res.json().await.unwrap();
    assert_eq!(exercises.as_array().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_workout_crud_and_ownership() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let alice = app.create_user("alice").await;
    let mallory = app.create_user("mallory").await;
    let workout_id = create_workout(&app, alice).await;

    let res = app
        .get(alice, &format!("/workouts/{workout_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["total_sets"], 3);

    let res = app
        .get(mallory, &format!("/workouts/{workout_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 403);
    assert_eq!(error_kind(res).await, "forbidden");

    let res = app
        .put(alice, &format!("/workouts/{workout_id}"))
        .json(&json!({ "name": "Push day v2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["name"], "Push day v2");
    assert_eq!(body["total_sets"], 0);

    let res = app
        .delete(alice, &format!("/workouts/{workout_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 204);
    assert!(!app.test_ctx.store.contains::<Workout>(workout_id));

    let res = app
        .get(alice, &format!("/workouts/{}", Uuid::new_v4()))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    Ok(())
}

#[tokio::test]
async fn test_share_and_accept_workout() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let alice = app.create_user("alice").await;
    let bob = app.create_user("bob").await;
    app.befriend(alice, bob).await;
    let workout_id = create_workout(&app, alice).await;

    let res = app
        .post(alice, &format!("/workouts/{workout_id}/share"))
        .json(&json!({ "recipient_ids": [bob, bob] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);
    let body: Value = res.json().await.unwrap();
    let ids = body["received_workout_ids"].as_array().unwrap();
    assert_eq!(ids.len(), 1);
    let received_id: Uuid = ids[0].as_str().unwrap().parse().unwrap();

    let res = app.get(bob, "/received-workouts").send().await.unwrap();
    let inbox: Value = res.json().await.unwrap();
    assert_eq!(inbox.as_array().unwrap().len(), 1);
    assert_eq!(inbox[0]["sender_username"], "alice");
    assert_eq!(inbox[0]["name"], "Push day");

    let res = app
        .post(bob, &format!("/received-workouts/{received_id}/accept"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);

    let res = app.get(bob, "/workouts").send().await.unwrap();
    let workouts: Value = res.json().await.unwrap();
    assert_eq!(workouts.as_array().unwrap().len(), 1);
    assert_eq!(workouts[0]["total_sets"], 3);

    assert!(!app.test_ctx.store.contains::<ReceivedWorkout>(received_id));
    let stored = app.test_ctx.store.document::<User>(bob).unwrap();
    assert!(stored.received_workouts.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_sharing_requires_friendship() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let alice = app.create_user("alice").await;
    let stranger = app.create_user("stranger").await;
    let workout_id = create_workout(&app, alice).await;

    let res = app
        .post(alice, &format!("/workouts/{workout_id}/share"))
        .json(&json!({ "recipient_ids": [stranger] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 403);

    let res = app
        .post(alice, &format!("/workouts/{workout_id}/share"))
        .json(&json!({ "recipient_ids": [alice] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    assert_eq!(error_kind(res).await, "validation");
    Ok(())
}

#[tokio::test]
async fn test_decline_flows_differ_on_unlisted_workouts() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let alice = app.create_user("alice").await;
    let bob = app.create_user("bob").await;
    app.befriend(alice, bob).await;
    let workout_id = create_workout(&app, alice).await;

    let mut received_ids = Vec::new();
    for _ in 0..2 {
        let res = app
            .post(alice, &format!("/workouts/{workout_id}/share"))
            .json(&json!({ "recipient_ids": [bob] }))
            .send()
            .await
            .unwrap();
        let body: Value = res.json().await.unwrap();
        let id: Uuid = body["received_workout_ids"][0].as_str().unwrap().parse().unwrap();
        received_ids.push(id);
    }

    let res = app
        .post(bob, &format!("/received-workouts/{}/decline", received_ids[0]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["changed"], true);

    // Drop the second one from bob's list only: the newer flow refuses it,
    // the older one still deletes the shared copy.
    let mut user = app.test_ctx.store.document::<User>(bob).unwrap();
    user.received_workouts.retain(|id| *id != received_ids[1]);
    app.test_ctx.store.seed(&user);

    let res = app
        .post(bob, &format!("/received-workouts/{}/decline", received_ids[1]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    let res = app
        .post(bob, &format!("/shared-workouts/{}/decline", received_ids[1]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 204);
    assert!(!app.test_ctx.store.contains::<ReceivedWorkout>(received_ids[1]));
    Ok(())
}
