//! Tests for the endpoints managing the jutsus a character has learned.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use konoha::{
    model::character_jutsu::LearnJutsuDto,
    server::controller::character_jutsu::{forget_jutsu, get_learned_jutsus, learn_jutsu},
};

use super::*;

/// Expect 200 with the learned jutsus and their episodes
#[tokio::test]
async fn lists_learned_jutsus() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_character("naruto", None)
        .with_jutsu("Shadow Clone")
        .with_jutsu("Rasengan")
        .with_character_jutsu_link(1, 2, Some(52))
        .build()
        .await?;

    let (status, body) = send(&test.app(), "GET", "/characters/1/jutsus", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "jutsu": { "id": 2, "name": "Rasengan", "type": null, "rank": null },
            "learned_in_episode": 52
        }])
    );

    Ok(())
}

/// Expect 404 when listing the jutsus of a character that does not exist
#[tokio::test]
async fn list_returns_not_found_for_missing_character() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let result = get_learned_jutsus(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with the stored link when a character learns a jutsu
#[tokio::test]
async fn learns_jutsu() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_character("kakashi", None)
        .with_jutsu("Chidori")
        .build()
        .await?;

    let (status, body) = send(
        &test.app(),
        "PUT",
        "/characters/1/jutsus/1",
        Some(json!({ "learned_in_episode": 3 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "character_id": 1, "jutsu_id": 1, "learned_in_episode": 3 })
    );

    Ok(())
}

/// Expect learning a jutsu twice to keep one link with the latest episode
#[tokio::test]
async fn relearning_updates_episode() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_character("kakashi", None)
        .with_jutsu("Chidori")
        .with_character_jutsu_link(1, 1, Some(3))
        .build()
        .await?;
    let app = test.app();

    let (status, _) = send(&app, "PUT", "/characters/1/jutsus/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/characters/1/jutsus", None).await;

    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["learned_in_episode"], json!(null));

    Ok(())
}

/// Expect 404 when learning a jutsu that does not exist
#[tokio::test]
async fn learn_returns_not_found_for_missing_jutsu() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_character("kakashi", None)
        .build()
        .await?;

    let result = learn_jutsu(
        State(test.into_app_state()),
        Path((1, 9)),
        Json(LearnJutsuDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 204 when forgetting a learned jutsu, then 404 for the second attempt
#[tokio::test]
async fn forgets_jutsu_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_character("kakashi", None)
        .with_jutsu("Chidori")
        .with_character_jutsu_link(1, 1, None)
        .build()
        .await?;

    let result = forget_jutsu(State(test.into_app_state()), Path((1, 1))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let (status, body) = send(&test.app(), "DELETE", "/characters/1/jutsus/1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "error": "Character 1 has not learned jutsu 1" })
    );

    Ok(())
}
