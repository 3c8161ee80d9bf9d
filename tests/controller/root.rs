//! Tests for the root greeting and the API documentation.

use super::*;

/// Expect the greeting message from the root path
#[tokio::test]
async fn greets_ninjas() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let (status, body) = send(&test.app(), "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Hello ninjas!" }));

    Ok(())
}

/// Expect the OpenAPI document to describe every generated and hand-written endpoint
#[tokio::test]
async fn documents_every_endpoint() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let (status, body) = send(&test.app(), "GET", "/docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    for path in [
        "/",
        "/clans",
        "/clans/{id}",
        "/jutsus",
        "/jutsus/{id}",
        "/characters",
        "/characters/{id}",
        "/characters/{id}/jutsus",
        "/characters/{id}/jutsus/{jutsu_id}",
    ] {
        assert!(body["paths"][path].is_object(), "missing {}", path);
    }
    assert_eq!(
        body["paths"]["/characters/{id}"]["patch"]["operationId"],
        "patch_character"
    );
    assert!(body["components"]["schemas"]["CharacterUpdate"].is_object());

    Ok(())
}
