use konoha::server::data::character_jutsu::CharacterJutsuRepository;

use super::*;

/// Expect ids to be assigned per table when creating a clan and two characters
#[tokio::test]
async fn assigns_ids_per_table() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let app = test.app();

    let (status, clan) = send(&app, "POST", "/clans", Some(json!({ "name": "Uchiha" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(clan["id"], 1);

    let (status, _) = send(&app, "POST", "/characters", Some(json!({ "name": "naruto" }))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, created) = send(
        &app,
        "POST",
        "/characters",
        Some(json!({ "name": "sasuke", "clan_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 2);

    let (status, fetched) = send(&app, "GET", "/characters/2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], 2);
    assert_eq!(fetched["name"], "sasuke");
    assert_eq!(fetched["clan_id"], 1);
    assert!(fetched["created_at"].is_string());

    Ok(())
}

/// Expect a partial update to change only the supplied field
#[tokio::test]
async fn patch_changes_only_supplied_fields() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let app = test.app();
    let (_, created) = send(
        &app,
        "POST",
        "/characters",
        Some(json!({ "name": "naruto", "rank": "1", "full_name": "Naruto Uzumaki" })),
    )
    .await;

    let (status, patched) = send(&app, "PATCH", "/characters/1", Some(json!({ "rank": "2" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["name"], "naruto");
    assert_eq!(patched["rank"], "2");
    assert_eq!(patched["full_name"], "Naruto Uzumaki");
    assert_eq!(patched["created_at"], created["created_at"]);

    Ok(())
}

/// Expect a null name to be ignored rather than rejected
#[tokio::test]
async fn patch_ignores_null_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_character("shikamaru", None)
        .build()
        .await?;

    let (status, body) = send(
        &test.app(),
        "PATCH",
        "/characters/1",
        Some(json!({ "name": null, "rank": "chunin" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "shikamaru");
    assert_eq!(body["rank"], "chunin");

    Ok(())
}

/// Expect a replace to overwrite every field, clearing the omitted ones
#[tokio::test]
async fn replace_overwrites_every_field() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_clan("Uchiha")
        .build()
        .await?;
    let app = test.app();
    let (_, created) = send(
        &app,
        "POST",
        "/characters",
        Some(json!({
            "name": "sasuke",
            "clan_id": 1,
            "rank": "genin",
            "biography": "Last of his clan"
        })),
    )
    .await;

    let (status, replaced) = send(
        &app,
        "PUT",
        "/characters/1",
        Some(json!({ "name": "sasuke", "rank": "rogue" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["rank"], "rogue");
    assert_eq!(replaced["clan_id"], json!(null));
    assert_eq!(replaced["biography"], json!(null));
    assert_eq!(replaced["created_at"], created["created_at"]);

    Ok(())
}

/// Expect 404 when patching an id that was never created
#[tokio::test]
async fn patch_returns_not_found_for_missing_character() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(
        &test.app(),
        "PATCH",
        "/characters/999",
        Some(json!({ "rank": "2" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Character not found with id 999" }));

    Ok(())
}

/// Expect 422 when creating a character in a clan that does not exist
#[tokio::test]
async fn create_rejects_missing_clan() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let app = test.app();

    let (status, body) = send(
        &app,
        "POST",
        "/characters",
        Some(json!({ "name": "sasuke", "clan_id": 42 })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());

    let (_, listed) = send(&app, "GET", "/characters", None).await;
    assert_eq!(listed, json!([]));

    Ok(())
}

/// Expect 422 when moving a character into a clan that does not exist
#[tokio::test]
async fn patch_rejects_missing_clan() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_character("kakashi", None)
        .build()
        .await?;

    let (status, _) = send(
        &test.app(),
        "PATCH",
        "/characters/1",
        Some(json!({ "clan_id": 42 })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect a client error for bodies that are not valid JSON or lack the name
#[tokio::test]
async fn rejects_invalid_bodies() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let app = test.app();

    let (status, _) = send_raw(&app, "POST", "/characters", "{\"name\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/characters", Some(json!({ "rank": "1" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, "POST", "/characters", Some(json!({ "name": 5 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect 400 for an id that is not an integer
#[tokio::test]
async fn rejects_non_integer_id() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, _) = send(&test.app(), "GET", "/characters/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the links of a deleted character to be removed with it while the jutsu remains
#[tokio::test]
async fn deleting_character_removes_links() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_character("naruto", None)
        .with_jutsu("Rasengan")
        .with_character_jutsu_link(1, 1, Some(1))
        .build()
        .await?;
    let app = test.app();

    let (status, _) = send(&app, "DELETE", "/characters/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let link = CharacterJutsuRepository::new(&test.db).get(1, 1).await?;
    assert!(link.is_none());

    let (status, _) = send(&app, "GET", "/jutsus/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "DELETE", "/jutsus/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    Ok(())
}
