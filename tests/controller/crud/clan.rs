use super::*;

/// Expect 200 with an empty array when no clan exists
#[tokio::test]
async fn lists_empty_table() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(&test.app(), "GET", "/clans", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    Ok(())
}

/// Expect a created clan to be returned with its id and then readable by that id
#[tokio::test]
async fn creates_and_gets_clan() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let app = test.app();

    let (status, created) = send(
        &app,
        "POST",
        "/clans",
        Some(json!({ "name": "Uchiha", "description": "Sharingan wielders" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created,
        json!({ "id": 1, "name": "Uchiha", "description": "Sharingan wielders" })
    );

    let (status, fetched) = send(&app, "GET", "/clans/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    Ok(())
}

/// Expect every stored clan in the list
#[tokio::test]
async fn lists_stored_clans() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_clan("Uchiha")
        .with_clan("Senju")
        .build()
        .await?;

    let (status, body) = send(&test.app(), "GET", "/clans", None).await;

    assert_eq!(status, StatusCode::OK);
    let mut names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|clan| clan["name"].as_str())
        .collect();
    names.sort();
    assert_eq!(names, vec!["Senju", "Uchiha"]);

    Ok(())
}

/// Expect 404 naming the kind and id for a clan that does not exist
#[tokio::test]
async fn returns_not_found_for_missing_clan() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let (status, body) = send(&test.app(), "GET", "/clans/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Clan not found with id 999" }));

    Ok(())
}

/// Expect 204 on delete, then 404 on get and on a second delete
#[tokio::test]
async fn deletes_clan_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_clan("Uzumaki")
        .build()
        .await?;
    let app = test.app();

    let (status, _) = send(&app, "DELETE", "/clans/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", "/clans/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/clans/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect members of a deleted clan to keep existing without a clan
#[tokio::test]
async fn deleting_clan_clears_member_clan_ids() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_clan("Uchiha")
        .with_character("itachi", Some(1))
        .build()
        .await?;
    let app = test.app();

    let (status, _) = send(&app, "DELETE", "/clans/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, character) = send(&app, "GET", "/characters/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(character["name"], "itachi");
    assert_eq!(character["clan_id"], json!(null));

    Ok(())
}

/// Expect an explicit null description to clear it while the name is kept
#[tokio::test]
async fn patch_with_null_clears_description() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let app = test.app();
    send(
        &app,
        "POST",
        "/clans",
        Some(json!({ "name": "Hyuga", "description": "Byakugan" })),
    )
    .await;

    let (status, body) = send(
        &app,
        "PATCH",
        "/clans/1",
        Some(json!({ "description": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Hyuga", "description": null }));

    Ok(())
}

/// Expect a patch without fields to return the clan unchanged
#[tokio::test]
async fn empty_patch_returns_clan_unchanged() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_clan("Nara")
        .build()
        .await?;

    let (status, body) = send(&test.app(), "PATCH", "/clans/1", Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Nara", "description": null }));

    Ok(())
}
