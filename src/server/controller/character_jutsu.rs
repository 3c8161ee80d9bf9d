use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        character_jutsu::{CharacterJutsuDto, LearnJutsuDto, LearnedJutsuDto},
    },
    server::{
        error::Error, model::app::AppState, resource::character::CHARACTER_TAG,
        service::character_jutsu::CharacterJutsuService,
    },
};

/// List the jutsus a character has learned
#[utoipa::path(
    get,
    path = "/characters/{id}/jutsus",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "ID of the character"),
    ),
    responses(
        (status = 200, description = "Jutsus learned by the character", body = Vec<LearnedJutsuDto>),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_learned_jutsus(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let learned = CharacterJutsuService::new(&state.db)
        .get_learned_jutsus(id)
        .await?;

    Ok((StatusCode::OK, Json(learned)))
}

/// Record that a character learned a jutsu
///
/// Recording a jutsu the character already learned replaces the episode.
#[utoipa::path(
    put,
    path = "/characters/{id}/jutsus/{jutsu_id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "ID of the character"),
        ("jutsu_id" = i32, Path, description = "ID of the jutsu"),
    ),
    request_body = LearnJutsuDto,
    responses(
        (status = 200, description = "Jutsu recorded as learned", body = CharacterJutsuDto),
        (status = 404, description = "Character or jutsu not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn learn_jutsu(
    State(state): State<AppState>,
    Path((id, jutsu_id)): Path<(i32, i32)>,
    Json(input): Json<LearnJutsuDto>,
) -> Result<impl IntoResponse, Error> {
    let link = CharacterJutsuService::new(&state.db)
        .learn(id, jutsu_id, input.learned_in_episode)
        .await?;

    Ok((StatusCode::OK, Json(link)))
}

/// Remove a jutsu from the ones a character has learned
#[utoipa::path(
    delete,
    path = "/characters/{id}/jutsus/{jutsu_id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "ID of the character"),
        ("jutsu_id" = i32, Path, description = "ID of the jutsu"),
    ),
    responses(
        (status = 204, description = "Jutsu removed from the character"),
        (status = 404, description = "Character, jutsu or link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forget_jutsu(
    State(state): State<AppState>,
    Path((id, jutsu_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    CharacterJutsuService::new(&state.db)
        .forget(id, jutsu_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
