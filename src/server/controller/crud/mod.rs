//! Generic CRUD endpoints shared by every catalog resource.
//!
//! [`crud_router`] turns a [`Resource`] into six handlers mounted under the resource's path
//! prefix:
//!
//! - `GET /{prefix}` - List every record
//! - `POST /{prefix}` - Create a record, 201 with the stored record
//! - `GET /{prefix}/{id}` - Get a record, 404 if absent
//! - `PUT /{prefix}/{id}` - Replace every updatable field, 404 if absent
//! - `PATCH /{prefix}/{id}` - Update only the supplied fields, 404 if absent
//! - `DELETE /{prefix}/{id}` - Delete a record, 204 or 404 if absent
//!
//! Writes that reference a record which does not exist (e.g. a character's `clan_id`) are
//! rejected with 422.

mod openapi;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json,
};
use utoipa_axum::router::OpenApiRouter;

use crate::server::{
    data::entity::EntityRepository,
    error::{resource::ResourceError, Error},
    model::app::AppState,
    resource::Resource,
    service::{lookup::LookupService, mutation::MutationService},
};

/// Builds the router serving the CRUD endpoints of `R`, documented in its OpenAPI tag.
pub fn crud_router<R: Resource>() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes((
            openapi::schemas::<R>(),
            openapi::collection_paths::<R>(),
            get(list::<R>).post(create::<R>),
        ))
        .routes((
            Vec::new(),
            openapi::item_paths::<R>(),
            get(get_by_id::<R>)
                .put(replace::<R>)
                .patch(patch::<R>)
                .delete(delete::<R>),
        ))
}

async fn list<R: Resource>(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let records = EntityRepository::<R, _>::new(&state.db).list_all().await?;

    let body: Vec<R::Read> = records.into_iter().map(R::Read::from).collect();

    Ok((StatusCode::OK, Json(body)))
}

async fn get_by_id<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let record = LookupService::new(&state.db).find::<R>(id).await?;

    Ok((StatusCode::OK, Json(R::Read::from(record))))
}

async fn create<R: Resource>(
    State(state): State<AppState>,
    Json(input): Json<R::Create>,
) -> Result<impl IntoResponse, Error> {
    let record = EntityRepository::<R, _>::new(&state.db)
        .insert(R::new_record(input))
        .await
        .map_err(|err| ResourceError::from_write(R::DESCRIPTOR.kind, err))?;

    Ok((StatusCode::CREATED, Json(R::Read::from(record))))
}

async fn replace<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<R::Create>,
) -> Result<impl IntoResponse, Error> {
    let record = MutationService::new(&state.db)
        .apply::<R>(id, R::replace_patch(input))
        .await?;

    Ok((StatusCode::OK, Json(R::Read::from(record))))
}

async fn patch<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<R::Update>,
) -> Result<impl IntoResponse, Error> {
    let record = MutationService::new(&state.db)
        .apply::<R>(id, R::partial_patch(input))
        .await?;

    Ok((StatusCode::OK, Json(R::Read::from(record))))
}

async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    LookupService::new(&state.db).find::<R>(id).await?;

    EntityRepository::<R, _>::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
