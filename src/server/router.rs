//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. The catalog resources are mounted through the generic CRUD router, the
//! remaining endpoints are registered with their `#[utoipa::path]` annotations, and
//! Swagger UI is served at `/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, crud::crud_router},
    model::app::AppState,
    resource::{
        character::CHARACTER_TAG, clan::CLAN_TAG, jutsu::JUTSU_TAG, CharacterResource,
        ClanResource, JutsuResource,
    },
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Greeting
/// - `GET|POST /clans`, `GET|PUT|PATCH|DELETE /clans/{id}` - Clan CRUD
/// - `GET|POST /jutsus`, `GET|PUT|PATCH|DELETE /jutsus/{id}` - Jutsu CRUD
/// - `GET|POST /characters`, `GET|PUT|PATCH|DELETE /characters/{id}` - Character CRUD
/// - `GET /characters/{id}/jutsus` - Jutsus learned by a character
/// - `PUT|DELETE /characters/{id}/jutsus/{jutsu_id}` - Record or remove a learned jutsu
///
/// The OpenAPI document is available at `/docs/openapi.json` and Swagger UI at `/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Konoha", description = "Catalog of shinobi, clans and jutsus"), tags(
        (name = controller::root::ROOT_TAG, description = "Service root"),
        (name = CHARACTER_TAG, description = "Characters and the jutsus they learned"),
        (name = CLAN_TAG, description = "Clans characters belong to"),
        (name = JUTSU_TAG, description = "Jutsus characters can learn"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::root::hello))
        .merge(crud_router::<ClanResource>())
        .merge(crud_router::<JutsuResource>())
        .merge(crud_router::<CharacterResource>())
        .routes(routes!(controller::character_jutsu::get_learned_jutsus))
        .routes(routes!(
            controller::character_jutsu::learn_jutsu,
            controller::character_jutsu::forget_jutsu
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
}
