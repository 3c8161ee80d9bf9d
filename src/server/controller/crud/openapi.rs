//! OpenAPI operations for the generic CRUD endpoints.
//!
//! `#[utoipa::path]` cannot describe handlers that are generic over the resource, so the
//! operations are assembled here from the resource's descriptor and representation schemas.

use utoipa::{
    openapi::{
        content::ContentBuilder,
        path::{
            HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder, Paths,
            PathsBuilder,
        },
        request_body::{RequestBody, RequestBodyBuilder},
        response::{Response, ResponseBuilder},
        schema::{Array, KnownFormat, ObjectBuilder, Ref, Schema, SchemaFormat, Type},
        RefOr, Required,
    },
    ToSchema,
};

use crate::{model::api::ErrorDto, server::resource::Resource};

const JSON: &str = "application/json";

/// Component schemas referenced by the operations of `R`
pub(super) fn schemas<R: Resource>() -> Vec<(String, RefOr<Schema>)> {
    let mut schemas = Vec::new();

    collect::<R::Create>(&mut schemas);
    collect::<R::Read>(&mut schemas);
    collect::<R::Update>(&mut schemas);
    collect::<ErrorDto>(&mut schemas);

    schemas
}

fn collect<T: ToSchema>(schemas: &mut Vec<(String, RefOr<Schema>)>) {
    schemas.push((T::name().into_owned(), T::schema()));
    T::schemas(schemas);
}

/// List and create, served on the collection path
pub(super) fn collection_paths<R: Resource>() -> Paths {
    let descriptor = R::DESCRIPTOR;
    let kind = descriptor.kind.to_lowercase();

    let list = OperationBuilder::new()
        .tag(descriptor.tag)
        .operation_id(Some(format!("list_{}", descriptor.name())))
        .summary(Some(format!("List every {}", kind)))
        .response(
            "200",
            json_response(
                format!("Every stored {}", kind),
                Array::new(schema_ref::<R::Read>()),
            ),
        )
        .response("500", error_response("Internal server error"))
        .build();

    let create = OperationBuilder::new()
        .tag(descriptor.tag)
        .operation_id(Some(format!("create_{}", kind)))
        .summary(Some(format!("Create a {}", kind)))
        .request_body(Some(json_body::<R::Create>()))
        .response(
            "201",
            json_response(format!("Created {}", kind), schema_ref::<R::Read>()),
        )
        .response(
            "422",
            error_response("Body is invalid or references a record that does not exist"),
        )
        .response("500", error_response("Internal server error"))
        .build();

    PathsBuilder::new()
        .path(
            descriptor.collection_path(),
            PathItemBuilder::new()
                .operation(HttpMethod::Get, list)
                .operation(HttpMethod::Post, create)
                .build(),
        )
        .build()
}

/// Get, replace, patch and delete, served on the item path
pub(super) fn item_paths<R: Resource>() -> Paths {
    let descriptor = R::DESCRIPTOR;
    let kind = descriptor.kind.to_lowercase();
    let not_found = format!("{} not found", descriptor.kind);

    let get = OperationBuilder::new()
        .tag(descriptor.tag)
        .operation_id(Some(format!("get_{}", kind)))
        .summary(Some(format!("Get a {} by id", kind)))
        .parameter(id_parameter(&kind))
        .response(
            "200",
            json_response(format!("Stored {}", kind), schema_ref::<R::Read>()),
        )
        .response("404", error_response(&not_found))
        .response("500", error_response("Internal server error"))
        .build();

    let replace = OperationBuilder::new()
        .tag(descriptor.tag)
        .operation_id(Some(format!("replace_{}", kind)))
        .summary(Some(format!("Replace every field of a {}", kind)))
        .description(Some("Optional fields omitted from the body are cleared."))
        .parameter(id_parameter(&kind))
        .request_body(Some(json_body::<R::Create>()))
        .response(
            "200",
            json_response(format!("Replaced {}", kind), schema_ref::<R::Read>()),
        )
        .response("404", error_response(&not_found))
        .response(
            "422",
            error_response("Body is invalid or references a record that does not exist"),
        )
        .response("500", error_response("Internal server error"))
        .build();

    let patch = OperationBuilder::new()
        .tag(descriptor.tag)
        .operation_id(Some(format!("patch_{}", kind)))
        .summary(Some(format!("Update some fields of a {}", kind)))
        .description(Some(
            "Fields omitted from the body are left unchanged, `null` clears an optional field.",
        ))
        .parameter(id_parameter(&kind))
        .request_body(Some(json_body::<R::Update>()))
        .response(
            "200",
            json_response(format!("Updated {}", kind), schema_ref::<R::Read>()),
        )
        .response("404", error_response(&not_found))
        .response(
            "422",
            error_response("Body is invalid or references a record that does not exist"),
        )
        .response("500", error_response("Internal server error"))
        .build();

    let delete = OperationBuilder::new()
        .tag(descriptor.tag)
        .operation_id(Some(format!("delete_{}", kind)))
        .summary(Some(format!("Delete a {}", kind)))
        .parameter(id_parameter(&kind))
        .response(
            "204",
            ResponseBuilder::new()
                .description(format!("Deleted {}", kind))
                .build(),
        )
        .response("404", error_response(&not_found))
        .response("500", error_response("Internal server error"))
        .build();

    PathsBuilder::new()
        .path(
            descriptor.item_path(),
            PathItemBuilder::new()
                .operation(HttpMethod::Get, get)
                .operation(HttpMethod::Put, replace)
                .operation(HttpMethod::Patch, patch)
                .operation(HttpMethod::Delete, delete)
                .build(),
        )
        .build()
}

fn schema_ref<T: ToSchema>() -> Ref {
    Ref::from_schema_name(T::name())
}

fn id_parameter(kind: &str) -> ParameterBuilder {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some(format!("ID of the {}", kind)))
        .schema(Some(
            ObjectBuilder::new()
                .schema_type(Type::Integer)
                .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int32))),
        ))
}

fn json_body<T: ToSchema>() -> RequestBody {
    RequestBodyBuilder::new()
        .content(
            JSON,
            ContentBuilder::new().schema(Some(schema_ref::<T>())).build(),
        )
        .required(Some(Required::True))
        .build()
}

fn json_response<S: Into<RefOr<Schema>>>(
    description: impl Into<String>,
    schema: S,
) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(JSON, ContentBuilder::new().schema(Some(schema)).build())
        .build()
}

fn error_response(description: &str) -> Response {
    json_response(description, schema_ref::<ErrorDto>())
}
