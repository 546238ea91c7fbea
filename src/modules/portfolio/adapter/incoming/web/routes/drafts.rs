use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::editor::{AdminSection, EditorError, NestedList};
use crate::modules::portfolio::application::services::DraftView;
use crate::modules::portfolio::domain::entities::PortfolioDocument;
use crate::modules::portfolio::adapter::incoming::web::visitor::Visitor;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct PushListItemRequest {
    /// Trimmed before insertion; blank values are ignored
    #[schema(example = "Terraform")]
    pub value: String,
}

#[derive(Serialize, ToSchema)]
pub struct AddedItemResponse {
    /// Id of the new item, or its index for skill categories
    pub key: String,
    pub draft: DraftView,
}

#[derive(Serialize, ToSchema)]
pub struct PushListItemResponse {
    /// False when the value was blank and nothing was added
    pub added: bool,
    pub draft: DraftView,
}

fn editor_error_response(section: AdminSection, err: EditorError) -> HttpResponse {
    warn!(%section, error = %err, "Draft edit rejected");
    let message = err.to_string();
    match err {
        EditorError::ItemNotFound(_) => ApiResponse::not_found("ITEM_NOT_FOUND", &message),
        EditorError::IndexOutOfRange(_) => ApiResponse::not_found("INDEX_OUT_OF_RANGE", &message),
        EditorError::Unsupported { .. } => {
            ApiResponse::bad_request("UNSUPPORTED_OPERATION", &message)
        }
        EditorError::ImmutableField(_) => ApiResponse::bad_request("IMMUTABLE_FIELD", &message),
        EditorError::InvalidField(_) => ApiResponse::bad_request("VALIDATION_ERROR", &message),
    }
}

/// Current draft of a section
#[utoipa::path(
    get,
    path = "/api/admin/drafts/{section}",
    tag = "drafts",
    params(("section" = AdminSection, Path, description = "Admin section")),
    responses(
        (status = 200, description = "Draft and dirty flag", body = inline(SuccessResponse<DraftView>)),
    )
)]
#[get("/api/admin/drafts/{section}")]
pub async fn get_draft_handler(
    path: web::Path<AdminSection>,
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    ApiResponse::success(context.draft(path.into_inner()).await)
}

/// Edit fields of a singleton draft (profile, about)
#[utoipa::path(
    patch,
    path = "/api/admin/drafts/{section}",
    tag = "drafts",
    params(("section" = AdminSection, Path, description = "profile or about")),
    request_body(content = Object, description = "Fields to merge into the draft"),
    responses(
        (status = 200, description = "Updated draft", body = inline(SuccessResponse<DraftView>)),
        (status = 400, description = "Not a singleton section or invalid field", body = ErrorResponse),
    )
)]
#[patch("/api/admin/drafts/{section}")]
pub async fn update_singleton_draft_handler(
    path: web::Path<AdminSection>,
    req: web::Json<Map<String,
    Value>>,
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    let section = path.into_inner();
    match context.draft_update(section, None, req.into_inner()).await {
        Ok(()) => ApiResponse::success(context.draft(section).await),
        Err(e) => editor_error_response(section, e),
    }
}

/// Append a placeholder item to a collection draft
#[utoipa::path(
    post,
    path = "/api/admin/drafts/{section}/items",
    tag = "drafts",
    params(("section" = AdminSection, Path, description = "Collection section")),
    responses(
        (status = 201, description = "Item added", body = inline(SuccessResponse<AddedItemResponse>)),
        (status = 400, description = "Section is not a collection", body = ErrorResponse),
    )
)]
#[post("/api/admin/drafts/{section}/items")]
pub async fn add_draft_item_handler(
    path: web::Path<AdminSection>,
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    let section = path.into_inner();
    match context.draft_add(section).await {
        Ok(key) => ApiResponse::created(AddedItemResponse {
            key,
            draft: context.draft(section).await,
        }),
        Err(e) => editor_error_response(section, e),
    }
}

/// Edit fields of one draft item
#[utoipa::path(
    patch,
    path = "/api/admin/drafts/{section}/items/{key}",
    tag = "drafts",
    params(
        ("section" = AdminSection, Path, description = "Collection section"),
        ("key" = String, Path, description = "Item id, or index for skill categories"),
    ),
    request_body(content = Object, description = "Fields to merge; the id cannot change"),
    responses(
        (status = 200, description = "Updated draft", body = inline(SuccessResponse<DraftView>)),
        (
            status = 400,
            description = "Immutable or invalid field",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "IMMUTABLE_FIELD", "message": "Field 'id' cannot be edited" }
            })
        ),
        (status = 404, description = "Unknown item", body = ErrorResponse),
    )
)]
#[patch("/api/admin/drafts/{section}/items/{key}")]
pub async fn update_draft_item_handler(
    path: web::Path<(AdminSection,
    String)>,
    req: web::Json<Map<String,
    Value>>,
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    let (section, key) = path.into_inner();
    match context.draft_update(section, Some(&key), req.into_inner()).await {
        Ok(()) => ApiResponse::success(context.draft(section).await),
        Err(e) => editor_error_response(section, e),
    }
}

/// Remove one draft item
#[utoipa::path(
    delete,
    path = "/api/admin/drafts/{section}/items/{key}",
    tag = "drafts",
    params(
        ("section" = AdminSection, Path, description = "Collection section"),
        ("key" = String, Path, description = "Item id, or index for skill categories"),
    ),
    responses(
        (status = 200, description = "Updated draft", body = inline(SuccessResponse<DraftView>)),
        (status = 404, description = "Unknown item", body = ErrorResponse),
    )
)]
#[delete("/api/admin/drafts/{section}/items/{key}")]
pub async fn remove_draft_item_handler(
    path: web::Path<(AdminSection,
    String)>,
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    let (section, key) = path.into_inner();
    match context.draft_remove(section, &key).await {
        Ok(()) => ApiResponse::success(context.draft(section).await),
        Err(e) => editor_error_response(section, e),
    }
}

/// Append a value to a nested list of a draft item
#[utoipa::path(
    post,
    path = "/api/admin/drafts/{section}/items/{key}/lists/{list}",
    tag = "drafts",
    params(
        ("section" = AdminSection, Path, description = "Collection section"),
        ("key" = String, Path, description = "Item id, or index for skill categories"),
        ("list" = NestedList, Path, description = "Nested list name"),
    ),
    request_body = PushListItemRequest,
    responses(
        (status = 200, description = "Value handled", body = inline(SuccessResponse<PushListItemResponse>)),
        (status = 400, description = "Item has no such list", body = ErrorResponse),
        (status = 404, description = "Unknown item", body = ErrorResponse),
    )
)]
#[post("/api/admin/drafts/{section}/items/{key}/lists/{list}")]
pub async fn push_draft_list_item_handler(
    path: web::Path<(AdminSection,
    String,
    NestedList)>,
    req: web::Json<PushListItemRequest>,
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    let (section, key, list) = path.into_inner();
    match context.draft_push_item(section, &key, list, &req.value).await {
        Ok(added) => ApiResponse::success(PushListItemResponse {
            added,
            draft: context.draft(section).await,
        }),
        Err(e) => editor_error_response(section, e),
    }
}

/// Remove a value from a nested list by position
#[utoipa::path(
    delete,
    path = "/api/admin/drafts/{section}/items/{key}/lists/{list}/{index}",
    tag = "drafts",
    params(
        ("section" = AdminSection, Path, description = "Collection section"),
        ("key" = String, Path, description = "Item id, or index for skill categories"),
        ("list" = NestedList, Path, description = "Nested list name"),
        ("index" = usize, Path, description = "Position in the list"),
    ),
    responses(
        (status = 200, description = "Updated draft", body = inline(SuccessResponse<DraftView>)),
        (status = 404, description = "Unknown item or index", body = ErrorResponse),
    )
)]
#[delete("/api/admin/drafts/{section}/items/{key}/lists/{list}/{index}")]
pub async fn remove_draft_list_item_handler(
    path: web::Path<(AdminSection,
    String,
    NestedList,
    usize)>,
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    let (section, key, list, index) = path.into_inner();
    match context.draft_remove_item(section, &key, list, index).await {
        Ok(()) => ApiResponse::success(context.draft(section).await),
        Err(e) => editor_error_response(section, e),
    }
}

/// Make one CV file the active download
#[utoipa::path(
    post,
    path = "/api/admin/drafts/cv/items/{key}/activate",
    tag = "drafts",
    params(("key" = String, Path, description = "CV file id")),
    responses(
        (status = 200, description = "Updated CV draft", body = inline(SuccessResponse<DraftView>)),
        (status = 404, description = "Unknown CV file", body = ErrorResponse),
    )
)]
#[post("/api/admin/drafts/cv/items/{key}/activate")]
pub async fn activate_cv_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    let key = path.into_inner();
    match context.draft_activate(AdminSection::Cv, &key).await {
        Ok(()) => ApiResponse::success(context.draft(AdminSection::Cv).await),
        Err(e) => editor_error_response(AdminSection::Cv, e),
    }
}

/// Commit a section's draft to the document
#[utoipa::path(
    post,
    path = "/api/admin/drafts/{section}/save",
    tag = "drafts",
    params(("section" = AdminSection, Path, description = "Admin section")),
    responses(
        (status = 200, description = "Committed document", body = inline(SuccessResponse<PortfolioDocument>)),
    )
)]
#[post("/api/admin/drafts/{section}/save")]
pub async fn save_draft_handler(
    path: web::Path<AdminSection>,
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    let section = path.into_inner();
    let document = context.save_draft(section).await;
    info!(%section, "Draft committed");
    ApiResponse::success(document)
}
