use actix_web::{get, patch, web, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::domain::entities::PortfolioDocument;
use crate::modules::portfolio::domain::patch::DocumentPatch;
use crate::modules::portfolio::adapter::incoming::web::visitor::Visitor;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the committed portfolio document
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Current document", body = inline(SuccessResponse<PortfolioDocument>)),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>, visitor: Visitor) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    ApiResponse::success(context.data().await)
}

/// Replace top-level document fields
///
/// Every field present in the body replaces the current value wholesale and
/// the result is persisted. Omitted fields are kept.
#[utoipa::path(
    patch,
    path = "/api/admin/portfolio",
    tag = "admin",
    request_body = DocumentPatch,
    responses(
        (status = 200, description = "Updated document", body = inline(SuccessResponse<PortfolioDocument>)),
        (
            status = 400,
            description = "Body is not a valid patch",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "Json deserialize error" }
            })
        ),
    )
)]
#[patch("/api/admin/portfolio")]
pub async fn update_portfolio_handler(
    req: web::Json<DocumentPatch>,
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    let patch = req.into_inner();
    if patch.is_empty() {
        return ApiResponse::success(context.data().await);
    }

    let document = context.update_data(patch).await;
    info!("Portfolio updated");
    ApiResponse::success(document)
}
