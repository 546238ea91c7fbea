use actix_web::{get, post, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::services::ImportError;
use crate::modules::portfolio::domain::entities::PortfolioDocument;
use crate::modules::portfolio::adapter::incoming::web::visitor::Visitor;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Reset to the default document
#[utoipa::path(
    post,
    path = "/api/admin/reset",
    tag = "admin",
    responses(
        (status = 200, description = "Default document, persisted", body = inline(SuccessResponse<PortfolioDocument>)),
    )
)]
#[post("/api/admin/reset")]
pub async fn reset_portfolio_handler(
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    let document = context.reset_data().await;
    info!("Portfolio reset requested");
    ApiResponse::success(document)
}

/// Download the document as a JSON file
#[utoipa::path(
    get,
    path = "/api/admin/export",
    tag = "admin",
    responses(
        (
            status = 200,
            description = "Pretty-printed document as an attachment named portfolio-data.json",
            body = PortfolioDocument,
            content_type = "application/json"
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/admin/export")]
pub async fn export_portfolio_handler(
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    match context.export_data().await {
        Ok(exported) => ApiResponse::json_attachment(exported.file_name, exported.contents),
        Err(e) => {
            error!(error = %e, "Failed to export portfolio");
            ApiResponse::internal_error()
        }
    }
}

/// Replace the document from an exported JSON file
///
/// The raw request body replaces the whole document. Any parseable JSON is
/// accepted: mistyped fields become empty and undecodable items are dropped.
/// Invalid JSON leaves the current document untouched.
#[utoipa::path(
    post,
    path = "/api/admin/import",
    tag = "admin",
    request_body(content = PortfolioDocument, content_type = "application/json"),
    responses(
        (status = 200, description = "Imported document", body = inline(SuccessResponse<PortfolioDocument>)),
        (
            status = 400,
            description = "Body is not valid JSON",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "IMPORT_FAILED",
                    "message": "Error importing data. Please check the file format."
                }
            })
        ),
    )
)]
#[post("/api/admin/import")]
pub async fn import_portfolio_handler(
    body: String,
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    match context.import_data(&body).await {
        Ok(document) => ApiResponse::success(document),
        Err(ImportError::Syntax(e)) => {
            warn!(error = %e, "Import rejected: invalid JSON");
            ApiResponse::bad_request(
                "IMPORT_FAILED",
                "Error importing data. Please check the file format.",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::domain::defaults::default_document;
    use crate::tests::support::app_state_builder::{
        test_context, test_visitor_cookie, TestAppStateBuilder,
    };
    use actix_web::{http::header, http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn export_is_an_attachment() {
        let app_state = TestAppStateBuilder::default().build_loaded().await;

        let app =
            test::init_service(App::new().app_data(app_state).service(export_portfolio_handler))
                .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/export")
            .cookie(test_visitor_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let disposition = resp
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string();
        assert_eq!(disposition, r#"attachment; filename="portfolio-data.json""#);

        let body = test::read_body(resp).await;
        let exported: PortfolioDocument = serde_json::from_slice(&body).unwrap();
        assert_eq!(exported, default_document());
    }

    #[actix_web::test]
    async fn import_replaces_document() {
        let app_state = TestAppStateBuilder::default().build_loaded().await;
        let context = test_context(&app_state).await;
        let mut incoming = default_document();
        incoming.profile.name = "Imported Owner".to_string();
        incoming.projects.clear();

        let app =
            test::init_service(App::new().app_data(app_state).service(import_portfolio_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/import")
            .cookie(test_visitor_cookie())
            .set_payload(serde_json::to_string(&incoming).unwrap())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        assert_eq!(context.data().await, incoming);
    }

    #[actix_web::test]
    async fn invalid_import_keeps_document() {
        let app_state = TestAppStateBuilder::default().build_loaded().await;
        let context = test_context(&app_state).await;
        let before = context.data().await;

        let app =
            test::init_service(App::new().app_data(app_state).service(import_portfolio_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/import")
            .cookie(test_visitor_cookie())
            .set_payload("{ broken")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "IMPORT_FAILED");
        assert_eq!(context.data().await, before);
    }

    #[actix_web::test]
    async fn import_with_mistyped_collection_is_accepted() {
        let app_state = TestAppStateBuilder::default().build_loaded().await;
        let context = test_context(&app_state).await;

        let app =
            test::init_service(App::new().app_data(app_state).service(import_portfolio_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/import")
            .cookie(test_visitor_cookie())
            .set_payload(r#"{ "projects": { "legacy": true }, "profile": { "name": "Kept" } }"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["projects"], serde_json::json!([]));
        let stored = context.data().await;
        assert!(stored.projects.is_empty());
        assert_eq!(stored.profile.name, "Kept");
    }

    #[actix_web::test]
    async fn import_accepts_documents_larger_than_the_actix_default() {
        use crate::modules::portfolio::adapter::outgoing::file_storage::DEFAULT_QUOTA_BYTES;
        use crate::shared::api::custom_payload_config;

        let app_state = TestAppStateBuilder::default().build_loaded().await;
        let context = test_context(&app_state).await;
        let mut incoming = default_document();
        incoming.profile.name = "n".repeat(300 * 1024);
        let payload = serde_json::to_string(&incoming).unwrap();
        assert!(payload.len() > 256 * 1024);

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_payload_config(DEFAULT_QUOTA_BYTES))
                .service(import_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/import")
            .cookie(test_visitor_cookie())
            .set_payload(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(context.data().await, incoming);
    }

    #[actix_web::test]
    async fn reset_restores_defaults() {
        let app_state = TestAppStateBuilder::default().build_loaded().await;
        let context = test_context(&app_state).await;
        context.import_data(r#"{ "projects": [] }"#).await.unwrap();

        let app =
            test::init_service(App::new().app_data(app_state).service(reset_portfolio_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/reset")
            .cookie(test_visitor_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        assert_eq!(context.data().await, default_document());
    }
}
