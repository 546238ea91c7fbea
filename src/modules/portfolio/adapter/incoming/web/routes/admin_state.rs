use actix_web::{get, post, put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::modules::portfolio::application::editor::AdminSection;
use crate::modules::portfolio::application::services::AdminState;
use crate::modules::portfolio::application::shortcut::KeyPress;
use crate::modules::portfolio::adapter::incoming::web::visitor::Visitor;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct SetSectionRequest {
    /// Section to show in the overlay, or null to clear
    #[schema(example = "projects")]
    pub section: Option<AdminSection>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyPressResponse {
    /// Whether the press matched the admin chord
    pub toggled: bool,
    pub state: AdminState,
}

/// Admin overlay state
#[utoipa::path(
    get,
    path = "/api/admin/state",
    tag = "admin",
    responses(
        (status = 200, description = "Overlay flags", body = inline(SuccessResponse<AdminState>)),
    )
)]
#[get("/api/admin/state")]
pub async fn get_admin_state_handler(
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    ApiResponse::success(context.admin_state().await)
}

/// Toggle the admin overlay
#[utoipa::path(
    post,
    path = "/api/admin/toggle",
    tag = "admin",
    responses(
        (status = 200, description = "Overlay flags after toggling", body = inline(SuccessResponse<AdminState>)),
    )
)]
#[post("/api/admin/toggle")]
pub async fn toggle_admin_handler(data: web::Data<AppState>, visitor: Visitor) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    let state = context.toggle_admin().await;
    info!(open = state.is_open, "Admin overlay toggled");
    ApiResponse::success(state)
}

/// Report a key press from the page
///
/// Toggles the overlay when the press matches the configured chord
/// (`Ctrl+Shift+A` by default). Other presses leave the state unchanged.
#[utoipa::path(
    post,
    path = "/api/admin/keypress",
    tag = "admin",
    request_body = KeyPress,
    responses(
        (
            status = 200,
            description = "Key press handled",
            body = inline(SuccessResponse<KeyPressResponse>),
            example = json!({
                "success": true,
                "data": { "toggled": true, "state": { "isOpen": true, "activeSection": null } }
            })
        ),
    )
)]
#[post("/api/admin/keypress")]
pub async fn admin_keypress_handler(
    req: web::Json<KeyPress>,
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    let toggled = context.handle_key(&req).await;
    let state = context.admin_state().await;
    ApiResponse::success(KeyPressResponse { toggled, state })
}

/// Select the active admin section
#[utoipa::path(
    put,
    path = "/api/admin/section",
    tag = "admin",
    request_body = SetSectionRequest,
    responses(
        (status = 200, description = "Overlay flags", body = inline(SuccessResponse<AdminState>)),
    )
)]
#[put("/api/admin/section")]
pub async fn set_admin_section_handler(
    req: web::Json<SetSectionRequest>,
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    ApiResponse::success(context.set_active_section(req.section).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::{test_visitor_cookie, TestAppStateBuilder};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn chord_keypress_opens_overlay() {
        let app_state = TestAppStateBuilder::default().build_loaded().await;

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(admin_keypress_handler)
                .service(get_admin_state_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/keypress")
            .cookie(test_visitor_cookie())
            .set_json(json!({ "key": "A", "ctrlKey": true, "shiftKey": true }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["toggled"], true);
        assert_eq!(body["data"]["state"]["isOpen"], true);

        let req = test::TestRequest::get()
            .uri("/api/admin/state")
            .cookie(test_visitor_cookie())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["isOpen"], true);
    }

    #[actix_web::test]
    async fn other_keys_are_ignored() {
        let app_state = TestAppStateBuilder::default().build_loaded().await;

        let app =
            test::init_service(App::new().app_data(app_state).service(admin_keypress_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/keypress")
            .cookie(test_visitor_cookie())
            .set_json(json!({ "key": "a", "ctrlKey": true }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["toggled"], false);
        assert_eq!(body["data"]["state"]["isOpen"], false);
    }

    #[actix_web::test]
    async fn toggle_flips_open_flag() {
        let app_state = TestAppStateBuilder::default().build_loaded().await;

        let app =
            test::init_service(App::new().app_data(app_state).service(toggle_admin_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/toggle")
            .cookie(test_visitor_cookie())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["isOpen"], true);

        let req = test::TestRequest::post()
            .uri("/api/admin/toggle")
            .cookie(test_visitor_cookie())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["isOpen"], false);
    }

    #[actix_web::test]
    async fn set_section_accepts_known_names_only() {
        let app_state = TestAppStateBuilder::default().build_loaded().await;

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(set_admin_section_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/admin/section")
            .cookie(test_visitor_cookie())
            .set_json(json!({ "section": "certifications" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["activeSection"], "certifications");

        let req = test::TestRequest::put()
            .uri("/api/admin/section")
            .cookie(test_visitor_cookie())
            .set_json(json!({ "section": "billing" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
