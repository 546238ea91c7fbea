use actix_web::{get, http::StatusCode, web, HttpResponse, Responder};
use tracing::debug;

use super::visitor::Visitor;
use super::views::{render_home, render_not_found, render_page, render_project_detail};
use crate::AppState;

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

#[get("/")]
pub async fn home_page_handler(data: web::Data<AppState>, visitor: Visitor) -> impl Responder {
    let context = data.portfolio.context_for(visitor.id()).await;
    let document = context.data().await;
    let admin = context.admin_state().await;
    let title = format!("{} | Portfolio", document.profile.name);
    html(
        StatusCode::OK,
        render_page(&title, &render_home(&document), context.chord(), &admin),
    )
}

#[get("/project/{id}")]
pub async fn project_page_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
    visitor: Visitor,
) -> impl Responder {
    let project_id = path.into_inner();
    let context = data.portfolio.context_for(visitor.id()).await;
    let document = context.data().await;
    let admin = context.admin_state().await;
    match document.find_project(&project_id) {
        Some(project) => html(
            StatusCode::OK,
            render_page(
                &project.title,
                &render_project_detail(project),
                context.chord(),
                &admin,
            ),
        ),
        None => {
            debug!(project_id = %project_id, "Unknown project requested");
            html(
                StatusCode::NOT_FOUND,
                render_page("Project Not Found", &render_not_found(), context.chord(), &admin),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::{
        test_context, test_visitor_cookie, TestAppStateBuilder,
    };
    use actix_web::{test, App};

    #[actix_web::test]
    async fn home_page_renders_loaded_document() {
        let app_state = TestAppStateBuilder::default().build_loaded().await;

        let app = test::init_service(App::new().app_data(app_state).service(home_page_handler)).await;

        let req = test::TestRequest::get().uri("/").cookie(test_visitor_cookie()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Tharusha Thilakarathna"));
        assert!(body.contains(r#"<section id="contact""#));
    }

    #[actix_web::test]
    async fn visitors_each_see_their_own_overlay_and_edits() {
        use crate::modules::portfolio::adapter::incoming::web::routes::{
            toggle_admin_handler, update_portfolio_handler,
        };
        use crate::modules::portfolio::adapter::incoming::web::visitor::{
            issue_visitor_cookie, VISITOR_COOKIE,
        };
        use actix_web::middleware::from_fn;
        use serde_json::json;

        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .wrap(from_fn(issue_visitor_cookie))
                .service(home_page_handler)
                .service(toggle_admin_handler)
                .service(update_portfolio_handler),
        )
        .await;

        // First visitor arrives and gets a cookie
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        let first = resp
            .response()
            .cookies()
            .find(|c| c.name() == VISITOR_COOKIE)
            .unwrap()
            .into_owned();

        let req = test::TestRequest::post()
            .uri("/api/admin/toggle")
            .cookie(first.clone())
            .to_request();
        test::call_service(&app, req).await;
        let req = test::TestRequest::patch()
            .uri("/api/admin/portfolio")
            .cookie(first.clone())
            .set_json(json!({ "profile": { "name": "First Visitor" } }))
            .to_request();
        test::call_service(&app, req).await;

        // A second browser without the cookie sees neither change
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        let second = resp
            .response()
            .cookies()
            .find(|c| c.name() == VISITOR_COOKIE)
            .unwrap()
            .into_owned();
        assert_ne!(second.value(), first.value());
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(!body.contains(r#"<div class="admin-overlay">"#));
        assert!(!body.contains("First Visitor"));
        assert!(body.contains("Tharusha Thilakarathna"));

        // The first visitor still has both
        let req = test::TestRequest::get().uri("/").cookie(first).to_request();
        let body = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
        assert!(body.contains(r#"<div class="admin-overlay">"#));
        assert!(body.contains("First Visitor"));
    }

    #[actix_web::test]
    async fn project_page_renders_known_project() {
        let app_state = TestAppStateBuilder::default().build_loaded().await;
        let project = test_context(&app_state).await.data().await.projects[0].clone();

        let app =
            test::init_service(App::new().app_data(app_state).service(project_page_handler)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/project/{}", project.id))
            .cookie(test_visitor_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Back to Projects"));
    }

    #[actix_web::test]
    async fn unknown_project_is_404_with_home_link() {
        let app_state = TestAppStateBuilder::default().build_loaded().await;

        let app =
            test::init_service(App::new().app_data(app_state).service(project_page_handler)).await;

        let req = test::TestRequest::get()
            .uri("/project/does-not-exist")
            .cookie(test_visitor_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Project Not Found"));
        assert!(body.contains(r#"href="/""#));
    }
}
