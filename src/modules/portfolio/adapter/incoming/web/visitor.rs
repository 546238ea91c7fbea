// src/modules/portfolio/adapter/incoming/web/visitor.rs
use actix_web::{
    body::MessageBody,
    cookie::{time::Duration, Cookie, SameSite},
    dev::{Payload, ServiceRequest, ServiceResponse},
    middleware::Next,
    Error as ActixError, FromRequest, HttpMessage, HttpRequest,
};
use std::future::{ready, Ready};

use crate::modules::portfolio::application::services::VisitorId;

pub const VISITOR_COOKIE: &str = "portfolio_visitor";

const VISITOR_COOKIE_DAYS: i64 = 365;

/// The browser a request comes from. Each visitor edits their own copy of the
/// document, the way the page's local storage would.
#[derive(Debug, Clone)]
pub struct Visitor(VisitorId);

impl Visitor {
    pub fn id(&self) -> &VisitorId {
        &self.0
    }
}

fn visitor_from_cookie(req: &HttpRequest) -> Option<VisitorId> {
    req.cookie(VISITOR_COOKIE)
        .and_then(|cookie| VisitorId::parse(cookie.value()))
}

pub fn visitor_cookie(visitor: &VisitorId) -> Cookie<'static> {
    Cookie::build(VISITOR_COOKIE, visitor.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(VISITOR_COOKIE_DAYS))
        .finish()
}

impl FromRequest for Visitor {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Set by `issue_visitor_cookie` when the app is wrapped with it
        let from_extensions = req.extensions().get::<VisitorId>().cloned();
        let id = from_extensions
            .or_else(|| visitor_from_cookie(req))
            .unwrap_or_else(VisitorId::generate);
        ready(Ok(Visitor(id)))
    }
}

/// Middleware that resolves the visitor for every request and hands a new
/// visitor their cookie on the response.
pub async fn issue_visitor_cookie(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, ActixError> {
    let (visitor, fresh) = match visitor_from_cookie(req.request()) {
        Some(visitor) => (visitor, false),
        None => (VisitorId::generate(), true),
    };
    req.extensions_mut().insert(visitor.clone());

    let mut res = next.call(req).await?;
    if fresh {
        res.response_mut().add_cookie(&visitor_cookie(&visitor))?;
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, middleware::from_fn, test, App, HttpResponse, Responder};

    #[get("/whoami")]
    async fn whoami(visitor: Visitor) -> impl Responder {
        HttpResponse::Ok().body(visitor.id().to_string())
    }

    #[actix_web::test]
    async fn new_visitor_gets_a_cookie_matching_the_extracted_id() {
        let app = test::init_service(App::new().wrap(from_fn(issue_visitor_cookie)).service(whoami))
            .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == VISITOR_COOKIE)
            .unwrap()
            .into_owned();
        let body = test::read_body(resp).await;
        assert_eq!(cookie.value(), String::from_utf8(body.to_vec()).unwrap());
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[actix_web::test]
    async fn known_visitor_is_kept_without_a_new_cookie() {
        let app = test::init_service(App::new().wrap(from_fn(issue_visitor_cookie)).service(whoami))
            .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new(VISITOR_COOKIE, "returning42"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.response().cookies().count(), 0);
        let body = test::read_body(resp).await;
        assert_eq!(body, "returning42");
    }

    #[actix_web::test]
    async fn invalid_cookie_is_replaced() {
        let app = test::init_service(App::new().wrap(from_fn(issue_visitor_cookie)).service(whoami))
            .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new(VISITOR_COOKIE, "../../etc"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        let issued = resp
            .response()
            .cookies()
            .find(|c| c.name() == VISITOR_COOKIE)
            .map(|c| c.value().to_string())
            .unwrap();
        assert!(VisitorId::parse(&issued).is_some());
    }
}
