use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    #[schema(example = "ok")]
    status: &'static str,
    #[schema(example = "ok")]
    storage: &'static str,
    /// Visitors with a loaded document
    #[schema(example = 3)]
    sessions: usize,
}

/// LIVENESS CHECK
/// - No I/O
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS CHECK
/// - Reads the document store
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Storage reachable", body = ReadinessResponse),
        (status = 503, description = "Storage unavailable", body = ReadinessResponse),
    )
)]
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let storage_ok = data.portfolio.storage_ready().await;
    let status = if storage_ok { "ok" } else { "unhealthy" };

    let body = ReadinessResponse {
        status,
        storage: status,
        sessions: data.portfolio.active_sessions().await,
    };

    if storage_ok {
        HttpResponse::Ok().json(body)
    } else {
        warn!(storage = body.storage, "Readiness check failed");
        HttpResponse::ServiceUnavailable().json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::UnavailableStorage;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use std::sync::Arc;

    #[actix_web::test]
    async fn health_is_always_ok() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn ready_when_storage_answers() {
        let app_state = TestAppStateBuilder::default().build_loaded().await;
        let app = test::init_service(App::new().app_data(app_state).service(readiness)).await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["storage"], "ok");
        assert_eq!(body["sessions"], 1);
    }

    #[actix_web::test]
    async fn not_ready_without_storage() {
        let app_state = TestAppStateBuilder::default()
            .with_storage(Arc::new(UnavailableStorage))
            .build_loaded()
            .await;
        let app = test::init_service(App::new().app_data(app_state).service(readiness)).await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["storage"], "unhealthy");
    }
}
