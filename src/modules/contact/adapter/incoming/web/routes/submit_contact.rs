use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::use_cases::submit_contact::SubmitContactError;
use crate::modules::contact::domain::ContactMessage;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Contact form submission
#[derive(Deserialize, ToSchema)]
pub struct ContactRequestDto {
    #[schema(example = "Jane Doe")]
    pub name: String,

    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "I'd like to talk about a project.")]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ContactResponse {
    /// Confirmation shown to the sender
    #[schema(
        example = "Thank you Jane Doe! Your message has been received. I'll get back to you soon!"
    )]
    pub message: String,
}

/// Send a message through the contact form
///
/// The request completes after a short simulated delivery delay.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequestDto,
    responses(
        (status = 200, description = "Message received", body = inline(SuccessResponse<ContactResponse>)),
        (
            status = 400,
            description = "Missing field or malformed email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "Invalid email format" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let message = match ContactMessage::new(dto.name, dto.email, dto.message) {
        Ok(message) => message,
        Err(e) => {
            warn!(error = %e, "Contact form rejected");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.submit_contact_use_case.execute(message).await {
        Ok(receipt) => {
            info!("Contact form submitted");
            ApiResponse::success(ContactResponse {
                message: receipt.message,
            })
        }
        Err(SubmitContactError::DeliveryFailed(ref e)) => {
            error!(error = %e, "Contact message delivery failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::use_cases::submit_contact::{
        ContactReceipt, ISubmitContactUseCase, SubmitContactUseCase,
    };
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::RecordingContactNotifier;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;

    struct FailingSubmitContact;

    #[async_trait]
    impl ISubmitContactUseCase for FailingSubmitContact {
        async fn execute(
            &self,
            _message: ContactMessage,
        ) -> Result<ContactReceipt, SubmitContactError> {
            Err(SubmitContactError::DeliveryFailed("offline".to_string()))
        }
    }

    #[actix_web::test]
    async fn valid_submission_gets_confirmation() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({
                "name": "Jane",
                "email": "jane@example.com",
                "message": "Hello!"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(
            body["data"]["message"],
            "Thank you Jane! Your message has been received. I'll get back to you soon!"
        );
    }

    #[actix_web::test]
    async fn accepted_message_reaches_notifier_trimmed() {
        let notifier = RecordingContactNotifier::default();
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact(Arc::new(SubmitContactUseCase::new(
                notifier.clone(),
                Duration::ZERO,
            )))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({
                "name": "  Jane ",
                "email": "jane@example.com",
                "message": " Hello! "
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let received = notifier.received().await;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].name(), "Jane");
        assert_eq!(received[0].message(), "Hello!");
    }

    #[actix_web::test]
    async fn malformed_email_is_rejected() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "name": "Jane", "email": "jane", "message": "Hello!" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Invalid email format");
    }

    #[actix_web::test]
    async fn missing_field_is_validation_error() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "name": "Jane" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn delivery_failure_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact(Arc::new(FailingSubmitContact))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "name": "Jane", "email": "jane@example.com", "message": "Hi" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
