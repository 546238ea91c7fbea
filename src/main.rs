pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::modules::contact::adapter::outgoing::SimulatedContactNotifier;
use crate::modules::contact::application::use_cases::submit_contact::{
    ISubmitContactUseCase, SubmitContactUseCase,
};
use crate::modules::portfolio::adapter::incoming::web::visitor::issue_visitor_cookie;
use crate::modules::portfolio::adapter::outgoing::file_storage::DEFAULT_QUOTA_BYTES;
use crate::modules::portfolio::adapter::outgoing::{FileDocumentStorage, MemoryDocumentStorage};
use crate::modules::portfolio::application::ports::outgoing::DocumentStorage;
use crate::modules::portfolio::application::services::VisitorSessions;
use crate::shared::api::{custom_json_config, custom_payload_config};

use actix_web::{middleware::from_fn, web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<VisitorSessions>,
    pub submit_contact_use_case: Arc<dyn ISubmitContactUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let storage: Arc<dyn DocumentStorage> = match &config.storage_dir {
        Some(dir) => {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("Failed to create storage dir {}", dir.display()))?;
            info!(dir = %dir.display(), "Using file document storage");
            Arc::new(FileDocumentStorage::new(dir.clone()))
        }
        None => {
            warn!("STORAGE_DIR not set, portfolio edits will not survive a restart");
            Arc::new(MemoryDocumentStorage::new())
        }
    };

    let portfolio = Arc::new(VisitorSessions::new(
        storage,
        config.storage_key.clone(),
        config.admin_chord.clone(),
    ));

    let submit_contact_use_case =
        SubmitContactUseCase::new(SimulatedContactNotifier::new(), config.contact_delay);

    let state = AppState {
        portfolio,
        submit_contact_use_case: Arc::new(submit_contact_use_case),
    };

    let server_url = config.server_url();
    info!(url = %server_url, chord = %config.admin_chord, "Server starting");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config().limit(DEFAULT_QUOTA_BYTES))
            .app_data(custom_payload_config(DEFAULT_QUOTA_BYTES))
            .wrap(from_fn(issue_visitor_cookie))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::contact::adapter::incoming::web::routes as contact;
    use crate::modules::portfolio::adapter::incoming::web::{pages, routes as portfolio};

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Pages
    cfg.service(pages::home_page_handler);
    cfg.service(pages::project_page_handler);
    // Portfolio
    cfg.service(portfolio::get_portfolio_handler);
    cfg.service(portfolio::update_portfolio_handler);
    // Admin
    cfg.service(portfolio::get_admin_state_handler);
    cfg.service(portfolio::toggle_admin_handler);
    cfg.service(portfolio::admin_keypress_handler);
    cfg.service(portfolio::set_admin_section_handler);
    cfg.service(portfolio::reset_portfolio_handler);
    cfg.service(portfolio::export_portfolio_handler);
    cfg.service(portfolio::import_portfolio_handler);
    // Drafts
    cfg.service(portfolio::activate_cv_handler);
    cfg.service(portfolio::get_draft_handler);
    cfg.service(portfolio::update_singleton_draft_handler);
    cfg.service(portfolio::add_draft_item_handler);
    cfg.service(portfolio::update_draft_item_handler);
    cfg.service(portfolio::remove_draft_item_handler);
    cfg.service(portfolio::push_draft_list_item_handler);
    cfg.service(portfolio::remove_draft_list_item_handler);
    cfg.service(portfolio::save_draft_handler);
    // Contact
    cfg.service(contact::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
