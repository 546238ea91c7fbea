use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::modules::contact::adapter::incoming::web::routes::{
    ContactRequestDto, ContactResponse,
};
use crate::modules::portfolio::adapter::incoming::web::routes::{
    AddedItemResponse, KeyPressResponse, PushListItemRequest, PushListItemResponse,
    SetSectionRequest,
};
use crate::modules::portfolio::application::editor::{AdminSection, NestedList};
use crate::modules::portfolio::application::services::{AdminState, DraftView};
use crate::modules::portfolio::application::shortcut::KeyPress;
use crate::modules::portfolio::domain::entities::{
    AboutSection, Achievement, Article, ArticleStatus, Certification, CvFile, Experience,
    PortfolioDocument, Profile, Project, SkillCategory,
};
use crate::modules::portfolio::domain::patch::DocumentPatch;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "Public content, admin editing and contact endpoints for the portfolio site"
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::readiness,

        // Portfolio
        crate::modules::portfolio::adapter::incoming::web::routes::portfolio::get_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::portfolio::update_portfolio_handler,

        // Admin
        crate::modules::portfolio::adapter::incoming::web::routes::admin_state::get_admin_state_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::admin_state::toggle_admin_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::admin_state::admin_keypress_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::admin_state::set_admin_section_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::transfer::reset_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::transfer::export_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::transfer::import_portfolio_handler,

        // Drafts
        crate::modules::portfolio::adapter::incoming::web::routes::drafts::get_draft_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::drafts::update_singleton_draft_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::drafts::add_draft_item_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::drafts::update_draft_item_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::drafts::remove_draft_item_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::drafts::push_draft_list_item_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::drafts::remove_draft_list_item_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::drafts::activate_cv_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::drafts::save_draft_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact::submit_contact_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PortfolioDocument>,
            ErrorResponse,
            ErrorDetail,

            // Document
            PortfolioDocument,
            Profile,
            AboutSection,
            SkillCategory,
            Experience,
            Project,
            Achievement,
            Certification,
            Article,
            ArticleStatus,
            CvFile,
            DocumentPatch,

            // Admin
            AdminState,
            AdminSection,
            KeyPress,
            KeyPressResponse,
            SetSectionRequest,

            // Drafts
            DraftView,
            NestedList,
            AddedItemResponse,
            PushListItemRequest,
            PushListItemResponse,

            // Contact
            ContactRequestDto,
            ContactResponse
        )
    ),
    tags(
        (name = "health", description = "Liveness and readiness checks"),
        (name = "portfolio", description = "Portfolio document"),
        (name = "admin", description = "Admin mode, reset, export and import"),
        (name = "drafts", description = "Per-section editing drafts"),
        (name = "contact", description = "Contact form"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route_group() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/health",
            "/ready",
            "/api/portfolio",
            "/api/admin/portfolio",
            "/api/admin/export",
            "/api/admin/import",
            "/api/admin/state",
            "/api/admin/drafts/cv/items/{key}/activate",
            "/api/admin/drafts/{section}/save",
            "/api/contact",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {expected}"
            );
        }
    }
}
