use crate::modules::contact::application::use_cases::submit_contact::ISubmitContactUseCase;
use crate::modules::portfolio::adapter::incoming::web::visitor::visitor_cookie;
use crate::modules::portfolio::adapter::outgoing::MemoryDocumentStorage;
use crate::modules::portfolio::application::ports::outgoing::DocumentStorage;
use crate::modules::portfolio::application::services::portfolio_store::DEFAULT_STORAGE_KEY;
use crate::modules::portfolio::application::services::{
    PortfolioContext, VisitorId, VisitorSessions,
};
use crate::modules::portfolio::application::shortcut::KeyChord;
use crate::tests::support::stubs::StubSubmitContactUseCase;
use crate::AppState;
use actix_web::{cookie::Cookie, web};
use std::sync::Arc;

/// Visitor every route test acts as unless it says otherwise.
pub const TEST_VISITOR: &str = "testvisitor";

pub fn test_visitor() -> VisitorId {
    VisitorId::parse(TEST_VISITOR).unwrap()
}

/// Cookie identifying requests as coming from `TEST_VISITOR`.
pub fn test_visitor_cookie() -> Cookie<'static> {
    visitor_cookie(&test_visitor())
}

pub struct TestAppStateBuilder {
    storage: Arc<dyn DocumentStorage>,
    chord: KeyChord,
    submit_contact: Arc<dyn ISubmitContactUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            storage: Arc::new(MemoryDocumentStorage::new()),
            chord: KeyChord::default(),
            submit_contact: Arc::new(StubSubmitContactUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_storage(mut self, storage: Arc<dyn DocumentStorage>) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_submit_contact(mut self, uc: Arc<dyn ISubmitContactUseCase + Send + Sync>) -> Self {
        self.submit_contact = uc;
        self
    }

    /// State with no visitor sessions yet.
    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: Arc::new(VisitorSessions::new(
                self.storage,
                DEFAULT_STORAGE_KEY,
                self.chord,
            )),
            submit_contact_use_case: self.submit_contact,
        })
    }

    /// State where `TEST_VISITOR` already has a loaded session.
    pub async fn build_loaded(self) -> web::Data<AppState> {
        let state = self.build();
        state.portfolio.context_for(&test_visitor()).await;
        state
    }
}

/// The test visitor's context in `state`.
pub async fn test_context(state: &web::Data<AppState>) -> Arc<PortfolioContext> {
    state.portfolio.context_for(&test_visitor()).await
}
