use serde::Serialize;
use serde_json::{Map, Value};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};
use utoipa::ToSchema;

use super::portfolio_store::{ExportedDocument, ImportError, PortfolioStore};
use crate::modules::portfolio::application::editor::{
    AdminPanels, AdminSection, DraftPanel, EditorError, NestedList,
};
use crate::modules::portfolio::application::shortcut::{KeyChord, KeyPress};
use crate::modules::portfolio::domain::defaults::default_document;
use crate::modules::portfolio::domain::entities::PortfolioDocument;
use crate::modules::portfolio::domain::patch::DocumentPatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminState {
    pub is_open: bool,
    pub active_section: Option<AdminSection>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftView {
    pub section: AdminSection,
    /// Unsaved edits are present.
    pub dirty: bool,
    #[schema(value_type = Object)]
    pub draft: Value,
}

struct ContextState {
    document: PortfolioDocument,
    is_loaded: bool,
    admin_open: bool,
    active_section: Option<AdminSection>,
}

impl ContextState {
    fn admin(&self) -> AdminState {
        AdminState {
            is_open: self.admin_open,
            active_section: self.active_section,
        }
    }
}

/// One visitor's portfolio state: the committed document, the admin overlay
/// flags and the admin drafts.
///
/// Locks are always taken state first, then panels.
pub struct PortfolioContext {
    store: PortfolioStore,
    chord: KeyChord,
    state: RwLock<ContextState>,
    panels: Mutex<AdminPanels>,
}

impl PortfolioContext {
    pub fn new(store: PortfolioStore, chord: KeyChord) -> Self {
        let document = default_document();
        let panels = AdminPanels::new(&document);
        Self {
            store,
            chord,
            state: RwLock::new(ContextState {
                document,
                is_loaded: false,
                admin_open: false,
                active_section: None,
            }),
            panels: Mutex::new(panels),
        }
    }

    /// Loads the stored document and marks the context ready.
    pub async fn initialize(&self) {
        let document = self.store.load().await;
        let mut state = self.state.write().await;
        state.document = document;
        state.is_loaded = true;
        self.panels.lock().await.sync(&state.document);
        info!(
            projects = state.document.projects.len(),
            articles = state.document.articles.len(),
            "Portfolio data loaded"
        );
    }

    pub async fn data(&self) -> PortfolioDocument {
        self.state.read().await.document.clone()
    }

    pub async fn is_loaded(&self) -> bool {
        self.state.read().await.is_loaded
    }

    pub fn chord(&self) -> &KeyChord {
        &self.chord
    }

    /// Replaces every top-level field present in `patch` and persists the result.
    pub async fn update_data(&self, patch: DocumentPatch) -> PortfolioDocument {
        let mut state = self.state.write().await;
        patch.apply_to(&mut state.document);
        self.store.save(&state.document).await;
        self.panels.lock().await.sync(&state.document);
        state.document.clone()
    }

    pub async fn reset_data(&self) -> PortfolioDocument {
        let mut state = self.state.write().await;
        state.document = self.store.reset().await;
        self.panels.lock().await.sync(&state.document);
        state.document.clone()
    }

    pub async fn export_data(&self) -> Result<ExportedDocument, serde_json::Error> {
        let state = self.state.read().await;
        self.store.export(&state.document)
    }

    /// Replaces the whole document. On error the current document is kept.
    pub async fn import_data(&self, text: &str) -> Result<PortfolioDocument, ImportError> {
        let mut state = self.state.write().await;
        state.document = self.store.import(text).await?;
        self.panels.lock().await.sync(&state.document);
        info!("Portfolio data imported");
        Ok(state.document.clone())
    }

    pub async fn admin_state(&self) -> AdminState {
        self.state.read().await.admin()
    }

    pub async fn toggle_admin(&self) -> AdminState {
        let mut state = self.state.write().await;
        state.admin_open = !state.admin_open;
        debug!(open = state.admin_open, "Admin overlay toggled");
        state.admin()
    }

    pub async fn set_admin_open(&self, open: bool) -> AdminState {
        let mut state = self.state.write().await;
        state.admin_open = open;
        state.admin()
    }

    pub async fn set_active_section(&self, section: Option<AdminSection>) -> AdminState {
        let mut state = self.state.write().await;
        state.active_section = section;
        state.admin()
    }

    /// Toggles the overlay when `press` matches the admin chord.
    pub async fn handle_key(&self, press: &KeyPress) -> bool {
        if !self.chord.matches(press) {
            return false;
        }
        self.toggle_admin().await;
        true
    }

    async fn with_panel<R>(
        &self,
        section: AdminSection,
        edit: impl FnOnce(&mut dyn DraftPanel) -> R,
    ) -> R {
        let mut panels = self.panels.lock().await;
        edit(panels.panel_mut(section))
    }

    pub async fn draft(&self, section: AdminSection) -> DraftView {
        let panels = self.panels.lock().await;
        let panel = panels.panel(section);
        DraftView {
            section,
            dirty: panel.is_dirty(),
            draft: panel.snapshot(),
        }
    }

    pub async fn draft_add(&self, section: AdminSection) -> Result<String, EditorError> {
        let key = self.with_panel(section, |panel| panel.add()).await?;
        debug!(%section, %key, "Draft item added");
        Ok(key)
    }

    pub async fn draft_remove(&self, section: AdminSection, key: &str) -> Result<(), EditorError> {
        self.with_panel(section, |panel| panel.remove(key)).await
    }

    pub async fn draft_update(
        &self,
        section: AdminSection,
        key: Option<&str>,
        fields: Map<String, Value>,
    ) -> Result<(), EditorError> {
        self.with_panel(section, |panel| panel.update(key, fields))
            .await
    }

    pub async fn draft_push_item(
        &self,
        section: AdminSection,
        key: &str,
        list: NestedList,
        value: &str,
    ) -> Result<bool, EditorError> {
        self.with_panel(section, |panel| panel.push_item(key, list, value))
            .await
    }

    pub async fn draft_remove_item(
        &self,
        section: AdminSection,
        key: &str,
        list: NestedList,
        index: usize,
    ) -> Result<(), EditorError> {
        self.with_panel(section, |panel| panel.remove_item(key, list, index))
            .await
    }

    pub async fn draft_activate(&self, section: AdminSection, key: &str) -> Result<(), EditorError> {
        self.with_panel(section, |panel| panel.activate(key)).await
    }

    /// Commits the section's draft through `update_data`.
    pub async fn save_draft(&self, section: AdminSection) -> PortfolioDocument {
        let patch = self.panels.lock().await.panel(section).commit();
        let document = self.update_data(patch).await;
        info!(%section, "Draft saved");
        document
    }
}
