//! Admin editor panels. Each panel stages edits to one slice of the document
//! and only touches the committed document when saved.

mod collection_draft;
mod drafted_entities;
mod singleton_draft;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::modules::portfolio::domain::entities::{
    AboutSection, Achievement, Article, Certification, CvFile, Experience, PortfolioDocument,
    Profile, Project, SkillCategory,
};
use crate::modules::portfolio::domain::patch::DocumentPatch;

pub use collection_draft::{CollectionDraft, DraftEntity};
pub use singleton_draft::{SingletonDraft, SingletonEntity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AdminSection {
    Profile,
    About,
    Skills,
    Experience,
    Projects,
    Achievements,
    Certifications,
    Articles,
    Cv,
}

impl AdminSection {
    pub const ALL: [AdminSection; 9] = [
        Self::Profile,
        Self::About,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Achievements,
        Self::Certifications,
        Self::Articles,
        Self::Cv,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Achievements => "achievements",
            Self::Certifications => "certifications",
            Self::Articles => "articles",
            Self::Cv => "cv",
        }
    }

    /// Tab caption in the admin overlay.
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile & Bio",
            Self::About => "About Me",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Achievements => "Achievements",
            Self::Certifications => "Certifications",
            Self::Articles => "Articles",
            Self::Cv => "CV Manager",
        }
    }

    /// Profile and about are single records; every other section is a list.
    pub fn is_collection(self) -> bool {
        !matches!(self, Self::Profile | Self::About)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AdminSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String lists nested inside an entity that support add/remove editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NestedList {
    Highlights,
    Technologies,
    Images,
    Tags,
    Skills,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditorError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("'{operation}' is not supported for {section}")]
    Unsupported {
        section: AdminSection,
        operation: &'static str,
    },

    #[error("Field '{0}' cannot be edited")]
    ImmutableField(String),

    #[error("Invalid field value: {0}")]
    InvalidField(String),

    #[error("List index {0} out of range")]
    IndexOutOfRange(usize),
}

impl EditorError {
    pub(crate) fn unsupported(section: AdminSection, operation: &'static str) -> Self {
        Self::Unsupported { section, operation }
    }
}

/// Type-erased view over one section's draft so the admin routes can address
/// every section the same way. Collection items are keyed by id, or by
/// position for id-less entities.
pub trait DraftPanel: Send + Sync {
    fn section(&self) -> AdminSection;

    /// Current draft as JSON.
    fn snapshot(&self) -> Value;

    /// True when the draft differs from the last committed slice it saw.
    fn is_dirty(&self) -> bool;

    /// Re-seeds the draft when the committed slice changed since the last sync.
    fn sync(&mut self, document: &PortfolioDocument);

    /// Appends a placeholder item and returns its key.
    fn add(&mut self) -> Result<String, EditorError>;

    fn remove(&mut self, key: &str) -> Result<(), EditorError>;

    /// Shallow-merges `fields` into the item (or the singleton when `key` is None).
    fn update(&mut self, key: Option<&str>, fields: Map<String, Value>)
        -> Result<(), EditorError>;

    /// Appends a trimmed value to a nested list. Blank input is ignored and
    /// reported as `Ok(false)`.
    fn push_item(&mut self, key: &str, list: NestedList, value: &str)
        -> Result<bool, EditorError>;

    fn remove_item(&mut self, key: &str, list: NestedList, index: usize)
        -> Result<(), EditorError>;

    fn activate(&mut self, key: &str) -> Result<(), EditorError>;

    /// The whole draft as a document patch for `update_data`.
    fn commit(&self) -> DocumentPatch;
}

/// Every section's draft, owned by the data context for the app lifetime.
pub struct AdminPanels {
    panels: Vec<Box<dyn DraftPanel>>,
}

impl AdminPanels {
    pub fn new(document: &PortfolioDocument) -> Self {
        let panels: Vec<Box<dyn DraftPanel>> = AdminSection::ALL
            .into_iter()
            .map(|section| -> Box<dyn DraftPanel> {
                match section {
                    AdminSection::Profile => Box::new(SingletonDraft::<Profile>::new(document)),
                    AdminSection::About => Box::new(SingletonDraft::<AboutSection>::new(document)),
                    AdminSection::Skills => {
                        Box::new(CollectionDraft::<SkillCategory>::new(document))
                    }
                    AdminSection::Experience => {
                        Box::new(CollectionDraft::<Experience>::new(document))
                    }
                    AdminSection::Projects => Box::new(CollectionDraft::<Project>::new(document)),
                    AdminSection::Achievements => {
                        Box::new(CollectionDraft::<Achievement>::new(document))
                    }
                    AdminSection::Certifications => {
                        Box::new(CollectionDraft::<Certification>::new(document))
                    }
                    AdminSection::Articles => Box::new(CollectionDraft::<Article>::new(document)),
                    AdminSection::Cv => Box::new(CollectionDraft::<CvFile>::new(document)),
                }
            })
            .collect();
        Self { panels }
    }

    pub fn panel(&self, section: AdminSection) -> &dyn DraftPanel {
        self.panels[section.index()].as_ref()
    }

    pub fn panel_mut(&mut self, section: AdminSection) -> &mut dyn DraftPanel {
        self.panels[section.index()].as_mut()
    }

    pub fn sync(&mut self, document: &PortfolioDocument) {
        for panel in &mut self.panels {
            panel.sync(document);
        }
    }
}

/// Shallow merge of `fields` over a serialized item. The id and every name in
/// `locked` are immutable.
pub(crate) fn merge_fields<T>(
    item: &T,
    fields: Map<String, Value>,
    locked: &[&str],
) -> Result<T, EditorError>
where
    T: Serialize + serde::de::DeserializeOwned,
{
    if let Some(field) = std::iter::once("id")
        .chain(locked.iter().copied())
        .find(|name| fields.contains_key(*name))
    {
        return Err(EditorError::ImmutableField(field.to_string()));
    }
    let mut value =
        serde_json::to_value(item).map_err(|e| EditorError::InvalidField(e.to_string()))?;
    let Value::Object(map) = &mut value else {
        return Err(EditorError::InvalidField("item is not an object".to_string()));
    };
    for (field, field_value) in fields {
        map.insert(field, field_value);
    }
    serde_json::from_value(value).map_err(|e| EditorError::InvalidField(e.to_string()))
}
