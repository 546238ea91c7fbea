use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{merge_fields, AdminSection, DraftPanel, EditorError, NestedList};
use crate::modules::portfolio::domain::entities::PortfolioDocument;
use crate::modules::portfolio::domain::patch::DocumentPatch;

/// A single object in the document (profile, about) edited as one form.
pub trait SingletonEntity:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const SECTION: AdminSection;

    fn slice(document: &PortfolioDocument) -> &Self;

    fn into_patch(self) -> DocumentPatch;
}

#[derive(Debug, Clone)]
pub struct SingletonDraft<T> {
    draft: T,
    baseline: T,
}

impl<T: SingletonEntity> SingletonDraft<T> {
    pub fn new(document: &PortfolioDocument) -> Self {
        let draft = T::slice(document).clone();
        Self {
            baseline: draft.clone(),
            draft,
        }
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }
}

impl<T: SingletonEntity> DraftPanel for SingletonDraft<T> {
    fn section(&self) -> AdminSection {
        T::SECTION
    }

    fn snapshot(&self) -> Value {
        serde_json::to_value(&self.draft).unwrap_or(Value::Null)
    }

    fn is_dirty(&self) -> bool {
        self.draft != self.baseline
    }

    fn sync(&mut self, document: &PortfolioDocument) {
        let committed = T::slice(document);
        if *committed != self.baseline {
            self.baseline = committed.clone();
            self.draft = committed.clone();
        }
    }

    fn add(&mut self) -> Result<String, EditorError> {
        Err(EditorError::unsupported(T::SECTION, "add"))
    }

    fn remove(&mut self, _key: &str) -> Result<(), EditorError> {
        Err(EditorError::unsupported(T::SECTION, "remove"))
    }

    fn update(
        &mut self,
        key: Option<&str>,
        fields: Map<String, Value>,
    ) -> Result<(), EditorError> {
        if key.is_some() {
            return Err(EditorError::unsupported(T::SECTION, "item update"));
        }
        self.draft = merge_fields(&self.draft, fields, &[])?;
        Ok(())
    }

    fn push_item(
        &mut self,
        _key: &str,
        _list: NestedList,
        _value: &str,
    ) -> Result<bool, EditorError> {
        Err(EditorError::unsupported(T::SECTION, "list"))
    }

    fn remove_item(
        &mut self,
        _key: &str,
        _list: NestedList,
        _index: usize,
    ) -> Result<(), EditorError> {
        Err(EditorError::unsupported(T::SECTION, "list"))
    }

    fn activate(&mut self, _key: &str) -> Result<(), EditorError> {
        Err(EditorError::unsupported(T::SECTION, "activate"))
    }

    fn commit(&self) -> DocumentPatch {
        self.draft.clone().into_patch()
    }
}
