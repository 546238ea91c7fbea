use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{merge_fields, AdminSection, DraftPanel, EditorError, NestedList};
use crate::modules::portfolio::domain::entities::PortfolioDocument;
use crate::modules::portfolio::domain::patch::DocumentPatch;

/// An entity type editable as a list in the admin overlay.
pub trait DraftEntity:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const SECTION: AdminSection;

    /// Id-less entities are addressed by their index in the draft.
    const POSITIONAL: bool = false;

    /// Fields only changed through dedicated operations, never by `update`.
    const LOCKED_FIELDS: &'static [&'static str] = &[];

    fn slice(document: &PortfolioDocument) -> &[Self];

    fn into_patch(items: Vec<Self>) -> DocumentPatch;

    /// New item appended by "add", given the current draft.
    fn placeholder(existing: &[Self]) -> Self;

    fn id(&self) -> Option<&str>;

    fn list_mut(&mut self, _list: NestedList) -> Option<&mut Vec<String>> {
        None
    }

    fn remove(items: &mut Vec<Self>, index: usize) {
        items.remove(index);
    }

    fn activate(_items: &mut [Self], _key: &str) -> Result<(), EditorError> {
        Err(EditorError::unsupported(Self::SECTION, "activate"))
    }
}

/// Local working copy of one collection. `baseline` is the committed slice
/// the draft was last seeded from.
#[derive(Debug, Clone)]
pub struct CollectionDraft<T> {
    items: Vec<T>,
    baseline: Vec<T>,
}

impl<T: DraftEntity> CollectionDraft<T> {
    pub fn new(document: &PortfolioDocument) -> Self {
        let items = T::slice(document).to_vec();
        Self {
            baseline: items.clone(),
            items,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    fn index_of(&self, key: &str) -> Result<usize, EditorError> {
        let found = if T::POSITIONAL {
            key.parse::<usize>().ok().filter(|i| *i < self.items.len())
        } else {
            self.items.iter().position(|item| item.id() == Some(key))
        };
        found.ok_or_else(|| EditorError::ItemNotFound(key.to_string()))
    }

    fn key_at(&self, index: usize) -> String {
        match self.items[index].id() {
            Some(id) if !T::POSITIONAL => id.to_string(),
            _ => index.to_string(),
        }
    }
}

impl<T: DraftEntity> DraftPanel for CollectionDraft<T> {
    fn section(&self) -> AdminSection {
        T::SECTION
    }

    fn snapshot(&self) -> Value {
        serde_json::to_value(&self.items).unwrap_or(Value::Array(Vec::new()))
    }

    fn is_dirty(&self) -> bool {
        self.items != self.baseline
    }

    fn sync(&mut self, document: &PortfolioDocument) {
        let committed = T::slice(document);
        if committed != self.baseline.as_slice() {
            self.baseline = committed.to_vec();
            self.items = self.baseline.clone();
        }
    }

    fn add(&mut self) -> Result<String, EditorError> {
        let item = T::placeholder(&self.items);
        self.items.push(item);
        Ok(self.key_at(self.items.len() - 1))
    }

    fn remove(&mut self, key: &str) -> Result<(), EditorError> {
        let index = self.index_of(key)?;
        T::remove(&mut self.items, index);
        Ok(())
    }

    fn update(
        &mut self,
        key: Option<&str>,
        fields: Map<String, Value>,
    ) -> Result<(), EditorError> {
        let key = key.ok_or_else(|| EditorError::ItemNotFound(String::new()))?;
        let index = self.index_of(key)?;
        self.items[index] = merge_fields(&self.items[index], fields, T::LOCKED_FIELDS)?;
        Ok(())
    }

    fn push_item(
        &mut self,
        key: &str,
        list: NestedList,
        value: &str,
    ) -> Result<bool, EditorError> {
        let index = self.index_of(key)?;
        let target = self.items[index]
            .list_mut(list)
            .ok_or_else(|| EditorError::unsupported(T::SECTION, "list"))?;
        let value = value.trim();
        if value.is_empty() {
            return Ok(false);
        }
        target.push(value.to_string());
        Ok(true)
    }

    fn remove_item(
        &mut self,
        key: &str,
        list: NestedList,
        index: usize,
    ) -> Result<(), EditorError> {
        let item_index = self.index_of(key)?;
        let target = self.items[item_index]
            .list_mut(list)
            .ok_or_else(|| EditorError::unsupported(T::SECTION, "list"))?;
        if index >= target.len() {
            return Err(EditorError::IndexOutOfRange(index));
        }
        target.remove(index);
        Ok(())
    }

    fn activate(&mut self, key: &str) -> Result<(), EditorError> {
        T::activate(&mut self.items, key)
    }

    fn commit(&self) -> DocumentPatch {
        T::into_patch(self.items.clone())
    }
}
