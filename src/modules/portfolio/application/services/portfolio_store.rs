use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

use crate::modules::portfolio::application::ports::outgoing::{DocumentStorage, StorageError};
use crate::modules::portfolio::domain::defaults::default_document;
use crate::modules::portfolio::domain::entities::PortfolioDocument;

pub const DEFAULT_STORAGE_KEY: &str = "portfolio_data";
pub const EXPORT_FILE_NAME: &str = "portfolio-data.json";

/// Top-level keys whose stored object is merged field-by-field over the
/// default instead of replacing it.
const NESTED_MERGE_KEYS: [&str; 2] = ["profile", "about"];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImportError {
    #[error("Invalid JSON: {0}")]
    Syntax(String),
}

#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub file_name: &'static str,
    pub contents: String,
}

/// Loads, saves, and transfers the portfolio document against a key-value
/// storage backend. Storage failures never reach callers.
#[derive(Clone)]
pub struct PortfolioStore {
    storage: Arc<dyn DocumentStorage>,
    key: String,
}

impl PortfolioStore {
    pub fn new(storage: Arc<dyn DocumentStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// True when the backend answers a read for the document key.
    pub async fn is_available(&self) -> bool {
        self.storage.get_item(&self.key).await.is_ok()
    }

    pub async fn load(&self) -> PortfolioDocument {
        let stored = match self.storage.get_item(&self.key).await {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                debug!(key = %self.key, "No stored portfolio, using defaults");
                return default_document();
            }
            Err(StorageError::Unavailable) => {
                debug!("Storage unavailable, using default portfolio");
                return default_document();
            }
            Err(e) => {
                error!(key = %self.key, error = %e, "Error loading portfolio data");
                return default_document();
            }
        };

        let parsed: Value = match serde_json::from_str(&stored) {
            Ok(value) => value,
            Err(e) => {
                error!(key = %self.key, error = %e, "Stored portfolio is not valid JSON");
                return default_document();
            }
        };

        match merge_over_defaults(parsed) {
            Ok(document) => document,
            Err(e) => {
                error!(key = %self.key, error = %e, "Stored portfolio has an unexpected shape");
                default_document()
            }
        }
    }

    /// Overwrites the stored blob. Failures are logged and dropped.
    pub async fn save(&self, document: &PortfolioDocument) {
        let blob = match serde_json::to_string(document) {
            Ok(blob) => blob,
            Err(e) => {
                error!(error = %e, "Error serializing portfolio data");
                return;
            }
        };

        match self.storage.set_item(&self.key, &blob).await {
            Ok(()) => debug!(key = %self.key, bytes = blob.len(), "Portfolio saved"),
            Err(StorageError::Unavailable) => {
                debug!("Storage unavailable, portfolio kept in memory only")
            }
            Err(e) => error!(key = %self.key, error = %e, "Error saving portfolio data"),
        }
    }

    pub async fn reset(&self) -> PortfolioDocument {
        let document = default_document();
        self.save(&document).await;
        info!("Portfolio reset to defaults");
        document
    }

    pub fn export(&self, document: &PortfolioDocument) -> Result<ExportedDocument, serde_json::Error> {
        Ok(ExportedDocument {
            file_name: EXPORT_FILE_NAME,
            contents: serde_json::to_string_pretty(document)?,
        })
    }

    /// Parses `text` and persists it as the new document. Nothing is written
    /// when parsing fails.
    pub async fn import(&self, text: &str) -> Result<PortfolioDocument, ImportError> {
        let document = parse_document(text)?;
        self.save(&document).await;
        Ok(document)
    }
}

/// Any parseable JSON is accepted. Only a syntax error fails the import.
pub fn parse_document(text: &str) -> Result<PortfolioDocument, ImportError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ImportError::Syntax(e.to_string()))?;
    Ok(lenient_document(value))
}

/// Decodes a JSON value into a document without rejecting it. Missing or
/// mistyped fields take their empty value and collection items that do not
/// decode are dropped. A non-object value yields the empty document.
pub fn lenient_document(value: Value) -> PortfolioDocument {
    let mut fields = match value {
        Value::Object(map) => map,
        other => {
            warn!(kind = json_kind(&other), "Imported JSON is not an object, using an empty document");
            Map::new()
        }
    };

    PortfolioDocument {
        profile: lenient_field(&mut fields, "profile"),
        about: lenient_field(&mut fields, "about"),
        skills: lenient_items(&mut fields, "skills"),
        experiences: lenient_items(&mut fields, "experiences"),
        projects: lenient_items(&mut fields, "projects"),
        achievements: lenient_items(&mut fields, "achievements"),
        certifications: lenient_items(&mut fields, "certifications"),
        articles: lenient_items(&mut fields, "articles"),
        cv_files: lenient_items(&mut fields, "cvFiles"),
    }
}

fn lenient_field<T: DeserializeOwned + Default>(fields: &mut Map<String, Value>, key: &str) -> T {
    match fields.remove(key) {
        None | Some(Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            warn!(field = key, error = %e, "Imported field has the wrong type, using an empty value");
            T::default()
        }),
    }
}

fn lenient_items<T: DeserializeOwned>(fields: &mut Map<String, Value>, key: &str) -> Vec<T> {
    match fields.remove(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(values)) => values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(field = key, index, error = %e, "Dropped an imported item that does not decode");
                    None
                }
            })
            .collect(),
        Some(other) => {
            warn!(field = key, kind = json_kind(&other), "Imported collection is not a list, using an empty one");
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Shallow merge of `stored` over the default document, plus one-level merges
/// for the profile and about singletons. Non-object input yields the default.
pub fn merge_over_defaults(stored: Value) -> Result<PortfolioDocument, serde_json::Error> {
    let Value::Object(stored) = stored else {
        return Ok(default_document());
    };

    let mut merged = match serde_json::to_value(default_document())? {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    for (key, value) in stored {
        if NESTED_MERGE_KEYS.contains(&key.as_str()) {
            if let (Some(Value::Object(base)), Value::Object(overrides)) =
                (merged.get_mut(&key), &value)
            {
                for (field, field_value) in overrides {
                    base.insert(field.clone(), field_value.clone());
                }
            }
            continue;
        }
        merged.insert(key, value);
    }

    serde_json::from_value(Value::Object(merged))
}
