use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rand::distributions::Alphanumeric;
use rand::Rng;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::portfolio_context::PortfolioContext;
use super::portfolio_store::PortfolioStore;
use crate::modules::portfolio::application::ports::outgoing::DocumentStorage;
use crate::modules::portfolio::application::shortcut::KeyChord;

pub const DEFAULT_MAX_SESSIONS: usize = 1024;

const VISITOR_ID_LEN: usize = 24;
const VISITOR_ID_MAX_LEN: usize = 64;

/// Opaque browser identity. Only ASCII letters and digits, so it is safe to
/// embed in a storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisitorId(String);

impl VisitorId {
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = !raw.is_empty()
            && raw.len() <= VISITOR_ID_MAX_LEN
            && raw.chars().all(|c| c.is_ascii_alphanumeric());
        valid.then(|| Self(raw.to_string()))
    }

    pub fn generate() -> Self {
        let id = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(VISITOR_ID_LEN)
            .map(char::from)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

struct Session {
    context: Arc<PortfolioContext>,
    last_seen: u64,
}

#[derive(Default)]
struct SessionMap {
    entries: HashMap<VisitorId, Session>,
    tick: u64,
}

impl SessionMap {
    fn touch(&mut self, visitor: &VisitorId) -> Option<Arc<PortfolioContext>> {
        self.tick += 1;
        let tick = self.tick;
        self.entries.get_mut(visitor).map(|session| {
            session.last_seen = tick;
            session.context.clone()
        })
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, session)| session.last_seen)
            .map(|(visitor, _)| visitor.clone());
        if let Some(visitor) = oldest {
            self.entries.remove(&visitor);
            debug!(%visitor, "Evicted idle visitor session");
        }
    }
}

/// One `PortfolioContext` per browser. Each visitor gets their own document
/// under `{base_key}_{visitor}`, their own overlay flags and their own
/// drafts. A visitor whose session was evicted gets their stored document
/// back on the next request; unsaved drafts are lost.
pub struct VisitorSessions {
    storage: Arc<dyn DocumentStorage>,
    base_key: String,
    chord: KeyChord,
    capacity: usize,
    sessions: Mutex<SessionMap>,
}

impl VisitorSessions {
    pub fn new(
        storage: Arc<dyn DocumentStorage>,
        base_key: impl Into<String>,
        chord: KeyChord,
    ) -> Self {
        Self {
            storage,
            base_key: base_key.into(),
            chord,
            capacity: DEFAULT_MAX_SESSIONS,
            sessions: Mutex::new(SessionMap::default()),
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn chord(&self) -> &KeyChord {
        &self.chord
    }

    pub fn storage_key_for(&self, visitor: &VisitorId) -> String {
        format!("{}_{}", self.base_key, visitor)
    }

    /// The visitor's context, loaded from storage on first use.
    pub async fn context_for(&self, visitor: &VisitorId) -> Arc<PortfolioContext> {
        if let Some(context) = self.sessions.lock().await.touch(visitor) {
            return context;
        }

        // Loaded outside the lock so one slow read does not stall other visitors.
        let store = PortfolioStore::new(self.storage.clone(), self.storage_key_for(visitor));
        let context = Arc::new(PortfolioContext::new(store, self.chord.clone()));
        context.initialize().await;

        let mut sessions = self.sessions.lock().await;
        if let Some(existing) = sessions.touch(visitor) {
            return existing;
        }
        if sessions.entries.len() >= self.capacity {
            sessions.evict_oldest();
        }
        let last_seen = sessions.tick;
        sessions.entries.insert(
            visitor.clone(),
            Session {
                context: context.clone(),
                last_seen,
            },
        );
        info!(%visitor, sessions = sessions.entries.len(), "Visitor session started");
        context
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.lock().await.entries.len()
    }

    /// True when the backend answers a read.
    pub async fn storage_ready(&self) -> bool {
        PortfolioStore::new(self.storage.clone(), self.base_key.clone())
            .is_available()
            .await
    }
}
