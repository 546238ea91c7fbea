pub mod portfolio_context;
pub mod portfolio_store;
pub mod visitor_sessions;

pub use portfolio_context::{AdminState, DraftView, PortfolioContext};
pub use portfolio_store::{ExportedDocument, ImportError, PortfolioStore};
pub use visitor_sessions::{VisitorId, VisitorSessions};
