//! Server-rendered HTML for the public site. Every function here is pure:
//! document in, markup out.

mod escape;
mod layout;
mod project_detail;
mod sections;

pub use layout::render_page;
pub use project_detail::{render_not_found, render_project_detail};
pub use sections::render_home;
