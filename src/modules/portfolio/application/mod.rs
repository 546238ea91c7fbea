pub mod editor;
pub mod ports;
pub mod services;
pub mod shortcut;
pub mod viewport;
