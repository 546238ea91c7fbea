pub mod admin_state;
pub mod drafts;
pub mod portfolio;
pub mod transfer;

pub use admin_state::{
    admin_keypress_handler, get_admin_state_handler, set_admin_section_handler,
    toggle_admin_handler, KeyPressResponse, SetSectionRequest,
};
pub use drafts::{
    activate_cv_handler, add_draft_item_handler, get_draft_handler, push_draft_list_item_handler,
    remove_draft_item_handler, remove_draft_list_item_handler, save_draft_handler,
    update_draft_item_handler, update_singleton_draft_handler, AddedItemResponse,
    PushListItemRequest, PushListItemResponse,
};
pub use portfolio::{get_portfolio_handler, update_portfolio_handler};
pub use transfer::{export_portfolio_handler, import_portfolio_handler, reset_portfolio_handler};
