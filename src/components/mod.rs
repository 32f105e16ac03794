//! UI Components
//!
//! Reusable Leptos components.

mod toast;
mod entity_list;
mod name_modal;
mod upload_panel;
mod user_header;

pub use toast::ToastHost;
pub use entity_list::EntityList;
pub use name_modal::{ModalState, NameModal};
pub use upload_panel::UploadPanel;
pub use user_header::UserHeader;
