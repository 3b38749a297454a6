pub mod error;
pub mod login_form;
pub mod sidebar;
pub mod stat_card;

pub use error::error_page;
pub use login_form::login_form;
pub use sidebar::{hook_tooltip, sidebar};
pub use stat_card::{bullet_list, figure, stat_card};
