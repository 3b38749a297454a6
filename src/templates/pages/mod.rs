pub mod board;
pub mod home;
pub mod login;
pub mod pricing;

pub use board::{board_page, BoardVm};
pub use home::home_page;
pub use login::login_page;
pub use pricing::pricing_page;
