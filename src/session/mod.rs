pub mod state;
pub mod store;
pub mod token;

pub use state::{Action, ActionError, LoginForm, SessionState};
pub use store::{SessionHandle, SessionStore};
