// src/session/state.rs

use crate::animation::HookPlayer;
use crate::domain::board::{BoardError, BoardState};
use crate::domain::filters::FilterCriteria;
use crate::domain::property::PropertyId;
use crate::map::viewport::{Viewport, LOGIN_ZOOM};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("Enter your email and password to continue.")]
    MissingCredentials,
}

/// Submitted mock-login form. Nothing is verified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), LoginError> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Err(LoginError::MissingCredentials);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error(transparent)]
    Login(#[from] LoginError),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Every way a visitor can change their session.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Login(LoginForm),
    ForceAuthenticate,
    SignOut,
    ApplyFilters(FilterCriteria),
    ResetFilters,
    Select(PropertyId),
    MoveMap(Viewport),
    ZoomIn,
    ZoomOut,
    ShowHook,
    HideHook,
}

/// One visitor's UI state. Changed only through [`SessionState::dispatch`].
#[derive(Debug)]
pub struct SessionState {
    authenticated: bool,
    pub board: BoardState,
    pub hook: HookPlayer,
}

impl SessionState {
    pub fn new(hook_tick: Duration) -> Self {
        Self {
            authenticated: false,
            board: BoardState::default(),
            hook: HookPlayer::new(hook_tick),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Applies `action`. On error the state is left untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::Login(form) => {
                form.validate()?;
                self.authenticated = true;

                // Land on the first listing regardless of the active filters.
                if let Some(first) = self.board.catalog().first() {
                    self.board.focus(first, LOGIN_ZOOM);
                }
                tracing::info!(email = %form.email.trim(), "mock login accepted");
            }
            Action::ForceAuthenticate => self.authenticated = true,
            Action::SignOut => self.authenticated = false,
            Action::ApplyFilters(filters) => self.board.set_filters(filters),
            Action::ResetFilters => self.board.reset_filters(),
            Action::Select(id) => self.board.select(id)?,
            Action::MoveMap(viewport) => self.board.move_viewport(viewport),
            Action::ZoomIn => {
                let next = self.board.viewport.zoomed_by(1);
                self.board.move_viewport(next);
            }
            Action::ZoomOut => {
                let next = self.board.viewport.zoomed_by(-1);
                self.board.move_viewport(next);
            }
            Action::ShowHook => self.hook.start(),
            Action::HideHook => self.hook.stop(),
        }
        Ok(())
    }
}
