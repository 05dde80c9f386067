use crate::session;
use shared::models::Session;
use yewdux::{Context, Store};

/// Global application state shared through yewdux.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppState {
    pub session: Option<Session>,
}

impl AppState {
    /// Record a successful login, in memory and in storage.
    pub fn log_in(&mut self, session: Session) {
        session::save(&session);
        self.session = Some(session);
    }

    /// Drop the session, in memory and in storage.
    pub fn log_out(&mut self) {
        session::clear();
        self.session = None;
    }
}

impl Store for AppState {
    fn new(_cx: &Context) -> Self {
        Self {
            session: session::restore(),
        }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}
