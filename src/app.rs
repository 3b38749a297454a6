// src/app.rs
use crate::config::Config;
use crate::map::TileProvider;
use crate::session::SessionStore;

/// Everything a request handler needs, shared across workers.
pub struct App {
    pub config: Config,
    pub sessions: SessionStore,
    pub tiles: TileProvider,
}

impl App {
    pub fn new(config: Config) -> Self {
        let sessions = SessionStore::new(config.session_idle_ttl, config.hook_tick);
        let tiles = TileProvider::from_key(config.maptiler_key.clone());
        Self {
            config,
            sessions,
            tiles,
        }
    }
}
