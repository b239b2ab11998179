use std::sync::Arc;

use crate::bets::{self, Bet};
use crate::component::Components;
use crate::config::Config;

/// Application state shared across request handlers. Everything here is
/// immutable after startup, so handlers can run concurrently without locks;
/// template files are re-read per render by `Components` itself.
pub struct AppState {
    pub config: Config,
    pub components: Components,
    pub bets: Vec<Bet>,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let components = Components::new(&config.components_dir);
        Arc::new(Self {
            components,
            bets: bets::available_bets(),
            config,
        })
    }

    pub fn bet(&self, id: &str) -> Option<&Bet> {
        self.bets.iter().find(|b| b.bet_id == id)
    }
}
