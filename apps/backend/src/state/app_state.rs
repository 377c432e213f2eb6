use std::sync::Arc;

use crate::config::{EngineConfig, ServerConfig};
use crate::services::game_flow::GameFlowService;
use crate::services::registry::GameRegistry;

/// Shared resources handed to every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub game_flow: Arc<GameFlowService>,
    pub server: ServerConfig,
}

impl AppState {
    pub fn new(server: ServerConfig, engine: EngineConfig) -> Self {
        let registry = Arc::new(GameRegistry::new());
        Self {
            game_flow: Arc::new(GameFlowService::new(registry, engine)),
            server,
        }
    }

    /// Default configuration with a fixed deal seed, for deterministic tests.
    pub fn for_tests(deal_seed: u64) -> Self {
        Self::new(
            ServerConfig::default(),
            EngineConfig {
                deal_seed: Some(deal_seed),
                ..EngineConfig::default()
            },
        )
    }
}
