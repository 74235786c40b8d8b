//! Shared state: the store handle and the token service.

use std::sync::Arc;

use crate::{
    auth::token::TokenService,
    config::AppConfig,
    store::{Store, memory::MemoryStore},
};

/// State shared by every request.
#[derive(Clone)]
pub(crate) struct AppState {
    /// Accounts, items and profiles.
    pub(crate) store: Arc<dyn Store>,
    /// Token signer/verifier.
    pub(crate) tokens: Arc<TokenService>,
}

impl AppState {
    pub(crate) fn new(store: Arc<dyn Store>, tokens: TokenService) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
        }
    }

    /// In-memory state seeded from `config`.
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        let store = MemoryStore::new(config.seed_accounts(), config.seed_items());
        Self::new(
            Arc::new(store),
            TokenService::new(config.jwt_secret.as_bytes(), config.token_ttl_sec),
        )
    }
}
