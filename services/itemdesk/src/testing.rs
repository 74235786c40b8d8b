//! Shared fixtures for unit tests.

use crate::{
    auth::token::TokenService,
    config::{AppConfig, SeedAccount},
    state::AppState,
};

pub(crate) const SEED_EMAIL: &str = "tester@itemdesk.local";
pub(crate) const SEED_PASSWORD: &str = "tester-password";
pub(crate) const SEED_NAME: &str = "tester";
pub(crate) const TEST_SECRET: &str = "test-secret";

pub(crate) fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: TEST_SECRET.to_string(),
        token_ttl_sec: 900,
        seed_account: SeedAccount {
            email: SEED_EMAIL.to_string(),
            password: SEED_PASSWORD.to_string(),
            name: SEED_NAME.to_string(),
        },
    }
}

/// Fresh in-memory state seeded with one account and the default items.
pub(crate) fn test_state() -> AppState {
    AppState::from_config(&test_config())
}

/// Token service sharing the test secret, for crafting tokens out of band.
pub(crate) fn test_tokens() -> TokenService {
    TokenService::new(TEST_SECRET, 900)
}
