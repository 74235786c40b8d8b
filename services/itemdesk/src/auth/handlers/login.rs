//! Credential check and token issuance.

use tracing::{info, warn};

use crate::{
    api::{
        error::ApiError,
        types::{LoginData, LoginRequest},
    },
    state::AppState,
};

impl AppState {
    /// Exchange an email/password pair for an access token.
    pub(crate) async fn login(&self, req: &LoginRequest, now: u64) -> Result<LoginData, ApiError> {
        let email = req.email.as_deref().map(str::trim).unwrap_or_default();
        let password = req.password.as_deref().unwrap_or_default();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::validation("missing email or password"));
        }

        let Some(account) = self.store.find_account(email).await else {
            warn!("login rejected: unknown account");
            return Err(ApiError::invalid_credentials());
        };
        if account.password != password {
            warn!(email = %account.email, "login rejected: wrong password");
            return Err(ApiError::invalid_credentials());
        }

        let token = self.tokens.issue(&account.email, now)?;
        info!(
            email = %account.email,
            ttl_sec = self.tokens.ttl_sec(),
            "access token issued"
        );
        Ok(LoginData { token })
    }
}
