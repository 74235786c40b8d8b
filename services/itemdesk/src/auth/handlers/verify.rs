//! Bearer token verification against the token service and the store.

use crate::{
    api::{error::ApiError, types::Identity},
    state::AppState,
};

impl AppState {
    /// Verify `token` and make sure its subject still has an account.
    pub(crate) async fn authenticate(&self, token: &str, now: u64) -> Result<Identity, ApiError> {
        let identity = self.tokens.verify(token, now)?;
        if self.store.find_account(&identity.subject).await.is_none() {
            return Err(ApiError::user_not_found());
        }
        Ok(identity)
    }
}
