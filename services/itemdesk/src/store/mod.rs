//! Account, item and profile storage.
//!
//! Handlers only see the [`Store`] trait; the process ships with
//! [`memory::MemoryStore`], which lives and dies with the process.

pub(crate) mod memory;

use async_trait::async_trait;

use crate::api::types::{Account, Item, Profile, ProfilePatch};

#[async_trait]
pub(crate) trait Store: Send + Sync {
    /// Look up an account by its login email.
    async fn find_account(&self, email: &str) -> Option<Account>;

    /// Snapshot of the item list.
    async fn list_items(&self) -> Vec<Item>;

    /// Apply `patch` to the profile owned by `email` and return the result.
    ///
    /// `None` when the account does not exist.
    async fn update_profile(&self, email: &str, patch: &ProfilePatch) -> Option<Profile>;
}
