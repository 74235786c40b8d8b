//! Item listing.

use crate::{
    api::types::{Identity, Item},
    state::AppState,
};

impl AppState {
    /// Items visible to `identity` (the whole list).
    pub(crate) async fn list_items(&self, identity: &Identity) -> Vec<Item> {
        let items = self.store.list_items().await;
        tracing::debug!(subject = %identity.subject, count = items.len(), "items listed");
        items
    }
}
