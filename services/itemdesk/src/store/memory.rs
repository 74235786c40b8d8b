//! In-process store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Store;
use crate::api::types::{Account, Item, Profile, ProfilePatch};

/// Accounts keyed by login email plus a fixed item list.
#[derive(Debug)]
pub(crate) struct MemoryStore {
    accounts: RwLock<HashMap<String, Account>>,
    items: RwLock<Vec<Item>>,
}

impl MemoryStore {
    pub(crate) fn new(accounts: Vec<Account>, items: Vec<Item>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.email.clone(), account))
            .collect();
        Self {
            accounts: RwLock::new(accounts),
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_account(&self, email: &str) -> Option<Account> {
        self.accounts.read().await.get(email).cloned()
    }

    async fn list_items(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    async fn update_profile(&self, email: &str, patch: &ProfilePatch) -> Option<Profile> {
        // Read/modify/write under one guard.
        let mut guard = self.accounts.write().await;
        let account = guard.get_mut(email)?;
        patch.apply_to(&mut account.profile);
        Some(account.profile.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::MemoryStore;
    use crate::{
        api::types::{Account, Item, Profile, ProfilePatch},
        store::Store,
    };

    fn store() -> MemoryStore {
        MemoryStore::new(
            vec![Account {
                email: "demo@itemdesk.local".to_string(),
                password: "pw".to_string(),
                profile: Profile {
                    name: "demo".to_string(),
                    email: "demo@itemdesk.local".to_string(),
                },
            }],
            vec![Item {
                id: 1,
                name: "Laptop".to_string(),
            }],
        )
    }

    #[tokio::test]
    async fn unknown_account_is_none() {
        let store = store();
        assert!(store.find_account("nobody@itemdesk.local").await.is_none());
        assert!(
            store
                .update_profile("nobody@itemdesk.local", &ProfilePatch::default())
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn profile_email_change_keeps_login_key() {
        let store = store();
        let patch = ProfilePatch {
            name: None,
            email: Some("new@itemdesk.local".to_string()),
        };
        let profile = store
            .update_profile("demo@itemdesk.local", &patch)
            .await
            .unwrap();
        assert_eq!(profile.email, "new@itemdesk.local");

        let account = store.find_account("demo@itemdesk.local").await.unwrap();
        assert_eq!(account.profile.email, "new@itemdesk.local");
        assert!(store.find_account("new@itemdesk.local").await.is_none());
    }

    #[tokio::test]
    async fn concurrent_patches_to_different_fields_are_not_lost() {
        let store = Arc::new(store());
        let mut tasks = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                let patch = if i % 2 == 0 {
                    ProfilePatch {
                        name: Some("renamed".to_string()),
                        email: None,
                    }
                } else {
                    ProfilePatch {
                        name: None,
                        email: Some("moved@itemdesk.local".to_string()),
                    }
                };
                store.update_profile("demo@itemdesk.local", &patch).await
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let account = store.find_account("demo@itemdesk.local").await.unwrap();
        assert_eq!(account.profile.name, "renamed");
        assert_eq!(account.profile.email, "moved@itemdesk.local");
    }

    #[tokio::test]
    async fn items_are_returned_as_seeded() {
        let items = store().list_items().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Laptop");
    }
}
