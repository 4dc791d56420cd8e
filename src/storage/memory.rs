//! In-memory storage backend

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::types::{NewUser, User, UserId};
use crate::{Error, Result};

use super::UserStore;

#[derive(Default)]
struct Table {
    rows: BTreeMap<UserId, User>,
    last_id: UserId,
}

/// Process-local user table. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct MemoryStore {
    table: RwLock<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn insert(&self, user: &NewUser) -> Result<UserId> {
        let mut table = self.table.write().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| Error::internal("user id sequence exhausted"))?;
        table.last_id = id;
        table.rows.insert(id, user.clone().with_id(id));
        Ok(id)
    }

    async fn get(&self, id: UserId) -> Result<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update(&self, id: UserId, user: &NewUser) -> Result<u64> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                row.name = user.name.clone();
                row.email = user.email.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.list().await.unwrap().is_empty());

        let alice = store.insert(&NewUser::new("Alice", "a@x.com")).await.unwrap();
        let bob = store.insert(&NewUser::new("Bob", "b@x.com")).await.unwrap();
        assert_eq!((alice, bob), (1, 2));

        let users = store.list().await.unwrap();
        assert_eq!(
            users,
            vec![User::new(1, "Alice", "a@x.com"), User::new(2, "Bob", "b@x.com")]
        );

        assert_eq!(
            store.update(bob, &NewUser::new("Robert", "r@x.com")).await.unwrap(),
            1
        );
        assert_eq!(
            store.get(bob).await.unwrap(),
            Some(User::new(2, "Robert", "r@x.com"))
        );
    }

    #[tokio::test]
    async fn test_missing_rows() {
        let store = MemoryStore::new();
        assert_eq!(store.get(7).await.unwrap(), None);
        assert_eq!(store.update(7, &NewUser::default()).await.unwrap(), 0);
        assert!(store.list().await.unwrap().is_empty());
    }
}
