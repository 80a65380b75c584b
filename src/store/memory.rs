//! In-process `UserStore` used by tests and by `DATABASE_URL=memory`.

use super::UserStore;
use crate::error::AppError;
use crate::model::{User, UserInput};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Ids start at 1 and are never handed out twice, matching a `SERIAL` column.
#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    users: BTreeMap<i32, User>,
    last_id: i32,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, AppError> {
        self.inner.read().map_err(|_| AppError::Store("lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, AppError> {
        self.inner.write().map_err(|_| AppError::Store("lock poisoned".into()))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.read()?.users.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    async fn create(&self, input: UserInput) -> Result<User, AppError> {
        let mut inner = self.write()?;
        inner.last_id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Store("id sequence exhausted".into()))?;
        let user = User::from_input(inner.last_id, input);
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, input: UserInput) -> Result<Option<User>, AppError> {
        let mut inner = self.write()?;
        let updated = inner.users.get_mut(&id).map(|user| {
            user.name = input.name;
            user.email = input.email;
            user.clone()
        });
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.write()?.users.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str) -> UserInput {
        UserInput {
            name: name.into(),
            email: email.into(),
        }
    }

    #[tokio::test]
    async fn ids_are_positive_and_never_reused() {
        let store = MemoryUserStore::new();
        let a = store.create(input("A", "a@x.com")).await.unwrap();
        let b = store.create(input("B", "b@x.com")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        assert!(store.delete(b.id).await.unwrap());
        let c = store.create(input("C", "c@x.com")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let store = MemoryUserStore::new();
        assert_eq!(store.update(9, input("X", "")).await.unwrap(), None);
        assert!(!store.delete(9).await.unwrap());

        let u = store.create(input("A", "a@x.com")).await.unwrap();
        let updated = store.update(u.id, input("B", "")).await.unwrap().unwrap();
        assert_eq!(updated, User { id: u.id, name: "B".into(), email: "".into() });
        assert_eq!(store.list().await.unwrap(), vec![updated]);
    }
}
