use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db::IdentityStore;
use crate::types::{error::AppError, user::Identity};

/// In-memory identity store behind the same port as Postgres. Used by the
/// test suites; enforces the same email/username uniqueness as the real
/// indexes so the Conflict path behaves identically.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Uuid, Identity>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn find_where<F>(&self, pred: F) -> Result<Option<Identity>, AppError>
    where
        F: Fn(&Identity) -> bool,
    {
        Ok(self.records.read().await.values().find(|i| pred(i)).cloned())
    }
}

#[async_trait]
impl IdentityStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, AppError> {
        self.find_where(|i| i.email == email).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, AppError> {
        self.find_where(|i| i.profile.username == username).await
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Identity>, AppError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn find_by_session_token(&self, token: &str) -> Result<Option<Identity>, AppError> {
        self.find_where(|i| i.session_token == token).await
    }

    async fn find_by_reset_token(&self, token: &str) -> Result<Option<Identity>, AppError> {
        self.find_where(|i| i.reset_token.as_deref() == Some(token))
            .await
    }

    async fn insert(&self, identity: &Identity) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        let collides = records.values().any(|i| {
            i.email == identity.email || i.profile.username == identity.profile.username
        });
        if collides {
            return Err(AppError::Conflict(
                "Email or username is already used".to_string(),
            ));
        }
        records.insert(identity.id, identity.clone());
        Ok(())
    }

    async fn update(&self, identity: &Identity) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        if !records.contains_key(&identity.id) {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        records.insert(identity.id, identity.clone());
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        self.records.write().await.remove(id);
        Ok(())
    }
}
