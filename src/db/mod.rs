use async_trait::async_trait;
use uuid::Uuid;

use crate::types::{error::AppError, user::Identity};

pub mod memory;
pub mod postgres_service;
pub mod user;

/// Port to the identity record store. Postgres in production
/// (`PostgresService`), in-memory for tests (`MemoryStore`). Email and
/// username must be uniquely indexable; `insert` fails with Conflict when
/// either collides, even if a pre-check raced past.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, AppError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Identity>, AppError>;
    async fn find_by_session_token(&self, token: &str) -> Result<Option<Identity>, AppError>;
    async fn find_by_reset_token(&self, token: &str) -> Result<Option<Identity>, AppError>;
    async fn insert(&self, identity: &Identity) -> Result<(), AppError>;
    async fn update(&self, identity: &Identity) -> Result<(), AppError>;
    async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
}
