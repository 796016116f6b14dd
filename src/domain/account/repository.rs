// src/domain/account/repository.rs
use crate::domain::account::{
    entity::{Account, AccountDraft},
    value_objects::{AccountId, EmailAddress},
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Persistence port for accounts.
///
/// Implementations must enforce email uniqueness atomically and report a
/// clash from `save` as `DomainError::Conflict`.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn exists_by_email(&self, email: &EmailAddress) -> DomainResult<bool>;

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Account>>;

    async fn exists_by_id(&self, id: AccountId) -> DomainResult<bool>;

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>>;

    /// All accounts ordered by id.
    async fn find_all(&self) -> DomainResult<Vec<Account>>;

    async fn save(&self, draft: AccountDraft) -> DomainResult<Account>;

    /// Returns `DomainError::NotFound` when nothing was deleted.
    async fn delete_by_id(&self, id: AccountId) -> DomainResult<()>;
}
