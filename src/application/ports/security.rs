// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// One-way credential primitive.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// `Ok(false)` on mismatch; `Err` only when verification itself could not run.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;

    /// Do the work of a failed `verify` when there is no stored hash, so an
    /// unknown email costs as much as a wrong password.
    async fn verify_absent(&self, password: &str) -> ApplicationResult<()>;
}
