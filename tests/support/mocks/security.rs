// tests/support/mocks/security.rs
use account_service::application::{
    ApplicationResult, error::ApplicationError, ports::security::PasswordHasher,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Cheap stand-in for Argon2: every hash carries a fresh salt, so hashing the
/// same password twice yields different strings that both verify.
#[derive(Debug, Default)]
pub struct StrictPasswordHasher {
    salt: AtomicU64,
    verifications: AtomicUsize,
}

impl StrictPasswordHasher {
    /// Calls to `verify` plus `verify_absent`.
    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let salt = self.salt.fetch_add(1, Ordering::SeqCst);
        Ok(format!("hash::{salt}::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        let plain = expected_hash
            .strip_prefix("hash::")
            .and_then(|rest| rest.split_once("::"))
            .map(|(_, plain)| plain)
            .ok_or_else(|| ApplicationError::infrastructure("malformed hash"))?;
        Ok(plain == password)
    }

    async fn verify_absent(&self, _password: &str) -> ApplicationResult<()> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Hasher whose backend is unavailable.
#[derive(Debug, Default)]
pub struct FailingPasswordHasher;

#[async_trait]
impl PasswordHasher for FailingPasswordHasher {
    async fn hash(&self, _password: &str) -> ApplicationResult<String> {
        Err(ApplicationError::infrastructure("hasher unavailable"))
    }

    async fn verify(&self, _password: &str, _expected_hash: &str) -> ApplicationResult<bool> {
        Err(ApplicationError::infrastructure("hasher unavailable"))
    }

    async fn verify_absent(&self, _password: &str) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("hasher unavailable"))
    }
}
