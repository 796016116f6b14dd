use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{ClockPort, PasswordHasherPort},
};
use crate::domain::{
    account::{AccountId, AccountRepository, PasswordHash},
    errors::DomainError,
};

pub struct AccountCommandService {
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) password_hasher: Arc<PasswordHasherPort>,
    pub(super) clock: Arc<ClockPort>,
}

impl AccountCommandService {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            account_repo,
            password_hasher,
            clock,
        }
    }

    pub(super) async fn hash_password(&self, password: &str) -> ApplicationResult<PasswordHash> {
        let hashed = self.password_hasher.hash(password).await?;
        Ok(PasswordHash::new(hashed)?)
    }
}

/// A non-positive id cannot name a stored account.
pub(crate) fn existing_account_id(raw: i64) -> ApplicationResult<AccountId> {
    AccountId::new(raw).map_err(|_| ApplicationError::not_found("account not found"))
}

/// The store reports a unique-email clash as a conflict.
pub(super) fn map_email_conflict(err: DomainError) -> ApplicationError {
    match err {
        DomainError::Conflict(_) => ApplicationError::DuplicateEmail,
        other => ApplicationError::from(other),
    }
}
