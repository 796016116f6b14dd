// src/domain/account/entity.rs
use crate::domain::account::value_objects::{AccountId, AccountName, EmailAddress, PasswordHash};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub name: AccountName,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Replace every mutable field, keeping identity and creation time.
    pub fn revise(
        self,
        name: AccountName,
        email: EmailAddress,
        password_hash: PasswordHash,
        updated_at: DateTime<Utc>,
    ) -> AccountDraft {
        AccountDraft {
            id: Some(self.id),
            name,
            email,
            password_hash,
            created_at: self.created_at,
            updated_at,
        }
    }
}

/// Input to `AccountRepository::save`. A draft without an id is inserted and
/// receives a store-assigned id; a draft with an id overwrites that record.
#[derive(Debug, Clone)]
pub struct AccountDraft {
    pub id: Option<AccountId>,
    pub name: AccountName,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AccountDraft {
    pub fn new(
        name: AccountName,
        email: EmailAddress,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            name,
            email,
            password_hash,
            created_at,
            updated_at: created_at,
        }
    }
}
