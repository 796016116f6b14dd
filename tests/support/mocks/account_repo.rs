// tests/support/mocks/account_repo.rs
use account_service::domain::account::{
    Account, AccountDraft, AccountId, AccountRepository, EmailAddress,
};
use account_service::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
struct State {
    next_id: i64,
    accounts: BTreeMap<i64, Account>,
    mutations: usize,
}

/// In-memory store mirroring the Postgres adapter: ids come from a sequence
/// that never goes backwards and `save` enforces email uniqueness atomically.
#[derive(Default)]
pub struct InMemoryAccountRepo {
    state: Mutex<State>,
    stale_email_index: bool,
}

impl InMemoryAccountRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// `exists_by_email` always answers `false`, simulating a concurrent
    /// registration slipping past the pre-check.
    pub fn with_stale_email_index() -> Self {
        Self {
            stale_email_index: true,
            ..Self::default()
        }
    }

    /// Number of successful `save`/`delete_by_id` calls.
    pub fn mutations(&self) -> usize {
        self.state.lock().unwrap().mutations
    }

    pub fn stored(&self, id: i64) -> Option<Account> {
        self.state.lock().unwrap().accounts.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().accounts.len()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepo {
    async fn exists_by_email(&self, email: &EmailAddress) -> DomainResult<bool> {
        if self.stale_email_index {
            return Ok(false);
        }
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Account>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .accounts
            .values()
            .find(|account| &account.email == email)
            .cloned())
    }

    async fn exists_by_id(&self, id: AccountId) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.accounts.contains_key(&i64::from(id)))
    }

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        let state = self.state.lock().unwrap();
        Ok(state.accounts.get(&i64::from(id)).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Account>> {
        let state = self.state.lock().unwrap();
        Ok(state.accounts.values().cloned().collect())
    }

    async fn save(&self, draft: AccountDraft) -> DomainResult<Account> {
        let mut state = self.state.lock().unwrap();

        let target = draft.id.map(i64::from);
        let clash = state
            .accounts
            .values()
            .any(|account| account.email == draft.email && Some(i64::from(account.id)) != target);
        if clash {
            return Err(DomainError::Conflict("email already registered".into()));
        }

        let id = match target {
            Some(id) if state.accounts.contains_key(&id) => id,
            Some(_) => return Err(DomainError::NotFound("account not found".into())),
            None => {
                state.next_id += 1;
                state.next_id
            }
        };

        let account = Account {
            id: AccountId::new(id)?,
            name: draft.name,
            email: draft.email,
            password_hash: draft.password_hash,
            created_at: draft.created_at,
            updated_at: draft.updated_at,
        };
        state.accounts.insert(id, account.clone());
        state.mutations += 1;
        Ok(account)
    }

    async fn delete_by_id(&self, id: AccountId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.accounts.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("account not found".into()));
        }
        state.mutations += 1;
        Ok(())
    }
}
