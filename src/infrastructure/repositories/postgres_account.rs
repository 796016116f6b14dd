// src/infrastructure/repositories/postgres_account.rs
use super::map_sqlx;
use crate::domain::account::{
    Account, AccountDraft, AccountId, AccountName, AccountRepository, EmailAddress, PasswordHash,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const ACCOUNT_COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, draft: AccountDraft) -> DomainResult<Account> {
        let AccountDraft {
            name,
            email,
            password_hash,
            created_at,
            updated_at,
            ..
        } = draft;

        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "INSERT INTO accounts (name, email, password_hash, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Account::try_from(row)
    }

    async fn overwrite(&self, id: AccountId, draft: AccountDraft) -> DomainResult<Account> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "UPDATE accounts
             SET name = $2, email = $3, password_hash = $4, updated_at = $5
             WHERE id = $1
             RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(draft.name.as_str())
        .bind(draft.email.as_str())
        .bind(draft.password_hash.as_str())
        .bind(draft.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("account not found".into()))?;

        Account::try_from(row)
    }
}

#[derive(Debug, FromRow)]
struct AccountRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = DomainError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = |err: DomainError| {
            DomainError::Persistence(format!("corrupt account row {id}: {err}"))
        };

        Ok(Account {
            id: AccountId::new(row.id).map_err(corrupt)?,
            name: AccountName::new(row.name).map_err(corrupt)?,
            email: EmailAddress::new(row.email).map_err(corrupt)?,
            password_hash: PasswordHash::new(row.password_hash).map_err(corrupt)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn exists_by_email(&self, email: &EmailAddress) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)")
            .bind(email.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Account::try_from).transpose()
    }

    async fn exists_by_id(&self, id: AccountId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM accounts WHERE id = $1)")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Account::try_from).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Account::try_from).collect()
    }

    async fn save(&self, draft: AccountDraft) -> DomainResult<Account> {
        match draft.id {
            Some(id) => self.overwrite(id, draft).await,
            None => self.insert(draft).await,
        }
    }

    async fn delete_by_id(&self, id: AccountId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("account not found".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;
    use crate::presentation::http::error::HttpError;
    use axum::http::StatusCode;

    fn row(email: &str) -> AccountRow {
        let now = Utc::now();
        AccountRow {
            id: 7,
            name: "Legacy".into(),
            email: email.into(),
            password_hash: "$argon2id$stored".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn valid_row_converts() {
        let account = Account::try_from(row("legacy@corp.example")).unwrap();
        assert_eq!(i64::from(account.id), 7);
        assert_eq!(account.email.as_str(), "legacy@corp.example");
    }

    #[test]
    fn unreadable_row_is_a_server_error() {
        let err = Account::try_from(row("legacy user@corp")).unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));

        let http = HttpError::from_error(ApplicationError::from(err));
        assert_eq!(http.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
