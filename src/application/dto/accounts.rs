use crate::domain::account::Account;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Outward projection of an account. Deliberately has no password field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccountDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.into(),
            name: account.name.into(),
            email: account.email.into(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{AccountId, AccountName, EmailAddress, PasswordHash};

    #[test]
    fn projection_never_serializes_the_hash() {
        let now = Utc::now();
        let account = Account {
            id: AccountId::new(1).unwrap(),
            name: AccountName::new("Alice").unwrap(),
            email: EmailAddress::new("a@x.com").unwrap(),
            password_hash: PasswordHash::new("$argon2id$stored").unwrap(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(AccountDto::from(account)).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert!(!json.to_string().contains("argon2id"));
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["id"], 1);
    }
}
