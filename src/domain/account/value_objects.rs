// src/domain/account/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;
const MAX_DOMAIN_LABEL_LENGTH: usize = 63;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(pub i64);

impl AccountId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("account id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AccountId> for i64 {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name of an account. Stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountName(String);

impl AccountName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("name cannot be blank".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<AccountName> for String {
    fn from(value: AccountName) -> Self {
        value.0
    }
}

/// Syntactically valid email address, normalised to lower case so that the
/// uniqueness constraint is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("email cannot be blank".into()));
        }
        if !is_valid_email(trimmed) {
            return Err(DomainError::Validation(
                "email must be a valid address".into(),
            ));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LENGTH || value.chars().any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    is_valid_local_part(local) && !domain.contains('@') && domain.split('.').all(is_valid_label)
}

fn is_valid_local_part(local: &str) -> bool {
    const FORBIDDEN: &[char] = &['"', '(', ')', ',', ':', ';', '<', '>', '[', ']', '\\'];

    !local.is_empty()
        && local.len() <= MAX_LOCAL_PART_LENGTH
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && !local.contains(FORBIDDEN)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_DOMAIN_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Opaque one-way password hash. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "password hash cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_message(err: DomainError) -> String {
        match err {
            DomainError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn account_id_rejects_non_positive_values() {
        assert!(AccountId::new(0).is_err());
        assert!(AccountId::new(-7).is_err());
        assert_eq!(i64::from(AccountId::new(42).unwrap()), 42);
    }

    #[test]
    fn account_name_is_trimmed_and_must_not_be_blank() {
        assert_eq!(AccountName::new("  Alice ").unwrap().as_str(), "Alice");
        let err = AccountName::new(" \t ").unwrap_err();
        assert_eq!(validation_message(err), "name cannot be blank");
    }

    #[test]
    fn email_is_normalised_to_lower_case() {
        let email = EmailAddress::new("  Alice@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn blank_email_reports_blank_not_syntax() {
        let err = EmailAddress::new("   ").unwrap_err();
        assert_eq!(validation_message(err), "email cannot be blank");
    }

    #[test]
    fn accepts_common_addresses() {
        for candidate in [
            "a@x.com",
            "first.last+tag@sub.example.org",
            "user_name@localhost",
            "x-y@my-host.io",
        ] {
            assert!(EmailAddress::new(candidate).is_ok(), "{candidate} rejected");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for candidate in [
            "plainaddress",
            "@example.com",
            "user@",
            "user@@example.com",
            "a@b@c.com",
            "user@exa mple.com",
            ".user@example.com",
            "user.@example.com",
            "us..er@example.com",
            "user@example..com",
            "user@-example.com",
            "user@example.com-",
            "user@exa_mple.com",
            "us(er@example.com",
        ] {
            let err = EmailAddress::new(candidate).unwrap_err();
            assert_eq!(
                validation_message(err),
                "email must be a valid address",
                "{candidate} accepted"
            );
        }
    }

    #[test]
    fn rejects_overlong_local_part() {
        let local = "a".repeat(MAX_LOCAL_PART_LENGTH + 1);
        assert!(EmailAddress::new(format!("{local}@example.com")).is_err());
    }

    #[test]
    fn password_hash_debug_is_redacted() {
        let hash = PasswordHash::new("$argon2id$v=19$secret").unwrap();
        let printed = format!("{hash:?}");
        assert!(!printed.contains("secret"));
        assert!(PasswordHash::new("").is_err());
    }
}
