use crate::domain::errors::{DomainError, DomainResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 6;

pub(super) fn validate_password(password: &str) -> DomainResult<()> {
    if password.trim().is_empty() {
        return Err(DomainError::Validation("password cannot be blank".into()));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}
