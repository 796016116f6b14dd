use super::password::validate_password;
use crate::{
    application::error::{ApplicationError, ApplicationResult, FieldViolations},
    domain::account::{AccountName, EmailAddress},
};

/// Field values that passed validation. The plaintext password is checked but
/// not carried here; callers hash it straight from the request.
#[derive(Debug)]
pub(super) struct ValidatedFields {
    pub name: AccountName,
    pub email: EmailAddress,
}

/// Validate every field and report all violations together.
pub(super) fn validate_account_fields(
    name: String,
    email: String,
    password: &str,
) -> ApplicationResult<ValidatedFields> {
    let mut violations = FieldViolations::new();

    let name = violations.check("name", AccountName::new(name));
    let email = violations.check("email", EmailAddress::new(email));
    violations.check("password", validate_password(password));

    match (name, email) {
        (Some(name), Some(email)) if violations.is_empty() => Ok(ValidatedFields { name, email }),
        _ => Err(ApplicationError::validation(violations)),
    }
}
