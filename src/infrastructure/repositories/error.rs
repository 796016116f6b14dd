use crate::domain::errors::DomainError;

const CNT_ACCOUNT_EMAIL: &str = "accounts_email_key";

const SQLSTATE_UNIQUE_VIOLATION: &str = "23505";
const SQLSTATE_NOT_NULL_VIOLATION: &str = "23502";
const SQLSTATE_CHECK_VIOLATION: &str = "23514";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return map_constraint(constraint);
            }

            db_err
                .code()
                .and_then(|code| map_sqlstate(code.as_ref()))
                .unwrap_or_else(|| DomainError::Persistence(db_err.message().to_string()))
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> DomainError {
    match constraint {
        CNT_ACCOUNT_EMAIL => DomainError::Conflict("email already registered".into()),
        other => DomainError::Persistence(format!("database constraint violation: {other}")),
    }
}

fn map_sqlstate(code: &str) -> Option<DomainError> {
    match code {
        SQLSTATE_UNIQUE_VIOLATION => Some(DomainError::Conflict("unique constraint violated".into())),
        // inputs are validated before they reach the store, so these are server faults
        SQLSTATE_NOT_NULL_VIOLATION | SQLSTATE_CHECK_VIOLATION => Some(DomainError::Persistence(
            format!("integrity constraint violated (sqlstate {code})"),
        )),
        _ => None,
    }
}
