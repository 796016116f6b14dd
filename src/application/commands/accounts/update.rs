use super::{
    AccountCommandService,
    service::{existing_account_id, map_email_conflict},
    validation::{ValidatedFields, validate_account_fields},
};
use crate::{
    application::{
        dto::AccountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{AccountId, EmailAddress},
};

pub struct UpdateAccountCommand {
    pub account_id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AccountCommandService {
    /// Overwrite name and email and re-hash the supplied password. The hash is
    /// always rotated, so callers keep the current password by re-sending it.
    /// Fields are validated before the id is looked at.
    pub async fn update(&self, command: UpdateAccountCommand) -> ApplicationResult<AccountDto> {
        let ValidatedFields { name, email } =
            validate_account_fields(command.name, command.email, &command.password)?;
        let account_id = existing_account_id(command.account_id)?;

        let account = self
            .account_repo
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("account not found"))?;

        self.ensure_email_not_taken_by_other(&email, account_id)
            .await?;

        let password_hash = self.hash_password(&command.password).await?;
        let draft = account.revise(name, email, password_hash, self.clock.now());
        let updated = self
            .account_repo
            .save(draft)
            .await
            .map_err(map_email_conflict)?;

        tracing::info!(account_id = %updated.id, "account updated");
        Ok(updated.into())
    }

    async fn ensure_email_not_taken_by_other(
        &self,
        email: &EmailAddress,
        account_id: AccountId,
    ) -> ApplicationResult<()> {
        match self.account_repo.find_by_email(email).await? {
            Some(owner) if owner.id != account_id => Err(ApplicationError::DuplicateEmail),
            _ => Ok(()),
        }
    }
}
