use super::{
    AccountCommandService,
    service::map_email_conflict,
    validation::{ValidatedFields, validate_account_fields},
};
use crate::{
    application::{
        dto::AccountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{AccountDraft, EmailAddress},
};

pub struct RegisterAccountCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AccountCommandService {
    pub async fn register(&self, command: RegisterAccountCommand) -> ApplicationResult<AccountDto> {
        let ValidatedFields { name, email } =
            validate_account_fields(command.name, command.email, &command.password)?;

        self.ensure_email_available(&email).await?;

        let password_hash = self.hash_password(&command.password).await?;
        let draft = AccountDraft::new(name, email, password_hash, self.clock.now());
        let account = self
            .account_repo
            .save(draft)
            .await
            .map_err(map_email_conflict)?;

        tracing::info!(account_id = %account.id, "account registered");
        Ok(account.into())
    }

    async fn ensure_email_available(&self, email: &EmailAddress) -> ApplicationResult<()> {
        if self.account_repo.exists_by_email(email).await? {
            return Err(ApplicationError::DuplicateEmail);
        }
        Ok(())
    }
}
