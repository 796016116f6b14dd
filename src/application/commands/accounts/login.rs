use super::AccountCommandService;
use crate::{
    application::{
        dto::AccountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{Account, EmailAddress},
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl AccountCommandService {
    /// Check credentials. Every failure cause maps to the same
    /// `InvalidCredentials` error.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<AccountDto> {
        match self
            .find_and_authenticate(command.email, &command.password)
            .await?
        {
            Some(account) => Ok(account.into()),
            None => {
                tracing::debug!("login rejected");
                Err(ApplicationError::InvalidCredentials)
            }
        }
    }

    async fn find_and_authenticate(
        &self,
        email: String,
        password: &str,
    ) -> ApplicationResult<Option<Account>> {
        let account = match EmailAddress::new(email) {
            Ok(email) => self.account_repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(account) = account else {
            self.password_hasher.verify_absent(password).await?;
            return Ok(None);
        };

        let verified = self
            .password_hasher
            .verify(password, account.password_hash.as_str())
            .await?;

        Ok(verified.then_some(account))
    }
}
