use super::AccountQueryService;
use crate::application::{
    commands::accounts::existing_account_id,
    dto::AccountDto,
    error::{ApplicationError, ApplicationResult},
};

impl AccountQueryService {
    pub async fn get_account(&self, account_id: i64) -> ApplicationResult<AccountDto> {
        let account_id = existing_account_id(account_id)?;
        let account = self
            .account_repo
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("account not found"))?;

        Ok(account.into())
    }
}
