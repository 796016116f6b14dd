use super::AccountQueryService;
use crate::application::{ApplicationResult, dto::AccountDto};

impl AccountQueryService {
    /// Every account, unpaginated, in store order.
    pub async fn list_accounts(&self) -> ApplicationResult<Vec<AccountDto>> {
        let accounts = self.account_repo.find_all().await?;
        Ok(accounts.into_iter().map(Into::into).collect())
    }
}
