use super::{AccountCommandService, service::existing_account_id};
use crate::application::error::{ApplicationError, ApplicationResult};

impl AccountCommandService {
    pub async fn delete(&self, account_id: i64) -> ApplicationResult<()> {
        let account_id = existing_account_id(account_id)?;

        if !self.account_repo.exists_by_id(account_id).await? {
            return Err(ApplicationError::not_found("account not found"));
        }

        self.account_repo.delete_by_id(account_id).await?;
        tracing::info!(%account_id, "account deleted");
        Ok(())
    }
}
