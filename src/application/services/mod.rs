// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::accounts::AccountCommandService,
        ports::{security::PasswordHasher, time::Clock},
        queries::accounts::AccountQueryService,
    },
    domain::account::AccountRepository,
};

pub struct ApplicationServices {
    pub account_commands: Arc<AccountCommandService>,
    pub account_queries: Arc<AccountQueryService>,
}

impl ApplicationServices {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let account_commands = Arc::new(AccountCommandService::new(
            Arc::clone(&account_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&clock),
        ));
        let account_queries = Arc::new(AccountQueryService::new(Arc::clone(&account_repo)));

        Self {
            account_commands,
            account_queries,
        }
    }
}
