// src/presentation/http/state.rs
use crate::application::{
    commands::accounts::AccountCommandService, queries::accounts::AccountQueryService,
    services::ApplicationServices,
};
use std::sync::Arc;

/// Shared handler state, injected through an `Extension` layer.
#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
}

impl HttpState {
    pub fn account_commands(&self) -> &AccountCommandService {
        &self.services.account_commands
    }

    pub fn account_queries(&self) -> &AccountQueryService {
        &self.services.account_queries
    }
}
