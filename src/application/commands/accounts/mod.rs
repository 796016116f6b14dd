mod delete;
mod login;
mod password;
mod register;
mod service;
mod update;
mod validation;

pub use login::LoginCommand;
pub use register::RegisterAccountCommand;
pub use service::AccountCommandService;
pub(crate) use service::existing_account_id;
pub use update::UpdateAccountCommand;
