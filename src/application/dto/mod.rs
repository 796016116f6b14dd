pub mod accounts;
pub mod serde_time;

pub use accounts::AccountDto;
