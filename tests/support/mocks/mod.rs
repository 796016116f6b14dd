// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod account_repo;
pub mod security;
pub mod time;

pub use account_repo::InMemoryAccountRepo;
pub use security::{FailingPasswordHasher, StrictPasswordHasher};
pub use time::{FixedClock, fixed_now};
