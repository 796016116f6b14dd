// src/domain/mod.rs
pub mod account;
pub mod errors;
