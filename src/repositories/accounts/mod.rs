//! 계정 저장소 모듈

pub mod account_repo;

pub use account_repo::{AddAccountRepository, InMemoryAccountRepository};
