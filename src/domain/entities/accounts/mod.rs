//! 계정 관련 엔티티 모듈

pub mod account;

pub use account::Account;
