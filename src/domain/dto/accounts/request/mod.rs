//! 계정 요청 DTO 모듈

pub mod add_account;

pub use add_account::AddAccountModel;
