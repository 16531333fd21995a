//! 계정 응답 DTO 모듈

pub mod account_response;

pub use account_response::AccountResponse;
