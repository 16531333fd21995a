//! 계정 관련 DTO
//!
//! - [`request`] - 유스케이스 입력 (`AddAccountModel`)
//! - [`response`] - HTTP 응답 본문 (`AccountResponse`)

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
