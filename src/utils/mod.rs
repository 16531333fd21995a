//! 공통 유틸리티 모듈
//!
//! 요청 본문(JSON 맵) 필드를 다루는 헬퍼 함수들을 제공합니다.
//!
//! ```rust,ignore
//! use crate::utils::json_utils::{has_field, field_as_str};
//!
//! if has_field(&body, "email") {
//!     let email = field_as_str(&body, "email");
//! }
//! ```

pub mod json_utils;

pub use json_utils::*;
