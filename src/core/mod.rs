//! # Core Module
//!
//! 애플리케이션 전역에서 사용하는 기반 구성 요소들입니다.
//!
//! - [`errors`] - 에러 분류 체계 (`ValidationError`, `ServerError`, `AppError`)
//! - [`factory`] - 협력 객체를 조립하는 컴포지션 루트

pub mod errors;
pub mod factory;

pub use errors::*;
pub use factory::*;
