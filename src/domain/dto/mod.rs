//! # Data Transfer Objects
//!
//! 계층 간에 전달되는 데이터 구조를 정의합니다.
//! 엔티티와 달리 DTO는 외부에 노출되어도 안전한 필드만 담습니다.

pub mod accounts;

pub use accounts::*;
