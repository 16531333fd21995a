//! # Domain Entities
//!
//! 저장소가 소유하는 영속 엔티티들을 정의합니다.
//! 엔티티는 HTTP 응답으로 직접 노출되지 않으며,
//! 항상 `dto::accounts::response`의 DTO로 변환된 뒤 전달됩니다.

pub mod accounts;

pub use accounts::*;
