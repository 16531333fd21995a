//! # Repositories
//!
//! 데이터 액세스 계층입니다. 유스케이스는 [`accounts::AddAccountRepository`]
//! 트레이트에만 의존하며, 실제 저장 방식은 조립 시점에 주입됩니다.
//!
//! 현재 제공되는 구현체:
//!
//! - [`accounts::InMemoryAccountRepository`] - 프로세스 메모리 기반 저장소

pub mod accounts;
