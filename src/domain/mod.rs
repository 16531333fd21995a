//! # Domain Layer
//!
//! 회원가입 도메인의 데이터 구조를 정의합니다.
//!
//! - [`entities`] - 저장소가 소유하는 계정 엔티티
//! - [`dto`] - 계층 간 전달 객체 (요청 모델, 응답 본문)
//! - [`http`] - 프레임워크 독립적인 HTTP 요청/응답 타입

pub mod entities;
pub mod dto;
pub mod http;

pub use entities::Account;
pub use dto::{AccountResponse, AddAccountModel};
pub use http::{ErrorBody, HttpBody, HttpRequest, HttpResponse};
