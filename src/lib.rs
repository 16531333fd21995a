//! 회원가입 서비스 백엔드
//!
//! 회원가입 요청을 검증하고, 비밀번호를 해싱한 뒤 계정을 저장하여
//! 구조화된 HTTP 응답을 돌려주는 요청 처리 코어입니다.
//! 모든 협력 객체는 트레이트로 정의되고 생성자를 통해 주입됩니다.
//!
//! # Features
//!
//! - **검증**: 단일 목적 검증 규칙 + 순서 보장 fail-fast 컴포지트
//! - **유스케이스**: 비밀번호 암호화 후 저장소 위임 (`AddAccount`)
//! - **컨트롤러**: 검증/유스케이스 결과를 200/400/500 응답으로 변환
//! - **어댑터**: bcrypt 암호화, `validator` 이메일 검증, 메모리 저장소, actix-web 라우트
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← actix-web 어댑터 (POST /api/v1/signup)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Controller    │ ← SignUpController
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Validation    │ ← ValidationComposite (fail fast)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Use Case     │ ← AddAccountService
//! └─────────────────┘
//!       │      │
//!       ▼      ▼
//! ┌──────────┐ ┌──────────────┐
//! │Encrypter │ │  Repository  │
//! └──────────┘ └──────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use signup_service_backend::core::factory::make_signup_controller;
//! use signup_service_backend::domain::http::HttpRequest;
//! use signup_service_backend::handlers::Controller;
//!
//! let controller = make_signup_controller();
//! let response = controller.handle(HttpRequest::new(body)).await;
//! assert_eq!(response.status_code, 200);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod validation;
pub mod utils;
pub mod routes;
pub mod handlers;
