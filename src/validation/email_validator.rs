//! 이메일 형식 검증 협력 객체
//!
//! [`EmailValidator`]는 컨트롤러 계층이 소비하는 외부 기능입니다.
//! 기본 구현인 [`EmailValidatorAdapter`]는 `validator` 크레이트의
//! HTML5 이메일 규칙을 사용합니다.

use log::debug;
use validator::ValidateEmail;

use crate::core::errors::AppResult;

/// 이메일 형식 검증 기능
///
/// 구현체는 예기치 않은 실패를 `Err`로 보고할 수 있으며,
/// 이 경우 컨트롤러는 500 응답을 반환합니다.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> AppResult<bool>;
}

/// `validator` 크레이트 기반 이메일 검증기
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> AppResult<bool> {
        let valid = email.validate_email();
        if !valid {
            debug!("이메일 형식 검증 실패");
        }
        Ok(valid)
    }
}
