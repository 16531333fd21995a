//! # Application Error Handling System
//!
//! 회원가입 서비스 전역에서 사용하는 에러 타입들을 정의합니다.
//! `thiserror`를 사용하여 타입 안전한 에러를 제공하며,
//! 클라이언트에게 노출되는 에러와 내부 에러를 명확히 구분합니다.
//!
//! ## 에러 분류
//!
//! | 타입 | 의미 | HTTP 상태 코드 |
//! |------|------|----------------|
//! | [`ValidationError::MissingParam`] | 필수 필드 누락 | 400 Bad Request |
//! | [`ValidationError::InvalidParam`] | 필드 값 검증 실패 | 400 Bad Request |
//! | [`ServerError`] | 예상하지 못한 내부 오류 | 500 Internal Server Error |
//!
//! ## 전파 정책
//!
//! - 검증 에러는 `Validation` 구현체가 **값으로 반환**합니다.
//! - 협력 객체(`EmailValidator`, `Encrypter`, 저장소)의 실패는 [`AppError`]로
//!   그대로 전파되며, 컨트롤러에서만 [`ServerError`]로 변환됩니다.
//! - 유스케이스 계층은 에러를 잡거나 감싸지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, ValidationError};
//!
//! fn check_name(name: &str) -> Result<(), AppError> {
//!     if name.is_empty() {
//!         return Err(ValidationError::MissingParam("name".to_string()).into());
//!     }
//!     Ok(())
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// 요청 본문 검증 에러
///
/// 하나의 검증 규칙이 보고하는 단일 실패를 나타냅니다.
/// 생성된 이후에는 변경되지 않으며, 항상 400 Bad Request로 응답됩니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 필수 필드가 없거나 비어 있음
    #[error("Missing param: {0}")]
    MissingParam(String),

    /// 필드 값이 의미 검증(불일치, 형식 오류 등)을 통과하지 못함
    #[error("Invalid param: {0}")]
    InvalidParam(String),
}

impl ValidationError {
    /// 클라이언트에게 노출되는 에러 이름
    pub fn name(&self) -> &'static str {
        match self {
            ValidationError::MissingParam(_) => "MissingParamsError",
            ValidationError::InvalidParam(_) => "InvalidParamsError",
        }
    }

    /// 에러가 가리키는 필드 이름
    pub fn param(&self) -> &str {
        match self {
            ValidationError::MissingParam(field) | ValidationError::InvalidParam(field) => field,
        }
    }
}

/// 예상하지 못한 서버 내부 오류를 나타내는 마커 타입
///
/// 원인 정보를 전혀 담지 않습니다. 내부 에러의 상세 내용은 로그로만 남기고,
/// 클라이언트에게는 이 타입만 전달됩니다.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("Internal server error")]
pub struct ServerError;

impl ServerError {
    /// 클라이언트에게 노출되는 에러 이름
    pub fn name(&self) -> &'static str {
        "ServerError"
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 검증 실패와 협력 객체의 실패를 모두 포괄합니다.
/// `Validation` 변형만 400으로 매핑되고, 나머지는 모두 500으로 매핑됩니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 비밀번호 해싱 실패 (500 Internal Server Error)
    #[error("Encryption error: {0}")]
    EncryptionError(String),

    /// 계정 저장소 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 외부 협력 객체(이메일 검증기 등) 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 클라이언트에게 전달되는 에러 응답 본문
///
/// ```json
/// { "error": "MissingParamsError", "message": "Missing param: name", "param": "name" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl From<&ValidationError> for ErrorPayload {
    fn from(err: &ValidationError) -> Self {
        Self {
            error: err.name().to_string(),
            message: err.to_string(),
            param: Some(err.param().to_string()),
        }
    }
}

impl From<&ServerError> for ErrorPayload {
    fn from(err: &ServerError) -> Self {
        Self {
            error: err.name().to_string(),
            message: err.to_string(),
            param: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let missing = ValidationError::MissingParam("name".to_string());
        let invalid = ValidationError::InvalidParam("email".to_string());

        assert_eq!(missing.to_string(), "Missing param: name");
        assert_eq!(invalid.to_string(), "Invalid param: email");
        assert_eq!(missing.name(), "MissingParamsError");
        assert_eq!(invalid.name(), "InvalidParamsError");
        assert_eq!(invalid.param(), "email");
    }

    #[test]
    fn test_validation_error_converts_into_app_error() {
        let err: AppError = ValidationError::MissingParam("email".to_string()).into();

        assert_eq!(
            err,
            AppError::Validation(ValidationError::MissingParam("email".to_string()))
        );
    }

    #[test]
    fn test_transparent_validation_display() {
        let err: AppError = ValidationError::InvalidParam("passwordConfirmation".to_string()).into();
        assert_eq!(err.to_string(), "Invalid param: passwordConfirmation");
    }

    #[test]
    fn test_error_payload_serialization() {
        let payload = ErrorPayload::from(&ValidationError::MissingParam("name".to_string()));
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["error"], "MissingParamsError");
        assert_eq!(json["message"], "Missing param: name");
        assert_eq!(json["param"], "name");
    }

    #[test]
    fn test_server_error_payload_has_no_detail() {
        let payload = ErrorPayload::from(&ServerError);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["error"], "ServerError");
        assert_eq!(json["message"], "Internal server error");
        assert!(json.get("param").is_none());
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
