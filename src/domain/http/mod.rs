//! # HTTP Protocol Types
//!
//! 웹 프레임워크와 무관한 요청/응답 타입입니다.
//! 컨트롤러는 이 타입들만 다루며, actix-web과의 변환은
//! `routes` 모듈의 어댑터가 담당합니다.
//!
//! ## 응답 불변 조건
//!
//! - `status_code`는 항상 `200`, `400`, `500` 중 하나입니다.
//! - `200`이 아닌 응답의 본문은 항상 [`HttpBody::Error`]입니다.
//!
//! ## 직렬화 형식
//!
//! ```json
//! // 200
//! { "id": "5f0c...", "name": "valid_name", "email": "valid@mail.com", "created_at": "..." }
//!
//! // 400
//! { "error": "MissingParamsError", "message": "Missing param: name", "param": "name" }
//!
//! // 500
//! { "error": "ServerError", "message": "Internal server error" }
//! ```

use serde::Serialize;

use crate::core::errors::{ErrorPayload, ServerError, ValidationError};
use crate::domain::dto::accounts::AccountResponse;
use crate::utils::json_utils::JsonBody;

/// 컨트롤러가 받는 요청
///
/// 본문은 필드 이름 → 값의 맵이며, 컨트롤러는 읽기만 합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    pub body: JsonBody,
}

impl HttpRequest {
    pub fn new(body: JsonBody) -> Self {
        Self { body }
    }
}

/// 에러 응답 본문
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ErrorPayload")]
pub enum ErrorBody {
    Validation(ValidationError),
    Server(ServerError),
}

impl From<ErrorBody> for ErrorPayload {
    fn from(body: ErrorBody) -> Self {
        match &body {
            ErrorBody::Validation(err) => ErrorPayload::from(err),
            ErrorBody::Server(err) => ErrorPayload::from(err),
        }
    }
}

/// 응답 본문: 성공 값 또는 에러
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HttpBody {
    Account(AccountResponse),
    Error(ErrorBody),
}

/// 컨트롤러가 반환하는 응답
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: Option<HttpBody>,
}

impl HttpResponse {
    /// 에러 응답이면 에러 본문을 반환합니다.
    pub fn error(&self) -> Option<&ErrorBody> {
        match &self.body {
            Some(HttpBody::Error(err)) => Some(err),
            _ => None,
        }
    }

    /// 성공 응답이면 생성된 계정을 반환합니다.
    pub fn account(&self) -> Option<&AccountResponse> {
        match &self.body {
            Some(HttpBody::Account(account)) => Some(account),
            _ => None,
        }
    }
}
