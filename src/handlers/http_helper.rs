//! 표준 응답 생성 헬퍼
//!
//! 컨트롤러는 응답 구조체를 직접 만들지 않고 이 함수들을 사용합니다.
//! 덕분에 상태 코드와 본문 타입의 조합이 항상 일관됩니다.

use crate::core::errors::{ServerError, ValidationError};
use crate::domain::dto::accounts::AccountResponse;
use crate::domain::http::{ErrorBody, HttpBody, HttpResponse};

/// 400 Bad Request
pub fn bad_request(error: ValidationError) -> HttpResponse {
    HttpResponse {
        status_code: 400,
        body: Some(HttpBody::Error(ErrorBody::Validation(error))),
    }
}

/// 500 Internal Server Error. 원인 정보는 포함하지 않습니다.
pub fn server_error() -> HttpResponse {
    HttpResponse {
        status_code: 500,
        body: Some(HttpBody::Error(ErrorBody::Server(ServerError))),
    }
}

/// 200 OK
pub fn ok(account: AccountResponse) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        body: Some(HttpBody::Account(account)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_bad_request() {
        let response = bad_request(ValidationError::MissingParam("name".to_string()));

        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.error(),
            Some(&ErrorBody::Validation(ValidationError::MissingParam("name".to_string())))
        );
    }

    #[test]
    fn test_server_error() {
        let response = server_error();

        assert_eq!(response.status_code, 500);
        assert_eq!(response.error(), Some(&ErrorBody::Server(ServerError)));
    }

    #[test]
    fn test_ok() {
        let account = AccountResponse {
            id: "valid_id".to_string(),
            name: "valid_name".to_string(),
            email: "valid@mail.com".to_string(),
            created_at: Utc::now(),
        };

        let response = ok(account.clone());

        assert_eq!(response.status_code, 200);
        assert_eq!(response.account(), Some(&account));
        assert!(response.error().is_none());
    }
}
