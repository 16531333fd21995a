//! # Sign-up Controller
//!
//! 회원가입 요청을 처리하는 컨트롤러입니다.
//!
//! ## 처리 순서
//!
//! 1. 필수 필드 검사: `name`, `email`, `password`, `passwordConfirmation` 순서로
//!    처음 누락된 필드에 대해 400 `MissingParamsError`
//! 2. `password`와 `passwordConfirmation`이 다르면 400 `InvalidParamsError("passwordConfirmation")`
//! 3. 이메일 형식이 잘못되었으면 400 `InvalidParamsError("email")`
//! 4. 검증 중 협력 객체가 실패하면 500 `ServerError`
//! 5. 계정 생성 성공 시 200 + 생성된 계정, 실패 시 500 `ServerError`
//!
//! 1-4단계는 주입된 [`Validation`](crate::validation::Validation)이 수행합니다.
//! 기본 규칙 목록은 [`make_signup_validation`](crate::core::factory::make_signup_validation)을 참고하세요.
//!
//! ## 요청/응답 예시
//!
//! ```text
//! POST /api/v1/signup
//! { "email": "any@mail.com", "password": "any123", "passwordConfirmation": "any123" }
//!
//! 400 Bad Request
//! { "error": "MissingParamsError", "message": "Missing param: name", "param": "name" }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info, warn};

use crate::core::errors::AppError;
use crate::domain::dto::accounts::{AccountResponse, AddAccountModel};
use crate::domain::http::{HttpRequest, HttpResponse};
use crate::handlers::Controller;
use crate::handlers::http_helper::{bad_request, ok, server_error};
use crate::services::accounts::AddAccount;
use crate::validation::Validation;

/// 회원가입 컨트롤러
///
/// 검증 규칙과 계정 생성 유스케이스를 생성자로 주입받습니다.
/// 두 협력 객체는 요청 간에 읽기 전용으로 공유됩니다.
pub struct SignUpController {
    validation: Arc<dyn Validation>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(validation: Arc<dyn Validation>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            validation,
            add_account,
        }
    }
}

#[async_trait]
impl Controller for SignUpController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        match self.validation.validate(&request.body) {
            Ok(()) => {}
            Err(AppError::Validation(err)) => {
                warn!("회원가입 요청 검증 실패: {}", err);
                return bad_request(err);
            }
            Err(err) => {
                error!("회원가입 요청 검증 중 오류: {}", err);
                return server_error();
            }
        }

        let account_data = match AddAccountModel::from_body(&request.body) {
            Ok(data) => data,
            Err(err) => {
                warn!("회원가입 요청 검증 실패: {}", err);
                return bad_request(err);
            }
        };

        match self.add_account.add(account_data).await {
            Ok(account) => {
                info!("회원가입 성공: {}", account.id);
                ok(AccountResponse::from(account))
            }
            Err(err) => {
                error!("계정 생성 실패: {}", err);
                server_error()
            }
        }
    }
}
