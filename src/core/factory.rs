//! # Composition Root
//!
//! 모든 협력 객체를 생성자 주입으로 조립하는 팩토리 함수들입니다.
//! 전역 컨테이너나 싱글톤 없이, 애플리케이션 시작 시 한 번 조립된 객체 그래프를
//! 요청 간에 읽기 전용으로 공유합니다.
//!
//! ## 객체 그래프
//!
//! ```text
//! SignUpController
//!  ├─ ValidationComposite
//!  │   ├─ RequiredFieldValidation("name")
//!  │   ├─ RequiredFieldValidation("email")
//!  │   ├─ RequiredFieldValidation("password")
//!  │   ├─ RequiredFieldValidation("passwordConfirmation")
//!  │   ├─ CompareFieldsValidation("password", "passwordConfirmation")
//!  │   └─ EmailValidation("email", EmailValidatorAdapter)
//!  └─ AddAccountService
//!      ├─ BcryptAdapter (cost = PasswordConfig::bcrypt_cost())
//!      └─ AddAccountRepository (기본값: InMemoryAccountRepository)
//! ```

use std::sync::Arc;

use log::info;

use crate::handlers::SignUpController;
use crate::repositories::accounts::{AddAccountRepository, InMemoryAccountRepository};
use crate::services::accounts::AddAccountService;
use crate::services::crypto::BcryptAdapter;
use crate::validation::{
    CompareFieldsValidation, EmailValidation, EmailValidator, EmailValidatorAdapter,
    RequiredFieldValidation, Validation, ValidationComposite,
};

/// 회원가입 요청의 필수 필드 (검사 순서대로)
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "password", "passwordConfirmation"];

/// 회원가입 요청 검증 규칙을 조립합니다.
///
/// 규칙 순서가 곧 에러 보고 우선순위입니다.
pub fn make_signup_validation(email_validator: Arc<dyn EmailValidator>) -> ValidationComposite {
    let mut validations: Vec<Box<dyn Validation>> = REQUIRED_FIELDS
        .iter()
        .map(|field| Box::new(RequiredFieldValidation::new(*field)) as Box<dyn Validation>)
        .collect();

    validations.push(Box::new(CompareFieldsValidation::new("password", "passwordConfirmation")));
    validations.push(Box::new(EmailValidation::new("email", email_validator)));

    ValidationComposite::new(validations)
}

/// 주어진 저장소를 사용하는 회원가입 컨트롤러를 조립합니다.
pub fn make_signup_controller_with(account_repo: Arc<dyn AddAccountRepository>) -> SignUpController {
    let encrypter = BcryptAdapter::from_config();
    info!("회원가입 컨트롤러 조립 (bcrypt cost {})", encrypter.cost());

    let add_account = AddAccountService::new(Arc::new(encrypter), account_repo);
    let validation = make_signup_validation(Arc::new(EmailValidatorAdapter::new()));

    SignUpController::new(Arc::new(validation), Arc::new(add_account))
}

/// 메모리 저장소를 사용하는 기본 회원가입 컨트롤러를 조립합니다.
pub fn make_signup_controller() -> SignUpController {
    make_signup_controller_with(Arc::new(InMemoryAccountRepository::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{AppError, ValidationError};
    use crate::domain::http::HttpRequest;
    use crate::handlers::Controller;
    use serde_json::json;

    #[test]
    fn test_signup_validation_rule_count() {
        let validation = make_signup_validation(Arc::new(EmailValidatorAdapter::new()));

        assert_eq!(validation.len(), REQUIRED_FIELDS.len() + 2);
    }

    #[test]
    fn test_signup_validation_order() {
        let validation = make_signup_validation(Arc::new(EmailValidatorAdapter::new()));

        let body = json!({ "password": "a", "passwordConfirmation": "b", "email": "bad" });
        assert_eq!(
            validation.validate(body.as_object().unwrap()),
            Err(AppError::Validation(ValidationError::MissingParam("name".to_string())))
        );

        let body = json!({ "name": "n", "email": "bad", "password": "a", "passwordConfirmation": "b" });
        assert_eq!(
            validation.validate(body.as_object().unwrap()),
            Err(AppError::Validation(ValidationError::InvalidParam(
                "passwordConfirmation".to_string()
            )))
        );

        let body = json!({ "name": "n", "email": "bad", "password": "a", "passwordConfirmation": "a" });
        assert_eq!(
            validation.validate(body.as_object().unwrap()),
            Err(AppError::Validation(ValidationError::InvalidParam("email".to_string())))
        );
    }

    #[actix_web::test]
    async fn test_assembled_controller_persists_hashed_account() {
        let account_repo = Arc::new(InMemoryAccountRepository::new());
        let controller = make_signup_controller_with(account_repo.clone());
        let body = json!({
            "name": "valid_name",
            "email": "valid@mail.com",
            "password": "valid_password",
            "passwordConfirmation": "valid_password"
        });

        let response = controller
            .handle(HttpRequest::new(body.as_object().unwrap().clone()))
            .await;

        assert_eq!(response.status_code, 200);
        let stored = account_repo.find_by_email("valid@mail.com").unwrap().unwrap();
        assert_eq!(Some(stored.id.as_str()), response.account().map(|a| a.id.as_str()));
        assert_ne!(stored.password, "valid_password");
        assert!(BcryptAdapter::new(4).verify("valid_password", &stored.password).unwrap());
    }
}
