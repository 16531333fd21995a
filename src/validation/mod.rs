//! # Request Validation
//!
//! 요청 본문을 검사하는 단일 목적 검증 규칙들과, 규칙들을 순서대로 실행하는
//! 컴포지트를 제공합니다.
//!
//! ## 검증 규칙
//!
//! | 규칙 | 검사 내용 | 실패 시 에러 |
//! |------|-----------|--------------|
//! | [`RequiredFieldValidation`] | 필드 존재 및 값 채움 | `MissingParam(field)` |
//! | [`CompareFieldsValidation`] | 두 필드 값 일치 | `InvalidParam(field_to_compare)` |
//! | [`EmailValidation`] | 이메일 형식 | `InvalidParam(field)` |
//!
//! ## 반환 규칙
//!
//! 모든 규칙은 `Result<(), AppError>`를 반환합니다.
//!
//! - `Ok(())` - 검증 통과
//! - `Err(AppError::Validation(_))` - 규칙 위반 (400으로 응답)
//! - 그 외의 `Err` - 협력 객체의 예기치 않은 실패 (500으로 응답)
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let validation = ValidationComposite::new(vec![
//!     Box::new(RequiredFieldValidation::new("name")),
//!     Box::new(RequiredFieldValidation::new("email")),
//! ]);
//!
//! validation.validate(&request.body)?;
//! ```

pub mod compare_fields;
pub mod composite;
pub mod email;
pub mod email_validator;
pub mod required_field;

pub use compare_fields::CompareFieldsValidation;
pub use composite::ValidationComposite;
pub use email::EmailValidation;
pub use email_validator::{EmailValidator, EmailValidatorAdapter};
pub use required_field::RequiredFieldValidation;

use crate::core::errors::AppResult;
use crate::utils::json_utils::JsonBody;

/// 입력의 한 가지 측면만 검사하는 검증 규칙
///
/// 구현체는 입력에 대한 순수 함수여야 하며, 호출 간에 공유되는
/// 가변 상태를 가져서는 안 됩니다.
pub trait Validation: Send + Sync {
    /// 입력을 검사하고 최대 하나의 에러를 보고합니다.
    fn validate(&self, input: &JsonBody) -> AppResult<()>;
}
