use std::sync::Arc;

use crate::core::errors::{AppResult, ValidationError};
use crate::utils::json_utils::{field_as_str, JsonBody};

use super::{EmailValidator, Validation};

/// 주입된 [`EmailValidator`]로 이메일 필드의 형식을 검증합니다.
///
/// - 형식이 잘못되었으면 `InvalidParam(field)`
/// - 필드 값이 문자열이 아니면 검증기를 호출하지 않고 `InvalidParam(field)`
/// - 검증기의 실패는 그대로 전파
pub struct EmailValidation {
    field_name: String,
    email_validator: Arc<dyn EmailValidator>,
}

impl EmailValidation {
    pub fn new(field_name: impl Into<String>, email_validator: Arc<dyn EmailValidator>) -> Self {
        Self {
            field_name: field_name.into(),
            email_validator,
        }
    }

    fn invalid(&self) -> AppResult<()> {
        Err(ValidationError::InvalidParam(self.field_name.clone()).into())
    }
}

impl Validation for EmailValidation {
    fn validate(&self, input: &JsonBody) -> AppResult<()> {
        let Some(email) = field_as_str(input, &self.field_name) else {
            return self.invalid();
        };

        if !self.email_validator.is_valid(email)? {
            return self.invalid();
        }
        Ok(())
    }
}
