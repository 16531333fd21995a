use crate::core::errors::{AppResult, ValidationError};
use crate::utils::json_utils::JsonBody;

use super::Validation;

/// 두 필드의 값이 같은지 검증합니다.
///
/// 값이 다르면 비교 대상 필드(`field_to_compare`)를 가리키는
/// `InvalidParam`을 반환합니다.
#[derive(Debug, Clone)]
pub struct CompareFieldsValidation {
    field_name: String,
    field_to_compare: String,
}

impl CompareFieldsValidation {
    pub fn new(field_name: impl Into<String>, field_to_compare: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            field_to_compare: field_to_compare.into(),
        }
    }
}

impl Validation for CompareFieldsValidation {
    fn validate(&self, input: &JsonBody) -> AppResult<()> {
        if input.get(&self.field_name) != input.get(&self.field_to_compare) {
            return Err(ValidationError::InvalidParam(self.field_to_compare.clone()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use serde_json::json;

    #[test]
    fn test_passes_when_values_match() {
        let sut = CompareFieldsValidation::new("password", "passwordConfirmation");
        let body = json!({ "password": "any123", "passwordConfirmation": "any123" });

        assert_eq!(sut.validate(body.as_object().unwrap()), Ok(()));
    }

    #[test]
    fn test_returns_invalid_param_on_mismatch() {
        let sut = CompareFieldsValidation::new("password", "passwordConfirmation");
        let body = json!({ "password": "any123", "passwordConfirmation": "invalid" });

        assert_eq!(
            sut.validate(body.as_object().unwrap()),
            Err(AppError::Validation(ValidationError::InvalidParam(
                "passwordConfirmation".to_string()
            )))
        );
    }

    #[test]
    fn test_compares_values_strictly() {
        let sut = CompareFieldsValidation::new("password", "passwordConfirmation");
        let body = json!({ "password": "123", "passwordConfirmation": 123 });

        assert!(sut.validate(body.as_object().unwrap()).is_err());
    }
}
