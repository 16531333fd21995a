use crate::core::errors::{AppResult, ValidationError};
use crate::utils::json_utils::{has_field, JsonBody};

use super::Validation;

/// 필수 필드 검증
///
/// 필드가 없거나 `null`, `false`, `0`, `""`이면 `MissingParam(field)`을 반환합니다.
#[derive(Debug, Clone)]
pub struct RequiredFieldValidation {
    field_name: String,
}

impl RequiredFieldValidation {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }
}

impl Validation for RequiredFieldValidation {
    fn validate(&self, input: &JsonBody) -> AppResult<()> {
        if !has_field(input, &self.field_name) {
            return Err(ValidationError::MissingParam(self.field_name.clone()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use serde_json::json;

    fn missing(field: &str) -> AppResult<()> {
        Err(AppError::Validation(ValidationError::MissingParam(field.to_string())))
    }

    #[test]
    fn test_passes_when_field_present() {
        let sut = RequiredFieldValidation::new("name");
        let body = json!({ "name": "any_name" });

        assert_eq!(sut.validate(body.as_object().unwrap()), Ok(()));
    }

    #[test]
    fn test_returns_missing_param_when_absent() {
        let sut = RequiredFieldValidation::new("name");
        let body = json!({ "email": "any@mail.com" });

        assert_eq!(sut.validate(body.as_object().unwrap()), missing("name"));
    }

    #[test]
    fn test_returns_missing_param_for_falsy_values() {
        let sut = RequiredFieldValidation::new("name");

        for value in [json!(null), json!(""), json!(false), json!(0)] {
            let body = json!({ "name": value });
            assert_eq!(sut.validate(body.as_object().unwrap()), missing("name"));
        }
    }
}
