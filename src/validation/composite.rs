use crate::core::errors::AppResult;
use crate::utils::json_utils::JsonBody;

use super::Validation;

/// 여러 검증 규칙을 순서대로 실행하는 컴포지트
///
/// 첫 번째로 실패한 규칙의 에러를 즉시 반환하며, 이후 규칙은 실행하지 않습니다.
/// 여러 필드가 동시에 잘못된 경우 어떤 에러가 보고될지는 규칙의 순서가 결정합니다.
pub struct ValidationComposite {
    validations: Vec<Box<dyn Validation>>,
}

impl ValidationComposite {
    pub fn new(validations: Vec<Box<dyn Validation>>) -> Self {
        Self { validations }
    }

    pub fn len(&self) -> usize {
        self.validations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validations.is_empty()
    }
}

impl Validation for ValidationComposite {
    fn validate(&self, input: &JsonBody) -> AppResult<()> {
        self.validations
            .iter()
            .try_for_each(|validation| validation.validate(input))
    }
}
