//! 계정 생성 요청 DTO
//!
//! 검증을 통과한 요청 본문에서 만들어지며, 유스케이스에 값으로 전달됩니다.

use serde::{Deserialize, Serialize};

use crate::core::errors::ValidationError;
use crate::utils::json_utils::{field_as_str, JsonBody};

/// 새 계정 생성에 필요한 데이터
///
/// 유스케이스 입력으로 사용될 때 `password`는 평문이고,
/// 저장소에 전달될 때는 [`AddAccountModel::with_hashed_password`]로 만든
/// 해시 값입니다. 생성 이후에는 변경하지 않고 새 값을 만들어 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AddAccountModel {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// 검증된 요청 본문에서 계정 데이터를 추출합니다.
    ///
    /// 필드 값이 문자열이 아니면 `InvalidParam(field)`을 반환합니다.
    /// 필드가 아예 없으면 `MissingParam(field)`을 반환하지만,
    /// 정상 흐름에서는 검증 단계에서 이미 걸러집니다.
    pub fn from_body(body: &JsonBody) -> Result<Self, ValidationError> {
        Ok(Self {
            name: string_field(body, "name")?.to_string(),
            email: string_field(body, "email")?.to_string(),
            password: string_field(body, "password")?.to_string(),
        })
    }

    /// 비밀번호만 해시 값으로 교체한 새 모델을 만듭니다.
    pub fn with_hashed_password(&self, hashed_password: String) -> Self {
        Self {
            name: self.name.clone(),
            email: self.email.clone(),
            password: hashed_password,
        }
    }
}

fn string_field<'a>(body: &'a JsonBody, field: &str) -> Result<&'a str, ValidationError> {
    match body.get(field) {
        None => Err(ValidationError::MissingParam(field.to_string())),
        Some(_) => field_as_str(body, field).ok_or_else(|| ValidationError::InvalidParam(field.to_string())),
    }
}
