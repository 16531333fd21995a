//! JSON 요청 본문 필드 처리 유틸리티
//!
//! 요청 본문은 필드 이름 → JSON 값의 맵으로 전달됩니다.
//! 이 모듈은 필드의 존재 여부와 문자열 값을 일관된 규칙으로 판단합니다.

use serde_json::{Map, Value};

/// 요청 본문 타입 (필드 이름 → 값)
pub type JsonBody = Map<String, Value>;

/// JSON 값이 "채워져 있는지" 판단합니다.
///
/// `null`, `false`, `0`, 빈 문자열은 비어 있는 값으로 간주합니다.
/// 그 외의 값(공백 문자열, 배열, 객체 포함)은 모두 채워진 값입니다.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 필드가 존재하고 채워져 있는지 확인합니다.
pub fn has_field(body: &JsonBody, field: &str) -> bool {
    body.get(field).is_some_and(is_truthy)
}

/// 필드 값을 문자열로 가져옵니다. 문자열이 아니면 `None`입니다.
pub fn field_as_str<'a>(body: &'a JsonBody, field: &str) -> Option<&'a str> {
    body.get(field).and_then(Value::as_str)
}

/// 원시 요청 본문을 [`JsonBody`]로 변환합니다.
///
/// JSON 객체가 아닌 본문(빈 본문, 배열, 잘못된 JSON 등)은 빈 맵이 되므로
/// 이후 필수 필드 검증에서 `MissingParamsError`로 보고됩니다.
///
/// # Arguments
///
/// * `raw` - 요청 본문 바이트
///
/// # Returns
///
/// 본문이 JSON 객체이면 그 맵, 아니면 빈 맵
///
/// # Examples
///
/// ```rust,ignore
/// let body = parse_body(br#"{"name":"any_name"}"#);
/// assert!(has_field(&body, "name"));
///
/// assert!(parse_body(b"[1,2]").is_empty());
/// ```
pub fn parse_body(raw: &[u8]) -> JsonBody {
    match serde_json::from_slice::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        _ => JsonBody::new(),
    }
}
