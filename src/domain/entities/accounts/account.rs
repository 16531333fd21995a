//! 계정 엔티티
//!
//! 회원가입이 성공할 때마다 정확히 하나씩 생성되며,
//! 생성 이후의 소유권은 저장소(Repository)에 있습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 저장된 사용자 계정
///
/// `password` 필드에는 항상 해시된 비밀번호만 저장됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(id: String, name: String, email: String, hashed_password: String) -> Self {
        Self {
            id,
            name,
            email,
            password: hashed_password,
            created_at: Utc::now(),
        }
    }
}
