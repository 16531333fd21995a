use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::accounts::Account;

/// 회원가입 성공 응답 본문
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        let Account {
            id,
            name,
            email,
            created_at,
            ..
        } = account;

        Self {
            id,
            name,
            email,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_drops_password_hash() {
        let account = Account::new(
            "valid_id".to_string(),
            "valid_name".to_string(),
            "valid@mail.com".to_string(),
            "hash_password".to_string(),
        );

        let response = AccountResponse::from(account.clone());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(response.id, "valid_id");
        assert_eq!(response.created_at, account.created_at);
        assert!(json.get("password").is_none());
        assert!(!json.to_string().contains("hash_password"));
    }
}
