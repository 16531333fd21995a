use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use log::{debug, info};
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::accounts::AddAccountModel;
use crate::domain::entities::accounts::Account;

/// 계정 영속화 기능
///
/// 유스케이스가 소비하는 저장소 포트입니다. 전달되는 모델의 `password`는
/// 이미 해시된 값이며, 구현체는 새 계정을 저장한 뒤 반환합니다.
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    async fn add(&self, account: AddAccountModel) -> AppResult<Account>;
}

/// 메모리 기반 계정 저장소
///
/// 프로세스가 살아 있는 동안만 계정을 보관합니다.
/// 개발 환경과 테스트에서 외부 데이터베이스 없이 전체 흐름을 실행할 때 사용합니다.
///
/// # 동시성
///
/// 내부 맵은 `RwLock`으로 보호됩니다. 락이 오염(poisoned)된 경우
/// `AppError::DatabaseError`를 반환합니다.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// ID로 계정을 조회합니다.
    pub fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| AppError::DatabaseError(format!("계정 저장소 읽기 실패: {}", e)))?;
        Ok(accounts.get(id).cloned())
    }

    /// 이메일로 계정을 조회합니다.
    pub fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| AppError::DatabaseError(format!("계정 저장소 읽기 실패: {}", e)))?;
        Ok(accounts.values().find(|account| account.email == email).cloned())
    }

    /// 저장된 계정 수
    pub fn count(&self) -> AppResult<usize> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| AppError::DatabaseError(format!("계정 저장소 읽기 실패: {}", e)))?;
        Ok(accounts.len())
    }
}

#[async_trait]
impl AddAccountRepository for InMemoryAccountRepository {
    async fn add(&self, account: AddAccountModel) -> AppResult<Account> {
        let AddAccountModel {
            name,
            email,
            password,
        } = account;

        let created = Account::new(Uuid::new_v4().to_string(), name, email, password);

        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| AppError::DatabaseError(format!("계정 저장소 쓰기 실패: {}", e)))?;
        accounts.insert(created.id.clone(), created.clone());

        debug!("계정 저장 완료 (총 {}개)", accounts.len());
        info!("새 계정 생성: {}", created.id);
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_add_assigns_id_and_stores_account() {
        let sut = InMemoryAccountRepository::new();

        let account = sut
            .add(AddAccountModel::new("valid_name", "valid@mail.com", "hash_password"))
            .await
            .unwrap();

        assert!(Uuid::parse_str(&account.id).is_ok());
        assert_eq!(account.name, "valid_name");
        assert_eq!(account.email, "valid@mail.com");
        assert_eq!(account.password, "hash_password");
        assert_eq!(sut.find_by_id(&account.id).unwrap(), Some(account.clone()));
        assert_eq!(sut.find_by_email("valid@mail.com").unwrap(), Some(account));
        assert_eq!(sut.count().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_each_account_gets_unique_id() {
        let sut = InMemoryAccountRepository::new();

        let first = sut
            .add(AddAccountModel::new("first", "first@mail.com", "hash_1"))
            .await
            .unwrap();
        let second = sut
            .add(AddAccountModel::new("second", "second@mail.com", "hash_2"))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(sut.count().unwrap(), 2);
    }

    #[test]
    fn test_lookup_on_empty_repository() {
        let sut = InMemoryAccountRepository::new();

        assert_eq!(sut.find_by_id("missing").unwrap(), None);
        assert_eq!(sut.find_by_email("missing@mail.com").unwrap(), None);
        assert_eq!(sut.count().unwrap(), 0);
    }
}
