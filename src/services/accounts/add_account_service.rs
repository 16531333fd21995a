//! # Account Registration Use Case
//!
//! 새 계정 생성이라는 하나의 비즈니스 트랜잭션을 조율합니다.
//! 전송 계층(HTTP)이나 저장 방식과는 무관하게 동작합니다.
//!
//! ## 처리 과정
//!
//! ```text
//! AddAccountModel (평문 비밀번호)
//!        │
//!        ▼
//! Encrypter::encrypt(password)   ← 정확히 1회, 평문 그대로 전달
//!        │ 실패 시: 같은 에러로 즉시 종료 (저장소 호출 없음)
//!        ▼
//! AddAccountRepository::add(model with hash)   ← 정확히 1회
//!        │ 실패 시: 같은 에러로 종료
//!        ▼
//!     Account
//! ```
//!
//! 이 계층은 에러를 복구하거나 재시도하지 않으며, 다른 타입으로 감싸지도 않습니다.
//! HTTP 상태 코드로의 변환은 컨트롤러의 책임입니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::core::errors::AppResult;
use crate::domain::dto::accounts::AddAccountModel;
use crate::domain::entities::accounts::Account;
use crate::repositories::accounts::AddAccountRepository;
use crate::services::crypto::Encrypter;

/// 계정 생성 유스케이스 포트
#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(&self, account: AddAccountModel) -> AppResult<Account>;
}

/// 암호화 후 저장소에 위임하는 [`AddAccount`] 구현체
pub struct AddAccountService {
    encrypter: Arc<dyn Encrypter>,
    account_repo: Arc<dyn AddAccountRepository>,
}

impl AddAccountService {
    pub fn new(encrypter: Arc<dyn Encrypter>, account_repo: Arc<dyn AddAccountRepository>) -> Self {
        Self {
            encrypter,
            account_repo,
        }
    }
}

#[async_trait]
impl AddAccount for AddAccountService {
    async fn add(&self, account: AddAccountModel) -> AppResult<Account> {
        let start_time = std::time::Instant::now();

        let hashed_password = self.encrypter.encrypt(&account.password).await?;
        let created = self
            .account_repo
            .add(account.with_hashed_password(hashed_password))
            .await?;

        debug!("Total account creation took: {:?}", start_time.elapsed());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use chrono::Utc;
    use std::sync::Mutex;

    struct EncrypterStub {
        result: AppResult<String>,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Encrypter for EncrypterStub {
        async fn encrypt(&self, value: &str) -> AppResult<String> {
            self.calls.lock().unwrap().push(value.to_string());
            self.result.clone()
        }
    }

    struct AddAccountRepositoryStub {
        result: Option<AppError>,
        calls: Mutex<Vec<AddAccountModel>>,
    }

    #[async_trait]
    impl AddAccountRepository for AddAccountRepositoryStub {
        async fn add(&self, account: AddAccountModel) -> AppResult<Account> {
            self.calls.lock().unwrap().push(account.clone());
            if let Some(err) = &self.result {
                return Err(err.clone());
            }
            Ok(Account {
                id: "valid_id".to_string(),
                name: account.name,
                email: account.email,
                password: account.password,
                created_at: Utc::now(),
            })
        }
    }

    struct Sut {
        sut: AddAccountService,
        encrypter_stub: Arc<EncrypterStub>,
        repo_stub: Arc<AddAccountRepositoryStub>,
    }

    fn make_sut(encrypt_result: AppResult<String>, repo_error: Option<AppError>) -> Sut {
        let encrypter_stub = Arc::new(EncrypterStub {
            result: encrypt_result,
            calls: Mutex::new(Vec::new()),
        });
        let repo_stub = Arc::new(AddAccountRepositoryStub {
            result: repo_error,
            calls: Mutex::new(Vec::new()),
        });
        let sut = AddAccountService::new(encrypter_stub.clone(), repo_stub.clone());

        Sut {
            sut,
            encrypter_stub,
            repo_stub,
        }
    }

    fn valid_account_data() -> AddAccountModel {
        AddAccountModel::new("valid_name", "valid@mail.com", "valid_password")
    }

    #[actix_web::test]
    async fn test_calls_encrypter_once_with_plain_password() {
        let Sut { sut, encrypter_stub, .. } = make_sut(Ok("hash_password".to_string()), None);

        sut.add(valid_account_data()).await.unwrap();

        assert_eq!(*encrypter_stub.calls.lock().unwrap(), vec!["valid_password".to_string()]);
    }

    #[actix_web::test]
    async fn test_returns_account_carrying_hash() {
        let Sut { sut, .. } = make_sut(Ok("hash_password".to_string()), None);

        let account = sut.add(valid_account_data()).await.unwrap();

        assert_eq!(account.id, "valid_id");
        assert_eq!(account.name, "valid_name");
        assert_eq!(account.email, "valid@mail.com");
        assert_eq!(account.password, "hash_password");
    }

    #[actix_web::test]
    async fn test_repository_receives_hash_not_plaintext() {
        let Sut { sut, repo_stub, .. } = make_sut(Ok("hash_password".to_string()), None);

        sut.add(valid_account_data()).await.unwrap();

        assert_eq!(
            *repo_stub.calls.lock().unwrap(),
            vec![AddAccountModel::new("valid_name", "valid@mail.com", "hash_password")]
        );
    }

    #[actix_web::test]
    async fn test_propagates_encrypter_failure_unchanged() {
        let failure = AppError::EncryptionError("hash failed".to_string());
        let Sut { sut, repo_stub, .. } = make_sut(Err(failure.clone()), None);

        let result = sut.add(valid_account_data()).await;

        assert_eq!(result, Err(failure));
        assert!(repo_stub.calls.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_propagates_repository_failure_unchanged() {
        let failure = AppError::DatabaseError("insert failed".to_string());
        let Sut { sut, encrypter_stub, repo_stub } =
            make_sut(Ok("hash_password".to_string()), Some(failure.clone()));

        let result = sut.add(valid_account_data()).await;

        assert_eq!(result, Err(failure));
        assert_eq!(encrypter_stub.calls.lock().unwrap().len(), 1);
        assert_eq!(repo_stub.calls.lock().unwrap().len(), 1);
    }
}
