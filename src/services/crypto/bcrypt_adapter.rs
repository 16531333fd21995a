//! # Password Encryption
//!
//! 평문 비밀번호를 저장 가능한 단방향 해시로 변환하는 기능을 정의합니다.
//!
//! ## bcrypt cost
//!
//! [`BcryptAdapter::from_config`]는 `PasswordConfig::bcrypt_cost()`를 사용하므로
//! 실행 환경별로 해싱 강도가 달라집니다.
//!
//! | 환경 | cost | 해싱 시간 (대략) |
//! |------|------|------------------|
//! | Development/Test | 4 | ~1ms |
//! | Staging | 10 | ~60ms |
//! | Production | 12 | ~250ms |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let encrypter = BcryptAdapter::from_config();
//! let hash = encrypter.encrypt("MySecurePassword123!").await?;
//! assert!(encrypter.verify("MySecurePassword123!", &hash)?);
//! ```

use async_trait::async_trait;
use log::info;

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};

/// 단방향 암호화 기능
///
/// 실패는 비동기적으로 보고될 수 있으며, 호출자는 그 에러를 그대로 전파해야 합니다.
#[async_trait]
pub trait Encrypter: Send + Sync {
    /// 값을 해시합니다.
    ///
    /// # Arguments
    ///
    /// * `value` - 해시할 평문 (변형 없이 그대로 사용)
    ///
    /// # Returns
    ///
    /// 저장 가능한 해시 문자열
    ///
    /// # Errors
    ///
    /// 해싱에 실패하면 [`AppError::EncryptionError`]
    async fn encrypt(&self, value: &str) -> AppResult<String>;
}

/// bcrypt 기반 [`Encrypter`] 구현체
#[derive(Debug, Clone, Copy)]
pub struct BcryptAdapter {
    cost: u32,
}

impl BcryptAdapter {
    /// 지정한 cost로 어댑터를 생성합니다.
    ///
    /// cost 범위는 여기서 검사하지 않습니다. bcrypt가 허용하지 않는 값이면
    /// [`Encrypter::encrypt`] 호출 시 [`AppError::EncryptionError`]가 반환됩니다.
    ///
    /// # Arguments
    ///
    /// * `cost` - bcrypt cost (4-31)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let encrypter = BcryptAdapter::new(4);
    /// let hash = encrypter.encrypt("any_password").await?;
    /// ```
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 현재 환경 설정의 cost로 어댑터를 생성합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // ENVIRONMENT=production, BCRYPT_COST 미설정
    /// assert_eq!(BcryptAdapter::from_config().cost(), 12);
    /// ```
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 평문이 해시와 일치하는지 확인합니다.
    ///
    /// # Arguments
    ///
    /// * `value` - 확인할 평문
    /// * `hash` - 저장된 bcrypt 해시
    ///
    /// # Returns
    ///
    /// 일치 여부. 해시 형식이 잘못되었으면 [`AppError::EncryptionError`]
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let hash = encrypter.encrypt("any_password").await?;
    /// assert!(encrypter.verify("any_password", &hash)?);
    /// ```
    pub fn verify(&self, value: &str, hash: &str) -> AppResult<bool> {
        bcrypt::verify(value, hash)
            .map_err(|e| AppError::EncryptionError(format!("비밀번호 검증 실패: {}", e)))
    }
}

#[async_trait]
impl Encrypter for BcryptAdapter {
    async fn encrypt(&self, value: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();

        let hashed = bcrypt::hash(value, self.cost)
            .map_err(|e| AppError::EncryptionError(format!("비밀번호 해싱 실패: {}", e)))?;

        info!("Password hashing took: {:?} (cost {})", hash_start.elapsed(), self.cost);
        Ok(hashed)
    }
}
