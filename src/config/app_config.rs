//! 실행 환경, 비밀번호 해싱, 서버 바인딩 설정 관리 모듈
//!
//! 모든 설정값은 환경 변수에서 읽으며, 값이 없거나 잘못된 경우 안전한 기본값을 사용합니다.

use std::convert::Infallible;
use std::env;
use std::str::FromStr;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Production`을 기본값으로 사용합니다.
    ///
    /// # Returns
    ///
    /// 감지된 [`Environment`]. 알 수 없는 값도 `Production`으로 취급됩니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // ENVIRONMENT=dev
    /// assert_eq!(Environment::current(), Environment::Development);
    /// ```
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    /// 알 수 없는 값은 `Production`으로 취급합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        })
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt가 허용하는 최소 cost
    pub const MIN_COST: u32 = 4;
    /// 이 서비스가 허용하는 최대 cost
    pub const MAX_COST: u32 = 15;

    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 정수이면 그 값을 사용하고,
    /// 그렇지 않으면 환경별 기본값을 사용합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    ///
    /// # Returns
    ///
    /// 항상 [`Self::MIN_COST`]..=[`Self::MAX_COST`] 범위의 cost
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let cost = PasswordConfig::bcrypt_cost();
    /// let hashed = bcrypt::hash("password", cost)?;
    /// ```
    pub fn bcrypt_cost() -> u32 {
        Self::parse_cost(env::var("BCRYPT_COST").ok().as_deref())
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// 문자열 cost 값을 검증합니다.
    ///
    /// # Arguments
    ///
    /// * `raw` - `BCRYPT_COST` 원본 값 (없으면 `None`)
    ///
    /// # Returns
    ///
    /// 4-15 범위의 정수이면 `Some(cost)`, 비어 있거나 숫자가 아니거나
    /// 범위를 벗어나면 `None`
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert_eq!(PasswordConfig::parse_cost(Some(" 12 ")), Some(12));
    /// assert_eq!(PasswordConfig::parse_cost(Some("16")), None);
    /// ```
    pub fn parse_cost(raw: Option<&str>) -> Option<u32> {
        raw.and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|cost| (Self::MIN_COST..=Self::MAX_COST).contains(cost))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `env` - 대상 실행 환경
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
    /// ```
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development | Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// `.env` 프로필 설정
///
/// `PROFILE` 값에 따라 `.env.<profile>` 파일을 선택합니다.
/// 해당 파일이 없으면 기본 `.env`를 사용합니다.
pub struct ProfileConfig;

impl ProfileConfig {
    /// 프로필이 없을 때 사용할 기본값
    pub const DEFAULT_PROFILE: &'static str = "dev";

    /// 현재 프로필 이름. 기본값: "dev"
    pub fn profile() -> String {
        Self::parse_profile(env::var("PROFILE").ok().as_deref())
    }

    /// 프로필 원본 값을 정리합니다.
    ///
    /// # Arguments
    ///
    /// * `raw` - `PROFILE` 원본 값 (없으면 `None`)
    ///
    /// # Returns
    ///
    /// 앞뒤 공백을 제거한 소문자 프로필. 비어 있으면 [`Self::DEFAULT_PROFILE`]
    pub fn parse_profile(raw: Option<&str>) -> String {
        raw.map(|value| value.trim().to_lowercase())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_PROFILE.to_string())
    }

    /// 프로필에 해당하는 `.env` 파일 이름
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert_eq!(ProfileConfig::env_file_for("prod"), ".env.prod");
    /// ```
    pub fn env_file_for(profile: &str) -> String {
        format!(".env.{}", profile)
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 호스트 주소. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 서버가 바인딩할 포트. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080)
    }

    /// 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|workers| workers.parse().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }

    /// `host:port` 형식의 바인딩 주소
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// HttpServer::new(|| App::new())
    ///     .bind(ServerConfig::bind_address())?
    ///     .workers(ServerConfig::workers());
    /// ```
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}
