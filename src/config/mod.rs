//! # Configuration Module
//!
//! 회원가입 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="production"
//!
//! # 비밀번호 해싱 강도 (4-15 범위, 미설정 시 환경별 기본값)
//! export BCRYPT_COST="12"
//!
//! # .env 프로필 (.env.<profile> 로드, 기본값 dev)
//! export PROFILE="dev"
//!
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, PasswordConfig, ServerConfig};
//!
//! let env = Environment::current();
//! let cost = PasswordConfig::bcrypt_cost();
//! let address = ServerConfig::bind_address();
//! ```

pub mod app_config;

pub use app_config::*;
