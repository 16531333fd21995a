//! 암호화 서비스 모듈
//!
//! - [`Encrypter`] - 유스케이스가 소비하는 단방향 암호화 기능
//! - [`BcryptAdapter`] - bcrypt 기반 기본 구현체

pub mod bcrypt_adapter;

pub use bcrypt_adapter::{BcryptAdapter, Encrypter};
