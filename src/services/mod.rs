//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 협력 객체는 생성자를 통해 `Arc<dyn Trait>`로 주입됩니다.
//!
//! - [`accounts`] - 계정 생성 유스케이스
//! - [`crypto`] - 비밀번호 단방향 암호화

pub mod accounts;
pub mod crypto;
