//! 계정 관리 서비스 모듈
//!
//! 회원가입 유스케이스([`AddAccount`])와 기본 구현체([`AddAccountService`])를 제공합니다.
//!
//! ```rust,ignore
//! let service = AddAccountService::new(encrypter, account_repo);
//! let account = service.add(AddAccountModel::new(name, email, password)).await?;
//! ```

pub mod add_account_service;

pub use add_account_service::{AddAccount, AddAccountService};
