//! # Controllers
//!
//! 프레임워크 독립적인 요청([`HttpRequest`])을 유스케이스 호출로 변환하고,
//! 그 결과를 응답([`HttpResponse`])으로 되돌리는 전송 계층 어댑터입니다.
//!
//! ## 요청 처리 흐름
//!
//! ```text
//! HttpRequest ─▶ Controller ─▶ Validation (fail fast) ─▶ AddAccount ─▶ HttpResponse
//! ```
//!
//! 컨트롤러는 예외 없이 항상 응답을 반환합니다.
//! 검증 실패는 400, 그 외 모든 실패는 500으로 변환됩니다.

pub mod http_helper;
pub mod signup;

pub use signup::SignUpController;

use async_trait::async_trait;

use crate::domain::http::{HttpRequest, HttpResponse};

/// HTTP 요청을 처리하는 컨트롤러
#[async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}
