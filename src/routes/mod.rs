//! # HTTP Routes
//!
//! actix-web 라우트 설정과, 프레임워크 요청/응답을 컨트롤러의
//! [`HttpRequest`]/[`HttpResponse`]로 변환하는 어댑터입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/signup` | 회원가입 | 200 / 400 / 500 |
//! | `GET` | `/health` | 헬스체크 | 200 |
//!
//! 라우트는 `web::Data<SignUpController>`가 앱 데이터로 등록되어 있어야 합니다.
//!
//! 회원가입 본문은 Content-Type과 무관하게 원시 바이트로 읽습니다.
//! JSON 객체가 아닌 본문도 컨트롤러까지 전달되어 표준 에러 형식으로 응답됩니다.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{get, post, web, Responder};
use log::debug;
use serde_json::json;

use crate::domain::http::{HttpRequest, HttpResponse};
use crate::handlers::{Controller, SignUpController};
use crate::utils::json_utils::parse_body;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// let controller = web::Data::new(make_signup_controller());
///
/// App::new()
///     .app_data(controller.clone())
///     .configure(configure_all_routes)
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
    cfg.service(web::scope("/api/v1").service(signup));
}

/// 회원가입 엔드포인트
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/signup \
///   -H "Content-Type: application/json" \
///   -d '{"name":"any_name","email":"any@mail.com","password":"any123","passwordConfirmation":"any123"}'
/// ```
#[post("/signup")]
async fn signup(controller: web::Data<SignUpController>, payload: web::Bytes) -> HttpResponse {
    let body = parse_body(&payload);
    debug!("POST /api/v1/signup ({} fields)", body.len());
    controller.handle(HttpRequest::new(body)).await
}

#[get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "signup_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

impl Responder for HttpResponse {
    type Body = BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> actix_web::HttpResponse<Self::Body> {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.body {
            Some(body) => actix_web::HttpResponse::build(status).json(body),
            None => actix_web::HttpResponse::build(status).finish(),
        }
    }
}
