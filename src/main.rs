//! 회원가입 서비스 메인 애플리케이션
//!
//! 설정과 로깅을 초기화하고, 회원가입 컨트롤러를 조립한 뒤
//! Actix-web HTTP 서버를 구동합니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{info, warn};
use signup_service_backend::config::{Environment, ProfileConfig, ServerConfig};
use signup_service_backend::core::factory::make_signup_controller;
use signup_service_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_file = load_env_file();
    init_logging();

    match &env_file {
        Ok(file) => info!("{} 파일 로드 됨", file),
        Err(file) => warn!("{} 파일이 없어 기본 .env 파일을 사용합니다", file),
    }

    info!("🚀 회원가입 서비스 시작중... (environment: {:?})", Environment::current());

    // 컨트롤러는 한 번만 조립되고 모든 워커가 공유합니다
    let controller = web::Data::new(make_signup_controller());

    let bind_address = ServerConfig::bind_address();
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Sign-up: POST http://{}/api/v1/signup", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(controller.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 프로필별 `.env` 파일을 로드합니다
///
/// 로깅 초기화 전에 호출되므로 결과를 반환하고, 로그는 호출자가 남깁니다.
/// `.env.<profile>`이 없으면 기본 `.env`를 시도합니다.
///
/// # Returns
///
/// 로드한 파일 이름(`Ok`) 또는 찾지 못한 프로필 파일 이름(`Err`)
fn load_env_file() -> Result<String, String> {
    let env_file = ProfileConfig::env_file_for(&ProfileConfig::profile());

    match dotenv::from_filename(&env_file) {
        Ok(_) => Ok(env_file),
        Err(_) => {
            dotenv().ok();
            Err(env_file)
        }
    }
}

/// `RUST_LOG` 기반 로깅 초기화 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 로컬 프론트엔드 개발 서버와의 통신을 허용하는 CORS 설정
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
