//! 라우트 구성
//!
//! 매칭 순서가 곧 우선순위입니다.
//! 1. `/health`
//! 2. `/auth/oauth/complete` (완료 페이지)
//! 3. `/api/auth/*` 전용 핸들러, 세션 가드가 걸린 `/api/auth/2fa/*`
//! 4. 그 밖의 `/api/*` 는 모두 백엔드 프록시

use actix_web::{error, web, HttpRequest};
use serde_json::json;

use crate::config::ApiConfig;
use crate::core::errors::AppError;
use crate::handlers;
use crate::middlewares::SessionGuard;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // JSON 본문 파싱 실패도 표준 에러 형태로 응답
    cfg.app_data(web::JsonConfig::default().error_handler(json_error));
    // 프록시 본문 (업로드 포함)
    cfg.app_data(web::PayloadConfig::new(ApiConfig::max_body_bytes()));

    cfg.service(health_check);
    cfg.service(handlers::oauth::complete_page);

    configure_auth_routes(cfg);

    cfg.service(web::resource("/api/{tail:.*}").to(handlers::proxy::forward));
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(
                web::scope("/2fa")
                    .wrap(SessionGuard::required())
                    .service(handlers::two_factor::setup)
                    .service(handlers::two_factor::enable)
                    .service(handlers::two_factor::disable)
                    .default_service(web::to(handlers::proxy::forward)),
            )
            // 이메일/비밀번호
            .service(handlers::auth::login)
            .service(handlers::auth::register)
            .service(handlers::auth::verify_email)
            .service(handlers::auth::request_verification)
            // OAuth
            .service(handlers::oauth::establish_session)
            .service(handlers::oauth::providers)
            .service(handlers::oauth::start)
            // 세션
            .service(handlers::session::refresh)
            .service(handlers::session::logout)
            // 나머지 /api/auth/* 는 백엔드로
            .default_service(web::to(handlers::proxy::forward)),
    );
}

fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON 본문 파싱 실패: {}", err);
    AppError::ValidationError("Invalid JSON body".to_string()).into()
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "synth_session_gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
