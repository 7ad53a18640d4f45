//! 범용 API 프록시
//!
//! `/api/<path>` 요청을 백엔드 `<base>/<path>` 로 전달합니다.
//! 인증 관련 라우트가 먼저 매칭되며, 나머지는 모두 이 핸들러로 떨어집니다.

use actix_web::http::{header, Method};
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use crate::config::auth_config::ACCESS_TOKEN_COOKIE;
use crate::domain::models::upstream::UpstreamRequest;
use crate::handlers::reply::relay;
use crate::state::AppState;
use crate::utils::string_utils::non_blank;

/// 클라이언트 요청에서 백엔드로 복사하는 헤더
const FORWARDED_HEADERS: [header::HeaderName; 2] = [header::CONTENT_TYPE, header::ACCEPT];

/// `/api` 접두사를 제거한 백엔드 경로 + 쿼리 (퍼센트 인코딩 유지)
pub fn backend_path(req: &HttpRequest) -> String {
    let path = req.path();
    let path = path.strip_prefix("/api").unwrap_or(path);
    let path = if path.is_empty() { "/" } else { path };

    match req.query_string() {
        "" => path.to_string(),
        query => format!("{}?{}", path, query),
    }
}

pub async fn forward(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> HttpResponse {
    let target = backend_path(&req);
    let mut upstream = UpstreamRequest::new(req.method().clone(), state.backend.url(&target));

    for name in &FORWARDED_HEADERS {
        if let Some(value) = req.headers().get(name).and_then(|v| v.to_str().ok()) {
            upstream = upstream.header(name.as_str(), value);
        }
    }

    if let Some(cookie) = req.cookie(ACCESS_TOKEN_COOKIE) {
        if let Some(token) = non_blank(Some(cookie.value())) {
            upstream = upstream.bearer(token);
        }
    }

    if *req.method() != Method::GET && *req.method() != Method::HEAD {
        upstream = upstream.body(body);
    }

    match state.backend.send(upstream).await {
        Ok(response) => {
            if response.is_unauthorized() {
                log::info!("백엔드 401, ss_jwt 삭제: {} {}", req.method(), req.path());
            }
            relay(response, &state.cookies)
        }
        Err(err) => {
            log::warn!("프록시 실패: {} {}", req.method(), req.path());
            err.error_response()
        }
    }
}
