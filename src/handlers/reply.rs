//! 핸들러 공통 응답 도우미
//!
//! 호출자 종류(XHR / 브라우저 폼) 판별, 303 리다이렉트, 쿠키를 붙인 에러 응답,
//! 업스트림 응답 중계를 담당합니다.

use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, ResponseError};

use crate::core::errors::AppError;
use crate::domain::models::upstream::UpstreamResponse;
use crate::services::session::CookiePolicy;
use crate::utils::set_cookie::rewrite_cookie_domain;

/// 웹 앱의 fetch 호출이 붙이는 헤더
pub const XHR_HEADER: &str = "x-synth-xhr";

/// XHR 호출인지 판별합니다. 아니면 브라우저 폼 제출로 간주합니다.
pub fn is_xhr(req: &HttpRequest) -> bool {
    if req.headers().contains_key(XHR_HEADER) {
        return true;
    }
    req.headers()
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}

pub fn with_cookies(builder: &mut HttpResponseBuilder, cookies: Vec<Cookie<'static>>) {
    for cookie in cookies {
        builder.cookie(cookie);
    }
}

/// 303 See Other
pub fn see_other(location: &str, cookies: Vec<Cookie<'static>>) -> HttpResponse {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, location.to_string()));
    with_cookies(&mut builder, cookies);
    builder.finish()
}

/// `AppError` 의 표준 JSON 응답에 쿠키를 덧붙입니다.
pub fn error_with_cookies(err: &AppError, cookies: Vec<Cookie<'static>>) -> HttpResponse {
    let mut response = err.error_response();
    for cookie in &cookies {
        if let Err(e) = response.add_cookie(cookie) {
            log::warn!("쿠키 헤더 생성 실패 ({}): {}", cookie.name(), e);
        }
    }
    response
}

/// 업스트림 401 이면 지울 쿠키 목록, 아니면 빈 목록
pub fn cleared_on_unauthorized(
    err: &AppError,
    cookies: impl FnOnce() -> Vec<Cookie<'static>>,
) -> Vec<Cookie<'static>> {
    if err.is_unauthorized() { cookies() } else { Vec::new() }
}

/// 백엔드 응답을 브라우저로 중계합니다.
///
/// 상태, 본문, `Content-Type`, `Location`을 그대로 전달하고
/// `Set-Cookie`는 도메인만 정규화하여 전달합니다. 401 이면 `ss_jwt`도 지웁니다.
pub fn relay(response: UpstreamResponse, cookies: &CookiePolicy) -> HttpResponse {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut builder = HttpResponse::build(status);

    if let Some(content_type) = response.header("content-type") {
        builder.insert_header((header::CONTENT_TYPE, content_type.to_string()));
    }
    if status.is_redirection() {
        if let Some(location) = response.header("location") {
            builder.insert_header((header::LOCATION, location.to_string()));
        }
    }
    for raw in response.set_cookies() {
        builder.append_header((header::SET_COOKIE, rewrite_cookie_domain(raw)));
    }
    if response.is_unauthorized() {
        with_cookies(&mut builder, cookies.clear_access());
    }

    builder.body(response.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_settings;
    use actix_web::test::TestRequest;
    use actix_web::web::Bytes;

    #[test]
    fn test_xhr_detection() {
        assert!(is_xhr(&TestRequest::default().insert_header((XHR_HEADER, "1")).to_http_request()));
        assert!(is_xhr(
            &TestRequest::default()
                .insert_header((header::ACCEPT, "application/json, text/plain"))
                .to_http_request()
        ));
        assert!(!is_xhr(
            &TestRequest::default()
                .insert_header((header::ACCEPT, "text/html"))
                .to_http_request()
        ));
    }

    #[test]
    fn test_relay_keeps_status_and_rewrites_cookie_domain() {
        let policy = CookiePolicy::new(test_settings().cookies);
        let upstream = UpstreamResponse {
            status: 201,
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("set-cookie".to_string(), "a=1; Domain=api.synth.example; Path=/".to_string()),
                ("set-cookie".to_string(), "b=2; Path=/; HttpOnly".to_string()),
            ],
            body: Bytes::from_static(b"{\"id\":1}"),
        };

        let response = relay(upstream, &policy);
        assert_eq!(response.status(), StatusCode::CREATED);

        let cookies: Vec<_> = response
            .headers()
            .get_all(header::SET_COOKIE)
            .map(|v| v.to_str().unwrap().to_string())
            .collect();
        assert_eq!(cookies, vec!["a=1; Domain=.synth.example; Path=/", "b=2; Path=/; HttpOnly"]);
    }

    #[test]
    fn test_relay_keeps_utf8_cookie_values() {
        let policy = CookiePolicy::new(test_settings().cookies);
        let upstream = UpstreamResponse {
            status: 200,
            headers: vec![("set-cookie".to_string(), "display=한글; Domain=api.synth.example".to_string())],
            body: Bytes::new(),
        };

        let response = relay(upstream, &policy);
        let cookie = response.headers().get(header::SET_COOKIE).unwrap();
        assert_eq!(cookie.as_bytes(), "display=한글; Domain=.synth.example".as_bytes());
    }
}
