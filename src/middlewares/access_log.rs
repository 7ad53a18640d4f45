//! 접근 로그 미들웨어
//!
//! 기본 `Logger` 형식은 쿼리 문자열을 포함한 요청 줄 전체를 남기므로,
//! 요청 줄을 메서드와 경로로만 바꿔 기록합니다. OAuth 완료 페이지처럼
//! 쿼리에 토큰이 실릴 수 있는 요청도 로그에는 토큰이 남지 않습니다.

use actix_web::dev::ServiceRequest;
use actix_web::middleware::Logger;

const ACCESS_LOG_FORMAT: &str =
    r#"%a "%{request_line}xi" %s %b "%{Referer}i" "%{User-Agent}i" %T"#;

pub fn access_logger() -> Logger {
    Logger::new(ACCESS_LOG_FORMAT).custom_request_replace("request_line", request_line)
}

/// 쿼리를 뺀 요청 줄
fn request_line(req: &ServiceRequest) -> String {
    format!("{} {} {:?}", req.method(), req.path(), req.version())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_request_line_omits_query() {
        let req = TestRequest::get()
            .uri("/auth/oauth/complete?token=secret-access-token")
            .to_srv_request();
        let line = request_line(&req);

        assert!(line.starts_with("GET /auth/oauth/complete "));
        assert!(!line.contains("secret-access-token"));
        assert!(!line.contains('?'));
    }

    #[test]
    fn test_format_does_not_use_raw_request_line() {
        assert!(!ACCESS_LOG_FORMAT.contains("%r"));
    }
}
