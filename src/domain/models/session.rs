//! 세션 산출물 모델
//!
//! 백엔드 인증 응답에서 추출한 토큰 묶음과, 세션 가드가 요청에서 찾은
//! 세션 쿠키 정보를 표현합니다.

use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;
use serde_json::Value;

/// 백엔드가 발급한 세션 토큰 묶음
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssuedSession {
    /// 액세스 토큰 (불투명 문자열)
    pub access_token: String,
    /// 리프레시 토큰 (있을 경우)
    pub refresh_token: Option<String>,
    /// 액세스 토큰 수명 (초)
    pub expires_in: Option<i64>,
    /// 사용자 프로필 (있을 경우)
    pub user: Option<Value>,
}

impl IssuedSession {
    /// 백엔드 JSON 응답에서 토큰 묶음을 추출합니다.
    ///
    /// `access_token` 또는 `token`, `refresh_token` 또는 `refresh` 필드를 인식합니다.
    /// 액세스 토큰이 없으면 `None`을 반환합니다.
    pub fn from_json(body: &Value) -> Option<Self> {
        let access_token = non_empty_str(body, &["access_token", "token"])?;

        Some(Self {
            access_token,
            refresh_token: non_empty_str(body, &["refresh_token", "refresh"]),
            expires_in: parse_expires_in(body.get("expires_in")),
            user: body.get("user").filter(|u| !u.is_null()).cloned(),
        })
    }
}

fn non_empty_str(body: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// `expires_in`은 숫자 또는 숫자 문자열일 수 있습니다. 0 이하는 무시합니다.
pub fn parse_expires_in(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .filter(|secs| *secs > 0)
}

/// 세션 가드가 요청에서 찾은 세션 자격 증명
///
/// 세션 가드 미들웨어가 Request Extensions 에 저장하며, 핸들러는 추출자로 받습니다.
#[derive(Debug, Clone, Default)]
pub struct SessionCredentials {
    /// `ss_jwt` 쿠키 값
    pub access_token: Option<String>,
    /// 인증 라이브러리 세션 토큰 쿠키가 있는지 여부
    pub has_library_session: bool,
    /// 브라우저가 보낸 원본 `Cookie` 헤더 (인증 라이브러리 호출 시 전달)
    pub cookie_header: Option<String>,
}

impl SessionCredentials {
    /// 액세스 토큰 또는 인증 라이브러리 세션 쿠키 중 하나라도 있는지 여부
    pub fn is_present(&self) -> bool {
        self.access_token.is_some() || self.has_library_session
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for SessionCredentials {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<SessionCredentials>() {
            Some(credentials) => ready(Ok(credentials.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_issued_session_from_backend_response() {
        let body = json!({
            "access_token": "a1",
            "refresh_token": "r1",
            "expires_in": 1800,
            "user": {"id": "u1", "email": "ada@synth.example"}
        });
        let session = IssuedSession::from_json(&body).unwrap();

        assert_eq!(session.access_token, "a1");
        assert_eq!(session.refresh_token.as_deref(), Some("r1"));
        assert_eq!(session.expires_in, Some(1800));
        assert_eq!(session.user.unwrap()["id"], "u1");
    }

    #[test]
    fn test_issued_session_aliases() {
        let body = json!({"token": "a2", "refresh": "r2", "expires_in": "900"});
        let session = IssuedSession::from_json(&body).unwrap();

        assert_eq!(session.access_token, "a2");
        assert_eq!(session.refresh_token.as_deref(), Some("r2"));
        assert_eq!(session.expires_in, Some(900));
        assert!(session.user.is_none());
    }

    #[test]
    fn test_issued_session_requires_access_token() {
        assert!(IssuedSession::from_json(&json!({"refresh_token": "r"})).is_none());
        assert!(IssuedSession::from_json(&json!({"access_token": "  "})).is_none());
    }

    #[test]
    fn test_cookie_header_alone_is_not_a_session() {
        let credentials = SessionCredentials {
            cookie_header: Some("theme=dark".to_string()),
            ..Default::default()
        };
        assert!(!credentials.is_present());

        let credentials = SessionCredentials {
            has_library_session: true,
            ..credentials
        };
        assert!(credentials.is_present());
    }

    #[test]
    fn test_parse_expires_in_rejects_non_positive() {
        assert_eq!(parse_expires_in(Some(&json!(0))), None);
        assert_eq!(parse_expires_in(Some(&json!(-5))), None);
        assert_eq!(parse_expires_in(Some(&json!("abc"))), None);
        assert_eq!(parse_expires_in(None), None);
    }
}
