//! 업스트림(백엔드 API, 인증 라이브러리) HTTP 교환 모델
//!
//! actix-web 과 reqwest 는 서로 다른 `http` 크레이트 버전을 사용하므로,
//! 두 세계 사이에서는 문자열/바이트 기반의 중립적인 표현을 주고받습니다.

use actix_web::http::Method;
use actix_web::web::Bytes;
use serde_json::Value;

use crate::utils::upstream_message::extract_error_message;

/// 업스트림으로 보낼 요청
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: Method,
    /// 쿼리 문자열을 포함한 절대 URL
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Bytes>,
}

impl UpstreamRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// 헤더 추가 (빌더 형태)
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// `Authorization: Bearer <token>` 헤더 추가
    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {}", token))
    }

    /// JSON 본문 설정 (`Content-Type` 포함)
    pub fn json(mut self, body: &Value) -> Self {
        self.body = Some(Bytes::from(body.to_string()));
        self.header("Content-Type", "application/json")
            .header("Accept", "application/json")
    }

    /// 원본 바이트 본문 설정
    pub fn body(mut self, body: Bytes) -> Self {
        self.body = Some(body);
        self
    }

    /// 헤더 값 조회 (대소문자 무관, 첫 번째 값)
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// 업스트림에서 받은 응답
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// 헤더 값 조회 (대소문자 무관, 첫 번째 값)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// 모든 `Set-Cookie` 헤더 값
    pub fn set_cookies(&self) -> impl Iterator<Item = &str> {
        self.headers
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case("set-cookie"))
            .map(|(_, value)| value.as_str())
    }

    /// 본문을 JSON 으로 해석합니다. JSON 이 아니면 `None`.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }

    /// 에러 응답에서 사용자에게 보여줄 메시지를 추출합니다.
    pub fn error_message(&self, fallback: &str) -> String {
        self.json()
            .and_then(|value| extract_error_message(&value))
            .unwrap_or_else(|| fallback.to_string())
    }
}
