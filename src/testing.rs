//! 테스트 지원 도구
//!
//! 실제 네트워크 대신 응답을 미리 적재해 두고, 보낸 요청을 기록하는 전송 계층입니다.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use actix_web::web::{self, Bytes};
use async_trait::async_trait;
use serde_json::Value;

use crate::config::auth_config::AuthProvider;
use crate::config::settings::{CookieSettings, GatewaySettings};
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::upstream::{UpstreamRequest, UpstreamResponse};
use crate::services::upstream::HttpTransport;
use crate::state::AppState;

#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<UpstreamRequest>>,
    responses: Mutex<VecDeque<AppResult<UpstreamResponse>>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_json(status: u16, body: Value) -> Arc<Self> {
        let transport = Self::new();
        transport.push_json(status, body);
        transport
    }

    pub fn with_status(status: u16) -> Arc<Self> {
        let transport = Self::new();
        transport.push(UpstreamResponse { status, headers: Vec::new(), body: Bytes::new() });
        transport
    }

    /// 연결 실패를 흉내냅니다.
    pub fn unreachable() -> Arc<Self> {
        let transport = Self::new();
        transport.push_error();
        transport
    }

    pub fn push(&self, response: UpstreamResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push(UpstreamResponse {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Bytes::from(body.to_string()),
        });
    }

    pub fn push_error(&self) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(AppError::ExternalServiceError("connection refused".to_string())));
    }

    pub fn requests(&self) -> Vec<UpstreamRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> UpstreamRequest {
        self.requests().pop().expect("no upstream request was sent")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: UpstreamRequest) -> AppResult<UpstreamResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(UpstreamResponse { status: 200, headers: Vec::new(), body: Bytes::new() })
        })
    }
}

pub fn test_settings() -> GatewaySettings {
    GatewaySettings {
        api_base_url: "http://backend.test".to_string(),
        proxy_secret: None,
        auth_library_url: "http://auth.test".to_string(),
        public_app_url: "http://app.test".to_string(),
        oauth_providers: vec![AuthProvider::Google],
        cookies: CookieSettings {
            secure: false,
            domain: None,
            access_max_age_secs: 1800,
            login_max_age_secs: 604800,
            refresh_max_age_secs: 604800,
        },
    }
}

pub fn test_state(transport: Arc<RecordingTransport>) -> web::Data<AppState> {
    web::Data::new(AppState::new(test_settings(), transport))
}

/// 응답의 모든 `Set-Cookie` 헤더 값
pub fn set_cookie_headers<B>(response: &actix_web::dev::ServiceResponse<B>) -> Vec<String> {
    response
        .headers()
        .get_all(actix_web::http::header::SET_COOKIE)
        .filter_map(|value| value.to_str().ok().map(str::to_string))
        .collect()
}

/// 해당 이름의 쿠키를 삭제하는 `Set-Cookie` 가 있는지
pub fn clears_cookie(headers: &[String], name: &str) -> bool {
    headers
        .iter()
        .any(|h| h.starts_with(&format!("{}=;", name)) && h.contains("Max-Age=0"))
}
