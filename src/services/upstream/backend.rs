//! 백엔드 API 클라이언트
//!
//! 모든 백엔드 호출에 공통 헤더(`X-Proxy-Secret`, `X-Request-Id`)를 붙이고
//! 경로를 기본 URL에 이어 붙입니다.

use std::sync::Arc;

use actix_web::http::Method;
use serde_json::Value;
use uuid::Uuid;

use crate::core::errors::AppResult;
use crate::domain::models::upstream::{UpstreamRequest, UpstreamResponse};
use crate::services::upstream::transport::HttpTransport;

pub const PROXY_SECRET_HEADER: &str = "X-Proxy-Secret";
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

#[derive(Clone)]
pub struct BackendService {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    proxy_secret: Option<String>,
}

impl BackendService {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: impl Into<String>,
        proxy_secret: Option<String>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            proxy_secret,
        }
    }

    /// 백엔드 절대 URL. `path_and_query`는 `/`로 시작해야 합니다.
    pub fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    /// 공통 헤더를 붙여 요청을 보냅니다.
    pub async fn send(&self, request: UpstreamRequest) -> AppResult<UpstreamResponse> {
        let mut request = request.header(REQUEST_ID_HEADER, Uuid::new_v4().to_string());
        if let Some(secret) = &self.proxy_secret {
            request = request.header(PROXY_SECRET_HEADER, secret.clone());
        }
        self.transport.send(request).await
    }

    /// JSON 본문으로 POST
    pub async fn post_json(
        &self,
        path: &str,
        body: &Value,
        bearer: Option<&str>,
    ) -> AppResult<UpstreamResponse> {
        let mut request = UpstreamRequest::new(Method::POST, self.url(path)).json(body);
        if let Some(token) = bearer {
            request = request.bearer(token);
        }
        self.send(request).await
    }

    /// JSON 을 기대하는 GET
    pub async fn get(&self, path: &str, bearer: Option<&str>) -> AppResult<UpstreamResponse> {
        let mut request = UpstreamRequest::new(Method::GET, self.url(path))
            .header("Accept", "application/json");
        if let Some(token) = bearer {
            request = request.bearer(token);
        }
        self.send(request).await
    }
}
