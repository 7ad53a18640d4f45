//! 업스트림 HTTP 전송 계층
//!
//! 핸들러와 서비스는 [`HttpTransport`] 트레이트에만 의존하며,
//! 운영 환경에서는 reqwest 기반 [`ReqwestTransport`]를 주입합니다.

use std::time::Duration;

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::models::upstream::{UpstreamRequest, UpstreamResponse};

/// 업스트림으로 요청 하나를 보내고 응답 전체를 받아오는 전송 계층
///
/// 연결 실패, 타임아웃 등 전송 수준 오류는 [`AppError::ExternalServiceError`]로 반환하고,
/// 4xx/5xx 응답은 오류가 아닌 정상 [`UpstreamResponse`]로 반환합니다.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: UpstreamRequest) -> AppResult<UpstreamResponse>;
}

/// reqwest 기반 전송 계층
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// 클라이언트를 생성합니다.
    ///
    /// 업스트림의 리다이렉트는 따라가지 않고 그대로 브라우저에 중계합니다.
    pub fn new(timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().context("업스트림 HTTP 클라이언트 생성 실패")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: UpstreamRequest) -> AppResult<UpstreamResponse> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| AppError::ValidationError(format!("Unsupported method: {}", e)))?;
        // 쿼리에 토큰이 실릴 수 있으므로 로그에는 경로까지만 남김
        let target = request.url.split('?').next().unwrap_or_default().to_string();

        let mut builder = self.client.request(method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            AppError::ExternalServiceError(format!("{} {} 요청 실패: {}", method, target, e))
        })?;

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());

        let body = response.bytes().await.map_err(|e| {
            AppError::ExternalServiceError(format!("{} {} 응답 본문 수신 실패: {}", method, target, e))
        })?;

        log::debug!("↪ {} {} → {}", method, target, status);

        Ok(UpstreamResponse { status, headers, body })
    }
}

/// 응답 헤더를 문자열 쌍으로 옮깁니다.
///
/// UTF-8 값(한글 쿠키 값 등)도 그대로 유지합니다. UTF-8 이 아닌 값만 버리고 헤더 이름을 경고로 남깁니다.
fn collect_headers(headers: &reqwest::header::HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter_map(|(name, value)| match std::str::from_utf8(value.as_bytes()) {
            Ok(text) => Some((name.as_str().to_string(), text.to_string())),
            Err(_) => {
                log::warn!("업스트림 헤더 값이 UTF-8 이 아니어서 중계하지 않음: {}", name);
                None
            }
        })
        .collect()
}
