//! # 인증 라이브러리(better-auth) 클라이언트
//!
//! 세션 레코드와 2단계 인증 상태는 인증 라이브러리가 단독으로 소유합니다.
//! 게이트웨이는 브라우저가 보낸 `Cookie` 헤더를 그대로 전달하여
//! 해당 사용자의 세션으로 HTTP API 를 호출할 뿐, 저장소에 직접 접근하지 않습니다.
//!
//! | 동작 | 엔드포인트 |
//! |------|------------|
//! | 로그아웃 | `POST /api/auth/sign-out` |
//! | 2FA 설정 시작 | `POST /api/auth/two-factor/enable` |
//! | 2FA 코드 확인 | `POST /api/auth/two-factor/verify-totp` |
//! | 2FA 해제 | `POST /api/auth/two-factor/disable` |

use std::sync::Arc;

use actix_web::http::Method;
use serde_json::{json, Value};

use crate::core::errors::{AppError, AppResult};
use crate::domain::models::upstream::{UpstreamRequest, UpstreamResponse};
use crate::services::upstream::transport::HttpTransport;

#[derive(Clone)]
pub struct AuthLibraryService {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    /// 인증 라이브러리의 CSRF 검사를 통과하기 위한 `Origin` 값
    origin: String,
}

impl AuthLibraryService {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            origin: origin.into(),
        }
    }

    async fn post(
        &self,
        path: &str,
        body: &Value,
        cookie_header: Option<&str>,
    ) -> AppResult<UpstreamResponse> {
        let mut request = UpstreamRequest::new(Method::POST, format!("{}{}", self.base_url, path))
            .json(body)
            .header("Origin", self.origin.clone());
        if let Some(cookies) = cookie_header {
            request = request.header("Cookie", cookies);
        }
        self.transport.send(request).await
    }

    /// 성공 응답의 JSON 본문을 반환하고, 실패 응답은 상태 코드를 유지한 에러로 변환합니다.
    fn into_json(response: UpstreamResponse, fallback: &str) -> AppResult<Value> {
        if response.is_success() {
            return Ok(response.json().unwrap_or_else(|| json!({ "ok": true })));
        }

        let message = response.error_message(fallback);
        if response.is_unauthorized() {
            return Err(AppError::AuthenticationError(message));
        }
        Err(AppError::UpstreamError { status: response.status, message })
    }

    /// 인증 라이브러리 세션을 종료합니다.
    pub async fn sign_out(&self, cookie_header: Option<&str>) -> AppResult<()> {
        let response = self.post("/api/auth/sign-out", &json!({}), cookie_header).await?;
        Self::into_json(response, "Sign-out failed").map(|_| ())
    }

    /// TOTP 등록을 시작합니다. 응답에는 `totpURI`와 백업 코드가 포함됩니다.
    pub async fn enable_two_factor(
        &self,
        password: &str,
        cookie_header: Option<&str>,
    ) -> AppResult<Value> {
        let response = self
            .post("/api/auth/two-factor/enable", &json!({ "password": password }), cookie_header)
            .await?;
        Self::into_json(response, "Could not start two-factor setup")
    }

    /// 인증 앱 코드로 TOTP 등록을 확정합니다.
    pub async fn verify_totp(&self, code: &str, cookie_header: Option<&str>) -> AppResult<Value> {
        let response = self
            .post("/api/auth/two-factor/verify-totp", &json!({ "code": code }), cookie_header)
            .await?;
        Self::into_json(response, "Invalid two-factor code")
    }

    pub async fn disable_two_factor(
        &self,
        password: &str,
        cookie_header: Option<&str>,
    ) -> AppResult<Value> {
        let response = self
            .post("/api/auth/two-factor/disable", &json!({ "password": password }), cookie_header)
            .await?;
        Self::into_json(response, "Could not disable two-factor authentication")
    }
}
