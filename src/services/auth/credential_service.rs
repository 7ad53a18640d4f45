//! # 자격 증명 서비스
//!
//! 이메일/비밀번호 로그인, 회원가입, 토큰 검증/갱신, 이메일 인증 등
//! 백엔드 API 의 `/auth/*` 엔드포인트 호출을 담당합니다.
//!
//! 회원가입은 백엔드에만 기록하며 인증 라이브러리에는 계정을 만들지 않습니다.

use serde_json::{json, Value};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::auth::request::{
    LoginCredentials, RegistrationCredentials, VerificationResendRequest, VerifyEmailRequest,
};
use crate::domain::models::session::IssuedSession;
use crate::domain::models::upstream::UpstreamResponse;
use crate::services::upstream::backend::BackendService;

pub const LOGIN_FAILED: &str = "Invalid email or password";
pub const ACCOUNT_EXISTS: &str = "An account with this email already exists";
pub const SESSION_INVALID: &str = "Invalid or expired session";

#[derive(Clone)]
pub struct CredentialService {
    backend: BackendService,
}

impl CredentialService {
    pub fn new(backend: BackendService) -> Self {
        Self { backend }
    }

    /// 실패 응답을 상태 코드를 유지한 에러로 변환합니다.
    fn upstream_failure(response: &UpstreamResponse, fallback: &str) -> AppError {
        let message = response.error_message(fallback);
        match response.status {
            401 => AppError::AuthenticationError(message),
            409 => AppError::ConflictError(message),
            status => AppError::UpstreamError { status, message },
        }
    }

    fn issued_session(response: &UpstreamResponse) -> AppResult<IssuedSession> {
        response
            .json()
            .as_ref()
            .and_then(IssuedSession::from_json)
            .ok_or_else(|| {
                AppError::ExternalServiceError("인증 응답에 액세스 토큰이 없습니다".to_string())
            })
    }

    /// 이메일/비밀번호(+OTP) 로그인
    pub async fn login(&self, credentials: &LoginCredentials) -> AppResult<IssuedSession> {
        let response = self
            .backend
            .post_json("/auth/login", &credentials.to_backend_body(), None)
            .await?;

        if !response.is_success() {
            log::info!("로그인 거부됨: status={}", response.status);
            return Err(Self::upstream_failure(&response, LOGIN_FAILED));
        }
        Self::issued_session(&response)
    }

    /// 회원가입
    ///
    /// 이메일 인증이 필요한 경우 백엔드는 토큰 없이 성공을 반환하며, 이때 `None`.
    pub async fn register(
        &self,
        credentials: &RegistrationCredentials,
    ) -> AppResult<Option<IssuedSession>> {
        let response = self
            .backend
            .post_json("/auth/register", &credentials.to_backend_body(), None)
            .await?;

        if response.status == 409 {
            return Err(AppError::ConflictError(response.error_message(ACCOUNT_EXISTS)));
        }
        if !response.is_success() {
            return Err(Self::upstream_failure(&response, "Registration failed"));
        }

        Ok(response.json().as_ref().and_then(IssuedSession::from_json))
    }

    /// 액세스 토큰을 검증하고 사용자 프로필을 반환합니다.
    ///
    /// 백엔드가 성공 이외의 응답을 주면 모두 인증 실패로 처리합니다.
    pub async fn fetch_profile(&self, access_token: &str) -> AppResult<Value> {
        let response = self.backend.get("/auth/me", Some(access_token)).await?;

        if !response.is_success() {
            log::info!("토큰 검증 실패: status={}", response.status);
            return Err(AppError::AuthenticationError(SESSION_INVALID.to_string()));
        }
        Ok(response.json().unwrap_or(Value::Null))
    }

    /// 리프레시 토큰으로 새 액세스 토큰을 발급받습니다.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<IssuedSession> {
        let response = self
            .backend
            .post_json("/auth/refresh-session", &json!({ "refresh_token": refresh_token }), None)
            .await?;

        if !response.is_success() {
            return Err(Self::upstream_failure(&response, SESSION_INVALID));
        }
        Self::issued_session(&response)
    }

    pub async fn verify_email(&self, request: &VerifyEmailRequest) -> AppResult<Value> {
        let response = self
            .backend
            .post_json("/auth/verify-email", &json!({ "token": request.token }), None)
            .await?;
        Self::relay_json(response, "Email verification failed")
    }

    /// 인증 메일을 다시 보냅니다.
    pub async fn request_verification(&self, request: &VerificationResendRequest) -> AppResult<Value> {
        let response = self
            .backend
            .post_json("/auth/verify-email/request", &json!({ "email": request.email }), None)
            .await?;
        Self::relay_json(response, "Could not send verification email")
    }

    fn relay_json(response: UpstreamResponse, fallback: &str) -> AppResult<Value> {
        if response.is_success() {
            Ok(response.json().unwrap_or_else(|| json!({ "ok": true })))
        } else {
            Err(Self::upstream_failure(&response, fallback))
        }
    }
}
