//! # Gateway Error Handling System
//!
//! 세션 게이트웨이 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! 모든 핸들러는 `AppResult<T>`를 반환하며, 에러는 `actix_web::ResponseError`
//! 구현을 통해 항상 구조화된 JSON 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필수 필드 누락, 형식 오류 |
//! | `AuthenticationError` | 401 Unauthorized | 세션 없음, 토큰 만료 |
//! | `NotFound` | 404 Not Found | 설정되지 않은 OAuth 프로바이더 |
//! | `ConflictError` | 409 Conflict | 중복 회원가입 |
//! | `UpstreamError` | 백엔드 상태 코드 | 백엔드 비즈니스 에러 (`detail`) |
//! | `ExternalServiceError` | 502 Bad Gateway | 백엔드 연결 불가 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 5xx 에러의 상세 내용은 서버 로그에만 기록되고, 클라이언트에는 고정된
//! 메시지만 전달됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn require_password(password: &str) -> AppResult<()> {
//!     if password.trim().is_empty() {
//!         return Err(AppError::ValidationError("Password is required".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;
use validator::ValidationErrors;

/// 백엔드 연결 실패 시 클라이언트에게 노출되는 메시지
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable";

/// 내부 오류 시 클라이언트에게 노출되는 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 게이트웨이 전역 에러 타입
///
/// `Display` 구현은 로그용 전체 메시지를 만들고,
/// [`AppError::public_message`]는 클라이언트에게 보여줄 메시지를 만듭니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 메시지는 폼에 그대로 표시되므로 사용자가 읽을 수 있는 문장이어야 합니다.
    ///
    /// ```rust,ignore
    /// return Err(AppError::ValidationError(
    ///     "Email and password are required".to_string()
    /// ));
    /// ```
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 리소스 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 백엔드가 반환한 비즈니스 에러
    ///
    /// 백엔드의 상태 코드와 `detail` 메시지를 그대로 클라이언트에 전달합니다.
    /// 단, 5xx 상태의 메시지는 로그에만 남습니다.
    #[error("Upstream error ({status}): {message}")]
    UpstreamError { status: u16, message: String },

    /// 백엔드/인증 라이브러리 연결 실패 (502 Bad Gateway)
    ///
    /// 상세 내용은 로그에만 남고 응답에는 [`SERVICE_UNAVAILABLE_MESSAGE`]만 포함됩니다.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::UpstreamError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트에게 노출해도 되는 메시지
    ///
    /// 4xx 계열은 원본 메시지를 그대로, 5xx 계열은 고정 메시지를 반환합니다.
    /// 백엔드가 5xx 로 응답한 `UpstreamError`도 고정 메시지로 바뀝니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg) => msg.clone(),
            AppError::UpstreamError { status, .. } if *status >= 500 => {
                SERVICE_UNAVAILABLE_MESSAGE.to_string()
            }
            AppError::UpstreamError { message, .. } => message.clone(),
            AppError::ExternalServiceError(_) => SERVICE_UNAVAILABLE_MESSAGE.to_string(),
            AppError::InternalError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// 인증 실패(401) 여부
    pub fn is_unauthorized(&self) -> bool {
        self.status() == StatusCode::UNAUTHORIZED
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "..."}` 형식을 따릅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();
        if status.is_server_error() {
            log::error!("❌ 요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.public_message()
            }))
    }
}

/// `validator` 검증 결과를 첫 번째 메시지 기반의 `ValidationError`로 변환합니다.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, errs)| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());
        AppError::ValidationError(message)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let client = reqwest::Client::builder()
///     .build()
///     .context("HTTP 클라이언트 생성 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;

    async fn body_json(error: AppError) -> serde_json::Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Email and password are required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_validation_message_is_surfaced_verbatim() {
        let body = body_json(AppError::ValidationError(
            "Email and password are required".to_string(),
        ))
        .await;

        assert_eq!(body["error"], "Email and password are required");
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Not authenticated".to_string());
        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
        assert!(error.is_unauthorized());
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("An account with this email already exists".to_string());
        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_upstream_error_keeps_backend_status() {
        let error = AppError::UpstreamError {
            status: 403,
            message: "Email not verified".to_string(),
        };
        assert_eq!(error.error_response().status(), StatusCode::FORBIDDEN);
        assert_eq!(error.public_message(), "Email not verified");
    }

    #[actix_web::test]
    async fn test_upstream_server_error_hides_backend_message() {
        let error = AppError::UpstreamError {
            status: 500,
            message: "psycopg2.OperationalError: connection to db-primary failed".to_string(),
        };
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(error).await;
        assert_eq!(body["error"], SERVICE_UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn test_upstream_error_with_invalid_status_maps_to_bad_gateway() {
        let error = AppError::UpstreamError {
            status: 42,
            message: "weird".to_string(),
        };
        assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn test_external_service_error_hides_detail() {
        let error = AppError::ExternalServiceError("connection refused (os error 111)".to_string());
        assert_eq!(error.status(), StatusCode::BAD_GATEWAY);

        let body = body_json(error).await;
        assert_eq!(body["error"], SERVICE_UNAVAILABLE_MESSAGE);
    }

    #[actix_web::test]
    async fn test_internal_error_hides_detail() {
        let body = body_json(AppError::InternalError("poisoned lock".to_string())).await;
        assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
