//! # Authentication Configuration Module
//!
//! 세션 쿠키, 외부 인증 라이브러리(better-auth), OAuth 프로바이더 등
//! 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### 쿠키 설정
//! ```bash
//! export COOKIE_DOMAIN=".synth.example"     # 선택, 서브도메인 간 공유 시
//! export ACCESS_COOKIE_MAX_AGE_SECS="1800"  # OAuth/refresh 로 발급된 ss_jwt
//! export LOGIN_COOKIE_MAX_AGE_SECS="604800" # 로그인으로 발급된 ss_jwt
//! export REFRESH_COOKIE_MAX_AGE_SECS="604800"
//! ```
//!
//! ### 인증 라이브러리
//! ```bash
//! export BETTER_AUTH_URL="https://app.synth.example"
//! ```
//!
//! ### OAuth 프로바이더
//! ```bash
//! export GOOGLE_CLIENT_ID="..."
//! export GOOGLE_CLIENT_SECRET="..."
//! export GITHUB_CLIENT_ID="..."
//! export GITHUB_CLIENT_SECRET="..."
//! ```

use std::env;
use crate::config::data_config::Environment;

/// 액세스 토큰 쿠키 이름
pub const ACCESS_TOKEN_COOKIE: &str = "ss_jwt";

/// 리프레시 토큰 쿠키 이름
pub const REFRESH_TOKEN_COOKIE: &str = "ss_refresh";

/// 인증 라이브러리가 관리하는 세션 토큰 쿠키 (개발/`__Secure-` 변형)
pub const AUTH_LIBRARY_SESSION_COOKIES: [&str; 2] = [
    "better-auth.session_token",
    "__Secure-better-auth.session_token",
];

/// 인증 라이브러리가 관리하는 모든 쿠키 이름 변형
pub const AUTH_LIBRARY_COOKIES: [&str; 4] = [
    "better-auth.session_token",
    "__Secure-better-auth.session_token",
    "better-auth.session_data",
    "__Secure-better-auth.session_data",
];

/// 세션 쿠키 설정
///
/// 모든 쿠키는 `HttpOnly`, `SameSite=Lax`, `Path=/`로 발급되며,
/// `Secure` 속성은 프로덕션 환경에서만 적용됩니다.
pub struct CookieConfig;

impl CookieConfig {
    /// `Secure` 속성 적용 여부
    ///
    /// `COOKIE_SECURE` 환경 변수로 명시적으로 지정할 수 있으며,
    /// 지정되지 않은 경우 현재 환경이 프로덕션인지로 결정합니다.
    pub fn secure() -> bool {
        match env::var("COOKIE_SECURE") {
            Ok(raw) => matches!(raw.to_lowercase().as_str(), "1" | "true" | "yes"),
            Err(_) => Environment::current().is_production(),
        }
    }

    /// 쿠키 도메인 (선택)
    pub fn domain() -> Option<String> {
        env::var("COOKIE_DOMAIN").ok().filter(|d| !d.trim().is_empty())
    }

    /// OAuth 완료 및 토큰 갱신 시 발급되는 액세스 토큰 쿠키의 기본 수명 (초)
    ///
    /// 백엔드가 `expires_in`을 주지 않은 경우에 사용됩니다. 기본값: 1800초 (30분)
    pub fn access_max_age_secs() -> i64 {
        read_seconds("ACCESS_COOKIE_MAX_AGE_SECS", 30 * 60)
    }

    /// 로그인 시 발급되는 액세스 토큰 쿠키의 수명 (초). 기본값: 7일
    pub fn login_max_age_secs() -> i64 {
        read_seconds("LOGIN_COOKIE_MAX_AGE_SECS", 7 * 24 * 60 * 60)
    }

    /// 리프레시 토큰 쿠키의 수명 (초). 기본값: 7일
    pub fn refresh_max_age_secs() -> i64 {
        read_seconds("REFRESH_COOKIE_MAX_AGE_SECS", 7 * 24 * 60 * 60)
    }
}

fn read_seconds(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}

/// 외부 인증 라이브러리(better-auth) 설정
///
/// 세션 레코드와 2단계 인증 상태는 인증 라이브러리가 단독으로 관리하며,
/// 게이트웨이는 HTTP API만 호출합니다.
pub struct BetterAuthConfig;

impl BetterAuthConfig {
    /// 인증 라이브러리 기본 URL
    pub fn url() -> String {
        env::var("BETTER_AUTH_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
    }

    /// 인증 라이브러리 프로세스 전용 설정이 존재하는지 확인합니다.
    ///
    /// `BETTER_AUTH_SECRET`, `DATABASE_URL`은 게이트웨이가 직접 사용하지 않으며,
    /// 시작 시 존재 여부만 보고합니다. 값은 절대 로그에 남기지 않습니다.
    pub fn library_env_status() -> Vec<(&'static str, bool)> {
        ["BETTER_AUTH_SECRET", "DATABASE_URL"]
            .into_iter()
            .map(|key| (key, env::var(key).map(|v| !v.is_empty()).unwrap_or(false)))
            .collect()
    }
}

/// 지원하는 OAuth 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Google OAuth 2.0
    Google,
    /// GitHub OAuth
    GitHub,
}

impl AuthProvider {
    /// 모든 프로바이더 목록
    pub const ALL: [AuthProvider; 2] = [AuthProvider::Google, AuthProvider::GitHub];

    /// 문자열에서 AuthProvider를 생성합니다. (대소문자 무관)
    ///
    /// ```rust,ignore
    /// let provider = AuthProvider::from_str("google")?;
    /// assert_eq!(provider, AuthProvider::Google);
    /// ```
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "google" => Ok(AuthProvider::Google),
            "github" => Ok(AuthProvider::GitHub),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    /// AuthProvider를 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
            AuthProvider::GitHub => "github",
        }
    }

    /// 클라이언트 ID/Secret 환경 변수 이름 쌍
    fn env_keys(&self) -> (&'static str, &'static str) {
        match self {
            AuthProvider::Google => ("GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET"),
            AuthProvider::GitHub => ("GITHUB_CLIENT_ID", "GITHUB_CLIENT_SECRET"),
        }
    }
}

/// OAuth 프로바이더 설정
pub struct OAuthConfig;

impl OAuthConfig {
    /// 클라이언트 ID와 Secret이 모두 설정된 프로바이더 목록
    ///
    /// Client Secret 값은 존재 여부만 확인하며 어디에도 노출하지 않습니다.
    pub fn enabled_providers() -> Vec<AuthProvider> {
        AuthProvider::ALL
            .into_iter()
            .filter(|provider| {
                let (id_key, secret_key) = provider.env_keys();
                let present = |key: &str| env::var(key).map(|v| !v.trim().is_empty()).unwrap_or(false);
                present(id_key) && present(secret_key)
            })
            .collect()
    }
}
