//! 서버 및 업스트림 연결 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 백엔드 API 및 인증 라이브러리 주소,
//! CORS 허용 오리진 등의 설정을 관리합니다.

use std::env;
use std::time::Duration;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 쿠키 `Secure` 속성 미적용
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 쿠키 `Secure` 속성 적용
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if env.is_production() {
    ///     log::info!("프로덕션 모드");
    /// }
    /// ```
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));
        Self::from_str(&raw)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 프로덕션 환경 여부
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 웹 앱의 공개 오리진 (OAuth `redirect_uri` 생성에 사용)
    pub fn public_app_url() -> String {
        env::var("PUBLIC_APP_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
    }

    /// CORS 허용 오리진 목록
    ///
    /// `CORS_ALLOWED_ORIGINS`에 쉼표로 구분된 오리진 목록을 지정합니다.
    /// 설정되지 않은 경우 로컬 개발 서버 주소를 허용합니다.
    pub fn cors_allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => parse_origin_list(&raw),
            Err(_) => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

/// 백엔드 API 연결 설정
pub struct ApiConfig;

impl ApiConfig {
    /// 백엔드 API 기본 URL
    ///
    /// `NEXT_PUBLIC_API_URL`을 우선 확인하고, 없으면 `API_BASE_URL`을 사용합니다.
    /// 끝의 `/`는 제거됩니다.
    ///
    /// ```bash
    /// export NEXT_PUBLIC_API_URL="https://api.synth.example"
    /// ```
    pub fn base_url() -> String {
        env::var("NEXT_PUBLIC_API_URL")
            .or_else(|_| env::var("API_BASE_URL"))
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| {
                log::warn!("NEXT_PUBLIC_API_URL not set, using http://localhost:8000");
                "http://localhost:8000".to_string()
            })
    }

    /// 내부 호출용 공유 비밀값 (`X-Proxy-Secret` 헤더)
    ///
    /// 설정되지 않은 경우 헤더를 보내지 않습니다.
    pub fn proxy_secret() -> Option<String> {
        env::var("PROXY_SECRET").ok().filter(|s| !s.trim().is_empty())
    }

    /// 업스트림 요청 타임아웃
    ///
    /// 기본적으로 타임아웃을 두지 않으며, `UPSTREAM_TIMEOUT_SECS`가 설정된 경우에만 적용합니다.
    pub fn upstream_timeout() -> Option<Duration> {
        env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// 프록시가 버퍼링하는 요청 본문의 최대 크기 (바이트)
    ///
    /// 데이터셋 업로드를 받으므로 기본값은 100 MiB 입니다.
    ///
    /// ```bash
    /// export PROXY_MAX_BODY_BYTES="524288000"
    /// ```
    pub fn max_body_bytes() -> usize {
        env::var("PROXY_MAX_BODY_BYTES")
            .ok()
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|bytes| *bytes > 0)
            .unwrap_or(DEFAULT_MAX_BODY_BYTES)
    }
}

pub const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024 * 1024;

/// 쉼표로 구분된 오리진 목록을 파싱합니다.
pub fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_only_production_is_production() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(!Environment::Development.is_production());
    }

    #[test]
    fn test_parse_origin_list() {
        let origins = parse_origin_list(" https://app.synth.example/, ,http://localhost:3000");
        assert_eq!(origins, vec!["https://app.synth.example", "http://localhost:3000"]);
    }

    #[test]
    fn test_body_limit_covers_large_uploads() {
        if env::var("PROXY_MAX_BODY_BYTES").is_err() {
            assert_eq!(ApiConfig::max_body_bytes(), DEFAULT_MAX_BODY_BYTES);
        }
        assert!(DEFAULT_MAX_BODY_BYTES > 256 * 1024);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
