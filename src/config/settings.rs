//! 게이트웨이 런타임 설정
//!
//! 개별 설정 구조체(`ApiConfig`, `CookieConfig` 등)에서 읽은 값을 시작 시 한 번 모아
//! 불변 구조체로 보관합니다. 핸들러는 환경 변수를 직접 읽지 않고 이 값을 사용합니다.

use crate::config::auth_config::{AuthProvider, BetterAuthConfig, CookieConfig, OAuthConfig};
use crate::config::data_config::{ApiConfig, ServerConfig};

/// 세션 쿠키 발급 정책
#[derive(Debug, Clone)]
pub struct CookieSettings {
    /// `Secure` 속성 적용 여부 (프로덕션에서만 true)
    pub secure: bool,
    /// 쿠키 도메인 (없으면 호스트 전용 쿠키)
    pub domain: Option<String>,
    /// OAuth/refresh 로 발급된 액세스 토큰의 기본 수명 (초)
    pub access_max_age_secs: i64,
    /// 로그인/회원가입으로 발급된 액세스 토큰의 수명 (초)
    pub login_max_age_secs: i64,
    /// 리프레시 토큰의 수명 (초)
    pub refresh_max_age_secs: i64,
}

impl CookieSettings {
    pub fn from_env() -> Self {
        Self {
            secure: CookieConfig::secure(),
            domain: CookieConfig::domain(),
            access_max_age_secs: CookieConfig::access_max_age_secs(),
            login_max_age_secs: CookieConfig::login_max_age_secs(),
            refresh_max_age_secs: CookieConfig::refresh_max_age_secs(),
        }
    }
}

/// 게이트웨이 전체 설정
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// 백엔드 API 기본 URL (끝 `/` 제거됨)
    pub api_base_url: String,
    /// `X-Proxy-Secret` 헤더 값
    pub proxy_secret: Option<String>,
    /// 인증 라이브러리 기본 URL
    pub auth_library_url: String,
    /// 웹 앱 공개 오리진
    pub public_app_url: String,
    /// 활성화된 OAuth 프로바이더
    pub oauth_providers: Vec<AuthProvider>,
    /// 쿠키 정책
    pub cookies: CookieSettings,
}

impl GatewaySettings {
    /// 환경 변수에서 전체 설정을 읽어옵니다.
    pub fn from_env() -> Self {
        let settings = Self {
            api_base_url: ApiConfig::base_url(),
            proxy_secret: ApiConfig::proxy_secret(),
            auth_library_url: BetterAuthConfig::url(),
            public_app_url: ServerConfig::public_app_url(),
            oauth_providers: OAuthConfig::enabled_providers(),
            cookies: CookieSettings::from_env(),
        };

        log::info!(
            "게이트웨이 설정 로드됨: api={}, auth_library={}, secure_cookies={}, proxy_secret={}",
            settings.api_base_url,
            settings.auth_library_url,
            settings.cookies.secure,
            if settings.proxy_secret.is_some() { "set" } else { "unset" },
        );

        settings
    }

    /// OAuth 완료 페이지의 절대 URL
    pub fn oauth_complete_url(&self) -> String {
        format!("{}/auth/oauth/complete", self.public_app_url)
    }
}
