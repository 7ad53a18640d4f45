//! 세션 쿠키 발급/삭제 정책
//!
//! 게이트웨이가 발급하는 모든 쿠키는 `HttpOnly`, `SameSite=Lax`, `Path=/` 이며,
//! `Secure` 는 설정에 따라 (프로덕션에서만) 붙습니다.
//! `__Secure-` 접두사 쿠키는 브라우저가 `Secure` 없이는 덮어쓰지 않으므로 항상 `Secure` 로 삭제합니다.

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, CookieBuilder, SameSite};

use crate::config::auth_config::{ACCESS_TOKEN_COOKIE, AUTH_LIBRARY_COOKIES, REFRESH_TOKEN_COOKIE};
use crate::config::settings::CookieSettings;

#[derive(Debug, Clone)]
pub struct CookiePolicy {
    settings: CookieSettings,
}

impl CookiePolicy {
    pub fn new(settings: CookieSettings) -> Self {
        Self { settings }
    }

    fn builder(&self, name: &str, value: &str, with_domain: bool) -> CookieBuilder<'static> {
        let mut builder = Cookie::build(name.to_string(), value.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.settings.secure || name.starts_with("__Secure-"));

        if with_domain {
            if let Some(domain) = &self.settings.domain {
                builder = builder.domain(domain.clone());
            }
        }
        builder
    }

    /// `ss_jwt` 쿠키
    pub fn access_token(&self, token: &str, max_age_secs: i64) -> Cookie<'static> {
        self.builder(ACCESS_TOKEN_COOKIE, token, true)
            .max_age(Duration::seconds(max_age_secs))
            .finish()
    }

    /// 로그인/회원가입으로 발급된 `ss_jwt`
    pub fn login_access_token(&self, token: &str) -> Cookie<'static> {
        self.access_token(token, self.settings.login_max_age_secs)
    }

    /// OAuth 완료/갱신으로 발급된 `ss_jwt`. 수명은 백엔드의 `expires_in` 을 따릅니다.
    pub fn session_access_token(&self, token: &str, expires_in: Option<i64>) -> Cookie<'static> {
        let max_age = expires_in
            .filter(|secs| *secs > 0)
            .unwrap_or(self.settings.access_max_age_secs);
        self.access_token(token, max_age)
    }

    /// `ss_refresh` 쿠키
    pub fn refresh_token(&self, token: &str) -> Cookie<'static> {
        self.builder(REFRESH_TOKEN_COOKIE, token, true)
            .max_age(Duration::seconds(self.settings.refresh_max_age_secs))
            .finish()
    }

    /// 쿠키 삭제용 `Set-Cookie`
    ///
    /// 게이트웨이 쿠키(`ss_*`)는 발급 시와 같은 도메인으로 지우고,
    /// 인증 라이브러리 쿠키는 호스트 전용으로 지웁니다.
    pub fn removal(&self, name: &str) -> Cookie<'static> {
        let with_domain = name == ACCESS_TOKEN_COOKIE || name == REFRESH_TOKEN_COOKIE;
        let mut cookie = self.builder(name, "", with_domain).finish();
        cookie.make_removal();
        cookie
    }

    /// `ss_jwt` 만 삭제 (업스트림 401)
    pub fn clear_access(&self) -> Vec<Cookie<'static>> {
        vec![self.removal(ACCESS_TOKEN_COOKIE)]
    }

    /// 게이트웨이 토큰 쿠키 삭제 (`ss_jwt`, `ss_refresh`)
    pub fn clear_tokens(&self) -> Vec<Cookie<'static>> {
        vec![self.removal(ACCESS_TOKEN_COOKIE), self.removal(REFRESH_TOKEN_COOKIE)]
    }

    /// 모든 세션 쿠키 삭제 (로그아웃)
    pub fn clear_all(&self) -> Vec<Cookie<'static>> {
        let mut cookies = self.clear_tokens();
        cookies.extend(AUTH_LIBRARY_COOKIES.iter().map(|name| self.removal(name)));
        cookies
    }
}
