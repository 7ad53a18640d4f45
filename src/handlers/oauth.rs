//! OAuth 완료 흐름
//!
//! 1. `GET /api/auth/oauth/{provider}` 가 백엔드의 프로바이더 로그인으로 보냄
//! 2. 백엔드가 콜백 처리 후 `/auth/oauth/complete#token=...` 으로 되돌려 보냄
//! 3. 완료 페이지 스크립트가 해시를 지운 뒤 토큰을 `POST /api/auth/session` 본문으로 제출
//! 4. 게이트웨이가 토큰을 검증하고 HTTP-only 쿠키로 옮김
//!
//! 토큰은 URL 해시에만 잠시 존재하며 쿼리 문자열이나 서버 로그에 남지 않습니다.

use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::config::auth_config::AuthProvider;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::auth::request::SessionEstablishRequest;
use crate::domain::models::session::parse_expires_in;
use crate::handlers::reply::{cleared_on_unauthorized, error_with_cookies};
use crate::state::AppState;
use crate::utils::redirect::{escape_html_attr, sanitize_redirect, with_query, DEFAULT_AFTER_LOGIN};

const COMPLETE_PAGE: &str = include_str!("oauth_complete.html");
const NEXT_PLACEHOLDER: &str = "{{NEXT}}";

#[derive(Debug, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

/// 완료 페이지 HTML. 이동 경로는 정제 후 `data-next` 속성으로 삽입됩니다.
pub fn render_complete_page(next: Option<&str>) -> String {
    let next = sanitize_redirect(next, DEFAULT_AFTER_LOGIN);
    COMPLETE_PAGE.replace(NEXT_PLACEHOLDER, &escape_html_attr(&next))
}

#[get("/auth/oauth/complete")]
pub async fn complete_page(query: web::Query<NextQuery>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .insert_header(("Referrer-Policy", "no-referrer"))
        .body(render_complete_page(query.next.as_deref()))
}

/// 완료 페이지가 넘긴 토큰을 검증하고 세션 쿠키로 옮깁니다.
#[post("/session")]
pub async fn establish_session(
    state: web::Data<AppState>,
    payload: web::Json<SessionEstablishRequest>,
) -> HttpResponse {
    let request = payload.into_inner();
    if let Err(errors) = request.validate() {
        return error_with_cookies(&AppError::from(errors), Vec::new());
    }

    match state.credentials.fetch_profile(&request.token).await {
        Ok(user) => {
            let expires_in = parse_expires_in(request.expires_in.as_ref());
            let mut builder = HttpResponse::Ok();
            builder.cookie(state.cookies.session_access_token(&request.token, expires_in));
            if let Some(refresh) = &request.refresh {
                builder.cookie(state.cookies.refresh_token(refresh));
            }
            log::info!("✅ OAuth 세션 설정 완료");
            builder.json(json!({ "user": user }))
        }
        Err(err) => {
            let cookies = cleared_on_unauthorized(&err, || state.cookies.clear_tokens());
            error_with_cookies(&err, cookies)
        }
    }
}

/// 로그인 화면에 표시할 OAuth 프로바이더 목록
#[get("/providers")]
pub async fn providers(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "providers": state.settings.oauth_providers }))
}

/// 백엔드의 프로바이더 로그인으로 리다이렉트합니다.
#[get("/oauth/{provider}")]
pub async fn start(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<NextQuery>,
) -> AppResult<HttpResponse> {
    let provider = AuthProvider::from_str(&path)
        .ok()
        .filter(|p| state.settings.oauth_providers.contains(p))
        .ok_or_else(|| AppError::NotFound(format!("Unknown OAuth provider: {}", path)))?;

    let complete_url = match query.next.as_deref() {
        Some(next) => with_query(
            &state.settings.oauth_complete_url(),
            &[("next", sanitize_redirect(Some(next), DEFAULT_AFTER_LOGIN).as_str())],
        ),
        None => state.settings.oauth_complete_url(),
    };
    let login_path = with_query(
        &format!("/auth/oauth/{}/login", provider.as_str()),
        &[("redirect_uri", complete_url.as_str())],
    );

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, state.backend.url(&login_path)))
        .finish())
}
