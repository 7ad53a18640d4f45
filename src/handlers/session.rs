//! 세션 갱신 / 로그아웃

use actix_web::{post, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::config::auth_config::REFRESH_TOKEN_COOKIE;
use crate::core::errors::AppError;
use crate::handlers::reply::{cleared_on_unauthorized, error_with_cookies, is_xhr, see_other, with_cookies};
use crate::middlewares::session_credentials;
use crate::state::AppState;
use crate::utils::string_utils::non_blank;

/// `ss_refresh` 로 액세스 토큰을 재발급합니다.
#[post("/refresh")]
pub async fn refresh(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let refresh_token = req
        .cookie(REFRESH_TOKEN_COOKIE)
        .and_then(|c| non_blank(Some(c.value())).map(str::to_string));

    let Some(refresh_token) = refresh_token else {
        let err = AppError::AuthenticationError("No refresh token".to_string());
        return error_with_cookies(&err, state.cookies.clear_access());
    };

    match state.credentials.refresh(&refresh_token).await {
        Ok(session) => {
            let mut builder = HttpResponse::Ok();
            builder.cookie(
                state
                    .cookies
                    .session_access_token(&session.access_token, session.expires_in),
            );
            // 백엔드가 리프레시 토큰을 회전시킨 경우에만 교체
            if let Some(rotated) = &session.refresh_token {
                builder.cookie(state.cookies.refresh_token(rotated));
            }
            builder.json(json!({
                "ok": true,
                "expires_in": session
                    .expires_in
                    .unwrap_or(state.settings.cookies.access_max_age_secs),
            }))
        }
        Err(err) => {
            log::info!("세션 갱신 실패: {}", err);
            let cookies = cleared_on_unauthorized(&err, || state.cookies.clear_tokens());
            error_with_cookies(&err, cookies)
        }
    }
}

/// 인증 라이브러리 세션을 종료하고 모든 세션 쿠키를 지웁니다.
///
/// 업스트림 로그아웃이 실패해도 쿠키는 항상 지웁니다.
#[post("/logout")]
pub async fn logout(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let credentials = session_credentials(&req);

    if let Err(err) = state.auth_library.sign_out(credentials.cookie_header.as_deref()).await {
        log::warn!("⚠️ 인증 라이브러리 로그아웃 실패, 쿠키는 삭제함: {}", err);
    }

    let cookies = state.cookies.clear_all();
    if !is_xhr(&req) {
        return see_other("/login", cookies);
    }

    let mut builder = HttpResponse::Ok();
    with_cookies(&mut builder, cookies);
    builder.json(json!({ "ok": true }))
}
