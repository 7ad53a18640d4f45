//! 로그인 / 회원가입 / 이메일 인증 핸들러
//!
//! 로그인과 회원가입은 브라우저 폼과 XHR 양쪽에서 호출됩니다.
//! 폼 제출에는 303 리다이렉트로, XHR 에는 JSON 으로 응답합니다.

use actix_web::cookie::Cookie;
use actix_web::{post, web, Either, HttpRequest, HttpResponse};
use serde_json::{json, Value};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::auth::request::{
    LoginForm, RegisterForm, VerificationResendRequest, VerifyEmailRequest,
};
use crate::domain::models::session::IssuedSession;
use crate::handlers::reply::{cleared_on_unauthorized, error_with_cookies, is_xhr, see_other, with_cookies};
use crate::state::AppState;
use crate::utils::redirect::{sanitize_redirect, with_query, DEFAULT_AFTER_LOGIN};
use crate::utils::upstream_message::{is_email_not_verified, is_otp_required};

/// 폼 또는 JSON 본문
pub type FormOrJson<T> = Either<web::Json<T>, web::Form<T>>;

fn into_inner<T>(body: FormOrJson<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

/// 로그인/회원가입 성공 시 발급할 쿠키
fn session_cookies(state: &AppState, session: &IssuedSession) -> Vec<Cookie<'static>> {
    let mut cookies = vec![state.cookies.login_access_token(&session.access_token)];
    if let Some(refresh) = &session.refresh_token {
        cookies.push(state.cookies.refresh_token(refresh));
    }
    cookies
}

fn signed_in(xhr: bool, state: &AppState, session: &IssuedSession, target: &str) -> HttpResponse {
    let cookies = session_cookies(state, session);
    if !xhr {
        return see_other(target, cookies);
    }

    let mut builder = HttpResponse::Ok();
    with_cookies(&mut builder, cookies);
    builder.json(json!({
        "ok": true,
        "redirect": target,
        "user": session.user.clone().unwrap_or(Value::Null),
    }))
}

/// 인증 실패 응답
///
/// 폼 제출은 `page?error=<message>` 로 되돌려 보내고, 이메일 미인증 및 2FA 필요 여부를 쿼리에 표시합니다.
/// `cookies`는 양쪽 응답 모두에 붙습니다.
fn rejected(
    xhr: bool,
    page: &str,
    err: &AppError,
    email: Option<&str>,
    target: &str,
    cookies: Vec<Cookie<'static>>,
) -> HttpResponse {
    let message = err.public_message();
    let unverified = is_email_not_verified(&message);
    let requires_otp = is_otp_required(&message);

    if xhr {
        let mut body = json!({ "error": message });
        if unverified {
            body["unverified"] = json!(true);
            body["email"] = json!(email);
        }
        if requires_otp {
            body["requires_otp"] = json!(true);
        }
        if err.status().is_server_error() {
            log::error!("❌ 인증 요청 처리 실패: {}", err);
        }
        let mut builder = HttpResponse::build(err.status());
        with_cookies(&mut builder, cookies);
        return builder.json(body);
    }

    let mut params = vec![("error", message.as_str())];
    if unverified {
        params.push(("unverified", "1"));
    }
    if requires_otp {
        params.push(("otp", "1"));
    }
    if unverified || requires_otp {
        params.push(("email", email.unwrap_or_default()));
    }
    if target != DEFAULT_AFTER_LOGIN {
        params.push(("next", target));
    }
    see_other(&with_query(page, &params), cookies)
}

/// 백엔드가 401 을 주면 `ss_jwt` 를 지웁니다.
fn upstream_cookies(state: &AppState, err: &AppError) -> Vec<Cookie<'static>> {
    cleared_on_unauthorized(err, || state.cookies.clear_access())
}

#[post("/login")]
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: FormOrJson<LoginForm>,
) -> HttpResponse {
    let form = into_inner(body);
    let xhr = is_xhr(&req);
    let target = sanitize_redirect(form.redirect.as_deref(), DEFAULT_AFTER_LOGIN);

    let credentials = match form.credentials() {
        Ok(credentials) => credentials,
        Err(err) => return rejected(xhr, "/login", &err, form.email.as_deref(), &target, Vec::new()),
    };

    match state.credentials.login(&credentials).await {
        Ok(session) => {
            log::info!("✅ 로그인 성공: {}", credentials.email);
            signed_in(xhr, &state, &session, &target)
        }
        Err(err) => {
            let cookies = upstream_cookies(&state, &err);
            rejected(xhr, "/login", &err, Some(&credentials.email), &target, cookies)
        }
    }
}

#[post("/register")]
pub async fn register(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: FormOrJson<RegisterForm>,
) -> HttpResponse {
    let form = into_inner(body);
    let xhr = is_xhr(&req);
    let target = sanitize_redirect(form.redirect.as_deref(), DEFAULT_AFTER_LOGIN);

    let credentials = match form.credentials() {
        Ok(credentials) => credentials,
        Err(err) => return rejected(xhr, "/register", &err, form.email.as_deref(), &target, Vec::new()),
    };

    match state.credentials.register(&credentials).await {
        Ok(Some(session)) => {
            log::info!("✅ 회원가입 및 로그인: {}", credentials.email);
            signed_in(xhr, &state, &session, &target)
        }
        Ok(None) => {
            log::info!("📧 회원가입 완료, 이메일 인증 대기: {}", credentials.email);
            if xhr {
                HttpResponse::Ok().json(json!({ "ok": true, "verification_required": true }))
            } else {
                let location = with_query(
                    "/login",
                    &[("registered", "1"), ("email", credentials.email.as_str())],
                );
                see_other(&location, Vec::new())
            }
        }
        Err(err) => {
            let cookies = upstream_cookies(&state, &err);
            rejected(xhr, "/register", &err, Some(&credentials.email), &target, cookies)
        }
    }
}

#[post("/verify-email")]
pub async fn verify_email(
    state: web::Data<AppState>,
    payload: web::Json<VerifyEmailRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;
    match state.credentials.verify_email(&payload).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(err) => Ok(error_with_cookies(&err, upstream_cookies(&state, &err))),
    }
}

#[post("/verify-email/request")]
pub async fn request_verification(
    state: web::Data<AppState>,
    payload: web::Json<VerificationResendRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;
    match state.credentials.request_verification(&payload).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(err) => Ok(error_with_cookies(&err, upstream_cookies(&state, &err))),
    }
}
