//! 2단계 인증 설정 / 활성화 / 해제
//!
//! 세션 가드 뒤에 위치하며, 실제 상태 변경은 인증 라이브러리가 수행합니다.
//! 입력 검증(비밀번호 재확인, 6자리 코드)은 업스트림 호출 전에 끝냅니다.

use actix_web::{post, web, HttpResponse};
use serde_json::Value;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::auth::two_factor::{PasswordConfirmation, TwoFactorCodeRequest};
use crate::domain::models::session::SessionCredentials;
use crate::handlers::reply::{cleared_on_unauthorized, error_with_cookies};
use crate::state::AppState;

fn respond(state: &AppState, result: AppResult<Value>) -> HttpResponse {
    match result {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(err) => {
            let cookies = cleared_on_unauthorized(&err, || state.cookies.clear_all());
            error_with_cookies(&err, cookies)
        }
    }
}

fn invalid(errors: validator::ValidationErrors) -> HttpResponse {
    error_with_cookies(&AppError::from(errors), Vec::new())
}

/// TOTP 등록 시작. 응답에는 TOTP URI 와 백업 코드가 포함됩니다.
#[post("/setup")]
pub async fn setup(
    state: web::Data<AppState>,
    credentials: SessionCredentials,
    payload: web::Json<PasswordConfirmation>,
) -> HttpResponse {
    if let Err(errors) = payload.validate() {
        return invalid(errors);
    }

    let result = state
        .auth_library
        .enable_two_factor(&payload.password, credentials.cookie_header.as_deref())
        .await;
    respond(&state, result)
}

#[post("/enable")]
pub async fn enable(
    state: web::Data<AppState>,
    credentials: SessionCredentials,
    payload: web::Json<TwoFactorCodeRequest>,
) -> HttpResponse {
    if let Err(errors) = payload.validate() {
        return invalid(errors);
    }

    let result = state
        .auth_library
        .verify_totp(&payload.code, credentials.cookie_header.as_deref())
        .await;
    if result.is_ok() {
        log::info!("🔐 2단계 인증 활성화됨");
    }
    respond(&state, result)
}

#[post("/disable")]
pub async fn disable(
    state: web::Data<AppState>,
    credentials: SessionCredentials,
    payload: web::Json<PasswordConfirmation>,
) -> HttpResponse {
    if let Err(errors) = payload.validate() {
        return invalid(errors);
    }

    let result = state
        .auth_library
        .disable_two_factor(&payload.password, credentials.cookie_header.as_deref())
        .await;
    if result.is_ok() {
        log::info!("🔓 2단계 인증 해제됨");
    }
    respond(&state, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middlewares::SessionGuard;
    use crate::testing::{clears_cookie, set_cookie_headers, test_state, RecordingTransport};
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;

    macro_rules! two_factor_app {
        ($transport:expr) => {
            test::init_service(
                App::new().app_data(test_state($transport.clone())).service(
                    web::scope("/api/auth/2fa")
                        .wrap(SessionGuard::required())
                        .service(setup)
                        .service(enable)
                        .service(disable),
                ),
            )
            .await
        };
    }

    fn session_cookie() -> Cookie<'static> {
        Cookie::new("better-auth.session_token", "lib")
    }

    #[actix_web::test]
    async fn test_requires_session() {
        let transport = RecordingTransport::new();
        let app = two_factor_app!(transport);

        let req = test::TestRequest::post()
            .uri("/api/auth/2fa/setup")
            .set_json(json!({"password": "hunter22"}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(transport.request_count(), 0);
    }

    #[actix_web::test]
    async fn test_malformed_code_never_reaches_auth_library() {
        let transport = RecordingTransport::new();
        let app = two_factor_app!(transport);

        for code in ["12345", "abcdef", "1234567"] {
            let req = test::TestRequest::post()
                .uri("/api/auth/2fa/enable")
                .cookie(session_cookie())
                .set_json(json!({"code": code}))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "code {code}");
        }
        assert_eq!(transport.request_count(), 0);
    }

    #[actix_web::test]
    async fn test_blank_password_is_rejected_before_upstream() {
        let transport = RecordingTransport::new();
        let app = two_factor_app!(transport);

        for uri in ["/api/auth/2fa/setup", "/api/auth/2fa/disable"] {
            let req = test::TestRequest::post()
                .uri(uri)
                .cookie(session_cookie())
                .set_json(json!({"password": ""}))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{uri}");
        }
        assert_eq!(transport.request_count(), 0);
    }

    #[actix_web::test]
    async fn test_setup_returns_totp_uri() {
        let transport = RecordingTransport::with_json(
            200,
            json!({"totpURI": "otpauth://totp/Synth:ada", "backupCodes": ["a", "b"]}),
        );
        let app = two_factor_app!(transport);

        let req = test::TestRequest::post()
            .uri("/api/auth/2fa/setup")
            .cookie(session_cookie())
            .set_json(json!({"password": "hunter22"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["totpURI"], "otpauth://totp/Synth:ada");
        let sent = transport.last_request();
        assert_eq!(sent.url, "http://auth.test/api/auth/two-factor/enable");
        assert_eq!(sent.header_value("Cookie"), Some("better-auth.session_token=lib"));
    }

    #[actix_web::test]
    async fn test_valid_code_is_verified() {
        let transport = RecordingTransport::with_json(200, json!({"status": true}));
        let app = two_factor_app!(transport);

        let req = test::TestRequest::post()
            .uri("/api/auth/2fa/enable")
            .cookie(Cookie::new("ss_jwt", "a1"))
            .set_json(json!({"code": "123456"}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let sent: Value = serde_json::from_slice(transport.last_request().body.as_ref().unwrap()).unwrap();
        assert_eq!(sent, json!({"code": "123456"}));
    }

    #[actix_web::test]
    async fn test_upstream_401_clears_session_cookies() {
        let transport = RecordingTransport::with_json(401, json!({"message": "Session expired"}));
        let app = two_factor_app!(transport);

        let req = test::TestRequest::post()
            .uri("/api/auth/2fa/disable")
            .cookie(session_cookie())
            .set_json(json!({"password": "hunter22"}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let cookies = set_cookie_headers(&res);
        assert!(clears_cookie(&cookies, "ss_jwt"));
        assert!(clears_cookie(&cookies, "better-auth.session_token"));
    }

    #[actix_web::test]
    async fn test_other_upstream_errors_keep_status() {
        let transport = RecordingTransport::with_json(400, json!({"message": "Invalid password"}));
        let app = two_factor_app!(transport);

        let req = test::TestRequest::post()
            .uri("/api/auth/2fa/setup")
            .cookie(session_cookie())
            .set_json(json!({"password": "wrong-one"}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(set_cookie_headers(&res).is_empty());
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Invalid password");
    }
}
