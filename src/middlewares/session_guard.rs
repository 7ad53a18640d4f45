//! # 세션 가드 미들웨어
//!
//! 세션이 필요한 라우트 그룹에 적용하여, 세션 쿠키가 없는 요청을
//! 핸들러에 도달하기 전에 401 로 거절합니다.
//!
//! 통과 조건은 다음 중 하나입니다.
//! - `ss_jwt` 쿠키가 비어 있지 않음
//! - 인증 라이브러리 세션 토큰 쿠키(`better-auth.session_token` 또는 `__Secure-` 변형)가 있음
//!
//! 토큰의 유효성은 검사하지 않습니다. 유효성 판단은 업스트림의 몫이며,
//! 업스트림이 401 을 주면 핸들러가 쿠키를 정리합니다.
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/2fa")
//!         .wrap(SessionGuard::required())
//!         .service(two_factor::setup),
//! );
//!
//! #[post("/setup")]
//! async fn setup(credentials: SessionCredentials) -> AppResult<HttpResponse> {
//!     // 가드가 Request Extensions 에 넣어 둔 세션 정보를 추출자로 받음
//! }
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::session_guard_inner::SessionGuardService;

pub struct SessionGuard;

impl SessionGuard {
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SessionGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGuardService {
            service: Rc::new(service),
        }))
    }
}
