use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, HttpRequest, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::config::auth_config::{ACCESS_TOKEN_COOKIE, AUTH_LIBRARY_SESSION_COOKIES};
use crate::domain::models::session::SessionCredentials;
use crate::state::AppState;
use crate::utils::string_utils::non_blank;

pub struct SessionGuardService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let credentials = session_credentials(req.request());

            if !credentials.is_present() {
                log::debug!("세션 없음: {} {}", req.method(), req.path());
                let response = unauthenticated(req.request());
                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, response).map_into_right_body());
            }

            req.extensions_mut().insert(credentials);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청 쿠키에서 세션 자격 증명을 찾습니다.
pub fn session_credentials(req: &HttpRequest) -> SessionCredentials {
    let access_token = req
        .cookie(ACCESS_TOKEN_COOKIE)
        .and_then(|c| non_blank(Some(c.value())).map(str::to_string));

    let has_library_session = AUTH_LIBRARY_SESSION_COOKIES
        .iter()
        .any(|name| req.cookie(name).is_some_and(|c| !c.value().is_empty()));

    let cookie_header = req
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    SessionCredentials {
        access_token,
        has_library_session,
        cookie_header,
    }
}

fn unauthenticated(req: &HttpRequest) -> HttpResponse {
    let mut builder = HttpResponse::Unauthorized();
    if let Some(state) = req.app_data::<web::Data<AppState>>() {
        for cookie in state.cookies.clear_access() {
            builder.cookie(cookie);
        }
    } else {
        let mut removal = actix_web::cookie::Cookie::build(ACCESS_TOKEN_COOKIE, "")
            .path("/")
            .http_only(true)
            .finish();
        removal.make_removal();
        builder.cookie(removal);
    }

    builder.json(serde_json::json!({
        "error": "authentication_required",
        "message": "A valid session is required"
    }))
}
