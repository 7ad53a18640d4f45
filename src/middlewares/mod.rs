//! 미들웨어 모듈
//!
//! - [`session_guard`] - 세션 쿠키가 없는 요청을 거절하는 가드
//! - [`access_log`] - 쿼리 문자열을 남기지 않는 접근 로그

pub mod access_log;
pub mod session_guard;
mod session_guard_inner;

pub use access_log::access_logger;
pub use session_guard::SessionGuard;
pub use session_guard_inner::session_credentials;
