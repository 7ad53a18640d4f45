//! HTTP 핸들러 모듈
//!
//! | 모듈 | 라우트 |
//! |------|--------|
//! | [`auth`] | `/api/auth/login`, `/register`, `/verify-email`, `/verify-email/request` |
//! | [`oauth`] | `/auth/oauth/complete`, `/api/auth/session`, `/providers`, `/oauth/{provider}` |
//! | [`session`] | `/api/auth/refresh`, `/logout` |
//! | [`two_factor`] | `/api/auth/2fa/{setup,enable,disable}` (세션 가드) |
//! | [`proxy`] | 그 밖의 모든 `/api/*` |

pub mod auth;
pub mod oauth;
pub mod proxy;
pub mod reply;
pub mod session;
pub mod two_factor;
