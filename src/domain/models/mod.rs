//! 외부 시스템 통합 모델
//!
//! - [`upstream`] - 백엔드 API / 인증 라이브러리로 보내는 요청과 받은 응답
//! - [`session`] - 발급된 세션 토큰 묶음과 요청에서 찾은 세션 자격 증명

pub mod session;
pub mod upstream;

pub use session::*;
pub use upstream::*;
