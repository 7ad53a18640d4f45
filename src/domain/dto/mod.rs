//! 데이터 전송 객체
//!
//! 로그인/회원가입 폼은 폼 인코딩과 JSON 양쪽을 받으며,
//! 2단계 인증 요청은 JSON 으로만 받습니다.

pub mod auth;

pub use auth::*;
