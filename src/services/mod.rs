//! 서비스 계층 모듈
//!
//! - [`upstream`] - 업스트림 전송 계층과 백엔드 API 클라이언트
//! - [`auth`] - 자격 증명 흐름(백엔드)과 인증 라이브러리 호출
//! - [`session`] - 세션 쿠키 발급/삭제 정책
//!
//! 서비스들은 시작 시 한 번 생성되어 [`crate::state::AppState`] 안에서 공유됩니다.

pub mod auth;
pub mod session;
pub mod upstream;
