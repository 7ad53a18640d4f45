//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 입력 문자열 정리
//! - [`display_terminal`] - 기동 배너 출력
//! - [`redirect`] - 리다이렉트 대상 정제, 쿼리 조립
//! - [`set_cookie`] - 업스트림 `Set-Cookie` 도메인 정규화
//! - [`upstream_message`] - 업스트림 에러 본문에서 사람이 읽을 메시지 추출

pub mod display_terminal;
pub mod redirect;
pub mod set_cookie;
pub mod string_utils;
pub mod upstream_message;
