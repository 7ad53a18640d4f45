//! 합성 데이터 SaaS 세션 게이트웨이
//!
//! 브라우저와 백엔드 API 사이에서 동작하는 backend-for-frontend 서비스입니다.
//! 액세스 토큰을 HTTP-only 쿠키에 보관하고, 모든 API 호출에 Bearer 토큰으로 주입합니다.
//!
//! # Features
//!
//! - **범용 프록시**: `/api/*` 요청을 백엔드로 전달, `Set-Cookie` 도메인 정규화
//! - **로그인/회원가입**: 폼 제출과 XHR 양쪽 지원, 이메일 인증 흐름
//! - **OAuth 완료**: URL 해시의 토큰을 검증 후 쿠키로 이동
//! - **세션 관리**: 토큰 갱신, 로그아웃 시 모든 세션 쿠키 삭제
//! - **2단계 인증**: 외부 인증 라이브러리(better-auth) HTTP API 경유
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/auth/* 전용 핸들러, 나머지 /api/* 프록시
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 쿠키 읽기/쓰기, 폼 vs XHR 응답
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 자격 증명 흐름, 쿠키 정책
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  HttpTransport  │ ← reqwest (테스트에서는 기록용 가짜 전송 계층)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌──────────────────────────────┐
//! │ Backend API + 인증 라이브러리 │
//! └──────────────────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;
