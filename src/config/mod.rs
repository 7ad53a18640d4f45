//! # Configuration Module
//!
//! 세션 게이트웨이의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 백엔드 API 연결 설정
//! - [`auth_config`] - 세션 쿠키, 인증 라이브러리, OAuth 프로바이더 설정
//! - [`settings`] - 시작 시 한 번 읽어 핸들러에 공유되는 불변 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 백엔드 API
//! export NEXT_PUBLIC_API_URL="https://api.synth.example"
//! export PROXY_SECRET="shared-secret"
//!
//! # 인증 라이브러리
//! export BETTER_AUTH_URL="https://app.synth.example"
//!
//! # 환경 (production 에서만 Secure 쿠키)
//! export ENVIRONMENT="production"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod settings;

pub use data_config::*;
pub use auth_config::*;
pub use settings::*;
