//! # Domain Layer Module
//!
//! 게이트웨이가 주고받는 데이터의 형태를 정의합니다.
//! 게이트웨이는 사용자 데이터를 저장하지 않으므로 엔티티 계층은 없습니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs    - 브라우저가 보내는 폼/JSON 요청
//! └── Models  - 업스트림 요청/응답, 세션 토큰 묶음
//!      │
//!      ▼
//! Application Layer (Services)
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
