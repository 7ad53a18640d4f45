//! 애플리케이션 공통 핵심 모듈
//!
//! - [`errors`] - `AppError`, `AppResult`, `ErrorContext`

pub mod errors;

pub use errors::*;
