//! 애플리케이션 전역 에러 처리 모듈
//!
//! [`errors::AppError`]를 통해 서비스 전 계층에서 일관된 에러 타입을 사용하고,
//! `actix_web::ResponseError` 구현으로 HTTP 응답 변환을 자동화합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};
