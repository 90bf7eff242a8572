//! HTTP 요청/응답 처리 핸들러 모듈
//!
//! 핸들러는 얇게 유지됩니다: 요청 검증 → 접근 제어 → 서비스 위임 → 응답 변환.
//! 서비스 실패는 [`crate::errors::AppError`]의 `ResponseError` 구현을 통해
//! 자동으로 HTTP 응답으로 변환됩니다.

pub mod auth;
pub mod users;
