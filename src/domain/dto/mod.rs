//! 데이터 전송 객체(DTO) 모듈
//!
//! HTTP 경계에서 사용하는 요청/응답 구조체들을 정의합니다.
//! 요청 DTO는 `validator` 파생으로 핸들러 진입 시점에 검증되며,
//! 핵심 로직은 경계에서 이미 보장된 값을 다시 검증하지 않습니다.

pub mod users;

pub use users::*;
