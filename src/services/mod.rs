//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 회원 관리와 인증/보안 기능을 담당합니다.
//! 모든 서비스는 저장소/해셔/토큰 발급기 협력자를 생성자 파라미터로 받아
//! `main.rs`에서 명시적으로 조립됩니다.
//!
//! # Features
//!
//! - 회원 생명주기 관리 (생성, 조회, 수정, 삭제)
//! - 소셜 신원 주장과 기존 계정의 연동 판정
//! - JWT 토큰 기반 인증 시스템
//! - OAuth 2.0 소셜 로그인 (Google, GitHub)
//! - 본인/관리자 접근 제어
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::{auth::TokenService, users::UserService};
//!
//! let user_service = UserService::new(user_repo, profile_repo);
//! let token_service = TokenService::new();
//! ```

pub mod auth;
pub mod users;
