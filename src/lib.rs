//! 인센드 회원 서비스 백엔드
//!
//! Rust 기반의 회원 관리 및 인증 서비스입니다.
//! 로컬(이메일/패스워드) 회원가입과 Google/GitHub OAuth 2.0 소셜 로그인,
//! JWT 토큰 발급, 회원/프로필 CRUD를 제공합니다.
//!
//! # Features
//!
//! - **회원 관리**: 로컬 계정 생성, 회원 정보 수정, 계정 삭제
//! - **프로필 관리**: 회원당 1개의 확장 프로필 (경력 요약, CV/링크 URL)
//! - **JWT 인증**: 액세스 토큰 기반 상태 없는 인증
//! - **OAuth 2.0**: Google, GitHub 소셜 로그인 및 계정 연동 판정
//! - **접근 제어**: 본인 또는 관리자만 회원 데이터 변경 가능
//! - **MongoDB**: 회원 데이터 영구 저장 (이메일 유니크 인덱스)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 / 접근 제어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (계정 판정, 토큰)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 모든 서비스와 리포지토리는 `main.rs`에서 명시적으로 생성되어
//! 생성자 파라미터로 주입됩니다. 전역 레지스트리는 사용하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use member_service_backend::db::Database;
//! use member_service_backend::repositories::users::{ProfileRepository, UserRepository};
//! use member_service_backend::services::users::UserService;
//!
//! let database = Database::new().await?;
//! let user_repo = Arc::new(UserRepository::new(&database));
//! let profile_repo = Arc::new(ProfileRepository::new(&database));
//! let user_service = UserService::new(user_repo, profile_repo);
//!
//! let user = user_service.create_local_user(request).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
