//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용합니다. 각 리포지토리는 저장소 trait
//! ([`users::UserStore`], [`users::ProfileStore`])을 구현하며, 서비스 계층은
//! trait 객체를 통해 저장소에 접근합니다. 덕분에 테스트에서는 인메모리
//! 구현으로 대체할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{ProfileRepository, UserRepository};
//!
//! let user_repo = Arc::new(UserRepository::new(&database));
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
