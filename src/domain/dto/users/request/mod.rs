//! 회원 관련 요청 DTO 모듈
//!
//! 회원가입, 로그인, 회원/프로필 수정, OAuth 콜백 요청 구조체를 제공합니다.

pub mod auth_request;
pub mod register_request;
pub mod social_user;
pub mod update_request;

pub use auth_request::{LocalLoginRequest, OAuthCallbackQuery};
pub use register_request::RegisterRequest;
pub use social_user::SocialUserData;
pub use update_request::{UpdateProfileRequest, UpdateUserRequest};
