//! 회원 관련 응답 DTO 모듈
//!
//! 엔티티를 클라이언트에 노출 가능한 형태로 변환합니다.
//! 비밀번호 해시는 어떤 응답에도 포함되지 않습니다.

pub mod oauth_response;
pub mod user_response;

pub use oauth_response::{GithubTokenResponse, GoogleTokenResponse, OAuthLoginUrlResponse};
pub use user_response::{LoginResponse, ProfileResponse, UserResponse, UserSummary};
