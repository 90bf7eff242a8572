//! 회원 응답 DTO
//!
//! 엔티티에서 민감 정보를 제거한 응답 구조체들을 정의합니다.

use crate::config::AuthProvider;
use crate::domain::entities::users::{Profile, User};
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 회원 응답 DTO
///
/// 비밀번호 해시를 제외한 회원 정보를 담습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,

    /// 인증 수단 (로컬, Google, GitHub)
    pub auth_provider: AuthProvider,

    /// 소셜 로그인 회원인지 여부 (편의 필드)
    pub is_social_user: bool,

    pub role: String,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            first_name,
            last_name,
            auth_provider,
            role,
            phone,
            birth_date,
            created_at,
            updated_at,
            ..
        } = user;

        let is_social_user = !matches!(auth_provider, AuthProvider::Local);

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            first_name,
            last_name,
            auth_provider,
            is_social_user,
            role,
            phone,
            birth_date,
            created_at,
            updated_at,
        }
    }
}

/// 프로필 응답에 포함되는 소유 회원 요약
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub auth_provider: AuthProvider,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id_string().unwrap_or_default(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            auth_provider: user.auth_provider.clone(),
        }
    }
}

/// 프로필 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile_id: String,
    pub user_id: String,
    pub professional_summary: Option<String>,
    pub cv_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,

    /// 소유 회원 요약 (프로필 단독 응답에서는 생략)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            profile_id: profile.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: profile.user_id.to_hex(),
            professional_summary: profile.professional_summary,
            cv_url: profile.cv_url,
            linkedin_url: profile.linkedin_url,
            github_url: profile.github_url,
            portfolio_url: profile.portfolio_url,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
            user: None,
        }
    }
}

impl ProfileResponse {
    /// 소유 회원 요약을 포함한 프로필 응답 생성
    pub fn with_user(profile: Profile, user: &User) -> Self {
        let mut response = Self::from(profile);
        response.user = Some(UserSummary::from(user));
        response
    }
}

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl LoginResponse {
    /// 새 로그인 응답 생성
    pub fn new(user: User, access_token: String, expires_in: i64) -> Self {
        Self {
            user: UserResponse::from(user),
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}
