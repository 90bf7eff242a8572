//! User Entity Implementation
//!
//! 회원 엔티티의 핵심 구현체입니다.
//! 로컬 인증과 OAuth 인증을 모두 지원하는 통합된 회원 모델을 제공합니다.

use crate::config::AuthProvider;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 회원 엔티티
///
/// 시스템의 모든 회원을 표현하는 핵심 도메인 엔티티입니다.
/// 로컬 인증(이메일/패스워드)과 OAuth 인증을 모두 지원합니다.
///
/// 이메일은 시스템 전역에서 유니크하며 저장된 그대로(대소문자 구분) 비교됩니다.
/// 패스워드 해시는 로컬 인증 계정 생성 시에만 존재합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 회원 이메일 (unique)
    pub email: String,
    /// 이름
    pub first_name: String,
    /// 성 (소셜 로그인 표시명에 성이 없으면 빈 문자열)
    pub last_name: String,
    /// 해시된 비밀번호 (OAuth 회원의 경우 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// 인증 수단 (생성 시 한 번 기록됨)
    pub auth_provider: AuthProvider,
    /// 회원 역할 ("user" 또는 "admin")
    pub role: String,
    /// 전화번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// 생년월일 (YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 회원 생성 (이메일/패스워드)
    pub fn new_local(
        email: String,
        first_name: String,
        last_name: String,
        password_hash: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            first_name,
            last_name,
            password_hash: Some(password_hash),
            auth_provider: AuthProvider::Local,
            role: "user".to_string(),
            phone: None,
            birth_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 소셜 회원 생성
    ///
    /// OAuth 프로바이더를 통해 인증된 회원을 생성합니다. 비밀번호는 저장하지 않습니다.
    pub fn new_social(
        email: String,
        first_name: String,
        last_name: String,
        auth_provider: AuthProvider,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            first_name,
            last_name,
            password_hash: None,
            auth_provider,
            role: "user".to_string(),
            phone: None,
            birth_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 로컬 인증 회원인지 확인
    pub fn is_local_auth(&self) -> bool {
        matches!(self.auth_provider, AuthProvider::Local)
    }

    /// OAuth 인증 회원인지 확인
    pub fn is_social_auth(&self) -> bool {
        !self.is_local_auth()
    }

    /// 비밀번호 인증이 가능한 회원인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.is_local_auth() && self.password_hash.is_some()
    }

    /// 수정 시간을 현재 시각으로 갱신
    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user_has_password_and_local_provider() {
        let user = User::new_local(
            "bob@x.com".to_string(),
            "Bob".to_string(),
            "Kim".to_string(),
            "hashed".to_string(),
        );

        assert_eq!(user.auth_provider, AuthProvider::Local);
        assert!(user.password_hash.is_some());
        assert!(user.can_authenticate_with_password());
        assert_eq!(user.role, "user");
    }

    #[test]
    fn test_new_social_user_has_no_password() {
        let user = User::new_social(
            "alice@gmail.com".to_string(),
            "Alice".to_string(),
            "".to_string(),
            AuthProvider::Google,
        );

        assert!(user.password_hash.is_none());
        assert!(user.is_social_auth());
        assert!(!user.can_authenticate_with_password());
    }
}
