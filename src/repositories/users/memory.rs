//! 테스트 전용 인메모리 저장소 구현
//!
//! 서비스 계층 테스트에서 MongoDB 없이 [`UserStore`]/[`ProfileStore`] 계약을
//! 재현합니다. 이메일 유니크 제약을 포함한 저장소 동작을 흉내냅니다.

use crate::domain::entities::users::{Profile, User};
use crate::errors::errors::AppError;
use crate::repositories::users::{ProfileStore, UserStore};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Mutex;

/// 인메모리 회원 저장소
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 회원 수
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// 저장된 회원 스냅샷
    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id_string().as_deref() == Some(id))
            .cloned())
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn save(&self, user: &User) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();

        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(user.clone())
            }
            None => Err(AppError::NotFound("회원을 찾을 수 없습니다".to_string())),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id_string().as_deref() != Some(id));
        Ok(users.len() < before)
    }
}

/// 인메모리 프로필 저장소
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: Mutex<Vec<Profile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 프로필 수
    pub fn count(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Profile>, AppError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id.to_hex() == user_id)
            .cloned())
    }

    async fn insert(&self, mut profile: Profile) -> Result<Profile, AppError> {
        let mut profiles = self.profiles.lock().unwrap();

        if profiles.iter().any(|p| p.user_id == profile.user_id) {
            return Err(AppError::ConflictError(
                "이미 프로필이 존재합니다".to_string(),
            ));
        }

        profile.id = Some(ObjectId::new());
        profiles.push(profile.clone());

        Ok(profile)
    }

    async fn save(&self, profile: &Profile) -> Result<Profile, AppError> {
        let mut profiles = self.profiles.lock().unwrap();

        match profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(slot) => {
                *slot = profile.clone();
                Ok(profile.clone())
            }
            None => Err(AppError::NotFound("프로필을 찾을 수 없습니다".to_string())),
        }
    }

    async fn delete_by_user_id(&self, user_id: &str) -> Result<bool, AppError> {
        let mut profiles = self.profiles.lock().unwrap();
        let before = profiles.len();
        profiles.retain(|p| p.user_id.to_hex() != user_id);
        Ok(profiles.len() < before)
    }
}
