//! # 프로필 리포지토리 구현
//!
//! 회원 프로필 엔티티의 데이터 액세스 계층입니다.
//! `profiles` 컬렉션의 `user_id` 유니크 인덱스가 회원당 1개 제약을 보장합니다.

use crate::{db::Database, domain::entities::users::profile::Profile, errors::errors::AppError};
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{FindOneAndReplaceOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

/// 프로필 저장소 추상화
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// 소유 회원 ID로 프로필 조회
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Profile>, AppError>;

    /// 새 프로필 저장 (ID는 저장소가 할당)
    async fn insert(&self, profile: Profile) -> Result<Profile, AppError>;

    /// 기존 프로필 전체 갱신 (ID 기준 교체)
    async fn save(&self, profile: &Profile) -> Result<Profile, AppError>;

    /// 소유 회원 ID로 프로필 삭제. 삭제된 경우 `true`
    async fn delete_by_user_id(&self, user_id: &str) -> Result<bool, AppError>;
}

/// 프로필 데이터 액세스 리포지토리
pub struct ProfileRepository {
    collection: Collection<Profile>,
}

impl ProfileRepository {
    /// 데이터베이스 연결로부터 리포지토리를 생성합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<Profile>("profiles"),
        }
    }

    /// 데이터베이스 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        // 회원당 프로필 1개 제약
        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([user_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }
}

#[async_trait]
impl ProfileStore for ProfileRepository {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Profile>, AppError> {
        let object_id = Self::parse_object_id(user_id)?;

        self.collection
            .find_one(doc! { "user_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut profile: Profile) -> Result<Profile, AppError> {
        let result = self
            .collection
            .insert_one(&profile)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        profile.id = result.inserted_id.as_object_id();

        Ok(profile)
    }

    async fn save(&self, profile: &Profile) -> Result<Profile, AppError> {
        let object_id = profile
            .id
            .ok_or_else(|| AppError::InternalError("저장할 프로필의 ID가 없습니다".to_string()))?;

        let options = FindOneAndReplaceOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let saved = self
            .collection
            .find_one_and_replace(doc! { "_id": object_id }, profile)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        saved.ok_or_else(|| AppError::NotFound("프로필을 찾을 수 없습니다".to_string()))
    }

    async fn delete_by_user_id(&self, user_id: &str) -> Result<bool, AppError> {
        let object_id = Self::parse_object_id(user_id)?;

        let result = self
            .collection
            .delete_one(doc! { "user_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
