//! # 회원 리포지토리 구현
//!
//! 회원 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하며, 이메일 유니크 인덱스가
//! 동시 요청 간 이메일 중복의 최종 방어선 역할을 합니다.
//!
//! ## 특징
//!
//! - **저장소 trait 분리**: [`UserStore`]를 통해 서비스 계층과 분리
//! - **데이터 무결성**: 이메일 유니크 제약 조건 및 인덱스 관리
//! - **중복 키 변환**: MongoDB E11000 에러를 `ConflictError`로 변환

use crate::{db::Database, domain::entities::users::user::User, errors::errors::AppError};
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{FindOneAndReplaceOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

/// 회원 저장소 추상화
///
/// 계정 판정 로직이 의존하는 저장소 연산의 계약입니다.
/// 프로덕션에서는 [`UserRepository`]가, 테스트에서는 인메모리 구현이 사용됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일 주소로 회원 조회 (저장된 그대로, 대소문자 구분)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// ID로 회원 조회
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// 새 회원 저장 (ID는 저장소가 할당)
    ///
    /// 이메일이 이미 사용 중이면 `ConflictError`를 반환합니다.
    async fn insert(&self, user: User) -> Result<User, AppError>;

    /// 기존 회원 전체 갱신 (ID 기준 교체)
    async fn save(&self, user: &User) -> Result<User, AppError>;

    /// 회원 삭제. 삭제된 경우 `true`, 대상이 없으면 `false`
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

/// 회원 데이터 액세스 리포지토리
///
/// `users` 컬렉션에 대한 CRUD 연산을 담당합니다.
///
/// ## 인덱스
///
/// - `email` (unique): 중복 이메일 방지 및 이메일 조회 최적화
/// - `created_at` (desc): 최근 가입 회원 조회 최적화
///
/// ## 동시성
///
/// 조회 후 쓰기 시퀀스는 트랜잭션으로 묶이지 않습니다. 동일 이메일의
/// 동시 가입 요청은 둘 다 사전 중복 검사를 통과할 수 있으며, 이 경우
/// 유니크 인덱스 위반이 `ConflictError`로 변환되어 한쪽이 거부됩니다.
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    /// 데이터베이스 연결로부터 리포지토리를 생성합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>("users"),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행하여 이메일 유니크 제약과
    /// 조회 성능을 보장합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }
}

/// MongoDB 중복 키(E11000) 에러인지 확인
fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    matches!(
        *error.kind,
        mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(ref write_error))
            if write_error.code == 11000
    )
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = Self::parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        // 사전 중복 검사 (최종 방어는 유니크 인덱스)
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        let result = self.collection.insert_one(&user).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    async fn save(&self, user: &User) -> Result<User, AppError> {
        let object_id = user
            .id
            .ok_or_else(|| AppError::InternalError("저장할 회원의 ID가 없습니다".to_string()))?;

        let options = FindOneAndReplaceOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let saved = self
            .collection
            .find_one_and_replace(doc! { "_id": object_id }, user)
            .with_options(options)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        saved.ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = Self::parse_object_id(id)?;

        let result = self
            .collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
