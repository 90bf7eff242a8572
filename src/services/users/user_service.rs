//! # 회원 관리 서비스 구현
//!
//! 회원 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! 로컬 회원 등록, 소셜 신원 주장의 계정 판정(생성/갱신/충돌 거부),
//! 회원/프로필 조회·수정·삭제, 비밀번호 검증을 제공합니다.
//!
//! ## 계정 판정 규칙
//!
//! 소셜 로그인 콜백에서 도착한 신원 주장 `{email, 이름, 인증 수단}`은
//! 다음과 같이 기존 계정과 연동됩니다:
//!
//! | 기존 계정 | 인증 수단 | 결과 |
//! |-----------|-----------|------|
//! | 없음 | - | 새 회원 + 빈 프로필 생성 |
//! | 있음 | 동일 | 이름 필드 갱신 후 반환 (프로필 유지) |
//! | 있음 | 다름 | 409 Conflict (이메일당 인증 수단 1개) |
//!
//! ## 에러 처리 전략
//!
//! 모든 메서드는 `Result<T, AppError>`를 반환합니다:
//!
//! - **ValidationError**: 입력값 검증 실패 (저장소 접근 전에 반환)
//! - **ConflictError**: 이메일 중복, 인증 수단 불일치
//! - **AuthenticationError**: 비밀번호 검증 실패
//! - **NotFound**: 대상 회원/프로필 없음
//! - **InternalError**: 예상하지 못한 저장소 오류 (원인 메시지 보존)
//!
//! ## 원자성에 대한 주의
//!
//! 회원 생성 직후의 프로필 생성, 회원 삭제 시의 프로필 선행 삭제는
//! 트랜잭션으로 묶이지 않습니다. 이메일 유니크 인덱스가 정합성의
//! 최종 방어선입니다.

use std::sync::Arc;

use bcrypt::hash;

use crate::{
    config::PasswordConfig,
    domain::{
        dto::users::{
            request::{RegisterRequest, SocialUserData, UpdateProfileRequest, UpdateUserRequest},
            response::{ProfileResponse, UserResponse},
        },
        entities::users::{Profile, User},
    },
    errors::errors::AppError,
    repositories::users::{ProfileStore, UserStore},
};

/// 회원 관리 비즈니스 로직 서비스
///
/// 회원 저장소와 프로필 저장소를 생성자로 주입받아 동작합니다.
/// 저장소는 trait 객체이므로 테스트에서는 인메모리 구현으로 대체됩니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::services::users::UserService;
///
/// let user_service = UserService::new(user_repo, profile_repo);
/// let user = user_service.create_local_user(request).await?;
/// ```
pub struct UserService {
    /// 회원 데이터 액세스 저장소
    user_store: Arc<dyn UserStore>,
    /// 프로필 데이터 액세스 저장소
    profile_store: Arc<dyn ProfileStore>,
}

impl UserService {
    /// 저장소 협력자를 주입받아 서비스를 생성합니다.
    pub fn new(user_store: Arc<dyn UserStore>, profile_store: Arc<dyn ProfileStore>) -> Self {
        Self {
            user_store,
            profile_store,
        }
    }

    /// 새 로컬 회원 계정 생성
    ///
    /// 비밀번호를 해싱하여 로컬 인증 회원을 생성하고, 직후 빈 프로필을
    /// 생성합니다. 이메일 중복 여부는 여기서 조회하지 않으며, 저장소의
    /// 유니크 제약이 `ConflictError`로 표면화됩니다.
    ///
    /// # 인자
    ///
    /// * `request` - 회원가입 요청 데이터 (이메일, 비밀번호, 이름 등)
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 회원 (ID 포함)
    /// * `Err(AppError::ValidationError)` - 비밀번호 누락 (저장소 접근 전)
    /// * `Err(AppError::ConflictError)` - 이메일 중복
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    ///
    /// # 처리 과정
    ///
    /// 1. **비밀번호 확인**: 누락/빈 값이면 즉시 거부
    /// 2. **비밀번호 해싱**: 환경별 cost의 bcrypt 해싱
    /// 3. **회원 저장**: 유니크 인덱스가 중복의 최종 방어선
    /// 4. **프로필 생성**: 빈 프로필 자동 생성 (비원자적)
    pub async fn create_local_user(&self, request: RegisterRequest) -> Result<User, AppError> {
        let password = request
            .password
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| {
                AppError::ValidationError("로컬 가입에는 비밀번호가 필요합니다".to_string())
            })?;

        // 환경별 bcrypt cost 사용
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let mut user = User::new_local(
            request.email,
            request.first_name,
            request.last_name,
            password_hash,
        );
        user.phone = request.phone;
        user.birth_date = request.birth_date;

        let created_user = self.user_store.insert(user).await?;

        // 회원 생성 직후 빈 프로필 생성 (트랜잭션 아님)
        self.create_profile(&created_user).await?;

        log::info!("로컬 회원 생성: {}", created_user.email);

        Ok(created_user)
    }

    /// 소셜 신원 주장을 기존 계정과 판정하여 생성/갱신/거부
    ///
    /// # 인자
    ///
    /// * `data` - 이름/성이 분리된 소셜 회원 데이터와 인증 수단 태그
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 새로 생성되었거나 갱신된 회원
    /// * `Err(AppError::ConflictError)` - 동일 이메일이 다른 인증 수단으로 등록됨
    /// * `Err(AppError::InternalError)` - 예상하지 못한 저장소 오류 (원인 포함)
    ///
    /// # 판정 규칙
    ///
    /// - 이메일 미등록: 새 회원 생성 후 빈 프로필 생성
    /// - 동일 인증 수단으로 등록: 이름 필드를 주장 값으로 덮어쓰고 저장
    ///   (기존 프로필은 유지, 새로 만들지 않음)
    /// - 다른 인증 수단으로 등록: `ConflictError`로 거부. 인증 수단 전환은
    ///   병합이 아니라 거부가 원칙이다.
    pub async fn create_social_user(&self, data: SocialUserData) -> Result<User, AppError> {
        let email = data.email.clone();

        self.resolve_social_account(data).await.map_err(|e| match e {
            // 충돌은 그대로 전달, 그 외 저장소 오류는 원인을 붙여 내부 오류로
            AppError::ConflictError(_) => e,
            other => {
                log::error!("소셜 계정 판정 실패 ({}): {}", email, other);
                AppError::InternalError(format!("소셜 회원 생성/갱신 실패: {}", other))
            }
        })
    }

    async fn resolve_social_account(&self, data: SocialUserData) -> Result<User, AppError> {
        match self.user_store.find_by_email(&data.email).await? {
            Some(mut existing_user) => {
                if existing_user.auth_provider != data.auth_provider {
                    return Err(AppError::ConflictError(format!(
                        "이메일 {}은(는) 이미 다른 인증 수단으로 등록되어 있습니다",
                        data.email
                    )));
                }

                // 동일 인증 수단의 재로그인: 주장 값으로 이름 갱신
                existing_user.first_name = data.first_name;
                existing_user.last_name = data.last_name;
                existing_user.touch();

                let updated_user = self.user_store.save(&existing_user).await?;
                log::info!("소셜 회원 갱신: {}", updated_user.email);

                Ok(updated_user)
            }
            None => {
                let user = User::new_social(
                    data.email,
                    data.first_name,
                    data.last_name,
                    data.auth_provider,
                );

                let created_user = self.user_store.insert(user).await?;

                // 회원 생성 직후 빈 프로필 생성 (트랜잭션 아님)
                self.create_profile(&created_user).await?;

                log::info!("소셜 회원 생성: {}", created_user.email);

                Ok(created_user)
            }
        }
    }

    /// 회원 생성 직후 빈 프로필을 생성합니다.
    async fn create_profile(&self, user: &User) -> Result<(), AppError> {
        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("생성된 회원의 ID가 없습니다".to_string()))?;

        self.profile_store.insert(Profile::new_empty(user_id)).await?;

        Ok(())
    }

    /// ID로 회원 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 민감 정보가 제거된 회원 정보
    /// * `Err(AppError::NotFound)` - 해당 ID의 회원이 존재하지 않음
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self
            .user_store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("ID {}의 회원을 찾을 수 없습니다", id)))?;

        Ok(UserResponse::from(user))
    }

    /// 이메일 주소로 회원 엔티티 조회
    ///
    /// 로그인 경로에서 사용됩니다. 존재하지 않으면 `Ok(None)`을 반환합니다.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.user_store.find_by_email(email).await
    }

    /// 회원과 소유 프로필을 함께 조회
    ///
    /// # 반환값
    ///
    /// * `Ok((UserResponse, Option<ProfileResponse>))` - 회원과 프로필 (프로필은 없을 수 있음)
    /// * `Err(AppError::NotFound)` - 회원이 존재하지 않음
    pub async fn get_user_with_profile(
        &self,
        id: &str,
    ) -> Result<(UserResponse, Option<ProfileResponse>), AppError> {
        let user = self
            .user_store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("ID {}의 회원을 찾을 수 없습니다", id)))?;

        let profile = self
            .profile_store
            .find_by_user_id(id)
            .await?
            .map(ProfileResponse::from);

        Ok((UserResponse::from(user), profile))
    }

    /// 소유 회원 요약을 포함한 프로필 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(ProfileResponse)` - 프로필과 소유 회원 요약
    /// * `Err(AppError::NotFound)` - 프로필 또는 회원이 존재하지 않음
    pub async fn get_user_profile(&self, user_id: &str) -> Result<ProfileResponse, AppError> {
        let profile = self
            .profile_store
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("회원 {}의 프로필을 찾을 수 없습니다", user_id))
            })?;

        let user = self
            .user_store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("ID {}의 회원을 찾을 수 없습니다", user_id))
            })?;

        Ok(ProfileResponse::with_user(profile, &user))
    }

    /// 회원 정보 부분 수정
    ///
    /// 요청에 제공된 필드만 덮어씁니다. 제공되지 않은 필드는 유지되며,
    /// 빈 값으로 제공된 필드는 빈 값으로 덮어씁니다.
    ///
    /// # 인자
    ///
    /// * `id` - 수정할 회원의 ID
    /// * `patch` - 부분 수정 요청
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 갱신된 회원 (비밀번호 해시는 포함되지 않음)
    /// * `Err(AppError::NotFound)` - 해당 ID의 회원이 존재하지 않음
    /// * `Err(AppError::ConflictError)` - 변경하려는 이메일을 다른 회원이 사용 중
    /// * `Err(AppError::InternalError)` - 예상하지 못한 저장 오류
    pub async fn update_user(
        &self,
        id: &str,
        patch: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        let mut user = self
            .user_store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("ID {}의 회원을 찾을 수 없습니다", id)))?;

        // 이메일 변경 시 다른 회원과의 중복 검사
        if let Some(ref new_email) = patch.email {
            if *new_email != user.email
                && self.user_store.find_by_email(new_email).await?.is_some()
            {
                return Err(AppError::ConflictError(format!(
                    "이메일 {}은(는) 이미 사용 중입니다",
                    new_email
                )));
            }
        }

        // 제공된 필드만 덮어쓴다
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(first_name) = patch.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            user.last_name = last_name;
        }
        if let Some(phone) = patch.phone {
            user.phone = Some(phone);
        }
        if let Some(birth_date) = patch.birth_date {
            user.birth_date = Some(birth_date);
        }
        user.touch();

        let updated_user = self.user_store.save(&user).await.map_err(|e| match e {
            AppError::ConflictError(_) | AppError::NotFound(_) => e,
            other => AppError::InternalError(format!("회원 정보 갱신 실패: {}", other)),
        })?;

        Ok(UserResponse::from(updated_user))
    }

    /// 프로필 부분 수정
    ///
    /// 회원 수정과 동일한 부분 수정 의미론을 따릅니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(ProfileResponse)` - 갱신된 프로필
    /// * `Err(AppError::NotFound)` - 해당 회원의 프로필이 존재하지 않음
    pub async fn update_profile(
        &self,
        user_id: &str,
        patch: UpdateProfileRequest,
    ) -> Result<ProfileResponse, AppError> {
        let mut profile = self
            .profile_store
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("회원 {}의 프로필을 찾을 수 없습니다", user_id))
            })?;

        if let Some(professional_summary) = patch.professional_summary {
            profile.professional_summary = Some(professional_summary);
        }
        if let Some(cv_url) = patch.cv_url {
            profile.cv_url = Some(cv_url);
        }
        if let Some(linkedin_url) = patch.linkedin_url {
            profile.linkedin_url = Some(linkedin_url);
        }
        if let Some(github_url) = patch.github_url {
            profile.github_url = Some(github_url);
        }
        if let Some(portfolio_url) = patch.portfolio_url {
            profile.portfolio_url = Some(portfolio_url);
        }
        profile.touch();

        let updated_profile = self.profile_store.save(&profile).await?;

        Ok(ProfileResponse::from(updated_profile))
    }

    /// 회원 계정 삭제
    ///
    /// 소유 프로필을 먼저 삭제한 뒤 회원을 삭제합니다.
    /// 두 삭제는 트랜잭션으로 묶이지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 삭제 성공
    /// * `Err(AppError::NotFound)` - 해당 ID의 회원이 존재하지 않음
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let user = self
            .user_store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("ID {}의 회원을 찾을 수 없습니다", id)))?;

        // 프로필 먼저 삭제 (없어도 무방)
        self.profile_store.delete_by_user_id(id).await?;

        let deleted = self.user_store.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!(
                "ID {}의 회원을 찾을 수 없습니다",
                id
            )));
        }

        log::info!("회원 삭제: {}", user.email);

        Ok(())
    }

    /// 로컬 계정 비밀번호 검증
    ///
    /// 이메일과 비밀번호로 로컬 인증 회원의 로그인을 처리합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 인증된 회원 엔티티
    /// * `Err(AppError::AuthenticationError)` - 인증 실패
    ///
    /// # 보안 특징
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호는 같은 메시지로 응답하여
    /// 계정 존재 여부를 노출하지 않습니다. OAuth로 가입한 계정은
    /// 비밀번호 인증을 시도할 수 없습니다.
    pub async fn verify_password(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .user_store
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string())
            })?;

        // OAuth 회원인 경우 비밀번호 인증 불가
        if !user.can_authenticate_with_password() {
            return Err(AppError::AuthenticationError(
                "소셜 로그인 계정입니다. 해당 프로바이더로 로그인해주세요".to_string(),
            ));
        }

        let password_hash = user
            .password_hash
            .as_ref()
            .ok_or_else(|| AppError::InternalError("비밀번호 해시가 없습니다".to_string()))?;

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::AuthenticationError(
                "잘못된 이메일 또는 비밀번호입니다".to_string(),
            ));
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;
    use crate::repositories::users::memory::{InMemoryProfileStore, InMemoryUserStore};

    fn build_service() -> (UserService, Arc<InMemoryUserStore>, Arc<InMemoryProfileStore>) {
        let user_store = Arc::new(InMemoryUserStore::new());
        let profile_store = Arc::new(InMemoryProfileStore::new());
        let service = UserService::new(user_store.clone(), profile_store.clone());
        (service, user_store, profile_store)
    }

    fn register_request(email: &str, password: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.map(|p| p.to_string()),
            first_name: "Bob".to_string(),
            last_name: "Kim".to_string(),
            phone: None,
            birth_date: None,
        }
    }

    fn social_data(email: &str, first: &str, last: &str, provider: AuthProvider) -> SocialUserData {
        SocialUserData {
            email: email.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            auth_provider: provider,
        }
    }

    #[actix_web::test]
    async fn test_create_local_user_creates_user_and_profile() {
        let (service, user_store, profile_store) = build_service();

        let user = service
            .create_local_user(register_request("bob@x.com", Some("secret1")))
            .await
            .unwrap();

        assert_eq!(user.email, "bob@x.com");
        assert_eq!(user.auth_provider, AuthProvider::Local);
        assert!(user.password_hash.is_some());
        assert_eq!(user_store.count(), 1);
        assert_eq!(profile_store.count(), 1);
    }

    #[actix_web::test]
    async fn test_create_local_user_without_password_fails_before_store_access() {
        let (service, user_store, profile_store) = build_service();

        let result = service
            .create_local_user(register_request("bob@x.com", None))
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(user_store.count(), 0);
        assert_eq!(profile_store.count(), 0);
    }

    #[actix_web::test]
    async fn test_create_local_user_with_empty_password_fails() {
        let (service, user_store, _) = build_service();

        let result = service
            .create_local_user(register_request("bob@x.com", Some("")))
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(user_store.count(), 0);
    }

    #[actix_web::test]
    async fn test_create_local_user_duplicate_email_conflicts() {
        let (service, _, _) = build_service();

        service
            .create_local_user(register_request("bob@x.com", Some("secret1")))
            .await
            .unwrap();

        let result = service
            .create_local_user(register_request("bob@x.com", Some("secret2")))
            .await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_create_social_user_fresh_email_creates_user_and_profile() {
        let (service, user_store, profile_store) = build_service();

        let user = service
            .create_social_user(social_data(
                "alice@gmail.com",
                "Alice",
                "Smith",
                AuthProvider::Google,
            ))
            .await
            .unwrap();

        assert_eq!(user.first_name, "Alice");
        assert_eq!(user.last_name, "Smith");
        assert!(user.password_hash.is_none());
        assert_eq!(user_store.count(), 1);
        assert_eq!(profile_store.count(), 1);
    }

    #[actix_web::test]
    async fn test_create_social_user_different_provider_conflicts_without_write() {
        let (service, user_store, profile_store) = build_service();

        service
            .create_social_user(social_data(
                "dev@x.com",
                "Dev",
                "Hub",
                AuthProvider::GitHub,
            ))
            .await
            .unwrap();

        let result = service
            .create_social_user(social_data(
                "dev@x.com",
                "Dev",
                "Goo",
                AuthProvider::Google,
            ))
            .await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));

        // 기존 레코드는 변경되지 않아야 한다
        let users = user_store.snapshot();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].last_name, "Hub");
        assert_eq!(users[0].auth_provider, AuthProvider::GitHub);
        assert_eq!(profile_store.count(), 1);
    }

    #[actix_web::test]
    async fn test_create_social_user_local_account_conflicts() {
        let (service, _, _) = build_service();

        service
            .create_local_user(register_request("bob@x.com", Some("secret1")))
            .await
            .unwrap();

        let result = service
            .create_social_user(social_data("bob@x.com", "Bob", "", AuthProvider::Google))
            .await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_create_social_user_same_provider_updates_name_keeps_profile() {
        let (service, user_store, profile_store) = build_service();

        let first = service
            .create_social_user(social_data(
                "dev@x.com",
                "Dev",
                "Hub",
                AuthProvider::GitHub,
            ))
            .await
            .unwrap();

        let second = service
            .create_social_user(social_data(
                "dev@x.com",
                "Developer",
                "Octocat",
                AuthProvider::GitHub,
            ))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.first_name, "Developer");
        assert_eq!(second.last_name, "Octocat");

        // 두 번째 로그인이 프로필을 새로 만들지 않는다
        assert_eq!(user_store.count(), 1);
        assert_eq!(profile_store.count(), 1);
    }

    #[actix_web::test]
    async fn test_update_user_not_found() {
        let (service, _, _) = build_service();

        let result = service
            .update_user(
                &mongodb::bson::oid::ObjectId::new().to_hex(),
                UpdateUserRequest::default(),
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_update_user_email_collision_conflicts() {
        let (service, _, _) = build_service();

        service
            .create_local_user(register_request("bob@x.com", Some("secret1")))
            .await
            .unwrap();
        let carol = service
            .create_local_user(register_request("carol@x.com", Some("secret1")))
            .await
            .unwrap();

        let patch = UpdateUserRequest {
            email: Some("bob@x.com".to_string()),
            ..Default::default()
        };
        let result = service
            .update_user(&carol.id_string().unwrap(), patch)
            .await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_update_user_partial_semantics() {
        let (service, _, _) = build_service();

        let user = service
            .create_local_user(register_request("bob@x.com", Some("secret1")))
            .await
            .unwrap();
        let id = user.id_string().unwrap();

        // 제공되지 않은 필드는 유지, 빈 값은 덮어쓴다
        let patch = UpdateUserRequest {
            first_name: Some("Robert".to_string()),
            last_name: Some("".to_string()),
            ..Default::default()
        };
        let updated = service.update_user(&id, patch).await.unwrap();

        assert_eq!(updated.first_name, "Robert");
        assert_eq!(updated.last_name, "");
        assert_eq!(updated.email, "bob@x.com");
    }

    #[actix_web::test]
    async fn test_update_user_same_email_is_not_a_conflict() {
        let (service, _, _) = build_service();

        let user = service
            .create_local_user(register_request("bob@x.com", Some("secret1")))
            .await
            .unwrap();

        let patch = UpdateUserRequest {
            email: Some("bob@x.com".to_string()),
            ..Default::default()
        };
        let updated = service
            .update_user(&user.id_string().unwrap(), patch)
            .await
            .unwrap();

        assert_eq!(updated.email, "bob@x.com");
    }

    #[actix_web::test]
    async fn test_update_user_response_has_no_password_hash() {
        let (service, _, _) = build_service();

        let user = service
            .create_local_user(register_request("bob@x.com", Some("secret1")))
            .await
            .unwrap();

        let updated = service
            .update_user(&user.id_string().unwrap(), UpdateUserRequest::default())
            .await
            .unwrap();

        let json = serde_json::to_string(&updated).unwrap();
        assert!(!json.contains("password"));
    }

    #[actix_web::test]
    async fn test_delete_user_not_found() {
        let (service, _, _) = build_service();

        let result = service
            .delete_user(&mongodb::bson::oid::ObjectId::new().to_hex())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_user_removes_user_and_profile() {
        let (service, user_store, profile_store) = build_service();

        let user = service
            .create_local_user(register_request("bob@x.com", Some("secret1")))
            .await
            .unwrap();

        service
            .delete_user(&user.id_string().unwrap())
            .await
            .unwrap();

        assert_eq!(user_store.count(), 0);
        assert_eq!(profile_store.count(), 0);
    }

    #[actix_web::test]
    async fn test_update_profile_applies_fields_and_keeps_others() {
        let (service, _, _) = build_service();

        let user = service
            .create_local_user(register_request("bob@x.com", Some("secret1")))
            .await
            .unwrap();
        let id = user.id_string().unwrap();

        let patch = UpdateProfileRequest {
            professional_summary: Some("Backend engineer".to_string()),
            github_url: Some("https://github.com/bob".to_string()),
            ..Default::default()
        };
        let updated = service.update_profile(&id, patch).await.unwrap();

        assert_eq!(
            updated.professional_summary.as_deref(),
            Some("Backend engineer")
        );
        assert_eq!(updated.github_url.as_deref(), Some("https://github.com/bob"));
        assert!(updated.cv_url.is_none());
    }

    #[actix_web::test]
    async fn test_update_profile_not_found() {
        let (service, _, _) = build_service();

        let result = service
            .update_profile(
                &mongodb::bson::oid::ObjectId::new().to_hex(),
                UpdateProfileRequest::default(),
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_get_user_profile_includes_owner_summary() {
        let (service, _, _) = build_service();

        let user = service
            .create_local_user(register_request("bob@x.com", Some("secret1")))
            .await
            .unwrap();
        let id = user.id_string().unwrap();

        let profile = service.get_user_profile(&id).await.unwrap();

        assert_eq!(profile.user_id, id);
        let owner = profile.user.unwrap();
        assert_eq!(owner.email, "bob@x.com");
    }

    #[actix_web::test]
    async fn test_verify_password_success_and_failure() {
        let (service, _, _) = build_service();

        service
            .create_local_user(register_request("bob@x.com", Some("secret1")))
            .await
            .unwrap();

        let user = service.verify_password("bob@x.com", "secret1").await.unwrap();
        assert_eq!(user.email, "bob@x.com");

        let wrong = service.verify_password("bob@x.com", "wrong-pass").await;
        assert!(matches!(wrong, Err(AppError::AuthenticationError(_))));

        let unknown = service.verify_password("nobody@x.com", "secret1").await;
        assert!(matches!(unknown, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_verify_password_rejects_social_account() {
        let (service, _, _) = build_service();

        service
            .create_social_user(social_data(
                "alice@gmail.com",
                "Alice",
                "",
                AuthProvider::Google,
            ))
            .await
            .unwrap();

        let result = service.verify_password("alice@gmail.com", "whatever").await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }
}
