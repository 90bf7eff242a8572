//! # 인증 서비스 구현
//!
//! 로그인 응답 조립과 소셜 신원 주장 검증을 담당합니다.
//! 프로바이더 서비스가 검증한 `{email, 표시 이름}` 주장을 받아
//! 표시 이름을 이름/성으로 분리한 뒤 계정 판정 로직에 넘기고,
//! 결과 회원에 대해 JWT를 발급합니다.

use std::sync::Arc;

use crate::{
    config::AuthProvider,
    domain::{
        dto::users::{request::SocialUserData, response::LoginResponse},
        entities::users::user::User,
        models::oauth::social_profile::SocialProfile,
    },
    errors::errors::AppError,
    services::{auth::token_service::TokenService, users::user_service::UserService},
    utils::string_utils::{split_display_name, validate_required_string},
};

/// 인증 비즈니스 로직 서비스
///
/// 회원 서비스와 토큰 서비스를 생성자로 주입받습니다.
pub struct AuthService {
    user_service: Arc<UserService>,
    token_service: TokenService,
}

impl AuthService {
    /// 협력자를 주입받아 서비스를 생성합니다.
    pub fn new(user_service: Arc<UserService>, token_service: TokenService) -> Self {
        Self {
            user_service,
            token_service,
        }
    }

    /// 인증이 끝난 회원에 대해 로그인 응답을 생성합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(LoginResponse)` - 회원 정보(민감 정보 제외)와 액세스 토큰
    pub fn login(&self, user: User) -> Result<LoginResponse, AppError> {
        let access_token = self.token_service.generate_access_token(&user)?;
        let expires_in = self.token_service.expires_in_seconds();

        Ok(LoginResponse::new(user, access_token, expires_in))
    }

    /// 로컬 이메일/비밀번호 로그인
    ///
    /// # 반환값
    ///
    /// * `Ok(LoginResponse)` - 인증 성공 시 토큰 포함 응답
    /// * `Err(AppError::AuthenticationError)` - 잘못된 자격 증명
    pub async fn login_local(&self, email: &str, password: &str) -> Result<LoginResponse, AppError> {
        let user = self.user_service.verify_password(email, password).await?;

        log::info!("로컬 로그인 성공: {}", user.email);

        self.login(user)
    }

    /// 소셜 신원 주장 검증 및 로그인 처리
    ///
    /// 프로바이더가 검증한 신원 주장을 계정 판정 로직에 연결하는 진입점입니다.
    ///
    /// # 인자
    ///
    /// * `profile` - 프로바이더 콜백에서 얻은 `{email, 표시 이름}` 주장
    /// * `provider` - 콜백을 처리한 프로바이더 태그
    ///
    /// # 반환값
    ///
    /// * `Ok(LoginResponse)` - 생성/갱신된 회원과 액세스 토큰
    /// * `Err(AppError::ValidationError)` - 이메일/이름 누락 (저장소 접근 전)
    /// * `Err(AppError::ConflictError)` - 이메일이 다른 인증 수단으로 등록됨
    ///
    /// # 처리 과정
    ///
    /// 1. **주장 검증**: 이메일과 표시 이름이 비어 있으면 즉시 거부
    /// 2. **이름 분리**: 공백 기준 첫 토큰 → 이름, 나머지 → 성
    /// 3. **계정 판정**: 생성 / 갱신 / 충돌 거부
    /// 4. **토큰 발급**: 판정된 회원으로 JWT 생성
    ///
    /// 판정 과정에서 발생한 타입 있는 에러는 감싸지 않고 그대로 전파되어
    /// HTTP 계층에서 원래 상태 코드로 변환됩니다.
    pub async fn validate_oauth_login(
        &self,
        profile: SocialProfile,
        provider: AuthProvider,
    ) -> Result<LoginResponse, AppError> {
        let email = validate_required_string(&profile.email, "이메일")?;
        let display_name = validate_required_string(&profile.name, "이름")?;

        let (first_name, last_name) = split_display_name(&display_name);

        let user = self
            .user_service
            .create_social_user(SocialUserData {
                email,
                first_name,
                last_name,
                auth_provider: provider.clone(),
            })
            .await?;

        log::info!("{} 로그인 성공: {}", provider.as_str(), user.email);

        self.login(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::RegisterRequest;
    use crate::repositories::users::memory::{InMemoryProfileStore, InMemoryUserStore};

    fn build_service() -> (AuthService, Arc<InMemoryUserStore>, Arc<InMemoryProfileStore>) {
        let user_store = Arc::new(InMemoryUserStore::new());
        let profile_store = Arc::new(InMemoryProfileStore::new());
        let user_service = Arc::new(UserService::new(user_store.clone(), profile_store.clone()));
        let auth_service = AuthService::new(user_service, TokenService::new());
        (auth_service, user_store, profile_store)
    }

    fn claim(email: &str, name: &str) -> SocialProfile {
        SocialProfile {
            email: email.to_string(),
            name: name.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_oauth_login_creates_user_with_split_name() {
        let (auth_service, user_store, profile_store) = build_service();

        let response = auth_service
            .validate_oauth_login(claim("mary@gmail.com", "Mary Jane Watson"), AuthProvider::Google)
            .await
            .unwrap();

        assert_eq!(response.user.first_name, "Mary");
        assert_eq!(response.user.last_name, "Jane Watson");
        assert_eq!(response.user.email, "mary@gmail.com");
        assert!(!response.access_token.is_empty());
        assert_eq!(response.token_type, "Bearer");

        assert_eq!(user_store.count(), 1);
        assert_eq!(profile_store.count(), 1);
    }

    #[actix_web::test]
    async fn test_oauth_login_single_token_name_has_empty_last_name() {
        let (auth_service, _, _) = build_service();

        let response = auth_service
            .validate_oauth_login(claim("solo@gmail.com", "Solo"), AuthProvider::Google)
            .await
            .unwrap();

        assert_eq!(response.user.first_name, "Solo");
        assert_eq!(response.user.last_name, "");
    }

    #[actix_web::test]
    async fn test_oauth_login_empty_email_rejected_before_store_access() {
        let (auth_service, user_store, _) = build_service();

        let result = auth_service
            .validate_oauth_login(claim("", "Mary Watson"), AuthProvider::Google)
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(user_store.count(), 0);
    }

    #[actix_web::test]
    async fn test_oauth_login_empty_name_rejected_before_store_access() {
        let (auth_service, user_store, _) = build_service();

        let result = auth_service
            .validate_oauth_login(claim("mary@gmail.com", ""), AuthProvider::Google)
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(user_store.count(), 0);
    }

    #[actix_web::test]
    async fn test_oauth_login_cross_provider_conflict_propagates_unchanged() {
        let (auth_service, user_store, _) = build_service();

        auth_service
            .validate_oauth_login(claim("dev@x.com", "Dev Hub"), AuthProvider::GitHub)
            .await
            .unwrap();

        let result = auth_service
            .validate_oauth_login(claim("dev@x.com", "Dev Hub"), AuthProvider::Google)
            .await;

        // 충돌은 내부 오류로 재포장되지 않고 타입 그대로 전파된다
        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(user_store.count(), 1);
    }

    #[actix_web::test]
    async fn test_oauth_repeat_login_updates_name_without_second_profile() {
        let (auth_service, user_store, profile_store) = build_service();

        auth_service
            .validate_oauth_login(claim("dev@x.com", "Dev Hub"), AuthProvider::GitHub)
            .await
            .unwrap();

        let response = auth_service
            .validate_oauth_login(claim("dev@x.com", "Developer Octocat"), AuthProvider::GitHub)
            .await
            .unwrap();

        assert_eq!(response.user.first_name, "Developer");
        assert_eq!(response.user.last_name, "Octocat");
        assert_eq!(user_store.count(), 1);
        assert_eq!(profile_store.count(), 1);
    }

    #[actix_web::test]
    async fn test_register_then_login_end_to_end() {
        let (auth_service, user_store, profile_store) = build_service();
        let user_service = UserService::new(user_store.clone(), profile_store.clone());

        // 회원가입
        user_service
            .create_local_user(RegisterRequest {
                email: "bob@x.com".to_string(),
                password: Some("secret1".to_string()),
                first_name: "Bob".to_string(),
                last_name: "Kim".to_string(),
                phone: None,
                birth_date: None,
            })
            .await
            .unwrap();

        // 올바른 비밀번호로 로그인하면 토큰이 발급된다
        let response = auth_service.login_local("bob@x.com", "secret1").await.unwrap();
        assert!(!response.access_token.is_empty());

        // 틀린 비밀번호는 거부된다
        let wrong = auth_service.login_local("bob@x.com", "wrong-pass").await;
        assert!(matches!(wrong, Err(AppError::AuthenticationError(_))));
    }
}
