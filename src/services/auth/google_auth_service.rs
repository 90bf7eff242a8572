//! # Google OAuth 2.0 인증 서비스
//!
//! Google 인증 서버와의 OAuth 2.0 Authorization Code 플로우를 담당합니다.
//! 로그인 URL 생성, 인증 코드의 액세스 토큰 교환, 사용자 정보 조회를 수행하고
//! 검증된 `{email, 표시 이름}` 신원 주장을 반환합니다.
//!
//! 계정 생성/연동 판정은 이 서비스의 책임이 아니며,
//! [`crate::services::auth::AuthService::validate_oauth_login`]이 수행합니다.

use crate::{
    config::GoogleOAuthConfig,
    domain::{
        dto::users::response::oauth_response::{GoogleTokenResponse, OAuthLoginUrlResponse},
        models::oauth::{google_user::GoogleUserInfo, social_profile::SocialProfile},
    },
    errors::errors::AppError,
    services::auth::oauth_state,
};

/// Google OAuth 인증 서비스
#[derive(Clone, Default)]
pub struct GoogleAuthService;

impl GoogleAuthService {
    pub fn new() -> Self {
        Self
    }

    /// Google 로그인 URL 생성
    ///
    /// 클라이언트를 Google 동의 화면으로 보내기 위한 URL을 구성합니다.
    pub fn get_login_url(&self) -> Result<OAuthLoginUrlResponse, AppError> {
        let state = oauth_state::generate_state()?;

        let params = [
            ("client_id", GoogleOAuthConfig::client_id()),
            ("redirect_uri", GoogleOAuthConfig::redirect_uri()),
            ("scope", "openid email profile".to_string()),
            ("response_type", "code".to_string()),
            ("state", state.clone()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let login_url = format!("{}?{}", GoogleOAuthConfig::auth_uri(), query_string);

        Ok(OAuthLoginUrlResponse { login_url, state })
    }

    /// 인증 코드로 신원 주장 획득
    ///
    /// # 처리 과정
    ///
    /// 1. State 검증
    /// 2. Authorization code로 액세스 토큰 교환
    /// 3. 액세스 토큰으로 사용자 정보 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(SocialProfile)` - Google이 검증한 `{email, 표시 이름}` 주장
    /// * `Err(AppError::ExternalServiceError)` - Google API 호출 실패
    pub async fn authenticate_with_code(
        &self,
        auth_code: &str,
        state: &str,
    ) -> Result<SocialProfile, AppError> {
        oauth_state::verify_state(state)?;

        let token_response = self.exchange_code_for_token(auth_code).await?;
        let google_user = self.get_user_info(&token_response.access_token).await?;

        Ok(SocialProfile {
            email: google_user.email,
            name: google_user.name,
        })
    }

    async fn exchange_code_for_token(
        &self,
        auth_code: &str,
    ) -> Result<GoogleTokenResponse, AppError> {
        let client = reqwest::Client::new();

        let params = [
            ("code", auth_code),
            ("client_id", &GoogleOAuthConfig::client_id()),
            ("client_secret", &GoogleOAuthConfig::client_secret()),
            ("redirect_uri", &GoogleOAuthConfig::redirect_uri()),
            ("grant_type", "authorization_code"),
        ];

        let response = client
            .post(GoogleOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 토큰 교환 실패: {}",
                error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e))
            })
    }

    async fn get_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, AppError> {
        let client = reqwest::Client::new();

        let response = client
            .get(GoogleOAuthConfig::user_info_uri())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 사용자 정보 조회 실패: {}",
                error_text
            )));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Google 사용자 정보 파싱 실패: {}", e))
            })
    }
}
