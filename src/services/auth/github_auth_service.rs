//! # GitHub OAuth 2.0 인증 서비스
//!
//! GitHub과의 OAuth 2.0 Authorization Code 플로우를 담당합니다.
//! Google 플로우와 동일한 구조이지만 GitHub 특유의 처리가 두 가지 있습니다:
//!
//! - 토큰 엔드포인트는 `Accept: application/json` 헤더가 있어야 JSON으로 응답
//! - 이메일이 비공개인 계정은 `/user` 응답에 이메일이 없으므로
//!   `/user/emails`에서 primary 이메일을 조회
//!
//! 계정 생성/연동 판정은 [`crate::services::auth::AuthService::validate_oauth_login`]이
//! 수행합니다.

use crate::{
    config::GithubOAuthConfig,
    domain::{
        dto::users::response::oauth_response::{GithubTokenResponse, OAuthLoginUrlResponse},
        models::oauth::{
            github_user::{GithubEmail, GithubUserInfo},
            social_profile::SocialProfile,
        },
    },
    errors::errors::AppError,
    services::auth::oauth_state,
};

/// GitHub API 호출에 사용하는 User-Agent (GitHub API 필수 헤더)
const USER_AGENT: &str = "member-service-backend";

/// GitHub OAuth 인증 서비스
#[derive(Clone, Default)]
pub struct GithubAuthService;

impl GithubAuthService {
    pub fn new() -> Self {
        Self
    }

    /// GitHub 로그인 URL 생성
    pub fn get_login_url(&self) -> Result<OAuthLoginUrlResponse, AppError> {
        let state = oauth_state::generate_state()?;

        let params = [
            ("client_id", GithubOAuthConfig::client_id()),
            ("redirect_uri", GithubOAuthConfig::redirect_uri()),
            ("scope", "user:email".to_string()),
            ("state", state.clone()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let login_url = format!("{}?{}", GithubOAuthConfig::auth_uri(), query_string);

        Ok(OAuthLoginUrlResponse { login_url, state })
    }

    /// 인증 코드로 신원 주장 획득
    ///
    /// # 반환값
    ///
    /// * `Ok(SocialProfile)` - GitHub이 검증한 `{email, 표시 이름}` 주장.
    ///   표시 이름이 없는 계정은 로그인 아이디를 표시 이름으로 사용합니다.
    /// * `Err(AppError::ExternalServiceError)` - GitHub API 호출 실패
    pub async fn authenticate_with_code(
        &self,
        auth_code: &str,
        state: &str,
    ) -> Result<SocialProfile, AppError> {
        oauth_state::verify_state(state)?;

        let token_response = self.exchange_code_for_token(auth_code).await?;
        let github_user = self.get_user_info(&token_response.access_token).await?;

        // 이메일이 비공개인 계정은 이메일 목록에서 primary를 조회
        let email = match github_user.email {
            Some(email) if !email.is_empty() => email,
            _ => self.get_primary_email(&token_response.access_token).await?,
        };

        let name = github_user
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(github_user.login);

        Ok(SocialProfile { email, name })
    }

    async fn exchange_code_for_token(
        &self,
        auth_code: &str,
    ) -> Result<GithubTokenResponse, AppError> {
        let client = reqwest::Client::new();

        let params = [
            ("code", auth_code),
            ("client_id", &GithubOAuthConfig::client_id()),
            ("client_secret", &GithubOAuthConfig::client_secret()),
            ("redirect_uri", &GithubOAuthConfig::redirect_uri()),
        ];

        let response = client
            .post(GithubOAuthConfig::token_uri())
            .header("Accept", "application/json")
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("GitHub 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "GitHub 토큰 교환 실패: {}",
                error_text
            )));
        }

        response
            .json::<GithubTokenResponse>()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("GitHub 토큰 응답 파싱 실패: {}", e))
            })
    }

    async fn get_user_info(&self, access_token: &str) -> Result<GithubUserInfo, AppError> {
        let client = reqwest::Client::new();

        let response = client
            .get(format!("{}/user", GithubOAuthConfig::api_base_uri()))
            .bearer_auth(access_token)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("GitHub 사용자 정보 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "GitHub 사용자 정보 조회 실패: {}",
                error_text
            )));
        }

        response
            .json::<GithubUserInfo>()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("GitHub 사용자 정보 파싱 실패: {}", e))
            })
    }

    async fn get_primary_email(&self, access_token: &str) -> Result<String, AppError> {
        let client = reqwest::Client::new();

        let response = client
            .get(format!("{}/user/emails", GithubOAuthConfig::api_base_uri()))
            .bearer_auth(access_token)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("GitHub 이메일 목록 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "GitHub 이메일 목록 조회 실패: {}",
                error_text
            )));
        }

        let emails = response
            .json::<Vec<GithubEmail>>()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("GitHub 이메일 목록 파싱 실패: {}", e))
            })?;

        emails
            .iter()
            .find(|e| e.primary && e.verified)
            .or_else(|| emails.first())
            .map(|e| e.email.clone())
            .ok_or_else(|| {
                AppError::ExternalServiceError(
                    "GitHub 계정에서 이메일을 찾을 수 없습니다".to_string(),
                )
            })
    }
}
