//! # Authentication Configuration Module
//!
//! OAuth 프로바이더, JWT 토큰 등 인증 관련 설정을 관리하는 모듈입니다.
//! 로컬 인증과 Google/GitHub OAuth 2.0 소셜 로그인을 지원합니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **로컬 인증**: 이메일/패스워드 기반 전통적인 인증
//! 2. **Google OAuth 2.0**: Google 계정을 통한 소셜 로그인
//! 3. **GitHub OAuth 2.0**: GitHub 계정을 통한 소셜 로그인
//! 4. **JWT 토큰**: Stateless 인증을 위한 JSON Web Token
//!
//! ## 필수 환경 변수 설정
//!
//! ### Google OAuth 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:8080/api/v1/auth/google/callback"
//! ```
//!
//! ### GitHub OAuth 설정
//! ```bash
//! export GITHUB_CLIENT_ID="your-github-client-id"
//! export GITHUB_CLIENT_SECRET="your-github-client-secret"
//! export GITHUB_REDIRECT_URI="http://localhost:8080/api/v1/auth/github/callback"
//! ```
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```

use std::env;

/// Google OAuth 2.0 설정을 관리하는 구조체
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보를 관리합니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// Google OAuth Client ID를 반환합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID must be set")
    }

    /// Google OAuth Client Secret을 반환합니다.
    ///
    /// 서버 사이드에서만 사용되며, 토큰 교환 시 사용됩니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("GOOGLE_CLIENT_SECRET").expect("GOOGLE_CLIENT_SECRET must be set")
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// Google Cloud Console의 승인된 리디렉션 URI 목록에 등록되어 있어야 합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_REDIRECT_URI` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI").expect("GOOGLE_REDIRECT_URI must be set")
    }

    /// Google OAuth 인증 서버의 인증 엔드포인트 URI를 반환합니다.
    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string())
    }

    /// Google OAuth 토큰 교환 엔드포인트 URI를 반환합니다.
    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    /// Google 사용자 정보 조회 엔드포인트 URI를 반환합니다.
    pub fn user_info_uri() -> String {
        env::var("GOOGLE_USER_INFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v2/userinfo".to_string())
    }
}

/// GitHub OAuth 2.0 설정을 관리하는 구조체
///
/// GitHub Developer Settings 에서 생성한 OAuth App 정보를 관리합니다.
/// GitHub은 이메일이 비공개인 계정이 있으므로 `user:email` 스코프가 필요합니다.
pub struct GithubOAuthConfig;

impl GithubOAuthConfig {
    /// GitHub OAuth Client ID를 반환합니다.
    ///
    /// # Panics
    ///
    /// `GITHUB_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("GITHUB_CLIENT_ID").expect("GITHUB_CLIENT_ID must be set")
    }

    /// GitHub OAuth Client Secret을 반환합니다.
    ///
    /// # Panics
    ///
    /// `GITHUB_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("GITHUB_CLIENT_SECRET").expect("GITHUB_CLIENT_SECRET must be set")
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// # Panics
    ///
    /// `GITHUB_REDIRECT_URI` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn redirect_uri() -> String {
        env::var("GITHUB_REDIRECT_URI").expect("GITHUB_REDIRECT_URI must be set")
    }

    /// GitHub OAuth 인증 엔드포인트 URI를 반환합니다.
    pub fn auth_uri() -> String {
        env::var("GITHUB_AUTH_URI")
            .unwrap_or_else(|_| "https://github.com/login/oauth/authorize".to_string())
    }

    /// GitHub OAuth 토큰 교환 엔드포인트 URI를 반환합니다.
    pub fn token_uri() -> String {
        env::var("GITHUB_TOKEN_URI")
            .unwrap_or_else(|_| "https://github.com/login/oauth/access_token".to_string())
    }

    /// GitHub API 기본 URI를 반환합니다.
    ///
    /// 사용자 정보(`/user`)와 이메일 목록(`/user/emails`) 조회에 사용됩니다.
    pub fn api_base_uri() -> String {
        env::var("GITHUB_API_BASE_URI")
            .unwrap_or_else(|_| "https://api.github.com".to_string())
    }
}

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 시크릿을 반환합니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// 액세스 토큰 만료 시간(시간 단위)을 반환합니다.
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

/// OAuth 보안 설정
pub struct OAuthConfig;

impl OAuthConfig {
    /// OAuth state 생성에 사용할 시크릿을 반환합니다.
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET").unwrap_or_else(|_| {
            log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
            "oauth-state-secret".to_string()
        })
    }
}

/// 계정의 인증 수단
///
/// 계정 생성 시 한 번 기록되며, 이후 관리적 수정 외에는 변경되지 않습니다.
/// 동일한 이메일을 서로 다른 인증 수단으로 중복 사용할 수 없습니다.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AuthProvider {
    Local,

    Google,

    GitHub,
}

impl AuthProvider {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            "github" => Ok(AuthProvider::GitHub),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
            AuthProvider::GitHub => "github",
        }
    }
}
