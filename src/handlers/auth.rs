//! 인증 관련 HTTP 핸들러
//!
//! 회원가입, 로컬 로그인, Google/GitHub OAuth 플로우의 엔드포인트를 제공합니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    config::AuthProvider,
    domain::dto::users::request::{LocalLoginRequest, OAuthCallbackQuery, RegisterRequest},
    errors::errors::AppError,
    services::{
        auth::{AuthService, GithubAuthService, GoogleAuthService},
        users::user_service::UserService,
    },
};

/// 로컬 회원가입
///
/// 회원을 생성하고 곧바로 액세스 토큰을 발급합니다.
#[post("/register")]
pub async fn register(
    payload: web::Json<RegisterRequest>,
    user_service: web::Data<UserService>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = user_service.create_local_user(payload.into_inner()).await?;
    let response = auth_service.login(user)?;

    Ok(HttpResponse::Created().json(response))
}

/// 로컬 로그인
#[post("/login")]
pub async fn local_login(
    payload: web::Json<LocalLoginRequest>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = auth_service
        .login_local(&payload.email, &payload.password)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Google 로그인 URL 발급
#[get("/google/login")]
pub async fn google_login_url(
    google_service: web::Data<GoogleAuthService>,
) -> Result<HttpResponse, AppError> {
    let url_response = google_service.get_login_url()?;

    Ok(HttpResponse::Ok().json(url_response))
}

/// Google OAuth 콜백
///
/// 인증 코드를 검증된 신원 주장으로 바꾼 뒤 계정 판정과 토큰 발급을 수행합니다.
#[get("/google/callback")]
pub async fn google_oauth_callback(
    query: web::Query<OAuthCallbackQuery>,
    google_service: web::Data<GoogleAuthService>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    // 에러 체크 (사용자가 거부했거나 에러 발생)
    if let Some(error) = &query.error {
        let error_msg = query
            .error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("Google OAuth 에러: {} - {}", error, error_msg);
        return Err(AppError::AuthenticationError(error_msg.to_string()));
    }

    // 유효성 검사
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let profile = google_service
        .authenticate_with_code(&query.code, &query.state)
        .await?;

    let response = auth_service
        .validate_oauth_login(profile, AuthProvider::Google)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// GitHub 로그인 URL 발급
#[get("/github/login")]
pub async fn github_login_url(
    github_service: web::Data<GithubAuthService>,
) -> Result<HttpResponse, AppError> {
    let url_response = github_service.get_login_url()?;

    Ok(HttpResponse::Ok().json(url_response))
}

/// GitHub OAuth 콜백
#[get("/github/callback")]
pub async fn github_oauth_callback(
    query: web::Query<OAuthCallbackQuery>,
    github_service: web::Data<GithubAuthService>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    if let Some(error) = &query.error {
        let error_msg = query
            .error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("GitHub OAuth 에러: {} - {}", error, error_msg);
        return Err(AppError::AuthenticationError(error_msg.to_string()));
    }

    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let profile = github_service
        .authenticate_with_code(&query.code, &query.state)
        .await?;

    let response = auth_service
        .validate_oauth_login(profile, AuthProvider::GitHub)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
