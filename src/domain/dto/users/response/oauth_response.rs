//! OAuth 관련 응답 DTO
//!
//! 프로바이더 토큰 교환 응답과 로그인 URL 응답을 정의합니다.

use serde::{Deserialize, Serialize};

/// OAuth 로그인 URL 응답
///
/// 클라이언트를 프로바이더 동의 화면으로 보내기 위한 URL과 state를 담습니다.
#[derive(Debug, Serialize)]
pub struct OAuthLoginUrlResponse {
    pub login_url: String,
    pub state: String,
}

/// Google 토큰 교환 응답
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
    pub expires_in: Option<i64>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub id_token: Option<String>,
}

/// GitHub 토큰 교환 응답
///
/// GitHub은 `Accept: application/json` 헤더를 보낸 경우에만 JSON으로 응답합니다.
#[derive(Debug, Deserialize)]
pub struct GithubTokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub scope: Option<String>,
}
