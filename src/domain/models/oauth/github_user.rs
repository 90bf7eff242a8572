//! GitHub 사용자 정보 페이로드
//!
//! GitHub `/user`, `/user/emails` API 응답을 매핑합니다.

use serde::Deserialize;

/// GitHub OAuth 사용자 정보
///
/// `name`과 `email`은 계정 설정에 따라 비어 있을 수 있습니다.
/// 이메일이 비공개인 경우 `/user/emails`에서 primary 이메일을 조회합니다.
#[derive(Debug, Deserialize)]
pub struct GithubUserInfo {
    pub id: i64,

    /// GitHub 로그인 아이디 (표시 이름이 없을 때 대체로 사용)
    pub login: String,

    pub name: Option<String>,

    pub email: Option<String>,

    pub avatar_url: Option<String>,
}

/// GitHub 이메일 목록 항목
#[derive(Debug, Deserialize)]
pub struct GithubEmail {
    pub email: String,
    pub primary: bool,
    pub verified: bool,
}
