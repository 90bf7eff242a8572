//! Google 사용자 정보 페이로드
//!
//! Google `userinfo` 엔드포인트 응답을 매핑합니다.

use serde::Deserialize;

/// Google OAuth 사용자 정보
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    pub id: String,

    pub email: String,

    /// 전체 표시 이름 (given + family)
    pub name: String,

    pub given_name: Option<String>,

    pub family_name: Option<String>,

    pub picture: Option<String>,

    pub verified_email: Option<bool>,
}
