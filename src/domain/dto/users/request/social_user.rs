//! 소셜 회원 생성/갱신 데이터
//!
//! 프로바이더 콜백에서 정규화된 신원 주장을 계정 판정 로직에 전달하는
//! 내부 전용 구조체입니다. HTTP 경계에서 직접 역직렬화되지 않습니다.

use crate::config::AuthProvider;

/// 소셜 회원 생성/갱신 입력
///
/// 표시 이름은 이미 이름/성으로 분리된 상태이며,
/// `auth_provider`는 콜백을 처리한 프로바이더의 태그입니다.
#[derive(Debug, Clone)]
pub struct SocialUserData {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub auth_provider: AuthProvider,
}
