//! JWT 인증 토큰 클레임 구조체
//!
//! RFC 7519 JWT 표준 클레임과 애플리케이션 특화 클레임을 포함합니다.

use crate::config::AuthProvider;
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (회원 ID)
/// - `email`: 회원 이메일
/// - `role`: 회원 역할 (접근 제어용)
/// - `auth_provider`: 인증 수단
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (회원 ID)
    pub sub: String,
    /// 회원 이메일
    pub email: String,
    /// 회원 역할
    pub role: String,
    /// 인증 프로바이더
    pub auth_provider: AuthProvider,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}
