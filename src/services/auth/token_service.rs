//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰의 생성과 검증을 담당합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    config::JwtConfig, domain::entities::users::user::User,
    domain::models::token::token::TokenClaims, errors::errors::AppError,
};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 안전한 JWT 토큰을 생성하고 검증합니다.
/// 시크릿과 만료 시간은 호출 시점에 [`JwtConfig`]에서 읽습니다.
#[derive(Clone, Default)]
pub struct TokenService;

impl TokenService {
    pub fn new() -> Self {
        Self
    }

    /// 회원을 위한 JWT 액세스 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `user` - 토큰을 발급받을 회원 정보
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 생성된 JWT 액세스 토큰
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 회원 ID 없음
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("회원 ID가 없습니다".to_string()))?,
            email: user.email.clone(),
            role: user.role.clone(),
            auth_provider: user.auth_provider.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 액세스 토큰 만료 시간(초)을 반환합니다.
    pub fn expires_in_seconds(&self) -> i64 {
        JwtConfig::expiration_hours() * 3600
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Returns
    ///
    /// * `Ok(TokenClaims)` - 검증된 토큰의 클레임 정보
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    /// * `AppError::InternalError` - 기타 시스템 오류
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
                _ => AppError::InternalError(format!("토큰 검증 실패: {}", e)),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let mut user = User::new_local(
            "bob@x.com".to_string(),
            "Bob".to_string(),
            "Kim".to_string(),
            "hash".to_string(),
        );
        user.id = Some(mongodb::bson::oid::ObjectId::new());
        user
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let token_service = TokenService::new();
        let user = sample_user();

        let token = token_service.generate_access_token(&user).unwrap();
        let claims = token_service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user.id_string().unwrap());
        assert_eq!(claims.email, "bob@x.com");
        assert_eq!(claims.role, "user");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_generate_token_without_id_fails() {
        let token_service = TokenService::new();
        let user = User::new_local(
            "bob@x.com".to_string(),
            "Bob".to_string(),
            "Kim".to_string(),
            "hash".to_string(),
        );

        let result = token_service.generate_access_token(&user);
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_verify_token_with_wrong_signature_fails_authentication() {
        let token_service = TokenService::new();
        let user = sample_user();

        // 다른 시크릿으로 서명된 토큰은 거부되어야 한다
        let claims = crate::domain::models::token::token::TokenClaims {
            sub: user.id_string().unwrap(),
            email: user.email.clone(),
            role: user.role.clone(),
            auth_provider: user.auth_provider.clone(),
            iat: chrono::Utc::now().timestamp(),
            exp: chrono::Utc::now().timestamp() + 3600,
        };
        let forged = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(b"some-other-secret"),
        )
        .unwrap();

        let result = token_service.verify_token(&forged);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let token_service = TokenService::new();

        assert_eq!(
            token_service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
        assert!(token_service.extract_bearer_token("Basic abc").is_err());
        assert!(token_service.extract_bearer_token("abc").is_err());
    }
}
