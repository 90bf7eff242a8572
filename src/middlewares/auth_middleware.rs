//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 호출자 정보를 추출합니다.
//! 토큰 서비스는 라우트 구성 시점에 명시적으로 주입됩니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::authentication_request::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
    /// 토큰 검증 서비스
    token_service: TokenService,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(mode: AuthMode, token_service: TokenService) -> Self {
        Self {
            mode,
            token_service,
        }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required(token_service: TokenService) -> Self {
        Self::new(AuthMode::Required, token_service)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional(token_service: TokenService) -> Self {
        Self::new(AuthMode::Optional, token_service)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
            token_service: self.token_service.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::AuthProvider;
    use crate::domain::models::auth::authenticated_user::AuthenticatedUser;

    #[test]
    fn test_authenticated_user_has_role() {
        let user = AuthenticatedUser {
            user_id: "test_id".to_string(),
            email: Some("test@example.com".to_string()),
            auth_provider: AuthProvider::Local,
            role: "admin".to_string(),
        };

        assert!(user.has_role("admin"));
        assert!(!user.has_role("user"));
        assert!(user.is_admin());
    }

    #[test]
    fn test_plain_user_is_not_admin() {
        let user = AuthenticatedUser {
            user_id: "test_id".to_string(),
            email: None,
            auth_provider: AuthProvider::Google,
            role: "user".to_string(),
        };

        assert!(user.has_role("user"));
        assert!(!user.is_admin());
    }
}
