//! 라우트 구성 모듈
//!
//! 모든 REST 엔드포인트를 등록합니다. 인증이 필요한 회원 변경/조회 라우트에는
//! JWT 인증 미들웨어가 적용되며, 본인/관리자 검사는 핸들러에서 수행됩니다.

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use crate::services::auth::TokenService;

/// 전체 라우트 구성
///
/// `main.rs`에서 `App::configure`의 클로저를 통해 호출되며,
/// 미들웨어에 주입할 토큰 서비스를 전달받습니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, token_service: TokenService) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg, token_service);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    // 인증 없이 접근 가능한 라우트
    cfg.service(
        web::scope("/api/v1/auth")
            // 로컬 인증
            .service(handlers::auth::register)
            .service(handlers::auth::local_login)
            // Google OAuth
            .service(handlers::auth::google_login_url)
            .service(handlers::auth::google_oauth_callback)
            // GitHub OAuth
            .service(handlers::auth::github_login_url)
            .service(handlers::auth::github_oauth_callback),
    );

    // 프로필 공개 조회
    cfg.service(web::scope("/api/v1/profiles").service(handlers::users::get_public_profile));
}

fn configure_user_routes(cfg: &mut web::ServiceConfig, token_service: TokenService) {
    // 인증이 필요한 회원 라우트 ("/me"가 "/{user_id}"보다 먼저 매칭되어야 함)
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(AuthMiddleware::required(token_service))
            .service(handlers::users::get_me)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::update_profile)
            .service(handlers::users::delete_user),
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "insend_member_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "auth": ["local", "google", "github"]
        }
    }))
}
