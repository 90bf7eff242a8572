//! 인센드 회원 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결과 인덱스를 설정하고, 서비스들을 명시적으로 조립한 뒤
//! JWT 인증 기반의 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use member_service_backend::config::ServerConfig;
use member_service_backend::db::Database;
use member_service_backend::repositories::users::{
    ProfileRepository, ProfileStore, UserRepository, UserStore,
};
use member_service_backend::routes::configure_all_routes;
use member_service_backend::services::auth::{
    AuthService, GithubAuthService, GoogleAuthService, TokenService,
};
use member_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 인센드 회원 서비스 시작중...");

    // 데이터 스토어 초기화
    let database = initialize_database().await;

    // 리포지토리 생성 및 인덱스 보장
    let user_repo = Arc::new(UserRepository::new(&database));
    let profile_repo = Arc::new(ProfileRepository::new(&database));

    user_repo
        .create_indexes()
        .await
        .expect("회원 인덱스 생성 실패");
    profile_repo
        .create_indexes()
        .await
        .expect("프로필 인덱스 생성 실패");

    info!("✅ 데이터베이스 인덱스 준비 완료");

    // 서비스 명시적 조립 (생성자 주입)
    let user_store: Arc<dyn UserStore> = user_repo;
    let profile_store: Arc<dyn ProfileStore> = profile_repo;

    let user_service = Arc::new(UserService::new(user_store, profile_store));
    let token_service = TokenService::new();
    let auth_service = Arc::new(AuthService::new(
        user_service.clone(),
        token_service.clone(),
    ));
    let google_service = GoogleAuthService::new();
    let github_service = GithubAuthService::new();

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(
        user_service,
        auth_service,
        token_service,
        google_service,
        github_service,
    )
    .await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함하며,
/// 조립된 서비스들을 애플리케이션 데이터로 등록합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    user_service: Arc<UserService>,
    auth_service: Arc<AuthService>,
    token_service: TokenService,
    google_service: GoogleAuthService,
    github_service: GithubAuthService,
) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API 엔드포인트: http://{}/api/v1", bind_address);

    let user_service_data = web::Data::from(user_service);
    let auth_service_data = web::Data::from(auth_service);
    let google_service_data = web::Data::new(google_service);
    let github_service_data = web::Data::new(github_service);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();
        let token_service = token_service.clone();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 조립된 서비스 등록
            .app_data(user_service_data.clone())
            .app_data(auth_service_data.clone())
            .app_data(google_service_data.clone())
            .app_data(github_service_data.clone())
            // 라우트 설정
            .configure(|cfg| configure_all_routes(cfg, token_service))
    })
    .bind(bind_address)?
    .workers(4) // 워커 스레드 수
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결을 초기화합니다
///
/// 연결 실패 시 애플리케이션이 종료됩니다.
async fn initialize_database() -> Database {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.expect("데이터베이스 연결 실패");

    info!("✅ MongoDB 연결 성공");

    database
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드와의 통신을 위한 CORS(Cross-Origin Resource Sharing) 설정을 구성합니다.
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // 자격 증명(쿠키 등) 지원
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
