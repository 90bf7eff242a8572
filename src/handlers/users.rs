//! 회원 관련 HTTP 핸들러
//!
//! 회원/프로필 조회와 변경 엔드포인트를 제공합니다.
//! 변경 엔드포인트는 서비스 호출 전에 본인/관리자 접근 제어를 수행합니다.

use actix_web::{delete, get, patch, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    domain::dto::users::request::{UpdateProfileRequest, UpdateUserRequest},
    domain::models::auth::authenticated_user::AuthenticatedUser,
    errors::errors::AppError,
    services::{auth::access_guard, users::user_service::UserService},
};

/// 현재 로그인한 회원과 프로필 조회
#[get("/me")]
pub async fn get_me(
    caller: AuthenticatedUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let (user, profile) = user_service.get_user_with_profile(&caller.user_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "user": user,
        "profile": profile,
    })))
}

/// ID로 회원 조회
#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 회원 정보 부분 수정
///
/// 본인 또는 관리자만 수정할 수 있습니다.
#[patch("/{user_id}")]
pub async fn update_user(
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
    caller: AuthenticatedUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    // 접근 제어: 본인 또는 관리자
    access_guard::authorize_account_mutation(&caller, &user_id)?;

    let updated = user_service
        .update_user(&user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// 프로필 수정
///
/// 본인 또는 관리자만 수정할 수 있습니다.
#[put("/{user_id}/profile")]
pub async fn update_profile(
    user_id: web::Path<String>,
    payload: web::Json<UpdateProfileRequest>,
    caller: AuthenticatedUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    access_guard::authorize_account_mutation(&caller, &user_id)?;

    let updated = user_service
        .update_profile(&user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// 회원 삭제
///
/// 본인 또는 관리자만 삭제할 수 있습니다. 프로필이 함께 삭제됩니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<String>,
    caller: AuthenticatedUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    access_guard::authorize_account_mutation(&caller, &user_id)?;

    user_service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 회원 프로필 공개 조회
///
/// 프로필과 소유 회원 요약을 반환합니다. 인증이 필요하지 않습니다.
#[get("/{user_id}")]
pub async fn get_public_profile(
    user_id: web::Path<String>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let profile = user_service.get_user_profile(&user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}
