//! 회원 변경 접근 제어
//!
//! 회원 데이터 변경 요청(회원 수정/삭제, 프로필 수정)에 적용되는
//! 유일한 인가 로직입니다. 호출자가 대상 본인이거나 관리자인 경우에만
//! 허용합니다. 리소스 수준 ACL이나 소유권 체인은 없습니다.

use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::errors::AppError;

/// 회원 변경 권한 검사
///
/// `(호출자 ID, 호출자 역할, 대상 ID)`에 대한 순수 판정 함수입니다.
///
/// # 인자
///
/// * `caller` - 토큰에서 추출된 인증 호출자
/// * `target_user_id` - 변경 대상 회원 ID
///
/// # 반환값
///
/// * `Ok(())` - 본인이거나 관리자인 경우
/// * `Err(AppError::AuthorizationError)` - 그 외 (403 Forbidden)
pub fn authorize_account_mutation(
    caller: &AuthenticatedUser,
    target_user_id: &str,
) -> Result<(), AppError> {
    if caller.user_id == target_user_id || caller.is_admin() {
        return Ok(());
    }

    log::warn!(
        "권한 없는 변경 시도: 호출자 {} (역할 {}) → 대상 {}",
        caller.user_id,
        caller.role,
        target_user_id
    );

    Err(AppError::AuthorizationError(
        "이 회원에 대한 변경 권한이 없습니다".to_string(),
    ))
}
