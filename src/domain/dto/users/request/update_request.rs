//! 회원/프로필 수정 요청 DTO
//!
//! 부분 수정(partial update) 의미론을 따릅니다: 요청에 없는 필드는
//! 그대로 유지되고, 빈 값으로라도 제공된 필드는 덮어씁니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원 정보 수정 요청 DTO
///
/// 모든 필드가 선택적입니다. 이메일을 변경하는 경우 다른 계정이
/// 이미 사용 중이면 409 Conflict로 거부됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// 변경할 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    /// 변경할 이름
    #[validate(length(max = 100, message = "이름은 100자 이하여야 합니다"))]
    pub first_name: Option<String>,

    /// 변경할 성
    #[validate(length(max = 100, message = "성은 100자 이하여야 합니다"))]
    pub last_name: Option<String>,

    /// 변경할 전화번호
    pub phone: Option<String>,

    /// 변경할 생년월일 (YYYY-MM-DD)
    pub birth_date: Option<String>,
}

/// 프로필 수정 요청 DTO
///
/// URL 필드는 제공된 경우에만 형식을 검증합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// 경력 요약
    pub professional_summary: Option<String>,

    /// CV 문서 URL
    #[validate(url(message = "유효한 URL을 입력해주세요"))]
    pub cv_url: Option<String>,

    /// LinkedIn 프로필 URL
    #[validate(url(message = "유효한 URL을 입력해주세요"))]
    pub linkedin_url: Option<String>,

    /// GitHub 프로필 URL
    #[validate(url(message = "유효한 URL을 입력해주세요"))]
    pub github_url: Option<String>,

    /// 포트폴리오 URL
    #[validate(url(message = "유효한 URL을 입력해주세요"))]
    pub portfolio_url: Option<String>,
}
