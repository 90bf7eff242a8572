//! 회원가입 요청 DTO
//!
//! 새로운 로컬 회원 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로컬 회원가입 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 비밀번호는 로컬 가입에서 필수이지만, 누락 검증은 계정 생성 로직이
/// 저장소 접근 전에 직접 수행합니다 (400 Bad Request).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 회원 이메일 주소 (시스템 전역 유니크)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (로컬 가입 시 필수, 최소 6자)
    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: Option<String>,

    /// 이름
    #[validate(length(min = 1, message = "이름을 입력해주세요"))]
    pub first_name: String,

    /// 성
    #[validate(length(min = 1, message = "성을 입력해주세요"))]
    pub last_name: String,

    /// 전화번호 (선택)
    pub phone: Option<String>,

    /// 생년월일 (선택, YYYY-MM-DD)
    pub birth_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> RegisterRequest {
        RegisterRequest {
            email: "test@example.com".to_string(),
            password: Some("secret1".to_string()),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            phone: None,
            birth_date: None,
        }
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(base_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_fails_validation() {
        let mut request = base_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_short_password_fails_validation() {
        let mut request = base_request();
        request.password = Some("short".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_password_passes_boundary_validation() {
        // 비밀번호 누락은 경계가 아니라 계정 생성 로직이 거부한다
        let mut request = base_request();
        request.password = None;
        assert!(request.validate().is_ok());
    }
}
