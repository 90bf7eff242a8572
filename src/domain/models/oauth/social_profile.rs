//! 소셜 신원 주장(identity claim) 모델

use serde::{Deserialize, Serialize};

/// 프로바이더 콜백에서 검증된 신원 주장
///
/// 프로바이더별 페이로드를 공통 형태로 정규화한 것으로,
/// 계정 판정 로직은 이 구조체만을 입력으로 받습니다.
/// `email`과 `name`이 비어 있으면 판정 전에 거부됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialProfile {
    /// 프로바이더가 검증한 이메일
    pub email: String,
    /// 전체 표시 이름 (공백 기준으로 이름/성 분리됨)
    pub name: String,
}
