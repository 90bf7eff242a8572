//! Profile Entity Implementation
//!
//! 회원이 단독으로 소유하는 확장 프로필 엔티티입니다.
//! 회원 생성 직후 빈 상태로 자동 생성되며, 회원당 최대 1개만 존재합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 회원 프로필 엔티티
///
/// 경력 요약과 외부 링크(CV, LinkedIn, GitHub, 포트폴리오)를 보관합니다.
/// `user_id`에 유니크 인덱스가 걸려 있어 회원당 1개 제약이 저장소 수준에서 보장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소유 회원 ID (unique, 일대일)
    pub user_id: ObjectId,
    /// 경력 요약
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_summary: Option<String>,
    /// CV 문서 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_url: Option<String>,
    /// LinkedIn 프로필 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    /// GitHub 프로필 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// 포트폴리오 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Profile {
    /// 회원 생성 직후 호출되는 빈 프로필 생성자
    pub fn new_empty(user_id: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user_id,
            professional_summary: None,
            cv_url: None,
            linkedin_url: None,
            github_url: None,
            portfolio_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 수정 시간을 현재 시각으로 갱신
    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}
