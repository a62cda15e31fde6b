//! 분석 이벤트 타입.
//!
//! 사용자 행동 및 시스템 이벤트를 태그된 variant로 표현합니다.
//! 임의 key-value 메타데이터 대신 이벤트 종류별로 필드를 고정하여
//! 집계 시 타입 안전성을 보장합니다.

use crate::domain::RecommendationAction;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 거래 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSide {
    /// 매수
    Buy,
    /// 매도
    Sell,
}

/// 이벤트 종류.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum EventKind {
    /// 페이지 조회
    PageView {
        /// 조회한 페이지 경로
        page: String,
    },
    /// 거래 체결
    Transaction {
        /// 거래 방향
        side: TradeSide,
        /// 거래 금액
        amount: Decimal,
        /// 거래 중량 (그램)
        gold_grams: Decimal,
    },
    /// 추천 노출
    RecommendationShown {
        /// 노출된 추천 액션
        action: RecommendationAction,
        /// 노출 시점 확신도
        confidence: f64,
    },
    /// 추천 클릭
    RecommendationClicked {
        /// 클릭된 추천 액션
        action: RecommendationAction,
    },
    /// 일반 사용자 행동
    UserAction {
        /// 행동 라벨
        action: String,
    },
}

impl EventKind {
    /// 와이어 라벨 (집계 키).
    pub fn name(&self) -> &'static str {
        match self {
            Self::PageView { .. } => "page_view",
            Self::Transaction { .. } => "transaction",
            Self::RecommendationShown { .. } => "recommendation_shown",
            Self::RecommendationClicked { .. } => "recommendation_clicked",
            Self::UserAction { .. } => "user_action",
        }
    }
}

/// 분석 이벤트.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    /// 이벤트 ID
    pub id: Uuid,
    /// 사용자 ID
    pub user_id: String,
    /// 발생 시각
    pub timestamp: DateTime<Utc>,
    /// 이벤트 내용
    #[serde(flatten)]
    pub kind: EventKind,
}

impl AnalyticsEvent {
    /// 새 이벤트를 생성합니다.
    pub fn new(user_id: impl Into<String>, kind: EventKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            timestamp: Utc::now(),
            kind,
        }
    }

    /// 페이지 조회 이벤트.
    pub fn page_view(user_id: impl Into<String>, page: impl Into<String>) -> Self {
        Self::new(user_id, EventKind::PageView { page: page.into() })
    }

    /// 거래 이벤트.
    pub fn transaction(
        user_id: impl Into<String>,
        side: TradeSide,
        amount: Decimal,
        gold_grams: Decimal,
    ) -> Self {
        Self::new(
            user_id,
            EventKind::Transaction {
                side,
                amount,
                gold_grams,
            },
        )
    }

    /// 추천 노출 이벤트.
    pub fn recommendation_shown(
        user_id: impl Into<String>,
        action: RecommendationAction,
        confidence: f64,
    ) -> Self {
        Self::new(user_id, EventKind::RecommendationShown { action, confidence })
    }

    /// 추천 클릭 이벤트.
    pub fn recommendation_clicked(
        user_id: impl Into<String>,
        action: RecommendationAction,
    ) -> Self {
        Self::new(user_id, EventKind::RecommendationClicked { action })
    }

    /// 일반 사용자 행동 이벤트.
    pub fn user_action(user_id: impl Into<String>, action: impl Into<String>) -> Self {
        Self::new(
            user_id,
            EventKind::UserAction {
                action: action.into(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_event_kind_name() {
        let event = AnalyticsEvent::page_view("user_1", "/home");
        assert_eq!(event.kind.name(), "page_view");

        let event =
            AnalyticsEvent::transaction("user_1", TradeSide::Buy, dec!(5000), dec!(0.8));
        assert_eq!(event.kind.name(), "transaction");
    }

    #[test]
    fn test_event_serde_tag() {
        let event = AnalyticsEvent::recommendation_shown("user_1", RecommendationAction::Buy, 82.0);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event_type"], "recommendation_shown");
        assert_eq!(json["action"], "buy");
        assert_eq!(json["user_id"], "user_1");
    }

    #[test]
    fn test_unique_event_ids() {
        let a = AnalyticsEvent::page_view("user_1", "/home");
        let b = AnalyticsEvent::page_view("user_1", "/home");
        assert_ne!(a.id, b.id);
    }
}
