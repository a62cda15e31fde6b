//! 추천 결과 타입.
//!
//! 엔진의 유일한 출력 레코드와 그 구성 요소를 정의합니다:
//! - `RecommendationAction` - 매수/보유/매도 액션
//! - `RiskLevel` - 변동성 기반 리스크 등급
//! - `RecommendationFactors` - 9개 팩터 점수 벡터
//! - `Recommendation` - 최종 추천 레코드

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 추천 액션.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum RecommendationAction {
    /// 매수
    Buy,
    /// 보유 (기본값)
    #[default]
    Hold,
    /// 매도
    Sell,
}

impl RecommendationAction {
    /// 실제 거래(매수/매도)를 제안하는지 여부.
    pub fn is_trade(self) -> bool {
        !matches!(self, Self::Hold)
    }

    /// 표시용 설명.
    pub fn description(self) -> &'static str {
        match self {
            Self::Buy => "지금이 매수 적기",
            Self::Hold => "현재 포지션 유지",
            Self::Sell => "차익 실현 고려",
        }
    }
}

impl fmt::Display for RecommendationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Buy => "BUY",
            Self::Hold => "HOLD",
            Self::Sell => "SELL",
        };
        write!(f, "{}", s)
    }
}

/// 리스크 등급.
///
/// 가격 변동과 심리/지정학 강도를 결합한 변동성 프록시에서 파생되는
/// low/medium/high 버킷입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum RiskLevel {
    /// 낮음 (기본값)
    #[default]
    Low,
    /// 보통
    Medium,
    /// 높음
    High,
}

impl RiskLevel {
    /// 리스크 우선순위 (높을수록 위험).
    pub fn priority(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// 주의 필요 여부.
    pub fn needs_caution(self) -> bool {
        !matches!(self, Self::Low)
    }

    /// 컬러 코드 (UI용).
    pub fn color_code(self) -> &'static str {
        match self {
            Self::Low => "#10b981",    // 녹색
            Self::Medium => "#f59e0b", // 주황색
            Self::High => "#ef4444",   // 빨간색
        }
    }

    /// 설명 문자열.
    pub fn description(self) -> &'static str {
        match self {
            Self::Low => "낮은 변동성",
            Self::Medium => "보통 변동성",
            Self::High => "높은 변동성",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        };
        write!(f, "{}", s)
    }
}

/// 추천 팩터 벡터.
///
/// 평가 1회당 하나의 인스턴스가 파생됩니다. 클램프 범위를 가진 필드는
/// 극단 입력에서도 범위를 유지해야 하며, `price_movement`만이 라이브
/// 입력의 비클램프 통과값입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationFactors {
    /// 경제 점수 (-100 ~ 100)
    pub economic_score: f64,
    /// 지정학 점수 (-100 ~ 100)
    pub geopolitical_score: f64,
    /// GDP 추세 점수 (-100 ~ 100, 원시 추세 ×10 클램프)
    pub gdp_trend: f64,
    /// 분쟁 요인 (0 ~ 100, 지정학 리스크 수준 그대로)
    pub war_factors: f64,
    /// 정치 안정성 (0 ~ 100, 100 − 리스크 수준)
    pub political_stability: f64,
    /// 시사 영향 (-100 ~ 100, 시장 심리 점수 그대로)
    pub current_affairs_impact: f64,
    /// 24시간 가격 변동률 (비클램프 %)
    pub price_movement: f64,
    /// 사용자 행동 점수 (0 ~ 100)
    pub user_behavior_score: f64,
    /// 목표 진척 점수 (0 ~ 100)
    pub goal_progress_score: f64,
}

/// 최종 추천 레코드.
///
/// 호출마다 새로 생성되며 생성 후 변경되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// 추천 액션
    pub action: RecommendationAction,
    /// 확신도 (0 ~ 95)
    pub confidence: f64,
    /// 근거 문장 (비어 있지 않음)
    pub reasoning: String,
    /// 사용된 팩터 벡터
    pub factors: RecommendationFactors,
    /// 제안 투자 금액 (매수일 때만 존재)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_amount: Option<Decimal>,
    /// 기대 수익률 (%, 매도 시 0)
    pub expected_return: f64,
    /// 리스크 등급
    pub risk_level: RiskLevel,
    /// 평가 시각
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_is_trade() {
        assert!(RecommendationAction::Buy.is_trade());
        assert!(RecommendationAction::Sell.is_trade());
        assert!(!RecommendationAction::Hold.is_trade());
    }

    #[test]
    fn test_action_display() {
        assert_eq!(RecommendationAction::Buy.to_string(), "BUY");
        assert_eq!(RecommendationAction::Hold.to_string(), "HOLD");
        assert_eq!(RecommendationAction::Sell.to_string(), "SELL");
    }

    #[test]
    fn test_action_default() {
        assert_eq!(RecommendationAction::default(), RecommendationAction::Hold);
    }

    #[test]
    fn test_risk_priority_order() {
        assert!(RiskLevel::High.priority() > RiskLevel::Medium.priority());
        assert!(RiskLevel::Medium.priority() > RiskLevel::Low.priority());
    }

    #[test]
    fn test_risk_needs_caution() {
        assert!(RiskLevel::High.needs_caution());
        assert!(RiskLevel::Medium.needs_caution());
        assert!(!RiskLevel::Low.needs_caution());
    }

    #[test]
    fn test_serde_tags() {
        assert_eq!(
            serde_json::to_string(&RecommendationAction::Buy).unwrap(),
            "\"buy\""
        );
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
    }
}
