//! 추천 근거 문장 합성.
//!
//! 액션별로 팩터 임계값에 따라 문장을 선택하고 마침표로 연결합니다.
//! 결과는 입력의 결정적 함수이며, 프레젠테이션 레이어가 그대로
//! 노출하거나 가공할 수 있는 유일한 자연어 산출물입니다.

use gold_core::{RecommendationAction, RecommendationFactors, UserProfile};

/// 매수/매도에서 어떤 문장도 선택되지 않을 때의 일반 문구.
const FALLBACK_REASON: &str = "Multiple factors support this recommendation";

/// 근거 문장 합성기.
pub struct ReasoningComposer;

impl ReasoningComposer {
    /// 액션과 팩터 벡터로 근거 문자열을 합성합니다.
    ///
    /// 선택된 문장들을 `". "`로 연결하고 마지막에 마침표를 붙입니다.
    /// 결과는 비어 있지 않습니다.
    pub fn compose(
        action: RecommendationAction,
        factors: &RecommendationFactors,
        user: &UserProfile,
    ) -> String {
        let mut reasons: Vec<&'static str> = Vec::new();

        match action {
            RecommendationAction::Buy => {
                if factors.economic_score > 20.0 {
                    reasons.push(
                        "Current economic conditions favor gold investment with rising inflation",
                    );
                }
                if factors.geopolitical_score > 20.0 {
                    reasons.push("Increased geopolitical tensions make gold a safe haven asset");
                }
                if factors.price_movement < -2.0 {
                    reasons.push("Recent price dip presents a good buying opportunity");
                }
                if factors.goal_progress_score > 60.0 {
                    reasons.push("Aligning with your investment goals and SIP targets");
                }
                if factors.war_factors > 40.0 {
                    reasons.push("Global uncertainty drives demand for safe assets");
                }
            }
            RecommendationAction::Sell => {
                if factors.economic_score < -20.0 {
                    reasons.push("Economic indicators suggest lower gold demand");
                }
                if factors.political_stability > 70.0 {
                    reasons.push("Stable political environment may reduce safe haven appeal");
                }
                if factors.price_movement > 5.0 {
                    reasons.push("Significant price appreciation - consider booking profits");
                }
            }
            RecommendationAction::Hold => {
                reasons.push("Market conditions suggest maintaining current position");
                reasons.push("Gold continues to be a stable long-term wealth preserver");
                if user.has_sip_targets() {
                    reasons.push("Continue your SIP for rupee cost averaging benefits");
                }
            }
        }

        // 매수/매도에서 문장이 하나도 선택되지 않으면 일반 문구로 대체
        if reasons.is_empty() {
            reasons.push(FALLBACK_REASON);
        }

        let mut reasoning = reasons.join(". ");
        reasoning.push('.');
        reasoning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn factors() -> RecommendationFactors {
        RecommendationFactors {
            economic_score: 0.0,
            geopolitical_score: 0.0,
            gdp_trend: 0.0,
            war_factors: 0.0,
            political_stability: 50.0,
            current_affairs_impact: 0.0,
            price_movement: 0.0,
            user_behavior_score: 50.0,
            goal_progress_score: 50.0,
        }
    }

    fn user(with_sip: bool) -> UserProfile {
        use chrono::NaiveDate;
        use gold_core::{SipFrequency, SipTarget};

        let mut user = UserProfile {
            id: "user_1".to_string(),
            email: "a@b.c".to_string(),
            name: "Tester".to_string(),
            phone: None,
            total_gold_holdings: dec!(10),
            total_investment: dec!(60000),
            average_purchase_frequency_days: 30.0,
            sip_targets: vec![],
            wealth_targets: vec![],
        };
        if with_sip {
            user.sip_targets.push(SipTarget {
                id: "sip_1".to_string(),
                amount: dec!(5000),
                frequency: SipFrequency::Monthly,
                start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                target_amount: dec!(60000),
                current_progress: dec!(25000),
            });
        }
        user
    }

    #[test]
    fn test_buy_clauses_gated_by_thresholds() {
        let mut f = factors();
        f.economic_score = 50.0;
        f.price_movement = -3.5;

        let reasoning = ReasoningComposer::compose(RecommendationAction::Buy, &f, &user(false));
        assert!(reasoning.contains("rising inflation"));
        assert!(reasoning.contains("price dip"));
        assert!(!reasoning.contains("safe haven asset")); // geopolitical 0 <= 20
        assert!(reasoning.ends_with('.'));
    }

    #[test]
    fn test_sell_clauses() {
        let mut f = factors();
        f.economic_score = -30.0;
        f.political_stability = 95.0;
        f.price_movement = 6.0;

        let reasoning = ReasoningComposer::compose(RecommendationAction::Sell, &f, &user(false));
        assert!(reasoning.contains("lower gold demand"));
        assert!(reasoning.contains("reduce safe haven appeal"));
        assert!(reasoning.contains("booking profits"));
    }

    #[test]
    fn test_hold_includes_sip_clause_only_with_targets() {
        let f = factors();

        let without = ReasoningComposer::compose(RecommendationAction::Hold, &f, &user(false));
        assert!(without.contains("maintaining current position"));
        assert!(!without.contains("rupee cost averaging"));

        let with = ReasoningComposer::compose(RecommendationAction::Hold, &f, &user(true));
        assert!(with.contains("rupee cost averaging"));
    }

    #[test]
    fn test_fallback_when_no_clause_triggers() {
        // 어떤 매수 문장의 임계값도 넘지 않는 팩터
        let reasoning =
            ReasoningComposer::compose(RecommendationAction::Buy, &factors(), &user(false));
        assert_eq!(reasoning, "Multiple factors support this recommendation.");

        // 매도도 동일
        let reasoning =
            ReasoningComposer::compose(RecommendationAction::Sell, &factors(), &user(false));
        assert_eq!(reasoning, "Multiple factors support this recommendation.");
    }

    #[test]
    fn test_clause_order_is_stable() {
        let mut f = factors();
        f.economic_score = 50.0;
        f.geopolitical_score = 50.0;
        f.price_movement = -5.0;
        f.goal_progress_score = 80.0;
        f.war_factors = 60.0;

        let reasoning = ReasoningComposer::compose(RecommendationAction::Buy, &f, &user(false));
        let economic_pos = reasoning.find("economic conditions").unwrap();
        let war_pos = reasoning.find("Global uncertainty").unwrap();
        assert!(economic_pos < war_pos);
    }
}
