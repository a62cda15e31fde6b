//! 추천 팩터 계산기.
//!
//! 거시경제/지정학 지표, 금 시세, 사용자 프로필에서 9개 팩터 점수를
//! 계산합니다. 모든 계산은 순수 함수이며 호출 순서에 의존하지 않습니다.
//!
//! # 9 Factors
//!
//! 1. **economic_score** - 인플레이션/금리 환경 (-100 ~ 100)
//! 2. **geopolitical_score** - 리스크 수준 + 역(逆)심리 (-100 ~ 100)
//! 3. **gdp_trend** - GDP 추세 ×10 클램프 (-100 ~ 100)
//! 4. **war_factors** - 지정학 리스크 수준 그대로 (0 ~ 100)
//! 5. **political_stability** - 100 − 리스크 수준 (0 ~ 100)
//! 6. **current_affairs_impact** - 시장 심리 점수 그대로 (-100 ~ 100)
//! 7. **price_movement** - 24시간 변동률, 유일한 비클램프 통과값
//! 8. **user_behavior_score** - 투자 습관 (0 ~ 100)
//! 9. **goal_progress_score** - SIP/자산 목표 진척 (0 ~ 100)

use gold_core::{EconomicIndicators, GoldPrice, RecommendationFactors, UserProfile};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 목표 진척 보너스가 발생하는 기준 진척률 (%).
const PROGRESS_BONUS_THRESHOLD: Decimal = dec!(80);

/// 정기 투자자로 간주하는 구매 주기 상한 (일).
const REGULAR_BUYER_MAX_FREQUENCY_DAYS: f64 = 45.0;

/// 팩터 계산기.
pub struct FactorCalculator;

impl FactorCalculator {
    /// 9개 팩터 점수 계산.
    ///
    /// # 인자
    ///
    /// * `user` - 사용자 투자 프로필
    /// * `price` - 금 시세 스냅샷
    /// * `indicators` - 거시경제/지정학 지표
    pub fn calculate(
        user: &UserProfile,
        price: &GoldPrice,
        indicators: &EconomicIndicators,
    ) -> RecommendationFactors {
        RecommendationFactors {
            economic_score: Self::economic_score(indicators),
            geopolitical_score: Self::geopolitical_score(indicators),
            gdp_trend: Self::gdp_trend_score(indicators),
            war_factors: indicators.geopolitical_risk.level,
            political_stability: 100.0 - indicators.geopolitical_risk.level,
            current_affairs_impact: indicators.market_sentiment.score,
            price_movement: price.change_percent_24h,
            user_behavior_score: Self::user_behavior_score(user),
            goal_progress_score: Self::goal_progress_score(user),
        }
    }

    /// 경제 팩터 계산.
    ///
    /// 높은 인플레이션과 낮은 금리는 금에 긍정적:
    /// - 인플레이션 > 3%: +30
    /// - 인플레이션 상승 추세: +20
    /// - 금리 < 4%: +25
    /// - 금리 하락 추세: +25
    fn economic_score(indicators: &EconomicIndicators) -> f64 {
        let mut score = 0.0;

        if indicators.inflation.current > 3.0 {
            score += 30.0;
        }

        if indicators.inflation.trend > 0.0 {
            score += 20.0;
        }

        if indicators.interest_rate.current < 4.0 {
            score += 25.0;
        }

        if indicators.interest_rate.trend < 0.0 {
            score += 25.0;
        }

        // 현재 공식은 음수가 될 수 없지만 범위 계약은 클램프로 보장
        Self::clamp(score, -100.0, 100.0)
    }

    /// 지정학 팩터 계산.
    ///
    /// 높은 분쟁 리스크와 부정적 시장 심리는 모두 금의 안전자산
    /// 수요를 높입니다.
    fn geopolitical_score(indicators: &EconomicIndicators) -> f64 {
        let risk_score = indicators.geopolitical_risk.level;
        let sentiment_score = -indicators.market_sentiment.score / 2.0;

        Self::clamp(risk_score + sentiment_score, -100.0, 100.0)
    }

    /// GDP 추세 팩터 계산 (원시 추세 ×10, ±100 클램프).
    fn gdp_trend_score(indicators: &EconomicIndicators) -> f64 {
        let scaled = indicators.gdp.trend * 10.0;
        if indicators.gdp.trend > 0.0 {
            scaled.min(100.0)
        } else {
            scaled.max(-100.0)
        }
    }

    /// 사용자 행동 팩터 계산.
    ///
    /// 중립 50에서 시작:
    /// - 정기 투자자 (0 < 구매 주기 < 45일): +30
    /// - 활성 SIP 목표 보유: +20
    fn user_behavior_score(user: &UserProfile) -> f64 {
        let mut score = 50.0;

        if user.average_purchase_frequency_days > 0.0
            && user.average_purchase_frequency_days < REGULAR_BUYER_MAX_FREQUENCY_DAYS
        {
            score += 30.0;
        }

        if user.has_sip_targets() {
            score += 20.0;
        }

        Self::clamp(score, 0.0, 100.0)
    }

    /// 목표 진척 팩터 계산.
    ///
    /// 중립 50에서 시작:
    /// - SIP 평균 진척률 < 80%: +30 (적립 독려)
    /// - 자산 목표 평균 진척률 < 80%: +20
    ///
    /// 분모가 0 이하인 목표는 평균에서 제외합니다 (비유한 비율 방지).
    fn goal_progress_score(user: &UserProfile) -> f64 {
        let mut score = 50.0;

        let sip_progress = Self::average_progress_pct(
            user.sip_targets
                .iter()
                .map(|t| (t.current_progress, t.target_amount)),
        );
        if let Some(avg) = sip_progress {
            if avg < PROGRESS_BONUS_THRESHOLD {
                score += 30.0;
            }
        }

        let wealth_progress = Self::average_progress_pct(
            user.wealth_targets
                .iter()
                .map(|t| (t.current_grams, t.target_gold_grams)),
        );
        if let Some(avg) = wealth_progress {
            if avg < PROGRESS_BONUS_THRESHOLD {
                score += 20.0;
            }
        }

        Self::clamp(score, 0.0, 100.0)
    }

    /// (현재값, 목표값) 쌍의 평균 진척률 (%).
    ///
    /// 목표값이 0 이하인 항목은 건너뜁니다. 유효한 항목이 없으면 `None`.
    fn average_progress_pct(
        pairs: impl Iterator<Item = (Decimal, Decimal)>,
    ) -> Option<Decimal> {
        let mut sum = Decimal::ZERO;
        let mut count: u32 = 0;

        for (current, target) in pairs {
            if target <= Decimal::ZERO {
                continue;
            }
            sum += current / target * dec!(100);
            count += 1;
        }

        if count == 0 {
            None
        } else {
            Some(sum / Decimal::from(count))
        }
    }

    /// 범위 클램프 헬퍼.
    fn clamp(value: f64, min: f64, max: f64) -> f64 {
        value.max(min).min(max)
    }
}
