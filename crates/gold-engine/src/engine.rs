//! 추천 엔진.
//!
//! 팩터 벡터를 종합 점수로 축약하고 액션/확신도/리스크/기대 수익률/
//! 제안 금액을 도출합니다. `evaluate`는 실패하지 않으며 호출마다 완전한
//! 추천 레코드를 반환합니다.

use crate::config::EngineConfig;
use crate::factors::FactorCalculator;
use crate::reasoning::ReasoningComposer;
use chrono::Utc;
use gold_core::{
    EconomicIndicators, GoldPrice, Recommendation, RecommendationAction, RecommendationFactors,
    RiskLevel, UserProfile,
};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info};

/// 매수 확신도 기울기 (종합 점수 1점당).
const TRADE_CONFIDENCE_SLOPE: f64 = 0.5;
/// 매수/매도 확신도 기저값.
const TRADE_CONFIDENCE_BASE: f64 = 60.0;
/// 보유 확신도 기울기.
const HOLD_CONFIDENCE_SLOPE: f64 = 0.3;
/// 보유 확신도 기저값.
const HOLD_CONFIDENCE_BASE: f64 = 50.0;

/// 변동성 프록시의 리스크 등급 임계값.
const HIGH_VOLATILITY_THRESHOLD: f64 = 60.0;
const MEDIUM_VOLATILITY_THRESHOLD: f64 = 30.0;

/// 추천 스코어링 엔진.
///
/// 설정 외의 상태가 없는 값 타입입니다. 공유 인스턴스가 필요 없으며
/// 여러 평가를 병렬로 실행해도 안전합니다.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    /// 주어진 설정으로 엔진을 생성합니다.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// 현재 설정에 대한 참조.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 추천 평가.
    ///
    /// # 인자
    ///
    /// * `user` - 사용자 투자 프로필
    /// * `price` - 금 시세 스냅샷
    /// * `indicators` - 거시경제/지정학 지표
    /// * `_historical_changes` - 최근 30일 일별 변동률 시계열.
    ///   인터페이스 호환성을 위해 받지만 현재 어떤 팩터 계산에도
    ///   사용되지 않습니다.
    ///   TODO: 모멘텀 팩터가 정의되면 이 시계열을 연결
    ///
    /// # 반환
    ///
    /// 항상 완전히 채워진 추천 레코드. 이 연산은 에러를 발생시키지
    /// 않습니다. 범위를 벗어난 수치 입력의 검증은 호출자 책임입니다.
    pub fn evaluate(
        &self,
        user: &UserProfile,
        price: &GoldPrice,
        indicators: &EconomicIndicators,
        _historical_changes: &[f64],
    ) -> Recommendation {
        let factors = FactorCalculator::calculate(user, price, indicators);
        let overall_score = self.overall_score(&factors);

        debug!(
            user_id = %user.id,
            economic = factors.economic_score,
            geopolitical = factors.geopolitical_score,
            price_movement = factors.price_movement,
            overall_score,
            "팩터 평가 완료"
        );

        let (action, confidence) = self.classify(overall_score);
        let reasoning = ReasoningComposer::compose(action, &factors, user);
        let risk_level = Self::assess_risk_level(&factors);
        let expected_return = self.expected_return(action, &factors);
        let suggested_amount = if action == RecommendationAction::Buy {
            Some(self.suggested_amount(user, price))
        } else {
            None
        };

        info!(
            user_id = %user.id,
            %action,
            confidence,
            %risk_level,
            expected_return,
            "추천 생성"
        );

        Recommendation {
            action,
            confidence,
            reasoning,
            factors,
            suggested_amount,
            expected_return,
            risk_level,
            timestamp: Utc::now(),
        }
    }

    /// 종합 점수 계산 (가중 선형 결합).
    ///
    /// 가격 *하락*은 매수 기회로 양(+)의 기여를 하고, 가격 상승은
    /// 차감됩니다. 정치 안정성은 금의 안전자산 수요를 줄이므로
    /// 차감됩니다.
    fn overall_score(&self, factors: &RecommendationFactors) -> f64 {
        let w = &self.config.weights;

        let mut total = 0.0;
        total += factors.economic_score * w.economic;
        total += factors.geopolitical_score * w.geopolitical;
        total += factors.gdp_trend * w.gdp_trend;
        total += factors.war_factors * w.war_factors;
        total -= factors.political_stability * w.political_stability;
        total += factors.current_affairs_impact * w.current_affairs;

        let dip_contribution = if factors.price_movement > 0.0 {
            -factors.price_movement
        } else {
            factors.price_movement.abs()
        };
        total += dip_contribution * w.price_movement * 10.0;

        total += (factors.user_behavior_score - 50.0) * w.user_behavior;
        total += (factors.goal_progress_score - 50.0) * w.goal_progress;

        total
    }

    /// 액션/확신도 분류.
    ///
    /// 정확히 임계값과 같은 점수는 보유로 분류됩니다 (양쪽 모두 엄격
    /// 부등호).
    fn classify(&self, overall_score: f64) -> (RecommendationAction, f64) {
        let (action, raw_confidence) = if overall_score > self.config.buy_threshold {
            (
                RecommendationAction::Buy,
                TRADE_CONFIDENCE_BASE + overall_score * TRADE_CONFIDENCE_SLOPE,
            )
        } else if overall_score < self.config.sell_threshold {
            (
                RecommendationAction::Sell,
                TRADE_CONFIDENCE_BASE + overall_score.abs() * TRADE_CONFIDENCE_SLOPE,
            )
        } else {
            (
                RecommendationAction::Hold,
                HOLD_CONFIDENCE_BASE + overall_score.abs() * HOLD_CONFIDENCE_SLOPE,
            )
        };

        let confidence = raw_confidence.min(self.config.max_confidence).max(0.0);
        (action, confidence)
    }

    /// 리스크 등급 평가.
    ///
    /// 변동성 프록시 = |가격 변동| + |시사 영향|/2 + 분쟁 요인/2.
    fn assess_risk_level(factors: &RecommendationFactors) -> RiskLevel {
        let volatility_score = factors.price_movement.abs()
            + factors.current_affairs_impact.abs() / 2.0
            + factors.war_factors / 2.0;

        if volatility_score > HIGH_VOLATILITY_THRESHOLD {
            RiskLevel::High
        } else if volatility_score > MEDIUM_VOLATILITY_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// 기대 수익률 계산 (%, 연 환산 추정).
    ///
    /// 매도 시 0. 그 외에는 낙관 점수에 비례한 5~15% 보수적 추정.
    fn expected_return(&self, action: RecommendationAction, factors: &RecommendationFactors) -> f64 {
        if action == RecommendationAction::Sell {
            return 0.0;
        }

        let optimism_score =
            (factors.economic_score + factors.geopolitical_score + factors.war_factors) / 3.0;

        self.config.base_return_pct + (optimism_score / 100.0) * self.config.return_bonus_pct
    }

    /// 제안 투자 금액 계산 (매수 전용).
    ///
    /// 사용자의 평균 그램당 매입가를 기준으로 1~10그램 범위의 제안
    /// 중량을 산출합니다. `max(보유량, 1)` 가드는 보유량 0인 사용자의
    /// 0 나눗셈을 방지합니다 (해당 사용자의 추정치가 총 투자액 쪽으로
    /// 치우치는 알려진 근사).
    fn suggested_amount(&self, user: &UserProfile, price: &GoldPrice) -> Decimal {
        if price.price_per_gram <= Decimal::ZERO {
            // 입력 계약 위반 (가격 > 0). 0 나눗셈 대신 0을 반환
            return Decimal::ZERO;
        }

        let holdings = user.total_gold_holdings.max(Decimal::ONE);
        let avg_paid_per_gram = user.total_investment / holdings;

        let min_grams = Decimal::from(self.config.min_suggested_grams);
        let max_grams = Decimal::from(self.config.max_suggested_grams);
        let suggested_grams = (avg_paid_per_gram / price.price_per_gram).clamp(min_grams, max_grams);

        (suggested_grams * price.price_per_gram)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}
