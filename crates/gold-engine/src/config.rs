//! 엔진 설정.
//!
//! 스코어링 임계값, 팩터 가중치, 확신도 상한, 제안 중량 범위를 위한
//! 설정 구조체를 정의합니다. 기본값은 운영 중인 스코어링 모델의 고정
//! 상수를 그대로 재현하므로, `EngineConfig::default()`로 만든 엔진이
//! 기준 동작입니다.

use serde::{Deserialize, Serialize};

/// 팩터별 가중치.
///
/// 종합 점수는 각 팩터에 이 가중치를 곱해 합산합니다.
/// `political_stability`는 합산 시 차감됩니다 (안정성은 금 수요에 음의 요인).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorWeights {
    /// 경제 점수 가중치 (기본값: 0.20)
    #[serde(default = "default_economic_weight")]
    pub economic: f64,

    /// 지정학 점수 가중치 (기본값: 0.15)
    #[serde(default = "default_geopolitical_weight")]
    pub geopolitical: f64,

    /// GDP 추세 가중치 (기본값: 0.10)
    #[serde(default = "default_gdp_trend_weight")]
    pub gdp_trend: f64,

    /// 분쟁 요인 가중치 (기본값: 0.15)
    #[serde(default = "default_war_factors_weight")]
    pub war_factors: f64,

    /// 정치 안정성 가중치 (기본값: 0.05, 차감 적용)
    #[serde(default = "default_political_stability_weight")]
    pub political_stability: f64,

    /// 시사 영향 가중치 (기본값: 0.10)
    #[serde(default = "default_current_affairs_weight")]
    pub current_affairs: f64,

    /// 가격 변동 가중치 (기본값: 0.10, ×10 스케일로 적용)
    #[serde(default = "default_price_movement_weight")]
    pub price_movement: f64,

    /// 사용자 행동 가중치 (기본값: 0.08, 50점 중심화 후 적용)
    #[serde(default = "default_user_behavior_weight")]
    pub user_behavior: f64,

    /// 목표 진척 가중치 (기본값: 0.07, 50점 중심화 후 적용)
    #[serde(default = "default_goal_progress_weight")]
    pub goal_progress: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            economic: default_economic_weight(),
            geopolitical: default_geopolitical_weight(),
            gdp_trend: default_gdp_trend_weight(),
            war_factors: default_war_factors_weight(),
            political_stability: default_political_stability_weight(),
            current_affairs: default_current_affairs_weight(),
            price_movement: default_price_movement_weight(),
            user_behavior: default_user_behavior_weight(),
            goal_progress: default_goal_progress_weight(),
        }
    }
}

fn default_economic_weight() -> f64 {
    0.20
}
fn default_geopolitical_weight() -> f64 {
    0.15
}
fn default_gdp_trend_weight() -> f64 {
    0.10
}
fn default_war_factors_weight() -> f64 {
    0.15
}
fn default_political_stability_weight() -> f64 {
    0.05
}
fn default_current_affairs_weight() -> f64 {
    0.10
}
fn default_price_movement_weight() -> f64 {
    0.10
}
fn default_user_behavior_weight() -> f64 {
    0.08
}
fn default_goal_progress_weight() -> f64 {
    0.07
}

/// 전역 엔진 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// 매수 판정 임계값 (기본값: 30.0, 초과 시 매수)
    #[serde(default = "default_buy_threshold")]
    pub buy_threshold: f64,

    /// 매도 판정 임계값 (기본값: -30.0, 미만 시 매도)
    /// 정확히 임계값과 같은 점수는 보유로 분류됩니다
    #[serde(default = "default_sell_threshold")]
    pub sell_threshold: f64,

    /// 확신도 상한 (기본값: 95.0)
    #[serde(default = "default_max_confidence")]
    pub max_confidence: f64,

    /// 팩터 가중치
    #[serde(default)]
    pub weights: FactorWeights,

    /// 제안 중량 하한 (그램, 기본값: 1)
    #[serde(default = "default_min_suggested_grams")]
    pub min_suggested_grams: u32,

    /// 제안 중량 상한 (그램, 기본값: 10)
    #[serde(default = "default_max_suggested_grams")]
    pub max_suggested_grams: u32,

    /// 기대 수익률 기본값 (%, 기본값: 5.0)
    #[serde(default = "default_base_return_pct")]
    pub base_return_pct: f64,

    /// 낙관 점수에 따른 기대 수익률 보너스 폭 (%, 기본값: 10.0)
    #[serde(default = "default_return_bonus_pct")]
    pub return_bonus_pct: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            buy_threshold: default_buy_threshold(),
            sell_threshold: default_sell_threshold(),
            max_confidence: default_max_confidence(),
            weights: FactorWeights::default(),
            min_suggested_grams: default_min_suggested_grams(),
            max_suggested_grams: default_max_suggested_grams(),
            base_return_pct: default_base_return_pct(),
            return_bonus_pct: default_return_bonus_pct(),
        }
    }
}

fn default_buy_threshold() -> f64 {
    30.0
}
fn default_sell_threshold() -> f64 {
    -30.0
}
fn default_max_confidence() -> f64 {
    95.0
}
fn default_min_suggested_grams() -> u32 {
    1
}
fn default_max_suggested_grams() -> u32 {
    10
}
fn default_base_return_pct() -> f64 {
    5.0
}
fn default_return_bonus_pct() -> f64 {
    10.0
}

impl EngineConfig {
    /// 설정 값을 검증합니다.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.buy_threshold <= self.sell_threshold {
            return Err(ConfigValidationError::InvalidValue(
                "buy_threshold must be greater than sell_threshold".into(),
            ));
        }

        if self.max_confidence <= 0.0 || self.max_confidence > 100.0 {
            return Err(ConfigValidationError::InvalidValue(
                "max_confidence must be between 0 and 100".into(),
            ));
        }

        let weights = [
            self.weights.economic,
            self.weights.geopolitical,
            self.weights.gdp_trend,
            self.weights.war_factors,
            self.weights.political_stability,
            self.weights.current_affairs,
            self.weights.price_movement,
            self.weights.user_behavior,
            self.weights.goal_progress,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigValidationError::InvalidValue(
                "factor weights must be finite and non-negative".into(),
            ));
        }

        if self.min_suggested_grams == 0 || self.min_suggested_grams > self.max_suggested_grams {
            return Err(ConfigValidationError::InvalidValue(
                "suggested grams range must satisfy 0 < min <= max".into(),
            ));
        }

        if self.base_return_pct < 0.0 || self.return_bonus_pct < 0.0 {
            return Err(ConfigValidationError::InvalidValue(
                "return percentages must be non-negative".into(),
            ));
        }

        Ok(())
    }
}

/// 설정 검증 오류.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}
