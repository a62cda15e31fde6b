//! 거시경제/지정학 지표.
//!
//! 외부 데이터 수집기가 공급하는 평가 입력입니다. 엔진은 이 구조체를
//! 절대 변경하지 않습니다. 자유 텍스트 라벨 대신 태그된 variant를
//! 사용하여 각 지표의 의미를 타입으로 고정합니다.

use serde::{Deserialize, Serialize};
use std::fmt;

/// GDP 지표 (모두 % 단위).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GdpIndicator {
    /// 현재 성장률
    pub current: f64,
    /// 추세 (변화율)
    pub trend: f64,
    /// 전망치
    pub forecast: f64,
}

/// 인플레이션 지표 (% 단위).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflationIndicator {
    /// 현재 물가상승률
    pub current: f64,
    /// 추세
    pub trend: f64,
}

/// 기준금리 지표 (% 단위).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestRateIndicator {
    /// 현재 금리
    pub current: f64,
    /// 추세
    pub trend: f64,
}

/// 지정학 리스크 요인.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeopoliticalFactor {
    /// 지역 무력 분쟁
    RegionalConflict,
    /// 무역 분쟁/협상
    TradeDispute,
    /// 경제 제재
    Sanctions,
    /// 선거 불확실성
    ElectionUncertainty,
    /// 환율 변동성
    CurrencyVolatility,
    /// 에너지 공급 충격
    EnergySupplyShock,
}

impl GeopoliticalFactor {
    /// 표시용 설명.
    pub fn description(self) -> &'static str {
        match self {
            Self::RegionalConflict => "Regional armed conflict",
            Self::TradeDispute => "Trade negotiations ongoing",
            Self::Sanctions => "Economic sanctions in effect",
            Self::ElectionUncertainty => "Election uncertainty",
            Self::CurrencyVolatility => "Currency fluctuations",
            Self::EnergySupplyShock => "Energy supply shock",
        }
    }
}

impl fmt::Display for GeopoliticalFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// 지정학 리스크.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeopoliticalRisk {
    /// 리스크 수준 (0-100)
    pub level: f64,
    /// 활성 리스크 요인
    #[serde(default)]
    pub factors: Vec<GeopoliticalFactor>,
}

/// 시장 심리 지표 라벨.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentIndicator {
    /// 주식시장 변동성 증가
    EquityVolatilityRising,
    /// 안전자산 수요 증가
    SafeHavenDemandRising,
    /// 달러 약세
    DollarWeakening,
    /// 달러 강세
    DollarStrengthening,
    /// 위험 선호 심리 증가
    RiskAppetiteRising,
    /// 채권 금리 하락
    BondYieldsFalling,
}

impl SentimentIndicator {
    /// 표시용 설명.
    pub fn description(self) -> &'static str {
        match self {
            Self::EquityVolatilityRising => "Stock market volatility increased",
            Self::SafeHavenDemandRising => "Safe haven demand rising",
            Self::DollarWeakening => "Dollar weakening",
            Self::DollarStrengthening => "Dollar strengthening",
            Self::RiskAppetiteRising => "Risk appetite rising",
            Self::BondYieldsFalling => "Bond yields falling",
        }
    }
}

impl fmt::Display for SentimentIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// 시장 심리.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSentiment {
    /// 심리 점수 (-100 ~ 100, 음수 = 위험 회피)
    pub score: f64,
    /// 관측된 심리 지표
    #[serde(default)]
    pub indicators: Vec<SentimentIndicator>,
}

/// 거시경제/지정학 지표 번들.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicIndicators {
    /// GDP 지표
    pub gdp: GdpIndicator,
    /// 인플레이션 지표
    pub inflation: InflationIndicator,
    /// 기준금리 지표
    pub interest_rate: InterestRateIndicator,
    /// 지정학 리스크
    pub geopolitical_risk: GeopoliticalRisk,
    /// 시장 심리
    pub market_sentiment: MarketSentiment,
}
