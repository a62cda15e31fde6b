//! 평가 시나리오 입출력.
//!
//! 시나리오는 한 번의 추천 평가에 필요한 전체 입력을 JSON 파일
//! 하나로 묶은 것입니다. `sample()`은 데모/스모크 테스트용 고정
//! 시나리오를 만듭니다.

use chrono::{NaiveDate, TimeZone, Utc};
use gold_core::{
    AdvisorError, AdvisorResult, EconomicIndicators, GdpIndicator, GeopoliticalFactor,
    GeopoliticalRisk, GoldPrice, InflationIndicator, InterestRateIndicator, MarketSentiment,
    SentimentIndicator, SipFrequency, SipTarget, UserProfile, WealthTarget,
};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 평가 시나리오.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// 사용자 프로필
    pub user: UserProfile,
    /// 금 시세 스냅샷
    pub price: GoldPrice,
    /// 거시경제/지정학 지표
    pub indicators: EconomicIndicators,
    /// 과거 24시간 변동률 시계열 (오래된 것부터)
    #[serde(default)]
    pub historical_changes: Vec<f64>,
}

impl Scenario {
    /// JSON 파일에서 시나리오를 로드합니다.
    pub fn from_json_file(path: impl AsRef<Path>) -> AdvisorResult<Self> {
        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|err| AdvisorError::Scenario(format!("시나리오 파싱 실패: {}", err)))
    }

    /// 시나리오를 JSON 파일로 저장합니다.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> AdvisorResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// 데모용 고정 시나리오.
    ///
    /// 값이 모두 상수이므로 평가 결과도 항상 동일합니다.
    pub fn sample() -> Self {
        let user = UserProfile {
            id: "user_demo".to_string(),
            email: "investor@example.com".to_string(),
            name: "Demo Investor".to_string(),
            phone: None,
            total_gold_holdings: dec!(45.5),
            total_investment: dec!(285000),
            average_purchase_frequency_days: 30.0,
            sip_targets: vec![SipTarget {
                id: "sip_1".to_string(),
                amount: dec!(5000),
                frequency: SipFrequency::Monthly,
                start_date: NaiveDate::from_ymd_opt(2025, 1, 1)
                    .unwrap_or_default(),
                target_amount: dec!(60000),
                current_progress: dec!(25000),
            }],
            wealth_targets: vec![WealthTarget {
                id: "wealth_1".to_string(),
                target_gold_grams: dec!(100),
                target_date: NaiveDate::from_ymd_opt(2027, 12, 31)
                    .unwrap_or_default(),
                current_grams: dec!(45.5),
                purpose: "Wealth Preservation".to_string(),
            }],
        };

        let price = GoldPrice {
            price_per_gram: dec!(6250),
            currency: "INR".to_string(),
            timestamp: Utc
                .with_ymd_and_hms(2025, 6, 1, 9, 0, 0)
                .single()
                .unwrap_or_default(),
            change_24h: dec!(-87.50),
            change_percent_24h: -1.4,
        };

        let indicators = EconomicIndicators {
            gdp: GdpIndicator {
                current: 7.2,
                trend: 0.3,
                forecast: 7.5,
            },
            inflation: InflationIndicator {
                current: 5.4,
                trend: 0.2,
            },
            interest_rate: InterestRateIndicator {
                current: 6.5,
                trend: 0.0,
            },
            geopolitical_risk: GeopoliticalRisk {
                level: 45.0,
                factors: vec![
                    GeopoliticalFactor::RegionalConflict,
                    GeopoliticalFactor::TradeDispute,
                    GeopoliticalFactor::CurrencyVolatility,
                ],
            },
            market_sentiment: MarketSentiment {
                score: -15.0,
                indicators: vec![
                    SentimentIndicator::EquityVolatilityRising,
                    SentimentIndicator::SafeHavenDemandRising,
                ],
            },
        };

        Self {
            user,
            price,
            indicators,
            historical_changes: vec![0.8, -0.5, 1.2, -2.1, -1.4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_deterministic() {
        let a = serde_json::to_string(&Scenario::sample()).unwrap();
        let b = serde_json::to_string(&Scenario::sample()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_shape() {
        let scenario = Scenario::sample();
        assert!(scenario.user.has_sip_targets());
        assert!(scenario.user.has_wealth_targets());
        assert_eq!(scenario.price.currency, "INR");
        assert_eq!(scenario.indicators.geopolitical_risk.factors.len(), 3);
        assert_eq!(scenario.historical_changes.len(), 5);
    }

    #[test]
    fn test_json_roundtrip() {
        let scenario = Scenario::sample();
        let json = serde_json::to_string_pretty(&scenario).unwrap();
        let parsed: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.user.id, scenario.user.id);
        assert_eq!(parsed.price.price_per_gram, scenario.price.price_per_gram);
    }

    #[test]
    fn test_missing_historical_changes_defaults_empty() {
        let mut value = serde_json::to_value(Scenario::sample()).unwrap();
        value
            .as_object_mut()
            .unwrap()
            .remove("historical_changes");

        let parsed: Scenario = serde_json::from_value(value).unwrap();
        assert!(parsed.historical_changes.is_empty());
    }
}
