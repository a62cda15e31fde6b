//! 금 시세 스냅샷.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 금 시세 스냅샷.
///
/// 외부 시세 피드가 평가 시점마다 하나씩 생성합니다. 엔진은 이를
/// 순간 스냅샷으로 취급하며 신선도는 호출자의 책임입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldPrice {
    /// 그램당 가격 (> 0)
    pub price_per_gram: Decimal,
    /// 통화 코드 (예: "INR")
    pub currency: String,
    /// 시세 시각
    pub timestamp: DateTime<Utc>,
    /// 24시간 가격 변동 (부호 있는 통화 단위)
    pub change_24h: Decimal,
    /// 24시간 가격 변동률 (부호 있는 %)
    pub change_percent_24h: f64,
}

impl GoldPrice {
    /// 24시간 동안 가격이 하락했는지 여부.
    pub fn is_dip(&self) -> bool {
        self.change_percent_24h < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_is_dip() {
        let mut price = GoldPrice {
            price_per_gram: dec!(6250),
            currency: "INR".to_string(),
            timestamp: Utc::now(),
            change_24h: dec!(-220),
            change_percent_24h: -3.5,
        };
        assert!(price.is_dip());

        price.change_percent_24h = 0.8;
        assert!(!price.is_dip());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let price = GoldPrice {
            price_per_gram: dec!(6250),
            currency: "INR".to_string(),
            timestamp: Utc::now(),
            change_24h: dec!(50),
            change_percent_24h: 0.8,
        };

        let json = serde_json::to_string(&price).unwrap();
        let parsed: GoldPrice = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.price_per_gram, dec!(6250));
        assert_eq!(parsed.currency, "INR");
    }
}
