//! 사용자 투자 프로필.
//!
//! 추천 평가의 읽기 전용 입력입니다. 보유량/투자액은 음수가 아니어야
//! 하며, SIP/자산 목표 리스트는 비어 있을 수 있습니다.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// SIP (정기 적립 투자) 납입 주기.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SipFrequency {
    /// 매일
    Daily,
    /// 매주
    Weekly,
    /// 매월
    Monthly,
}

impl fmt::Display for SipFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
        };
        write!(f, "{}", s)
    }
}

/// SIP 적립 목표.
///
/// 주기적 납입으로 누적 목표 금액에 도달하는 저축 목표입니다.
/// `current_progress <= target_amount`가 기대되지만 강제되지는 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipTarget {
    /// 목표 ID
    pub id: String,
    /// 회당 납입 금액
    pub amount: Decimal,
    /// 납입 주기
    pub frequency: SipFrequency,
    /// 시작일
    pub start_date: NaiveDate,
    /// 누적 목표 금액
    pub target_amount: Decimal,
    /// 현재 누적 납입액
    pub current_progress: Decimal,
}

/// 자산 목표.
///
/// 목표일까지 적립할 금 보유량(그램)으로 표현되는 목표입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WealthTarget {
    /// 목표 ID
    pub id: String,
    /// 목표 금 보유량 (그램)
    pub target_gold_grams: Decimal,
    /// 목표일
    pub target_date: NaiveDate,
    /// 현재 보유량 (그램)
    pub current_grams: Decimal,
    /// 목적 라벨 (예: "Wealth Preservation")
    pub purpose: String,
}

/// 사용자 투자 프로필.
///
/// 한 번의 평가 호출 동안 불변으로 취급됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// 사용자 ID
    pub id: String,
    /// 이메일
    pub email: String,
    /// 이름
    pub name: String,
    /// 전화번호 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// 총 금 보유량 (그램, >= 0)
    pub total_gold_holdings: Decimal,
    /// 총 투자액 (통화 단위, >= 0)
    pub total_investment: Decimal,
    /// 평균 구매 주기 (일 단위, >= 0)
    pub average_purchase_frequency_days: f64,
    /// SIP 적립 목표 목록
    #[serde(default)]
    pub sip_targets: Vec<SipTarget>,
    /// 자산 목표 목록
    #[serde(default)]
    pub wealth_targets: Vec<WealthTarget>,
}

impl UserProfile {
    /// 활성 SIP 목표가 있는지 여부.
    pub fn has_sip_targets(&self) -> bool {
        !self.sip_targets.is_empty()
    }

    /// 자산 목표가 있는지 여부.
    pub fn has_wealth_targets(&self) -> bool {
        !self.wealth_targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_profile() -> UserProfile {
        UserProfile {
            id: "user_123".to_string(),
            email: "investor@example.com".to_string(),
            name: "Arya Anand".to_string(),
            phone: None,
            total_gold_holdings: dec!(45.5),
            total_investment: dec!(285000),
            average_purchase_frequency_days: 30.0,
            sip_targets: vec![],
            wealth_targets: vec![],
        }
    }

    #[test]
    fn test_has_sip_targets() {
        let mut profile = sample_profile();
        assert!(!profile.has_sip_targets());

        profile.sip_targets.push(SipTarget {
            id: "sip_1".to_string(),
            amount: dec!(5000),
            frequency: SipFrequency::Monthly,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            target_amount: dec!(60000),
            current_progress: dec!(25000),
        });
        assert!(profile.has_sip_targets());
    }

    #[test]
    fn test_sip_frequency_display() {
        assert_eq!(SipFrequency::Daily.to_string(), "DAILY");
        assert_eq!(SipFrequency::Monthly.to_string(), "MONTHLY");
    }

    #[test]
    fn test_profile_deserialization_defaults() {
        // 목표 리스트가 생략된 JSON도 유효해야 함
        let json = r#"{
            "id": "user_1",
            "email": "a@b.c",
            "name": "A",
            "total_gold_holdings": "10.0",
            "total_investment": "60000",
            "average_purchase_frequency_days": 15.0
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert!(profile.sip_targets.is_empty());
        assert!(profile.wealth_targets.is_empty());
        assert!(profile.phone.is_none());
    }
}
