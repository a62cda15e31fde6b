//! 사용자별 이벤트 집계.

use gold_core::{AnalyticsEvent, EventKind, TradeSide};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 단일 사용자의 행동 집계.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAnalyticsSummary {
    /// 사용자 ID
    pub user_id: String,
    /// 페이지 조회 수
    pub page_views: u64,
    /// 전체 거래 수
    pub total_transactions: u64,
    /// 매수 거래 수
    pub buy_transactions: u64,
    /// 매도 거래 수
    pub sell_transactions: u64,
    /// 매수 금액 합계
    pub total_buy_amount: Decimal,
    /// 매수 중량 합계 (그램)
    pub total_buy_grams: Decimal,
    /// 추천 노출 수
    pub recommendations_shown: u64,
    /// 추천 클릭 수
    pub recommendations_clicked: u64,
}

impl UserAnalyticsSummary {
    /// 이벤트 목록에서 특정 사용자의 집계를 계산합니다.
    ///
    /// 다른 사용자의 이벤트는 무시합니다.
    pub fn from_events<'a>(
        user_id: &str,
        events: impl IntoIterator<Item = &'a AnalyticsEvent>,
    ) -> Self {
        let mut summary = Self {
            user_id: user_id.to_string(),
            ..Self::default()
        };

        for event in events {
            if event.user_id != user_id {
                continue;
            }

            match &event.kind {
                EventKind::PageView { .. } => summary.page_views += 1,
                EventKind::Transaction {
                    side,
                    amount,
                    gold_grams,
                } => {
                    summary.total_transactions += 1;
                    match side {
                        TradeSide::Buy => {
                            summary.buy_transactions += 1;
                            summary.total_buy_amount += *amount;
                            summary.total_buy_grams += *gold_grams;
                        }
                        TradeSide::Sell => summary.sell_transactions += 1,
                    }
                }
                EventKind::RecommendationShown { .. } => summary.recommendations_shown += 1,
                EventKind::RecommendationClicked { .. } => summary.recommendations_clicked += 1,
                EventKind::UserAction { .. } => {}
            }
        }

        summary
    }

    /// 추천 클릭률 (노출 대비 클릭, 0.0 ~ 1.0).
    ///
    /// 노출이 없으면 0을 반환합니다.
    pub fn click_through_rate(&self) -> f64 {
        if self.recommendations_shown == 0 {
            return 0.0;
        }
        self.recommendations_clicked as f64 / self.recommendations_shown as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gold_core::RecommendationAction;
    use rust_decimal_macros::dec;

    fn sample_events() -> Vec<AnalyticsEvent> {
        vec![
            AnalyticsEvent::page_view("user_1", "/home"),
            AnalyticsEvent::page_view("user_1", "/buy"),
            AnalyticsEvent::transaction("user_1", TradeSide::Buy, dec!(5000), dec!(0.8)),
            AnalyticsEvent::transaction("user_1", TradeSide::Buy, dec!(3000), dec!(0.48)),
            AnalyticsEvent::transaction("user_1", TradeSide::Sell, dec!(2000), dec!(0.32)),
            AnalyticsEvent::recommendation_shown("user_1", RecommendationAction::Buy, 82.0),
            AnalyticsEvent::recommendation_shown("user_1", RecommendationAction::Hold, 55.0),
            AnalyticsEvent::recommendation_clicked("user_1", RecommendationAction::Buy),
            AnalyticsEvent::user_action("user_1", "opened_app"),
            // 다른 사용자의 이벤트
            AnalyticsEvent::page_view("user_2", "/home"),
            AnalyticsEvent::transaction("user_2", TradeSide::Buy, dec!(9999), dec!(1.6)),
        ]
    }

    #[test]
    fn test_summary_counts() {
        let events = sample_events();
        let summary = UserAnalyticsSummary::from_events("user_1", &events);

        assert_eq!(summary.page_views, 2);
        assert_eq!(summary.total_transactions, 3);
        assert_eq!(summary.buy_transactions, 2);
        assert_eq!(summary.sell_transactions, 1);
        assert_eq!(summary.total_buy_amount, dec!(8000));
        assert_eq!(summary.total_buy_grams, dec!(1.28));
        assert_eq!(summary.recommendations_shown, 2);
        assert_eq!(summary.recommendations_clicked, 1);
    }

    #[test]
    fn test_ignores_other_users() {
        let events = sample_events();
        let summary = UserAnalyticsSummary::from_events("user_2", &events);

        assert_eq!(summary.page_views, 1);
        assert_eq!(summary.total_transactions, 1);
        assert_eq!(summary.total_buy_amount, dec!(9999));
    }

    #[test]
    fn test_click_through_rate() {
        let events = sample_events();
        let summary = UserAnalyticsSummary::from_events("user_1", &events);
        assert!((summary.click_through_rate() - 0.5).abs() < f64::EPSILON);

        // 노출 없으면 0
        let empty = UserAnalyticsSummary::from_events("user_3", &events);
        assert_eq!(empty.click_through_rate(), 0.0);
    }
}
