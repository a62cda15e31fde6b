//! UI 캡션 생성기.
//!
//! 추천 레코드를 사용자에게 보여줄 문구 패키지로 변환합니다. 문구
//! 선택은 모두 확신도의 결정적 함수이므로 (난수 없음) 동일 추천은
//! 항상 동일 문구를 만듭니다.

use gold_core::{Recommendation, RecommendationAction, RiskLevel};
use serde::{Deserialize, Serialize};

/// 매수 넛지 문구 후보 (확신도 버킷으로 선택).
const BUY_NUDGES: [&str; 5] = [
    "🎯 Smart investors are accumulating gold now",
    "💰 Protect your wealth with digital gold today",
    "🌟 Your future self will thank you for buying now",
    "📊 Historical trends suggest this is a strategic entry point",
    "⚡ Don't miss this opportunity - gold prices may surge",
];

/// 보유 격려 문구 후보 (확신도 버킷으로 선택).
const HOLD_MESSAGES: [&str; 5] = [
    "💎 Patience pays - gold is a long-term wealth builder",
    "🏆 Champions hold through volatility for greater returns",
    "📈 Each day you hold, you're closer to your wealth goals",
    "🛡️ Your gold is your financial fortress - keep it strong",
    "⏰ Time in the market beats timing the market",
];

/// 팩터 인사이트의 정서 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSentiment {
    /// 긍정 (금 투자 관점)
    Positive,
    /// 부정
    Negative,
    /// 중립
    Neutral,
}

/// 개별 팩터 인사이트.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorInsight {
    /// 라벨 (예: "Economic Climate")
    pub label: String,
    /// 표시값 (예: "Favorable", "+2.50%")
    pub value: String,
    /// 정서 방향
    pub sentiment: InsightSentiment,
    /// 아이콘
    pub icon: String,
}

/// 확신도 배지.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceBadge {
    /// 배지 텍스트
    pub text: String,
    /// 컬러 토큰
    pub color: String,
    /// 이모지
    pub emoji: String,
}

/// CTA 버튼 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    /// 주요 액션
    Primary,
    /// 보조 액션
    Secondary,
    /// 외곽선
    Outline,
}

/// CTA 버튼 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtaButton {
    /// 버튼 텍스트
    pub text: String,
    /// 버튼 종류
    pub variant: ButtonVariant,
}

/// 추천 1건에 대한 전체 UI 문구 패키지.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiCopy {
    /// 제목 (액션 캡션)
    pub title: String,
    /// 상세 설명 (엔진의 근거 문장 그대로)
    pub description: String,
    /// 매수 넛지 (매수 추천일 때만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nudge: Option<String>,
    /// 보유 격려 (매수가 아닐 때만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_message: Option<String>,
    /// 리스크 경고 (낮은 리스크면 없음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_warning: Option<String>,
    /// 기대 수익률 메시지
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_message: Option<String>,
    /// 확신도 배지
    pub confidence_badge: ConfidenceBadge,
    /// 팩터 인사이트 목록
    pub insights: Vec<FactorInsight>,
    /// CTA 버튼
    pub cta_button: CtaButton,
}

/// UI 캡션 생성기.
pub struct CaptionGenerator;

impl CaptionGenerator {
    /// 전체 UI 문구 패키지를 생성합니다.
    pub fn complete(recommendation: &Recommendation) -> UiCopy {
        UiCopy {
            title: Self::action_caption(recommendation),
            description: recommendation.reasoning.clone(),
            nudge: Self::buy_nudge(recommendation),
            hold_message: Self::hold_encouragement(recommendation),
            risk_warning: Self::risk_warning(recommendation),
            return_message: Self::return_message(recommendation),
            confidence_badge: Self::confidence_badge(recommendation),
            insights: Self::factor_insights(recommendation),
            cta_button: Self::cta_button(recommendation),
        }
    }

    /// 주요 액션 캡션 (확신도 단계별).
    pub fn action_caption(recommendation: &Recommendation) -> String {
        let confidence = recommendation.confidence;

        let caption = match recommendation.action {
            RecommendationAction::Buy => {
                if confidence > 80.0 {
                    "🌟 Excellent time to invest in gold!"
                } else if confidence > 60.0 {
                    "✨ Good opportunity to buy gold"
                } else {
                    "💡 Consider adding gold to your portfolio"
                }
            }
            RecommendationAction::Sell => {
                if confidence > 80.0 {
                    "📈 Strong signal to book profits"
                } else if confidence > 60.0 {
                    "🤔 You might consider partial profit booking"
                } else {
                    "💭 Evaluate selling some holdings"
                }
            }
            RecommendationAction::Hold => "🛡️ Hold your gold for long-term wealth",
        };

        caption.to_string()
    }

    /// 매수 넛지 (매수 추천에만, 확신도 버킷으로 결정적 선택).
    pub fn buy_nudge(recommendation: &Recommendation) -> Option<String> {
        if recommendation.action != RecommendationAction::Buy {
            return None;
        }

        let index = Self::confidence_bucket(recommendation.confidence, BUY_NUDGES.len());
        Some(BUY_NUDGES[index].to_string())
    }

    /// 보유 격려 (매수가 아닐 때만, 확신도 버킷으로 결정적 선택).
    pub fn hold_encouragement(recommendation: &Recommendation) -> Option<String> {
        if recommendation.action == RecommendationAction::Buy {
            return None;
        }

        let index = Self::confidence_bucket(recommendation.confidence, HOLD_MESSAGES.len());
        Some(HOLD_MESSAGES[index].to_string())
    }

    /// 리스크 경고 (낮은 리스크면 `None`).
    pub fn risk_warning(recommendation: &Recommendation) -> Option<String> {
        match recommendation.risk_level {
            RiskLevel::Low => None,
            RiskLevel::Medium => Some("⚡ Moderate market fluctuations expected".to_string()),
            RiskLevel::High => {
                Some("⚠️ High market volatility detected - invest cautiously".to_string())
            }
        }
    }

    /// 기대 수익률 메시지 (매도이거나 수익률이 0이면 `None`).
    pub fn return_message(recommendation: &Recommendation) -> Option<String> {
        if recommendation.action == RecommendationAction::Sell
            || recommendation.expected_return <= 0.0
        {
            return None;
        }

        Some(format!(
            "📊 Expected annual return: ~{:.1}%",
            recommendation.expected_return
        ))
    }

    /// 확신도 배지.
    pub fn confidence_badge(recommendation: &Recommendation) -> ConfidenceBadge {
        let confidence = recommendation.confidence;

        let (text, color, emoji) = if confidence > 80.0 {
            ("High Confidence", "emerald", "🎯")
        } else if confidence > 60.0 {
            ("Good Confidence", "blue", "✓")
        } else {
            ("Moderate", "amber", "~")
        };

        ConfidenceBadge {
            text: text.to_string(),
            color: color.to_string(),
            emoji: emoji.to_string(),
        }
    }

    /// 팩터 인사이트 목록.
    pub fn factor_insights(recommendation: &Recommendation) -> Vec<FactorInsight> {
        let factors = &recommendation.factors;
        let mut insights = Vec::new();

        if factors.economic_score.abs() > 20.0 {
            let favorable = factors.economic_score > 0.0;
            insights.push(FactorInsight {
                label: "Economic Climate".to_string(),
                value: if favorable { "Favorable" } else { "Challenging" }.to_string(),
                sentiment: if favorable {
                    InsightSentiment::Positive
                } else {
                    InsightSentiment::Negative
                },
                icon: "📊".to_string(),
            });
        }

        if factors.war_factors > 30.0 {
            insights.push(FactorInsight {
                label: "Geopolitical Risk".to_string(),
                value: if factors.war_factors > 60.0 {
                    "High"
                } else {
                    "Moderate"
                }
                .to_string(),
                // 높은 리스크는 금에 긍정적
                sentiment: InsightSentiment::Positive,
                icon: "🌍".to_string(),
            });
        }

        if factors.price_movement.abs() > 2.0 {
            insights.push(FactorInsight {
                label: "24h Price Change".to_string(),
                value: format!("{:+.2}%", factors.price_movement),
                // 하락은 매수 기회
                sentiment: if factors.price_movement < 0.0 {
                    InsightSentiment::Positive
                } else {
                    InsightSentiment::Neutral
                },
                icon: "💹".to_string(),
            });
        }

        if factors.goal_progress_score > 60.0 {
            insights.push(FactorInsight {
                label: "Goal Progress".to_string(),
                value: "On Track".to_string(),
                sentiment: InsightSentiment::Positive,
                icon: "🎯".to_string(),
            });
        }

        insights
    }

    /// CTA 버튼 설정.
    pub fn cta_button(recommendation: &Recommendation) -> CtaButton {
        match recommendation.action {
            RecommendationAction::Buy => CtaButton {
                text: match recommendation.suggested_amount {
                    Some(amount) => format!("Buy ₹{} Gold", amount),
                    None => "Buy Gold Now".to_string(),
                },
                variant: ButtonVariant::Primary,
            },
            RecommendationAction::Sell => CtaButton {
                text: "Review Portfolio".to_string(),
                variant: ButtonVariant::Secondary,
            },
            RecommendationAction::Hold => CtaButton {
                text: "View Holdings".to_string(),
                variant: ButtonVariant::Outline,
            },
        }
    }

    /// 확신도(0~100)를 문구 배열 인덱스로 변환.
    ///
    /// `floor(confidence/100 × (len−1))`, 범위를 벗어나지 않도록 클램프.
    fn confidence_bucket(confidence: f64, len: usize) -> usize {
        let clamped = confidence.clamp(0.0, 100.0);
        let index = (clamped / 100.0 * (len - 1) as f64).floor() as usize;
        index.min(len - 1)
    }
}
