//! # Gold Engine
//!
//! 추천 스코어링 엔진.
//!
//! 사용자 투자 프로필, 금 시세 스냅샷, 거시경제/지정학 지표를 입력으로
//! 9개 팩터 벡터를 계산하고, 가중 선형 결합으로 종합 점수를 산출한 뒤
//! 매수/보유/매도 액션과 확신도, 리스크 등급, 기대 수익률, 제안 금액,
//! 근거 문장을 도출합니다.
//!
//! 엔진은 상태가 없는 순수 계산입니다. I/O와 공유 가변 상태가 없으므로
//! 여러 사용자에 대한 동시 평가를 잠금 없이 병렬 실행할 수 있습니다.
//!
//! # 예제
//!
//! ```rust,ignore
//! use gold_engine::{EngineConfig, RecommendationEngine};
//!
//! let engine = RecommendationEngine::default();
//! let recommendation = engine.evaluate(&user, &price, &indicators, &historical_changes);
//!
//! if recommendation.action.is_trade() {
//!     println!("{}: {}", recommendation.action, recommendation.reasoning);
//! }
//! ```

pub mod caption;
pub mod config;
pub mod engine;
pub mod factors;
pub mod reasoning;

// 주요 타입 재내보내기
pub use caption::{
    ButtonVariant, CaptionGenerator, ConfidenceBadge, CtaButton, FactorInsight, InsightSentiment,
    UiCopy,
};
pub use config::{ConfigValidationError, EngineConfig, FactorWeights};
pub use engine::RecommendationEngine;
pub use factors::FactorCalculator;
pub use reasoning::ReasoningComposer;
