//! # Gold Core
//!
//! 금 투자 어드바이저의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 추천 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 사용자 투자 프로필 (보유량, SIP/자산 목표)
//! - 금 시세 스냅샷
//! - 거시경제/지정학 지표
//! - 추천 결과 및 팩터 벡터
//! - 분석 이벤트 타입
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
