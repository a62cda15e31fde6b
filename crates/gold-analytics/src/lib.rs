//! # Gold Analytics
//!
//! 사용자 행동 이벤트 수집 및 집계 모듈입니다.
//!
//! - `tracker`: 이벤트 버퍼링과 싱크로의 플러시
//! - `summary`: 사용자별 이벤트 집계

pub mod summary;
pub mod tracker;

pub use summary::UserAnalyticsSummary;
pub use tracker::{EventSink, EventTracker, MemorySink, TracingSink};
