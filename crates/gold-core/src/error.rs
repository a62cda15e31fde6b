//! 어드바이저 시스템의 에러 타입.
//!
//! 추천 엔진 자체는 실패하지 않습니다 (항상 완전한 결과를 반환).
//! 에러는 설정 로딩, 시나리오 파일, 이벤트 전송 경계에서만 발생합니다.

use thiserror::Error;

/// 핵심 어드바이저 에러.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 시나리오 입력 에러
    #[error("시나리오 에러: {0}")]
    Scenario(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 분석 이벤트 전송 에러
    #[error("분석 에러: {0}")]
    Analytics(String),

    /// 입출력 에러
    #[error("입출력 에러: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for AdvisorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for AdvisorError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// 어드바이저 연산을 위한 Result 타입.
pub type AdvisorResult<T> = Result<T, AdvisorError>;
