//! 설정 관리.
//!
//! 애플리케이션 설정을 정의하고 TOML 파일에서 로드합니다.
//! 모든 섹션과 필드는 기본값을 가지므로 빈 설정 파일도 유효합니다.

use crate::error::AdvisorResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 분석 이벤트 수집 설정
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl AppConfig {
    /// TOML 파일에서 설정을 로드합니다.
    pub fn from_toml_file(path: impl AsRef<Path>) -> AdvisorResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    #[serde(default = "default_log_level")]
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

/// 분석 이벤트 수집 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyticsConfig {
    /// 자동 플러시가 발생하는 배치 크기 (기본값: 100)
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,

    /// 싱크가 보관하는 최대 이벤트 수 (기본값: 1000)
    /// 초과분은 오래된 것부터 버립니다
    #[serde(default = "default_max_retained_events")]
    pub max_retained_events: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch_size(),
            max_retained_events: default_max_retained_events(),
        }
    }
}

fn default_max_batch_size() -> usize {
    100
}

fn default_max_retained_events() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.analytics.max_batch_size, 100);
        assert_eq!(config.analytics.max_retained_events, 1000);
    }

    #[test]
    fn test_empty_toml_is_valid() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.analytics.max_batch_size, 100);
    }

    #[test]
    fn test_partial_toml_override() {
        let config: AppConfig = toml::from_str(
            r#"
            [logging]
            level = "debug"

            [analytics]
            max_batch_size = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty"); // 기본값 유지
        assert_eq!(config.analytics.max_batch_size, 50);
        assert_eq!(config.analytics.max_retained_events, 1000);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(config.logging.level, deserialized.logging.level);
        assert_eq!(
            config.analytics.max_batch_size,
            deserialized.analytics.max_batch_size
        );
    }
}
