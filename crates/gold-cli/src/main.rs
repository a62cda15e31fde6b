//! 금 투자 어드바이저 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 내장 데모 시나리오로 추천 평가
//! gold-advisor advise
//!
//! # 시나리오 파일로 평가, JSON 출력
//! gold-advisor advise --scenario scenario.json --json
//!
//! # 데모 시나리오 파일 생성
//! gold-advisor sample --output scenario.json
//! ```

use clap::{Parser, Subcommand};
use gold_analytics::{EventTracker, MemorySink, UserAnalyticsSummary};
use gold_core::{init_logging, AnalyticsEvent, AppConfig, LogConfig, LogFormat};
use gold_engine::{CaptionGenerator, RecommendationEngine, UiCopy};
use serde::Serialize;
use tracing::info;

mod scenario;

use scenario::Scenario;

#[derive(Parser)]
#[command(name = "gold-advisor")]
#[command(about = "Gold investment advisor - 규칙 기반 금 투자 추천 엔진", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 시나리오를 평가하고 추천을 출력
    Advise {
        /// 시나리오 JSON 파일 (생략하면 내장 데모 시나리오)
        #[arg(short, long)]
        scenario: Option<String>,

        /// 애플리케이션 설정 파일 (TOML)
        #[arg(short, long)]
        config: Option<String>,

        /// JSON으로 출력 (기본: 사람이 읽는 형식)
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// 데모 시나리오 파일 생성
    Sample {
        /// 출력 파일 경로 (생략하면 stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// JSON 출력용 평가 결과 묶음.
#[derive(Serialize)]
struct AdviseOutput {
    recommendation: gold_core::Recommendation,
    ui: UiCopy,
    analytics: UserAnalyticsSummary,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Advise {
            scenario,
            config,
            json,
        } => {
            let app_config = match &config {
                Some(path) => AppConfig::from_toml_file(path)?,
                None => AppConfig::default(),
            };

            // JSON 출력 모드에서는 로그가 stdout을 오염시키지 않도록 compact 사용
            let log_config = if json {
                LogConfig::new(app_config.logging.level.as_str()).with_format(LogFormat::Compact)
            } else {
                LogConfig::new(app_config.logging.level.as_str()).with_format(
                    app_config
                        .logging
                        .format
                        .parse()
                        .unwrap_or(LogFormat::Pretty),
                )
            };
            init_logging(log_config).map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {}", e))?;

            let scenario = match &scenario {
                Some(path) => Scenario::from_json_file(path)?,
                None => Scenario::sample(),
            };
            info!(user_id = %scenario.user.id, "시나리오 로드 완료");

            let engine = RecommendationEngine::default();
            let recommendation = engine.evaluate(
                &scenario.user,
                &scenario.price,
                &scenario.indicators,
                &scenario.historical_changes,
            );
            let ui = CaptionGenerator::complete(&recommendation);

            // 추천 노출 이벤트 기록
            let mut tracker = EventTracker::new(
                &app_config.analytics,
                MemorySink::new(app_config.analytics.max_retained_events),
            );
            tracker.track(AnalyticsEvent::recommendation_shown(
                &scenario.user.id,
                recommendation.action,
                recommendation.confidence,
            ))?;
            tracker.flush()?;

            if json {
                let analytics =
                    UserAnalyticsSummary::from_events(&scenario.user.id, tracker.sink().events());
                let output = AdviseOutput {
                    recommendation,
                    ui,
                    analytics,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_recommendation(&recommendation, &ui);
            }
        }

        Commands::Sample { output } => {
            let scenario = Scenario::sample();

            match output {
                Some(path) => {
                    scenario.to_json_file(&path)?;
                    println!("데모 시나리오 저장 완료: {}", path);
                }
                None => {
                    println!("{}", serde_json::to_string_pretty(&scenario)?);
                }
            }
        }
    }

    Ok(())
}

/// 사람이 읽는 형식으로 추천을 출력합니다.
fn print_recommendation(recommendation: &gold_core::Recommendation, ui: &UiCopy) {
    println!();
    println!("{}", ui.title);
    println!(
        "{} {} ({:.1}%)",
        ui.confidence_badge.emoji, ui.confidence_badge.text, recommendation.confidence
    );
    println!();
    println!("{}", ui.description);

    if !ui.insights.is_empty() {
        println!();
        for insight in &ui.insights {
            println!("  {} {}: {}", insight.icon, insight.label, insight.value);
        }
    }

    println!();
    if let Some(nudge) = &ui.nudge {
        println!("{}", nudge);
    }
    if let Some(hold_message) = &ui.hold_message {
        println!("{}", hold_message);
    }
    if let Some(warning) = &ui.risk_warning {
        println!("{}", warning);
    }
    if let Some(return_message) = &ui.return_message {
        println!("{}", return_message);
    }

    println!();
    println!("▶ {}", ui.cta_button.text);
}
