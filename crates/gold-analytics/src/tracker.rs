//! 이벤트 트래커.
//!
//! 이벤트를 메모리 버퍼에 쌓다가 배치 크기에 도달하면 싱크로
//! 플러시합니다. 싱크 실패 시 해당 배치는 버퍼에 남아 다음
//! 플러시에서 재시도됩니다.

use gold_core::{AdvisorError, AdvisorResult, AnalyticsConfig, AnalyticsEvent};
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// 이벤트 배치를 받아 처리하는 싱크.
pub trait EventSink {
    /// 배치를 전송합니다. 실패하면 배치 전체가 재시도 대상이 됩니다.
    fn flush(&mut self, events: &[AnalyticsEvent]) -> AdvisorResult<()>;
}

/// 이벤트를 구조화 로그로 내보내는 싱크.
#[derive(Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn flush(&mut self, events: &[AnalyticsEvent]) -> AdvisorResult<()> {
        for event in events {
            let payload = serde_json::to_string(event)?;
            info!(
                event_type = event.kind.name(),
                user_id = %event.user_id,
                %payload,
                "분석 이벤트"
            );
        }
        Ok(())
    }
}

/// 이벤트를 메모리에 보관하는 싱크 (테스트 및 배치 집계용).
///
/// 보관 한도를 초과하면 오래된 이벤트부터 버립니다.
#[derive(Debug)]
pub struct MemorySink {
    events: VecDeque<AnalyticsEvent>,
    max_retained: usize,
}

impl MemorySink {
    /// 보관 한도를 지정하여 생성합니다.
    pub fn new(max_retained: usize) -> Self {
        Self {
            events: VecDeque::new(),
            max_retained,
        }
    }

    /// 보관 중인 이벤트 목록.
    pub fn events(&self) -> impl Iterator<Item = &AnalyticsEvent> {
        self.events.iter()
    }

    /// 보관 중인 이벤트 수.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// 보관 중인 이벤트가 없는지 여부.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// 보관 중인 이벤트를 모두 꺼냅니다.
    pub fn drain(&mut self) -> Vec<AnalyticsEvent> {
        self.events.drain(..).collect()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new(AnalyticsConfig::default().max_retained_events)
    }
}

impl EventSink for MemorySink {
    fn flush(&mut self, events: &[AnalyticsEvent]) -> AdvisorResult<()> {
        if self.max_retained == 0 {
            return Err(AdvisorError::Analytics(
                "보관 한도가 0인 싱크에는 이벤트를 저장할 수 없습니다".to_string(),
            ));
        }

        for event in events {
            if self.events.len() >= self.max_retained {
                self.events.pop_front();
            }
            self.events.push_back(event.clone());
        }
        Ok(())
    }
}

/// 이벤트 트래커.
///
/// 버퍼가 배치 크기에 도달하면 자동으로 플러시합니다.
pub struct EventTracker<S: EventSink> {
    sink: S,
    buffer: Vec<AnalyticsEvent>,
    max_batch_size: usize,
}

impl<S: EventSink> EventTracker<S> {
    /// 설정과 싱크로 트래커를 생성합니다.
    pub fn new(config: &AnalyticsConfig, sink: S) -> Self {
        // 배치 크기 0은 버퍼링 없이 즉시 플러시로 취급
        Self {
            sink,
            buffer: Vec::with_capacity(config.max_batch_size.max(1)),
            max_batch_size: config.max_batch_size.max(1),
        }
    }

    /// 이벤트를 기록합니다. 버퍼가 가득 차면 플러시합니다.
    pub fn track(&mut self, event: AnalyticsEvent) -> AdvisorResult<()> {
        debug!(event_type = event.kind.name(), user_id = %event.user_id, "이벤트 기록");
        self.buffer.push(event);

        if self.buffer.len() >= self.max_batch_size {
            self.flush()?;
        }
        Ok(())
    }

    /// 버퍼에 남은 이벤트를 모두 싱크로 보냅니다.
    ///
    /// 싱크가 실패하면 버퍼를 유지하여 다음 호출에서 재시도합니다.
    pub fn flush(&mut self) -> AdvisorResult<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        match self.sink.flush(&self.buffer) {
            Ok(()) => {
                debug!(count = self.buffer.len(), "이벤트 배치 플러시 완료");
                self.buffer.clear();
                Ok(())
            }
            Err(err) => {
                warn!(count = self.buffer.len(), error = %err, "이벤트 플러시 실패, 버퍼 유지");
                Err(err)
            }
        }
    }

    /// 버퍼에 대기 중인 이벤트 수.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// 싱크 참조.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// 싱크 가변 참조.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// 트래커를 소비하고 싱크를 돌려줍니다.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gold_core::TradeSide;
    use rust_decimal_macros::dec;

    fn test_config(max_batch_size: usize) -> AnalyticsConfig {
        AnalyticsConfig {
            max_batch_size,
            max_retained_events: 1000,
        }
    }

    #[test]
    fn test_auto_flush_at_batch_size() {
        let mut tracker = EventTracker::new(&test_config(3), MemorySink::default());

        tracker
            .track(AnalyticsEvent::page_view("user_1", "/home"))
            .unwrap();
        tracker
            .track(AnalyticsEvent::page_view("user_1", "/buy"))
            .unwrap();
        assert_eq!(tracker.pending(), 2);
        assert_eq!(tracker.sink().len(), 0);

        // 3번째 이벤트에서 자동 플러시
        tracker
            .track(AnalyticsEvent::transaction(
                "user_1",
                TradeSide::Buy,
                dec!(5000),
                dec!(0.8),
            ))
            .unwrap();
        assert_eq!(tracker.pending(), 0);
        assert_eq!(tracker.sink().len(), 3);
    }

    #[test]
    fn test_explicit_flush() {
        let mut tracker = EventTracker::new(&test_config(100), MemorySink::default());

        tracker
            .track(AnalyticsEvent::page_view("user_1", "/home"))
            .unwrap();
        assert_eq!(tracker.pending(), 1);

        tracker.flush().unwrap();
        assert_eq!(tracker.pending(), 0);
        assert_eq!(tracker.sink().len(), 1);

        // 빈 버퍼 플러시는 no-op
        tracker.flush().unwrap();
        assert_eq!(tracker.sink().len(), 1);
    }

    #[test]
    fn test_memory_sink_retention_limit() {
        let mut sink = MemorySink::new(2);
        let events = vec![
            AnalyticsEvent::page_view("user_1", "/a"),
            AnalyticsEvent::page_view("user_1", "/b"),
            AnalyticsEvent::page_view("user_1", "/c"),
        ];
        sink.flush(&events).unwrap();

        // 가장 오래된 /a 가 버려짐
        assert_eq!(sink.len(), 2);
        let pages: Vec<_> = sink
            .events()
            .map(|e| match &e.kind {
                gold_core::EventKind::PageView { page } => page.clone(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(pages, vec!["/b", "/c"]);
    }

    #[test]
    fn test_failed_flush_keeps_buffer() {
        // 보관 한도 0인 싱크는 항상 실패
        let mut tracker = EventTracker::new(&test_config(100), MemorySink::new(0));

        tracker
            .track(AnalyticsEvent::page_view("user_1", "/home"))
            .unwrap();
        assert!(tracker.flush().is_err());

        // 실패한 배치는 버퍼에 남아 재시도 대상
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn test_zero_batch_size_flushes_immediately() {
        let mut tracker = EventTracker::new(&test_config(0), MemorySink::default());

        tracker
            .track(AnalyticsEvent::page_view("user_1", "/home"))
            .unwrap();
        assert_eq!(tracker.pending(), 0);
        assert_eq!(tracker.sink().len(), 1);
    }

    #[test]
    fn test_tracing_sink_accepts_batch() {
        let mut sink = TracingSink;
        let events = vec![AnalyticsEvent::user_action("user_1", "opened_app")];
        assert!(sink.flush(&events).is_ok());
    }
}
