//! Fire-and-forget usage events.
//!
//! The sink is an external collaborator: recording must never fail the
//! caller and never touches editor state. The default sink drops events;
//! the binary installs a tracing-backed one.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventKind {
    TemplateSelected { template_id: String },
    ThemeToggled { theme: String },
    EditorTabChanged { tab_name: String },
    AiEnhancementUsed { context: String },
    AiBulletGenerated,
    DownloadStarted { format: String },
    DownloadCompleted { format: String },
    DownloadFailed { format: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: EventKind,
}

/// No-op-safe external sink. Implementations swallow their own failures.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &AnalyticsEvent);
}

/// Drops every event.
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &AnalyticsEvent) {}
}

/// Logs events as structured JSON lines under the `analytics` target.
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &AnalyticsEvent) {
        match serde_json::to_string(event) {
            Ok(json) => tracing::info!(target: "analytics", "{json}"),
            Err(e) => tracing::warn!(target: "analytics", "unrecordable event: {e}"),
        }
    }
}

/// Stamps and forwards one event.
pub fn emit(sink: &dyn EventSink, kind: EventKind) {
    sink.record(&AnalyticsEvent {
        at: Utc::now(),
        kind,
    });
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Captures recorded event kinds for assertions.
    #[derive(Default)]
    pub struct RecordingSink {
        pub events: Mutex<Vec<EventKind>>,
    }

    impl EventSink for RecordingSink {
        fn record(&self, event: &AnalyticsEvent) {
            self.events.lock().unwrap().push(event.kind.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingSink;
    use super::*;

    #[test]
    fn test_emit_stamps_and_forwards() {
        let sink = RecordingSink::default();
        emit(
            &sink,
            EventKind::TemplateSelected {
                template_id: "classic".to_string(),
            },
        );
        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            EventKind::TemplateSelected {
                template_id: "classic".to_string()
            }
        );
    }

    #[test]
    fn test_event_serializes_with_snake_case_tag() {
        let event = AnalyticsEvent {
            at: Utc::now(),
            kind: EventKind::DownloadFailed {
                format: "pdf".to_string(),
                error: "capture failed".to_string(),
            },
        };
        let json = serde_json::to_string(&event).expect("serialize");
        assert!(json.contains("\"event\":\"download_failed\""));
        assert!(json.contains("\"format\":\"pdf\""));
    }

    #[test]
    fn test_null_sink_accepts_everything() {
        emit(&NullSink, EventKind::AiBulletGenerated);
    }
}
