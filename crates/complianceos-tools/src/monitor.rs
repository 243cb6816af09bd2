//! PII / PCI pattern scanner for event batches.
//!
//! An event is flagged when its payload text contains a card-like digit run
//! (13-16 digits, optional spaces or dashes) or, for events explicitly marked
//! `"sensitive": true`, an email address. The payload text is the event's
//! `payload` field when present and non-empty, otherwise the whole event
//! serialized as JSON. An explicit `"payload": null` scans as the text
//! `null`, so fields beside it are not inspected.

use std::any::Any;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use complianceos_contracts::{
    monitoring::{Anomaly, AnomalyPattern},
    tool::ToolId,
};
use complianceos_core::traits::{Tool, ToolKind};

static CARD_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:\d[ -]*?){13,16}\b").expect("card-number pattern is valid")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern is valid")
});

#[derive(Debug, Default, Clone, Copy)]
pub struct LogMonitor;

impl LogMonitor {
    pub fn new() -> Self {
        Self
    }

    /// Scan a whole batch at once. Anomalies come back in input order.
    pub fn scan(&self, events: &[Value]) -> Vec<Anomaly> {
        debug!(events = events.len(), "scanning events for PII/PCI patterns");

        events
            .iter()
            .enumerate()
            .filter_map(|(index, event)| {
                classify(event).map(|pattern| Anomaly {
                    index,
                    pattern,
                    event: event.clone(),
                })
            })
            .collect()
    }
}

/// The pattern an event trips, if any. Card numbers win over email.
pub fn classify(event: &Value) -> Option<AnomalyPattern> {
    let text = payload_text(event);
    if CARD_NUMBER.is_match(&text) {
        return Some(AnomalyPattern::CardNumber);
    }
    let sensitive = event.get("sensitive").and_then(Value::as_bool) == Some(true);
    if sensitive && EMAIL.is_match(&text) {
        return Some(AnomalyPattern::EmailInSensitiveStream);
    }
    None
}

fn payload_text(event: &Value) -> String {
    match event.get("payload") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(_)) | None => event.to_string(),
        Some(other) => other.to_string(),
    }
}

impl Tool for LogMonitor {
    fn id(&self) -> ToolId {
        ToolId::LogMonitor
    }

    fn description(&self) -> &'static str {
        "Flags card numbers and sensitive-stream email addresses in event batches"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ToolKind for LogMonitor {
    const ID: ToolId = ToolId::LogMonitor;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn card_number_is_flagged_unconditionally() {
        let events = vec![
            json!({ "payload": "charge 4111111111111111 approved" }),
            json!({ "payload": "card 4111-1111-1111-1111", "sensitive": false }),
            json!({ "payload": "card 4111 1111 1111 1111" }),
        ];
        let anomalies = LogMonitor::new().scan(&events);
        assert_eq!(anomalies.len(), 3);
        assert!(anomalies.iter().all(|a| a.pattern == AnomalyPattern::CardNumber));
        assert_eq!(
            anomalies.iter().map(|a| a.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn email_needs_sensitive_flag() {
        let flagged = json!({ "payload": "contact jane.doe@example.com", "sensitive": true });
        let ignored = json!({ "payload": "contact jane.doe@example.com", "sensitive": false });
        let unmarked = json!({ "payload": "contact jane.doe@example.com" });

        assert_eq!(classify(&flagged), Some(AnomalyPattern::EmailInSensitiveStream));
        assert_eq!(classify(&ignored), None);
        assert_eq!(classify(&unmarked), None);
    }

    #[test]
    fn pii_flag_without_pattern_is_not_flagged() {
        let events = vec![
            json!({ "id": 1, "amount": 500, "contains_pii": false }),
            json!({ "id": 2, "amount": 50000, "contains_pii": false }),
            json!({ "id": 3, "amount": 200, "contains_pii": true }),
        ];
        assert!(LogMonitor::new().scan(&events).is_empty());
    }

    #[test]
    fn whole_event_is_scanned_without_payload() {
        let event = json!({ "card": "5500005555555559", "id": 7 });
        assert_eq!(classify(&event), Some(AnomalyPattern::CardNumber));
    }

    #[test]
    fn null_payload_hides_sibling_fields() {
        let event = json!({ "payload": null, "card": "4111111111111111" });
        assert_eq!(classify(&event), None);
    }

    #[test]
    fn short_digit_runs_are_ignored() {
        assert_eq!(classify(&json!({ "payload": "order 123456789012 shipped" })), None);
    }

    #[test]
    fn anomaly_carries_the_event() {
        let events = vec![
            json!({ "payload": "ok" }),
            json!({ "payload": "pan 4111111111111111", "source": "pos-7" }),
        ];
        let anomalies = LogMonitor::new().scan(&events);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].index, 1);
        assert_eq!(anomalies[0].event["source"], "pos-7");
    }
}
