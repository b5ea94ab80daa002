//! Domain types for the GridWatch feeder registry.
//!
//! `Feeder` is the only entity the store tracks. Its `configuration` mapping
//! is opaque: the registry never inspects or validates it, it is carried
//! through serialization untouched.
//!
//! `ToolResult` is the uniform envelope every registry operation and lookup
//! returns — `{"status": "success", "report": …}` on success,
//! `{"status": "error", "error_message": "…"}` on failure. No error crosses
//! an operation boundary any other way.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed feeder identifier. Unique and immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeederId(pub String);

impl fmt::Display for FeederId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for FeederId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FeederId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A grid-monitoring feeder tracked by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feeder {
    pub feeder_id: FeederId,
    pub name: String,
    pub location: String,
    /// Opaque configuration mapping. Never validated by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Map<String, Value>>,
}

impl Feeder {
    pub fn new(
        feeder_id: FeederId,
        name: impl Into<String>,
        location: impl Into<String>,
        configuration: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            feeder_id,
            name: name.into(),
            location: location.into(),
            configuration,
        }
    }

    /// Serialize to the plain-mapping record stored under `feeder:<id>`.
    pub fn to_record(&self) -> Value {
        // A struct of strings and an opaque map cannot fail to serialize.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Reconstruct a feeder from a stored record.
    ///
    /// Fails if `feeder_id`, `name`, or `location` is absent; a missing
    /// `configuration` becomes `None`.
    pub fn from_record(record: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(record.clone())
    }
}

// ---------------------------------------------------------------------------
// Result envelope
// ---------------------------------------------------------------------------

/// Uniform two-field result returned by every operation.
///
/// Serializes as `{"status": "success", "report": …}` or
/// `{"status": "error", "error_message": "…"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolResult {
    Success { report: Value },
    Error { error_message: String },
}

impl ToolResult {
    pub fn success(report: impl Into<Value>) -> Self {
        ToolResult::Success {
            report: report.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ToolResult::Error {
            error_message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ToolResult::Success { .. })
    }

    /// The `report` payload, if this is a success.
    pub fn report(&self) -> Option<&Value> {
        match self {
            ToolResult::Success { report } => Some(report),
            ToolResult::Error { .. } => None,
        }
    }

    /// The `error_message`, if this is an error.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ToolResult::Success { .. } => None,
            ToolResult::Error { error_message } => Some(error_message),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn newtype_display() {
        assert_eq!(FeederId::from("f1").to_string(), "f1");
        assert_eq!(FeederId::from(String::from("f2")).to_string(), "f2");
    }

    #[test]
    fn record_roundtrip_with_configuration() {
        let mut config = Map::new();
        config.insert("rate".into(), json!(5));
        let feeder = Feeder::new(FeederId::from("f1"), "Feeder One", "Loc A", Some(config));

        let record = feeder.to_record();
        assert_eq!(record["feeder_id"], json!("f1"));
        assert_eq!(record["configuration"]["rate"], json!(5));

        let back = Feeder::from_record(&record).expect("decode");
        assert_eq!(back, feeder);
    }

    #[test]
    fn record_without_configuration_omits_the_field() {
        let feeder = Feeder::new(FeederId::from("f1"), "Feeder One", "Loc A", None);
        let record = feeder.to_record();
        assert!(record.get("configuration").is_none());

        let back = Feeder::from_record(&record).expect("decode");
        assert_eq!(back.configuration, None);
    }

    #[test]
    fn from_record_rejects_missing_required_field() {
        let record = json!({"feeder_id": "f1", "name": "Feeder One"});
        let err = Feeder::from_record(&record).unwrap_err();
        assert!(err.to_string().contains("location"), "got: {err}");
    }

    #[test]
    fn envelope_wire_shape() {
        let ok = ToolResult::success("fine");
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"status": "success", "report": "fine"})
        );

        let err = ToolResult::error("boom");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"status": "error", "error_message": "boom"})
        );
    }

    #[test]
    fn envelope_accessors() {
        let ok = ToolResult::success(json!([1, 2]));
        assert!(ok.is_success());
        assert_eq!(ok.report(), Some(&json!([1, 2])));
        assert_eq!(ok.error_message(), None);

        let err = ToolResult::error("nope");
        assert!(!err.is_success());
        assert_eq!(err.error_message(), Some("nope"));
    }
}
