//! Moderation taxonomy types shared across endpoint families.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Machine verdict for a piece of content.
///
/// The wire value is an integer: 0 pass, 1 suspicious (needs human review),
/// 2 reject. Unknown codes are kept as-is rather than failing the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    /// Content passed.
    Pass,
    /// Suspicious, needs human review.
    Review,
    /// Rejected.
    Reject,
    /// A verdict code this client does not know about.
    Other(i32),
}

impl From<i32> for Suggestion {
    fn from(code: i32) -> Self {
        match code {
            0 => Suggestion::Pass,
            1 => Suggestion::Review,
            2 => Suggestion::Reject,
            other => Suggestion::Other(other),
        }
    }
}

impl Suggestion {
    /// The raw wire code.
    pub fn code(&self) -> i32 {
        match self {
            Suggestion::Pass => 0,
            Suggestion::Review => 1,
            Suggestion::Reject => 2,
            Suggestion::Other(code) => *code,
        }
    }
}

impl<'de> Deserialize<'de> for Suggestion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Suggestion::from(i32::deserialize(deserializer)?))
    }
}

impl Serialize for Suggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

impl Default for Suggestion {
    fn default() -> Self {
        Suggestion::Pass
    }
}

/// One violation classification attached to a verdict.
///
/// The sub-label layout changed between protocol versions, so sub labels
/// and hint details stay as raw JSON for the caller to interpret.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Label {
    /// Violation category.
    pub label: i32,
    /// Severity level within the category.
    pub level: i32,
    /// Confidence, where the endpoint reports one.
    pub rate: Option<f64>,
    /// Second-level classification entries.
    pub sub_labels: Vec<serde_json::Value>,
    /// Extra evidence details.
    pub details: Option<LabelDetails>,
}

/// Evidence details carried inside a [`Label`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelDetails {
    /// Matched hint words/fragments.
    pub hint: Vec<serde_json::Value>,
}

/// A time-bounded flagged slice of audio or video.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Segment {
    /// Start offset, seconds or milliseconds depending on the endpoint.
    pub start_time: i64,
    /// End offset.
    pub end_time: i64,
    /// Transcribed or matched content, when present.
    pub content: Option<String>,
    /// Classifications for this slice.
    pub labels: Vec<Label>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_round_trip() {
        for code in [0, 1, 2, 7] {
            let s: Suggestion = serde_json::from_str(&code.to_string()).unwrap();
            assert_eq!(s.code(), code);
            assert_eq!(serde_json::to_string(&s).unwrap(), code.to_string());
        }
        assert_eq!(
            serde_json::from_str::<Suggestion>("2").unwrap(),
            Suggestion::Reject
        );
    }

    #[test]
    fn test_label_with_absent_fields() {
        let label: Label = serde_json::from_str(r#"{"label":100,"level":2}"#).unwrap();
        assert_eq!(label.label, 100);
        assert_eq!(label.level, 2);
        assert_eq!(label.rate, None);
        assert!(label.sub_labels.is_empty());
        assert!(label.details.is_none());
    }

    #[test]
    fn test_label_with_details() {
        let label: Label = serde_json::from_str(
            r#"{"label":200,"level":1,"rate":0.99,"subLabels":[{"subLabel":20001}],"details":{"hint":["bad word"]}}"#,
        )
        .unwrap();
        assert_eq!(label.rate, Some(0.99));
        assert_eq!(label.sub_labels.len(), 1);
        assert_eq!(label.details.unwrap().hint.len(), 1);
    }

    #[test]
    fn test_segment_defaults() {
        let seg: Segment = serde_json::from_str(r#"{"startTime":3,"endTime":9}"#).unwrap();
        assert_eq!(seg.start_time, 3);
        assert_eq!(seg.end_time, 9);
        assert!(seg.content.is_none());
        assert!(seg.labels.is_empty());
    }
}
