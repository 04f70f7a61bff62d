use serde::{Deserialize, Serialize};
use yidun_core::types::Suggestion;
use yidun_core::{Params, Result};

/// One reported content item, serialized into the `content` JSON list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportItem {
    /// Content type tag, e.g. `"text"` or `"image"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The content itself: text body or media URL.
    pub data: String,
    /// Identifier of this item inside the report.
    pub data_id: String,
}

impl ReportItem {
    /// A reported text fragment.
    pub fn text(data: impl Into<String>, data_id: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            data: data.into(),
            data_id: data_id.into(),
        }
    }

    /// A reported image URL.
    pub fn image(data: impl Into<String>, data_id: impl Into<String>) -> Self {
        Self {
            kind: "image".to_string(),
            data: data.into(),
            data_id: data_id.into(),
        }
    }
}

/// Parameters for a report submission.
#[derive(Debug, Clone)]
pub struct ReportSubmitRequest {
    /// Account or entity being reported.
    pub reported_id: String,
    /// The reported content items.
    pub content: Vec<ReportItem>,
}

impl ReportSubmitRequest {
    /// A report against the given id.
    pub fn new(reported_id: impl Into<String>, content: Vec<ReportItem>) -> Self {
        Self {
            reported_id: reported_id.into(),
            content,
        }
    }

    pub(crate) fn into_params(self) -> Result<Params> {
        let mut params = Params::new();
        params.insert("reportedId", self.reported_id);
        params.insert_json("content", &self.content)?;
        Ok(params)
    }
}

/// Envelope of a report submission. Async acceptance puts the receipt in
/// `antispam` at the top level.
#[derive(Debug, Deserialize)]
pub struct ReportSubmitResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Task receipt, present when the report was accepted.
    #[serde(default)]
    pub antispam: Option<ReportReceipt>,
    /// Synchronous verdict payload, when the business is configured for it.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

/// Receipt for one accepted report.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportReceipt {
    /// Server-assigned task id; keep it for later queries.
    pub task_id: String,
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
}

/// Envelope of the report verdict query.
#[derive(Debug, Deserialize)]
pub struct ReportQueryResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// One entry per queried task.
    #[serde(default)]
    pub result: Vec<ReportQueryResult>,
}

/// One queried report verdict.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReportQueryResult {
    /// Moderation verdict for the report.
    pub antispam: Option<ReportAntispam>,
}

/// Moderation verdict for one report.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportAntispam {
    /// Server-assigned task id.
    pub task_id: String,
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
    /// Opaque callback value, echoed back.
    pub callback: Option<String>,
    /// Check progress status.
    pub check_status: Option<i32>,
    /// Machine verdict.
    pub suggestion: Suggestion,
    /// Whether the verdict came from machine or human review.
    pub result_type: Option<i32>,
    /// Per-content-type evidence; layout varies, kept as raw JSON.
    pub evidences: Option<serde_json::Value>,
}
