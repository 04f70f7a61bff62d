use serde::{Deserialize, Serialize};
use yidun_core::types::{Label, Suggestion};
use yidun_core::{Params, Result};

/// Parameters for the online text check.
///
/// `data_id` and `content` are required; everything else is optional
/// context the risk engine can use.
#[derive(Debug, Clone, Default)]
pub struct TextCheckRequest {
    /// Caller-chosen identifier for this piece of content.
    pub data_id: String,
    /// The text to moderate.
    pub content: String,
    /// Content kind hint.
    pub data_type: Option<String>,
    /// Client IP of the author.
    pub ip: Option<String>,
    /// Account of the author.
    pub account: Option<String>,
    /// Device type of the author.
    pub device_type: Option<String>,
    /// Device id of the author.
    pub device_id: Option<String>,
    /// Opaque value echoed back in callbacks.
    pub callback: Option<String>,
    /// Publish time of the content, milliseconds.
    pub publish_time: Option<i64>,
    /// Callback URL; setting it switches the task to push delivery.
    pub callback_url: Option<String>,
}

impl TextCheckRequest {
    /// A request carrying just the required fields.
    pub fn new(data_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            data_id: data_id.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub(crate) fn into_params(self) -> Params {
        let mut params = Params::new();
        params.insert("dataId", self.data_id);
        params.insert("content", self.content);
        let optional = [
            ("dataType", self.data_type),
            ("ip", self.ip),
            ("account", self.account),
            ("deviceType", self.device_type),
            ("deviceId", self.device_id),
            ("callback", self.callback),
            ("publishTime", self.publish_time.map(|t| t.to_string())),
            ("callbackUrl", self.callback_url),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                params.insert(key, value);
            }
        }
        params
    }
}

/// One text entry for batch check or async submit. Serialized into the
/// `texts` JSON list.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextItem {
    /// Caller-chosen identifier.
    pub data_id: String,
    /// The text itself.
    pub content: String,
    /// Submit action hint (0 machine only, 1 force human review).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Opaque value echoed back in callbacks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
    /// Callback URL for push delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl TextItem {
    /// A text entry with the required fields.
    pub fn new(data_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            data_id: data_id.into(),
            content: content.into(),
            ..Default::default()
        }
    }
}

pub(crate) fn batch_params(texts: &[TextItem], check_labels: Option<&str>) -> Result<Params> {
    let mut params = Params::new();
    params.insert_json("texts", &texts)?;
    if let Some(check_labels) = check_labels {
        params.insert("checkLabels", check_labels);
    }
    Ok(params)
}

/// Envelope of the online text check.
#[derive(Debug, Deserialize)]
pub struct TextCheckResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Verdict, present on success.
    #[serde(default)]
    pub result: Option<TextCheckResult>,
}

/// Verdict for one checked text.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextCheckResult {
    /// Machine verdict.
    pub action: Suggestion,
    /// Server-assigned task id.
    pub task_id: String,
    /// Violation classifications.
    pub labels: Vec<Label>,
}

/// Envelope of the batch text check.
#[derive(Debug, Deserialize)]
pub struct TextBatchCheckResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// One entry per submitted text.
    #[serde(default)]
    pub result: Vec<TextBatchCheckResult>,
}

/// Wrapper around the per-text antispam verdict.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TextBatchCheckResult {
    /// The verdict block.
    pub antispam: Option<TextBatchAntispam>,
}

/// Batch verdict for one text.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextBatchAntispam {
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
    /// Server-assigned task id.
    pub task_id: String,
    /// Machine verdict.
    pub suggestion: Suggestion,
    /// Whether the verdict came from machine or human review.
    pub result_type: Option<i32>,
    /// Censorship pipeline that produced the verdict.
    pub censor_type: Option<i32>,
    /// Violation classifications.
    pub labels: Vec<Label>,
}

/// Envelope of the async text submit.
#[derive(Debug, Deserialize)]
pub struct TextSubmitResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// One receipt per submitted text.
    #[serde(default)]
    pub result: Vec<SubmitReceipt>,
}

/// Receipt for one submitted item: the task id to poll with later.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitReceipt {
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
    /// Server-assigned task id.
    pub task_id: String,
}
