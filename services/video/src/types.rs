use serde::{Deserialize, Serialize};
use yidun_core::types::Label;
use yidun_core::{Params, Result};

/// Parameters for the on-demand video screenshot query.
#[derive(Debug, Clone, Default)]
pub struct VideoImageQueryRequest {
    /// Task to look up.
    pub task_id: String,
    /// Label levels to include, e.g. `[0, 1, 2]`.
    pub levels: Vec<i32>,
    /// Page number, starting at 1.
    pub page_num: Option<u32>,
    /// Rows per page.
    pub page_size: Option<u32>,
    /// Result ordering.
    pub order_type: Option<i32>,
}

impl VideoImageQueryRequest {
    /// A screenshot query for the given task.
    pub fn new(task_id: impl Into<String>, levels: Vec<i32>) -> Self {
        Self {
            task_id: task_id.into(),
            levels,
            ..Default::default()
        }
    }

    pub(crate) fn into_params(self) -> Result<Params> {
        let mut params = Params::new();
        params.insert("taskId", self.task_id);
        params.insert_json("levels", &self.levels)?;
        if let Some(page_num) = self.page_num {
            params.insert("pageNum", page_num.to_string());
        }
        if let Some(page_size) = self.page_size {
            params.insert("pageSize", page_size.to_string());
        }
        if let Some(order_type) = self.order_type {
            params.insert("orderType", order_type.to_string());
        }
        Ok(params)
    }
}

/// Envelope of the screenshot query.
#[derive(Debug, Deserialize)]
pub struct VideoImageQueryResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Lookup result, present on success.
    #[serde(default)]
    pub result: Option<VideoImageQueryResult>,
}

/// Screenshot lookup outcome. `status` is 0 for found, 20 when the task is
/// older than seven days, 30 when it is unknown.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VideoImageQueryResult {
    /// Per-task lookup status.
    pub status: i32,
    /// Matched screenshots, present when `status` is 0.
    pub images: Option<VideoImagePage>,
}

/// One page of screenshots.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VideoImagePage {
    /// Total matching screenshots across all pages.
    pub count: u64,
    /// Screenshots on this page.
    pub rows: Vec<VideoImageRow>,
}

/// One flagged screenshot.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoImageRow {
    /// Screenshot URL.
    pub url: String,
    /// Violation category.
    pub label: i32,
    /// Severity level within the category.
    pub label_level: i32,
    /// Slice start, milliseconds into the video.
    pub begin_time: i64,
    /// Slice end.
    pub end_time: i64,
}

/// Envelope of the live-video callback poll.
#[derive(Debug, Deserialize)]
pub struct LiveVideoCallbackResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Finished verdicts; empty when nothing is pending.
    #[serde(default)]
    pub result: Vec<LiveVideoCallbackResult>,
}

/// One finished live-video verdict.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LiveVideoCallbackResult {
    /// Moderation verdict for the stream segment.
    pub antispam: Option<LiveVideoAntispam>,
}

/// Moderation verdict for a live-video segment.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveVideoAntispam {
    /// Server-assigned task id.
    pub task_id: String,
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
    /// Whether machine or human review produced the verdict.
    pub censor_source: Option<i32>,
    /// Processing status; 2 means detection finished.
    pub status: i32,
    /// Evidence screenshot for the verdict; layout varies per version.
    pub evidence: Option<serde_json::Value>,
    /// Violation classifications; empty means the segment is clean.
    pub labels: Vec<Label>,
}

/// Envelope of the live wall callback poll.
#[derive(Debug, Deserialize)]
pub struct LiveWallCallbackResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Finished records; empty when nothing is pending.
    #[serde(default)]
    pub result: Vec<LiveWallRecord>,
}

/// One finished live wall record. Exactly one of `evidences` (machine) and
/// `review_evidences` (human) is set.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveWallRecord {
    /// Server-assigned task id.
    pub task_id: String,
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
    /// Opaque callback value, echoed back.
    pub callback: Option<String>,
    /// Processing status.
    pub status: i32,
    /// Machine evidence with labels and a screenshot slice.
    pub evidences: Option<serde_json::Value>,
    /// Human-review evidence with action and warn count.
    pub review_evidences: Option<serde_json::Value>,
}

/// One stream status update, serialized into the `realTimeInfoList` JSON list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealTimeInfo {
    /// The live task to update.
    pub task_id: String,
    /// New status code for the stream, e.g. `"100"` for finished.
    pub status: String,
}

impl RealTimeInfo {
    /// A status update for one task.
    pub fn new(task_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            status: status.into(),
        }
    }
}

/// Envelope of a feedback call.
#[derive(Debug, Deserialize)]
pub struct VideoFeedbackResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// One receipt per update entry.
    #[serde(default)]
    pub result: Vec<VideoFeedbackReceipt>,
}

/// Receipt for one update: 0 applied, 1 server error, 2 unknown task.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoFeedbackReceipt {
    /// The task the update applied to.
    pub task_id: String,
    /// Per-entry outcome code.
    pub result: i32,
}
