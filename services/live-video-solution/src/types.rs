use serde::Deserialize;
use yidun_core::types::{Label, Suggestion};
use yidun_core::Params;

/// Envelope of the live audio-video callback poll.
#[derive(Debug, Deserialize)]
pub struct LiveSolutionCallbackResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Finished records; empty when nothing is pending.
    #[serde(default)]
    pub result: Vec<LiveSolutionRecord>,
}

/// One finished live record. Machine results arrive under `evidences`,
/// human-review actions under `review_evidences`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveSolutionRecord {
    /// Server-assigned task id.
    pub task_id: String,
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
    /// Opaque callback value, echoed back.
    pub callback: Option<String>,
    /// Processing status.
    pub status: i32,
    /// Machine evidence, split into audio and video blocks.
    pub evidences: Option<LiveSolutionEvidences>,
    /// Human-review evidence.
    pub review_evidences: Option<ReviewEvidence>,
}

/// Machine evidence of one live record. Exactly one block is set per record.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LiveSolutionEvidences {
    /// Audio slice evidence.
    pub audio: Option<LiveAudioEvidence>,
    /// Video frame evidence.
    pub video: Option<LiveVideoEvidence>,
}

/// Machine verdict for one live audio slice. When `asr_status` is 4
/// transcription failed and only `asr_result` is meaningful.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveAudioEvidence {
    /// Transcription status.
    pub asr_status: Option<i32>,
    /// Transcription failure code.
    pub asr_result: Option<i32>,
    /// Slice start, milliseconds.
    pub start_time: i64,
    /// Slice end.
    pub end_time: i64,
    /// Machine verdict.
    pub action: Suggestion,
    /// Flagged classifications within the slice.
    pub segments: Vec<Label>,
}

/// Machine verdict for one live video frame.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LiveVideoEvidence {
    /// The frame that triggered the verdict.
    pub evidence: Option<FrameEvidence>,
    /// Violation classifications.
    pub labels: Vec<Label>,
}

/// One evidence frame.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameEvidence {
    /// Frame type.
    #[serde(rename = "type")]
    pub kind: Option<i32>,
    /// Frame URL.
    pub url: Option<String>,
    /// Frame start, milliseconds into the stream.
    pub begin_time: i64,
    /// Frame end.
    pub end_time: i64,
}

/// Human-review action on a live stream. `action` 2 is a warning, 3 cuts the
/// stream.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewEvidence {
    /// Action the reviewer took.
    pub action: i32,
    /// When the action happened, epoch milliseconds.
    pub action_time: i64,
    /// Violation category behind the action.
    pub label: Option<i32>,
    /// Free-form violation detail.
    pub detail: Option<String>,
    /// How many warnings the stream has received.
    pub warn_count: Option<i32>,
    /// Evidence items backing the action.
    pub evidence: Vec<serde_json::Value>,
}

/// Envelope of the human-review monitor query.
#[derive(Debug, Deserialize)]
pub struct MonitorQueryResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Lookup result, present on success.
    #[serde(default)]
    pub result: Option<MonitorQueryResult>,
}

/// Review history of one live task. `status` is 0 for found, 20 when the
/// task is expired, 30 when it is unknown.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MonitorQueryResult {
    /// Per-task lookup status.
    pub status: i32,
    /// Review actions in chronological order.
    pub records: Vec<MonitorRecord>,
}

/// One human-review action.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonitorRecord {
    /// Action the reviewer took.
    pub action: i32,
    /// Violation category behind the action.
    pub label: Option<i32>,
    /// When the action happened, epoch milliseconds.
    pub action_time: i64,
    /// Free-form violation detail.
    pub detail: Option<String>,
}

/// Parameters for the audio slice query on a live task.
#[derive(Debug, Clone)]
pub struct AudioTaskQueryRequest {
    /// Task to look up.
    pub task_id: String,
    /// Window start, epoch milliseconds.
    pub start_time: i64,
    /// Window end.
    pub end_time: i64,
}

impl AudioTaskQueryRequest {
    /// A query for the given task and time window.
    pub fn new(task_id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            task_id: task_id.into(),
            start_time,
            end_time,
        }
    }

    pub(crate) fn into_params(self) -> Params {
        let mut params = Params::new();
        params.insert("taskId", self.task_id);
        params.insert("startTime", self.start_time.to_string());
        params.insert("endTime", self.end_time.to_string());
        params
    }
}

/// Envelope of the audio slice query.
#[derive(Debug, Deserialize)]
pub struct AudioTaskQueryResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Flagged slices within the window.
    #[serde(default)]
    pub result: Vec<AudioTaskSlice>,
}

/// One moderated audio slice.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioTaskSlice {
    /// The queried task id.
    pub task_id: String,
    /// Machine verdict for the slice.
    pub action: Suggestion,
    /// Slice start, epoch milliseconds.
    pub start_time: i64,
    /// Slice end.
    pub end_time: i64,
    /// Flagged classifications within the slice.
    pub segments: Vec<Label>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_callback_audio_evidence() {
        let resp: LiveSolutionCallbackResponse = serde_json::from_str(
            r#"{"code":200,"msg":"ok","result":[{"taskId":"t-1","status":2,
                "evidences":{"audio":{"asrStatus":2,"startTime":0,"endTime":10000,
                    "action":2,"segments":[{"label":200,"level":2}]}}}]}"#,
        )
        .unwrap();
        let evidences = resp.result[0].evidences.as_ref().unwrap();
        let audio = evidences.audio.as_ref().unwrap();
        assert_eq!(audio.action, Suggestion::Reject);
        assert!(evidences.video.is_none());
    }

    #[test]
    fn test_callback_review_evidence() {
        let resp: LiveSolutionCallbackResponse = serde_json::from_str(
            r#"{"code":200,"msg":"ok","result":[{"taskId":"t-1","status":2,
                "reviewEvidences":{"action":3,"actionTime":1600000000000,
                    "label":100,"detail":"porn","warnCount":2,
                    "evidence":[{"url":"https://example.com/e.jpg"}]}}]}"#,
        )
        .unwrap();
        let review = resp.result[0].review_evidences.as_ref().unwrap();
        assert_eq!(review.action, 3);
        assert_eq!(review.warn_count, Some(2));
        assert_eq!(review.evidence.len(), 1);
    }

    #[test]
    fn test_monitor_query_records() {
        let resp: MonitorQueryResponse = serde_json::from_str(
            r#"{"code":200,"msg":"ok","result":{"status":0,"records":[
                {"action":2,"label":100,"actionTime":1600000000000,"detail":"warn"}]}}"#,
        )
        .unwrap();
        let result = resp.result.unwrap();
        assert_eq!(result.records[0].action, 2);
    }

    #[test]
    fn test_audio_task_query_params() {
        let params =
            AudioTaskQueryRequest::new("t-1", 1578326400000, 1578327000000).into_params();
        assert_eq!(params.get("taskId"), Some("t-1"));
        assert_eq!(params.get("startTime"), Some("1578326400000"));
        assert_eq!(params.get("endTime"), Some("1578327000000"));
    }
}
