use serde::{Deserialize, Serialize};
use yidun_core::types::{Label, Suggestion};
use yidun_core::{Params, Result};

/// Parameters for an on-demand audio-video submission.
#[derive(Debug, Clone, Default)]
pub struct SolutionSubmitRequest {
    /// Caller-chosen identifier.
    pub data_id: String,
    /// URL of the audio-video to moderate.
    pub url: String,
    /// Extra still images to check alongside the stream.
    pub images: Vec<SubmitImage>,
    /// Opaque value echoed back in callbacks.
    pub callback: Option<String>,
    /// Callback URL for push delivery.
    pub callback_url: Option<String>,
}

impl SolutionSubmitRequest {
    /// A submission for the given data id and URL.
    pub fn new(data_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            data_id: data_id.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    pub(crate) fn into_params(self) -> Result<Params> {
        let mut params = Params::new();
        params.insert("dataId", self.data_id);
        params.insert("url", self.url);
        if !self.images.is_empty() {
            params.insert_json("images", &self.images)?;
        }
        let optional = [
            ("callback", self.callback),
            ("callbackUrl", self.callback_url),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                params.insert(key, value);
            }
        }
        Ok(params)
    }
}

/// One still image attached to a submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitImage {
    /// Image name, echoed back in results.
    pub name: String,
    /// Image URL.
    pub data: String,
}

/// Envelope of a submission.
#[derive(Debug, Deserialize)]
pub struct SolutionSubmitResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Task receipt, present on success.
    #[serde(default)]
    pub result: Option<SolutionSubmitReceipt>,
}

/// Receipt for one accepted submission.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolutionSubmitReceipt {
    /// Server-assigned task id; keep it for later queries.
    pub task_id: String,
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
}

/// Envelope of the per-task verdict query.
#[derive(Debug, Deserialize)]
pub struct SolutionQueryResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// One entry per queried task.
    #[serde(default)]
    pub result: Vec<SolutionQueryResult>,
}

/// Verdict for one queried task. `status` is 0 for found, 20 when the task
/// is older than seven days, 30 when it is unknown.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolutionQueryResult {
    /// The queried task id.
    pub task_id: String,
    /// Per-task lookup status.
    pub status: i32,
    /// Verdict code for the whole submission.
    pub result: Option<i32>,
    /// Machine evidence grouped by content type.
    pub evidences: Option<SolutionEvidences>,
    /// Human-review evidence; layout varies, kept as raw JSON.
    pub review_evidences: Option<serde_json::Value>,
}

/// Machine evidence grouped by content type. Only the types present in the
/// original submission are set.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SolutionEvidences {
    /// Text fragments.
    pub texts: Option<Vec<SolutionTextEvidence>>,
    /// Images.
    pub images: Option<Vec<SolutionImageEvidence>>,
    /// Audio tracks.
    pub audios: Option<Vec<SolutionAudioEvidence>>,
    /// Video frames.
    pub videos: Option<Vec<SolutionVideoEvidence>>,
}

/// Verdict for one text fragment.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolutionTextEvidence {
    /// Identifier of the fragment inside the submission.
    pub data_id: Option<String>,
    /// Machine verdict.
    pub action: Suggestion,
}

/// Verdict for one image.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolutionImageEvidence {
    /// Identifier of the image inside the submission.
    pub data_id: Option<String>,
    /// Detection status.
    pub status: Option<i32>,
    /// Machine verdict.
    pub action: Suggestion,
}

/// Verdict for one audio track. When `asr_status` is 4 transcription failed
/// and only `asr_result` is meaningful.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolutionAudioEvidence {
    /// Identifier of the track inside the submission.
    pub data_id: Option<String>,
    /// Transcription status.
    pub asr_status: Option<i32>,
    /// Transcription failure code.
    pub asr_result: Option<i32>,
    /// Machine verdict.
    pub action: Suggestion,
    /// Violation classifications.
    pub labels: Vec<Label>,
}

/// Verdict for one video track.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolutionVideoEvidence {
    /// Identifier of the track inside the submission.
    pub data_id: Option<String>,
    /// Detection status.
    pub status: Option<i32>,
    /// Highest violation level across frames.
    pub level: Option<i32>,
}

/// Envelope of the callback poll.
#[derive(Debug, Deserialize)]
pub struct SolutionCallbackResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Finished verdicts; empty when nothing is pending.
    #[serde(default)]
    pub result: Vec<SolutionCallbackResult>,
}

/// One finished verdict delivered via callback.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolutionCallbackResult {
    /// Server-assigned task id.
    pub task_id: String,
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
    /// Opaque callback value, echoed back.
    pub callback: Option<String>,
    /// Verdict code for the whole submission.
    pub result: i32,
    /// Machine evidence grouped by content type.
    pub evidences: Option<SolutionEvidences>,
}
