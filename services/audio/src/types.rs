use serde::{Deserialize, Serialize};
use yidun_core::types::{Label, Segment, Suggestion};
use yidun_core::Params;

/// Parameters for the online audio check.
#[derive(Debug, Clone, Default)]
pub struct AudioCheckRequest {
    /// URL of the audio to moderate.
    pub url: String,
    /// Caller-chosen identifier.
    pub data_id: Option<String>,
    /// Opaque value echoed back in callbacks.
    pub callback: Option<String>,
    /// Callback URL for push delivery.
    pub callback_url: Option<String>,
}

impl AudioCheckRequest {
    /// A request for the given audio URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub(crate) fn into_params(self) -> Params {
        let mut params = Params::new();
        params.insert("url", self.url);
        let optional = [
            ("dataId", self.data_id),
            ("callback", self.callback),
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

/// Envelope of the online audio check.
#[derive(Debug, Deserialize)]
pub struct AudioCheckResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Detection blocks, present on success.
    #[serde(default)]
    pub result: Option<AudioCheckResult>,
}

/// Detection blocks of one audio check.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AudioCheckResult {
    /// Moderation verdict.
    pub antispam: Option<AudioAntispam>,
    /// Spoken-language detection.
    pub language: Option<AudioLanguage>,
    /// Speech-to-text transcription.
    pub asr: Option<AudioAsr>,
    /// Voice attributes (gender etc.).
    pub voice: Option<AudioVoice>,
}

/// Moderation verdict for one audio.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioAntispam {
    /// Server-assigned task id.
    pub task_id: String,
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
    /// Processing status; 2 means detection finished.
    pub status: i32,
    /// Machine verdict.
    pub suggestion: Suggestion,
    /// Whether the verdict came from machine or human review.
    pub result_type: Option<i32>,
    /// Flagged time slices.
    pub segments: Vec<Segment>,
}

/// Spoken-language detection block.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioLanguage {
    /// Server-assigned task id.
    pub task_id: String,
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
    /// Opaque callback value, echoed back.
    pub callback: Option<String>,
    /// One entry per detected language.
    pub details: Vec<LanguageDetail>,
}

/// Segments attributed to one language.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageDetail {
    /// Language tag.
    #[serde(rename = "type")]
    pub language: String,
    /// Time slices in this language.
    pub segments: Vec<Segment>,
}

/// Speech-to-text block.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioAsr {
    /// Server-assigned task id.
    pub task_id: String,
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
    /// Opaque callback value, echoed back.
    pub callback: Option<String>,
    /// Transcribed time slices.
    pub details: Vec<Segment>,
}

/// Voice attribute block.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioVoice {
    /// Server-assigned task id.
    pub task_id: String,
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
    /// Opaque callback value, echoed back.
    pub callback: Option<String>,
    /// Raw attribute detail (e.g. `mainGender`).
    pub detail: Option<serde_json::Value>,
}

/// Envelope of the offline audio query.
#[derive(Debug, Deserialize)]
pub struct AudioQueryResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Moderation verdicts per queried task.
    #[serde(default)]
    pub antispam: Vec<AudioQueryAntispam>,
    /// Language detections per queried task.
    #[serde(default)]
    pub language: Vec<AudioQueryLanguage>,
    /// Transcriptions per queried task.
    #[serde(default)]
    pub asr: Vec<AudioQueryAsr>,
}

/// Queried moderation verdict. `status == 30` means the task is unknown.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioQueryAntispam {
    /// The queried task id.
    pub task_id: String,
    /// Per-task lookup status.
    pub status: i32,
    /// Machine verdict.
    pub action: Suggestion,
    /// Violation classifications.
    pub labels: Vec<Label>,
}

/// Queried language detection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioQueryLanguage {
    /// The queried task id.
    pub task_id: String,
    /// Per-task lookup status.
    pub status: i32,
    /// One entry per detected language.
    pub details: Vec<LanguageDetail>,
}

/// Queried transcription.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioQueryAsr {
    /// The queried task id.
    pub task_id: String,
    /// Per-task lookup status.
    pub status: i32,
    /// Transcribed time slices.
    pub details: Vec<Segment>,
}

/// Envelope of the live-audio callback poll.
#[derive(Debug, Deserialize)]
pub struct LiveAudioCallbackResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Callback payload, present on success.
    #[serde(default)]
    pub result: Option<LiveAudioCallbackResult>,
}

/// One callback batch for live audio streams.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LiveAudioCallbackResult {
    /// Finished moderation verdicts.
    pub antispam: Vec<LiveAudioAntispam>,
    /// Transcribed slices.
    pub asr: Vec<LiveAudioAsr>,
}

/// Moderation verdict for one live-audio segment.
///
/// Machine and human evidence layouts differ per version; they stay as raw
/// JSON for the caller to interpret.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveAudioAntispam {
    /// Server-assigned task id.
    pub task_id: String,
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
    /// Opaque callback value, echoed back.
    pub callback: Option<String>,
    /// Machine evidence, when the verdict is machine-made.
    pub evidences: Option<serde_json::Value>,
    /// Human-review evidence, when a reviewer decided.
    pub review_evidences: Option<serde_json::Value>,
}

/// One transcribed live-audio slice.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveAudioAsr {
    /// Server-assigned task id.
    pub task_id: String,
    /// Slice start, seconds.
    pub start_time: i64,
    /// Slice end, seconds.
    pub end_time: i64,
    /// Transcribed content.
    pub content: Option<String>,
}

/// One feedback entry, serialized into the `feedbacks` JSON list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    /// The live task to update.
    pub task_id: String,
    /// New status code for the stream, e.g. `"100"` for finished.
    pub status: String,
}

impl FeedbackItem {
    /// Feedback for one task.
    pub fn new(task_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            status: status.into(),
        }
    }
}

/// Envelope of a feedback call.
#[derive(Debug, Deserialize)]
pub struct FeedbackResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// One receipt per feedback entry.
    #[serde(default)]
    pub result: Vec<FeedbackReceipt>,
}

/// Receipt for one feedback entry: 0 applied, 1 server error, 2 unknown task.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackReceipt {
    /// The task the feedback applied to.
    pub task_id: String,
    /// Per-entry outcome code.
    pub result: i32,
}
