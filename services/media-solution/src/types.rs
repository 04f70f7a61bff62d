use serde::Deserialize;
use yidun_core::types::Suggestion;

/// Envelope of the mixed-media callback poll.
#[derive(Debug, Deserialize)]
pub struct MediaCallbackResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Finished verdicts; empty when nothing is pending.
    #[serde(default)]
    pub result: Vec<MediaCallbackResult>,
}

/// One finished mixed-media verdict.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaCallbackResult {
    /// Server-assigned task id.
    pub task_id: String,
    /// Caller-chosen identifier, echoed back.
    pub data_id: Option<String>,
    /// Opaque callback value, echoed back.
    pub callback: Option<String>,
    /// Check progress status.
    pub check_status: Option<i32>,
    /// Verdict code for the whole submission.
    pub result: i32,
    /// Per-content-type evidence.
    pub evidences: Option<MediaEvidences>,
}

/// Evidence grouped by content type. Only the types present in the original
/// submission are set.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MediaEvidences {
    /// Text fragments.
    pub texts: Option<Vec<MediaTextEvidence>>,
    /// Images.
    pub images: Option<Vec<MediaImageEvidence>>,
    /// Standalone audio.
    pub audios: Option<Vec<MediaAudioEvidence>>,
    /// Video frames.
    pub videos: Option<Vec<MediaVideoEvidence>>,
    /// Combined audio-video.
    pub audiovideos: Option<Vec<MediaAvEvidence>>,
    /// Documents.
    pub files: Option<Vec<MediaFileEvidence>>,
}

/// Verdict for one text fragment.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaTextEvidence {
    /// Identifier of the fragment inside the submission.
    pub data_id: Option<String>,
    /// Machine verdict.
    pub action: Suggestion,
}

/// Verdict for one image.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaImageEvidence {
    /// Identifier of the image inside the submission.
    pub data_id: Option<String>,
    /// Detection status.
    pub status: Option<i32>,
    /// Machine verdict.
    pub action: Suggestion,
}

/// Verdict for one audio entry.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaAudioEvidence {
    /// Identifier of the audio inside the submission.
    pub data_id: Option<String>,
    /// Transcription status.
    pub asr_status: Option<i32>,
    /// Machine verdict.
    pub action: Suggestion,
}

/// Verdict for one video entry.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaVideoEvidence {
    /// Identifier of the video inside the submission.
    pub data_id: Option<String>,
    /// Detection status.
    pub status: Option<i32>,
    /// Highest violation level across frames.
    pub level: Option<i32>,
}

/// Verdict for one combined audio-video entry.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaAvEvidence {
    /// Identifier of the entry inside the submission.
    pub data_id: Option<String>,
    /// Verdict code.
    pub result: Option<i32>,
}

/// Verdict for one document.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaFileEvidence {
    /// Identifier of the document inside the submission.
    pub data_id: Option<String>,
    /// Verdict code.
    pub result: Option<i32>,
}
