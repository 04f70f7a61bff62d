use log::debug;
use yidun_core::{Client, Context, Credential, Params, Result, SignatureMethod};

use crate::constants::{AUDIO_CHECK, AUDIO_QUERY, LIVE_AUDIO_CALLBACK, LIVE_AUDIO_FEEDBACK};
use crate::types::{
    AudioCheckRequest, AudioCheckResponse, AudioQueryResponse, FeedbackItem, FeedbackResponse,
    LiveAudioCallbackResponse,
};

/// Client for the audio moderation endpoints.
#[derive(Debug, Clone)]
pub struct AudioClient {
    client: Client,
}

impl AudioClient {
    /// Create an audio client. The credential must carry a business id.
    pub fn new(ctx: Context, credential: Credential) -> Self {
        Self {
            client: Client::new(ctx, credential),
        }
    }

    /// Sign requests with SM3 instead of the default MD5.
    pub fn with_signature_method(mut self, method: SignatureMethod) -> Self {
        self.client = self.client.with_signature_method(method);
        self
    }

    /// Online check (v2.1). Antispam, language, asr, and voice blocks come
    /// back inline once detection finishes.
    pub async fn check(&self, request: AudioCheckRequest) -> Result<AudioCheckResponse> {
        debug!("checking audio {}", request.url);
        self.client.call(&AUDIO_CHECK, request.into_params()).await
    }

    /// Query offline detection results for submitted tasks (v1).
    pub async fn query(&self, task_ids: &[&str]) -> Result<AudioQueryResponse> {
        debug!("querying {} audio tasks", task_ids.len());
        let mut params = Params::new();
        params.insert_json("taskIds", &task_ids)?;
        self.client.call(&AUDIO_QUERY, params).await
    }

    /// Poll finished live-audio verdicts (v3). An empty batch means nothing
    /// is pending.
    pub async fn live_callback(&self) -> Result<LiveAudioCallbackResponse> {
        self.client.call(&LIVE_AUDIO_CALLBACK, Params::new()).await
    }

    /// Update live stream statuses, e.g. mark a stream as finished (v1.0).
    pub async fn feedback(&self, feedbacks: &[FeedbackItem]) -> Result<FeedbackResponse> {
        debug!("sending {} audio feedbacks", feedbacks.len());
        let mut params = Params::new();
        params.insert_json("feedbacks", &feedbacks)?;
        self.client.call(&LIVE_AUDIO_FEEDBACK, params).await
    }
}
