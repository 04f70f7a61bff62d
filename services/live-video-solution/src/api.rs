use log::debug;
use yidun_core::{Client, Context, Credential, Params, Result, SignatureMethod};

use crate::constants::{AUDIO_TASK_QUERY, LIVE_SOLUTION_CALLBACK, MONITOR_QUERY};
use crate::types::{
    AudioTaskQueryRequest, AudioTaskQueryResponse, LiveSolutionCallbackResponse,
    MonitorQueryResponse,
};

/// Client for the live audio-video moderation endpoints.
#[derive(Debug, Clone)]
pub struct LiveVideoSolutionClient {
    client: Client,
}

impl LiveVideoSolutionClient {
    /// Create a live audio-video client. These endpoints take no business id.
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

    /// Poll finished live records (v2.1), machine and human-review alike. An
    /// empty batch means nothing is pending.
    pub async fn callback(&self) -> Result<LiveSolutionCallbackResponse> {
        self.client
            .call(&LIVE_SOLUTION_CALLBACK, Params::new())
            .await
    }

    /// Fetch the human-review action history of one live task (v1.0).
    pub async fn query_monitor(&self, task_id: &str) -> Result<MonitorQueryResponse> {
        debug!("querying review history for task {task_id}");
        let mut params = Params::new();
        params.insert("taskId", task_id);
        self.client.call(&MONITOR_QUERY, params).await
    }

    /// Fetch moderated audio slices of one live task within a time window
    /// (v1.0).
    pub async fn query_audio(
        &self,
        request: AudioTaskQueryRequest,
    ) -> Result<AudioTaskQueryResponse> {
        debug!("querying audio slices for task {}", request.task_id);
        self.client
            .call(&AUDIO_TASK_QUERY, request.into_params())
            .await
    }
}
