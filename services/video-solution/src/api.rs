use log::debug;
use yidun_core::{Client, Context, Credential, Params, Result, SignatureMethod};

use crate::constants::{SOLUTION_CALLBACK, SOLUTION_QUERY, SOLUTION_SUBMIT};
use crate::types::{
    SolutionCallbackResponse, SolutionQueryResponse, SolutionSubmitRequest, SolutionSubmitResponse,
};

/// Client for the on-demand audio-video moderation endpoints.
#[derive(Debug, Clone)]
pub struct VideoSolutionClient {
    client: Client,
}

impl VideoSolutionClient {
    /// Create an audio-video client. These endpoints take no business id.
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

    /// Submit an audio-video for async moderation (v1.1). Returns a task
    /// receipt.
    pub async fn submit(&self, request: SolutionSubmitRequest) -> Result<SolutionSubmitResponse> {
        debug!("submitting audio-video {}", request.url);
        self.client
            .call(&SOLUTION_SUBMIT, request.into_params()?)
            .await
    }

    /// Query verdicts for submitted tasks (v1).
    pub async fn query(&self, task_ids: &[&str]) -> Result<SolutionQueryResponse> {
        debug!("querying {} audio-video tasks", task_ids.len());
        let mut params = Params::new();
        params.insert_json("taskIds", &task_ids)?;
        self.client.call(&SOLUTION_QUERY, params).await
    }

    /// Poll finished verdicts (v1.1). An empty batch means nothing is
    /// pending.
    pub async fn callback(&self) -> Result<SolutionCallbackResponse> {
        self.client.call(&SOLUTION_CALLBACK, Params::new()).await
    }
}
