use log::debug;
use yidun_core::{Client, Context, Credential, Result, SignatureMethod};

use crate::constants::{TEXT_BATCH_CHECK, TEXT_CHECK, TEXT_SUBMIT};
use crate::types::{
    batch_params, TextBatchCheckResponse, TextCheckRequest, TextCheckResponse, TextItem,
    TextSubmitResponse,
};

/// Client for the text moderation endpoints.
#[derive(Debug, Clone)]
pub struct TextClient {
    client: Client,
}

impl TextClient {
    /// Create a text client. The credential must carry a business id.
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

    /// Online check of a single text (v3.1). Returns the verdict inline.
    pub async fn check(&self, request: TextCheckRequest) -> Result<TextCheckResponse> {
        debug!("checking text dataId={}", request.data_id);
        self.client.call(&TEXT_CHECK, request.into_params()).await
    }

    /// Batch online check (v5.2). `check_labels` optionally narrows the
    /// categories to screen, e.g. `"200,500"`.
    pub async fn batch_check(
        &self,
        texts: &[TextItem],
        check_labels: Option<&str>,
    ) -> Result<TextBatchCheckResponse> {
        debug!("batch checking {} texts", texts.len());
        self.client
            .call(&TEXT_BATCH_CHECK, batch_params(texts, check_labels)?)
            .await
    }

    /// Async submit (v1). Returns task receipts; verdicts arrive via
    /// callback or polling.
    pub async fn submit(&self, texts: &[TextItem]) -> Result<TextSubmitResponse> {
        debug!("submitting {} texts", texts.len());
        self.client
            .call(&TEXT_SUBMIT, batch_params(texts, None)?)
            .await
    }
}
