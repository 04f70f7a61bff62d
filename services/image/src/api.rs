use log::debug;
use yidun_core::{Client, Context, Credential, Params, Result, SignatureMethod};

use crate::constants::{IMAGE_CALLBACK, IMAGE_CHECK, IMAGE_LIST_QUERY, IMAGE_SUBMIT};
use crate::types::{
    ImageCallbackResponse, ImageCheckRequest, ImageCheckResponse, ImageItem,
    ImageListQueryRequest, ImageListQueryResponse, ImageSubmitResponse,
};

/// Client for the image moderation endpoints.
#[derive(Debug, Clone)]
pub struct ImageClient {
    client: Client,
}

impl ImageClient {
    /// Create an image client. The credential must carry a business id.
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

    /// Online check (v4). Verdicts, OCR, and face results come back inline.
    pub async fn check(&self, request: ImageCheckRequest) -> Result<ImageCheckResponse> {
        debug!("checking {} images", request.images.len());
        self.client.call(&IMAGE_CHECK, request.into_params()?).await
    }

    /// Async submit (v1). Returns task receipts.
    pub async fn submit(&self, images: &[ImageItem]) -> Result<ImageSubmitResponse> {
        debug!("submitting {} images", images.len());
        let mut params = Params::new();
        params.insert_json("images", &images)?;
        self.client.call(&IMAGE_SUBMIT, params).await
    }

    /// Poll finished human-review verdicts (v4). Returns at most one batch;
    /// an empty `antispam` array means nothing is pending.
    pub async fn callback(&self) -> Result<ImageCallbackResponse> {
        self.client.call(&IMAGE_CALLBACK, Params::new()).await
    }

    /// Page through the image black/white list (v1.0).
    pub async fn list_query(
        &self,
        request: ImageListQueryRequest,
    ) -> Result<ImageListQueryResponse> {
        self.client
            .call(&IMAGE_LIST_QUERY, request.into_params())
            .await
    }
}
