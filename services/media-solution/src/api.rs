use yidun_core::{Client, Context, Credential, Params, Result, SignatureMethod};

use crate::constants::MEDIA_CALLBACK;
use crate::types::MediaCallbackResponse;

/// Client for the mixed-media moderation endpoints.
#[derive(Debug, Clone)]
pub struct MediaSolutionClient {
    client: Client,
}

impl MediaSolutionClient {
    /// Create a mixed-media client. These endpoints take no business id.
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

    /// Poll finished mixed-media verdicts (v1). An empty batch means nothing
    /// is pending.
    pub async fn callback(&self) -> Result<MediaCallbackResponse> {
        self.client.call(&MEDIA_CALLBACK, Params::new()).await
    }
}
