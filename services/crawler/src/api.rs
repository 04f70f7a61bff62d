use yidun_core::{Client, Context, Credential, Params, Result, SignatureMethod};

use crate::constants::CRAWLER_CALLBACK;
use crate::types::CrawlerCallbackResponse;

/// Client for the site-check (crawler) endpoints.
#[derive(Debug, Clone)]
pub struct CrawlerClient {
    client: Client,
}

impl CrawlerClient {
    /// Create a crawler client. These endpoints take no business id.
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

    /// Poll finished crawl verdicts (v3.0). An empty batch means nothing is
    /// pending.
    pub async fn callback(&self) -> Result<CrawlerCallbackResponse> {
        self.client.call(&CRAWLER_CALLBACK, Params::new()).await
    }
}
