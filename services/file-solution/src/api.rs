use log::debug;
use yidun_core::{Client, Context, Credential, Params, Result, SignatureMethod};

use crate::constants::FILE_QUERY;
use crate::types::FileQueryResponse;

/// Client for the document-check endpoints.
#[derive(Debug, Clone)]
pub struct FileSolutionClient {
    client: Client,
}

impl FileSolutionClient {
    /// Create a document-check client. These endpoints take no business id.
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

    /// Query verdicts for submitted document tasks (v1.1).
    pub async fn query(&self, task_ids: &[&str]) -> Result<FileQueryResponse> {
        debug!("querying {} document tasks", task_ids.len());
        let mut params = Params::new();
        params.insert_json("taskIds", &task_ids)?;
        self.client.call(&FILE_QUERY, params).await
    }
}
