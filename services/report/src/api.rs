use log::debug;
use yidun_core::{Client, Context, Credential, Params, Result, SignatureMethod};

use crate::constants::{REPORT_QUERY, REPORT_SUBMIT};
use crate::types::{ReportQueryResponse, ReportSubmitRequest, ReportSubmitResponse};

/// Client for the complaint/report endpoints.
#[derive(Debug, Clone)]
pub struct ReportClient {
    client: Client,
}

impl ReportClient {
    /// Create a report client. Submitting takes no business id, but querying
    /// does, so the credential should carry one when queries are used.
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

    /// Submit a report for async moderation (v1). Returns a task receipt.
    pub async fn submit(&self, request: ReportSubmitRequest) -> Result<ReportSubmitResponse> {
        debug!(
            "submitting report against {} with {} items",
            request.reported_id,
            request.content.len()
        );
        self.client
            .call(&REPORT_SUBMIT, request.into_params()?)
            .await
    }

    /// Query verdicts for submitted reports (v1).
    pub async fn query(&self, task_ids: &[&str]) -> Result<ReportQueryResponse> {
        debug!("querying {} report tasks", task_ids.len());
        let mut params = Params::new();
        params.insert_json("taskIds", &task_ids)?;
        self.client.call(&REPORT_QUERY, params).await
    }
}
