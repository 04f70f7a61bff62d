use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use yidun_core::{Context, Env, HttpSend};
use yidun_http_send_reqwest::ReqwestHttpSend;

/// Batteries-included context: reqwest as the transport, the OS environment
/// for credential loading.
#[derive(Debug, Default, Clone)]
pub struct DefaultContext {
    http: ReqwestHttpSend,
}

impl DefaultContext {
    /// Create a default context with a fresh reqwest client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a default context around an existing reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: ReqwestHttpSend::new(client),
        }
    }
}

#[async_trait]
impl HttpSend for DefaultContext {
    async fn http_send(
        &self,
        req: http::Request<Bytes>,
    ) -> yidun_core::Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }
}

impl Env for DefaultContext {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }

    fn vars(&self) -> HashMap<String, String> {
        std::env::vars().collect()
    }
}

impl From<DefaultContext> for Context {
    fn from(ctx: DefaultContext) -> Self {
        Context::new().with_http_send(ctx.clone()).with_env(ctx)
    }
}
