use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use reqwest::{Client, Request};
use yidun_core::{Error, HttpSend, RequestTimeout};

/// [`HttpSend`] implementation backed by [`reqwest`].
///
/// Honors the per-endpoint [`RequestTimeout`] extension the core client
/// attaches, mapping it onto reqwest's per-request timeout. The endpoints
/// expect short fixed timeouts (1 to 10 seconds); no retries happen here.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(
        &self,
        req: http::Request<Bytes>,
    ) -> yidun_core::Result<http::Response<Bytes>> {
        let timeout = req.extensions().get::<RequestTimeout>().map(|t| t.0);

        let mut req = Request::try_from(req)
            .map_err(|e| Error::request_invalid(e.to_string()).with_source(e))?;
        if let Some(timeout) = timeout {
            *req.timeout_mut() = Some(timeout);
        }

        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport_failed(e.to_string()).with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport_failed(e.to_string()).with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The callback endpoints include an https URL; the client must get as
    // far as the connection attempt instead of rejecting the scheme.
    #[tokio::test]
    async fn test_https_scheme_reaches_the_transport() {
        let send = ReqwestHttpSend::default();
        let req = http::Request::post("https://127.0.0.1:1/v4/image/callback/results")
            .body(Bytes::new())
            .expect("request must build");

        let err = send.http_send(req).await.unwrap_err();

        let mut chain = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(e) = source {
            chain.push_str(&e.to_string());
            source = e.source();
        }
        assert!(
            !chain.contains("scheme is not http"),
            "https was rejected before connecting: {chain}"
        );
    }
}
