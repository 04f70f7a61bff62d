use std::time::Duration;

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use log::debug;
use rand::Rng;
use serde::de::DeserializeOwned;

use crate::sign::{gen_signature, SignatureMethod, SIGNATURE_METHOD_KEY, SIGNATURE_METHOD_SM3};
use crate::time::now_millis;
use crate::{Context, Credential, Endpoint, Error, Params, Result};

/// Per-request timeout, carried through [`http::Request`] extensions so the
/// transport can enforce it without the client depending on a runtime.
#[derive(Debug, Clone, Copy)]
pub struct RequestTimeout(pub Duration);

/// The generic moderation API client.
///
/// Holds the transport context, the credential, and the signature method.
/// Service crates wrap it with one typed method per endpoint; this type owns
/// the part every endpoint shares: inject common fields, sign, form-encode,
/// send once, decode JSON.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    credential: Credential,
    signature_method: SignatureMethod,
}

impl Client {
    /// Create a client from a context and a credential.
    pub fn new(ctx: Context, credential: Credential) -> Self {
        Self {
            ctx,
            credential,
            signature_method: SignatureMethod::default(),
        }
    }

    /// Sign requests with SM3 instead of the default MD5.
    pub fn with_signature_method(mut self, method: SignatureMethod) -> Self {
        self.signature_method = method;
        self
    }

    /// The context this client sends through.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Issue one call: a single POST, no retry, no backoff.
    ///
    /// Transport and decode failures are `Err`; an API-level `code != 200`
    /// is data and comes back inside `T` for the caller to branch on.
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        mut params: Params,
    ) -> Result<T> {
        let body = self.signed_form_body(endpoint, &mut params)?;
        debug!(
            "calling {} version={} params={}",
            endpoint.url,
            endpoint.version,
            params.len()
        );

        let req = http::Request::post(endpoint.url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .extension(RequestTimeout(endpoint.timeout))
            .body(Bytes::from(body))?;

        let resp = self.ctx.http_send(req).await?;
        let (parts, body) = resp.into_parts();
        debug!("{} responded with status {}", endpoint.url, parts.status);

        if !parts.status.is_success() {
            return Err(Error::transport_failed(format!(
                "{} returned http status {}",
                endpoint.url, parts.status
            )));
        }

        serde_json::from_slice(&body).map_err(|e| {
            Error::decode_failed(format!(
                "{} returned an undecodable body: {e}",
                endpoint.url
            ))
            .with_source(e)
        })
    }

    /// Inject the common fields, sign, and render the form body.
    ///
    /// Split out of [`Client::call`] so tests can inspect exactly what would
    /// go on the wire.
    pub fn signed_form_body(&self, endpoint: &Endpoint, params: &mut Params) -> Result<String> {
        if !self.credential.is_valid() {
            return Err(Error::credential_invalid(
                "secret id and secret key must be non-empty",
            ));
        }

        params.insert("secretId", self.credential.secret_id.clone());
        if endpoint.requires_business_id {
            let business_id = self.credential.business_id.as_deref().ok_or_else(|| {
                Error::config_invalid(format!(
                    "{} requires a business id but the credential has none",
                    endpoint.url
                ))
            })?;
            params.insert("businessId", business_id);
        }
        params.insert("version", endpoint.version);
        params.insert("timestamp", now_millis().to_string());
        params.insert(
            "nonce",
            rand::thread_rng().gen_range(0..100_000_000u32).to_string(),
        );
        if self.signature_method == SignatureMethod::Sm3 {
            params.insert(SIGNATURE_METHOD_KEY, SIGNATURE_METHOD_SM3);
        }
        let signature = gen_signature(params, &self.credential.secret_key);
        params.insert("signature", signature);

        // The strings signed above are the strings encoded here; the pairs
        // must not be re-rendered between the two steps.
        Ok(form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter())
            .finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Endpoint;

    const EP: Endpoint = Endpoint::new("http://example.com/v3/text/check", "v3.1", 1);
    const EP_NO_BID: Endpoint =
        Endpoint::without_business_id("http://example.com/v1/report/submit", "v1", 1);

    fn client() -> Client {
        Client::new(
            Context::new(),
            Credential::new("my-secret-id", "my-secret-key", "my-business-id"),
        )
    }

    fn decode(body: &str) -> Vec<(String, String)> {
        form_urlencoded::parse(body.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_common_fields_injected() {
        let mut params = Params::new();
        params.insert("content", "hi");
        let body = client().signed_form_body(&EP, &mut params).unwrap();
        let pairs = decode(&body);

        for key in [
            "secretId",
            "businessId",
            "version",
            "timestamp",
            "nonce",
            "signature",
            "content",
        ] {
            assert!(
                pairs.iter().any(|(k, _)| k == key),
                "missing field {key} in {body}"
            );
        }
        assert_eq!(params.get("version"), Some("v3.1"));
    }

    #[test]
    fn test_business_id_omitted_when_endpoint_does_not_take_one() {
        let mut params = Params::new();
        let body = client().signed_form_body(&EP_NO_BID, &mut params).unwrap();
        assert!(!decode(&body).iter().any(|(k, _)| k == "businessId"));
    }

    #[test]
    fn test_missing_business_id_is_config_error() {
        let c = Client::new(
            Context::new(),
            Credential::without_business_id("id", "key"),
        );
        let err = c.signed_form_body(&EP, &mut Params::new()).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_empty_credential_rejected() {
        let c = Client::new(Context::new(), Credential::without_business_id("", ""));
        let err = c.signed_form_body(&EP_NO_BID, &mut Params::new()).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::CredentialInvalid);
    }

    #[test]
    fn test_signature_matches_transmitted_fields() {
        // Recompute the signature from the decoded form body; it must match
        // the transmitted one. This is the contract the server checks.
        let mut params = Params::new();
        params.insert_json("taskIds", &vec!["t1", "t2"]).unwrap();
        let body = client().signed_form_body(&EP, &mut params).unwrap();

        let received: Params = decode(&body)
            .into_iter()
            .filter(|(k, _)| k != "signature")
            .collect();
        let sent_signature = decode(&body)
            .into_iter()
            .find(|(k, _)| k == "signature")
            .unwrap()
            .1;

        assert_eq!(gen_signature(&received, "my-secret-key"), sent_signature);
    }

    #[test]
    fn test_sm3_method_injects_marker_and_long_signature() {
        let c = client().with_signature_method(SignatureMethod::Sm3);
        let mut params = Params::new();
        let body = c.signed_form_body(&EP, &mut params).unwrap();
        let pairs = decode(&body);

        assert!(pairs
            .iter()
            .any(|(k, v)| k == "signatureMethod" && v == "SM3"));
        let sig = &pairs.iter().find(|(k, _)| k == "signature").unwrap().1;
        assert_eq!(sig.len(), 64);
    }
}
