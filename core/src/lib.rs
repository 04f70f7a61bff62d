//! Core components for calling the Yidun content moderation API.
//!
//! This crate provides the shared machinery the per-service crates build on:
//!
//! - **Context**: a container holding the HTTP transport and environment
//!   implementations
//! - **Credential**: the immutable secret id / secret key / business id
//!   triple
//! - **Signing**: the sorted-parameter keyed hash (MD5, or SM3 via
//!   `signatureMethod=SM3`) every endpoint requires
//! - **Client**: one POST per call, form-encoded body, JSON envelope decode
//!
//! ## Example
//!
//! ```no_run
//! use yidun_core::{Client, Context, Credential, Endpoint, Params};
//!
//! # async fn example() -> yidun_core::Result<()> {
//! // Configure a context with an HTTP transport, e.g.
//! // yidun_http_send_reqwest::ReqwestHttpSend.
//! let ctx = Context::new();
//! let client = Client::new(ctx, Credential::new("secret-id", "secret-key", "business-id"));
//!
//! const TEXT_CHECK: Endpoint = Endpoint::new("http://as.dun.163.com/v3/text/check", "v3.1", 1);
//!
//! let mut params = Params::new();
//! params.insert("dataId", "data-001");
//! params.insert("content", "content to moderate");
//!
//! let resp: serde_json::Value = client.call(&TEXT_CHECK, params).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod types;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod credential;
pub use credential::Credential;

mod provide;
pub use provide::{
    EnvCredentialProvider, ProvideCredential, StaticCredentialProvider, YIDUN_BUSINESS_ID,
    YIDUN_SECRET_ID, YIDUN_SECRET_KEY,
};

mod params;
pub use params::{Endpoint, Params};

mod sign;
pub use sign::{gen_signature, SignatureMethod, SIGNATURE_METHOD_KEY, SIGNATURE_METHOD_SM3};

mod client;
pub use client::{Client, RequestTimeout};
