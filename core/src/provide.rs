use crate::{Context, Credential, Result};
use std::fmt::Debug;

/// Environment variable holding the secret id.
pub const YIDUN_SECRET_ID: &str = "YIDUN_SECRET_ID";
/// Environment variable holding the secret key.
pub const YIDUN_SECRET_KEY: &str = "YIDUN_SECRET_KEY";
/// Environment variable holding the business id.
pub const YIDUN_BUSINESS_ID: &str = "YIDUN_BUSINESS_ID";

/// ProvideCredential loads a [`Credential`] from somewhere: static
/// configuration, the environment, or whatever a caller plugs in.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + 'static {
    /// Load the credential, returning `None` when this source has nothing.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>>;
}

/// A provider that always returns the same credential.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Wrap a fixed credential.
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }
}

#[async_trait::async_trait]
impl ProvideCredential for StaticCredentialProvider {
    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

/// Loads the credential from `YIDUN_SECRET_ID`, `YIDUN_SECRET_KEY` and
/// (optionally) `YIDUN_BUSINESS_ID`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentialProvider;

#[async_trait::async_trait]
impl ProvideCredential for EnvCredentialProvider {
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>> {
        let (Some(secret_id), Some(secret_key)) =
            (ctx.env_var(YIDUN_SECRET_ID), ctx.env_var(YIDUN_SECRET_KEY))
        else {
            return Ok(None);
        };

        Ok(Some(Credential {
            secret_id,
            secret_key,
            business_id: ctx.env_var(YIDUN_BUSINESS_ID),
        }))
    }
}
