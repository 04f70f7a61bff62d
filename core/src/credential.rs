use std::fmt::{Debug, Formatter};

use crate::utils::Redact;

/// Credential for the moderation API.
///
/// Immutable after construction; the secret key is never transmitted, it
/// only seeds the parameter signature.
#[derive(Clone)]
pub struct Credential {
    /// Product secret id, identifies the product.
    pub secret_id: String,
    /// Product secret key, seeds the request signature.
    pub secret_key: String,
    /// Business id assigned per product line. Endpoints that are not bound
    /// to a business do not send it.
    pub business_id: Option<String>,
}

impl Credential {
    /// Create a credential for business-bound endpoints.
    pub fn new(
        secret_id: impl Into<String>,
        secret_key: impl Into<String>,
        business_id: impl Into<String>,
    ) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            business_id: Some(business_id.into()),
        }
    }

    /// Create a credential without a business id.
    pub fn without_business_id(
        secret_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            business_id: None,
        }
    }

    /// Check if the credential is usable at all.
    pub fn is_valid(&self) -> bool {
        !self.secret_id.is_empty() && !self.secret_key.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("secret_id", &Redact::from(&self.secret_id))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("business_id", &self.business_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let cred = Credential::new("id-is-long-enough", "key-is-long-enough", "bid");
        let out = format!("{cred:?}");
        assert!(!out.contains("id-is-long-enough"));
        assert!(!out.contains("key-is-long-enough"));
        assert!(out.contains("bid"));
    }

    #[test]
    fn test_validity() {
        assert!(Credential::without_business_id("id", "key").is_valid());
        assert!(!Credential::without_business_id("", "key").is_valid());
        assert!(!Credential::without_business_id("id", "").is_valid());
    }
}
