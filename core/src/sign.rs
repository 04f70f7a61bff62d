//! The keyed parameter signature every endpoint requires.

use crate::hash::{md5_hex, sm3_hex};
use crate::Params;

/// Value of the `signatureMethod` parameter selecting the SM3 hash.
pub const SIGNATURE_METHOD_SM3: &str = "SM3";

/// Parameter name carrying the hash selection.
pub const SIGNATURE_METHOD_KEY: &str = "signatureMethod";

/// Hash algorithm used to sign request parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureMethod {
    /// MD5 hex digest. The server default.
    #[default]
    Md5,
    /// SM3 (GB/T 32905-2016) hex digest, selected by sending
    /// `signatureMethod=SM3`.
    Sm3,
}

/// Compute the signature over a full outbound parameter map.
///
/// Concatenates `key + value` in ascending key order, appends the secret
/// key, and hashes the UTF-8 bytes. The map must not contain the
/// `signature` field itself; if it carries `signatureMethod=SM3` the SM3
/// digest is produced, otherwise MD5.
///
/// The server recomputes this digest from the form fields it received, so
/// the strings hashed here must be the very strings that get form-encoded.
pub fn gen_signature(params: &Params, secret_key: &str) -> String {
    let mut buf = String::with_capacity(
        params.iter().map(|(k, v)| k.len() + v.len()).sum::<usize>() + secret_key.len(),
    );
    for (k, v) in params.iter() {
        buf.push_str(k);
        buf.push_str(v);
    }
    buf.push_str(secret_key);

    if params.get(SIGNATURE_METHOD_KEY) == Some(SIGNATURE_METHOD_SM3) {
        sm3_hex(buf.as_bytes())
    } else {
        md5_hex(buf.as_bytes())
    }
}
