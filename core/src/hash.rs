//! Hash related utils.

use md5::Md5;
use sm3::Sm3;

use md5::Digest;

/// Hex encoded MD5 hash.
pub fn md5_hex(content: &[u8]) -> String {
    hex::encode(Md5::digest(content))
}

/// Hex encoded SM3 hash (GB/T 32905-2016).
pub fn sm3_hex(content: &[u8]) -> String {
    hex::encode(Sm3::digest(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hex() {
        // RFC 1321 test vector.
        assert_eq!(md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_sm3_hex() {
        // GB/T 32905-2016 appendix A test vector.
        assert_eq!(
            sm3_hex(b"abc"),
            "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0"
        );
    }
}
