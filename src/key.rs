//! Key material decoding.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;

use crate::Error;

/// Prefix marking a base64 encoded key string.
pub const BASE64_PREFIX: &str = "base64:";

/// Decode key material from its external string representation.
///
/// Keys prefixed with `base64:` are decoded as standard base64; anything
/// else is treated as hex. Only decoding happens here - length bounds are
/// enforced by [`crate::UrlSigner::new`].
pub fn parse_key(key: &str) -> crate::Result<Vec<u8>> {
    if key.is_empty() {
        return Err(Error::key_invalid("key must not be empty"));
    }

    if let Some(raw) = key.strip_prefix(BASE64_PREFIX) {
        return BASE64_STANDARD
            .decode(raw)
            .map_err(|e| Error::key_invalid("key is not valid base64").with_source(e));
    }

    hex::decode(key).map_err(|e| Error::key_invalid("key is not valid hex").with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_hex_key() {
        let key = parse_key("00ff10").expect("hex key must parse");
        assert_eq!(key, vec![0x00, 0xff, 0x10]);
    }

    #[test]
    fn test_parse_base64_key() {
        let encoded = format!("base64:{}", BASE64_STANDARD.encode([0x0b; 32]));

        let key = parse_key(&encoded).expect("base64 key must parse");
        assert_eq!(key, vec![0x0b; 32]);
    }

    #[test]
    fn test_parse_rejects_empty_key() {
        let err = parse_key("").expect_err("empty key must be rejected");
        assert_eq!(err.kind(), ErrorKind::KeyInvalid);
    }

    #[test]
    fn test_parse_rejects_bad_hex() {
        let err = parse_key("zz").expect_err("non-hex key must be rejected");
        assert_eq!(err.kind(), ErrorKind::KeyInvalid);
    }

    #[test]
    fn test_parse_rejects_bad_base64() {
        let err = parse_key("base64:!!!").expect_err("non-base64 key must be rejected");
        assert_eq!(err.kind(), ErrorKind::KeyInvalid);
    }
}
