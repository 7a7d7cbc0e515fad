//! Wire contract constants.

/// Query parameter carrying the expiry instant, RFC3339 with nanosecond
/// precision.
pub const EXPIRES: &str = "expires";

/// Query parameter carrying the signature tag, URL-safe base64 without
/// padding.
pub const SIGNATURE: &str = "signature";

/// Minimum accepted key length in bytes.
pub const KEY_MIN_LEN: usize = 32;

/// Maximum accepted key length in bytes.
pub const KEY_MAX_LEN: usize = 64;
