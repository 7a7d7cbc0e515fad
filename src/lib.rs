//! Signing time-limited URLs without effort.
//!
//! This crate produces and verifies HMAC signed URLs: the URL is
//! canonicalized, signed under a shared secret, and the signature embedded
//! as a query parameter. Verification reconstructs the signed message,
//! recomputes the tag, compares it in constant time, and enforces the
//! optional expiry.
//!
//! ## Overview
//!
//! The crate is built around a few key concepts:
//!
//! - **[`UrlSigner`]**: owns the key material and a clock, exposes `sign`
//!   and `verify`
//! - **[`Algorithm`]**: the keyed-hash primitive, selected eagerly at the
//!   configuration boundary
//! - **Canonicalization**: query parameters are decoded, sorted, and
//!   re-encoded before signing, so parameter reordering by intermediate
//!   URI-processing layers never breaks verification
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//!
//! use urlsign::{Algorithm, UrlSigner};
//!
//! # fn main() -> urlsign::Result<()> {
//! let key = urlsign::parse_key(
//!     "0101010101010101010101010101010101010101010101010101010101010101",
//! )?;
//! let signer = UrlSigner::new(Algorithm::Sha256, &key);
//!
//! let signed = signer.sign(
//!     "https://example.com/download?file=report.pdf",
//!     Some(Duration::from_secs(3600)),
//! )?;
//! assert!(signer.verify(&signed).is_ok());
//! # Ok(())
//! # }
//! ```
//!
//! ## Wire contract
//!
//! Signed URLs carry two query parameters: [`EXPIRES`] (optional, RFC3339
//! with nanosecond precision) and [`SIGNATURE`] (mandatory, URL-safe base64
//! without padding). The signature covers the entire URL string including
//! scheme, host and path, not just the query.
//!
//! ## Utilities
//!
//! - [`hash`]: keyed-hash primitives and base64 helpers
//! - [`time`]: clock plumbing and RFC3339 formatting
//! - [`parse_key`]: key material decoding from hex or `base64:` strings

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;

mod algorithm;
pub use algorithm::Algorithm;
mod constants;
pub use constants::{EXPIRES, KEY_MAX_LEN, KEY_MIN_LEN, SIGNATURE};
mod error;
pub use error::{Error, ErrorKind, Result};
mod key;
pub use key::{parse_key, BASE64_PREFIX};
mod url;
pub use url::SignableUrl;
mod signer;
pub use signer::UrlSigner;
