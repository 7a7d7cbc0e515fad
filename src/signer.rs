use std::fmt;
use std::time::Duration;

use chrono::TimeDelta;
use log::debug;

use crate::constants::{EXPIRES, KEY_MAX_LEN, KEY_MIN_LEN, SIGNATURE};
use crate::hash;
use crate::time::{self, Clock, DateTime};
use crate::url::SignableUrl;
use crate::Algorithm;
use crate::Error;

/// Signer that produces and verifies HMAC signed, time limited URLs.
///
/// The whole URL string - scheme, authority, path and the canonically
/// ordered query - is covered by the signature, so tampering with any part
/// of it invalidates the URL, not just the query.
///
/// A signer owns its key material for its lifetime and holds no per call
/// state: every `sign` and `verify` builds a fresh MAC context, so one
/// signer is safe to share across threads.
#[derive(Clone)]
pub struct UrlSigner {
    algorithm: Algorithm,
    key: Vec<u8>,
    clock: Clock,
}

impl UrlSigner {
    /// Create a new signer from raw key material.
    ///
    /// # Panics
    ///
    /// Panics if the key is shorter than 32 or longer than 64 bytes. A key
    /// outside those bounds is a configuration bug, not untrusted input.
    pub fn new(algorithm: Algorithm, key: &[u8]) -> Self {
        assert!(
            (KEY_MIN_LEN..=KEY_MAX_LEN).contains(&key.len()),
            "key must be between {KEY_MIN_LEN} and {KEY_MAX_LEN} bytes, got {}",
            key.len()
        );

        Self {
            algorithm,
            key: key.to_vec(),
            clock: time::system_clock(),
        }
    }

    /// Specify the clock used for expiry computation and checking.
    ///
    /// Defaults to the system clock in UTC. Inject a fixed clock for
    /// deterministic tests.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Sign a URL, optionally limiting its validity.
    ///
    /// With `expires_in` set, an `expires` query parameter holding
    /// `now + expires_in` as RFC3339 is signed along with the rest of the
    /// URL; without it the URL never expires. The query is re-encoded in
    /// canonical (sorted) order before signing, so later reordering of
    /// parameters does not break verification. The signature itself is
    /// appended as the last query parameter.
    pub fn sign(&self, raw_url: &str, expires_in: Option<Duration>) -> crate::Result<String> {
        let mut url = SignableUrl::parse(raw_url)?;

        if let Some(expires_in) = expires_in {
            let expiry = expiry_instant((self.clock)(), expires_in)?;
            url.query_set(EXPIRES, time::format_rfc3339(expiry));
        }

        url.canonicalize_query();
        let message = url.url_string();
        debug!("calculated message to sign: {message}");

        let tag = self.algorithm.mac(&self.key, message.as_bytes());
        url.query_push(SIGNATURE, hash::base64_url_encode(&tag));

        Ok(url.url_string())
    }

    /// Verify a signed URL.
    ///
    /// Returns `Ok(())` for a URL whose signature matches and whose expiry,
    /// if any, has not passed. The error kind distinguishes a missing
    /// signature, an invalid or tampered signature (including malformed
    /// base64) and an expired URL.
    ///
    /// # Panics
    ///
    /// Panics if the `expires` parameter fails to parse on a URL whose
    /// signature already validated: the signer only ever emits well formed
    /// expiry instants, so that state indicates internal inconsistency
    /// rather than attacker input.
    pub fn verify(&self, raw_url: &str) -> crate::Result<()> {
        let mut url = SignableUrl::parse(raw_url)?;
        let tag = extract_signature(&mut url)?;

        url.canonicalize_query();
        let message = url.url_string();
        debug!("calculated message to verify: {message}");

        let computed = self.algorithm.mac(&self.key, message.as_bytes());
        if !hash::mac_equal(&computed, &tag) {
            return Err(Error::signature_invalid("signature does not match url"));
        }

        self.verify_expiry(&url)
    }

    fn verify_expiry(&self, url: &SignableUrl) -> crate::Result<()> {
        let expires = match url.query_get(EXPIRES) {
            Some(v) if !v.is_empty() => v,
            _ => return Ok(()),
        };

        // The expiry was covered by the signature that just validated, so an
        // unparsable value is internal inconsistency, not attacker input.
        let expiry = time::parse_rfc3339(expires).unwrap_or_else(|_| {
            panic!("signed expiry timestamp is not valid rfc3339: {expires}")
        });

        // Boundary is inclusive toward validity: a URL verified exactly at
        // its expiry instant is still valid.
        if expiry < (self.clock)() {
            return Err(Error::url_expired(format!("url expired at {expires}")));
        }

        Ok(())
    }
}

impl fmt::Debug for UrlSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlSigner")
            .field("algorithm", &self.algorithm)
            .field("key", &format_args!("{}-byte key", self.key.len()))
            .finish_non_exhaustive()
    }
}

/// Pull the signature parameter out of the URL, leaving behind exactly the
/// message that was originally signed.
fn extract_signature(url: &mut SignableUrl) -> crate::Result<Vec<u8>> {
    let signature = url.query_get(SIGNATURE).unwrap_or_default();
    if signature.is_empty() {
        return Err(Error::signature_missing("url carries no signature"));
    }

    // A signature that fails to decode is indistinguishable from a forged
    // one at this boundary.
    let tag = hash::base64_url_decode(signature)
        .map_err(|e| Error::signature_invalid("signature is not valid base64").with_source(e))?;

    url.query_remove(SIGNATURE);

    Ok(tag)
}

fn expiry_instant(now: DateTime, expires_in: Duration) -> crate::Result<DateTime> {
    let delta = TimeDelta::from_std(expires_in)
        .map_err(|e| Error::unexpected("expiry duration out of range").with_source(e))?;

    now.checked_add_signed(delta)
        .ok_or_else(|| Error::unexpected("expiry instant overflows the representable time range"))
}
