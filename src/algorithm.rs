use std::fmt;
use std::str::FromStr;

use crate::hash;
use crate::Error;

/// Keyed-hash primitive used to compute URL signatures.
///
/// The names accepted by [`FromStr`] are the ones a configuration file
/// carries: `sha256`, `sha512/256`, `sha3-256`, `sha3-512` and `blake2b`.
/// Parsing the name eagerly at the configuration boundary means an
/// unsupported primitive can never reach a signer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algorithm {
    /// HMAC over SHA-256.
    Sha256,
    /// HMAC over SHA-512/256.
    Sha512_256,
    /// HMAC over SHA3-256.
    Sha3_256,
    /// HMAC over SHA3-512.
    Sha3_512,
    /// HMAC over BLAKE2b with 256-bit output.
    Blake2b256,
}

impl Algorithm {
    /// The configuration name of this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512_256 => "sha512/256",
            Algorithm::Sha3_256 => "sha3-256",
            Algorithm::Sha3_512 => "sha3-512",
            Algorithm::Blake2b256 => "blake2b",
        }
    }

    /// Compute the MAC tag over `content` under `key`.
    ///
    /// Every call builds a fresh MAC context, so concurrent callers never
    /// share state.
    pub(crate) fn mac(&self, key: &[u8], content: &[u8]) -> Vec<u8> {
        match self {
            Algorithm::Sha256 => hash::hmac_sha256(key, content),
            Algorithm::Sha512_256 => hash::hmac_sha512_256(key, content),
            Algorithm::Sha3_256 => hash::hmac_sha3_256(key, content),
            Algorithm::Sha3_512 => hash::hmac_sha3_512(key, content),
            Algorithm::Blake2b256 => hash::hmac_blake2b_256(key, content),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(Algorithm::Sha256),
            "sha512/256" => Ok(Algorithm::Sha512_256),
            "sha3-256" => Ok(Algorithm::Sha3_256),
            "sha3-512" => Ok(Algorithm::Sha3_512),
            "blake2b" => Ok(Algorithm::Blake2b256),
            _ => Err(Error::algorithm_invalid(format!(
                "unsupported algorithm: {s}"
            ))),
        }
    }
}
