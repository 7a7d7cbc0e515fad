// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Hash related utils.

use crate::Error;
use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use base64::Engine;
use blake2::digest::consts::U32;
use blake2::Blake2b;
use hmac::Hmac;
use hmac::Mac;
use hmac::SimpleHmac;
use sha2::Sha256;
use sha2::Sha512_256;
use sha3::Sha3_256;
use sha3::Sha3_512;
use subtle::ConstantTimeEq;

/// BLAKE2b with 256-bit output.
type Blake2b256 = Blake2b<U32>;

/// URL-safe base64 encode without padding
pub fn base64_url_encode(content: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(content)
}

/// URL-safe base64 decode without padding
pub fn base64_url_decode(content: &str) -> crate::Result<Vec<u8>> {
    BASE64_URL_SAFE_NO_PAD
        .decode(content)
        .map_err(|e| Error::unexpected("base64 decode failed").with_source(e))
}

/// HMAC with SHA256 hash.
pub fn hmac_sha256(key: &[u8], content: &[u8]) -> Vec<u8> {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    h.finalize().into_bytes().to_vec()
}

/// HMAC with SHA512/256 hash.
pub fn hmac_sha512_256(key: &[u8], content: &[u8]) -> Vec<u8> {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha512_256>::new_from_slice(key).unwrap();
    h.update(content);

    h.finalize().into_bytes().to_vec()
}

/// HMAC with SHA3-256 hash.
pub fn hmac_sha3_256(key: &[u8], content: &[u8]) -> Vec<u8> {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha3_256>::new_from_slice(key).unwrap();
    h.update(content);

    h.finalize().into_bytes().to_vec()
}

/// HMAC with SHA3-512 hash.
pub fn hmac_sha3_512(key: &[u8], content: &[u8]) -> Vec<u8> {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha3_512>::new_from_slice(key).unwrap();
    h.update(content);

    h.finalize().into_bytes().to_vec()
}

/// HMAC with BLAKE2b-256 hash.
///
/// BLAKE2 exposes no block-level API, so this goes through `SimpleHmac`.
pub fn hmac_blake2b_256(key: &[u8], content: &[u8]) -> Vec<u8> {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = SimpleHmac::<Blake2b256>::new_from_slice(key).unwrap();
    h.update(content);

    h.finalize().into_bytes().to_vec()
}

/// Constant-time equality of two MAC tags.
///
/// Execution time does not depend on where the tags first differ. Tags of
/// different lengths compare unequal.
pub fn mac_equal(lhs: &[u8], rhs: &[u8]) -> bool {
    lhs.ct_eq(rhs).into()
}
