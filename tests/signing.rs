use std::sync::Arc;
use std::time::Duration;

use chrono::TimeZone;
use chrono::Utc;
use pretty_assertions::assert_eq;
use rand::RngCore;
use test_case::test_case;
use urlsign::time::{Clock, DateTime};
use urlsign::{Algorithm, ErrorKind, SignableUrl, UrlSigner, EXPIRES, SIGNATURE};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_key(len: usize) -> Vec<u8> {
    let mut key = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut key);
    key
}

fn fixed_clock(at: DateTime) -> Clock {
    Arc::new(move || at)
}

fn sign_time() -> DateTime {
    Utc.with_ymd_and_hms(2025, 8, 29, 20, 0, 0).unwrap()
}

#[test_case(Algorithm::Sha256)]
#[test_case(Algorithm::Sha512_256)]
#[test_case(Algorithm::Sha3_256)]
#[test_case(Algorithm::Sha3_512)]
#[test_case(Algorithm::Blake2b256)]
fn test_sign_and_verify_round_trip(algorithm: Algorithm) {
    init();

    let signer =
        UrlSigner::new(algorithm, &random_key(32)).with_clock(fixed_clock(sign_time()));

    let signed = signer
        .sign(
            "https://example.com/path?hello=world",
            Some(Duration::from_secs(2 * 3600)),
        )
        .expect("must sign");

    signer.verify(&signed).expect("fresh signature must verify");
}

#[test_case(Algorithm::Sha256)]
#[test_case(Algorithm::Sha512_256)]
#[test_case(Algorithm::Sha3_256)]
#[test_case(Algorithm::Sha3_512)]
#[test_case(Algorithm::Blake2b256)]
fn test_tampering_invalidates_signature(algorithm: Algorithm) {
    init();

    let signer =
        UrlSigner::new(algorithm, &random_key(64)).with_clock(fixed_clock(sign_time()));

    let signed = signer
        .sign("https://example.com/path?a=1", None)
        .expect("must sign");

    let err = signer
        .verify(&signed.replace("a=1", "a=2"))
        .expect_err("tampered url must be rejected");
    assert_eq!(err.kind(), ErrorKind::SignatureInvalid);
}

#[test]
fn test_signed_url_wire_shape() {
    init();

    let signer =
        UrlSigner::new(Algorithm::Sha256, &[0u8; 32]).with_clock(fixed_clock(sign_time()));

    let signed = signer
        .sign(
            "https://example.com/path?hello=world",
            Some(Duration::from_secs(2 * 3600)),
        )
        .expect("must sign");

    let url = SignableUrl::parse(&signed).expect("signed url must stay parseable");
    assert_eq!(url.query_get("hello"), Some("world"));
    assert_eq!(url.query_get(EXPIRES), Some("2025-08-29T22:00:00Z"));

    let signature = url.query_get(SIGNATURE).expect("signature must be present");
    assert!(!signature.is_empty());
    // URL-safe base64 without padding.
    assert!(signature
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}

#[test]
fn test_config_string_round_trip() {
    init();

    // The way a deployment would wire the signer up: algorithm name and key
    // string both arrive from configuration.
    let algorithm: Algorithm = "sha3-256".parse().expect("name must parse");
    let key = urlsign::parse_key(&hex::encode(random_key(48))).expect("key must parse");

    let signer = UrlSigner::new(algorithm, &key);
    let signed = signer
        .sign("https://example.com/download?file=report.pdf", None)
        .expect("must sign");

    signer.verify(&signed).expect("must verify");
}

#[test]
fn test_verifier_shares_no_state_with_signer() {
    init();

    let key = random_key(32);
    let signer =
        UrlSigner::new(Algorithm::Sha256, &key).with_clock(fixed_clock(sign_time()));
    let verifier =
        UrlSigner::new(Algorithm::Sha256, &key).with_clock(fixed_clock(sign_time()));

    let signed = signer
        .sign(
            "https://example.com/path?hello=world",
            Some(Duration::from_secs(3600)),
        )
        .expect("must sign");

    verifier
        .verify(&signed)
        .expect("an independently constructed verifier must accept the url");
}

#[test]
fn test_concurrent_signing() {
    init();

    let signer = Arc::new(
        UrlSigner::new(Algorithm::Sha256, &[7u8; 32]).with_clock(fixed_clock(sign_time())),
    );

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let signer = Arc::clone(&signer);
            std::thread::spawn(move || {
                let url = format!("https://example.com/resource/{i}?a=1");
                let signed = signer
                    .sign(&url, Some(Duration::from_secs(60)))
                    .expect("must sign");
                signer.verify(&signed).expect("must verify");
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread must not panic");
    }
}
