use std::time::Duration;

use criterion::criterion_main;
use criterion::{criterion_group, Criterion};

use urlsign::{Algorithm, UrlSigner};

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("urlsign");

    let signer = UrlSigner::new(Algorithm::Sha256, &[0x0b; 32]);
    let signed = signer
        .sign(
            "https://example.com/path?hello=world",
            Some(Duration::from_secs(7200)),
        )
        .expect("must success");

    group.bench_function("sign", |b| {
        b.iter(|| {
            signer
                .sign(
                    "https://example.com/path?hello=world",
                    Some(Duration::from_secs(7200)),
                )
                .expect("must success")
        })
    });

    group.bench_function("verify", |b| {
        b.iter(|| signer.verify(&signed).expect("must success"))
    });

    group.finish();
}
