//! # XDM-03 Origin Benchmarks
//!
//! Claims to validate:
//! - Dispatch cost is dominated by framing plus one keccak and one insert
//! - Attestation checks are dominated by one ECDSA recovery
//! - Body size only affects the envelope hash

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use std::time::Duration;
use xdm_03_origin::OriginApi;

use crate::fixtures::{attest, harness, request, LOCAL_DOMAIN, REPORTER};

pub fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("xdm-03/dispatch");
    group.measurement_time(Duration::from_secs(5));

    for body_len in [0usize, 256, 2_048] {
        let body = vec![0xAB; body_len];
        group.throughput(Throughput::Bytes(body_len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(body_len), &body, |b, body| {
            let mut h = harness();
            b.iter(|| {
                let receipt = h
                    .origin
                    .dispatch(request(REPORTER, body))
                    .expect("dispatch");
                h.events.drain();
                black_box(receipt)
            })
        });
    }
    group.finish();
}

pub fn bench_attestation_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("xdm-03/attestation");

    let mut h = harness();
    for _ in 0..64 {
        h.origin.dispatch(request(REPORTER, b"bench")).expect("dispatch");
    }
    let suggestion = h.origin.suggest_attestation();
    let honest = attest(&h.notary, LOCAL_DOMAIN, suggestion.nonce, suggestion.root);

    group.bench_function("check_honest", |b| {
        b.iter(|| black_box(h.origin.check_attestation(black_box(&honest)).expect("verdict")))
    });
    group.bench_function("improper_attestation_honest", |b| {
        b.iter(|| {
            black_box(
                h.origin
                    .improper_attestation(REPORTER, black_box(&honest))
                    .expect("honest"),
            )
        })
    });
    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_dispatch(c);
    bench_attestation_check(c);
}
