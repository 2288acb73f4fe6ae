//! # XDM Origin Benchmarks
//!
//! | Crate | Operation | Target |
//! |-------|-----------|--------|
//! | xdm-02 Merkle | insert + root | < 20μs |
//! | xdm-03 Origin | dispatch (2 KiB body) | < 50μs |
//! | xdm-03 Origin | attestation check | < 200μs |

use criterion::{criterion_group, criterion_main, Criterion};
use xdm_tests::benchmarks::{xdm_02_merkle, xdm_03_origin};

fn merkle_benchmarks(c: &mut Criterion) {
    xdm_02_merkle::register_benchmarks(c);
}

fn origin_benchmarks(c: &mut Criterion) {
    xdm_03_origin::register_benchmarks(c);
}

criterion_group!(benches, merkle_benchmarks, origin_benchmarks);
criterion_main!(benches);
