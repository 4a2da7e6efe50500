//! DER signature codec benchmarks

use criterion::{BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement};
use ecdsa_der::{BigUint, Signature, decode, encode};
use hex_literal::hex;
use std::hint::black_box;

const DER: [u8; 71] = hex!(
    "3045022078611477d7824bc8e48a4aa242e8b7733ef0315e2127682533e175a371df6447"
    "022100f91beab703e13cf3622d5140af8ec341cc994bb23a98021acb260d0959f47ed2"
);

fn test_signature() -> Signature {
    Signature::from_der(&DER).unwrap()
}

fn bench_encode<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let (r, s): (BigUint, BigUint) = test_signature().into();
    group.bench_function("encode", |b| {
        b.iter(|| encode(black_box(&r), black_box(&s)))
    });
}

fn bench_decode<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    group.bench_function("decode", |b| b.iter(|| decode(black_box(&DER))));
}

fn bench_fixed_bytes<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let signature = test_signature();
    group.bench_function("to_fixed_bytes", |b| {
        b.iter(|| black_box(&signature).to_fixed_bytes(32))
    });
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("DER signature codec");
    bench_encode(&mut group);
    bench_decode(&mut group);
    bench_fixed_bytes(&mut group);
    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
