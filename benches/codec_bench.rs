use base262144::{decode, decode_utf8, encode};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    // 64 KiB of mixed bytes; 9 bytes per 4 symbols keeps the tail unaligned.
    let input = (0..65_537u32).map(|i| (i * 31 % 251) as u8).collect::<Vec<_>>();
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("to_string", |b| b.iter(|| encode(&input)));
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let input = (0..65_537u32).map(|i| (i * 31 % 251) as u8).collect::<Vec<_>>();
    let text = encode(&input);
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("from_str", |b| b.iter(|| decode(&text).unwrap()));
    group.bench_function("from_utf8", |b| {
        b.iter(|| decode_utf8(text.as_bytes()).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
