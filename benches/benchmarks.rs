use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use notanumber::{decode, encode, Scheme, Selector};
use rand::Rng;

fn payload(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rand::rng().fill(&mut data[..]);
    data
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for len in [1024usize, 64 * 1024] {
        let data = payload(len);
        group.throughput(Throughput::Bytes(len as u64));
        for scheme in Scheme::ALL {
            group.bench_function(format!("{scheme}_{len}_bytes"), |b| {
                b.iter(|| black_box(encode(black_box(&data), scheme).unwrap()))
            });
        }
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let data = payload(64 * 1024);

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(data.len() as u64));
    for scheme in Scheme::ALL {
        let encoded = encode(&data, scheme).unwrap();
        group.bench_function(format!("{scheme}_65536_bytes"), |b| {
            b.iter(|| black_box(decode(black_box(&encoded), scheme).unwrap()))
        });
    }
    group.finish();
}

fn bench_auto_detect(c: &mut Criterion) {
    let encoded = encode(&payload(1024), Scheme::Nan).unwrap();

    let mut group = c.benchmark_group("roundtrip");
    group.throughput(Throughput::Bytes(1024));
    group.bench_function("nan_auto_1024_bytes", |b| {
        b.iter(|| black_box(decode(black_box(&encoded), Selector::Auto).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_auto_detect);
criterion_main!(benches);
