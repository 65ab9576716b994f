use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elias::{decode, decode_symbols, encode, encode_symbols, gamma_decode, gamma_encode, text_entropy};

fn sample_text(len: usize) -> String {
    let words = ["it ", "was ", "the ", "best ", "of ", "times, ", "worst ", "age "];
    words.iter().cycle().flat_map(|w| w.chars()).take(len).collect()
}

fn bench_integer_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma_integer");
    let values: Vec<u64> = (1..=4096).collect();

    group.bench_function("encode", |b| {
        b.iter(|| {
            for &m in &values {
                black_box(gamma_encode(m).unwrap());
            }
        })
    });

    let codes: Vec<_> = values.iter().map(|&m| gamma_encode(m).unwrap()).collect();
    group.bench_function("decode", |b| {
        b.iter(|| {
            for code in &codes {
                black_box(gamma_decode(code).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma_text");
    // Below and above the parallel threshold.
    for len in [10_000usize, 200_000] {
        let text = sample_text(len);

        group.bench_function(format!("encode_{len}"), |b| {
            b.iter(|| encode(black_box(&text)).unwrap())
        });

        let doc = encode(&text).unwrap();
        group.bench_function(format!("decode_{len}"), |b| {
            b.iter(|| decode(black_box(&doc)).unwrap())
        });

        group.bench_function(format!("entropy_{len}"), |b| {
            b.iter(|| text_entropy(black_box(&text)).unwrap())
        });
    }
    group.finish();
}

fn bench_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma_bytes");
    let data: Vec<u8> = sample_text(100_000).into_bytes();

    group.bench_function("roundtrip", |b| {
        b.iter(|| {
            let doc = encode_symbols(black_box(&data)).unwrap();
            decode_symbols(&doc).unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_integer_codec, bench_text, bench_bytes);
criterion_main!(benches);
