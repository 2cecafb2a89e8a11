use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordtrie::{store, Trie};

fn word_list(count: usize) -> Vec<String> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let len = 3 + (state >> 60) as usize;
            (0..len)
                .map(|i| (b'a' + ((state >> (i * 5 % 58)) % 26) as u8) as char)
                .collect()
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let words = word_list(10_000);
    c.bench_function("insert_10k", |b| {
        b.iter(|| Trie::from_words(black_box(&words)).unwrap())
    });
}

fn bench_contains(c: &mut Criterion) {
    let words = word_list(10_000);
    let trie = Trie::from_words(&words).unwrap();
    c.bench_function("contains_10k", |b| {
        b.iter(|| {
            words
                .iter()
                .filter(|w| trie.contains(black_box(w)).unwrap())
                .count()
        })
    });
}

fn bench_codec(c: &mut Criterion) {
    let trie = Trie::from_words(word_list(10_000)).unwrap();
    let packed = store::compress(&trie, store::DEFAULT_COMPRESSION_LEVEL).unwrap();

    c.bench_function("compress_10k", |b| {
        b.iter(|| store::compress(black_box(&trie), store::DEFAULT_COMPRESSION_LEVEL).unwrap())
    });
    c.bench_function("decompress_10k", |b| {
        b.iter(|| store::decompress(black_box(&packed)).unwrap())
    });
}

criterion_group!(benches, bench_insert, bench_contains, bench_codec);
criterion_main!(benches);
