use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use muhash::{MuHash, Num3072, SerializedMuHash, ELEMENT_BYTE_SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_bytes(rng: &mut StdRng) -> [u8; ELEMENT_BYTE_SIZE] {
    let mut bytes = [0u8; ELEMENT_BYTE_SIZE];
    rng.fill(&mut bytes[..]);
    bytes
}

/// Accumulator with a saturated numerator and a non-trivial denominator,
/// so normalization has to run the full inversion chain.
fn worst_case_muhash() -> MuHash {
    let mut serialized = [0xffu8; ELEMENT_BYTE_SIZE];
    // Drop below the modulus so the deserialization gate accepts it.
    serialized[ELEMENT_BYTE_SIZE - 1] = 0xfe;
    let mut acc = MuHash::deserialize(&SerializedMuHash::from(serialized)).expect("below modulus");
    acc.remove(&[0xffu8; 100]);
    acc
}

fn bench_accumulator(c: &mut Criterion) {
    let data = [0xffu8; 100];

    let mut group = c.benchmark_group("accumulator");
    group.bench_function("add", |b| {
        let mut acc = MuHash::new();
        b.iter(|| acc.add(&data));
    });
    group.bench_function("remove", |b| {
        let mut acc = MuHash::new();
        b.iter(|| acc.remove(&data));
    });

    let worst = worst_case_muhash();
    let empty = MuHash::new();
    group.bench_function("combine_worst", |b| {
        let mut acc = MuHash::new();
        b.iter(|| acc.combine(&worst));
    });
    group.bench_function("combine_best", |b| {
        let mut acc = MuHash::new();
        b.iter(|| acc.combine(&empty));
    });

    group.bench_function("normalize_worst", |b| {
        b.iter_batched(
            || worst.clone(),
            |mut acc| acc.normalize(),
            BatchSize::SmallInput,
        );
    });
    group.bench_function("normalize_best", |b| {
        b.iter_batched(
            || empty.clone(),
            |mut acc| acc.normalize(),
            BatchSize::SmallInput,
        );
    });
    group.bench_function("finalize_worst", |b| {
        b.iter_batched(
            || worst.clone(),
            |mut acc| acc.finalize(),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_field(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let lhs = Num3072::from_le_bytes(&random_bytes(&mut rng));
    let rhs = Num3072::from_le_bytes(&random_bytes(&mut rng));

    let mut group = c.benchmark_group("field");
    group.bench_function("mul", |b| {
        let mut acc = lhs;
        b.iter(|| acc.mul(&rhs));
    });
    group.bench_function("square", |b| {
        let mut acc = lhs;
        b.iter(|| acc.square());
    });
    group.bench_function("inverse", |b| {
        b.iter(|| rhs.inverse());
    });
    group.bench_function("divide", |b| {
        let mut acc = lhs;
        b.iter(|| acc.divide(&rhs));
    });
    group.finish();
}

criterion_group!(benches, bench_accumulator, bench_field);
criterion_main!(benches);
