use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use elementwise::tests::util::sequences;
use elementwise::{mutate_in_place, transform, transform_in_place, zip_transform};

const LEN: usize = 100_000;

pub fn criterion_benchmark(c: &mut Criterion) {
    let ints = sequences::random_ints(LEN, 1);
    let floats = sequences::random_floats(LEN, 2);

    let mut group = c.benchmark_group("fresh");
    group.throughput(Throughput::Elements(LEN as u64));
    group.bench_function("transform", |b| b.iter(|| {
        transform(black_box(&ints), |&v| f64::from(v) / 2.)
    }));
    group.bench_function("zip_transform", |b| b.iter(|| {
        zip_transform(black_box(&ints), black_box(&floats), |&x, y| f64::from(x) * y).expect("Sequences have equal length")
    }));
    group.finish();

    // Copying each element back over itself vs. mutating it where it is
    let mut group = c.benchmark_group("large_records");
    for &len in &[16usize, 256, 4096] {
        let records = sequences::large_records(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("transform_in_place", len), &records, |b, records| {
            let mut data = records.clone();
            b.iter(|| transform_in_place(black_box(&mut data), |r| r.clone()))
        });
        group.bench_with_input(BenchmarkId::new("mutate_in_place", len), &records, |b, records| {
            let mut data = records.clone();
            b.iter(|| mutate_in_place(black_box(&mut data), |r| r[0] = r[0].wrapping_add(1)))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
