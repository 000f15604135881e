use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use schedule::derive_schedule;

fn schedule(c: &mut Criterion) {
  let mut group = c.benchmark_group("schedule/derive");

  for len in [0usize, 1, 4, 6, 7, 8, 10, 64] {
    let seed: Vec<u32> = (0..len as u32).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();
    group.bench_with_input(BenchmarkId::from_parameter(len), &seed, |b, s| {
      b.iter(|| black_box(derive_schedule(black_box(s))))
    });
  }

  group.finish();
}

criterion_group!(benches, schedule);
criterion_main!(benches);
