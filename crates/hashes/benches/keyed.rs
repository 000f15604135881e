use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hashes::{
  Algorithm,
  keyed::{HalfSipHash13, HalfSipHash24, SipHash13, SipHash24},
};
use traits::KeyedHash as _;

mod common;

const KEY: [u8; 16] = *b"bench key 16byte";

fn keyed(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("hashes/keyed");
  let half_key: [u8; 8] = [0x62, 0x65, 0x6e, 0x63, 0x68, 0x6b, 0x65, 0x79];

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("siphash24/sipseed", len), data, |b, d| {
      b.iter(|| black_box(SipHash24::hash_with_key(black_box(KEY), black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("siphash24/siphasher", len), data, |b, d| {
      b.iter(|| {
        use core::hash::Hasher as _;
        let mut h = siphasher::sip::SipHasher24::new_with_key(black_box(&KEY));
        h.write(black_box(d));
        black_box(h.finish())
      })
    });

    group.bench_with_input(BenchmarkId::new("siphash13/sipseed", len), data, |b, d| {
      b.iter(|| black_box(SipHash13::hash_with_key(black_box(KEY), black_box(d))))
    });

    group.bench_with_input(BenchmarkId::new("halfsiphash24/sipseed", len), data, |b, d| {
      b.iter(|| black_box(HalfSipHash24::hash_with_key(black_box(half_key), black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("halfsiphash13/sipseed", len), data, |b, d| {
      b.iter(|| black_box(HalfSipHash13::hash_with_key(black_box(half_key), black_box(d))))
    });

    group.bench_with_input(BenchmarkId::new("dispatch/sip64", len), data, |b, d| {
      b.iter(|| black_box(Algorithm::Sip64.digest(black_box(&KEY), black_box(d))))
    });
  }

  group.finish();
}

criterion_group!(benches, keyed);
criterion_main!(benches);
