#![no_main]

use arbitrary::Arbitrary;
use hashes::{Algorithm, KeyedDigest, halfsiphash32, try_halfsiphash32};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  key: [u8; 8],
  declared_len: u8,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let digest = halfsiphash32(input.key, &input.data);
  assert_eq!(digest, halfsiphash32(input.key, &input.data));
  assert_eq!(
    Algorithm::HalfSip32.digest(&input.key, &input.data),
    Ok(KeyedDigest::HalfSip32(digest))
  );

  let len = usize::from(input.declared_len);
  let checked = try_halfsiphash32(input.key, Some(&input.data), len);
  if len == 0 {
    assert_eq!(checked, Ok(halfsiphash32(input.key, &[])));
  } else if len <= input.data.len() {
    assert_eq!(checked, Ok(halfsiphash32(input.key, &input.data[..len])));
  } else {
    assert!(checked.is_err());
  }
});
