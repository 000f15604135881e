#![no_main]

use hashes::keyed::{SipHash13, SipHash24};
use libfuzzer_sys::fuzz_target;
use traits::KeyedHash as _;

fuzz_target!(|input: &[u8]| {
  let key_bytes_len = core::cmp::min(16, input.len());
  let (key_bytes, data) = input.split_at(key_bytes_len);

  let mut key = [0u8; 16];
  key[..key_bytes.len()].copy_from_slice(key_bytes);
  let k0 = u64::from_le_bytes(key[..8].try_into().unwrap());
  let k1 = u64::from_le_bytes(key[8..].try_into().unwrap());

  let ours13 = SipHash13::hash_with_key(key, data);
  let ours24 = SipHash24::hash_with_key(key, data);

  use core::hash::Hasher as _;
  let mut h13 = siphasher::sip::SipHasher13::new_with_keys(k0, k1);
  h13.write(data);
  let exp13 = h13.finish();

  let mut h24 = siphasher::sip::SipHasher24::new_with_keys(k0, k1);
  h24.write(data);
  let exp24 = h24.finish();

  assert_eq!(ours13, exp13.to_le_bytes());
  assert_eq!(ours24, exp24.to_le_bytes());
  assert_eq!(hashes::try_siphash64(key, Some(data), data.len()), Ok(ours24));
});
