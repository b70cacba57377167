#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use mutf8::{
    DecodeOptions,
    backend::{BulkCodec, Codec, ScalarCodec},
};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, SeedableRng};

const HEADER: usize = 1; // option flags

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Lead bytes worth hitting on purpose: NULL, both overlong NULL halves, the
/// surrogate lead, its ambiguous successors and the unclaimed ranges.
static INTERESTING: &[u8] = &[
    0x00, 0x80, 0x9F, 0xA0, 0xAF, 0xB0, 0xBF, 0xC0, 0xC2, 0xDF, 0xE0, 0xED, 0xEF, 0xF0, 0xFF,
];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.random::<u8>() & 1);

        let mut prefix = HEADER;
        while prefix < size.max(HEADER + 1) && prefix < max_size {
            let limit = max_size - prefix;
            let written = if with_rng(|rng| rng.random_bool(0.75)) {
                append_text(&mut data[prefix..], limit)
            } else {
                append_noise(&mut data[prefix..], limit)
            };
            if written == 0 {
                break;
            }
            prefix += written;
        }

        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append the encoding of an arbitrary string, truncated to `limit` bytes.
/// Truncation can split a sequence, which is exactly the input we want.
fn append_text(buf: &mut [u8], limit: usize) -> usize {
    let raw: Vec<u8> = with_rng(|rng| {
        let n = rng.random_range(1..=64);
        (0..n).map(|_| rng.random::<u8>()).collect()
    });
    let Ok(text) = String::arbitrary(&mut Unstructured::new(&raw)) else {
        return 0;
    };
    let encoded = mutf8::encode(&text);
    let len = encoded.len().min(limit);
    buf[..len].copy_from_slice(&encoded[..len]);
    len
}

/// Append 1‒8 bytes drawn from the interesting lead bytes and arbitrary
/// values, never exceeding `limit`.
fn append_noise(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }
        let n = rng.random_range(1..=limit.min(8));
        for b in &mut buf[..n] {
            *b = if rng.random_bool(0.5) {
                INTERESTING[rng.random_range(0..INTERESTING.len())]
            } else {
                rng.random()
            };
        }
        n
    })
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn codec(data: &[u8]) {
    let Some((&flags, bytes)) = data.split_first() else {
        return;
    };
    let options = DecodeOptions {
        strict_surrogate_pairs: flags & 1 != 0,
    };
    let scalar = ScalarCodec::new(options);
    let bulk = BulkCodec::new(options);

    let decoded = scalar.decode(bytes);
    assert_eq!(decoded, bulk.decode(bytes), "backends disagree on {bytes:02X?}");

    let Ok(text) = decoded else {
        return;
    };
    let encoded = scalar.encode(&text);
    assert_eq!(encoded, bulk.encode(&text));
    assert!(!encoded.contains(&0));
    assert_eq!(scalar.decode(&encoded).as_deref(), Ok(text.as_str()));
}

fuzz_target!(|data: &[u8]| codec(data));
