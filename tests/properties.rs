//! Property-based tests over the public codec API.

mod common;

use common::carrier_image;
use proptest::prelude::*;
use texsteg::{decode_image, encode_image, max_capacity, StegoError};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Invariant 1: round-trip for any payload within capacity.
    #[test]
    fn round_trip_for_payloads_within_capacity(
        seed in 0u64..10_000,
        payload in proptest::collection::vec(any::<u8>(), 0..400),
    ) {
        let cover = carrier_image(96, 96, seed);
        let max = max_capacity(96, 96);
        prop_assume!(payload.len() <= max);
        let key = format!("key-{seed}");

        let stego = encode_image(&payload, &cover, key.as_bytes()).unwrap();
        let recovered = decode_image(&stego, key.as_bytes()).unwrap();
        prop_assert_eq!(recovered, payload);
    }

    /// Invariant 2: decoding with a different key always fails closed.
    #[test]
    fn key_sensitivity(
        seed in 0u64..10_000,
        payload in proptest::collection::vec(any::<u8>(), 1..200),
    ) {
        let cover = carrier_image(96, 96, seed);
        let max = max_capacity(96, 96);
        prop_assume!(payload.len() <= max);
        let key_a = b"key-a-for-property-test";
        let key_b = b"key-b-for-property-test";

        let stego = encode_image(&payload, &cover, key_a).unwrap();
        let result = decode_image(&stego, key_b);
        prop_assert!(matches!(result, Err(StegoError::AuthFail)));
    }
}
