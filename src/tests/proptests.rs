use crate::{decode, detect, encode, DecodeError, Scheme, Selector};
use proptest::prelude::*;

fn arb_scheme() -> impl Strategy<Value = Scheme> {
    prop::sample::select(Scheme::ALL.to_vec())
}

/// Generate tests for a specific scheme using a macro
macro_rules! proptest_scheme {
    ($scheme:expr, $mod_name:ident) => {
        mod $mod_name {
            use super::*;

            proptest! {
                /// Property: decode(encode(p)) == p
                #[test]
                fn prop_roundtrip(data in prop::collection::vec(any::<u8>(), 0..2048)) {
                    let encoded = encode(&data, $scheme).unwrap();
                    prop_assert_eq!(decode(&encoded, $scheme).unwrap(), data);
                }

                /// Property: encoded size matches the scheme's bit accounting
                #[test]
                fn prop_encoded_len(data in prop::collection::vec(any::<u8>(), 0..2048)) {
                    let encoded = encode(&data, $scheme).unwrap();
                    prop_assert_eq!(encoded.len(), $scheme.encoded_len(data.len()));
                    prop_assert_eq!(encoded.len() % 2, 0);
                }

                /// Property: encoding is deterministic
                #[test]
                fn prop_idempotent_encoding(data in prop::collection::vec(any::<u8>(), 0..512)) {
                    let first = encode(&data, $scheme).unwrap();
                    let second = encode(&data, $scheme).unwrap();
                    prop_assert_eq!(first, second);
                }

                /// Property: auto-detection recovers the scheme from the first unit
                /// (lengths stay below 1024 so a subnormal prefix never starts with +0.0)
                #[test]
                fn prop_auto_detect(data in prop::collection::vec(any::<u8>(), 1..1024)) {
                    let encoded = encode(&data, $scheme).unwrap();
                    prop_assert_eq!(detect(&encoded), Ok($scheme));
                    prop_assert_eq!(decode(&encoded, Selector::Auto).unwrap(), data);
                }

                /// Property: arbitrary bytes never panic the decoder
                #[test]
                fn prop_decode_garbage(data in prop::collection::vec(any::<u8>(), 0..256)) {
                    let _ = decode(&data, $scheme);
                }
            }
        }
    };
}

proptest_scheme!(Scheme::Zero, zero);
proptest_scheme!(Scheme::Inf, inf);
proptest_scheme!(Scheme::Nan, nan);
proptest_scheme!(Scheme::Subnormal, subnormal);

proptest! {
    /// Property: flipping a sign-scheme unit to any foreign pattern is caught
    #[test]
    fn prop_sign_schemes_reject_foreign_units(
        data in prop::collection::vec(any::<u8>(), 1..64),
        pos in any::<prop::sample::Index>(),
        unit in any::<u16>(),
    ) {
        for scheme in [Scheme::Zero, Scheme::Inf] {
            let mut encoded = encode(&data, scheme).unwrap();
            let index = pos.index(encoded.len() / 2);
            encoded[index * 2..index * 2 + 2].copy_from_slice(&unit.to_le_bytes());

            let valid = match scheme {
                Scheme::Zero => unit == 0 || unit == 0x8000,
                _ => unit & 0x7FFF == 0x7C00,
            };
            let result = decode(&encoded, scheme);
            if valid {
                prop_assert!(result.is_ok());
            } else {
                let caught = matches!(
                    result,
                    Err(DecodeError::ImpureZero { index: i, .. }
                        | DecodeError::NotInfinity { index: i, .. }
                        | DecodeError::UnexpectedNan { index: i, .. }) if i == index
                );
                prop_assert!(
                    caught,
                    "{} unit {:#06x} not rejected at {}: {:?}",
                    scheme,
                    unit,
                    index,
                    result
                );
            }
        }
    }

    /// Property: the string facade agrees with the typed one
    #[test]
    fn prop_named_matches_typed(
        data in prop::collection::vec(any::<u8>(), 0..256),
        scheme in arb_scheme(),
    ) {
        let typed = encode(&data, scheme).unwrap();
        let named = crate::encode_named(&data, scheme.name()).unwrap();
        prop_assert_eq!(&typed, &named);
        prop_assert_eq!(crate::decode_named(&named, scheme.name()).unwrap(), data);
    }
}
