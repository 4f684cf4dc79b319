#![no_main]

use libfuzzer_sys::fuzz_target;
use notanumber::{decode, encode, Scheme};

fuzz_target!(|data: &[u8]| {
    // First byte picks the scheme, the rest is the plaintext
    let Some((&selector, plaintext)) = data.split_first() else {
        return;
    };
    let scheme = Scheme::ALL[usize::from(selector) % Scheme::ALL.len()];

    let encoded = encode(plaintext, scheme).expect("fuzz input is below the size limit");

    // Property 1: size follows the scheme's bit accounting
    assert_eq!(encoded.len(), scheme.encoded_len(plaintext.len()), "size mismatch");

    // Property 2: decode(encode(p)) == p
    let decoded = decode(&encoded, scheme).expect("own output must decode");
    assert_eq!(decoded, plaintext, "roundtrip mismatch");

    // Property 3: encoding is deterministic
    assert_eq!(encode(plaintext, scheme).unwrap(), encoded, "encoding not deterministic");
});
