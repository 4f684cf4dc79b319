#![no_main]

use libfuzzer_sys::fuzz_target;
use notanumber::{decode, Scheme, Selector};

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes to every decoder - should never panic
    // Garbage is expected to be rejected, not to crash
    let _ = decode(data, Selector::Auto);
    for scheme in Scheme::ALL {
        let _ = decode(data, scheme);
    }
});
