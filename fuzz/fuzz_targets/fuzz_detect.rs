#![no_main]

use libfuzzer_sys::fuzz_target;
use notanumber::{decode, detect, Selector};

fuzz_target!(|data: &[u8]| {
    // Auto decoding must agree with decoding under the detected scheme
    match detect(data) {
        Ok(scheme) => assert_eq!(decode(data, Selector::Auto), decode(data, scheme)),
        Err(err) => assert_eq!(decode(data, Selector::Auto), Err(err)),
    }
});
