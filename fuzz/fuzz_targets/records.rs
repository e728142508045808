#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: the full record iterator over an arbitrary byte stream.
//
// Exercises the sizer ⇄ reader loop, token decoding, and record framing
// together. The iterator must terminate (it fuses on the first error)
// and never panic, whatever the stream contains.
fuzz_target!(|data: &[u8]| {
    // A small cap keeps pathological declared lengths from slowing the run.
    for result in bsm_decoder::Records::new(data).with_max_token_size(1 << 16) {
        if result.is_err() {
            break;
        }
    }
});
