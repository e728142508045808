#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: token_size with arbitrary stream prefixes.
//
// Catches bugs in:
// - Offset arithmetic for the interior length fields
// - Address-length validation
// - The NeedBytes/Complete decision boundaries
fuzz_target!(|data: &[u8]| {
    let _ = bsm_wire::token_size(data);
});
