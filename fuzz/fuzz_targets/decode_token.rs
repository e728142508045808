#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: decode_token with arbitrary buffers, sized or not.
//
// The decoder normally receives buffers the sizer approved; this target
// drops that assumption and checks that wrong-sized input surfaces as an
// error instead of a slice panic or overflow.
fuzz_target!(|data: &[u8]| {
    if let Ok(token) = bsm_decoder::decode_token(data) {
        // A successful decode must preserve the ID byte.
        assert_eq!(token.token_id(), data[0]);
    }
});
