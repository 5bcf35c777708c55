#![no_main]

use font_corpus::corpus::{split_entry, trailer_char, TRAILER_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match split_entry(data) {
        Some((font_part, trailer)) => {
            assert_eq!(font_part.len() + TRAILER_LEN, data.len());
            assert_eq!(font_part, &data[..data.len() - TRAILER_LEN]);
            // Decoding the glyph selector must never panic, valid UTF-8 or not.
            let _ = trailer_char(trailer);
        },
        None => assert!(data.len() < TRAILER_LEN),
    }
});
