#![no_main]

use charref::{DecodeTextConfig, TextDecoder, decode_text_with_errors};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&seed, rest)) = data.split_first() else {
        return;
    };
    let Ok(input) = std::str::from_utf8(rest) else {
        return;
    };
    let config = DecodeTextConfig {
        in_attribute: seed & 1 == 1,
        decode_numeric: seed & 2 == 0,
    };
    let mut expected_errors = Vec::new();
    let expected = decode_text_with_errors(input, config, &mut expected_errors);

    let step = (seed as usize >> 2).max(1);
    let mut decoder = TextDecoder::new(config);
    let mut out = String::new();
    let mut offset = 0usize;
    while offset < input.len() {
        let mut end = (offset + step).min(input.len());
        while !input.is_char_boundary(end) {
            end += 1;
        }
        decoder.push_str(&input[offset..end], &mut out);
        offset = end;
    }
    decoder.finish(&mut out);
    assert_eq!(out, expected);
    assert_eq!(decoder.errors(), expected_errors.as_slice());
});
