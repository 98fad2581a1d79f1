//! Drive the decoder over one fixture, whole or in chunks.

use charref::{DecodeTextConfig, TextDecoder, decode_text_with_errors};

use crate::expected::format_decoded;

pub fn run_decode_whole(input: &str, config: DecodeTextConfig) -> Vec<String> {
    let mut errors = Vec::new();
    let text = decode_text_with_errors(input, config, &mut errors);
    format_decoded(&text, &errors)
}

/// Feed `input` split at `boundaries` (byte offsets on char boundaries).
pub fn run_decode_chunked(
    input: &str,
    config: DecodeTextConfig,
    boundaries: &[usize],
) -> Result<Vec<String>, String> {
    let mut decoder = TextDecoder::new(config);
    let mut out = String::new();
    let mut start = 0usize;
    for &boundary in boundaries {
        if boundary < start || boundary > input.len() {
            return Err(format!(
                "boundary {boundary} out of order or past input length {}",
                input.len()
            ));
        }
        if !input.is_char_boundary(boundary) {
            return Err(format!("boundary {boundary} splits a UTF-8 sequence"));
        }
        decoder.push_str(&input[start..boundary], &mut out);
        start = boundary;
    }
    decoder.push_str(&input[start..], &mut out);
    decoder.finish(&mut out);
    Ok(format_decoded(&out, decoder.errors()))
}

/// Every single split point, for chunk-equivalence checks.
pub fn single_split_plans(input: &str) -> Vec<Vec<usize>> {
    (1..input.len())
        .filter(|&i| input.is_char_boundary(i))
        .map(|i| vec![i])
        .collect()
}

/// Split after every character.
pub fn per_char_plan(input: &str) -> Vec<usize> {
    input.char_indices().map(|(i, _)| i).skip(1).collect()
}
