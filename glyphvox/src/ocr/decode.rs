use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::{GlyphvoxError, Result};

/// Standard alphabet, padding optional, non-zero trailing bits ignored.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decodes a base64 image as sent by clients.
///
/// Accepts a `data:<mime>;base64,` prefix, ignores ASCII whitespace and
/// takes URL-safe characters (`-`, `_`) alongside the standard ones.
/// The image format itself is left for the recognition engine to judge.
pub fn decode_image(input: &str) -> Result<Vec<u8>> {
    let payload = strip_data_url(input.trim());
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = LENIENT.decode(compact.as_bytes())?;
    if bytes.is_empty() {
        return Err(GlyphvoxError::Ocr(
            "Image data decoded to zero bytes".to_string(),
        ));
    }
    Ok(bytes)
}

fn strip_data_url(input: &str) -> &str {
    if !input.starts_with("data:") {
        return input;
    }
    match input.find(";base64,") {
        Some(idx) => &input[idx + ";base64,".len()..],
        None => input,
    }
}
