//! String value generator.

use super::pick_length;
use rand::Rng;
use shape_core::defaults::DEFAULT_STRING_MAX_LEN;
use shape_core::{StringConfig, Value};

/// Alphabet used when no charset is configured: printable ASCII, 0x20 through 0x7E.
pub fn printable_ascii() -> Vec<char> {
    (0x20u8..=0x7E).map(char::from).collect()
}

/// Generate a random string.
///
/// The core length is drawn from `[min_len, max_len]` after clamping (a
/// non-positive `max_len` means 10) and each character is drawn uniformly
/// from the charset. Prefix and suffix are added around the core afterwards,
/// so the result may be longer than `max_len`.
pub fn generate_string<R: Rng>(rng: &mut R, config: &StringConfig) -> Value {
    let max_len = if config.max_len <= 0 {
        DEFAULT_STRING_MAX_LEN
    } else {
        config.max_len
    };
    let len = pick_length(rng, config.min_len, max_len);

    let alphabet: Vec<char> = if config.charset.is_empty() {
        printable_ascii()
    } else {
        config.charset.chars().collect()
    };

    let mut result = String::with_capacity(config.prefix.len() + len + config.suffix.len());
    result.push_str(&config.prefix);
    result.extend((0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]));
    result.push_str(&config.suffix);

    Value::String(result)
}
