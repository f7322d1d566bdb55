//! Sequence and array value generators.

use super::{pick_length, ValueGenerator};
use rand::Rng;
use shape_core::defaults::DEFAULT_SEQUENCE_LEN;
use shape_core::{ArrayConfig, SequenceConfig, Value};

/// Generate a variable-length sequence.
///
/// Returns `None` when no element generator is configured. A negative
/// `max_len` means 5; `min_len` is clamped into `[0, max_len]`, so `0..0`
/// yields an empty sequence. Elements the element generator cannot produce
/// are filled with the element's zero value.
pub fn generate_sequence<R: Rng>(rng: &mut R, config: &SequenceConfig) -> Option<Value> {
    let Some(element) = config.element.as_deref() else {
        tracing::debug!("sequence has no element generator");
        return None;
    };

    let max_len = if config.max_len < 0 {
        DEFAULT_SEQUENCE_LEN.1
    } else {
        config.max_len
    };
    let len = pick_length(rng, config.min_len, max_len);

    let items = (0..len).map(|_| element.generate_or_zero(rng)).collect();
    Some(Value::Sequence(items))
}

/// Generate a fixed-length array.
///
/// Returns `None` when `length` is not positive or no element generator is
/// configured.
pub fn generate_array<R: Rng>(rng: &mut R, config: &ArrayConfig) -> Option<Value> {
    let Some(element) = config.element.as_deref() else {
        tracing::debug!("array has no element generator");
        return None;
    };
    let length = match usize::try_from(config.length) {
        Ok(length) if length > 0 => length,
        _ => {
            tracing::debug!(length = config.length, "array length is not positive");
            return None;
        }
    };

    let items = (0..length).map(|_| element.generate_or_zero(rng)).collect();
    Some(Value::Array(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shape_core::{GeneratorConfig, IntConfig, StringConfig};

    #[test]
    fn test_generate_sequence() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = SequenceConfig::new(1, 3, IntConfig::new(10, 20).into());

        for _ in 0..100 {
            let value = generate_sequence(&mut rng, &config).unwrap();
            let items = value.as_slice().unwrap();
            assert!((1..=3).contains(&items.len()));
            for item in items {
                assert!(matches!(item, Value::Int64(10..=20)));
            }
        }
    }

    #[test]
    fn test_generate_sequence_zero_length_is_empty_not_none() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = SequenceConfig::new(0, 0, StringConfig::new(1, 2).into());

        for _ in 0..100 {
            assert_eq!(
                generate_sequence(&mut rng, &config),
                Some(Value::Sequence(vec![]))
            );
        }
    }

    #[test]
    fn test_generate_sequence_negative_max_uses_default() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = SequenceConfig::new(0, -1, IntConfig::new(0, 1).into());

        for _ in 0..100 {
            let value = generate_sequence(&mut rng, &config).unwrap();
            assert!(value.as_slice().unwrap().len() <= 5);
        }
    }

    #[test]
    fn test_generate_sequence_without_element_is_none() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = SequenceConfig {
            min_len: 1,
            max_len: 4,
            ..SequenceConfig::default()
        };

        assert_eq!(generate_sequence(&mut rng, &config), None);
    }

    #[test]
    fn test_generate_sequence_fills_missing_elements_with_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        // Inner arrays have length zero, so every slot is the zero array
        let inner = GeneratorConfig::Array(ArrayConfig::new(0, IntConfig::new(1, 2).into()));
        let config = SequenceConfig::new(3, 3, inner);

        let value = generate_sequence(&mut rng, &config).unwrap();
        assert_eq!(
            value,
            Value::Sequence(vec![
                Value::Array(vec![]),
                Value::Array(vec![]),
                Value::Array(vec![]),
            ])
        );
    }

    #[test]
    fn test_generate_array() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = ArrayConfig::new(4, StringConfig::new(2, 2).with_charset("x").into());

        let value = generate_array(&mut rng, &config).unwrap();
        let expected = Value::String("xx".to_string());
        assert_eq!(value, Value::Array(vec![expected; 4]));
    }

    #[test]
    fn test_generate_array_degenerate_is_none() {
        let mut rng = StdRng::seed_from_u64(42);

        let config = ArrayConfig::new(0, IntConfig::new(1, 2).into());
        for _ in 0..100 {
            assert_eq!(generate_array(&mut rng, &config), None);
        }

        let config = ArrayConfig::new(-3, IntConfig::new(1, 2).into());
        assert_eq!(generate_array(&mut rng, &config), None);

        let config = ArrayConfig {
            length: 3,
            ..ArrayConfig::default()
        };
        assert_eq!(generate_array(&mut rng, &config), None);
    }
}
