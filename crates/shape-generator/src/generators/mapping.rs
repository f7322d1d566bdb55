//! Mapping value generator.

use super::{pick_length, ValueGenerator};
use rand::Rng;
use shape_core::defaults::DEFAULT_MAP_SIZE;
use shape_core::{MapConfig, MapValue, Value};

/// Generate a key-value mapping.
///
/// Returns `None` unless both key and value generators are configured. The
/// number of draws is picked from `[min_size, max_size]` (defaulting to
/// `[1, 5]` when `max_size` is not positive); colliding keys overwrite earlier
/// entries, so the result may hold fewer entries than draws.
pub fn generate_map<R: Rng>(rng: &mut R, config: &MapConfig) -> Option<Value> {
    let (Some(key), Some(value)) = (config.key.as_deref(), config.value.as_deref()) else {
        tracing::debug!("map is missing a key or value generator");
        return None;
    };

    let (min_size, max_size) = if config.max_size <= 0 {
        let min_size = if config.min_size <= 0 {
            DEFAULT_MAP_SIZE.0
        } else {
            config.min_size
        };
        (min_size, DEFAULT_MAP_SIZE.1)
    } else {
        (config.min_size, config.max_size)
    };
    let draws = pick_length(rng, min_size, max_size);

    let mut map = MapValue::new();
    for _ in 0..draws {
        let k = key.generate_or_zero(rng);
        let v = value.generate_or_zero(rng);
        map.insert(k, v);
    }

    if map.len() < draws {
        tracing::trace!(draws, size = map.len(), "map keys collided");
    }

    Some(Value::Map(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shape_core::{BoolConfig, IntConfig, StringConfig};

    #[test]
    fn test_generate_map_size_bounded() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = MapConfig::new(
            5,
            5,
            StringConfig::new(5, 10).into(),
            IntConfig::new(0, 100).into(),
        );

        for _ in 0..1_000 {
            let value = generate_map(&mut rng, &config).unwrap();
            let map = value.as_map().unwrap();
            assert!(map.len() <= 5);
            assert!(map.keys().all(|k| k.as_str().is_some_and(|s| s.len() >= 5)));
        }
    }

    #[test]
    fn test_generate_map_collisions_shrink_size() {
        let mut rng = StdRng::seed_from_u64(42);
        // Only two distinct keys exist
        let config = MapConfig::new(
            4,
            4,
            BoolConfig::default().into(),
            IntConfig::new(0, 9).into(),
        );

        for _ in 0..100 {
            let value = generate_map(&mut rng, &config).unwrap();
            let size = value.as_map().unwrap().len();
            assert!((1..=2).contains(&size));
        }
    }

    #[test]
    fn test_generate_map_default_size() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = MapConfig::new(
            0,
            0,
            IntConfig::new(0, i64::MAX).into(),
            BoolConfig::default().into(),
        );

        for _ in 0..200 {
            let value = generate_map(&mut rng, &config).unwrap();
            let size = value.as_map().unwrap().len();
            assert!((1..=5).contains(&size));
        }
    }

    #[test]
    fn test_generate_map_missing_generator_is_none() {
        let mut rng = StdRng::seed_from_u64(42);

        let config = MapConfig {
            key: Some(Box::new(IntConfig::new(0, 5).into())),
            ..MapConfig::default()
        };
        assert_eq!(generate_map(&mut rng, &config), None);

        let config = MapConfig {
            value: Some(Box::new(IntConfig::new(0, 5).into())),
            ..MapConfig::default()
        };
        assert_eq!(generate_map(&mut rng, &config), None);
    }
}
