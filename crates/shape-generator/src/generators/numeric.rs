//! Numeric value generators.

use rand::Rng;
use shape_core::defaults::DEFAULT_COMPLEX_RANGE;
use shape_core::{
    Complex, ComplexConfig, ComplexWidth, FloatConfig, FloatWidth, IntConfig, IntWidth, UintConfig,
    UintWidth, Value,
};

/// Generate a random signed integer in `[min, max]` (inclusive).
///
/// Returns zero when `max` is not positive or the range is empty after
/// clamping to the target width. The sign, zero, parity, multiple-of and
/// membership fields are not consulted.
pub fn generate_int<R: Rng>(rng: &mut R, config: &IntConfig) -> Value {
    if config.max <= 0 || config.min > config.max {
        tracing::debug!(
            min = config.min,
            max = config.max,
            "degenerate int range, using zero"
        );
        return int_value(config.width, 0);
    }

    let (lo, hi) = config.width.bounds();
    let min = config.min.max(lo);
    let max = config.max.min(hi);
    if min > max {
        tracing::debug!(
            min = config.min,
            max = config.max,
            width = ?config.width,
            "int range outside target width, using zero"
        );
        return int_value(config.width, 0);
    }

    int_value(config.width, rng.gen_range(min..=max))
}

/// Generate a random unsigned integer in `[min, max]` (inclusive).
///
/// Returns zero when `max` is zero or the range is empty after clamping to
/// the target width. The `signed` flag does not change the value.
pub fn generate_uint<R: Rng>(rng: &mut R, config: &UintConfig) -> Value {
    let max = config.max.min(config.width.max_value());
    if config.max == 0 || config.min > max {
        tracing::debug!(
            min = config.min,
            max = config.max,
            "degenerate uint range, using zero"
        );
        return uint_value(config.width, 0);
    }

    uint_value(config.width, rng.gen_range(config.min..=max))
}

/// Generate a random float in `[min, max)`.
///
/// Returns zero when `max <= min`. The classification and precision fields
/// are not consulted.
pub fn generate_float<R: Rng>(rng: &mut R, config: &FloatConfig) -> Value {
    let value = draw_float(rng, config.min, config.max).unwrap_or_else(|| {
        tracing::debug!(
            min = config.min,
            max = config.max,
            "degenerate float range, using zero"
        );
        0.0
    });

    match config.width {
        FloatWidth::F32 => Value::Float32(value as f32),
        FloatWidth::F64 => Value::Float64(value),
    }
}

/// Generate a random complex number with independent real and imaginary parts.
///
/// An axis with `max <= min` is drawn from `[-10, 10)` instead, independently
/// of the other axis. `max_magnitude` is not consulted.
pub fn generate_complex<R: Rng>(rng: &mut R, config: &ComplexConfig) -> Value {
    let (re_min, re_max) = axis_range(config.real_min, config.real_max);
    let (im_min, im_max) = axis_range(config.imag_min, config.imag_max);

    let re = draw_float(rng, re_min, re_max).unwrap_or_default();
    let im = draw_float(rng, im_min, im_max).unwrap_or_default();

    match config.width {
        ComplexWidth::C64 => Value::Complex64(Complex::new(re as f32, im as f32)),
        ComplexWidth::C128 => Value::Complex128(Complex::new(re, im)),
    }
}

/// Linear interpolation of a uniform `[0, 1)` sample over `[min, max)`.
///
/// `None` when the range is empty or a bound is NaN.
fn draw_float<R: Rng>(rng: &mut R, min: f64, max: f64) -> Option<f64> {
    if min.is_nan() || max.is_nan() || max <= min {
        return None;
    }

    let t: f64 = rng.gen();
    let span = max - min;
    if span.is_finite() {
        Some(min + t * span)
    } else {
        // Span overflows for bounds near the type limits
        Some(min * (1.0 - t) + max * t)
    }
}

fn axis_range(min: f64, max: f64) -> (f64, f64) {
    if max > min {
        (min, max)
    } else {
        DEFAULT_COMPLEX_RANGE
    }
}

// Callers keep `value` within the width's bounds.
fn int_value(width: IntWidth, value: i64) -> Value {
    match width {
        IntWidth::I8 => Value::Int8(value as i8),
        IntWidth::I16 => Value::Int16(value as i16),
        IntWidth::I32 => Value::Int32(value as i32),
        IntWidth::I64 => Value::Int64(value),
    }
}

fn uint_value(width: UintWidth, value: u64) -> Value {
    match width {
        UintWidth::U8 => Value::Uint8(value as u8),
        UintWidth::U16 => Value::Uint16(value as u16),
        UintWidth::U32 => Value::Uint32(value as u32),
        UintWidth::U64 => Value::Uint64(value),
    }
}
