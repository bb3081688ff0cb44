//! Coordinate/digit calculators.
//!
//! The digit math runs over coordinates scaled to integers, so that the
//! maximum-precision digit stream is an exact non-negative integer and no
//! floating-point drift leaks into the emitted digits. Two interchangeable
//! strategies run the same generic core: [`WideInteger`] over scaled `i64`
//! values, and [`FloatingPoint`] over scaled `f64` values for hosts without
//! native 64-bit integer registers. Every intermediate magnitude stays below
//! 2^53, so both strategies are exact and must agree byte for byte.

use std::fmt;

use alphabet::{
    digit_char, digit_value, ENCODING_BASE, GRID_CODE_LENGTH, GRID_COLUMNS, GRID_ROWS,
    LATITUDE_MAX, LONGITUDE_MAX, MAX_DIGIT_COUNT, PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR,
    SEPARATOR_POSITION,
};

use crate::area::CodeArea;

/// Latitude scale: `20^3 * 5^5` units per degree, one unit per
/// maximum-precision cell height.
const LAT_INTEGER_MULTIPLIER: i64 = 8000 * 3125;

/// Longitude scale: `20^3 * 4^5` units per degree, one unit per
/// maximum-precision cell width.
const LNG_INTEGER_MULTIPLIER: i64 = 8000 * 1024;

/// Scaled latitude span of the five grid digits (`5^5`).
const GRID_LAT_SPAN: i64 = 3125;

/// Scaled longitude span of the five grid digits (`4^5`).
const GRID_LNG_SPAN: i64 = 1024;

/// Scaled southern origin of the latitude axis.
const SOUTH_ORIGIN: i64 = -90 * LAT_INTEGER_MULTIPLIER;

/// Scaled western origin of the longitude axis.
const WEST_ORIGIN: i64 = -180 * LNG_INTEGER_MULTIPLIER;

/// Scaled span of the latitude axis; values must stay strictly below it.
const LAT_VALUE_SPAN: i64 = 180 * LAT_INTEGER_MULTIPLIER;

/// Scaled span of the longitude axis; values must stay strictly below it.
const LNG_VALUE_SPAN: i64 = 360 * LNG_INTEGER_MULTIPLIER;

/// Decoder place value one division above the most significant digit's
/// place; the decode loop divides before accumulating.
const LAT_PLACE_START: i64 = LAT_INTEGER_MULTIPLIER * (ENCODING_BASE as i64).pow(2);
const LNG_PLACE_START: i64 = LNG_INTEGER_MULTIPLIER * (ENCODING_BASE as i64).pow(2);

/// Scalar backing a calculator.
///
/// Both representations hold every scaled value exactly, so the strategies
/// built on them emit identical digits. Inputs to `div` and `digit` are
/// always non-negative integers in the scaled domain.
trait Scaled: Copy {
    fn from_degrees(scaled_degrees: f64) -> Self;
    fn from_scaled(value: i64) -> Self;
    fn min_with(self, limit: i64) -> Self;
    fn div(self, divisor: i64) -> Self;
    fn digit(self, base: i64) -> i64;
    fn add_value(self, digit: i64, place: Self) -> Self;
    fn degrees(self, multiplier: i64) -> f64;
}

impl Scaled for i64 {
    fn from_degrees(scaled_degrees: f64) -> Self {
        // Round at microdegree precision before truncating, to suppress
        // floating-point drift in the scaled value.
        ((scaled_degrees * 1e6).round() as i64) / 1_000_000
    }

    fn from_scaled(value: i64) -> Self {
        value
    }

    fn min_with(self, limit: i64) -> Self {
        self.min(limit)
    }

    fn div(self, divisor: i64) -> Self {
        self / divisor
    }

    fn digit(self, base: i64) -> i64 {
        self % base
    }

    fn add_value(self, digit: i64, place: Self) -> Self {
        self + digit * place
    }

    fn degrees(self, multiplier: i64) -> f64 {
        self as f64 / multiplier as f64
    }
}

impl Scaled for f64 {
    fn from_degrees(scaled_degrees: f64) -> Self {
        ((scaled_degrees * 1e6).round() / 1e6).trunc()
    }

    fn from_scaled(value: i64) -> Self {
        value as f64
    }

    fn min_with(self, limit: i64) -> Self {
        self.min(limit as f64)
    }

    fn div(self, divisor: i64) -> Self {
        (self / divisor as f64).trunc()
    }

    fn digit(self, base: i64) -> i64 {
        (self % base as f64) as i64
    }

    fn add_value(self, digit: i64, place: Self) -> Self {
        self + digit as f64 * place
    }

    fn degrees(self, multiplier: i64) -> f64 {
        self / multiplier as f64
    }
}

/// A digit arithmetic strategy.
///
/// Callers hand in a latitude already clipped to `[-90, 90]` and a longitude
/// already normalized to `[-180, 180)`, with a digit count already validated
/// and capped. Implementations must produce byte-identical output for all
/// such inputs; which one runs is purely a host capability question.
pub trait Calculator: fmt::Debug + Send + Sync {
    /// Encodes a coordinate pair into a code string of `length` significant
    /// digits, with separator and padding applied.
    fn encode(&self, latitude: f64, longitude: f64, length: usize) -> String;

    /// Decodes stripped significant digits into the area they denote.
    fn decode(&self, digits: &str) -> CodeArea;
}

/// Wide-integer strategy: scaled `i64` arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct WideInteger;

/// Floating-point fallback: scaled `f64` arithmetic.
///
/// Exists for hosts without native 64-bit integers; exact for every value
/// the codec produces.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatingPoint;

impl Calculator for WideInteger {
    fn encode(&self, latitude: f64, longitude: f64, length: usize) -> String {
        encode_digits::<i64>(latitude, longitude, length)
    }

    fn decode(&self, digits: &str) -> CodeArea {
        decode_digits::<i64>(digits)
    }
}

impl Calculator for FloatingPoint {
    fn encode(&self, latitude: f64, longitude: f64, length: usize) -> String {
        encode_digits::<f64>(latitude, longitude, length)
    }

    fn decode(&self, digits: &str) -> CodeArea {
        decode_digits::<f64>(digits)
    }
}

/// Returns the calculator for this host.
///
/// Hosts with native 64-bit integer registers take the wide-integer
/// strategy; narrower hosts fall back to floating point. The choice is fixed
/// at compile time: no per-call branching, no mutable global.
#[must_use]
pub fn host_calculator() -> &'static dyn Calculator {
    if cfg!(target_pointer_width = "64") {
        &WideInteger
    } else {
        &FloatingPoint
    }
}

/// Clips a latitude into `[-90, 90]` degrees.
#[must_use]
pub fn clip_latitude(latitude: f64) -> f64 {
    latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX)
}

/// Normalizes a longitude into `[-180, 180)` degrees.
#[must_use]
pub fn normalize_longitude(longitude: f64) -> f64 {
    if (-LONGITUDE_MAX..LONGITUDE_MAX).contains(&longitude) {
        return longitude;
    }
    (longitude + LONGITUDE_MAX).rem_euclid(2.0 * LONGITUDE_MAX) - LONGITUDE_MAX
}

fn encode_digits<S: Scaled>(latitude: f64, longitude: f64, length: usize) -> String {
    // Microdegree rounding can land a coordinate sitting within
    // representation noise of the axis edge exactly on the edge; keep such
    // values in the top cell so the digits stay in range.
    let mut lat = S::from_degrees((latitude + LATITUDE_MAX) * LAT_INTEGER_MULTIPLIER as f64)
        .min_with(LAT_VALUE_SPAN - 1);
    let mut lng = S::from_degrees((longitude + LONGITUDE_MAX) * LNG_INTEGER_MULTIPLIER as f64)
        .min_with(LNG_VALUE_SPAN - 1);

    // Digits come out least significant first and are reversed at the end.
    let mut reversed: Vec<u8> = Vec::with_capacity(MAX_DIGIT_COUNT + 1);
    if length > PAIR_CODE_LENGTH {
        for _ in 0..GRID_CODE_LENGTH {
            let row = lat.digit(i64::from(GRID_ROWS));
            let column = lng.digit(i64::from(GRID_COLUMNS));
            reversed.push(digit_char((row * i64::from(GRID_COLUMNS) + column) as u8));
            lat = lat.div(i64::from(GRID_ROWS));
            lng = lng.div(i64::from(GRID_COLUMNS));
        }
    } else {
        // No grid digits wanted: discard the grid precision up front.
        lat = lat.div(GRID_LAT_SPAN);
        lng = lng.div(GRID_LNG_SPAN);
    }

    let base = i64::from(ENCODING_BASE);
    for pair in 0..PAIR_CODE_LENGTH / 2 {
        reversed.push(digit_char(lng.digit(base) as u8));
        reversed.push(digit_char(lat.digit(base) as u8));
        lat = lat.div(base);
        lng = lng.div(base);
        if pair == 0 {
            reversed.push(SEPARATOR);
        }
    }
    reversed.reverse();

    if length < SEPARATOR_POSITION {
        for byte in &mut reversed[length..SEPARATOR_POSITION] {
            *byte = PADDING_CHARACTER;
        }
    }
    reversed.truncate(SEPARATOR_POSITION.max(length) + 1);
    reversed.into_iter().map(char::from).collect()
}

fn decode_digits<S: Scaled>(digits: &str) -> CodeArea {
    let values: Vec<i64> = digits
        .bytes()
        .filter_map(digit_value)
        .map(i64::from)
        .take(MAX_DIGIT_COUNT)
        .collect();

    let mut lat = S::from_scaled(SOUTH_ORIGIN);
    let mut lng = S::from_scaled(WEST_ORIGIN);
    let mut lat_place = S::from_scaled(LAT_PLACE_START);
    let mut lng_place = S::from_scaled(LNG_PLACE_START);

    let base = i64::from(ENCODING_BASE);
    for (index, &value) in values.iter().enumerate() {
        if index < PAIR_CODE_LENGTH {
            if index % 2 == 0 {
                lat_place = lat_place.div(base);
                lat = lat.add_value(value, lat_place);
            } else {
                lng_place = lng_place.div(base);
                lng = lng.add_value(value, lng_place);
            }
        } else {
            lat_place = lat_place.div(i64::from(GRID_ROWS));
            lng_place = lng_place.div(i64::from(GRID_COLUMNS));
            lat = lat.add_value(value / i64::from(GRID_COLUMNS), lat_place);
            lng = lng.add_value(value % i64::from(GRID_COLUMNS), lng_place);
        }
    }

    CodeArea::new(
        lat.degrees(LAT_INTEGER_MULTIPLIER),
        lng.degrees(LNG_INTEGER_MULTIPLIER),
        lat.add_value(1, lat_place).degrees(LAT_INTEGER_MULTIPLIER),
        lng.add_value(1, lng_place).degrees(LNG_INTEGER_MULTIPLIER),
        values.len(),
    )
}
