//! The validated code type and its operations.

use std::fmt;
use std::str::FromStr;

use alphabet::{
    digit_value, latitude_precision, LATITUDE_MAX, MAX_DIGIT_COUNT, MIN_DIGIT_COUNT,
    PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR_POSITION,
};

use crate::area::CodeArea;
use crate::calc::{clip_latitude, host_calculator, normalize_longitude, Calculator};
use crate::error::{CodeError, CodeResult};

/// Shorten removes a digit pair only when the reference sits well inside the
/// remaining precision; 0.3 of the cell size instead of the geometric 0.5
/// keeps a safety margin against references near a cell edge.
const SHORTEN_SAFETY_FACTOR: f64 = 0.3;

/// A validated, immutable plus code.
///
/// The wrapped string always satisfies the full validity grammar and is held
/// in canonical upper-cased form; the type offers no way to hold an invalid
/// code. Transforms such as [`shorten`](Self::shorten) and
/// [`recover`](Self::recover) produce new instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpenLocationCode {
    code: String,
}

impl OpenLocationCode {
    /// Creates a code from a candidate string.
    ///
    /// Validation happens before any instance exists; an invalid candidate
    /// yields [`CodeError::InvalidCode`] and nothing is constructed.
    pub fn new(code: &str) -> CodeResult<Self> {
        if !format::is_valid(code) {
            return Err(CodeError::InvalidCode {
                code: code.to_owned(),
            });
        }
        Ok(Self {
            code: format::canonicalize(code),
        })
    }

    /// Encodes a coordinate pair at `length` significant digits.
    ///
    /// `PAIR_CODE_LENGTH` (10) is the standard choice; lengths above
    /// [`MAX_DIGIT_COUNT`] are capped. The latitude is clipped, the
    /// longitude normalized.
    pub fn from_coordinates(latitude: f64, longitude: f64, length: usize) -> CodeResult<Self> {
        Self::from_coordinates_with(host_calculator(), latitude, longitude, length)
    }

    /// [`from_coordinates`](Self::from_coordinates) with an explicit
    /// arithmetic strategy.
    pub fn from_coordinates_with(
        calculator: &dyn Calculator,
        latitude: f64,
        longitude: f64,
        length: usize,
    ) -> CodeResult<Self> {
        if length < MIN_DIGIT_COUNT || (length < PAIR_CODE_LENGTH && length % 2 == 1) {
            return Err(CodeError::InvalidLength { length });
        }
        let length = length.min(MAX_DIGIT_COUNT);
        let mut latitude = clip_latitude(latitude);
        let longitude = normalize_longitude(longitude);
        // The north pole sits on the far edge of its cell; pull it inside so
        // the code decodes back into range.
        if latitude == LATITUDE_MAX {
            latitude -= 0.9 * latitude_precision(length);
        }
        let code = calculator.encode(latitude, longitude, length);
        debug_assert!(format::is_full(&code), "{code}");
        Ok(Self { code })
    }

    /// The canonical code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Consumes the code, returning the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.code
    }

    /// Returns `true` if this is a full code (separator at position 8).
    #[must_use]
    pub fn is_full(&self) -> bool {
        format::separator_position(&self.code) == Some(SEPARATOR_POSITION)
    }

    /// Returns `true` if this is a short code.
    ///
    /// Every valid code is full or short, never both.
    #[must_use]
    pub fn is_short(&self) -> bool {
        !self.is_full()
    }

    /// Returns `true` if the code contains padding.
    #[must_use]
    pub fn is_padded(&self) -> bool {
        self.code.bytes().any(|byte| byte == PADDING_CHARACTER)
    }

    /// Number of significant digits, capped at [`MAX_DIGIT_COUNT`].
    #[must_use]
    pub fn code_length(&self) -> usize {
        self.code
            .bytes()
            .filter(|&byte| digit_value(byte).is_some())
            .count()
            .min(MAX_DIGIT_COUNT)
    }

    /// Decodes the code into the area it denotes.
    ///
    /// Only full codes decode; a short code has no absolute position and
    /// yields [`CodeError::NotFull`].
    pub fn decode(&self) -> CodeResult<CodeArea> {
        self.decode_with(host_calculator())
    }

    /// [`decode`](Self::decode) with an explicit arithmetic strategy.
    pub fn decode_with(&self, calculator: &dyn Calculator) -> CodeResult<CodeArea> {
        if !self.is_full() {
            return Err(CodeError::NotFull {
                code: self.code.clone(),
            });
        }
        Ok(calculator.decode(&format::significant_digits(&self.code)))
    }

    /// Returns `true` if the coordinate lies inside the decoded area.
    ///
    /// The area is half-open: its north and east edges belong to the
    /// neighbouring cells.
    pub fn contains(&self, latitude: f64, longitude: f64) -> CodeResult<bool> {
        Ok(self.decode()?.contains(latitude, longitude))
    }

    /// Removes leading digit pairs that a nearby reference point can restore.
    ///
    /// Works from the largest removal (4 pairs) down and keeps the first
    /// removal whose remaining precision still covers the distance to the
    /// reference. Only full, unpadded codes can be shortened.
    pub fn shorten(
        &self,
        reference_latitude: f64,
        reference_longitude: f64,
    ) -> CodeResult<Self> {
        if !self.is_full() {
            return Err(CodeError::NotFull {
                code: self.code.clone(),
            });
        }
        if self.is_padded() {
            return Err(CodeError::Padded {
                code: self.code.clone(),
            });
        }
        let area = self.decode()?;
        let range = (reference_latitude - area.center_latitude())
            .abs()
            .max((reference_longitude - area.center_longitude()).abs());

        for pairs in (1..=4).rev() {
            if range < latitude_precision(pairs * 2) * SHORTEN_SAFETY_FACTOR {
                return Self::new(&self.code[pairs * 2..]);
            }
        }
        Err(CodeError::ReferenceTooFar {
            range_degrees: range,
        })
    }

    /// Restores a short code to a full code near a reference point.
    ///
    /// A full code is returned unchanged. Otherwise the missing leading
    /// digits are taken from the code of the reference point; if that snaps
    /// to the wrong cell (the recovered center ends up more than half a
    /// prefix cell from the reference), the result is stepped one prefix
    /// cell toward the reference. The latitude step is bounded to stay
    /// within ±90; the longitude step is deliberately not bounded at the
    /// ±180 seam, matching the reference behavior.
    pub fn recover(
        &self,
        reference_latitude: f64,
        reference_longitude: f64,
    ) -> CodeResult<Self> {
        if self.is_full() {
            return Ok(self.clone());
        }
        let reference_latitude = clip_latitude(reference_latitude);
        let reference_longitude = normalize_longitude(reference_longitude);

        let separator =
            format::separator_position(&self.code).unwrap_or(SEPARATOR_POSITION);
        let missing = SEPARATOR_POSITION - separator;
        let prefix_precision = latitude_precision(missing);

        let reference_code = Self::from_coordinates(
            reference_latitude,
            reference_longitude,
            PAIR_CODE_LENGTH,
        )?;
        let mut spliced = reference_code.code[..missing].to_owned();
        spliced.push_str(&self.code);
        let recovered = Self::new(&spliced)?;
        let area = recovered.decode()?;

        let mut latitude = area.center_latitude();
        let latitude_diff = latitude - reference_latitude;
        if latitude_diff > prefix_precision / 2.0 && latitude - prefix_precision > -LATITUDE_MAX
        {
            latitude -= prefix_precision;
        } else if latitude_diff < -prefix_precision / 2.0
            && latitude + prefix_precision < LATITUDE_MAX
        {
            latitude += prefix_precision;
        }

        let mut longitude = area.center_longitude();
        let longitude_diff = longitude - reference_longitude;
        if longitude_diff > prefix_precision / 2.0 {
            longitude -= prefix_precision;
        } else if longitude_diff < -prefix_precision / 2.0 {
            longitude += prefix_precision;
        }

        Self::from_coordinates(latitude, longitude, recovered.code_length())
    }
}

impl fmt::Display for OpenLocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for OpenLocationCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for OpenLocationCode {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OpenLocationCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OpenLocationCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::new(&code).map_err(serde::de::Error::custom)
    }
}

/// Encodes a coordinate pair into a code string.
///
/// Stateless convenience over [`OpenLocationCode::from_coordinates`].
pub fn encode(latitude: f64, longitude: f64, length: usize) -> CodeResult<String> {
    OpenLocationCode::from_coordinates(latitude, longitude, length)
        .map(OpenLocationCode::into_string)
}

/// Decodes a full code string into the area it denotes.
pub fn decode(code: &str) -> CodeResult<CodeArea> {
    OpenLocationCode::new(code)?.decode()
}
