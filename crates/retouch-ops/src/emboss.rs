//! Directional emboss filter.
//!
//! Each of the eight compass directions selects a 3×3 kernel with a single
//! `+1` and a single `-1` weight. The weighted colour sums are averaged into
//! one level and offset from mid-gray, producing an opaque grayscale relief.

use std::fmt;

use retouch_core::{Argb, PixelBuffer, clamp_channel};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::convolution::{Kernel3, WeightedSum, convolve};
use crate::operation::ImageOperation;

/// Gray level of a flat (zero-gradient) region.
const MID_LEVEL: i64 = 127;

/// Compass direction of an emboss kernel.
///
/// Serialized as its index `0..=7`. Out-of-range indices fall back to
/// [`EmbossDirection::North`], both at construction and when deserializing,
/// including integers that do not fit in an `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "i64")]
pub enum EmbossDirection {
    #[default]
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl EmbossDirection {
    /// All directions in index order.
    pub const ALL: [EmbossDirection; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Direction for an index, defaulting to North outside `0..=7`.
    pub fn from_index(index: i64) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or_default()
    }

    /// The index `0..=7` of this direction.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The kernel for this direction.
    pub fn kernel(self) -> Kernel3 {
        match self {
            Self::North => [[0, 1, 0], [0, 0, 0], [0, -1, 0]],
            Self::NorthEast => [[0, 0, 1], [0, 0, 0], [-1, 0, 0]],
            Self::East => [[0, 0, 0], [-1, 0, 1], [0, 0, 0]],
            Self::SouthEast => [[-1, 0, 0], [0, 0, 0], [0, 0, 1]],
            Self::South => [[0, -1, 0], [0, 0, 0], [0, 1, 0]],
            Self::SouthWest => [[0, 0, -1], [0, 0, 0], [1, 0, 0]],
            Self::West => [[0, 0, 0], [1, 0, -1], [0, 0, 0]],
            Self::NorthWest => [[1, 0, 0], [0, 0, 0], [0, 0, -1]],
        }
    }
}

impl From<i64> for EmbossDirection {
    fn from(index: i64) -> Self {
        Self::from_index(index)
    }
}

impl From<EmbossDirection> for i64 {
    fn from(direction: EmbossDirection) -> Self {
        i64::from(direction.index())
    }
}

impl<'de> Deserialize<'de> for EmbossDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DirectionVisitor)
    }
}

/// Accepts any integer width, mapping out-of-range indices to North.
struct DirectionVisitor;

impl Visitor<'_> for DirectionVisitor {
    type Value = EmbossDirection;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an emboss direction index")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(EmbossDirection::from_index(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(v).map_or_else(|_| EmbossDirection::default(), EmbossDirection::from_index))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(i64::try_from(v).map_or_else(|_| EmbossDirection::default(), EmbossDirection::from_index))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(i64::try_from(v).map_or_else(|_| EmbossDirection::default(), EmbossDirection::from_index))
    }

    // JSON reads integers wider than u64 as floats
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.fract() == 0.0 && (0.0..8.0).contains(&v) {
            return Ok(EmbossDirection::from_index(v as i64));
        }
        Ok(EmbossDirection::default())
    }
}

impl fmt::Display for EmbossDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::NorthEast => "north-east",
            Self::East => "east",
            Self::SouthEast => "south-east",
            Self::South => "south",
            Self::SouthWest => "south-west",
            Self::West => "west",
            Self::NorthWest => "north-west",
        };
        f.write_str(name)
    }
}

/// Emboss filter in one compass direction.
///
/// Output pixels are always achromatic and fully opaque; the source alpha is
/// gathered by the convolution but does not reach the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Emboss {
    direction: EmbossDirection,
}

impl Emboss {
    /// Create an emboss filter from a direction index.
    ///
    /// Indices outside `0..=7` select North.
    pub fn new(direction: i64) -> Self {
        Self {
            direction: EmbossDirection::from_index(direction),
        }
    }

    /// Create an emboss filter for a direction.
    pub fn with_direction(direction: EmbossDirection) -> Self {
        Self { direction }
    }

    /// The direction of this filter.
    pub fn direction(&self) -> EmbossDirection {
        self.direction
    }
}

/// Reduce a weighted neighborhood to an emboss sample.
///
/// The three colour sums are averaged together (truncating toward zero)
/// before offsetting from mid-gray; the alpha sum is ignored.
fn emboss_level(sum: WeightedSum) -> Argb {
    let avg = (sum.rgb_total() as f64 / 3.0) as i64;
    let level = MID_LEVEL - avg;
    Argb::gray(clamp_channel(level.abs()))
}

impl ImageOperation for Emboss {
    fn apply(&self, input: &PixelBuffer) -> PixelBuffer {
        convolve(input, &self.direction.kernel(), emboss_level)
    }

    fn name(&self) -> &'static str {
        "emboss"
    }
}
