pub mod attribute;
pub mod derivative;
pub mod domain;
pub mod elevate;
pub mod eval;
pub mod point_type;
pub mod tri_srf;

pub use attribute::*;
pub use point_type::*;
pub use tri_srf::*;

use crate::error::TrngError;

/// The basis a triangular surface is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryKind {
    Bezier,
    Bspline,
    Gregory,
    Undefined,
}

/// One of the three barycentric parameter directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriDirection {
    U,
    V,
    W,
}

impl TriDirection {
    pub const ALL: [TriDirection; 3] = [TriDirection::U, TriDirection::V, TriDirection::W];

    /// Blend vector of the principal derivative in this direction
    pub(crate) fn blend(&self) -> [f64; 3] {
        match self {
            TriDirection::U => [1., -0.5, -0.5],
            TriDirection::V => [-0.5, 1., -0.5],
            TriDirection::W => [-0.5, -0.5, 1.],
        }
    }
}

impl TryFrom<usize> for TriDirection {
    type Error = TrngError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TriDirection::U),
            1 => Ok(TriDirection::V),
            2 => Ok(TriDirection::W),
            _ => Err(TrngError::DirectionNotValid),
        }
    }
}

impl TryFrom<char> for TriDirection {
    type Error = TrngError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase() {
            'u' => Ok(TriDirection::U),
            'v' => Ok(TriDirection::V),
            'w' => Ok(TriDirection::W),
            _ => Err(TrngError::DirectionNotValid),
        }
    }
}

#[cfg(test)]
mod tests;
