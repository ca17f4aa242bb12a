/// Layout of a control point: number of Euclidean axes and whether a
/// rational weight is carried in channel 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointType {
    /// Euclidean (x, y)
    E2,
    /// Euclidean (x, y, z)
    E3,
    /// Projective (w, wx, wy)
    P2,
    /// Projective (w, wx, wy, wz)
    P3,
}

impl PointType {
    /// Build a point type from a number of axes and a rational flag
    /// Returns `None` for axis counts other than 2 or 3
    pub fn from_dim(dim: usize, rational: bool) -> Option<Self> {
        match (dim, rational) {
            (2, false) => Some(PointType::E2),
            (3, false) => Some(PointType::E3),
            (2, true) => Some(PointType::P2),
            (3, true) => Some(PointType::P3),
            _ => None,
        }
    }

    /// Number of Euclidean axes
    pub fn dim(&self) -> usize {
        match self {
            PointType::E2 | PointType::P2 => 2,
            PointType::E3 | PointType::P3 => 3,
        }
    }

    pub fn is_rational(&self) -> bool {
        matches!(self, PointType::P2 | PointType::P3)
    }

    /// Number of scalars per control point, weight included
    pub fn channels(&self) -> usize {
        self.dim() + usize::from(self.is_rational())
    }

    /// The same layout with the rational flag set to `rational`
    pub fn with_rational(&self, rational: bool) -> Self {
        match (self.dim(), rational) {
            (2, false) => PointType::E2,
            (2, true) => PointType::P2,
            (_, false) => PointType::E3,
            (_, true) => PointType::P3,
        }
    }

    /// The smallest layout able to hold both `self` and `other`
    pub fn merge(&self, other: &Self) -> Self {
        let dim = self.dim().max(other.dim());
        let rational = self.is_rational() || other.is_rational();
        PointType::from_dim(dim, rational).unwrap_or(PointType::P3)
    }
}

impl std::fmt::Display for PointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PointType::E2 => "E2",
            PointType::E3 => "E3",
            PointType::P2 => "P2",
            PointType::P3 => "P3",
        };
        write!(f, "{name}")
    }
}
