use log::debug;

use crate::{
    convert::gregory_tables::{
        GregoryRow, GREGORY_5_TO_BEZIER_11, GREGORY_6_TO_BEZIER_12, GREGORY_7_TO_BEZIER_13,
    },
    misc::{scalar, FloatingPoint},
    surface::{GeometryKind, TriSrf},
};

/// Length gained by a Gregory patch converted to a rational Bezier patch
pub const GREGORY_LENGTH_INCREASE: usize = 6;

impl GregoryRow {
    /// Homogeneous value of one output channel entry from a Gregory channel
    fn apply<T: FloatingPoint>(&self, gregory: &[T]) -> T {
        if self.terms.is_empty() {
            return T::zero();
        }
        let sum = self
            .terms
            .iter()
            .fold(T::zero(), |acc, &(index, numerator)| {
                acc + scalar::<T>(numerator as f64) * gregory[index]
            });
        let (wn, wd) = self.weight;
        scalar::<T>(wn as f64) * sum / (scalar::<T>(wd as f64) * scalar::<T>(self.denominator as f64))
    }
}

impl<T: FloatingPoint> TriSrf<T> {
    /// Convert a Gregory patch into the rational Bezier patch describing the same surface
    ///
    /// The Gregory blend is rational with a common denominator of degree 6, so
    /// a Gregory patch of length `L` becomes a Bezier patch of length `L + 6`
    /// whose point type is the rational counterpart of the input.
    /// The weights of the three corner control points are zero, the corners
    /// themselves are reached as limits (see [`TriSrf::point_at`]).
    ///
    /// Only lengths 5, 6 and 7 have conversion tables, any other patch
    /// (including non Gregory ones) yields `None`.
    ///
    /// # Example
    /// ```
    /// use trisurf::prelude::*;
    ///
    /// let gregory = TriSrf::<f64>::new_gregory(5, PointType::E3);
    /// let bezier = gregory.gregory_to_bezier().unwrap();
    /// assert_eq!(bezier.kind(), GeometryKind::Bezier);
    /// assert_eq!(bezier.length(), 11);
    /// assert_eq!(bezier.point_type(), PointType::P3);
    ///
    /// assert!(TriSrf::<f64>::new_gregory(4, PointType::E3).gregory_to_bezier().is_none());
    /// ```
    pub fn gregory_to_bezier(&self) -> Option<Self> {
        if self.kind() != GeometryKind::Gregory {
            debug!("gregory conversion skipped for a {:?} patch", self.kind());
            return None;
        }
        let table: &[GregoryRow] = match self.length() {
            5 => &GREGORY_5_TO_BEZIER_11,
            6 => &GREGORY_6_TO_BEZIER_12,
            7 => &GREGORY_7_TO_BEZIER_13,
            length => {
                debug!("no gregory conversion table for length {}", length);
                return None;
            }
        };

        let source = self.coerce(self.point_type().with_rational(true));
        let mut bezier = Self::new_bezier(
            self.length() + GREGORY_LENGTH_INCREASE,
            source.point_type(),
        );
        for (src, dst) in source.channels().zip(bezier.channels_mut()) {
            for (value, row) in dst.iter_mut().zip(table) {
                *value = row.apply(src);
            }
        }
        *bezier.attributes_mut() = self.attributes().clone();
        debug!(
            "converted gregory patch of length {} to bezier of length {}",
            self.length(),
            bezier.length()
        );
        Some(bezier)
    }
}
