use crate::{
    error::{Result, TrngError},
    misc::FloatingPoint,
    surface::{GeometryKind, TriSrf},
};

impl<T: FloatingPoint> TriSrf<T> {
    /// Wrap a Bezier patch as a single span B-spline patch
    /// The B-spline gets `order == length` and an open knot vector `[0; order] ++ [1; order]`,
    /// B-spline patches are returned as they are.
    ///
    /// # Failures
    /// - `TrngError::GregoryUnsupported` for Gregory patches (convert them to Bezier first)
    /// - `TrngError::UndefinedGeometry` for undefined patches
    pub fn to_bspline(&self) -> Result<Self> {
        match self.kind() {
            GeometryKind::Bezier => Ok(self.relabel(GeometryKind::Bspline)),
            GeometryKind::Bspline => Ok(self.clone()),
            GeometryKind::Gregory => Err(TrngError::GregoryUnsupported),
            GeometryKind::Undefined => Err(TrngError::UndefinedGeometry),
        }
    }

    /// Express the patch in the Bezier basis
    /// - Bezier patches are returned as they are
    /// - single span B-spline patches (`order == length`) are unwrapped
    /// - Gregory patches go through [`TriSrf::gregory_to_bezier`]
    ///
    /// # Failures
    /// - `TrngError::BsplineUnsupported` for B-spline patches of more than one span
    /// - `TrngError::GregoryUnsupported` for Gregory patches without a conversion table
    /// - `TrngError::UndefinedGeometry` for undefined patches
    pub fn to_bezier(&self) -> Result<Self> {
        match self.kind() {
            GeometryKind::Bezier => Ok(self.clone()),
            GeometryKind::Bspline if self.order() == self.length() => {
                Ok(self.relabel(GeometryKind::Bezier))
            }
            GeometryKind::Bspline => Err(TrngError::BsplineUnsupported),
            GeometryKind::Gregory => self
                .gregory_to_bezier()
                .ok_or(TrngError::GregoryUnsupported),
            GeometryKind::Undefined => Err(TrngError::UndefinedGeometry),
        }
    }

    /// Same control points and attributes under another kind with default knots
    fn relabel(&self, kind: GeometryKind) -> Self {
        let mut relabeled = Self::new(kind, self.point_type(), self.length());
        for (src, dst) in self.channels().zip(relabeled.channels_mut()) {
            dst.copy_from_slice(src);
        }
        *relabeled.attributes_mut() = self.attributes().clone();
        relabeled
    }
}
