use crate::{
    error::{Result, TrngError},
    misc::{scalar_usize, FloatingPoint},
    surface::{mesh_index, GeometryKind, TriSrf},
};

impl<T: FloatingPoint> TriSrf<T> {
    /// Raise the degree of a Bezier patch by one without changing its shape
    ///
    /// The new control point `(i, j, k)` of degree `n + 1` is
    /// `(i P(i-1,j,k) + j P(i,j-1,k) + k P(i,j,k-1)) / (n + 1)`.
    ///
    /// # Failures
    /// - `TrngError::GregoryUnsupported` for Gregory patches
    /// - `TrngError::BsplineUnsupported` for B-spline patches
    /// - `TrngError::UndefinedGeometry` for undefined patches
    pub fn elevate_degree(&self) -> Result<Self> {
        match self.kind() {
            GeometryKind::Bezier => {}
            GeometryKind::Gregory => return Err(TrngError::GregoryUnsupported),
            GeometryKind::Bspline => return Err(TrngError::BsplineUnsupported),
            GeometryKind::Undefined => return Err(TrngError::UndefinedGeometry),
        }

        let length = self.length();
        let elevated_degree = length;
        let denominator = scalar_usize::<T>(elevated_degree);
        let mut elevated = Self::new_bezier(length + 1, self.point_type());
        for (src, dst) in self.channels().zip(elevated.channels_mut()) {
            for i in 0..=elevated_degree {
                for j in 0..=elevated_degree - i {
                    let k = elevated_degree - i - j;
                    let mut sum = T::zero();
                    if i > 0 {
                        sum += scalar_usize::<T>(i) * src[mesh_index(length, i - 1, j)];
                    }
                    if j > 0 {
                        sum += scalar_usize::<T>(j) * src[mesh_index(length, i, j - 1)];
                    }
                    if k > 0 {
                        sum += scalar_usize::<T>(k) * src[mesh_index(length, i, j)];
                    }
                    dst[mesh_index(length + 1, i, j)] = sum / denominator;
                }
            }
        }
        Ok(elevated)
    }
}
