use log::debug;

use crate::{
    error::{Result, TrngError},
    misc::{scalar, scalar_usize, FloatingPoint},
    surface::{mesh_index, GeometryKind, TriDirection, TriSrf},
};

impl<T: FloatingPoint> TriSrf<T> {
    /// Derivative surface along a principal direction
    ///
    /// The principal derivative is the directional derivative with the blend
    /// vector `(1, -1/2, -1/2)` for U, `(-1/2, 1, -1/2)` for V and
    /// `(-1/2, -1/2, 1)` for W. See [`TriSrf::directional_derive`].
    pub fn derive(&self, direction: TriDirection) -> Result<Self> {
        let [a, b, c] = direction.blend();
        self.directional_derive([scalar(a), scalar(b), scalar(c)])
    }

    /// Derivative surface along a barycentric direction `d` with `d[0] + d[1] + d[2] == 0`
    ///
    /// A Bezier patch of length `n + 1` yields a Bezier patch of length `n`
    /// whose control point `(i, j, k)` is
    /// `n * (d[0] P(i+1,j,k) + d[1] P(i,j+1,k) + d[2] P(i,j,k+1))`.
    /// A single point patch yields a single zero point.
    ///
    /// # Failures
    /// - `TrngError::GregoryUnsupported` for Gregory patches (convert them first)
    /// - `TrngError::BsplineUnsupported` for B-spline patches
    /// - `TrngError::UndefinedGeometry` for undefined patches
    pub fn directional_derive(&self, direction: [T; 3]) -> Result<Self> {
        match self.kind() {
            GeometryKind::Bezier => Ok(self.bezier_directional_derive(direction)),
            GeometryKind::Gregory => Err(TrngError::GregoryUnsupported),
            GeometryKind::Bspline => Err(TrngError::BsplineUnsupported),
            GeometryKind::Undefined => Err(TrngError::UndefinedGeometry),
        }
    }

    fn bezier_directional_derive(&self, direction: [T; 3]) -> Self {
        let length = self.length();
        if length < 2 {
            let mut zero = Self::new_bezier(1, self.point_type());
            zero.channels_mut().for_each(|c| c.fill(T::zero()));
            return zero;
        }

        let degree = self.degree();
        let scale = scalar_usize::<T>(degree);
        let mut derived = Self::new_bezier(length - 1, self.point_type());
        debug!(
            "derive bezier triangle of length {} along {:?}",
            length, direction
        );

        for (src, dst) in self.channels().zip(derived.channels_mut()) {
            for i in 0..length - 1 {
                for j in 0..length - 1 - i {
                    let k = degree - 1 - i - j;
                    let pu = src[self.mesh_index(i + 1, j, k)];
                    let pv = src[self.mesh_index(i, j + 1, k)];
                    let pw = src[self.mesh_index(i, j, k + 1)];
                    dst[mesh_index(length - 1, i, j)] =
                        (direction[0] * pu + direction[1] * pv + direction[2] * pw) * scale;
                }
            }
        }
        derived
    }
}
