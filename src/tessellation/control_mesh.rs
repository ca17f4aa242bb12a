use itertools::Itertools;
use nalgebra::Point3;

use crate::{
    error::Result,
    misc::FloatingPoint,
    surface::{TriDirection, TriSrf},
};

impl<T: FloatingPoint> TriSrf<T> {
    /// The control net as polylines, one family per barycentric index held constant
    ///
    /// Lines of constant `i` come first, then constant `j` and constant `k`.
    /// The single point lines at the three corners are left out, so a patch of
    /// degree `n` yields `3 n` polylines. Gregory patches contribute their
    /// regular net only.
    pub fn control_mesh(&self) -> Result<Vec<Vec<Point3<T>>>> {
        self.ensure_defined()?;
        let n = self.degree();
        let lines = TriDirection::ALL
            .iter()
            .flat_map(|direction| (0..n).map(move |fixed| (*direction, fixed)))
            .map(|(direction, fixed)| {
                (0..=n - fixed)
                    .map(|r| {
                        let (i, j, k) = match direction {
                            TriDirection::U => (fixed, r, n - fixed - r),
                            TriDirection::V => (r, fixed, n - fixed - r),
                            TriDirection::W => (r, n - fixed - r, fixed),
                        };
                        self.euclidean_point(self.mesh_index(i, j, k))
                    })
                    .collect_vec()
            })
            .collect_vec();
        Ok(lines)
    }
}
