use log::debug;
use nalgebra::Vector2;

use crate::{
    error::{Result, TrngError},
    misc::{scalar_usize, FloatingPoint},
    surface::TriSrf,
    tessellation::{PolygonOptions, Tessellation, TriSrfTessellation},
};

impl<T: FloatingPoint> TriSrf<T> {
    /// Tessellate the patch on a uniform triangular parameter grid
    ///
    /// With `f = options.fineness` (at least 1) the grid vertex `(i, j)` sits
    /// at `(i / f, j / f, (f - i - j) / f)`. Rows of constant `u` are visited in
    /// turn and each row closes `2 (f - i) + 1` triangles against the previous
    /// one, `f * f` counter clockwise triangles in total.
    /// Gregory and single span B-spline patches are converted to Bezier first.
    ///
    /// # Example
    /// ```
    /// use trisurf::prelude::*;
    /// use nalgebra::Point3;
    ///
    /// let flat = TriSrf::from_points(2, &[
    ///     Point3::new(0., 0., 0.),
    ///     Point3::new(0., 1., 0.),
    ///     Point3::new(1., 0., 0.),
    /// ]).unwrap();
    /// let mesh = flat.to_polygons(&PolygonOptions::default().with_fineness(4)).unwrap();
    /// assert_eq!(mesh.faces().len(), 16);
    /// assert_eq!(mesh.points().len(), 15);
    /// ```
    pub fn to_polygons(&self, options: &PolygonOptions) -> Result<TriSrfTessellation<T>> {
        let surface = self.polynomial_patch()?;
        let fineness = options.fineness.max(1);
        let f = scalar_usize::<T>(fineness);
        let mut tess = TriSrfTessellation::default();

        let push_vertex = |tess: &mut TriSrfTessellation<T>, i: usize, j: usize| {
            let u = scalar_usize::<T>(i) / f;
            let v = scalar_usize::<T>(j) / f;
            let w = scalar_usize::<T>(fineness - i - j) / f;
            tess.points.push(surface.point_at(u, v, w)?);
            if options.normals {
                tess.normals.push(surface.normal_at(u, v)?);
            }
            if options.uvs {
                tess.uvs.push(Vector2::new(u, v));
            }
            Ok::<usize, TrngError>(tess.points.len() - 1)
        };

        let mut previous = (0..=fineness)
            .map(|j| push_vertex(&mut tess, 0, j))
            .collect::<Result<Vec<_>>>()?;

        for i in 1..=fineness {
            let current = (0..=fineness - i)
                .map(|j| push_vertex(&mut tess, i, j))
                .collect::<Result<Vec<_>>>()?;
            for j in 0..current.len() {
                tess.faces.push([previous[j], current[j], previous[j + 1]]);
                if j + 1 < current.len() {
                    tess.faces.push([previous[j + 1], current[j], current[j + 1]]);
                }
            }
            previous = current;
        }

        debug!(
            "tessellated triangular patch into {} points and {} triangles",
            tess.points.len(),
            tess.faces.len()
        );
        Ok(tess)
    }
}

impl<T: FloatingPoint> Tessellation<PolygonOptions> for TriSrf<T> {
    type Output = Result<TriSrfTessellation<T>>;

    fn tessellate(&self, options: PolygonOptions) -> Self::Output {
        self.to_polygons(&options)
    }
}
