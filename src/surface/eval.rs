use log::warn;
use nalgebra::{DVector, Point3, Vector3};

use crate::{
    error::{Result, TrngError},
    misc::{choose_weight, scalar, FloatingPoint},
    surface::{GeometryKind, TriSrf},
};

/// Parametric step of the finite difference normal
const NORMAL_EPS: f64 = 1e-5;

impl<T: FloatingPoint> TriSrf<T> {
    /// Evaluate the surface at barycentric parameters `(u, v, w)`
    /// Returns the homogeneous point `[w?, x, y, (z)]`, weight first for rational patches.
    ///
    /// # Failures
    /// - `TrngError::BsplineUnsupported` for B-spline patches
    /// - `TrngError::GregoryUnsupported` for Gregory patches (convert them first)
    /// - `TrngError::UndefinedGeometry` for undefined patches
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
    /// let p = flat.eval(0.5, 0.5, 0.).unwrap();
    /// assert_eq!(p.as_slice(), &[0.5, 0.5, 0.]);
    /// ```
    pub fn eval(&self, u: T, v: T, w: T) -> Result<DVector<T>> {
        match self.kind() {
            GeometryKind::Bezier => Ok(self.bezier_eval(u, v, w)),
            GeometryKind::Bspline => Err(TrngError::BsplineUnsupported),
            GeometryKind::Gregory => Err(TrngError::GregoryUnsupported),
            GeometryKind::Undefined => Err(TrngError::UndefinedGeometry),
        }
    }

    /// Evaluate the surface at `(u, v, 1 - u - v)`
    pub fn eval2(&self, u: T, v: T) -> Result<DVector<T>> {
        self.eval(u, v, T::one() - u - v)
    }

    /// Evaluate the surface and project the result to 3D
    ///
    /// Where the weight of a rational patch vanishes, as it does at the corners
    /// of a converted Gregory patch, the point is taken as the limit approached
    /// from the centroid of the domain.
    pub fn point_at(&self, u: T, v: T, w: T) -> Result<Point3<T>> {
        let p = self.eval(u, v, w)?;
        if !self.is_rational() || p[0] != T::zero() {
            return Ok(self.project(&p));
        }

        let t = T::default_epsilon().sqrt();
        let third = scalar::<T>(1. / 3.);
        let pull = |x: T| x * (T::one() - t) + third * t;
        let p = self.eval(pull(u), pull(v), pull(w))?;
        Ok(self.project(&p))
    }

    /// Evaluate the surface at `(u, v, 1 - u - v)` and project the result to 3D
    pub fn point_at2(&self, u: T, v: T) -> Result<Point3<T>> {
        self.point_at(u, v, T::one() - u - v)
    }

    /// Unit normal at `(u, v, 1 - u - v)`
    ///
    /// Tangents are approximated by finite differences, stepping into the
    /// parametric domain near its upper bounds. A degenerate normal is reported
    /// as the zero vector.
    pub fn normal_at(&self, u: T, v: T) -> Result<Vector3<T>> {
        let (_, u_max, _, v_max, _, _) = self.domain();
        let eps = scalar::<T>(NORMAL_EPS);
        let p = self.point_at2(u, v)?;

        let du = if u + eps > u_max { -eps } else { eps };
        let pu = self.point_at2(u + du, v)?;
        let tu = (pu - p) / du;

        let dv = if v + eps > v_max { -eps } else { eps };
        let pv = self.point_at2(u, v + dv)?;
        let tv = (pv - p) / dv;

        let normal = tu.cross(&tv);
        match normal.try_normalize(T::default_epsilon()) {
            Some(n) => Ok(n),
            None => {
                warn!("degenerate normal at ({:?}, {:?})", u, v);
                Ok(Vector3::zeros())
            }
        }
    }

    /// Bernstein sum over the triangular net, see [`choose_weight`]
    fn bezier_eval(&self, u: T, v: T, w: T) -> DVector<T> {
        let length = self.length();
        let degree = self.degree();
        let mut point = DVector::<T>::zeros(self.point_type().channels());

        let mut ui = T::one();
        for i in 0..length {
            let mut vj = T::one();
            for j in 0..length - i {
                let k = degree - i - j;
                let mut wk = T::one();
                for _ in 0..k {
                    wk *= w;
                }

                let b = choose_weight::<T>(i, j, degree) * ui * vj * wk;
                let index = self.mesh_index(i, j, k);
                for (c, channel) in self.channels().enumerate() {
                    point[c] += channel[index] * b;
                }
                vj *= v;
            }
            ui *= u;
        }
        point
    }

    /// Project a homogeneous evaluation result of this patch to 3D
    pub(crate) fn project(&self, p: &DVector<T>) -> Point3<T> {
        let (w, offset) = if self.is_rational() {
            (p[0], 1)
        } else {
            (T::one(), 0)
        };
        let mut point = Point3::origin();
        for axis in 0..self.point_type().dim() {
            point[axis] = p[axis + offset] / w;
        }
        point
    }
}
