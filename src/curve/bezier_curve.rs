use std::ops::Add;

use nalgebra::{convert, DVector, Matrix4, Point3, Vector4};
use simba::scalar::SupersetOf;

use crate::{
    misc::{binomial, scalar, scalar_usize, FloatingPoint, Transformable},
    surface::PointType,
};

/// Bezier curve representation
/// Control points are homogeneous vectors `[w?, x, y, (z)]` laid out like the
/// control points of a triangular patch of the same point type.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierCurve<T: FloatingPoint> {
    point_type: PointType,
    control_points: Vec<DVector<T>>,
}

impl<T: FloatingPoint> BezierCurve<T> {
    /// Create a new Bezier curve
    /// # Failures
    /// - if there is no control point
    /// - if a control point does not have `point_type.channels()` entries
    pub fn try_new(point_type: PointType, control_points: Vec<DVector<T>>) -> anyhow::Result<Self> {
        anyhow::ensure!(!control_points.is_empty(), "Too few control points for curve");
        for (i, p) in control_points.iter().enumerate() {
            anyhow::ensure!(
                p.len() == point_type.channels(),
                "Invalid size of control point {}, got {}, expected {}",
                i,
                p.len(),
                point_type.channels()
            );
        }
        Ok(Self {
            point_type,
            control_points,
        })
    }

    /// Crate internal constructor for control points already known to be consistent
    pub(crate) fn new(point_type: PointType, control_points: Vec<DVector<T>>) -> Self {
        debug_assert!(!control_points.is_empty());
        debug_assert!(control_points
            .iter()
            .all(|p| p.len() == point_type.channels()));
        Self {
            point_type,
            control_points,
        }
    }

    /// Create a curve from a flat buffer of homogeneous control points stored one after another
    ///
    /// # Example
    /// ```
    /// use trisurf::prelude::*;
    ///
    /// let buffer = [0., 0., 1., 2., 2., 0.];
    /// let curve = BezierCurve::from_flat(PointType::E2, &buffer).unwrap();
    /// assert_eq!(curve.degree(), 2);
    /// let p = curve.point_at(0.5);
    /// assert_eq!((p.x, p.y), (1., 1.));
    /// ```
    pub fn from_flat(point_type: PointType, buffer: &[T]) -> anyhow::Result<Self> {
        let channels = point_type.channels();
        anyhow::ensure!(
            buffer.len() % channels == 0,
            "Buffer of {} scalars does not hold whole {} points",
            buffer.len(),
            point_type
        );
        let control_points = buffer
            .chunks_exact(channels)
            .map(DVector::from_column_slice)
            .collect();
        Self::try_new(point_type, control_points)
    }

    /// Create an E3 curve through the given Euclidean control points
    pub fn from_points(points: &[Point3<T>]) -> anyhow::Result<Self> {
        let control_points = points
            .iter()
            .map(|p| DVector::from_column_slice(p.coords.as_slice()))
            .collect();
        Self::try_new(PointType::E3, control_points)
    }

    pub fn point_type(&self) -> PointType {
        self.point_type
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn control_points(&self) -> &[DVector<T>] {
        &self.control_points
    }

    /// Control points projected to 3D, zero weights leave the coordinates as they are
    pub fn dehomogenized_control_points(&self) -> Vec<Point3<T>> {
        self.control_points
            .iter()
            .map(|p| self.project(p))
            .collect()
    }

    /// Evaluate the curve at `t` in `[0, 1]` as a homogeneous vector
    pub fn eval(&self, t: T) -> DVector<T> {
        let n = self.degree();
        let s = T::one() - t;
        let mut point = DVector::zeros(self.point_type.channels());
        for (i, p) in self.control_points.iter().enumerate() {
            let b = scalar::<T>(binomial(n, i)) * t.powi(i as i32) * s.powi((n - i) as i32);
            point += p * b;
        }
        point
    }

    /// Evaluate the curve at `t` and project the result to 3D
    pub fn point_at(&self, t: T) -> Point3<T> {
        self.project(&self.eval(t))
    }

    /// Raise the degree by one without changing the shape
    pub fn elevate_degree(&self) -> Self {
        let n = self.degree();
        let denominator = scalar_usize::<T>(n + 1);
        let last = &self.control_points[n];
        let mut control_points = Vec::with_capacity(n + 2);
        control_points.push(self.control_points[0].clone());
        for i in 1..=n {
            let a = scalar_usize::<T>(i) / denominator;
            let prev = &self.control_points[i - 1];
            let cur = &self.control_points[i];
            control_points.push(prev * a + cur * (T::one() - a));
        }
        control_points.push(last.clone());
        Self {
            point_type: self.point_type,
            control_points,
        }
    }

    /// Raise the degree until it reaches `degree`, lower targets return a clone
    pub fn elevate_to(&self, degree: usize) -> Self {
        let mut curve = self.clone();
        while curve.degree() < degree {
            curve = curve.elevate_degree();
        }
        curve
    }

    /// Multiply every homogeneous coordinate by `factor`
    pub fn scale(&self, factor: T) -> Self {
        Self {
            point_type: self.point_type,
            control_points: self.control_points.iter().map(|p| p * factor).collect(),
        }
    }

    /// Convert the control points into another point type, see [`crate::prelude::TriSrf::coerce`]
    pub fn coerce(&self, point_type: PointType) -> Self {
        if point_type == self.point_type {
            return self.clone();
        }
        let control_points = self
            .control_points
            .iter()
            .map(|p| {
                let (w, coords) = if self.point_type.is_rational() {
                    (p[0], p.rows(1, self.point_type.dim()))
                } else {
                    (T::one(), p.rows(0, self.point_type.dim()))
                };
                let mut coerced = DVector::zeros(point_type.channels());
                let offset = if point_type.is_rational() {
                    coerced[0] = w;
                    1
                } else {
                    0
                };
                let w = if point_type.is_rational() || w == T::zero() {
                    T::one()
                } else {
                    w
                };
                for axis in 0..point_type.dim().min(coords.len()) {
                    coerced[axis + offset] = coords[axis] / w;
                }
                coerced
            })
            .collect();
        Self {
            point_type,
            control_points,
        }
    }

    fn project(&self, p: &DVector<T>) -> Point3<T> {
        let (w, offset) = if self.point_type.is_rational() && p[0] != T::zero() {
            (p[0], 1)
        } else if self.point_type.is_rational() {
            (T::one(), 1)
        } else {
            (T::one(), 0)
        };
        let mut point = Point3::origin();
        for axis in 0..self.point_type.dim() {
            point[axis] = p[axis + offset] / w;
        }
        point
    }

    /// Cast the curve to a curve with another floating point type
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> BezierCurve<F> {
        BezierCurve {
            point_type: self.point_type,
            control_points: self
                .control_points
                .iter()
                .map(|p| p.map(|x| convert::<T, F>(x)))
                .collect(),
        }
    }
}

/// Sum two curves control point by control point
/// The lower degree curve is raised and both are coerced to a common point type first.
impl<T: FloatingPoint> Add for &BezierCurve<T> {
    type Output = BezierCurve<T>;

    fn add(self, rhs: Self) -> Self::Output {
        let point_type = self.point_type.merge(&rhs.point_type);
        let degree = self.degree().max(rhs.degree());
        let a = self.coerce(point_type).elevate_to(degree);
        let b = rhs.coerce(point_type).elevate_to(degree);
        BezierCurve {
            point_type,
            control_points: a
                .control_points
                .iter()
                .zip(b.control_points.iter())
                .map(|(p, q)| p + q)
                .collect(),
        }
    }
}

/// Enable to transform a Bezier curve by a given 4x4 matrix
impl<'a, T: FloatingPoint> Transformable<&'a Matrix4<T>> for BezierCurve<T> {
    fn transform(&mut self, transform: &'a Matrix4<T>) {
        let rational = self.point_type.is_rational();
        let offset = usize::from(rational);
        let dim = self.point_type.dim();
        for p in self.control_points.iter_mut() {
            let w = if rational { p[0] } else { T::one() };
            let d = if w == T::zero() { T::one() } else { w };
            let mut v = Vector4::new(T::zero(), T::zero(), T::zero(), T::one());
            for axis in 0..dim {
                v[axis] = p[axis + offset] / d;
            }
            let transformed = transform * v;
            for axis in 0..dim {
                p[axis + offset] = transformed[axis] / transformed[3] * w;
            }
        }
    }
}
