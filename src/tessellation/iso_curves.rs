use log::debug;

use crate::{
    curve::BezierCurve,
    error::{Result, TrngError},
    misc::{Binomial, FloatingPoint},
    surface::{TriDirection, TriSrf},
    tessellation::iso_params,
};

impl<T: FloatingPoint> TriSrf<T> {
    /// Isoparametric curves of constant u, v and w as Bezier curves
    /// `counts[d]` evenly spaced curves are extracted in direction `d`, see [`TriSrf::iso_curve_at`].
    pub fn iso_curves(&self, counts: [usize; 3]) -> Result<Vec<BezierCurve<T>>> {
        let surface = self.polynomial_patch()?;
        let mut binomial = Binomial::new();
        let curves = TriDirection::ALL
            .iter()
            .zip(counts)
            .flat_map(|(direction, count)| {
                iso_params::<T>(count)
                    .into_iter()
                    .map(move |t| (*direction, t))
            })
            .map(|(direction, t)| surface.bezier_iso_curve(t, direction, &mut binomial))
            .collect::<Result<Vec<_>>>()?;
        debug!("extracted {} isoparametric curves", curves.len());
        Ok(curves)
    }

    /// The isoparametric curve where `direction` equals `t`
    ///
    /// For a U isoline at `u = t` the curve is
    /// `sum_i C(n, i) t^i (1 - t)^(n - i) R_i(s)` where `R_i` is the degree
    /// `n - i` Bezier curve through the control points `(i, j, n - i - j)`,
    /// `j = 0..=n - i`. Terms are summed with degree raising. V and W isolines
    /// hold `j` and `k` fixed instead. The curve parameter follows
    /// the sampling order of [`TriSrf::to_polylines`].
    ///
    /// # Failures
    /// - `TrngError::ParameterOutOfDomain` if `t` is outside `[0, 1]`
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
    /// let edge = flat.iso_curve_at(0., TriDirection::U).unwrap();
    /// assert_eq!(edge.point_at(0.5), Point3::new(0., 0.5, 0.));
    /// assert!(flat.iso_curve_at(1.5, TriDirection::U).is_err());
    /// ```
    pub fn iso_curve_at(&self, t: T, direction: TriDirection) -> Result<BezierCurve<T>> {
        let surface = self.polynomial_patch()?;
        surface.bezier_iso_curve(t, direction, &mut Binomial::new())
    }

    /// The three edge curves at `u = 0`, `v = 0` and `w = 0`
    pub fn boundary_curves(&self) -> Result<[BezierCurve<T>; 3]> {
        let surface = self.polynomial_patch()?;
        let mut binomial = Binomial::new();
        Ok([
            surface.bezier_iso_curve(T::zero(), TriDirection::U, &mut binomial)?,
            surface.bezier_iso_curve(T::zero(), TriDirection::V, &mut binomial)?,
            surface.bezier_iso_curve(T::zero(), TriDirection::W, &mut binomial)?,
        ])
    }

    fn bezier_iso_curve(
        &self,
        t: T,
        direction: TriDirection,
        binomial: &mut Binomial<T>,
    ) -> Result<BezierCurve<T>> {
        if !(T::zero()..=T::one()).contains(&t) {
            return Err(TrngError::ParameterOutOfDomain {
                value: t.to_f64().unwrap_or(f64::NAN),
                min: 0.,
                max: 1.,
            });
        }

        let n = self.degree();
        let s = T::one() - t;
        (0..self.length())
            .map(|i| {
                let control_points = (0..=n - i)
                    .map(|r| {
                        let (a, b, c) = match direction {
                            TriDirection::U => (i, r, n - i - r),
                            TriDirection::V => (r, i, n - i - r),
                            TriDirection::W => (r, n - i - r, i),
                        };
                        self.control_point(self.mesh_index(a, b, c))
                    })
                    .collect();
                let row = BezierCurve::new(self.point_type(), control_points);
                let coefficient = binomial.get(n, i) * t.powi(i as i32) * s.powi((n - i) as i32);
                row.scale(coefficient)
            })
            .reduce(|acc, term| &acc + &term)
            .ok_or(TrngError::UndefinedGeometry)
    }
}
