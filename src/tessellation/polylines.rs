use log::debug;
use nalgebra::Point3;

use crate::{
    error::{Result, TrngError},
    misc::{scalar_usize, FloatingPoint},
    surface::{TriDirection, TriSrf},
    tessellation::{iso_params, PolylineMethod, PolylineOptions},
};

impl<T: FloatingPoint> TriSrf<T> {
    /// Sample isoparametric polylines of constant u, v and w
    ///
    /// `options.isocurves[d]` evenly spaced isolines are drawn in direction `d`,
    /// each with `options.samples` points (at least 2) spread uniformly over the
    /// free parameter. Along a U isoline the samples run from `v = 0` to `w = 0`,
    /// along V and W isolines from the `u = 0` end to the other one.
    /// Gregory and single span B-spline patches are converted to Bezier first.
    ///
    /// # Failures
    /// - `TrngError::SamplingMethodUnsupported` for any method but `PolylineMethod::Uniform`
    pub fn to_polylines(&self, options: &PolylineOptions) -> Result<Vec<Vec<Point3<T>>>> {
        if options.method != PolylineMethod::Uniform {
            return Err(TrngError::SamplingMethodUnsupported);
        }
        let surface = self.polynomial_patch()?;
        let samples = options.samples.max(2);
        let steps = scalar_usize::<T>(samples - 1);

        let polylines = TriDirection::ALL
            .iter()
            .zip(options.isocurves)
            .flat_map(|(direction, count)| {
                iso_params::<T>(count)
                    .into_iter()
                    .map(move |t| (*direction, t))
            })
            .map(|(direction, t)| {
                (0..samples)
                    .map(|s| {
                        let (u, v, w) = iso_point(direction, t, scalar_usize::<T>(s) / steps);
                        surface.point_at(u, v, w)
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("sampled {} isoparametric polylines", polylines.len());
        Ok(polylines)
    }
}

/// Barycentric point at the fraction `s` along the isoline where `direction` equals `t`
///
/// The free parameters split `1 - t` as `(1 - t) s` and `(1 - t) (1 - s)`:
/// v and w for U isolines, u and w for V isolines, u and v for W isolines.
pub(crate) fn iso_point<T: FloatingPoint>(direction: TriDirection, t: T, s: T) -> (T, T, T) {
    let rest = T::one() - t;
    let a = rest * s;
    let b = rest * (T::one() - s);
    match direction {
        TriDirection::U => (t, a, b),
        TriDirection::V => (a, t, b),
        TriDirection::W => (a, b, t),
    }
}
