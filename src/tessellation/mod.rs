pub mod control_mesh;
pub mod iso_curves;
pub mod polygons;
pub mod polylines;
pub mod tessellation_options;
pub mod tri_srf_tessellation;

pub use tessellation_options::*;
pub use tri_srf_tessellation::*;

use std::borrow::Cow;

use crate::{
    error::Result,
    misc::{scalar_usize, FloatingPoint},
    surface::{GeometryKind, TriSrf},
};

/// A trait for tessellating a shape
pub trait Tessellation<Opt> {
    type Output;
    fn tessellate(&self, options: Opt) -> Self::Output;
}

impl<T: FloatingPoint> TriSrf<T> {
    /// The patch in the Bezier basis, converting Gregory and single span B-spline patches
    pub(crate) fn polynomial_patch(&self) -> Result<Cow<'_, Self>> {
        match self.kind() {
            GeometryKind::Bezier => Ok(Cow::Borrowed(self)),
            _ => self.to_bezier().map(Cow::Owned),
        }
    }
}

/// `count` evenly spaced parameters in `[0, 1]`, a single one sits at the middle
pub(crate) fn iso_params<T: FloatingPoint>(count: usize) -> Vec<T> {
    match count {
        0 => vec![],
        1 => vec![nalgebra::convert(0.5)],
        n => (0..n)
            .map(|i| scalar_usize::<T>(i) / scalar_usize::<T>(n - 1))
            .collect(),
    }
}
