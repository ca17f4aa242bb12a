#![allow(clippy::needless_range_loop)]

mod bounding_box;
mod convert;
mod curve;
mod error;
mod knot;
mod misc;
mod surface;
mod tessellation;

pub use error::*;

pub mod prelude {
    pub use crate::bounding_box::*;
    pub use crate::convert::*;
    pub use crate::curve::*;
    pub use crate::error::*;
    pub use crate::knot::*;
    pub use crate::misc::*;
    pub use crate::surface::*;
    pub use crate::tessellation::*;
}
