pub mod bezier_curve;
pub use bezier_curve::*;
