pub mod binomial;
pub mod floating_point;
pub mod transformable;

pub use binomial::*;
pub use floating_point::*;
pub use transformable::*;
