/// A trait for geometry whose control points can be remapped in place.
/// Implemented for triangular patches and Bezier curves by 4x4 matrices.
pub trait Transformable<M>: Clone {
    fn transform(&mut self, transform: M);

    /// Return a transformed copy, leaving `self` untouched
    fn transformed(&self, transform: M) -> Self {
        let mut clone = self.clone();
        clone.transform(transform);
        clone
    }
}
