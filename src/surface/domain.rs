use crate::{
    bounding_box::BoundingBox,
    misc::FloatingPoint,
    surface::{GeometryKind, TriDirection, TriSrf},
};

impl<T: FloatingPoint> TriSrf<T> {
    /// Parametric domain `(u_min, u_max, v_min, v_max, w_min, w_max)`
    ///
    /// Bezier and Gregory patches span `[0, 1]` in every direction. A B-spline
    /// patch spans `[knot[order - 1], knot[length]]`, shared by all three directions.
    pub fn domain(&self) -> (T, T, T, T, T, T) {
        let (min, max) = match (self.kind(), self.knots()) {
            (GeometryKind::Bspline, Some(knots)) => knots.domain(self.order()),
            _ => (T::zero(), T::one()),
        };
        (min, max, min, max, min, max)
    }

    /// Check if `t` lies in the domain along `direction`
    pub fn param_in_domain(&self, t: T, direction: TriDirection) -> bool {
        let (u_min, u_max, v_min, v_max, w_min, w_max) = self.domain();
        let (min, max) = match direction {
            TriDirection::U => (u_min, u_max),
            TriDirection::V => (v_min, v_max),
            TriDirection::W => (w_min, w_max),
        };
        t >= min && t <= max
    }

    /// Check if `(u, v, w)` all lie in the domain
    pub fn params_in_domain(&self, u: T, v: T, w: T) -> bool {
        self.param_in_domain(u, TriDirection::U)
            && self.param_in_domain(v, TriDirection::V)
            && self.param_in_domain(w, TriDirection::W)
    }

    /// Axis aligned box of the control points, which bounds the surface
    /// Control points with a zero weight carry no position and are skipped.
    pub fn bounding_box(&self) -> Option<BoundingBox<T>> {
        let weights = self.weights();
        BoundingBox::from_points(
            (0..self.mesh_size())
                .filter(|i| weights.is_none_or(|w| w[*i] != T::zero()))
                .map(|i| self.euclidean_point(i)),
        )
    }

    /// Union of the bounding boxes of a list of patches
    pub fn list_bounding_box(list: &[Self]) -> Option<BoundingBox<T>> {
        list.iter()
            .filter_map(|s| s.bounding_box())
            .reduce(|a, b| a.union(&b))
    }
}
