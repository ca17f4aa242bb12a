use std::ops::Index;

use nalgebra::convert;
use simba::scalar::SupersetOf;

use crate::misc::{scalar_usize, FloatingPoint};

/// Knot vector representation
/// Shared by the u, v and w directions of a triangular B-spline patch
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnotVector<T>(Vec<T>);

impl<T: FloatingPoint> KnotVector<T> {
    pub fn new(knots: Vec<T>) -> Self {
        Self(knots)
    }

    /// Create an open uniform knot vector of `length + order` knots
    /// the first and last `order` knots are clamped to 0 and 1,
    /// interior knots are spaced uniformly between them
    /// # Example
    /// ```
    /// use trisurf::prelude::KnotVector;
    /// let knots: KnotVector<f64> = KnotVector::open_uniform(4, 3);
    /// assert_eq!(knots.to_vec(), vec![0., 0., 0., 0.5, 1., 1., 1.]);
    /// ```
    pub fn open_uniform(length: usize, order: usize) -> Self {
        let interior = length.saturating_sub(order);
        let spans = scalar_usize::<T>(interior + 1);
        let mut knots = Vec::with_capacity(length + order);
        knots.extend(std::iter::repeat_n(T::zero(), order));
        for i in 1..=interior {
            knots.push(scalar_usize::<T>(i) / spans);
        }
        knots.extend(std::iter::repeat_n(T::one(), order));
        Self(knots)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.0.clone()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Get the parametric domain `[knot[order - 1], knot[len - order]]`
    pub fn domain(&self, order: usize) -> (T, T) {
        let order = order.max(1);
        (self.0[order - 1], self.0[self.0.len() - order])
    }

    /// Compare two knot vectors knot by knot
    pub fn same(&self, other: &Self, eps: T) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| (*a - *b).abs() <= eps)
    }

    /// Cast the knot vector to another floating point type
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> KnotVector<F> {
        KnotVector::new(self.0.iter().map(|v| convert(*v)).collect())
    }
}

impl<T> Index<usize> for KnotVector<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> FromIterator<T> for KnotVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
