use nalgebra::{Point3, Vector3};
use simba::scalar::SupersetOf;

use crate::misc::{scalar, FloatingPoint};

/// An axis aligned box in 3D space.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T: FloatingPoint> {
    min: Vector3<T>,
    max: Vector3<T>,
}

impl<T: FloatingPoint> BoundingBox<T> {
    /// Create a new bounding box from two opposite corners given in any order.
    pub fn new(a: Vector3<T>, b: Vector3<T>) -> Self {
        Self {
            min: a.zip_map(&b, |x, y| x.min(y)),
            max: a.zip_map(&b, |x, y| x.max(y)),
        }
    }

    /// Smallest box holding every point of `iter`
    /// Returns `None` for an empty iterator.
    ///
    /// # Examples
    /// ```
    /// use nalgebra::Point3;
    /// use trisurf::prelude::BoundingBox;
    ///
    /// let bb = BoundingBox::from_points([
    ///     Point3::new(0., 2., 1.),
    ///     Point3::new(1., -1., 0.),
    /// ])
    /// .unwrap();
    /// assert_eq!(bb.min().y, -1.);
    /// assert_eq!(bb.max().y, 2.);
    /// assert!(BoundingBox::<f64>::from_points([]).is_none());
    /// ```
    pub fn from_points<I: IntoIterator<Item = Point3<T>>>(iter: I) -> Option<Self> {
        iter.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Self {
                    min: p.coords,
                    max: p.coords,
                },
                Some(bb) => Self {
                    min: bb.min.zip_map(&p.coords, |x, y| x.min(y)),
                    max: bb.max.zip_map(&p.coords, |x, y| x.max(y)),
                },
            })
        })
    }

    pub fn min(&self) -> &Vector3<T> {
        &self.min
    }

    pub fn max(&self) -> &Vector3<T> {
        &self.max
    }

    pub fn center(&self) -> Vector3<T> {
        (self.min + self.max) * scalar::<T>(0.5)
    }

    pub fn size(&self) -> Vector3<T> {
        self.max - self.min
    }

    /// Smallest box holding both boxes
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.zip_map(&other.min, |x, y| x.min(y)),
            max: self.max.zip_map(&other.max, |x, y| x.max(y)),
        }
    }

    /// Check if the bounding box intersects with another bounding box.
    /// Both boxes are grown by `tolerance` (machine epsilon if `None`).
    pub fn intersects(&self, other: &Self, tolerance: Option<T>) -> bool {
        let tolerance = tolerance.unwrap_or(T::default_epsilon());
        (0..3).all(|i| {
            self.min[i] - tolerance <= other.max[i] + tolerance
                && other.min[i] - tolerance <= self.max[i] + tolerance
        })
    }

    /// Check if the bounding box grown by `tolerance` contains a point.
    /// # Examples
    /// ```
    /// use nalgebra::{Point3, Vector3};
    /// use trisurf::prelude::BoundingBox;
    /// let bb = BoundingBox::new(Vector3::from_element(0.), Vector3::from_element(1.));
    /// assert!(bb.contains(&Point3::new(0.5, 0.5, 0.5), 0.));
    /// assert!(bb.contains(&Point3::new(0., 0.5, 1.0), 0.));
    /// assert!(!bb.contains(&Point3::new(-1e-8, 0.5, 0.5), 0.));
    /// assert!(bb.contains(&Point3::new(-1e-8, 0.5, 0.5), 1e-6));
    /// ```
    pub fn contains(&self, point: &Point3<T>, tolerance: T) -> bool {
        (0..3).all(|i| self.min[i] - tolerance <= point[i] && point[i] <= self.max[i] + tolerance)
    }

    /// Cast the bounding box to another floating point type
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> BoundingBox<F> {
        BoundingBox {
            min: self.min.cast(),
            max: self.max.cast(),
        }
    }
}
