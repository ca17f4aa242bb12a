use std::fmt;

use nalgebra::{convert, DVector, Matrix4, Point3, Vector3, Vector4};
use simba::scalar::SupersetOf;

use crate::{
    error::{Result, TrngError},
    knot::KnotVector,
    misc::{FloatingPoint, Transformable},
    surface::{Attribute, Attributes, GeometryKind, PointType},
};

/// Number of extra interior points a Gregory patch stores after its triangular net
pub const GREGORY_EXTRA_POINTS: usize = 3;

/// Number of control points of a triangular net with `length` points along an edge
/// # Example
/// ```
/// use trisurf::prelude::triangular_mesh_size;
/// assert_eq!(triangular_mesh_size(1), 1);
/// assert_eq!(triangular_mesh_size(4), 10);
/// ```
pub fn triangular_mesh_size(length: usize) -> usize {
    length * (length + 1) / 2
}

/// Flat index of the control point `(i, j, length - 1 - i - j)`
///
/// Rows are ordered by increasing `i`, row `i` holds `length - i` entries
/// for `j = 0..length - i`, so `index = i * length - i * (i - 1) / 2 + j`.
/// Every algorithm of the crate addresses control points through this function.
/// # Example
/// ```
/// use trisurf::prelude::mesh_index;
/// assert_eq!(mesh_index(3, 0, 2), 2);
/// assert_eq!(mesh_index(3, 1, 0), 3);
/// assert_eq!(mesh_index(3, 2, 0), 5);
/// ```
#[inline]
pub fn mesh_index(length: usize, i: usize, j: usize) -> usize {
    debug_assert!(i + j < length, "({i}, {j}) is outside a net of length {length}");
    i * (2 * length + 1 - i) / 2 + j
}

/// Triangular freeform surface representation
/// Bezier and Gregory patches are fully supported, B-spline patches carry
/// their knot vector but every basis-dependent operation rejects them.
///
/// Control points are stored channel by channel: channel 0 holds the rational
/// weights (only for rational point types) and channels `1..=dim` the
/// coordinates, each as a flat array addressed by [`mesh_index`].
/// Coordinates of rational patches are stored premultiplied by the weight.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriSrf<T: FloatingPoint> {
    kind: GeometryKind,
    point_type: PointType,
    /// number of control points along one edge
    length: usize,
    /// basis order, equal to `length` for Bezier and Gregory patches
    order: usize,
    knots: Option<KnotVector<T>>,
    weights: Option<Vec<T>>,
    coords: Vec<Vec<T>>,
    attributes: Attributes,
}

impl<T: FloatingPoint> TriSrf<T> {
    /// Create a zero filled patch of the given kind
    /// B-spline patches get `order == length` and an open uniform knot vector
    pub fn new(kind: GeometryKind, point_type: PointType, length: usize) -> Self {
        let knots = match kind {
            GeometryKind::Bspline => Some(KnotVector::open_uniform(length, length)),
            _ => None,
        };
        Self::allocate(kind, point_type, length, length, knots)
    }

    pub fn new_bezier(length: usize, point_type: PointType) -> Self {
        Self::new(GeometryKind::Bezier, point_type, length)
    }

    pub fn new_gregory(length: usize, point_type: PointType) -> Self {
        Self::new(GeometryKind::Gregory, point_type, length)
    }

    /// Create a B-spline patch with an open uniform knot vector of `length + order` knots
    /// # Failures
    /// - `TrngError::WrongOrder` if `length < order`
    pub fn new_bspline(length: usize, order: usize, point_type: PointType) -> Result<Self> {
        if length < order {
            return Err(TrngError::WrongOrder { length, order });
        }
        let knots = KnotVector::open_uniform(length, order);
        Ok(Self::allocate(
            GeometryKind::Bspline,
            point_type,
            length,
            order,
            Some(knots),
        ))
    }

    fn allocate(
        kind: GeometryKind,
        point_type: PointType,
        length: usize,
        order: usize,
        knots: Option<KnotVector<T>>,
    ) -> Self {
        let size = Self::mesh_size_of(kind, length);
        Self {
            kind,
            point_type,
            length,
            order,
            knots,
            weights: point_type.is_rational().then(|| vec![T::one(); size]),
            coords: vec![vec![T::zero(); size]; point_type.dim()],
            attributes: Attributes::new(),
        }
    }

    /// Create a patch from channel arrays, weights first when `point_type` is rational
    /// Coordinates of rational patches are expected premultiplied by the weight
    /// # Failures
    /// - the number of channels does not match the point type
    /// - a channel does not hold exactly `mesh_size` scalars
    ///
    /// # Example
    /// ```
    /// use trisurf::prelude::*;
    ///
    /// let xs = vec![0., 0., 1.];
    /// let ys = vec![0., 1., 0.];
    /// let patch = TriSrf::try_new(GeometryKind::Bezier, PointType::E2, 2, vec![xs, ys]);
    /// assert!(patch.is_ok());
    /// ```
    pub fn try_new(
        kind: GeometryKind,
        point_type: PointType,
        length: usize,
        channels: Vec<Vec<T>>,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(length > 0, "Triangular surface length must be positive");
        anyhow::ensure!(
            channels.len() == point_type.channels(),
            "Invalid number of channels, got {}, expected {}",
            channels.len(),
            point_type.channels()
        );
        let size = Self::mesh_size_of(kind, length);
        for (i, channel) in channels.iter().enumerate() {
            anyhow::ensure!(
                channel.len() == size,
                "Invalid size of channel {}, got {}, expected {}",
                i,
                channel.len(),
                size
            );
        }

        let mut surface = Self::new(kind, point_type, length);
        let mut channels = channels.into_iter();
        if point_type.is_rational() {
            surface.weights = channels.next();
        }
        surface.coords = channels.collect();
        Ok(surface)
    }

    /// Create an E3 Bezier patch from points given in [`mesh_index`] order
    /// # Example
    /// ```
    /// use trisurf::prelude::*;
    /// use nalgebra::Point3;
    ///
    /// let flat = TriSrf::from_points(2, &[
    ///     Point3::new(0., 0., 0.),
    ///     Point3::new(0., 1., 0.),
    ///     Point3::new(1., 0., 0.),
    /// ]);
    /// assert!(flat.is_ok());
    /// ```
    pub fn from_points(length: usize, points: &[Point3<T>]) -> anyhow::Result<Self> {
        let channels = (0..3)
            .map(|axis| points.iter().map(|p| p[axis]).collect())
            .collect();
        Self::try_new(GeometryKind::Bezier, PointType::E3, length, channels)
    }

    /// Number of scalars in each channel for a patch of `kind` and `length`
    pub fn mesh_size_of(kind: GeometryKind, length: usize) -> usize {
        match kind {
            GeometryKind::Gregory => triangular_mesh_size(length) + GREGORY_EXTRA_POINTS,
            _ => triangular_mesh_size(length),
        }
    }

    /// Number of scalars in each channel
    pub fn mesh_size(&self) -> usize {
        Self::mesh_size_of(self.kind, self.length)
    }

    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    pub fn point_type(&self) -> PointType {
        self.point_type
    }

    pub fn is_rational(&self) -> bool {
        self.point_type.is_rational()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Polynomial degree of a Bezier or Gregory patch
    pub fn degree(&self) -> usize {
        self.length.saturating_sub(1)
    }

    pub fn knots(&self) -> Option<&KnotVector<T>> {
        self.knots.as_ref()
    }

    pub fn knots_mut(&mut self) -> Option<&mut KnotVector<T>> {
        self.knots.as_mut()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: Attribute) {
        self.attributes.insert(name.into(), value);
    }

    /// Flat index of the control point `(i, j, k)` with `i + j + k == degree`
    #[inline]
    pub fn mesh_index(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert_eq!(i + j + k, self.degree());
        mesh_index(self.length, i, j)
    }

    /// Channel 0 is the weight channel, `1..=dim` the coordinate axes
    pub fn channel(&self, index: usize) -> Option<&[T]> {
        match index {
            0 => self.weights.as_deref(),
            i => self.coords.get(i - 1).map(|c| c.as_slice()),
        }
    }

    pub fn channel_mut(&mut self, index: usize) -> Option<&mut [T]> {
        match index {
            0 => self.weights.as_deref_mut(),
            i => self.coords.get_mut(i - 1).map(|c| c.as_mut_slice()),
        }
    }

    pub fn weights(&self) -> Option<&[T]> {
        self.weights.as_deref()
    }

    /// Iterate the allocated channels, weights first
    pub(crate) fn channels(&self) -> impl Iterator<Item = &Vec<T>> {
        self.weights.iter().chain(self.coords.iter())
    }

    pub(crate) fn channels_mut(&mut self) -> impl Iterator<Item = &mut Vec<T>> {
        self.weights.iter_mut().chain(self.coords.iter_mut())
    }

    /// Control point at a flat index as a homogeneous vector `[w?, x, y, (z)]`
    pub fn control_point(&self, index: usize) -> DVector<T> {
        DVector::from_iterator(
            self.point_type.channels(),
            self.channels().map(|c| c[index]),
        )
    }

    /// Overwrite the control point at a flat index from Euclidean coordinates,
    /// premultiplying by `weight` for rational patches
    pub fn set_control_point(&mut self, index: usize, point: &Point3<T>, weight: T) {
        if let Some(weights) = self.weights.as_mut() {
            weights[index] = weight;
        }
        let w = if self.is_rational() { weight } else { T::one() };
        for (axis, coords) in self.coords.iter_mut().enumerate() {
            coords[index] = point[axis] * w;
        }
    }

    /// Control point at a flat index projected to 3D
    /// A zero weight leaves the homogeneous coordinates as they are
    pub fn euclidean_point(&self, index: usize) -> Point3<T> {
        let mut point = Point3::origin();
        let w = match self.weights.as_ref() {
            Some(weights) if weights[index] != T::zero() => weights[index],
            _ => T::one(),
        };
        for (axis, coords) in self.coords.iter().enumerate() {
            point[axis] = coords[index] / w;
        }
        point
    }

    /// All control points projected to 3D, in flat order
    pub fn euclidean_points(&self) -> Vec<Point3<T>> {
        (0..self.mesh_size())
            .map(|i| self.euclidean_point(i))
            .collect()
    }

    /// Duplicate the geometry, leaving the attribute table behind
    pub fn copy(&self) -> Self {
        Self {
            attributes: Attributes::new(),
            ..self.clone()
        }
    }

    /// Duplicate every patch of a list, see [`TriSrf::copy`]
    pub fn copy_list(list: &[Self]) -> Vec<Self> {
        list.iter().map(|s| s.copy()).collect()
    }

    /// Compare two patches: kind, point type, order, length, every channel
    /// within `eps`, and the knot vectors when both have one
    pub fn same(&self, other: &Self, eps: T) -> bool {
        if self.kind != other.kind
            || self.point_type != other.point_type
            || self.order != other.order
            || self.length != other.length
        {
            return false;
        }

        let same_points = self.channels().zip(other.channels()).all(|(a, b)| {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| (*x - *y).abs() <= eps)
        });
        if !same_points {
            return false;
        }

        match (&self.knots, &other.knots) {
            (Some(a), Some(b)) => a.same(b, eps),
            _ => true,
        }
    }

    /// Compare two lists pairwise, lists of different lengths are never the same
    pub fn same_list(a: &[Self], b: &[Self], eps: T) -> bool {
        a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.same(y, eps))
    }

    /// Convert the control points into another point type
    /// - Euclidean to projective adds unit weights
    /// - projective to Euclidean divides by the weights
    /// - extra axes are zero filled, missing axes are dropped
    pub fn coerce(&self, point_type: PointType) -> Self {
        let mut coerced = self.clone();
        coerced.coerce_to(point_type);
        coerced
    }

    /// In place version of [`TriSrf::coerce`]
    pub fn coerce_to(&mut self, point_type: PointType) {
        if point_type == self.point_type {
            return;
        }
        let size = self.mesh_size();

        if let (Some(weights), false) = (self.weights.as_ref(), point_type.is_rational()) {
            for coords in self.coords.iter_mut() {
                coords.iter_mut().zip(weights.iter()).for_each(|(c, w)| {
                    if *w != T::zero() {
                        *c /= *w;
                    }
                });
            }
        }

        self.weights = match (self.weights.take(), point_type.is_rational()) {
            (Some(weights), true) => Some(weights),
            (None, true) => Some(vec![T::one(); size]),
            (_, false) => None,
        };
        self.coords.resize(point_type.dim(), vec![T::zero(); size]);
        self.point_type = point_type;
    }

    /// Translate then scale every control point: `p' = (p + translation) * scale`
    /// The weight channel of a rational patch is left untouched.
    pub fn try_translate_scale(&mut self, translation: &Vector3<T>, scale: T) -> Result<()> {
        self.ensure_defined()?;
        let weights = self.weights.clone();
        for (axis, coords) in self.coords.iter_mut().enumerate() {
            for (i, c) in coords.iter_mut().enumerate() {
                let w = weights.as_ref().map_or(T::one(), |w| w[i]);
                *c = (*c + translation[axis] * w) * scale;
            }
        }
        Ok(())
    }

    /// Transform every control point by a homogeneous 4x4 matrix
    /// # Failures
    /// - `TrngError::UndefinedGeometry` for patches of undefined kind
    pub fn try_transform(&mut self, matrix: &Matrix4<T>) -> Result<()> {
        self.ensure_defined()?;
        self.transform(matrix);
        Ok(())
    }

    pub(crate) fn ensure_defined(&self) -> Result<()> {
        match self.kind {
            GeometryKind::Undefined => Err(TrngError::UndefinedGeometry),
            _ => Ok(()),
        }
    }

    /// Write the patch to standard error
    pub fn dbg(&self) {
        eprintln!("{self}");
    }

    /// Cast the surface to a surface with another floating point type
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> TriSrf<F> {
        let cast = |v: &Vec<T>| v.iter().map(|x| convert::<T, F>(*x)).collect::<Vec<F>>();
        TriSrf {
            kind: self.kind,
            point_type: self.point_type,
            length: self.length,
            order: self.order,
            knots: self.knots.as_ref().map(|k| k.cast()),
            weights: self.weights.as_ref().map(cast),
            coords: self.coords.iter().map(cast).collect(),
            attributes: self.attributes.clone(),
        }
    }
}

/// Enable to transform a triangular surface by a given 4x4 matrix
/// Rational control points are dehomogenized, transformed and reweighted.
impl<'a, T: FloatingPoint> Transformable<&'a Matrix4<T>> for TriSrf<T> {
    fn transform(&mut self, transform: &'a Matrix4<T>) {
        for i in 0..self.mesh_size() {
            let ow = self.weights.as_ref().map_or(T::one(), |w| w[i]);
            let p = self.euclidean_point(i);
            let transformed = transform * Vector4::new(p.x, p.y, p.z, T::one());
            let w = transformed[3];
            for (axis, coords) in self.coords.iter_mut().enumerate() {
                coords[i] = transformed[axis] / w * ow;
            }
        }
    }
}

impl<T: FloatingPoint + fmt::Display> fmt::Display for TriSrf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            GeometryKind::Bezier => "BEZIER",
            GeometryKind::Bspline => "BSPLINE",
            GeometryKind::Gregory => "GREGORY",
            GeometryKind::Undefined => "UNDEFINED",
        };
        match self.kind {
            GeometryKind::Bspline => writeln!(
                f,
                "[TRISRF {} {} {} {}",
                kind, self.length, self.order, self.point_type
            )?,
            _ => writeln!(f, "[TRISRF {} {} {}", kind, self.length, self.point_type)?,
        }

        if let Some(knots) = &self.knots {
            write!(f, "    [KV")?;
            for k in knots.iter() {
                write!(f, " {k}")?;
            }
            writeln!(f, "]")?;
        }

        for i in 0..self.mesh_size() {
            write!(f, "    [")?;
            for (c, channel) in self.channels().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", channel[i])?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "]")
    }
}
