/// Options for [`crate::prelude::TriSrf::to_polygons`]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolygonOptions {
    /// Number of subdivisions along each edge of the parametric triangle
    pub fineness: usize,
    /// Compute a unit normal at every vertex
    pub normals: bool,
    /// Record the `(u, v)` parameters of every vertex
    pub uvs: bool,
}

impl Default for PolygonOptions {
    fn default() -> Self {
        Self {
            fineness: 10,
            normals: true,
            uvs: false,
        }
    }
}

impl PolygonOptions {
    pub fn with_fineness(mut self, fineness: usize) -> Self {
        self.fineness = fineness;
        self
    }

    pub fn with_normals(mut self, normals: bool) -> Self {
        self.normals = normals;
        self
    }

    pub fn with_uvs(mut self, uvs: bool) -> Self {
        self.uvs = uvs;
        self
    }
}

/// Parameter sampling strategy of isoparametric polylines
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolylineMethod {
    /// Samples evenly spaced in parameter space
    #[default]
    Uniform,
    /// Curvature driven sampling, not available for triangular patches
    Optimal,
    /// Chord tolerance driven sampling, not available for triangular patches
    Tolerance,
}

/// Options for [`crate::prelude::TriSrf::to_polylines`]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolylineOptions {
    /// Number of isocurves with constant u, v and w
    pub isocurves: [usize; 3],
    /// Number of points sampled along each isocurve
    pub samples: usize,
    pub method: PolylineMethod,
}

impl Default for PolylineOptions {
    fn default() -> Self {
        Self {
            isocurves: [5, 5, 5],
            samples: 16,
            method: PolylineMethod::Uniform,
        }
    }
}

impl PolylineOptions {
    pub fn with_isocurves(mut self, isocurves: [usize; 3]) -> Self {
        self.isocurves = isocurves;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_method(mut self, method: PolylineMethod) -> Self {
        self.method = method;
        self
    }
}
