use nalgebra::{Point3, Vector2, Vector3};
use simba::scalar::SupersetOf;

use crate::misc::FloatingPoint;

/// Triangular surface tessellation representation
/// An indexed triangle mesh, `normals` and `uvs` are either empty or hold one
/// entry per point.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriSrfTessellation<T: FloatingPoint> {
    pub(crate) points: Vec<Point3<T>>,
    pub(crate) normals: Vec<Vector3<T>>,
    pub(crate) uvs: Vec<Vector2<T>>,
    pub(crate) faces: Vec<[usize; 3]>,
}

impl<T: FloatingPoint> Default for TriSrfTessellation<T> {
    fn default() -> Self {
        Self {
            points: vec![],
            normals: vec![],
            uvs: vec![],
            faces: vec![],
        }
    }
}

impl<T: FloatingPoint> TriSrfTessellation<T> {
    pub fn points(&self) -> &Vec<Point3<T>> {
        &self.points
    }

    pub fn normals(&self) -> &Vec<Vector3<T>> {
        &self.normals
    }

    pub fn uvs(&self) -> &Vec<Vector2<T>> {
        &self.uvs
    }

    pub fn faces(&self) -> &Vec<[usize; 3]> {
        &self.faces
    }

    /// Corner positions of every triangle
    pub fn triangles(&self) -> impl Iterator<Item = [Point3<T>; 3]> + '_ {
        self.faces
            .iter()
            .map(|f| [self.points[f[0]], self.points[f[1]], self.points[f[2]]])
    }

    /// Cast the tessellation to another floating point type.
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> TriSrfTessellation<F> {
        TriSrfTessellation {
            points: self.points.iter().map(|p| p.cast()).collect(),
            normals: self.normals.iter().map(|n| n.cast()).collect(),
            uvs: self.uvs.iter().map(|uv| uv.cast()).collect(),
            faces: self.faces.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TriSrfTessellation;

    fn empty<T: crate::misc::FloatingPoint>() -> TriSrfTessellation<T> {
        TriSrfTessellation::default()
    }

    #[test]
    fn test_default_is_empty() {
        let tess = empty::<f64>();
        assert!(tess.points().is_empty());
        assert!(tess.normals().is_empty());
        assert!(tess.uvs().is_empty());
        assert!(tess.faces().is_empty());
        assert_eq!(empty::<f32>().triangles().count(), 0);
    }
}
