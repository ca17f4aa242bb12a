use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use trisurf::prelude::*;

fn flat() -> TriSrf<f64> {
    TriSrf::from_points(
        2,
        &[
            Point3::new(0., 0., 0.),
            Point3::new(0., 1., 0.),
            Point3::new(1., 0., 0.),
        ],
    )
    .unwrap()
}

/// A quadratic dome over the unit triangle
fn dome() -> TriSrf<f64> {
    let mut surface = TriSrf::new_bezier(3, PointType::E3);
    for i in 0..3 {
        for j in 0..3 - i {
            let z = if i == 1 || j == 1 { 0.5 } else { 0. };
            let p = Point3::new(i as f64 / 2., j as f64 / 2., z);
            let index = surface.mesh_index(i, j, 2 - i - j);
            surface.set_control_point(index, &p, 1.);
        }
    }
    surface
}

fn gregory() -> TriSrf<f64> {
    let length = 5;
    let n = length - 1;
    let mut surface = TriSrf::new_gregory(length, PointType::E3);
    for i in 0..=n {
        for j in 0..=n - i {
            let (x, y) = (i as f64 / n as f64, j as f64 / n as f64);
            let p = Point3::new(x, y, x * y);
            let index = surface.mesh_index(i, j, n - i - j);
            surface.set_control_point(index, &p, 1.);
        }
    }
    let net = triangular_mesh_size(length);
    let doubled = [(n - 2, 1, 1), (1, n - 2, 1), (1, 1, n - 2)];
    for (extra, (i, j, k)) in doubled.into_iter().enumerate() {
        let p = surface.euclidean_point(surface.mesh_index(i, j, k));
        surface.set_control_point(net + extra, &p, 1.);
    }
    surface
}

#[test]
fn test_single_triangle() {
    let surface = flat();
    let options = PolygonOptions::default().with_fineness(1).with_normals(false);
    let tess = surface.to_polygons(&options).unwrap();
    assert_eq!(tess.faces().len(), 1);
    assert_eq!(tess.points().len(), 3);
    assert!(tess.normals().is_empty());

    let mut corners = tess.triangles().next().unwrap().to_vec();
    let mut control = surface.euclidean_points();
    let order = |a: &Point3<f64>, b: &Point3<f64>| a.coords.as_slice().partial_cmp(b.coords.as_slice()).unwrap();
    corners.sort_by(order);
    control.sort_by(order);
    assert_eq!(corners, control);
}

#[test]
fn test_triangle_count_and_orientation() {
    let surface = dome();
    for fineness in 1..8 {
        let options = PolygonOptions::default().with_fineness(fineness).with_uvs(true);
        let tess = surface.tessellate(options).unwrap();
        assert_eq!(tess.faces().len(), fineness * fineness);
        assert_eq!(tess.points().len(), (fineness + 1) * (fineness + 2) / 2);
        assert_eq!(tess.normals().len(), tess.points().len());
        assert_eq!(tess.uvs().len(), tess.points().len());

        for face in tess.faces() {
            let [a, b, c] = face.map(|i| tess.uvs()[i]);
            let area = (b - a).perp(&(c - a));
            assert!(area > 0., "clockwise face {face:?}");
        }
        for n in tess.normals() {
            assert!(n.z > 0.);
            assert_relative_eq!(n.norm(), 1., epsilon = 1e-9);
        }
    }
}

#[test]
fn test_vertices_lie_on_surface() {
    let surface = dome();
    let tess = surface
        .to_polygons(&PolygonOptions::default().with_fineness(6).with_uvs(true))
        .unwrap();
    for (p, uv) in tess.points().iter().zip(tess.uvs()) {
        let expected = surface.point_at2(uv.x, uv.y).unwrap();
        assert_relative_eq!(*p, expected, epsilon = 1e-12);
    }
}

#[test]
fn test_gregory_tessellation() {
    let surface = gregory();
    let tess = surface
        .to_polygons(&PolygonOptions::default().with_fineness(4))
        .unwrap();
    assert_eq!(tess.faces().len(), 16);
    // the corners of the Gregory net are interpolated
    for corner in [Point3::new(0., 0., 0.), Point3::new(1., 0., 0.), Point3::new(0., 1., 0.)] {
        assert!(tess
            .points()
            .iter()
            .any(|p| (p - corner).norm() < 1e-6));
    }
    assert!(tess.points().iter().all(|p| p.coords.iter().all(|x| x.is_finite())));

    let unsupported = TriSrf::<f64>::new_gregory(4, PointType::E3);
    assert_eq!(
        unsupported.to_polygons(&PolygonOptions::default()).err(),
        Some(TrngError::GregoryUnsupported)
    );
}

#[test]
fn test_polylines() {
    let surface = dome();
    let options = PolylineOptions::default()
        .with_isocurves([3, 2, 1])
        .with_samples(9);
    let polylines = surface.to_polylines(&options).unwrap();
    assert_eq!(polylines.len(), 6);
    assert!(polylines.iter().all(|p| p.len() == 9));

    // first U isoline is the u = 0 edge, running from v = 0 to w = 0
    let edge = &polylines[0];
    assert_relative_eq!(edge[0], surface.point_at(0., 0., 1.).unwrap());
    assert_relative_eq!(edge[8], surface.point_at(0., 1., 0.).unwrap());
    assert!(edge.iter().all(|p| p.x.abs() < 1e-12));

    // the last U isoline collapses onto the u corner
    let corner = surface.point_at(1., 0., 0.).unwrap();
    assert!(polylines[2].iter().all(|p| (p - corner).norm() < 1e-12));

    let optimal = options.clone().with_method(PolylineMethod::Optimal);
    assert_eq!(
        surface.to_polylines(&optimal).err(),
        Some(TrngError::SamplingMethodUnsupported)
    );
}

#[test]
fn test_iso_curves_follow_polylines() {
    let surface = dome();
    let counts = [2, 3, 4];
    let curves = surface.iso_curves(counts).unwrap();
    let options = PolylineOptions::default()
        .with_isocurves(counts)
        .with_samples(5);
    let polylines = surface.to_polylines(&options).unwrap();
    assert_eq!(curves.len(), polylines.len());

    for (curve, polyline) in curves.iter().zip(polylines.iter()) {
        assert_eq!(curve.degree(), surface.degree());
        for (s, p) in polyline.iter().enumerate() {
            let q = curve.point_at(s as f64 / 4.);
            assert_relative_eq!(q, *p, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_iso_curve_at() {
    let surface = dome();
    for direction in TriDirection::ALL {
        let curve = surface.iso_curve_at(0.3, direction).unwrap();
        let mid = curve.point_at(0.5);
        let (u, v, w) = match direction {
            TriDirection::U => (0.3, 0.35, 0.35),
            TriDirection::V => (0.35, 0.3, 0.35),
            TriDirection::W => (0.35, 0.35, 0.3),
        };
        assert_relative_eq!(mid, surface.point_at(u, v, w).unwrap(), epsilon = 1e-12);
    }

    let err = surface.iso_curve_at(-0.1, TriDirection::V).err();
    assert_eq!(
        err,
        Some(TrngError::ParameterOutOfDomain {
            value: -0.1,
            min: 0.,
            max: 1.
        })
    );

    let err = surface.iso_curve_at(f64::NAN, TriDirection::U).err();
    assert!(matches!(
        err,
        Some(TrngError::ParameterOutOfDomain { value, .. }) if value.is_nan()
    ));
}

#[test]
fn test_boundary_curves() {
    let surface = dome();
    let [u0, v0, w0] = surface.boundary_curves().unwrap();
    assert_relative_eq!(u0.point_at(0.), surface.point_at(0., 0., 1.).unwrap());
    assert_relative_eq!(v0.point_at(1.), surface.point_at(1., 0., 0.).unwrap());
    assert_relative_eq!(w0.point_at(0.), surface.point_at(0., 1., 0.).unwrap());
    for t in [0.25, 0.5, 0.75] {
        assert!(u0.point_at(t).x.abs() < 1e-12);
        assert!(v0.point_at(t).y.abs() < 1e-12);
    }
}

#[test]
fn test_control_mesh() {
    let surface = dome();
    let mesh = surface.control_mesh().unwrap();
    assert_eq!(mesh.len(), 3 * surface.degree());
    assert_eq!(mesh[0].len(), 3);
    assert_eq!(mesh[1].len(), 2);
    let points = surface.euclidean_points();
    assert!(mesh.iter().flatten().all(|p| points.contains(p)));
}

#[test]
fn test_rational_patch_tessellation() {
    let surface = dome().coerce(PointType::P3);
    let moved = {
        let mut s = surface.clone();
        s.try_translate_scale(&Vector3::new(0., 0., 1.), 1.).unwrap();
        s
    };
    let a = surface
        .to_polygons(&PolygonOptions::default().with_fineness(3))
        .unwrap();
    let b = moved
        .to_polygons(&PolygonOptions::default().with_fineness(3))
        .unwrap();
    for (p, q) in a.points().iter().zip(b.points()) {
        assert_relative_eq!(p + Vector3::z(), *q, epsilon = 1e-12);
    }
}
