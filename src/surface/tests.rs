use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::{Matrix4, Point3, Vector3};
use rand::Rng;

use crate::prelude::*;

/// A curved cubic patch over the unit triangle, control point `(i, j, k)` above `(i/3, j/3)`
fn cubic() -> TriSrf<f64> {
    let n = 3;
    let mut surface = TriSrf::new_bezier(n + 1, PointType::E3);
    for i in 0..=n {
        for j in 0..=n - i {
            let (x, y) = (i as f64 / n as f64, j as f64 / n as f64);
            let z = (x * 3.).sin() * y + (i * j) as f64 * 0.25;
            let index = surface.mesh_index(i, j, n - i - j);
            surface.set_control_point(index, &Point3::new(x, y, z), 1.);
        }
    }
    surface
}

fn random_barycentric(rng: &mut impl Rng) -> (f64, f64, f64) {
    let u: f64 = rng.random();
    let v: f64 = rng.random::<f64>() * (1. - u);
    (u, v, 1. - u - v)
}

#[test]
fn test_mesh_size() {
    for length in 1..10 {
        for point_type in [PointType::E2, PointType::E3, PointType::P2, PointType::P3] {
            let surface = TriSrf::<f64>::new_bezier(length, point_type);
            let size = length * (length + 1) / 2;
            assert_eq!(surface.mesh_size(), size);
            let first = usize::from(!point_type.is_rational());
            for c in first..=point_type.dim() {
                assert_eq!(surface.channel(c).map(|c| c.len()), Some(size));
            }
            assert!(surface.channel(point_type.dim() + 1).is_none());
        }
        let gregory = TriSrf::<f64>::new_gregory(length, PointType::E3);
        assert_eq!(gregory.mesh_size(), length * (length + 1) / 2 + GREGORY_EXTRA_POINTS);
    }
}

#[test]
fn test_mesh_index_bijection() {
    for length in 1..12 {
        let n = length - 1;
        let size = triangular_mesh_size(length);
        let mut seen = vec![false; size];
        for i in 0..=n {
            for j in 0..=n - i {
                let index = mesh_index(length, i, j);
                assert!(index < size);
                assert!(!seen[index], "index {index} produced twice");
                seen[index] = true;
            }
        }
        assert!(seen.into_iter().all(|s| s));
    }
}

#[test]
fn test_partition_of_unity() {
    let mut rng = rand::rng();
    for n in 0..=TRINOMIAL_MAX_DEGREE {
        for _ in 0..8 {
            let (u, v, w) = random_barycentric(&mut rng);
            let mut sum = 0.;
            for i in 0..=n {
                for j in 0..=n - i {
                    let k = n - i - j;
                    sum += choose_weight::<f64>(i, j, n)
                        * u.powi(i as i32)
                        * v.powi(j as i32)
                        * w.powi(k as i32);
                }
            }
            assert_relative_eq!(sum, 1., epsilon = 1e-10);
        }
    }
}

#[test]
fn test_corner_interpolation() {
    let surface = cubic();
    let n = surface.degree();
    let corners = [
        ((1., 0., 0.), (n, 0, 0)),
        ((0., 1., 0.), (0, n, 0)),
        ((0., 0., 1.), (0, 0, n)),
    ];
    for ((u, v, w), (i, j, k)) in corners {
        let p = surface.point_at(u, v, w).unwrap();
        assert_eq!(p, surface.euclidean_point(surface.mesh_index(i, j, k)));
    }
}

#[test]
fn test_flat_triangle_evaluation() {
    let flat = TriSrf::from_points(
        2,
        &[
            Point3::new(0., 0., 0.),
            Point3::new(0., 1., 0.),
            Point3::new(1., 0., 0.),
        ],
    )
    .unwrap();
    let p = flat.eval2(0.5, 0.5).unwrap();
    assert_eq!(p.as_slice(), &[0.5, 0.5, 0.]);
    assert_eq!(flat.point_at2(0.25, 0.5).unwrap(), Point3::new(0.25, 0.5, 0.));

    let normal = flat.normal_at(0.2, 0.3).unwrap();
    assert_relative_eq!(normal, Vector3::new(0., 0., 1.), epsilon = 1e-9);
    let normal = flat.normal_at(1., 0.).unwrap();
    assert_relative_eq!(normal, Vector3::new(0., 0., 1.), epsilon = 1e-9);
}

#[test]
fn test_domain() {
    for length in 1..8 {
        let bezier = TriSrf::<f64>::new_bezier(length, PointType::E3);
        assert_eq!(bezier.domain(), (0., 1., 0., 1., 0., 1.));
        let gregory = TriSrf::<f64>::new_gregory(length, PointType::P3);
        assert_eq!(gregory.domain(), (0., 1., 0., 1., 0., 1.));
    }

    let bspline = TriSrf::<f64>::new_bspline(5, 3, PointType::E3).unwrap();
    assert_eq!(bspline.knots().map(|k| k.len()), Some(8));
    let (min, max, ..) = bspline.domain();
    assert_eq!((min, max), (0., 1.));

    let surface = cubic();
    assert!(surface.param_in_domain(0.5, TriDirection::V));
    assert!(!surface.param_in_domain(1.5, TriDirection::W));
    assert!(surface.params_in_domain(0.2, 0.3, 0.5));
    assert!(!surface.params_in_domain(-0.2, 0.7, 0.5));
}

#[test]
fn test_wrong_order() {
    let err = TriSrf::<f64>::new_bspline(2, 3, PointType::E3).err();
    assert_eq!(
        err,
        Some(TrngError::WrongOrder {
            length: 2,
            order: 3
        })
    );
}

#[test]
fn test_unsupported_kinds() {
    let bspline = TriSrf::<f64>::new_bspline(4, 3, PointType::E3).unwrap();
    assert_eq!(
        bspline.eval(0.2, 0.3, 0.5).err(),
        Some(TrngError::BsplineUnsupported)
    );
    assert_eq!(
        bspline.derive(TriDirection::U).err(),
        Some(TrngError::BsplineUnsupported)
    );

    let gregory = TriSrf::<f64>::new_gregory(5, PointType::E3);
    assert_eq!(
        gregory.eval(0.2, 0.3, 0.5).err(),
        Some(TrngError::GregoryUnsupported)
    );
    assert_eq!(
        gregory.derive(TriDirection::W).err(),
        Some(TrngError::GregoryUnsupported)
    );

    let mut undefined = TriSrf::<f64>::new(GeometryKind::Undefined, PointType::E3, 3);
    assert_eq!(
        undefined.eval(0.2, 0.3, 0.5).err(),
        Some(TrngError::UndefinedGeometry)
    );
    assert_eq!(
        undefined.try_transform(&Matrix4::identity()).err(),
        Some(TrngError::UndefinedGeometry)
    );
}

#[test]
fn test_direction_conversion() {
    assert_eq!(TriDirection::try_from(1usize), Ok(TriDirection::V));
    assert_eq!(TriDirection::try_from('W'), Ok(TriDirection::W));
    assert_eq!(
        TriDirection::try_from(3usize),
        Err(TrngError::DirectionNotValid)
    );
    assert_eq!(TriDirection::try_from('x'), Err(TrngError::DirectionNotValid));
}

#[test]
fn test_derive_reduces_length() {
    let surface = cubic();
    for direction in TriDirection::ALL {
        let derived = surface.derive(direction).unwrap();
        assert_eq!(derived.length(), surface.length() - 1);
        assert_eq!(derived.kind(), GeometryKind::Bezier);
    }

    let point = TriSrf::<f64>::from_points(1, &[Point3::new(1., 2., 3.)]).unwrap();
    let derived = point.derive(TriDirection::U).unwrap();
    assert_eq!(derived.length(), 1);
    assert_eq!(derived.euclidean_point(0), Point3::origin());
}

#[test]
fn test_derive_matches_finite_difference() {
    let surface = cubic();
    let h = 1e-6;
    for direction in TriDirection::ALL {
        let [a, b, c] = match direction {
            TriDirection::U => [1., -0.5, -0.5],
            TriDirection::V => [-0.5, 1., -0.5],
            TriDirection::W => [-0.5, -0.5, 1.],
        };
        let derived = surface.derive(direction).unwrap();
        for (u, v, w) in [(0.2, 0.3, 0.5), (0.6, 0.2, 0.2), (0.3, 0.3, 0.4)] {
            let forward = surface.point_at(u + a * h, v + b * h, w + c * h).unwrap();
            let backward = surface.point_at(u - a * h, v - b * h, w - c * h).unwrap();
            let expected = (forward - backward) / (2. * h);
            let actual = derived.point_at(u, v, w).unwrap();
            assert_relative_eq!(actual.coords, expected, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_directional_derive_is_linear() {
    let surface = cubic();
    let du = surface.derive(TriDirection::U).unwrap();
    let dv = surface.derive(TriDirection::V).unwrap();
    let combined = surface.directional_derive([0.5, 0.5, -1.]).unwrap();
    for (u, v) in [(0.1, 0.1), (0.5, 0.25)] {
        let expected = du.point_at2(u, v).unwrap().coords + dv.point_at2(u, v).unwrap().coords;
        let actual = combined.point_at2(u, v).unwrap().coords;
        assert_relative_eq!(actual, expected, epsilon = 1e-10);
    }
}

#[test]
fn test_copy_and_same() {
    let mut surface = cubic();
    surface.set_attribute("id", Attribute::Int(7));
    let copy = surface.copy();
    assert!(copy.same(&surface, 0.));
    assert!(copy.attributes().is_empty());
    assert_eq!(surface.attributes().get("id"), Some(&Attribute::Int(7)));

    let mut moved = copy.clone();
    moved
        .try_translate_scale(&Vector3::new(0., 0., 1e-3), 1.)
        .unwrap();
    assert!(!moved.same(&surface, 1e-4));
    assert!(moved.same(&surface, 1e-2));

    let list = vec![surface.clone(), moved.clone()];
    let copies = TriSrf::copy_list(&list);
    assert!(TriSrf::same_list(&list, &copies, 0.));
    assert!(!TriSrf::same_list(&list, &copies[..1], 0.));

    assert!(!surface.same(&surface.coerce(PointType::P3), 0.));
    assert!(!surface.same(&TriSrf::new_bezier(4, PointType::E3), 0.));
}

#[test]
fn test_bounding_box_contains_surface() {
    let mut rng = rand::rng();
    let mut surface = cubic().coerce(PointType::P3);
    for index in 0..surface.mesh_size() {
        let p = surface.euclidean_point(index);
        surface.set_control_point(index, &p, rng.random_range(0.5..2.));
    }
    let bb = surface.bounding_box().unwrap();
    for _ in 0..200 {
        let (u, v, w) = random_barycentric(&mut rng);
        let p = surface.point_at(u, v, w).unwrap();
        assert!(bb.contains(&p, 1e-10), "{p} is outside {bb:?}");
    }

    let shifted = {
        let mut s = cubic();
        s.try_translate_scale(&Vector3::new(5., 0., 0.), 1.).unwrap();
        s
    };
    let union = TriSrf::list_bounding_box(&[surface.clone(), shifted]).unwrap();
    assert_relative_eq!(union.max().x, 6.);
    assert_relative_eq!(union.min().x, 0.);
    assert!(TriSrf::<f64>::list_bounding_box(&[]).is_none());
}

#[test]
fn test_coerce() {
    let surface = cubic();
    let rational = surface.coerce(PointType::P3);
    assert_eq!(rational.point_type(), PointType::P3);
    assert!(rational.weights().unwrap().iter().all(|w| *w == 1.));

    let mut weighted = rational.clone();
    let p = weighted.euclidean_point(4);
    weighted.set_control_point(4, &p, 2.);
    assert_eq!(weighted.channel(1).unwrap()[4], p.x * 2.);

    let back = weighted.coerce(PointType::E3);
    assert!(back.weights().is_none());
    assert_relative_eq!(back.euclidean_point(4), p);

    let planar = surface.coerce(PointType::E2);
    assert_eq!(planar.point_type().dim(), 2);
    assert_eq!(planar.euclidean_point(5).z, 0.);
    assert_eq!(planar.euclidean_point(5).x, surface.euclidean_point(5).x);

    let lifted = planar.coerce(PointType::E3);
    assert!(lifted.channel(3).unwrap().iter().all(|z| *z == 0.));
}

#[test]
fn test_transform() {
    let surface = cubic();
    let translation = Vector3::new(1., -2., 0.5);
    let m = Matrix4::new_translation(&translation);
    let mut moved = surface.coerce(PointType::P3);
    moved.try_transform(&m).unwrap();
    for (u, v) in [(0.2, 0.2), (0.7, 0.1)] {
        let expected = surface.point_at2(u, v).unwrap() + translation;
        assert_relative_eq!(moved.point_at2(u, v).unwrap(), expected, epsilon = 1e-12);
    }

    let mut scaled = surface.clone();
    scaled
        .try_translate_scale(&Vector3::new(1., 0., 0.), 2.)
        .unwrap();
    let p = scaled.euclidean_point(0);
    let q = surface.euclidean_point(0);
    assert_relative_eq!(p, Point3::new((q.x + 1.) * 2., q.y * 2., q.z * 2.));
}

#[test]
fn test_elevate_degree_keeps_shape() {
    let mut rng = rand::rng();
    let surface = cubic();
    let elevated = surface.elevate_degree().unwrap();
    assert_eq!(elevated.length(), surface.length() + 1);
    for _ in 0..20 {
        let (u, v, w) = random_barycentric(&mut rng);
        assert_relative_eq!(
            surface.point_at(u, v, w).unwrap(),
            elevated.point_at(u, v, w).unwrap(),
            epsilon = 1e-12
        );
    }
    assert!(TriSrf::<f64>::new_gregory(5, PointType::E3)
        .elevate_degree()
        .is_err());
}

#[test]
fn test_try_new() {
    let ok = TriSrf::<f64>::try_new(
        GeometryKind::Bezier,
        PointType::P2,
        2,
        vec![vec![1.; 3], vec![0., 0., 1.], vec![0., 1., 0.]],
    );
    assert!(ok.is_ok());

    let wrong_channels =
        TriSrf::<f64>::try_new(GeometryKind::Bezier, PointType::P2, 2, vec![vec![1.; 3]]);
    assert!(wrong_channels.is_err());

    let wrong_size = TriSrf::<f64>::try_new(
        GeometryKind::Gregory,
        PointType::E2,
        5,
        vec![vec![0.; 15], vec![0.; 15]],
    );
    assert!(wrong_size.is_err());
}

#[test]
fn test_cast_and_display() {
    let surface = TriSrf::from_points(
        2,
        &[
            Point3::new(0., 0., 0.),
            Point3::new(0., 1., 0.),
            Point3::new(1., 0., 0.),
        ],
    )
    .unwrap();
    let single = surface.cast::<f32>();
    assert_abs_diff_eq!(single.point_at2(0.25, 0.25).unwrap().x, 0.25f32);

    let dump = surface.to_string();
    assert!(dump.starts_with("[TRISRF BEZIER 2 E3"));
    assert_eq!(dump.lines().count(), 5);

    let bspline = TriSrf::<f64>::new_bspline(3, 2, PointType::E2).unwrap();
    assert!(bspline.to_string().contains("[KV 0 0 0.5 1 1]"));
}
