//! Gregory to rational Bezier coefficient tables.
//!
//! Row `r` of a table is the control point at mesh index `r` of the output
//! Bezier patch. `weight` is the rational weight of that control point and the
//! Euclidean part is `weight * sum(numerator * gregory[index]) / denominator`.
//! Gregory indices past the triangular mesh address the three extra interior
//! points stored after the regular net.
//!
//! Generated from the exact expansion of the quadratic-blend Gregory triangle
//! over the denominator `(v^2 + w^2)(u^2 + w^2)(u^2 + v^2)`. Do not edit by hand.
//!
//! The coefficients are derived from the blend documented on
//! [`crate::prelude::TriSrf::gregory_to_bezier`], they are not literal values
//! copied from another Gregory conversion table.

/// One output control point of a Gregory to Bezier conversion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GregoryRow {
    /// Rational weight as `(numerator, denominator)`.
    pub weight: (i64, i64),
    /// Common denominator of the affine combination in `terms`.
    pub denominator: i64,
    /// `(gregory index, numerator)` pairs.
    pub terms: &'static [(usize, i64)],
}

const fn row(weight: (i64, i64), denominator: i64, terms: &'static [(usize, i64)]) -> GregoryRow {
    GregoryRow {
        weight,
        denominator,
        terms,
    }
}

/// Gregory patch of length 5 to a Bezier patch of length 11.
pub(crate) const GREGORY_5_TO_BEZIER_11: [GregoryRow; 66] = [
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((1, 45), 1, &[(0, 1)]),
    row((1, 30), 1, &[(1, 1)]),
    row((1, 30), 7, &[(0, 1), (2, 6)]),
    row((2, 63), 2, &[(1, 1), (3, 1)]),
    row((1, 30), 7, &[(2, 6), (4, 1)]),
    row((1, 30), 1, &[(3, 1)]),
    row((1, 45), 1, &[(4, 1)]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((1, 90), 1, &[(5, 1)]),
    row((1, 70), 1, &[(6, 1)]),
    row((4, 315), 4, &[(5, 1), (16, 3)]),
    row((4, 315), 4, &[(6, 3), (8, 1)]),
    row((1, 70), 1, &[(16, 1)]),
    row((1, 90), 1, &[(8, 1)]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((1, 45), 1, &[(0, 1)]),
    row((1, 90), 1, &[(1, 1)]),
    row((1, 90), 7, &[(0, 1), (2, 3), (9, 3)]),
    row((1, 105), 6, &[(1, 2), (3, 1), (10, 3)]),
    row((13, 1575), 26, &[(0, 1), (2, 12), (4, 1), (9, 6), (11, 6)]),
    row((1, 105), 6, &[(1, 1), (3, 2), (15, 3)]),
    row((1, 90), 7, &[(2, 3), (4, 1), (11, 3)]),
    row((1, 90), 1, &[(3, 1)]),
    row((1, 45), 1, &[(4, 1)]),
    row((1, 30), 1, &[(5, 1)]),
    row((1, 70), 1, &[(17, 1)]),
    row((1, 105), 6, &[(5, 2), (12, 1), (16, 3)]),
    row((4, 525), 8, &[(6, 3), (8, 1), (13, 1), (17, 3)]),
    row((4, 525), 8, &[(5, 1), (7, 3), (12, 1), (16, 3)]),
    row((1, 105), 6, &[(6, 3), (8, 2), (13, 1)]),
    row((1, 70), 1, &[(7, 1)]),
    row((1, 30), 1, &[(8, 1)]),
    row((1, 30), 7, &[(0, 1), (9, 6)]),
    row((4, 315), 4, &[(1, 1), (10, 3)]),
    row((13, 1575), 26, &[(0, 1), (2, 6), (9, 12), (11, 6), (14, 1)]),
    row((4, 525), 8, &[(1, 1), (3, 1), (10, 3), (15, 3)]),
    row((13, 1575), 26, &[(2, 6), (4, 1), (9, 6), (11, 12), (14, 1)]),
    row((4, 315), 4, &[(3, 1), (15, 3)]),
    row((1, 30), 7, &[(4, 1), (11, 6)]),
    row((2, 63), 2, &[(5, 1), (12, 1)]),
    row((4, 315), 4, &[(13, 1), (17, 3)]),
    row((1, 105), 6, &[(5, 1), (7, 3), (12, 2)]),
    row((1, 105), 6, &[(8, 1), (13, 2), (17, 3)]),
    row((4, 315), 4, &[(7, 3), (12, 1)]),
    row((2, 63), 2, &[(8, 1), (13, 1)]),
    row((1, 30), 7, &[(9, 6), (14, 1)]),
    row((1, 70), 1, &[(10, 1)]),
    row((1, 90), 7, &[(9, 3), (11, 3), (14, 1)]),
    row((1, 70), 1, &[(15, 1)]),
    row((1, 30), 7, &[(11, 6), (14, 1)]),
    row((1, 30), 1, &[(12, 1)]),
    row((1, 90), 1, &[(13, 1)]),
    row((1, 90), 1, &[(12, 1)]),
    row((1, 30), 1, &[(13, 1)]),
    row((1, 45), 1, &[(14, 1)]),
    row((0, 1), 1, &[]),
    row((1, 45), 1, &[(14, 1)]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
];

/// Gregory patch of length 6 to a Bezier patch of length 12.
pub(crate) const GREGORY_6_TO_BEZIER_12: [GregoryRow; 78] = [
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((1, 55), 1, &[(0, 1)]),
    row((1, 33), 1, &[(1, 1)]),
    row((1, 30), 11, &[(0, 1), (2, 10)]),
    row((5, 154), 3, &[(1, 1), (3, 2)]),
    row((5, 154), 3, &[(2, 2), (4, 1)]),
    row((1, 30), 11, &[(3, 10), (5, 1)]),
    row((1, 33), 1, &[(4, 1)]),
    row((1, 55), 1, &[(5, 1)]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((1, 99), 1, &[(6, 1)]),
    row((1, 66), 1, &[(7, 1)]),
    row((1, 66), 7, &[(6, 1), (8, 6)]),
    row((10, 693), 2, &[(7, 1), (22, 1)]),
    row((1, 66), 7, &[(8, 6), (10, 1)]),
    row((1, 66), 1, &[(22, 1)]),
    row((1, 99), 1, &[(10, 1)]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((1, 55), 1, &[(0, 1)]),
    row((1, 99), 1, &[(1, 1)]),
    row((1, 90), 11, &[(0, 1), (2, 5), (11, 5)]),
    row((5, 462), 5, &[(1, 1), (3, 1), (12, 3)]),
    row((1, 105), 66, &[(0, 1), (2, 20), (4, 5), (11, 10), (13, 30)]),
    row((1, 105), 66, &[(1, 5), (3, 20), (5, 1), (12, 30), (14, 10)]),
    row((5, 462), 5, &[(2, 1), (4, 1), (13, 3)]),
    row((1, 90), 11, &[(3, 5), (5, 1), (14, 5)]),
    row((1, 99), 1, &[(4, 1)]),
    row((1, 55), 1, &[(5, 1)]),
    row((1, 33), 1, &[(6, 1)]),
    row((1, 66), 1, &[(23, 1)]),
    row((5, 462), 5, &[(6, 1), (8, 3), (15, 1)]),
    row((2, 231), 4, &[(7, 1), (16, 1), (22, 1), (23, 1)]),
    row((3, 385), 18, &[(6, 1), (8, 12), (10, 1), (15, 2), (17, 2)]),
    row((2, 231), 4, &[(7, 1), (9, 1), (21, 1), (22, 1)]),
    row((5, 462), 5, &[(8, 3), (10, 1), (17, 1)]),
    row((1, 66), 1, &[(9, 1)]),
    row((1, 33), 1, &[(10, 1)]),
    row((1, 30), 11, &[(0, 1), (11, 10)]),
    row((1, 66), 7, &[(1, 1), (12, 6)]),
    row((1, 105), 66, &[(0, 1), (2, 10), (11, 20), (13, 30), (18, 5)]),
    row((3, 385), 18, &[(1, 1), (3, 2), (12, 12), (14, 2), (19, 1)]),
    row((3, 385), 18, &[(2, 2), (4, 1), (11, 2), (13, 12), (18, 1)]),
    row((1, 105), 66, &[(3, 10), (5, 1), (12, 30), (14, 20), (19, 5)]),
    row((1, 66), 7, &[(4, 1), (13, 6)]),
    row((1, 30), 11, &[(5, 1), (14, 10)]),
    row((5, 154), 3, &[(6, 1), (15, 2)]),
    row((10, 693), 2, &[(16, 1), (23, 1)]),
    row((1, 105), 66, &[(6, 5), (8, 30), (15, 20), (17, 10), (20, 1)]),
    row((2, 231), 4, &[(9, 1), (16, 1), (21, 1), (23, 1)]),
    row((1, 105), 66, &[(8, 30), (10, 5), (15, 10), (17, 20), (20, 1)]),
    row((10, 693), 2, &[(9, 1), (21, 1)]),
    row((5, 154), 3, &[(10, 1), (17, 2)]),
    row((5, 154), 3, &[(11, 2), (18, 1)]),
    row((1, 66), 7, &[(12, 6), (19, 1)]),
    row((5, 462), 5, &[(11, 1), (13, 3), (18, 1)]),
    row((5, 462), 5, &[(12, 3), (14, 1), (19, 1)]),
    row((1, 66), 7, &[(13, 6), (18, 1)]),
    row((5, 154), 3, &[(14, 2), (19, 1)]),
    row((1, 30), 11, &[(15, 10), (20, 1)]),
    row((1, 66), 1, &[(16, 1)]),
    row((1, 90), 11, &[(15, 5), (17, 5), (20, 1)]),
    row((1, 66), 1, &[(21, 1)]),
    row((1, 30), 11, &[(17, 10), (20, 1)]),
    row((1, 33), 1, &[(18, 1)]),
    row((1, 99), 1, &[(19, 1)]),
    row((1, 99), 1, &[(18, 1)]),
    row((1, 33), 1, &[(19, 1)]),
    row((1, 55), 1, &[(20, 1)]),
    row((0, 1), 1, &[]),
    row((1, 55), 1, &[(20, 1)]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
];

/// Gregory patch of length 7 to a Bezier patch of length 13.
pub(crate) const GREGORY_7_TO_BEZIER_13: [GregoryRow; 91] = [
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((1, 66), 1, &[(0, 1)]),
    row((3, 110), 1, &[(1, 1)]),
    row((16, 495), 16, &[(0, 1), (2, 15)]),
    row((13, 396), 13, &[(1, 3), (3, 10)]),
    row((5, 154), 2, &[(2, 1), (4, 1)]),
    row((13, 396), 13, &[(3, 10), (5, 3)]),
    row((16, 495), 16, &[(4, 15), (6, 1)]),
    row((3, 110), 1, &[(5, 1)]),
    row((1, 66), 1, &[(6, 1)]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((1, 110), 1, &[(7, 1)]),
    row((1, 66), 1, &[(8, 1)]),
    row((1, 60), 11, &[(7, 1), (9, 10)]),
    row((5, 308), 3, &[(8, 1), (10, 2)]),
    row((5, 308), 3, &[(9, 2), (29, 1)]),
    row((1, 60), 11, &[(10, 10), (12, 1)]),
    row((1, 66), 1, &[(29, 1)]),
    row((1, 110), 1, &[(12, 1)]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((1, 66), 1, &[(0, 1)]),
    row((1, 110), 1, &[(1, 1)]),
    row((16, 1485), 32, &[(0, 2), (2, 15), (13, 15)]),
    row((23, 1980), 23, &[(1, 3), (3, 5), (14, 15)]),
    row((151, 13860), 151, &[(0, 1), (2, 30), (4, 15), (13, 15), (15, 90)]),
    row((43, 4158), 86, &[(1, 3), (3, 20), (5, 3), (14, 30), (16, 30)]),
    row((151, 13860), 151, &[(2, 15), (4, 30), (6, 1), (15, 90), (17, 15)]),
    row((23, 1980), 23, &[(3, 5), (5, 3), (16, 15)]),
    row((16, 1485), 32, &[(4, 15), (6, 2), (17, 15)]),
    row((1, 110), 1, &[(5, 1)]),
    row((1, 66), 1, &[(6, 1)]),
    row((3, 110), 1, &[(7, 1)]),
    row((1, 66), 1, &[(30, 1)]),
    row((23, 1980), 23, &[(7, 3), (9, 15), (18, 5)]),
    row((3, 308), 6, &[(8, 1), (10, 2), (19, 2), (30, 1)]),
    row((59, 6930), 118, &[(7, 3), (9, 60), (18, 10), (20, 30), (29, 15)]),
    row((59, 6930), 118, &[(8, 15), (10, 60), (12, 3), (19, 30), (21, 10)]),
    row((3, 308), 6, &[(9, 2), (11, 1), (20, 2), (29, 1)]),
    row((23, 1980), 23, &[(10, 15), (12, 3), (21, 5)]),
    row((1, 66), 1, &[(11, 1)]),
    row((3, 110), 1, &[(12, 1)]),
    row((16, 495), 16, &[(0, 1), (13, 15)]),
    row((1, 60), 11, &[(1, 1), (14, 10)]),
    row((151, 13860), 151, &[(0, 1), (2, 15), (13, 30), (15, 90), (22, 15)]),
    row((59, 6930), 118, &[(1, 3), (3, 10), (14, 60), (16, 30), (23, 15)]),
    row((3, 385), 18, &[(2, 1), (4, 1), (13, 1), (15, 12), (17, 1), (22, 1), (24, 1)]),
    row((59, 6930), 118, &[(3, 10), (5, 3), (14, 30), (16, 60), (28, 15)]),
    row((151, 13860), 151, &[(4, 15), (6, 1), (15, 90), (17, 30), (24, 15)]),
    row((1, 60), 11, &[(5, 1), (16, 10)]),
    row((16, 495), 16, &[(6, 1), (17, 15)]),
    row((13, 396), 13, &[(7, 3), (18, 10)]),
    row((5, 308), 3, &[(19, 2), (30, 1)]),
    row((43, 4158), 86, &[(7, 3), (9, 30), (18, 20), (20, 30), (25, 3)]),
    row((59, 6930), 118, &[(10, 30), (19, 60), (21, 10), (26, 3), (30, 15)]),
    row((59, 6930), 118, &[(9, 30), (11, 15), (18, 10), (20, 60), (25, 3)]),
    row((43, 4158), 86, &[(10, 30), (12, 3), (19, 30), (21, 20), (26, 3)]),
    row((5, 308), 3, &[(11, 1), (20, 2)]),
    row((13, 396), 13, &[(12, 3), (21, 10)]),
    row((5, 154), 2, &[(13, 1), (22, 1)]),
    row((5, 308), 3, &[(14, 2), (23, 1)]),
    row((151, 13860), 151, &[(13, 15), (15, 90), (22, 30), (24, 15), (27, 1)]),
    row((3, 308), 6, &[(14, 2), (16, 2), (23, 1), (28, 1)]),
    row((151, 13860), 151, &[(15, 90), (17, 15), (22, 15), (24, 30), (27, 1)]),
    row((5, 308), 3, &[(16, 2), (28, 1)]),
    row((5, 154), 2, &[(17, 1), (24, 1)]),
    row((13, 396), 13, &[(18, 10), (25, 3)]),
    row((1, 60), 11, &[(19, 10), (26, 1)]),
    row((23, 1980), 23, &[(18, 5), (20, 15), (25, 3)]),
    row((23, 1980), 23, &[(19, 15), (21, 5), (26, 3)]),
    row((1, 60), 11, &[(20, 10), (25, 1)]),
    row((13, 396), 13, &[(21, 10), (26, 3)]),
    row((16, 495), 16, &[(22, 15), (27, 1)]),
    row((1, 66), 1, &[(23, 1)]),
    row((16, 1485), 32, &[(22, 15), (24, 15), (27, 2)]),
    row((1, 66), 1, &[(28, 1)]),
    row((16, 495), 16, &[(24, 15), (27, 1)]),
    row((3, 110), 1, &[(25, 1)]),
    row((1, 110), 1, &[(26, 1)]),
    row((1, 110), 1, &[(25, 1)]),
    row((3, 110), 1, &[(26, 1)]),
    row((1, 66), 1, &[(27, 1)]),
    row((0, 1), 1, &[]),
    row((1, 66), 1, &[(27, 1)]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
    row((0, 1), 1, &[]),
];
