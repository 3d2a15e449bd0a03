use approx::assert_relative_eq;
use armature_math::{MathError, Matrix3x3, Matrix3x4, Vector3};
use std::f32::consts::FRAC_PI_2;

fn sample_transforms() -> [Matrix3x4; 5] {
    [
        Matrix3x4::identity(),
        Matrix3x4::rotate_x(0.4),
        Matrix3x4::translate(Vector3::new(1.0, -2.0, 3.0)),
        Matrix3x4::scale(Vector3::new(2.0, 1.0, 0.5)),
        Matrix3x4::rotate_z(-1.1).multiply(&Matrix3x4::translate(Vector3::new(0.25, 4.0, -1.0))),
    ]
}

fn sample_points() -> [Vector3; 5] {
    [
        Vector3::zeros(),
        Vector3::x_axis(),
        Vector3::new(0.5, -1.25, 2.0),
        Vector3::new(-3.0, 0.0, 0.125),
        Vector3::new(10.0, 10.0, 10.0),
    ]
}

#[test]
fn test_checked_access_agrees_with_indexer() {
    let m = Matrix3x4::rotate_y(0.9).multiply(&Matrix3x4::translate(Vector3::new(1.0, 2.0, 3.0)));

    for row in 0..3 {
        for col in 0..4 {
            assert_eq!(
                m.get(row, col).unwrap(),
                m[(row, col)],
                "get({}, {}) disagrees with indexer",
                row,
                col
            );
        }
    }
}

#[test]
fn test_bounds_differ_by_shape() {
    // Column 3 is the translation column of a 3x4 but out of range for a 3x3.
    assert!(Matrix3x4::identity().get(0, 3).is_ok());

    match Matrix3x3::new().get(0, 3) {
        Err(MathError::IndexOutOfBounds { shape, row, col }) => {
            assert_eq!(shape, "3x3");
            assert_eq!((row, col), (0, 3));
        }
        other => panic!("expected IndexOutOfBounds, got {:?}", other),
    }

    assert!(Matrix3x3::new().get(3, 0).is_err());
    assert!(Matrix3x4::identity().get(3, 0).is_err());
    assert!(Matrix3x4::identity().get(0, 4).is_err());
}

#[test]
fn test_identity_is_neutral_for_multiplication() {
    let identity = Matrix3x4::identity();

    for m in sample_transforms() {
        assert_eq!(identity.multiply(&m), m, "identity * m changed {}", m);
        assert_eq!(m.multiply(&identity), m, "m * identity changed {}", m);
    }
}

#[test]
fn test_multiplication_is_associative() {
    let a = Matrix3x4::rotate_z(0.3);
    let b = Matrix3x4::translate(Vector3::new(1.0, -2.0, 0.5));
    let c = Matrix3x4::rotate_x(-0.9).multiply(&Matrix3x4::scale(Vector3::new(2.0, 2.0, 2.0)));

    let left = a.multiply(&b).multiply(&c);
    let right = a.multiply(&b.multiply(&c));

    let diff = left.max_difference(&right);
    assert!(diff < 1e-5, "associativity violated, max element diff {}", diff);
}

#[test]
fn test_composition_matches_sequential_application() {
    let a = Matrix3x4::rotate_z(0.3).multiply(&Matrix3x4::translate(Vector3::new(1.0, 2.0, 3.0)));
    let b = Matrix3x4::rotate_x(-0.8).multiply(&Matrix3x4::scale(Vector3::new(2.0, 1.0, 0.5)));
    let composed = a.multiply(&b);

    for p in sample_points() {
        let sequential = a.transform_point(b.transform_point(p));
        let direct = composed.transform_point(p);

        assert_relative_eq!(direct.x, sequential.x, epsilon = 1e-5);
        assert_relative_eq!(direct.y, sequential.y, epsilon = 1e-5);
        assert_relative_eq!(direct.z, sequential.z, epsilon = 1e-5);
    }
}

#[test]
fn test_rotation_factories_at_zero_are_identity() {
    assert_eq!(Matrix3x4::rotate_x(0.0), Matrix3x4::identity());
    assert_eq!(Matrix3x4::rotate_y(0.0), Matrix3x4::identity());
    assert_eq!(Matrix3x4::rotate_z(0.0), Matrix3x4::identity());
}

#[test]
fn test_rotation_inverse_negates_angle() {
    for angle in [-2.1f32, -0.7, 0.0, 0.3, 1.2, 2.8] {
        let pairs = [
            (Matrix3x4::rotate_x(angle), Matrix3x4::rotate_x(-angle)),
            (Matrix3x4::rotate_y(angle), Matrix3x4::rotate_y(-angle)),
            (Matrix3x4::rotate_z(angle), Matrix3x4::rotate_z(-angle)),
        ];

        for (m, negated) in pairs {
            let inv = m.invert().unwrap();
            let diff = inv.max_difference(&negated);
            assert!(
                diff < 1e-6,
                "inverse of rotation by {} differs from negated angle by {}",
                angle,
                diff
            );
        }
    }
}

#[test]
fn test_translation_inverse_negates_offset() {
    for offset in [
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(-4.5, 0.25, 100.0),
        Vector3::zeros(),
    ] {
        let inv = Matrix3x4::translate(offset).invert().unwrap();
        assert_eq!(inv, Matrix3x4::translate(-offset));
    }
}

#[test]
fn test_rigid_transform_roundtrip() {
    let rigid = [
        Matrix3x4::rotate_x(0.7),
        Matrix3x4::rotate_z(-2.3).multiply(&Matrix3x4::translate(Vector3::new(5.0, -1.0, 2.0))),
        Matrix3x4::translate(Vector3::new(0.0, 0.0, -9.5))
            .multiply(&Matrix3x4::rotate_y(1.9))
            .multiply(&Matrix3x4::rotate_x(-0.2)),
    ];

    for m in rigid {
        let inv = m.invert().unwrap();

        let forward = m.multiply(&inv).max_difference(&Matrix3x4::identity());
        let backward = inv.multiply(&m).max_difference(&Matrix3x4::identity());
        assert!(forward < 1e-5, "m * inv off identity by {}", forward);
        assert!(backward < 1e-5, "inv * m off identity by {}", backward);

        // Round-tripping a point lands back where it started.
        for p in sample_points() {
            let back = inv.transform_point(m.transform_point(p));
            assert_relative_eq!(back.x, p.x, epsilon = 1e-4);
            assert_relative_eq!(back.y, p.y, epsilon = 1e-4);
            assert_relative_eq!(back.z, p.z, epsilon = 1e-4);
        }
    }
}

#[test]
fn test_uniform_scale_inverts_to_identity() {
    // The inverse normalizes the basis columns, so scale comes back
    // removed rather than reciprocal.
    let inv = Matrix3x4::scale(Vector3::new(2.0, 3.0, 4.0)).invert().unwrap();
    assert_eq!(inv, Matrix3x4::identity());
}

#[test]
fn test_shear_is_not_inverted() {
    // A sheared rotation block violates the orthogonality assumption. The
    // call still succeeds but the product with the result is far from the
    // identity.
    let mut sheared = Matrix3x4::identity();
    sheared.set_m12(0.5);

    let inv = sheared.invert().unwrap();
    let diff = sheared.multiply(&inv).max_difference(&Matrix3x4::identity());
    assert!(diff > 0.01, "expected shear to defeat the inverse, diff {}", diff);
}

#[test]
fn test_degenerate_transform_is_rejected() {
    let err = Matrix3x4::empty().invert().unwrap_err();
    assert!(matches!(err, MathError::DegenerateTransform { .. }));
    assert!(
        err.to_string().starts_with("degenerate transform in invert:"),
        "unexpected message: {}",
        err
    );

    assert!(Matrix3x4::scale(Vector3::new(1.0, 0.0, 1.0)).invert().is_err());
}

#[test]
fn test_scale_transforms_componentwise() {
    let m = Matrix3x4::scale(Vector3::new(2.0, 3.0, 4.0));
    let p = Vector3::new(1.5, -1.0, 0.25);

    assert_eq!(m.transform_point(p), Vector3::new(3.0, -3.0, 1.0));
    assert_eq!(m.transform_vector(p), Vector3::new(3.0, -3.0, 1.0));
}

#[test]
fn test_points_translate_but_vectors_do_not() {
    let m = Matrix3x4::rotate_z(FRAC_PI_2).multiply(&Matrix3x4::translate(Vector3::zeros()));
    let offset = Matrix3x4::translate(Vector3::new(0.0, 0.0, 5.0)).multiply(&m);

    let p = offset.transform_point(Vector3::x_axis());
    let v = offset.transform_vector(Vector3::x_axis());

    assert_relative_eq!(p.z, 5.0, epsilon = 1e-6);
    assert_relative_eq!(v.z, 0.0, epsilon = 1e-6);
    assert_relative_eq!(p.y, v.y, epsilon = 1e-6);
}

#[test]
fn test_rotation_block_copies_into_3x3() {
    let m = Matrix3x4::rotate_y(0.9);
    let mut block = Matrix3x3::new();

    for row in 0..3 {
        for col in 0..3 {
            block[(row, col)] = m[(row, col)];
        }
    }

    assert_eq!(block[(0, 0)], m.m11());
    assert_eq!(block[(0, 2)], m.m13());
    assert_eq!(block[(2, 0)], m.m31());
}

#[test]
fn test_display_labels_every_element() {
    let s = format!("{}", Matrix3x4::rotate_z(0.5));
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(lines.len(), 3, "expected one line per row:\n{}", s);

    for (row, line) in lines.iter().enumerate() {
        for col in 1..=4 {
            let label = format!("M{}{}:", row + 1, col);
            assert!(line.contains(&label), "row {} missing label {}", row, label);
        }
    }

    let s = format!("{}", Matrix3x3::new());
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        format!("M11: {:<16}M12: {:<16}M13: {:<16}", 0.0, 0.0, 0.0)
    );
}
