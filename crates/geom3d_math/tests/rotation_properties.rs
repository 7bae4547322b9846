//! Integration tests for polyhedron rotation
//!
//! These tests exercise the public API end to end:
//! 1. Vertex storage (default tetrahedron, replacement, lookup)
//! 2. Axis-angle rotation about arbitrary pivots
//! 3. Quaternion to matrix conversion

use geom3d_math::{
    GeometryError, Polyhedrond, Polyhedronf, Quaternion, RotationMatrix3, Vector3, MIN_VERTICES,
};
use std::f64::consts::{PI, TAU};

const EPSILON: f64 = 1e-9;

fn vec_approx_eq(a: Vector3<f64>, b: Vector3<f64>) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON && (a.z - b.z).abs() < EPSILON
}

fn assert_vertices_approx_eq(a: &Polyhedrond, b: &Polyhedrond) {
    assert_eq!(a.num_vertices(), b.num_vertices());
    for (i, (va, vb)) in a.vertices().iter().zip(b.vertices()).enumerate() {
        assert!(vec_approx_eq(*va, *vb), "vertex {}: {:?} vs {:?}", i, va, vb);
    }
}

fn sample_axes() -> Vec<Vector3<f64>> {
    vec![
        Vector3::unit_x(),
        Vector3::unit_y(),
        Vector3::unit_z(),
        Vector3::new(1.0f64, 1.0, 1.0).normalized(),
        Vector3::new(-0.3f64, 0.8, 0.2).normalized(),
    ]
}

fn sample_pivots() -> Vec<Vector3<f64>> {
    vec![
        Vector3::zero(),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(-2.5, 3.0, 0.75),
    ]
}

fn irregular_polyhedron() -> Polyhedrond {
    Polyhedrond::from_points(&[
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(2.0, 0.1, -0.4),
        Vector3::new(0.3, 1.7, 0.2),
        Vector3::new(-0.6, 0.4, 1.9),
        Vector3::new(1.1, 1.2, 1.3),
        Vector3::new(-3.0, -1.0, 0.5),
    ])
}

// ==================== Vertex Storage Tests ====================

#[test]
fn test_default_polyhedron_vertices() {
    let p = Polyhedrond::new();
    assert_eq!(p.num_vertices(), MIN_VERTICES);

    let expected = [
        Vector3::new(-1.0, -1.0, 0.0),
        Vector3::new(1.0, -1.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ];
    for (i, e) in expected.iter().enumerate() {
        let mut out = Vector3::zero();
        p.get_vertex(i, &mut out).unwrap();
        assert_eq!(out, *e);
    }
}

#[test]
fn test_set_vertices_short_list_keeps_old_data() {
    let mut p = irregular_polyhedron();
    let snapshot = p.vertices().to_vec();

    for count in 0..MIN_VERTICES {
        let pts = vec![Vector3::new(9.0, 9.0, 9.0); count];
        let result = p.set_vertices(&pts);
        assert_eq!(result, Err(GeometryError::InvalidArgument { count, min: MIN_VERTICES }));
        assert_eq!(p.num_vertices(), snapshot.len());
        assert_eq!(p.vertices(), snapshot.as_slice());
    }
}

#[test]
fn test_set_vertices_replaces_everything() {
    let mut p = Polyhedrond::new();

    for count in [4usize, 5, 12] {
        let pts: Vec<_> = (0..count)
            .map(|i| Vector3::new(i as f64, -(i as f64), 0.5 * i as f64))
            .collect();
        p.set_vertices(&pts).unwrap();

        assert_eq!(p.num_vertices(), count);
        for (i, pt) in pts.iter().enumerate() {
            assert_eq!(p.vertex(i), Some(*pt));
        }
    }
}

#[test]
fn test_get_vertex_out_of_range_is_harmless() {
    let p = irregular_polyhedron();
    let sentinel = Vector3::new(42.0, -42.0, 4.2);

    for index in [p.num_vertices(), p.num_vertices() + 1, usize::MAX] {
        let mut out = sentinel;
        assert!(matches!(
            p.get_vertex(index, &mut out),
            Err(GeometryError::IndexOutOfRange { .. })
        ));
        assert_eq!(out, sentinel);
        assert_eq!(p.vertex(index), None);
    }
}

// ==================== Rotation Tests ====================

#[test]
fn test_zero_angle_is_identity() {
    for axis in sample_axes() {
        for pivot in sample_pivots() {
            let original = irregular_polyhedron();
            let mut p = original.clone();
            p.rotate(axis, pivot, 0.0);
            assert_vertices_approx_eq(&p, &original);
        }
    }
}

#[test]
fn test_full_turn_returns_to_start() {
    for axis in sample_axes() {
        for pivot in sample_pivots() {
            let original = irregular_polyhedron();
            let mut p = original.clone();
            p.rotate(axis, pivot, TAU);
            assert_vertices_approx_eq(&p, &original);
        }
    }
}

#[test]
fn test_half_turn_about_z_through_origin() {
    let mut p = Polyhedrond::new();
    p.rotate(Vector3::new(0.0, 0.0, 1.0), Vector3::zero(), PI);

    assert!(vec_approx_eq(p.vertex(0).unwrap(), Vector3::new(1.0, 1.0, 0.0)),
        "(-1,-1,0) should map to (1,1,0), got {:?}", p.vertex(0));
    assert!(vec_approx_eq(p.vertex(3).unwrap(), Vector3::new(0.0, 0.0, 1.0)),
        "on-axis vertex should not move, got {:?}", p.vertex(3));
}

#[test]
fn test_rotation_is_invertible() {
    for axis in sample_axes() {
        for pivot in sample_pivots() {
            for angle in [0.1, 1.0, -2.3, PI / 3.0, 5.0] {
                let original = irregular_polyhedron();
                let mut p = original.clone();
                p.rotate(axis, pivot, angle);
                p.rotate(axis, pivot, -angle);
                assert_vertices_approx_eq(&p, &original);
            }
        }
    }
}

#[test]
fn test_rotation_preserves_distance_to_pivot() {
    let axis = Vector3::new(0.2f64, -0.4, 0.9).normalized();
    let pivot = Vector3::new(0.5, 0.5, -1.0);
    let original = irregular_polyhedron();
    let mut p = original.clone();
    p.rotate(axis, pivot, 0.8);

    for (before, after) in original.vertices().iter().zip(p.vertices()) {
        let d0 = (*before - pivot).length();
        let d1 = (*after - pivot).length();
        assert!((d0 - d1).abs() < EPSILON);
    }
}

#[test]
fn test_single_precision_rotation() {
    let mut p = Polyhedronf::new();
    p.rotate(Vector3::unit_z(), Vector3::zero(), PI);

    let v = p.vertex(1).unwrap();
    assert!((v.x + 1.0).abs() < 1e-5 && (v.y - 1.0).abs() < 1e-5 && v.z.abs() < 1e-5,
        "(1,-1,0) should map to (-1,1,0), got {:?}", v);
}

// ==================== Quaternion / Matrix Tests ====================

#[test]
fn test_identity_quaternion_conversion() {
    let m = RotationMatrix3::from_quaternion(&Quaternion::new(1.0, 0.0, 0.0, 0.0));
    assert!(m.is_identity());
}

#[test]
fn test_polyhedron_rotate_matches_matrix() {
    let axis = Vector3::new(1.0f64, -1.0, 0.5).normalized();
    let pivot = Vector3::new(0.25, -0.5, 2.0);
    let angle = 0.9;

    let m = RotationMatrix3::from_axis_angle(axis, angle).unwrap();
    let original = irregular_polyhedron();
    let mut p = original.clone();
    p.rotate(axis, pivot, angle);

    for (before, after) in original.vertices().iter().zip(p.vertices()) {
        let expected = m * (*before - pivot) + pivot;
        assert!(vec_approx_eq(*after, expected));
    }
}

#[test]
fn test_shared_polyhedron_behind_mutex() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let shared = Arc::new(Mutex::new(Polyhedrond::new()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let mut p = shared.lock().unwrap();
                p.rotate(Vector3::unit_z(), Vector3::zero(), PI / 2.0);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Four quarter turns make a full turn
    let p = shared.lock().unwrap();
    assert_vertices_approx_eq(&p, &Polyhedrond::new());
}
