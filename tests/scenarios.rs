use nalgebra::point;
use vinemesh::{
    tube::{cap_face_count, cap_vertex_count},
    build_mesh, Error, Skeleton, SkeletonError, TubeBuilder, TubeConfig,
};

fn config(radius_segments: u32, target_segment_count: u32) -> TubeConfig {
    TubeConfig {
        radius: 1.0,
        radius_segments,
        target_segment_count,
        ..TubeConfig::default()
    }
}

#[test]
fn single_edge() {
    let mut s = Skeleton::new(point![0.0, 0.0, 0.0]);
    s.add_child(s.root(), point![10.0, 0.0, 0.0]).unwrap();
    assert_eq!(s.total_length(), 10.0);
    assert_eq!(s.max_depth(), 10.0);

    let m = build_mesh(&s, &config(4, 1)).unwrap();
    let cap = cap_vertex_count(4);
    assert_eq!(m.vertex_count(), 8 + 2 * cap);
    assert_eq!(m.face_count(), 4 + 2 * cap_face_count(4));

    let strip = &m.faces()[cap_face_count(4)..cap_face_count(4) + 4];
    for f in strip {
        for (&i, &d) in f.indices.iter().zip(&f.depth) {
            let x = m.positions()[i as usize].x;
            if x == 0.0 {
                assert_eq!(d, 0.0);
            } else {
                assert_eq!(x, 10.0);
                assert_eq!(d, 1.0);
            }
        }
    }
}

#[test]
fn random_zero_budget() {
    let s = Skeleton::random_seeded(7, 0);
    assert_eq!(s.len(), 1);
    assert!(s.get(s.root()).unwrap().is_leaf());
    assert_eq!(s.total_length(), 0.0);
    assert_eq!(s.max_depth(), 0.0);
}

#[test]
fn y_shape() {
    let s = Skeleton::from_json_str(
        r#"[
            { "id": 0, "position": [0, 0, 0], "children": [1, 2] },
            { "id": 1, "position": [10, 10, 10] },
            { "id": 2, "position": [-30, 30, 30] }
        ]"#,
    )
    .unwrap();
    let builder = TubeBuilder::new(config(6, 16)).unwrap();
    let m = builder.build::<u32>(&s).unwrap();
    m.validate().unwrap();
    assert_eq!(
        Some((m.vertex_count(), m.face_count())),
        builder.expected_counts(&s)
    );

    // root cap first, then each branch's strip and cap in declaration order
    let cap_v = cap_vertex_count(6);
    let first_strip = m.faces()[cap_face_count(6)];
    assert_eq!(first_strip.indices[0] as usize, cap_v);

    let depths: Vec<f32> = m.face_vertex_depths().collect();
    assert_eq!(depths.len(), 4 * m.face_count());
    assert!(depths.iter().all(|d| (0.0..=1.0).contains(d)));
    assert!(depths.contains(&1.0));
}

#[test]
fn coincident_child() {
    let mut s = Skeleton::new(point![1.0, -1.0, 2.0]);
    s.add_child(s.root(), point![1.0, -1.0, 2.0]).unwrap();
    let m = build_mesh(&s, &config(8, 64)).unwrap();
    m.validate().unwrap();
    assert!(m.face_count() >= 2 * cap_face_count(8));
    assert!(m.positions().iter().all(|p| p.coords.iter().all(|c| c.is_finite())));
    assert!(m.face_vertex_depths().all(|d| d == 0.0));
}

#[test]
fn rejects_two_roots() {
    let res = Skeleton::from_json_str(
        r#"[
            { "id": 0, "position": [0, 0, 0] },
            { "id": 1, "position": [1, 0, 0] }
        ]"#,
    );
    assert!(matches!(
        res,
        Err(Error::Skeleton(SkeletonError::MultipleRoots(ids))) if ids == [0, 1]
    ));
}

#[test]
fn grown_faces() {
    let mut s = Skeleton::new(point![0.0, 0.0, 0.0]);
    s.add_child(s.root(), point![0.0, 0.0, 8.0]).unwrap();
    let m = build_mesh(&s, &config(4, 8)).unwrap();
    assert_eq!(m.grown_face_count(0.0), cap_face_count(4));
    assert_eq!(m.grown_face_count(1.0), m.face_count());
    let half = m.grown_face_count(0.5);
    assert_eq!(half, cap_face_count(4) + 4 * 4);
}
