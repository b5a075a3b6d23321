use nalgebra::point;
use vinemesh::{MeshBuffer, Skeleton, TubeBuilder, TubeConfig};

/// Ensure that tube meshes can be built with any unsigned index type wide enough for the result
#[test]
#[allow(clippy::just_underscores_and_digits)]
fn mesh_index() {
    let mut s = Skeleton::new(point![0.0, 0.0, 0.0]);
    s.add_child(s.root(), point![0.0, 3.0, 0.0]).unwrap();
    let builder = TubeBuilder::new(TubeConfig {
        radius_segments: 3,
        target_segment_count: 2,
        ..TubeConfig::default()
    })
    .unwrap();

    let _8: MeshBuffer<u8> = builder.build(&s).unwrap();
    let _16: MeshBuffer<u16> = builder.build(&s).unwrap();
    let _32: MeshBuffer<u32> = builder.build(&s).unwrap();
    let _64: MeshBuffer<u64> = builder.build(&s).unwrap();
    let _size: MeshBuffer<usize> = builder.build(&s).unwrap();
    assert_eq!(_8.faces()[20].indices.map(u32::from), _32.faces()[20].indices);
}
