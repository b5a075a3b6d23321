//! Wavefront OBJ output.
//!
//! Each face corner's attribute is written as its own texture coordinate `vt <depth> 0`, so a
//! viewer can map it onto a gradient texture. Indices in the output are 1-based.

use std::io::{self, Write};

use vinemesh_common::ArrayIndex;

use crate::MeshBuffer;

/// Write `mesh` as a single OBJ object named `name`.
pub fn write_obj<Idx: ArrayIndex, W: Write>(
    mesh: &MeshBuffer<Idx>,
    name: &str,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "# quadmesh@{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(
        out,
        "# {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    )?;
    writeln!(out, "o {name}")?;
    for p in mesh.positions() {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for n in mesh.normals() {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for d in mesh.face_vertex_depths() {
        writeln!(out, "vt {d} 0")?;
    }
    for (fi, face) in mesh.faces().iter().enumerate() {
        write!(out, "f")?;
        for (k, idx) in face.indices.iter().enumerate() {
            let v = idx.as_index() + 1;
            let vt = fi * 4 + k + 1;
            write!(out, " {v}/{vt}/{v}")?;
        }
        writeln!(out)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use nalgebra::{point, vector};

    use crate::{Face, MeshBuffer};

    #[test]
    fn writes_one_based_indices() {
        let mut m = MeshBuffer::<u32>::new();
        for p in [
            point![0.0, 0.0, 0.0],
            point![1.0, 0.0, 0.0],
            point![1.0, 1.0, 0.0],
            point![0.0, 1.0, 0.0],
        ] {
            m.push_vertex(p, vector![0.0, 0.0, 1.0]).unwrap();
        }
        m.push_face(Face::new([0, 1, 2, 3], [0.0, 0.25, 0.5, 1.0]))
            .unwrap();

        let mut out = Vec::new();
        super::write_obj(&m, "square", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("o square\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 4);
        assert!(text.contains("vt 0.25 0\n"));
        assert!(text.contains("f 1/1/1 2/2/2 3/3/3 4/4/4\n"));
    }
}
