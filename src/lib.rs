//! Tube meshes extruded along branching skeletons.
//!
//! A [Skeleton] is a tree of points; [TubeBuilder] walks it depth-first, extruding a ring-based
//! strip along every edge and covering every node with a small spherical cap. The result is a
//! single quad [MeshBuffer] whose faces carry a per-corner depth attribute: the distance from the
//! root along the skeleton, normalized so that the farthest leaf sits at `1.0`. Comparing that
//! attribute against a growth threshold reveals the mesh from the root outward.
//!
//! ```
//! use nalgebra::point;
//! use vinemesh::{build_mesh, Skeleton, TubeConfig};
//!
//! let mut skeleton = Skeleton::new(point![0.0, 0.0, 0.0]);
//! let tip = skeleton.add_child(skeleton.root(), point![0.0, 10.0, 0.0])?;
//! skeleton.add_child(tip, point![5.0, 15.0, 0.0])?;
//!
//! let mesh = build_mesh(&skeleton, &TubeConfig::default())?;
//! assert!(mesh.face_vertex_depths().all(|d| (0.0..=1.0).contains(&d)));
//! # Ok::<(), vinemesh::Error>(())
//! ```
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod config;
mod error;
mod frame;
mod ring;
pub mod skeleton;
pub mod tube;

pub use config::*;
pub use error::*;
pub use frame::*;
pub use ring::*;
pub use skeleton::*;
pub use tube::{build_mesh, TubeBuilder};

pub use quadmesh::{self, Aabb, Face, MeshBuffer};
pub use vinemesh_common::ArrayIndex;
