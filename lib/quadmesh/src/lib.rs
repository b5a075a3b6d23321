#![doc = include_str!("../README.md")]

mod bounds;
mod buffer;
mod error;
mod face;
#[cfg(feature = "obj")]
pub mod obj;

pub use bounds::*;
pub use buffer::*;
pub use error::*;
pub use face::*;

pub use vinemesh_common::ArrayIndex;

use nalgebra::{Point3, Vector3};

/// Position of a vertex.
pub type Position = Point3<f32>;
/// Unit normal of a vertex or face.
pub type Normal = Vector3<f32>;
