use std::f32::consts::{PI, TAU};

use nalgebra::{Point3, Vector3};
use quadmesh::{ArrayIndex, MeshBuffer};

use crate::{ConfigError, Error, MIN_RADIUS_SEGMENTS};

use super::{buffer_for, quad};

/// Radius of the sphere placed over each skeleton node. Independent of the tube radius.
pub const JOINT_CAP_RADIUS: f32 = 1.0;

/// Vertices in a cap with `radius_segments` latitude and longitude divisions.
///
/// Saturates at `usize::MAX`; see [checked_cap_counts] for a fallible version.
#[inline]
pub fn cap_vertex_count(radius_segments: u32) -> usize {
    let n = radius_segments as usize;
    n.saturating_add(1).saturating_mul(n)
}

#[inline]
pub fn cap_face_count(radius_segments: u32) -> usize {
    let n = radius_segments as usize;
    n.saturating_mul(n)
}

/// Vertex and face counts of a cap, or `None` if either overflows `usize`.
pub fn checked_cap_counts(radius_segments: u32) -> Option<(usize, usize)> {
    let n = radius_segments as usize;
    Some((n.checked_add(1)?.checked_mul(n)?, n.checked_mul(n)?))
}

/// Build a sphere of radius [JOINT_CAP_RADIUS] around `center`, closing the seams where tube
/// strips meet.
///
/// Every corner of every face carries the same `depth`.
pub fn cap_joint<Idx: ArrayIndex>(
    center: &Point3<f32>,
    depth: f32,
    radius_segments: u32,
) -> Result<MeshBuffer<Idx>, Error> {
    if radius_segments < MIN_RADIUS_SEGMENTS {
        return Err(ConfigError::TooFewRadiusSegments(radius_segments).into());
    }
    let n = radius_segments as usize;
    let counts = checked_cap_counts(radius_segments);
    let mut buf = buffer_for::<Idx>(counts.map(|c| c.0), counts.map_or(0, |c| c.1))?;

    for ring in 0..=n {
        let (sin_phi, cos_phi) = (PI * ring as f32 / n as f32).sin_cos();
        for seg in 0..n {
            let (sin_theta, cos_theta) = (TAU * seg as f32 / n as f32).sin_cos();
            let dir = Vector3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);
            buf.push_vertex(center + dir * JOINT_CAP_RADIUS, dir)?;
        }
    }

    for ring in 0..n {
        for seg in 0..n {
            let next = (seg + 1) % n;
            let i0 = ring * n + seg;
            let i1 = ring * n + next;
            let i2 = (ring + 1) * n + seg;
            let i3 = (ring + 1) * n + next;
            buf.push_face(quad([i0, i1, i3, i2], [depth; 4])?)?;
        }
    }
    Ok(buf)
}
