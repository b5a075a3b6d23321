use nalgebra::{Point3, Vector3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::{NodeId, Skeleton};

/// The most children a node of a [random](Skeleton::random) skeleton may have.
pub const MAX_RANDOM_BRANCHES: u32 = 4;

/// Per-axis bounds on the magnitude of the offset between a [random](Skeleton::random) node and
/// its parent. The sign of each axis is chosen independently.
pub const RANDOM_OFFSET_RANGE: (f32, f32) = (2.0, 10.0);

impl Skeleton {
    /// Grow a randomly branching skeleton from a root at the origin, using at most `edge_budget`
    /// edges.
    ///
    /// Each node draws a number of children in `0..=4` (capped by the remaining budget), and
    /// children are then grown depth-first in the order they were drawn. Growth stops once the
    /// budget is spent, or earlier if every open node draws zero children.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, edge_budget: u32) -> Self {
        let mut res = Self::new(Point3::origin());
        let mut budget = edge_budget;
        let mut node_stack = vec![res.root()];
        while let Some(node) = node_stack.pop() {
            if budget == 0 {
                break;
            }
            let branches = rng.random_range(0..=MAX_RANDOM_BRANCHES.min(budget));
            budget -= branches;

            let base = res.nodes[node.0 as usize].position;
            let first = res.nodes.len() as u32;
            for i in 0..branches {
                res.push_child_unchecked(node, base + random_offset(rng), NodeId(first + i));
            }
            node_stack.extend((first..first + branches).rev().map(NodeId));
        }
        res
    }

    /// [Self::random], using a [Pcg64] seeded with `seed`, so that the same seed always yields
    /// the same skeleton.
    pub fn random_seeded(seed: u64, edge_budget: u32) -> Self {
        Self::random(&mut Pcg64::seed_from_u64(seed), edge_budget)
    }
}

fn random_offset<R: Rng + ?Sized>(rng: &mut R) -> Vector3<f32> {
    let (min, max) = RANDOM_OFFSET_RANGE;
    Vector3::from_fn(|_, _| {
        let magnitude = rng.random_range(min..=max);
        if rng.random_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    })
}
