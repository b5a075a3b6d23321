//! Flat `{id, position, children}` records, as used by externally authored skeletons.
//!
//! ```json
//! [
//!   { "id": 0, "position": [0, 0, 0], "children": [1, 2] },
//!   { "id": 1, "position": [10, 10, 10] },
//!   { "id": 2, "position": [-30, 30, 30] }
//! ]
//! ```

use std::{collections::HashMap, io::Read};

use nalgebra::Point3;

use crate::{Error, NodeId, Skeleton, SkeletonError};

/// One node of a flat skeleton description.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SkeletonRecord {
    pub id: u64,
    pub position: [f32; 3],
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<u64>,
}

impl Skeleton {
    /// Build a skeleton from flat records.
    ///
    /// The root is the single record which no other record lists as a child. Record order is
    /// irrelevant, but each record's `children` keep their listed order.
    ///
    /// # Errors
    ///
    /// * [`DuplicateId`](SkeletonError::DuplicateId) if two records share an id.
    /// * [`UnknownChild`](SkeletonError::UnknownChild) if a record lists a child id with no record.
    /// * [`MultipleParents`](SkeletonError::MultipleParents) if an id is listed as a child more than once.
    /// * [`NoRoot`](SkeletonError::NoRoot) or [`MultipleRoots`](SkeletonError::MultipleRoots) unless exactly one record is never listed as a child.
    /// * [`Cycle`](SkeletonError::Cycle) if some records can't be reached from the root.
    /// * [`NonFinitePosition`](SkeletonError::NonFinitePosition) if any position is infinite or NaN.
    pub fn from_records(records: &[SkeletonRecord]) -> Result<Self, SkeletonError> {
        let mut by_id = HashMap::<u64, usize>::with_capacity(records.len());
        for (i, r) in records.iter().enumerate() {
            if by_id.insert(r.id, i).is_some() {
                return Err(SkeletonError::DuplicateId(r.id));
            }
        }

        let mut has_parent = vec![false; records.len()];
        for r in records {
            for &child in &r.children {
                let ci = *by_id.get(&child).ok_or(SkeletonError::UnknownChild {
                    parent: r.id,
                    child,
                })?;
                if std::mem::replace(&mut has_parent[ci], true) {
                    return Err(SkeletonError::MultipleParents(child));
                }
            }
        }

        let mut roots: Vec<usize> = (0..records.len()).filter(|&i| !has_parent[i]).collect();
        let root = match roots.len() {
            0 => return Err(SkeletonError::NoRoot),
            1 => roots[0],
            _ => {
                roots.sort_unstable_by_key(|&i| records[i].id);
                return Err(SkeletonError::MultipleRoots(
                    roots.into_iter().map(|i| records[i].id).collect(),
                ));
            }
        };

        let root_pos = Point3::from(records[root].position);
        if !root_pos.coords.iter().all(|c| c.is_finite()) {
            return Err(SkeletonError::NonFinitePosition(Self::ROOT));
        }
        let mut res = Self::new(root_pos);
        res.nodes.reserve(records.len().saturating_sub(1));

        let mut visited = vec![false; records.len()];
        visited[root] = true;
        let mut node_stack = vec![(root, res.root())];
        while let Some((ri, node)) = node_stack.pop() {
            let first = node_stack.len();
            for child in &records[ri].children {
                let ci = by_id[child];
                visited[ci] = true;
                let id = res.add_child(node, Point3::from(records[ci].position))?;
                node_stack.push((ci, id));
            }
            // first child on top
            node_stack[first..].reverse();
        }

        let unreached = (0..records.len())
            .filter(|&i| !visited[i])
            .map(|i| records[i].id)
            .min();
        match unreached {
            Some(id) => Err(SkeletonError::Cycle(id)),
            None => Ok(res),
        }
    }

    /// Flatten `self` into records, using each node's [NodeId] as its record id.
    ///
    /// Records are emitted in [depth-first](Self::depth_first) order, so the root comes first.
    pub fn to_records(&self) -> Vec<SkeletonRecord> {
        self.depth_first()
            .map(|v| {
                let node = &self.nodes[v.node.index()];
                SkeletonRecord {
                    id: u64::from(v.node.0),
                    position: node.position.into(),
                    children: node.children.iter().map(|c: &NodeId| u64::from(c.0)).collect(),
                }
            })
            .collect()
    }

    /// Parse a JSON array of [SkeletonRecord]s and build a skeleton from it.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let records: Vec<SkeletonRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(&records)?)
    }

    /// [Self::from_json_str], reading from `reader`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let records: Vec<SkeletonRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(&records)?)
    }
}
