//! Branching skeletons: trees of points in 3D space, joined by straight edges.

mod debug;
mod error;
mod iter;
mod random;
mod records;

pub use error::*;
pub use iter::*;
pub use random::*;
pub use records::*;

use nalgebra::Point3;
use quadmesh::Aabb;

/// Handle to a node within a [Skeleton].
#[repr(transparent)]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A point within a [Skeleton].
#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonNode {
    position: Point3<f32>,
    /// Equal to the node's own id for the root.
    parent: NodeId,
    children: Vec<NodeId>,
}

impl SkeletonNode {
    #[inline]
    pub fn position(&self) -> &Point3<f32> {
        &self.position
    }

    /// Children of this node, in the order they were added.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Euclidean distance between the positions of `self` and `other`.
    #[inline]
    pub fn distance_to(&self, other: &SkeletonNode) -> f32 {
        nalgebra::distance(&self.position, &other.position)
    }
}

/// A tree of 3D points, each connected to its parent by a straight edge.
///
/// Nodes are stored in an arena and addressed by [NodeId]; a node can only be created as the
/// child of an existing node, so every skeleton is a tree with exactly one root.
#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    nodes: Vec<SkeletonNode>,
}

impl Skeleton {
    /// Id of the root node of every skeleton.
    pub const ROOT: NodeId = NodeId(0);

    /// Construct a skeleton consisting only of a root at `root`.
    pub fn new(root: Point3<f32>) -> Self {
        Self {
            nodes: vec![SkeletonNode {
                position: root,
                parent: Self::ROOT,
                children: Vec::new(),
            }],
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// The number of nodes in `self`, including the root.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The number of edges in `self`; one less than the number of nodes.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.nodes.len() - 1
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&SkeletonNode> {
        self.nodes.get(id.index())
    }

    /// Get the node with a specific id.
    ///
    /// # Errors
    ///
    /// * [`InvalidNode`](SkeletonError::InvalidNode) if `id` is not part of `self`.
    #[inline]
    pub fn node(&self, id: NodeId) -> Result<&SkeletonNode, SkeletonError> {
        self.get(id).ok_or(SkeletonError::InvalidNode(id))
    }

    #[inline]
    pub fn position(&self, id: NodeId) -> Result<&Point3<f32>, SkeletonError> {
        self.node(id).map(SkeletonNode::position)
    }

    #[inline]
    pub fn children_of(&self, id: NodeId) -> Result<&[NodeId], SkeletonError> {
        self.node(id).map(SkeletonNode::children)
    }

    /// The parent of a node, or `None` for the root.
    pub fn parent_of(&self, id: NodeId) -> Result<Option<NodeId>, SkeletonError> {
        let node = self.node(id)?;
        Ok((node.parent != id).then_some(node.parent))
    }

    /// Append a new child to `parent`, returning its id.
    ///
    /// # Errors
    ///
    /// * [`InvalidNode`](SkeletonError::InvalidNode) if `parent` is not part of `self`.
    /// * [`NonFinitePosition`](SkeletonError::NonFinitePosition) if any coordinate of `position` is infinite or NaN.
    /// * [`TooManyNodes`](SkeletonError::TooManyNodes) if the new node can't be addressed by a [NodeId].
    pub fn add_child(
        &mut self,
        parent: NodeId,
        position: Point3<f32>,
    ) -> Result<NodeId, SkeletonError> {
        debug_assert!(self.contains(parent), "{parent} is not part of this skeleton");
        if !self.contains(parent) {
            return Err(SkeletonError::InvalidNode(parent));
        }
        if !position.coords.iter().all(|c| c.is_finite()) {
            return Err(SkeletonError::NonFinitePosition(parent));
        }
        let id = u32::try_from(self.nodes.len()).map_err(|_| SkeletonError::TooManyNodes)?;
        Ok(self.push_child_unchecked(parent, position, NodeId(id)))
    }

    /// [Self::add_child], without error checks.
    fn push_child_unchecked(&mut self, parent: NodeId, position: Point3<f32>, id: NodeId) -> NodeId {
        self.nodes.push(SkeletonNode {
            position,
            parent,
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Euclidean distance between two nodes.
    pub fn distance(&self, a: NodeId, b: NodeId) -> Result<f32, SkeletonError> {
        Ok(self.node(a)?.distance_to(self.node(b)?))
    }

    /// The sum of the lengths of every edge in `self`.
    pub fn total_length(&self) -> f32 {
        self.edges().map(|e| e.length).sum()
    }

    /// The length of the longest root-to-leaf path, measured along edges.
    ///
    /// Path lengths are accumulated from the root outward, in the same order used by
    /// [depth_first](Self::depth_first), so the deepest leaf's [Visit::depth] is exactly this
    /// value.
    pub fn max_depth(&self) -> f32 {
        self.depth_first()
            .filter(|v| self.nodes[v.node.index()].is_leaf())
            .map(|v| v.depth)
            .fold(0.0, f32::max)
    }

    /// Distance from the root to a node, measured along edges.
    pub fn depth_of(&self, id: NodeId) -> Result<f32, SkeletonError> {
        let mut path = Vec::new();
        let mut cur = id;
        while let Some(parent) = self.parent_of(cur)? {
            path.push((parent, cur));
            cur = parent;
        }
        Ok(path
            .into_iter()
            .rev()
            .fold(0.0, |depth, (p, c)| {
                depth + self.nodes[p.index()].distance_to(&self.nodes[c.index()])
            }))
    }

    /// Depth-first, pre-order traversal from the root; children are visited in the order they
    /// were added.
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst::new(self)
    }

    /// Every edge of `self`, in [depth-first](Self::depth_first) order of their child nodes.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.depth_first().filter_map(|v| {
            v.parent.map(|parent| Edge {
                parent,
                child: v.node,
                length: v.edge_length,
                start_depth: v.parent_depth,
            })
        })
    }

    /// The bounding box of every node position.
    pub fn bounds(&self) -> Aabb {
        let mut res = Aabb::from_point(self.nodes[Self::ROOT.index()].position);
        for n in &self.nodes[1..] {
            res.grow_to(&n.position);
        }
        res
    }
}
