use std::iter::FusedIterator;

use crate::{NodeId, Skeleton};

/// A node reached during a [DepthFirst] traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visit {
    pub node: NodeId,
    /// `None` for the root.
    pub parent: Option<NodeId>,
    /// Length of the edge from `parent` to `node`; 0 for the root.
    pub edge_length: f32,
    /// Distance from the root to `parent`, measured along edges; 0 for the root.
    pub parent_depth: f32,
    /// Distance from the root to `node`, measured along edges. Always `parent_depth + edge_length`.
    pub depth: f32,
}

/// A straight segment between a node and one of its children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub parent: NodeId,
    pub child: NodeId,
    pub length: f32,
    /// Distance from the root to `parent`.
    pub start_depth: f32,
}

/// A depth-first, pre-order iterator over the nodes of a [Skeleton].
///
/// Uses an explicit stack rather than recursion, so arbitrarily deep skeletons are fine.
pub struct DepthFirst<'tree> {
    tree: &'tree Skeleton,
    node_stack: Vec<Visit>,
}

impl<'tree> DepthFirst<'tree> {
    pub(crate) fn new(tree: &'tree Skeleton) -> Self {
        Self {
            tree,
            node_stack: vec![Visit {
                node: Skeleton::ROOT,
                parent: None,
                edge_length: 0.0,
                parent_depth: 0.0,
                depth: 0.0,
            }],
        }
    }
}

impl<'tree> FusedIterator for DepthFirst<'tree> {}

impl<'tree> Iterator for DepthFirst<'tree> {
    type Item = Visit;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.node_stack.pop()?;
        let tree = self.tree;
        let node = &tree.nodes[visit.node.0 as usize];
        // reversed, so that the first child is on top of the stack
        self.node_stack.extend(node.children.iter().rev().map(|&c| {
            let edge_length = node.distance_to(&tree.nodes[c.0 as usize]);
            Visit {
                node: c,
                parent: Some(visit.node),
                edge_length,
                parent_depth: visit.depth,
                depth: visit.depth + edge_length,
            }
        }));
        Some(visit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // every node is visited exactly once, but we don't track how many have been already
        (self.node_stack.len(), Some(self.tree.len()))
    }
}
