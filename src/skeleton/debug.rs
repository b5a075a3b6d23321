use std::fmt::Display;

use crate::Skeleton;

impl Display for Skeleton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Skeleton ({} nodes, total length {}, max depth {}) {{",
            self.len(),
            self.total_length(),
            self.max_depth(),
        )?;
        let mut stack = vec![(self.root(), 0)];
        while let Some((id, depth)) = stack.pop() {
            let indent = "  ".repeat(depth + 1);
            let node = &self.nodes[id.0 as usize];
            let p = node.position();
            write!(f, "\n{indent}<{id}> ({}, {}, {})", p.x, p.y, p.z)?;
            for &child in node.children().iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        write!(f, "\n}}")
    }
}
