//! Topological ordering of graph nodes.

use std::collections::VecDeque;

/// Order node indices so every node follows all nodes that point to it.
///
/// `edges[i]` lists the nodes that must come after node `i`. Uses Kahn's
/// algorithm with a synthetic root that points to every node, so nodes
/// without dependencies become ready through the same queue as nodes whose
/// dependencies resolved. A node is emitted the moment its remaining
/// indegree reaches zero, which breaks ties in index order.
///
/// Nodes on a cycle never reach zero and are left out of the result; the
/// caller detects this by comparing lengths. Out-of-range targets are
/// ignored.
#[must_use]
pub fn topological_order(edges: &[Vec<usize>]) -> Vec<usize> {
    let count = edges.len();

    // +1 on every node for the synthetic root's edge.
    let mut in_degree = vec![1usize; count];
    for targets in edges {
        for &target in targets {
            if let Some(degree) = in_degree.get_mut(target) {
                *degree += 1;
            }
        }
    }

    let root: Vec<usize> = (0..count).collect();
    let mut queue: VecDeque<Option<usize>> = VecDeque::from([None]);
    let mut order = Vec::with_capacity(count);

    while let Some(current) = queue.pop_front() {
        let targets = match current {
            None => root.as_slice(),
            Some(idx) => edges.get(idx).map_or(&[][..], Vec::as_slice),
        };
        for &target in targets {
            if let Some(degree) = in_degree.get_mut(target) {
                *degree = degree.saturating_sub(1);
                if *degree == 0 {
                    queue.push_back(Some(target));
                    order.push(target);
                }
            }
        }
    }

    order
}
