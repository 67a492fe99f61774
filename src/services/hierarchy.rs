use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, error};

use crate::error::{ServiceError, ServiceResult};
use crate::repository::CategoryStore;

/// Resolves the full descendant set of a category through parent-pointer
/// child edges.
///
/// The stored hierarchy should be a forest, but corrupt data can turn it
/// into an arbitrary directed graph. Traversal defends with two
/// independent safety nets: a visited-id set (cycles) and a hard depth
/// ceiling (pathological depth, or cycles looping inside it).
pub struct HierarchyResolver {
    categories: Arc<dyn CategoryStore>,
}

impl HierarchyResolver {
    pub fn new(categories: Arc<dyn CategoryStore>) -> Self {
        Self { categories }
    }

    /// Collect every category id reachable from `root_id` through child
    /// edges, excluding the root itself. Callers wanting the whole tree
    /// union the root back in.
    ///
    /// A chain of exactly `max_depth` levels resolves; discovering
    /// children below that fails with `HierarchyDepthExceeded` rather
    /// than silently truncating, which would undercount tree queries.
    /// An unknown root yields an empty set - existence checks belong to
    /// the caller.
    pub async fn resolve_descendants(
        &self,
        root_id: i64,
        max_depth: u32,
        include_inactive: bool,
    ) -> ServiceResult<HashSet<i64>> {
        let mut descendants = HashSet::new();
        let mut visited = HashSet::from([root_id]);
        // child -> parent links, kept to reconstruct the offending chain
        // when a cycle is found
        let mut parents: HashMap<i64, i64> = HashMap::new();

        let mut frontier = vec![root_id];
        let mut depth = 0u32;

        while !frontier.is_empty() {
            // depth of the children about to be discovered
            depth += 1;
            let mut next_frontier = Vec::new();

            for node_id in frontier {
                let children = self
                    .categories
                    .direct_children(node_id, include_inactive)
                    .await?;
                if children.is_empty() {
                    continue;
                }
                if depth > max_depth {
                    error!(
                        category_id = node_id,
                        max_depth,
                        depth,
                        "Category hierarchy exceeds configured depth ceiling"
                    );
                    return Err(ServiceError::HierarchyDepthExceeded {
                        category_id: node_id,
                        max_depth,
                        depth,
                    });
                }

                for child in children {
                    // Parent-pointer storage lists each id under exactly
                    // one parent, so a second encounter is always a cycle.
                    if !visited.insert(child.id) {
                        let chain = ancestor_chain(&parents, root_id, node_id, child.id);
                        error!(
                            category_id = child.id,
                            parent_id = node_id,
                            chain = ?chain,
                            "Circular reference detected in category hierarchy"
                        );
                        return Err(ServiceError::CircularReference {
                            category_id: child.id,
                            parent_id: node_id,
                        });
                    }
                    parents.insert(child.id, node_id);
                    descendants.insert(child.id);
                    next_frontier.push(child.id);
                }
            }

            frontier = next_frontier;
        }

        debug!(
            root_id,
            count = descendants.len(),
            include_inactive,
            "Resolved category descendants"
        );
        Ok(descendants)
    }
}

/// Reconstruct the root -> ... -> parent -> offender id chain from the
/// recorded parent links.
fn ancestor_chain(
    parents: &HashMap<i64, i64>,
    root_id: i64,
    parent_id: i64,
    offender: i64,
) -> Vec<i64> {
    let mut chain = vec![parent_id];
    let mut current = parent_id;
    while current != root_id {
        match parents.get(&current) {
            Some(&parent) => {
                chain.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    chain.reverse();
    chain.push(offender);
    chain
}
