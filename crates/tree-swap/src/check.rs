//! Link consistency audits.
//!
//! The swap engine trusts its callers and never validates anything. These
//! checks are for tests and debug builds: [`check_local`] is cheap enough to
//! run after every swap, [`check_links`] walks a whole tree.

use std::collections::HashSet;
use std::hash::Hash;

use thiserror::Error;

use crate::links::ParentLinks;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError<Id> {
    #[error("root {root:?} has parent {parent:?}")]
    RootHasParent { root: Id, parent: Id },
    #[error("node {node:?} has parent {found:?}, expected {expected:?}")]
    ParentMismatch {
        node: Id,
        expected: Option<Id>,
        found: Option<Id>,
    },
    #[error("node {child:?} points at parent {parent:?}, which does not hold it")]
    NotAChild { parent: Id, child: Id },
    #[error("node {node:?} reached twice")]
    Cycle { node: Id },
}

/// Verifies the links around `nodes`: each one is held by its parent, and each
/// of its children points back at it.
pub fn check_local<L>(links: &L, nodes: &[L::Id]) -> Result<(), LinkError<L::Id>>
where
    L: ParentLinks + ?Sized,
{
    for &node in nodes {
        if let Some(parent) = links.parent(node) {
            if links.left(parent) != Some(node) && links.right(parent) != Some(node) {
                return Err(LinkError::NotAChild {
                    parent,
                    child: node,
                });
            }
        }
        for child in [links.left(node), links.right(node)].into_iter().flatten() {
            let found = links.parent(child);
            if found != Some(node) {
                return Err(LinkError::ParentMismatch {
                    node: child,
                    expected: Some(node),
                    found,
                });
            }
        }
    }
    Ok(())
}

/// Walks the tree under `root` and returns its node count.
pub fn check_links<L>(links: &L, root: Option<L::Id>) -> Result<usize, LinkError<L::Id>>
where
    L: ParentLinks + ?Sized,
    L::Id: Hash,
{
    let Some(root) = root else {
        return Ok(0);
    };
    if let Some(parent) = links.parent(root) {
        return Err(LinkError::RootHasParent { root, parent });
    }

    let mut visited = HashSet::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            return Err(LinkError::Cycle { node });
        }
        for child in [links.left(node), links.right(node)].into_iter().flatten() {
            let found = links.parent(child);
            if found != Some(node) {
                return Err(LinkError::ParentMismatch {
                    node: child,
                    expected: Some(node),
                    found,
                });
            }
            stack.push(child);
        }
    }
    Ok(visited.len())
}
