//! Position swaps for intrusive binary trees.
//!
//! - `adjacent.rs`: [`swap_adjacent`], a parent and its direct child.
//! - `distant.rs`: [`swap_distant`], two nodes with no ancestor relation.
//!
//! Both functions only rewire links. They do not know the tree's root, its
//! balancing scheme or its payload, and they do not verify topology: the
//! caller decides which variant applies and supplies the real parents. The
//! slot that holds the moving node in its parent (or the caller's root
//! pointer) is rewritten through an `FnOnce` callback, so it runs exactly
//! once per swap and is the place to update slot-dependent metadata.

mod adjacent;
mod distant;

pub use adjacent::swap_adjacent;
pub use distant::swap_distant;

use crate::links::Links;

/// Points `node`'s parent link at `parent` if `node` is present.
#[inline]
pub(crate) fn set_parent_nullable<L>(links: &mut L, node: Option<L::Id>, parent: L::Id)
where
    L: Links + ?Sized,
{
    if let Some(node) = node {
        links.set_parent(node, Some(parent));
    }
}
