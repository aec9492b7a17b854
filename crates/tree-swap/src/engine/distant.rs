use crate::links::Links;

use super::set_parent_nullable;

/// Swaps two nodes where neither is an ancestor of the other.
///
/// `node1_parent` and `node2_parent` must be the nodes' actual parents
/// (`None` for the root). After the call each node holds the other's former
/// parent, left child and right child; nothing else moves.
///
/// Callback order:
/// 1. `rewire_node1_parent(links, node2)`, then
///    `rewire_node2_parent(links, node1)`, each exactly once. They must write
///    the new occupant into the slot (or caller's root) that held `node1`
///    and `node2` respectively. When both nodes share a parent the two
///    callbacks write that parent's two different slots, so the slot has to
///    be decided by the caller beforehand, not by searching the parent for
///    the old occupant.
/// 2. `set_parent(node1, node2_parent)`, `set_parent(node2, node1_parent)`.
/// 3. Left children are exchanged and each present one is reparented.
/// 4. Right children, likewise.
///
/// The left/right labeling only has to be consistent between both nodes; the
/// result is the same with the two exchanged.
///
/// A direct parent/child pair must go through
/// [`swap_adjacent`](super::swap_adjacent) instead; this function would link
/// the pair to itself.
pub fn swap_distant<L, F1, F2>(
    links: &mut L,
    node1: L::Id,
    node2: L::Id,
    node1_parent: Option<L::Id>,
    node2_parent: Option<L::Id>,
    rewire_node1_parent: F1,
    rewire_node2_parent: F2,
) where
    L: Links + ?Sized,
    F1: FnOnce(&mut L, L::Id),
    F2: FnOnce(&mut L, L::Id),
{
    rewire_node1_parent(links, node2);
    rewire_node2_parent(links, node1);
    links.set_parent(node1, node2_parent);
    links.set_parent(node2, node1_parent);

    let left1 = links.left(node1);
    let left2 = links.left(node2);
    links.set_left(node1, left2);
    links.set_left(node2, left1);
    set_parent_nullable(links, left1, node2);
    set_parent_nullable(links, left2, node1);

    let right1 = links.right(node1);
    let right2 = links.right(node2);
    links.set_right(node1, right2);
    links.set_right(node2, right1);
    set_parent_nullable(links, right1, node2);
    set_parent_nullable(links, right2, node1);
}
