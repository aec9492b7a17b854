use crate::links::Links;
use crate::types::Direction;

use super::set_parent_nullable;

/// Swaps `parent` with its direct child `child`.
///
/// `child` must hang in `parent`'s `forward` slot and `grandparent` must be
/// `parent`'s parent (`None` when `parent` is the root). Neither is checked.
///
/// ```text
///       g                 g
///       |                 |
///       p                 c
///      / \               / \
///     a   c      →      a   p
///        / \               / \
///       b   d             b   d
/// ```
///
/// (`forward` = right.) `child` takes over `parent`'s place, `parent` becomes
/// `child`'s `forward` child and receives `child`'s old `forward` subtree,
/// and the two opposite subtrees trade owners.
///
/// Callback order:
/// 1. `set_parent(child, grandparent)`, then `rewire_grandparent(links, child)`
///    exactly once. It must make `grandparent`'s slot (or the caller's root)
///    point at `child`; `grandparent`'s slot still holds `parent` when it runs.
/// 2. `parent.forward` takes `child`'s old forward subtree.
/// 3. The opposite subtrees are exchanged.
/// 4. Each relocated subtree root that exists gets its new parent.
/// 5. `child.forward = parent`, then `set_parent(parent, child)`.
///
/// `set_parent` therefore runs `2 + k` times, `k` being the number of
/// present subtree roots relocated in steps 2 and 3.
pub fn swap_adjacent<L, F>(
    links: &mut L,
    parent: L::Id,
    child: L::Id,
    grandparent: Option<L::Id>,
    forward: Direction,
    rewire_grandparent: F,
) where
    L: Links + ?Sized,
    F: FnOnce(&mut L, L::Id),
{
    let opposite = forward.opposite();

    links.set_parent(child, grandparent);
    rewire_grandparent(links, child);

    let forward_subtree = links.child(child, forward);
    links.set_child(parent, forward, forward_subtree);

    let parent_opposite = links.child(parent, opposite);
    let child_opposite = links.child(child, opposite);
    links.set_child(parent, opposite, child_opposite);
    links.set_child(child, opposite, parent_opposite);

    set_parent_nullable(links, parent_opposite, child);
    set_parent_nullable(links, child_opposite, parent);
    set_parent_nullable(links, forward_subtree, parent);

    links.set_child(child, forward, Some(parent));
    links.set_parent(parent, Some(child));
}
