use std::cell::Cell;

use tracing::trace;

use crate::engine::{swap_adjacent, swap_distant};
use crate::links::ParentLinks;
use crate::types::Direction;

use super::slot::{attach, slot_of};

/// Swaps the positions of `x` and `y` in the tree rooted at `root` and
/// returns the new root.
///
/// Picks the engine variant from the current links: a direct parent/child
/// pair goes through [`swap_adjacent`], anything else through
/// [`swap_distant`]. The latter only reads the two nodes' own links, so it is
/// also correct for an ancestor and a descendant at least two levels apart.
pub fn swap<L>(links: &mut L, root: L::Id, x: L::Id, y: L::Id) -> L::Id
where
    L: ParentLinks + ?Sized,
{
    if x == y {
        return root;
    }

    let root = if links.parent(y) == Some(x) {
        adjacent(links, root, x, y)
    } else if links.parent(x) == Some(y) {
        adjacent(links, root, y, x)
    } else {
        distant(links, root, x, y)
    };

    debug_assert_eq!(crate::check::check_local(&*links, &[x, y]), Ok(()));
    root
}

fn adjacent<L>(links: &mut L, mut root: L::Id, parent: L::Id, child: L::Id) -> L::Id
where
    L: ParentLinks + ?Sized,
{
    let slot = slot_of(links, parent);
    let forward = if links.left(parent) == Some(child) {
        Direction::Left
    } else {
        Direction::Right
    };
    trace!(?parent, ?child, ?forward, "adjacent swap");

    swap_adjacent(links, parent, child, slot.parent(), forward, |links, node| {
        root = attach(links, slot, node, root);
    });
    trace!(?root, "adjacent swap done");
    root
}

fn distant<L>(links: &mut L, root: L::Id, x: L::Id, y: L::Id) -> L::Id
where
    L: ParentLinks + ?Sized,
{
    let x_slot = slot_of(links, x);
    let y_slot = slot_of(links, y);
    trace!(?x, ?y, ?x_slot, ?y_slot, "distant swap");

    let root = Cell::new(root);
    swap_distant(
        links,
        x,
        y,
        x_slot.parent(),
        y_slot.parent(),
        |links, node| root.set(attach(links, x_slot, node, root.get())),
        |links, node| root.set(attach(links, y_slot, node, root.get())),
    );
    let root = root.get();
    trace!(?root, "distant swap done");
    root
}
