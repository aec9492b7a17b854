use crate::links::{Links, ParentLinks};

/// Where a node hangs: the root position or one child slot of a parent.
///
/// Swap callbacks are exactly-once, so the usual pattern is to capture each
/// node's slot before the swap and replay it from inside the callback with
/// [`attach`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot<Id> {
    Root,
    Left(Id),
    Right(Id),
}

impl<Id: Copy> Slot<Id> {
    /// Owner of the slot, `None` for the root position.
    #[inline]
    pub fn parent(self) -> Option<Id> {
        match self {
            Slot::Root => None,
            Slot::Left(p) | Slot::Right(p) => Some(p),
        }
    }
}

/// Reads the slot currently holding `node`.
pub fn slot_of<L>(links: &L, node: L::Id) -> Slot<L::Id>
where
    L: ParentLinks + ?Sized,
{
    match links.parent(node) {
        None => Slot::Root,
        Some(p) if links.left(p) == Some(node) => Slot::Left(p),
        Some(p) => Slot::Right(p),
    }
}

/// Puts `node` into `slot` and returns the root afterwards.
///
/// Only the owner's child link is written; `node`'s own parent link is left
/// to the caller (the swap engine sets it itself).
pub fn attach<L>(links: &mut L, slot: Slot<L::Id>, node: L::Id, root: L::Id) -> L::Id
where
    L: Links + ?Sized,
{
    match slot {
        Slot::Root => node,
        Slot::Left(p) => {
            links.set_left(p, Some(node));
            root
        }
        Slot::Right(p) => {
            links.set_right(p, Some(node));
            root
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{arena, link_left, link_right};

    #[test]
    fn slot_of_reads_side_and_root() {
        let mut nodes = arena(3);
        link_left(&mut nodes, 0, 1);
        link_right(&mut nodes, 0, 2);

        assert_eq!(slot_of(&nodes, 0), Slot::Root);
        assert_eq!(slot_of(&nodes, 1), Slot::Left(0));
        assert_eq!(slot_of(&nodes, 2), Slot::Right(0));
        assert_eq!(Slot::Right(0).parent(), Some(0));
        assert_eq!(Slot::<u32>::Root.parent(), None);
    }

    #[test]
    fn attach_writes_owner_or_replaces_root() {
        let mut nodes = arena(3);
        link_left(&mut nodes, 0, 1);

        assert_eq!(attach(&mut nodes, Slot::Left(0), 2, 0), 0);
        assert_eq!(nodes[0].l, Some(2));
        assert_eq!(nodes[2].p, None);

        assert_eq!(attach(&mut nodes, Slot::Root, 2, 0), 2);
    }
}
