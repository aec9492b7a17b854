//! The capability set the swap engine operates through.
//!
//! [`Links`] is the minimal set of accessors and mutators the engine needs:
//! set a node's parent and get/set both children. It never reads a parent.
//! [`ParentLinks`] adds the parent getter, which only callers (slot
//! bookkeeping, the dispatching [`swap`](crate::util::swap()), the auditor)
//! need.
//!
//! Bindings provided here:
//! - `[N]` and `Vec<N>` where `N: Node`: primary (`p` / `l` / `r`) links of
//!   an arena.
//! - [`IdTreeLinks`]: secondary (`p2` / `l2` / `r2`) links of an arena whose
//!   nodes implement [`Node2`].

use std::fmt::Debug;

use crate::types::{Direction, Node, Node2};

/// Linkage operations of an intrusive binary tree.
///
/// `Id` is a handle to a node that is present; absent links are
/// `Option::None` and are never handed back to a mutator.
pub trait Links {
    type Id: Copy + Eq + Debug;

    fn set_parent(&mut self, node: Self::Id, parent: Option<Self::Id>);
    fn left(&self, node: Self::Id) -> Option<Self::Id>;
    fn set_left(&mut self, node: Self::Id, child: Option<Self::Id>);
    fn right(&self, node: Self::Id) -> Option<Self::Id>;
    fn set_right(&mut self, node: Self::Id, child: Option<Self::Id>);

    /// Child in slot `dir`.
    #[inline]
    fn child(&self, node: Self::Id, dir: Direction) -> Option<Self::Id> {
        match dir {
            Direction::Left => self.left(node),
            Direction::Right => self.right(node),
        }
    }

    /// Writes slot `dir`. Does not touch the child's parent link.
    #[inline]
    fn set_child(&mut self, node: Self::Id, dir: Direction, child: Option<Self::Id>) {
        match dir {
            Direction::Left => self.set_left(node, child),
            Direction::Right => self.set_right(node, child),
        }
    }
}

/// [`Links`] plus read access to the parent pointer.
pub trait ParentLinks: Links {
    fn parent(&self, node: Self::Id) -> Option<Self::Id>;
}

macro_rules! arena_links {
    ($arena:ty) => {
        impl<N: Node> Links for $arena {
            type Id = u32;

            #[inline]
            fn set_parent(&mut self, node: u32, parent: Option<u32>) {
                self[node as usize].set_p(parent);
            }

            #[inline]
            fn left(&self, node: u32) -> Option<u32> {
                self[node as usize].l()
            }

            #[inline]
            fn set_left(&mut self, node: u32, child: Option<u32>) {
                self[node as usize].set_l(child);
            }

            #[inline]
            fn right(&self, node: u32) -> Option<u32> {
                self[node as usize].r()
            }

            #[inline]
            fn set_right(&mut self, node: u32, child: Option<u32>) {
                self[node as usize].set_r(child);
            }
        }

        impl<N: Node> ParentLinks for $arena {
            #[inline]
            fn parent(&self, node: u32) -> Option<u32> {
                self[node as usize].p()
            }
        }
    };
}

arena_links!([N]);
arena_links!(Vec<N>);

/// Secondary-tree view over an arena of [`Node2`] nodes.
///
/// Swapping through this view only rewrites `p2` / `l2` / `r2`; the primary
/// links of the same nodes are left as they are.
pub struct IdTreeLinks<'a, N> {
    arena: &'a mut [N],
}

impl<'a, N: Node2> IdTreeLinks<'a, N> {
    pub fn new(arena: &'a mut [N]) -> Self {
        Self { arena }
    }
}

impl<N: Node2> Links for IdTreeLinks<'_, N> {
    type Id = u32;

    #[inline]
    fn set_parent(&mut self, node: u32, parent: Option<u32>) {
        self.arena[node as usize].set_p2(parent);
    }

    #[inline]
    fn left(&self, node: u32) -> Option<u32> {
        self.arena[node as usize].l2()
    }

    #[inline]
    fn set_left(&mut self, node: u32, child: Option<u32>) {
        self.arena[node as usize].set_l2(child);
    }

    #[inline]
    fn right(&self, node: u32) -> Option<u32> {
        self.arena[node as usize].r2()
    }

    #[inline]
    fn set_right(&mut self, node: u32, child: Option<u32>) {
        self.arena[node as usize].set_r2(child);
    }
}

impl<N: Node2> ParentLinks for IdTreeLinks<'_, N> {
    #[inline]
    fn parent(&self, node: u32) -> Option<u32> {
        self.arena[node as usize].p2()
    }
}
