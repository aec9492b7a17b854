//! Link traits for arena-backed nodes.
//!
//! - [`Node`]: primary tree links (`p` / `l` / `r`).
//! - [`Node2`]: secondary tree links (`p2` / `l2` / `r2`), for nodes that sit
//!   in two trees at once.
//!
//! Each "pointer" is an `Option<u32>` index into a caller-owned slice of
//! nodes. The engine reaches these through the [`Links`](crate::Links)
//! bindings in [`crate::links`].

/// Primary tree links (`p`, `l`, `r`).
///
/// Implementing this on an arena node type is enough to hand `[N]` or
/// `Vec<N>` to the swap engine, [`swap`](crate::util::swap()) and the link
/// audits; `Links::Id` is the node's index in the arena.
///
/// ```
/// use tree_swap::{check_links, swap, Node};
///
/// #[derive(Clone, Default)]
/// struct Chunk {
///     p: Option<u32>,
///     l: Option<u32>,
///     r: Option<u32>,
/// }
///
/// impl Node for Chunk {
///     fn p(&self) -> Option<u32> { self.p }
///     fn l(&self) -> Option<u32> { self.l }
///     fn r(&self) -> Option<u32> { self.r }
///     fn set_p(&mut self, v: Option<u32>) { self.p = v; }
///     fn set_l(&mut self, v: Option<u32>) { self.l = v; }
///     fn set_r(&mut self, v: Option<u32>) { self.r = v; }
/// }
///
/// let mut arena = vec![Chunk::default(); 2];
/// arena[0].l = Some(1);
/// arena[1].p = Some(0);
///
/// let root = swap(&mut arena, 0, 0, 1);
/// assert_eq!(root, 1);
/// assert_eq!(arena[1].l, Some(0));
/// assert_eq!(check_links(&arena, Some(root)), Ok(2));
/// ```
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Secondary tree links (`p2`, `l2`, `r2`).
///
/// For nodes indexed by two trees at once. Swaps go through
/// [`IdTreeLinks`](crate::IdTreeLinks), which rewrites only these links and
/// leaves the [`Node`] links of the same nodes untouched.
pub trait Node2 {
    fn p2(&self) -> Option<u32>;
    fn l2(&self) -> Option<u32>;
    fn r2(&self) -> Option<u32>;
    fn set_p2(&mut self, v: Option<u32>);
    fn set_l2(&mut self, v: Option<u32>);
    fn set_r2(&mut self, v: Option<u32>);
}

/// Child slot of a node.
///
/// In an adjacent swap the direction of the `parent -> child` edge is the
/// *forward* direction; the other slot is the *opposite* one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
