//! Position swaps for intrusive binary trees.
//!
//! Balanced and order-statistic trees regularly need to exchange two nodes'
//! places without moving payload: deletion through the in-order successor,
//! random relocation in treaps, splay steps. This crate does only that
//! rewiring. It is generic over how nodes are stored; the tree supplies its
//! links through the [`Links`] trait and keeps ownership of every node.
//!
//! The engine comes in two variants, chosen by the caller:
//!
//! - [`swap_adjacent`]: a parent and its direct child.
//! - [`swap_distant`]: two nodes with no ancestor relation.
//!
//! Neither validates topology. The tree's own slot (or root pointer) is
//! rewritten through an `FnOnce` callback that runs exactly once, where slot-
//! or size-dependent metadata can be maintained.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`engine`] | [`swap_adjacent`], [`swap_distant`] |
//! | [`links`] | [`Links`] / [`ParentLinks`] and arena bindings |
//! | [`types`] | [`Node`] and [`Node2`] link traits, [`Direction`] |
//! | [`util`] | [`Slot`] bookkeeping and the dispatching [`swap`] |
//! | [`check`] | link audits used by tests and debug builds |

pub mod check;
pub mod engine;
pub mod links;
pub mod types;
pub mod util;

#[cfg(test)]
mod testing;

pub use check::{check_links, check_local, LinkError};
pub use engine::{swap_adjacent, swap_distant};
pub use links::{IdTreeLinks, Links, ParentLinks};
pub use types::{Direction, Node, Node2};
pub use util::{attach, slot_of, swap, Slot};
