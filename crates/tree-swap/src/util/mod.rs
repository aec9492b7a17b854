//! Caller-side helpers built on the swap engine.
//!
//! - `slot.rs`: [`Slot`], [`slot_of`] and [`attach`], the bookkeeping a
//!   caller needs to implement the engine's slot-rewire callbacks.
//! - `swap.rs`: [`swap`], which reads the topology of two nodes and picks the
//!   matching engine variant.

pub mod slot;
pub mod swap;

pub use slot::{attach, slot_of, Slot};
pub use swap::swap;
