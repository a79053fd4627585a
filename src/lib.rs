//! `llrb_map` provides [`Llrb`], an in-memory, ordered key/value container
//! backed by a left-leaning red-black tree (Sedgewick's 2-3 variant, red
//! links kept to the left only).
//!
//! Features:
//!
//! * Parameterized over a key-type (**K**) and a value-type (**V**).
//! * Parameterized over an injected [`KeyCompare`], defaulting to `K: Ord`.
//! * Point mutations: [`Llrb::put`] (error on existing key), [`Llrb::set`]
//!   (idempotent upsert), [`Llrb::remove`], [`Llrb::pop_min`],
//!   [`Llrb::pop_max`], [`Llrb::replace_value`].
//! * Ordered traversal: [`Llrb::iter`], [`Llrb::range`], [`Llrb::range_rev`].
//! * Nearest-neighbor search: [`Llrb::ceiling`], [`Llrb::floor`],
//!   [`Llrb::higher`], [`Llrb::lower`].
//! * Structural self-validation: [`Llrb::validate`].
//!
//! ```
//! use llrb_map::Llrb;
//!
//! let mut states = Llrb::new("admission-years");
//! states.set("Alabama", 1819);
//! states.set("Kentucky", 1792);
//!
//! assert_eq!(states.get(&"Alabama"), Some(&1819));
//! assert_eq!(states.min(), Some((&"Alabama", &1819)));
//! ```
//!
//! [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree

mod compare;
mod delete;
mod error;
mod insert;
mod iter;
mod llrb;
mod node;
mod rotate;
mod search;
mod stats;

pub use crate::compare::{KeyCompare, OrdComparator};
pub use crate::error::{Error, Result, ValidationError};
pub use crate::iter::{Iter, Range, Reverse};
pub use crate::llrb::Llrb;
pub use crate::node::DepthStats;
