//! Shelf: a dynamic-array-backed list with an explicit growth/shrink policy.
//!
//! [`ArrayList`] is an ordered, index-addressable sequence backed by a
//! single exclusively-owned slot buffer. Appends and tail removals are
//! amortized O(1); inserts and removals at arbitrary positions shift the
//! tail and are O(n). The buffer doubles when an insert finds it full and
//! halves when removals leave it quarter-full, so memory stays proportional
//! to the live length without thrashing at the grow/shrink boundary.
//!
//! # Quick start
//!
//! ```rust
//! use shelf::ArrayList;
//!
//! let mut list = ArrayList::new();
//! list.add(0, "b").unwrap();
//! list.add(0, "a").unwrap();
//! list.add(2, "c").unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(0), Ok(&"a"));
//! assert_eq!(list.remove(1), Ok("b"));
//! assert_eq!(list.get(1), Ok(&"c"));
//! ```
//!
//! Every operation that takes an index validates it before touching any
//! state: a call that returns [`ListError::OutOfRange`] leaves the list
//! exactly as it was.
//!
//! The list is single-threaded by contract. It is `Send`/`Sync` whenever
//! the element type is, but concurrent mutation requires external
//! synchronization.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod list;
mod policy;

// Public re-exports for the primary API surface.
pub use error::ListError;
pub use list::ArrayList;
