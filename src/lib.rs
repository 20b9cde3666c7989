//! # Hybrid Deque
//!
//! A double-ended queue backed by a doubly linked list of fixed-capacity blocks rather than
//! one node per element.
//!
//! This crate provides `HybridDeque`, a deque combining array-like cache locality and low
//! per-element overhead with linked-list-like O(1) insertion and removal at both ends.
//!
//! ## Key Features
//!
//! * **Block Storage:** Elements live in blocks of `block_size` slots (64 by default); a block
//!   is linked only when an end runs out of room, and unlinked as soon as it drains.
//! * **No Relocation:** Growing never moves existing elements, unlike a ring buffer.
//! * **Removal While Iterating:** [`RemovableIter`] removes the element it just yielded and
//!   keeps traversing without skipping or repeating elements.
//! * **Safe Links:** Blocks refer to their neighbours through arena handles; the crate contains
//!   no `unsafe` code.
//! * **Interoperability:** `HybridDeque` and `VecDeque` both implement the `AnyDeque` and
//!   `SearchableDeque` traits.
//!
//! ## Block Size
//!
//! * Must be at least **2**.
//! * Set per deque with [`DequeConfig`] / [`HybridDeque::with_block_size`], or process-wide
//!   for deques built afterwards with [`set_default_block_size`].
//!
//! ## Examples
//!
//! ### Both ends
//!
//! ```rust
//! use hybrid_deque::HybridDeque;
//!
//! let mut deque = HybridDeque::new();
//! deque.push_back(2);
//! deque.push_back(3);
//! deque.push_front(1);
//!
//! assert_eq!(deque.front(), Some(&1));
//! assert_eq!(deque.pop_back(), Some(3));
//! assert_eq!(deque.len(), 2);
//! ```
//!
//! ### Occurrence removal
//!
//! ```rust
//! use hybrid_deque::HybridDeque;
//!
//! let mut deque: HybridDeque<&str> = ["a", "b", "a", "c"].into_iter().collect();
//!
//! assert!(deque.remove_last_occurrence(&"a"));
//! assert!(!deque.remove_first_occurrence(&"z"));
//! assert_eq!(deque.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
//! ```
//!
//! ### Errors
//!
//! ```rust
//! use hybrid_deque::{DequeError, HybridDeque};
//!
//! let mut deque: HybridDeque<u8> = HybridDeque::with_block_size(4)?;
//!
//! assert_eq!(deque.offer_back(None), Err(DequeError::InvalidArgument));
//! assert_eq!(deque.try_pop_front(), Err(DequeError::EmptyCollection));
//! # Ok::<(), DequeError>(())
//! ```
//!
//! ## Logging
//!
//! With the default `tracing` feature, block linking and unlinking are reported at `trace`
//! level and resets to the empty state at `debug` level.

#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod block;
mod cursor;

pub mod config;
pub mod deque;
pub mod error;

// --- Re-exports ---

pub use config::{DequeConfig, default_block_size, set_default_block_size};
pub use deque::{AnyDeque, HybridDeque, IntoIter, Iter, RemovableIter, SearchableDeque};
pub use error::{DequeError, Result};
