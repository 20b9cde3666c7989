//! Double-ended queue backed by a doubly linked chain of fixed-capacity blocks.
//!
//! # Positional model
//! Two cursors delimit the occupied slots: `left` names the first element and `right` the
//! last. With `size` elements:
//!
//! ```text
//! left.block == right.block  =>  left.index + size - 1 == right.index
//! otherwise                      (left.index + size - 1) % BLOCK_SIZE == right.index
//! ```
//!
//! The empty deque is always canonical: one block, `right.index == CENTER` and
//! `left.index == CENTER + 1` where `CENTER = (BLOCK_SIZE - 1) / 2`. Emptiness is tested
//! through `len`, never by comparing cursors. A non-empty deque links exactly the blocks
//! from `left.block` to `right.block`.
//!
//! # Growth and shrinkage
//! A block is linked when an end cursor would otherwise step off the chain, so a new block
//! is allocated once every `BLOCK_SIZE` insertions per direction. When an end cursor steps
//! inward across a block boundary the block it left behind is drained and gets unlinked.

mod any_deque;
mod compaction;
mod iter;

pub use any_deque::{AnyDeque, SearchableDeque};
pub use iter::{IntoIter, Iter, RemovableIter};

use core::any::Any;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::collections::VecDeque;

use crate::block::BlockChain;
use crate::config::DequeConfig;
use crate::cursor::Cursor;
use crate::error::{DequeError, Result};

/// A double-ended queue storing its elements in a chain of fixed-capacity blocks.
///
/// Compared with a node-per-element linked list, each link costs one block of
/// `block_size` slots, which keeps neighbouring elements contiguous. Compared with a ring
/// buffer, growing never moves existing elements.
///
/// | Operation | Cost |
/// |-----------|------|
/// | `push_*` / `pop_*` / `front` / `back` / `len` | O(1) amortized |
/// | `remove_*_occurrence` | O(n) |
/// | [`RemovableIter::remove`] | O(distance to the scan's trailing edge) |
/// | `clear` | O(n) element drops |
///
/// # Example
/// ```rust
/// use hybrid_deque::HybridDeque;
///
/// let mut deque = HybridDeque::with_block_size(4).unwrap();
/// deque.push_front("A");
/// deque.push_front("B");
/// deque.push_back("C");
/// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), ["B", "A", "C"]);
///
/// assert_eq!(deque.pop_front(), Some("B"));
/// assert_eq!(deque.len(), 2);
/// ```
pub struct HybridDeque<T> {
    chain: BlockChain<T>,
    left: Cursor,
    right: Cursor,
    len: usize,
    config: DequeConfig,
}

#[derive(Debug, Clone, Copy)]
enum ResetReason {
    Clear,
    Drained,
}

impl<T> HybridDeque<T> {
    /// Creates an empty deque using the process-wide default block size.
    pub fn new() -> Self {
        Self::with_config(DequeConfig::default())
    }

    /// Creates an empty deque with the given configuration.
    pub fn with_config(config: DequeConfig) -> Self {
        let (chain, block) = BlockChain::new(config.block_size());
        let center = config.center();
        Self {
            chain,
            left: Cursor::new(block, center + 1),
            right: Cursor::new(block, center),
            len: 0,
            config,
        }
    }

    /// Creates an empty deque whose blocks hold `block_size` slots.
    ///
    /// Fails with [`DequeError::InvalidBlockSize`] when `block_size < 2`.
    pub fn with_block_size(block_size: usize) -> Result<Self> {
        DequeConfig::new(block_size).map(Self::with_config)
    }

    /// Returns the configuration this deque was built with.
    #[inline(always)]
    pub fn config(&self) -> DequeConfig {
        self.config
    }

    /// Number of slots per block.
    #[inline(always)]
    pub fn block_size(&self) -> usize {
        self.config.block_size()
    }

    /// Number of blocks currently linked into the chain. Never zero.
    #[inline(always)]
    pub fn blocks_len(&self) -> usize {
        self.chain.len()
    }

    /// Returns the number of elements in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prepends `item` to the front of the deque.
    pub fn push_front(&mut self, item: T) {
        let slot = match self.left.prev(&self.chain) {
            Some(slot) => slot,
            None => {
                let block = self.chain.link_before(self.left.block);
                _trace!(block = block.index(), blocks = self.chain.len(), "linked block at the front");
                Cursor::new(block, self.chain.block_size() - 1)
            }
        };
        slot.set(&mut self.chain, item);
        self.left = slot;
        self.len += 1;
    }

    /// Appends `item` to the back of the deque.
    pub fn push_back(&mut self, item: T) {
        let slot = match self.right.next(&self.chain) {
            Some(slot) => slot,
            None => {
                let block = self.chain.link_after(self.right.block);
                _trace!(block = block.index(), blocks = self.chain.len(), "linked block at the back");
                Cursor::new(block, 0)
            }
        };
        slot.set(&mut self.chain, item);
        self.right = slot;
        self.len += 1;
    }

    /// Prepends a possibly absent value, failing with [`DequeError::InvalidArgument`] when
    /// it is `None`.
    ///
    /// Always returns `Ok(true)` on success: the deque is unbounded.
    pub fn offer_front(&mut self, item: Option<T>) -> Result<bool> {
        let item = item.ok_or(DequeError::InvalidArgument)?;
        self.push_front(item);
        Ok(true)
    }

    /// Appends a possibly absent value, failing with [`DequeError::InvalidArgument`] when it
    /// is `None`.
    pub fn offer_back(&mut self, item: Option<T>) -> Result<bool> {
        let item = item.ok_or(DequeError::InvalidArgument)?;
        self.push_back(item);
        Ok(true)
    }

    /// Removes and returns the first element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.left.take(&mut self.chain);
        if self.len == 1 {
            self.reset(ResetReason::Drained);
        } else {
            self.advance_left();
            self.len -= 1;
        }
        item
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.right.take(&mut self.chain);
        if self.len == 1 {
            self.reset(ResetReason::Drained);
        } else {
            self.retreat_right();
            self.len -= 1;
        }
        item
    }

    /// Removes and returns the first element, failing with
    /// [`DequeError::EmptyCollection`] if empty.
    pub fn try_pop_front(&mut self) -> Result<T> {
        self.pop_front().ok_or(DequeError::EmptyCollection)
    }

    /// Removes and returns the last element, failing with
    /// [`DequeError::EmptyCollection`] if empty.
    pub fn try_pop_back(&mut self) -> Result<T> {
        self.pop_back().ok_or(DequeError::EmptyCollection)
    }

    /// Returns a shared reference to the front element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.len == 0 { None } else { self.left.get(&self.chain) }
    }

    /// Returns a shared reference to the back element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 { None } else { self.right.get(&self.chain) }
    }

    /// Returns an exclusive reference to the front element, or `None` if empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 { None } else { self.left.get_mut(&mut self.chain) }
    }

    /// Returns an exclusive reference to the back element, or `None` if empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 { None } else { self.right.get_mut(&mut self.chain) }
    }

    /// Like [`front`](Self::front), failing with [`DequeError::EmptyCollection`] if empty.
    pub fn try_front(&self) -> Result<&T> {
        self.front().ok_or(DequeError::EmptyCollection)
    }

    /// Like [`back`](Self::back), failing with [`DequeError::EmptyCollection`] if empty.
    pub fn try_back(&self) -> Result<&T> {
        self.back().ok_or(DequeError::EmptyCollection)
    }

    /// Removes all elements, returning to a single empty block.
    pub fn clear(&mut self) {
        self.reset(ResetReason::Clear);
    }

    /// Front-to-back iterator over shared references. Use `.rev()` for back-to-front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.chain, self.left, self.right, self.len)
    }

    /// Front-to-back iterator able to remove the element it last yielded.
    pub fn removable_iter(&mut self) -> RemovableIter<'_, T> {
        RemovableIter::forward(self)
    }

    /// Back-to-front iterator able to remove the element it last yielded.
    pub fn removable_iter_rev(&mut self) -> RemovableIter<'_, T> {
        RemovableIter::backward(self)
    }

    /// Moves `left` one slot inward, unlinking the block it leaves when it crosses a
    /// boundary. Requires at least two elements.
    fn advance_left(&mut self) {
        let Some(next) = self.left.next(&self.chain) else {
            unreachable!("Logic Error: left cursor has no successor in a deque of {} elements", self.len)
        };
        let crossed = next.block != self.left.block;
        self.left = next;
        if crossed {
            if let Some(_drained) = self.chain.unlink_before(next.block) {
                _trace!(block = _drained.index(), blocks = self.chain.len(), "unlinked drained front block");
            }
        }
    }

    /// Moves `right` one slot inward, unlinking the block it leaves when it crosses a
    /// boundary. Requires at least two elements.
    fn retreat_right(&mut self) {
        let Some(prev) = self.right.prev(&self.chain) else {
            unreachable!("Logic Error: right cursor has no predecessor in a deque of {} elements", self.len)
        };
        let crossed = prev.block != self.right.block;
        self.right = prev;
        if crossed {
            if let Some(_drained) = self.chain.unlink_after(prev.block) {
                _trace!(block = _drained.index(), blocks = self.chain.len(), "unlinked drained back block");
            }
        }
    }

    fn reset(&mut self, _reason: ResetReason) {
        _debug!(reason = ?_reason, len = self.len, blocks = self.chain.len(), "resetting to the empty state");
        let block = self.chain.reset();
        let center = self.config.center();
        self.left = Cursor::new(block, center + 1);
        self.right = Cursor::new(block, center);
        self.len = 0;
    }
}

impl<T: PartialEq> HybridDeque<T> {
    /// Returns `true` if the deque contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|x| x == item)
    }

    /// Removes the first element equal to `item`, scanning from the front.
    ///
    /// Returns `false`, leaving the deque untouched, when no element matches.
    pub fn remove_first_occurrence(&mut self, item: &T) -> bool {
        Self::remove_match(self.removable_iter(), item)
    }

    /// Removes the last element equal to `item`, scanning from the back.
    ///
    /// Returns `false`, leaving the deque untouched, when no element matches.
    pub fn remove_last_occurrence(&mut self, item: &T) -> bool {
        Self::remove_match(self.removable_iter_rev(), item)
    }

    fn remove_match(mut iter: RemovableIter<'_, T>, item: &T) -> bool {
        while let Some(candidate) = iter.next() {
            if candidate == item {
                return iter.remove().is_ok();
            }
        }
        false
    }
}

impl<T: PartialEq + 'static> HybridDeque<T> {
    /// Structural equality against a value of unknown type.
    ///
    /// Returns `false` instead of failing when `other` is not a `HybridDeque<T>`.
    pub fn eq_dyn(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Self>().is_some_and(|other| self == other)
    }
}

impl<T> Default for HybridDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for HybridDeque<T> {
    fn clone(&self) -> Self {
        let mut deque = Self::with_config(self.config);
        deque.extend(self.iter().cloned());
        deque
    }
}

impl<T: fmt::Debug> fmt::Debug for HybridDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for HybridDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for HybridDeque<T> {}

impl<T: PartialEq> PartialEq<VecDeque<T>> for HybridDeque<T> {
    fn eq(&self, other: &VecDeque<T>) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialOrd> PartialOrd for HybridDeque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for HybridDeque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for HybridDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|item| item.hash(state));
    }
}

impl<T> Extend<T> for HybridDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for HybridDeque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for HybridDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> From<Vec<T>> for HybridDeque<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}
