//! Immutable `(block, index)` positions inside a [`BlockChain`].

use crate::block::{BlockChain, BlockId};

/// A slot in the chain.
///
/// Cursors are plain values: moving one produces a new cursor, so two holders never alias a
/// mutable position. Two cursors are equal when they name the same block and the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub(crate) block: BlockId,
    pub(crate) index: usize,
}

impl Cursor {
    #[inline(always)]
    pub(crate) fn new(block: BlockId, index: usize) -> Self {
        Self { block, index }
    }

    /// The following slot, crossing into the next block when needed.
    ///
    /// Returns `None` when this is the last slot of the last block.
    #[inline]
    pub(crate) fn next<T>(self, chain: &BlockChain<T>) -> Option<Self> {
        if self.index + 1 == chain.block_size() {
            chain[self.block].next.map(|block| Self::new(block, 0))
        } else {
            Some(Self::new(self.block, self.index + 1))
        }
    }

    /// The preceding slot, crossing into the previous block when needed.
    ///
    /// Returns `None` when this is the first slot of the first block.
    #[inline]
    pub(crate) fn prev<T>(self, chain: &BlockChain<T>) -> Option<Self> {
        if self.index == 0 {
            chain[self.block].prev.map(|block| Self::new(block, chain.block_size() - 1))
        } else {
            Some(Self::new(self.block, self.index - 1))
        }
    }

    #[inline(always)]
    pub(crate) fn get<T>(self, chain: &BlockChain<T>) -> Option<&T> {
        chain[self.block].slots()[self.index].as_ref()
    }

    #[inline(always)]
    pub(crate) fn get_mut<T>(self, chain: &mut BlockChain<T>) -> Option<&mut T> {
        chain[self.block].slots_mut()[self.index].as_mut()
    }

    /// Stores `value` at this slot, returning whatever it held.
    #[inline(always)]
    pub(crate) fn set<T>(self, chain: &mut BlockChain<T>, value: T) -> Option<T> {
        chain[self.block].slots_mut()[self.index].replace(value)
    }

    /// Empties this slot, returning its value.
    #[inline(always)]
    pub(crate) fn take<T>(self, chain: &mut BlockChain<T>) -> Option<T> {
        chain[self.block].slots_mut()[self.index].take()
    }
}
