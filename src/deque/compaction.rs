//! Removal of an interior element by shifting its neighbours across block boundaries.
//!
//! Deleting slot `s` leaves a hole that is closed by moving every element between `s` and
//! one end of the deque by one slot. Within a block this is a slice rotation. At a block
//! boundary the first (or last) element of the neighbouring block is carried over, and the
//! walk continues in that block. The end cursor then steps inward exactly like a pop.
//!
//! ```text
//! toward back, removing c:   [a b c d] -> [e f . .]      =>  [a b d e] -> [f . . .]
//! ```

use super::HybridDeque;
use crate::cursor::Cursor;

impl<T> HybridDeque<T> {
    /// Removes the element at `start`, shifting every element after it one slot toward the
    /// front. Cost is proportional to the distance from `start` to the back.
    ///
    /// `start` must be occupied and must not be the back of the deque.
    pub(super) fn compact_toward_back(&mut self, start: Cursor) -> Option<T> {
        debug_assert!(self.len >= 2 && start != self.right);
        let removed = start.take(&mut self.chain);
        let last = self.chain.block_size() - 1;
        let mut block = start.block;
        let mut from = start.index;
        while block != self.right.block {
            self.chain[block].slots_mut()[from..].rotate_left(1);
            let Some(next) = self.chain[block].next else {
                unreachable!("Logic Error: chain ends before the right cursor");
            };
            let carried = self.chain[next].slots_mut()[0].take();
            self.chain[block].slots_mut()[last] = carried;
            block = next;
            from = 0;
        }
        self.chain[block].slots_mut()[from..=self.right.index].rotate_left(1);
        self.retreat_right();
        self.len -= 1;
        removed
    }

    /// Removes the element at `start`, shifting every element before it one slot toward the
    /// back. Cost is proportional to the distance from `start` to the front.
    ///
    /// `start` must be occupied and must not be the front of the deque.
    pub(super) fn compact_toward_front(&mut self, start: Cursor) -> Option<T> {
        debug_assert!(self.len >= 2 && start != self.left);
        let removed = start.take(&mut self.chain);
        let last = self.chain.block_size() - 1;
        let mut block = start.block;
        let mut to = start.index;
        while block != self.left.block {
            self.chain[block].slots_mut()[..=to].rotate_right(1);
            let Some(prev) = self.chain[block].prev else {
                unreachable!("Logic Error: chain ends before the left cursor");
            };
            let carried = self.chain[prev].slots_mut()[last].take();
            self.chain[block].slots_mut()[0] = carried;
            block = prev;
            to = last;
        }
        self.chain[block].slots_mut()[self.left.index..=to].rotate_right(1);
        self.advance_left();
        self.len -= 1;
        removed
    }
}
