//! Iterators over a [`HybridDeque`].

use core::fmt;
use core::iter::FusedIterator;

use super::HybridDeque;
use crate::block::BlockChain;
use crate::cursor::Cursor;
use crate::error::{DequeError, Result};

/// Double-ended iterator over shared references, created by [`HybridDeque::iter`].
pub struct Iter<'a, T> {
    chain: &'a BlockChain<T>,
    front: Cursor,
    back: Cursor,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(chain: &'a BlockChain<T>, front: Cursor, back: Cursor, len: usize) -> Self {
        Self { chain, front, back, remaining: len }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            if let Some(next) = current.next(self.chain) {
                self.front = next;
            }
        }
        current.get(self.chain)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.back;
        self.remaining -= 1;
        if self.remaining > 0 {
            if let Some(prev) = current.prev(self.chain) {
                self.back = prev;
            }
        }
        current.get(self.chain)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator, created by [`HybridDeque::into_iter`].
pub struct IntoIter<T> {
    inner: HybridDeque<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for HybridDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a HybridDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Traversal that can remove the element it yielded last.
///
/// Created by [`HybridDeque::removable_iter`] (front to back) and
/// [`HybridDeque::removable_iter_rev`] (back to front). It borrows the deque exclusively, so
/// no other iterator can observe the deque while elements are being removed.
///
/// `next` lends a reference tied to the iterator, which is why this type does not
/// implement [`Iterator`].
///
/// ```rust
/// use hybrid_deque::HybridDeque;
///
/// let mut deque: HybridDeque<i32> = (1..=6).collect();
/// let mut iter = deque.removable_iter();
/// while let Some(item) = iter.next() {
///     if item % 2 == 0 {
///         iter.remove().unwrap();
///     }
/// }
/// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [1, 3, 5]);
/// ```
pub struct RemovableIter<'a, T> {
    deque: &'a mut HybridDeque<T>,
    /// Next slot to yield; `None` once the traversal ran off the chain.
    position: Option<Cursor>,
    /// Slot yielded by the last `next`, while it may still be removed.
    last: Option<Cursor>,
    direction: Direction,
}

impl<'a, T> RemovableIter<'a, T> {
    pub(super) fn forward(deque: &'a mut HybridDeque<T>) -> Self {
        let position = Some(deque.left);
        Self { deque, position, last: None, direction: Direction::Forward }
    }

    pub(super) fn backward(deque: &'a mut HybridDeque<T>) -> Self {
        let position = Some(deque.right);
        Self { deque, position, last: None, direction: Direction::Backward }
    }

    /// Returns `true` while an element remains in the traversal direction.
    ///
    /// The far edge is read from the deque on every call, so removals made through this
    /// iterator are taken into account.
    pub fn has_next(&self) -> bool {
        let Some(position) = self.position else {
            return false;
        };
        if self.deque.len == 0 {
            return false;
        }
        match self.direction {
            Direction::Forward => {
                let right = self.deque.right;
                position.block != right.block || position.index <= right.index
            }
            Direction::Backward => {
                let left = self.deque.left;
                position.block != left.block || position.index >= left.index
            }
        }
    }

    /// Yields the next element, or `None` when the traversal is exhausted.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        if !self.has_next() {
            return None;
        }
        let current = self.position?;
        self.position = match self.direction {
            Direction::Forward => current.next(&self.deque.chain),
            Direction::Backward => current.prev(&self.deque.chain),
        };
        self.last = Some(current);
        current.get(&self.deque.chain)
    }

    /// Like [`next`](Self::next), failing with [`DequeError::Exhausted`] when no element
    /// remains.
    pub fn try_next(&mut self) -> Result<&T> {
        self.next().ok_or(DequeError::Exhausted)
    }

    /// Removes the element returned by the latest call to `next` and hands it back.
    ///
    /// Fails with [`DequeError::IllegalState`] unless `next` yielded an element that has
    /// not been removed yet. The elements still ahead of the iterator are yielded exactly
    /// once afterwards, as if the traversal had started on the updated deque.
    pub fn remove(&mut self) -> Result<T> {
        let Some(slot) = self.last.take() else {
            return Err(DequeError::IllegalState);
        };
        let (left, right) = (self.deque.left, self.deque.right);
        let removed = match self.direction {
            Direction::Forward if slot == right => {
                _trace!(path = "trim", "removing the back through a forward iterator");
                self.position = None;
                self.deque.pop_back()
            }
            Direction::Forward if slot == left => self.deque.pop_front(),
            Direction::Forward => {
                _trace!(path = "compaction", len = self.deque.len, "removing through a forward iterator");
                self.position = Some(slot);
                self.deque.compact_toward_back(slot)
            }
            Direction::Backward if slot == left => {
                _trace!(path = "trim", "removing the front through a backward iterator");
                self.position = None;
                self.deque.pop_front()
            }
            Direction::Backward if slot == right => self.deque.pop_back(),
            Direction::Backward => {
                _trace!(path = "compaction", len = self.deque.len, "removing through a backward iterator");
                self.position = Some(slot);
                self.deque.compact_toward_front(slot)
            }
        };
        match removed {
            Some(item) => Ok(item),
            None => unreachable!("Logic Error: yielded slot {slot:?} held no element"),
        }
    }
}

impl<T> fmt::Debug for RemovableIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemovableIter")
            .field("direction", &self.direction)
            .field("has_next", &self.has_next())
            .field("removable", &self.last.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deque::tests::assert_invariants;

    fn filled(block_size: usize, front: i32, back: i32) -> HybridDeque<i32> {
        let mut d = HybridDeque::with_block_size(block_size).unwrap();
        for i in (0..front).rev() {
            d.push_front(i);
        }
        for i in front..front + back {
            d.push_back(i);
        }
        d
    }

    fn contents(d: &HybridDeque<i32>) -> Vec<i32> {
        d.iter().copied().collect()
    }

    // ─── read-only iteration ──────────────────────────────────────────────────
    #[test]
    fn test_iter_empty() {
        let d: HybridDeque<i32> = HybridDeque::with_block_size(4).unwrap();
        assert_eq!(d.iter().next(), None);
        assert_eq!(d.iter().next_back(), None);
        assert_eq!(d.iter().len(), 0);
    }

    #[test]
    fn test_iter_both_directions() {
        let d = filled(4, 7, 9);
        let forward: Vec<_> = d.iter().copied().collect();
        let backward: Vec<_> = d.iter().rev().copied().collect();
        assert_eq!(forward, (0..16).collect::<Vec<_>>());
        assert_eq!(backward, (0..16).rev().collect::<Vec<_>>());
        assert_eq!(d.iter().len(), 16);
    }

    #[test]
    fn test_iter_meets_in_the_middle() {
        let d = filled(4, 3, 4);
        let mut it = d.iter();
        assert_eq!(it.next(), Some(&0));
        assert_eq!(it.next_back(), Some(&6));
        assert_eq!(it.len(), 5);
        let rest: Vec<_> = it.by_ref().copied().collect();
        assert_eq!(rest, [1, 2, 3, 4, 5]);
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_iter_into_iter() {
        let d = filled(4, 5, 5);
        let mut by_ref = Vec::new();
        for item in &d {
            by_ref.push(*item);
        }
        let mut owned = d.into_iter();
        assert_eq!(owned.len(), 10);
        assert_eq!(owned.next_back(), Some(9));
        let rest: Vec<_> = owned.collect();
        assert_eq!(rest, (0..9).collect::<Vec<_>>());
        assert_eq!(by_ref, (0..10).collect::<Vec<_>>());
    }

    // ─── exhaustion and misuse ────────────────────────────────────────────────
    #[test]
    fn test_removable_iter_empty() {
        let mut d: HybridDeque<&str> = HybridDeque::with_block_size(4).unwrap();
        let mut it = d.removable_iter();
        assert!(!it.has_next());
        assert!(it.next().is_none());
        assert_eq!(it.try_next().err(), Some(DequeError::Exhausted));
        let mut it = d.removable_iter_rev();
        assert!(!it.has_next());
        assert_eq!(it.try_next().err(), Some(DequeError::Exhausted));
    }

    #[test]
    fn test_removable_iter_remove_requires_next() {
        let mut d = filled(4, 3, 5);
        let mut it = d.removable_iter();
        assert_eq!(it.remove(), Err(DequeError::IllegalState));
        assert_eq!(it.next(), Some(&0));
        assert_eq!(it.remove(), Ok(0));
        assert_eq!(it.remove(), Err(DequeError::IllegalState));

        let mut it = d.removable_iter_rev();
        assert_eq!(it.remove(), Err(DequeError::IllegalState));
        assert_eq!(it.next(), Some(&7));
        assert_eq!(it.remove(), Ok(7));
        assert_eq!(it.remove(), Err(DequeError::IllegalState));
        assert_eq!(contents(&d), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_removable_iter_exhausts() {
        let mut d = filled(4, 2, 2);
        let mut it = d.removable_iter();
        for expected in 0..4 {
            assert_eq!(it.try_next().copied(), Ok(expected));
        }
        assert!(!it.has_next());
        assert_eq!(it.try_next().err(), Some(DequeError::Exhausted));
    }

    // ─── forward removal ──────────────────────────────────────────────────────
    #[test]
    fn test_removable_iter_forward_remove_all() {
        let mut d = filled(4, 33, 32);
        let mut it = d.removable_iter();
        for expected in 0..65 {
            assert_eq!(it.next(), Some(&expected));
            assert_eq!(it.remove(), Ok(expected));
        }
        assert!(!it.has_next());
        assert!(d.is_empty());
        assert_invariants(&d);
    }

    #[test]
    fn test_removable_iter_forward_remove_middle_then_continue() {
        for block_size in 2..7 {
            for victim in 0..12 {
                let mut d = filled(block_size, 5, 7);
                let mut seen = Vec::new();
                let mut it = d.removable_iter();
                while let Some(&item) = it.next() {
                    seen.push(item);
                    if item == victim {
                        assert_eq!(it.remove(), Ok(victim));
                    }
                }
                let expected: Vec<_> = (0..12).collect();
                assert_eq!(seen, expected, "block size {block_size}, victim {victim}");
                let remaining: Vec<_> = (0..12).filter(|&i| i != victim).collect();
                assert_eq!(contents(&d), remaining);
                assert_invariants(&d);
            }
        }
    }

    #[test]
    fn test_removable_iter_forward_matches_fresh_iterator() {
        let mut d = filled(4, 6, 10);
        let mut it = d.removable_iter();
        for _ in 0..5 {
            it.next();
        }
        it.remove().unwrap();
        let mut rest = Vec::new();
        while let Some(&item) = it.next() {
            rest.push(item);
        }
        let fresh: Vec<_> = d.iter().skip(4).copied().collect();
        assert_eq!(rest, fresh);
    }

    #[test]
    fn test_removable_iter_forward_remove_alternate() {
        let mut d = filled(4, 9, 14);
        let mut it = d.removable_iter();
        while it.next().is_some() {
            it.remove().unwrap();
            if it.next().is_none() {
                break;
            }
        }
        let odd: Vec<_> = (0..23).filter(|i| i % 2 == 1).collect();
        assert_eq!(contents(&d), odd);
        assert_invariants(&d);
    }

    // ─── backward removal ─────────────────────────────────────────────────────
    #[test]
    fn test_removable_iter_backward_remove_all() {
        let mut d = filled(4, 3, 4);
        let mut it = d.removable_iter_rev();
        for expected in (0..7).rev() {
            assert_eq!(it.next(), Some(&expected));
            assert_eq!(it.remove(), Ok(expected));
        }
        assert!(!it.has_next());
        assert!(d.is_empty());
        assert_invariants(&d);
    }

    #[test]
    fn test_removable_iter_backward_remove_middle_then_continue() {
        for block_size in 2..7 {
            for victim in 0..12 {
                let mut d = filled(block_size, 7, 5);
                let mut seen = Vec::new();
                let mut it = d.removable_iter_rev();
                while let Some(&item) = it.next() {
                    seen.push(item);
                    if item == victim {
                        assert_eq!(it.remove(), Ok(victim));
                    }
                }
                let expected: Vec<_> = (0..12).rev().collect();
                assert_eq!(seen, expected, "block size {block_size}, victim {victim}");
                let remaining: Vec<_> = (0..12).filter(|&i| i != victim).collect();
                assert_eq!(contents(&d), remaining);
                assert_invariants(&d);
            }
        }
    }

    #[test]
    fn test_removable_iter_backward_remove_every_other() {
        let mut d = filled(4, 33, 32);
        let mut it = d.removable_iter_rev();
        for i in 0..=32 {
            assert_eq!(it.next(), Some(&(64 - 2 * i)));
            it.remove().unwrap();
            if i < 32 {
                assert_eq!(it.next(), Some(&(63 - 2 * i)));
            }
        }
        assert!(it.next().is_none());
        let odd: Vec<_> = (0..65).filter(|i| i % 2 == 1).collect();
        assert_eq!(contents(&d), odd);
        assert_invariants(&d);
    }

    #[test]
    fn test_removable_iter_backward_remove_at_back_keeps_position() {
        let mut d = filled(4, 2, 6);
        let mut it = d.removable_iter_rev();
        assert_eq!(it.next(), Some(&7));
        assert_eq!(it.next(), Some(&6));
        it.remove().unwrap();
        assert_eq!(it.next(), Some(&5));
        it.remove().unwrap();
        assert_eq!(it.next(), Some(&4));
        assert_eq!(contents(&d), [0, 1, 2, 3, 4, 7]);
        assert_invariants(&d);
    }

    #[test]
    fn test_removable_iter_remove_hands_back_yielded_element_on_every_path() {
        for block_size in 2..6 {
            for victim in 0..9 {
                for forward in [true, false] {
                    let mut d = filled(block_size, 4, 5);
                    let mut it = if forward { d.removable_iter() } else { d.removable_iter_rev() };
                    let mut yielded = None;
                    while let Some(&item) = it.next() {
                        if item == victim {
                            yielded = Some(item);
                            break;
                        }
                    }
                    assert_eq!(it.remove(), Ok(victim));
                    assert_eq!(it.remove(), Err(DequeError::IllegalState));
                    assert_eq!(yielded, Some(victim));
                    assert_eq!(d.len(), 8);
                    assert!(!d.contains(&victim));
                    assert_invariants(&d);
                }
            }
        }

        let mut single = filled(3, 0, 1);
        let mut it = single.removable_iter_rev();
        assert_eq!(it.try_next(), Ok(&0));
        assert_eq!(it.remove(), Ok(0));
        assert!(!it.has_next());
        assert!(single.is_empty());
        assert_invariants(&single);
    }
}
