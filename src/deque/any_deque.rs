//! Backend-agnostic deque contract.
//!
//! [`AnyDeque`] covers insertion and removal at both ends, in both the `Option` flavour and
//! the fallible `offer`/`try_` flavour that reports [`DequeError`]s. [`SearchableDeque`] adds
//! membership and occurrence removal for element types that can be compared.

use std::collections::VecDeque;

use super::HybridDeque;
use crate::error::{DequeError, Result};

/// Object-safe double-ended queue contract, implemented by `HybridDeque<T>` and `VecDeque<T>`.
///
/// Only the `Option`-returning primitives are required. The `offer_*` and `try_*` methods
/// derive the error reporting from them.
pub trait AnyDeque<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push_front(&mut self, item: T);

    fn push_back(&mut self, item: T);

    /// Inserts a present value at the front; an absent one is an
    /// [`InvalidArgument`](DequeError::InvalidArgument).
    fn offer_front(&mut self, item: Option<T>) -> Result<bool> {
        self.push_front(item.ok_or(DequeError::InvalidArgument)?);
        Ok(true)
    }

    /// Back counterpart of [`offer_front`](Self::offer_front).
    fn offer_back(&mut self, item: Option<T>) -> Result<bool> {
        self.push_back(item.ok_or(DequeError::InvalidArgument)?);
        Ok(true)
    }

    fn pop_front(&mut self) -> Option<T>;

    fn pop_back(&mut self) -> Option<T>;

    fn try_pop_front(&mut self) -> Result<T> {
        self.pop_front().ok_or(DequeError::EmptyCollection)
    }

    fn try_pop_back(&mut self) -> Result<T> {
        self.pop_back().ok_or(DequeError::EmptyCollection)
    }

    fn front(&self) -> Option<&T>;

    fn back(&self) -> Option<&T>;

    fn try_front(&self) -> Result<&T> {
        self.front().ok_or(DequeError::EmptyCollection)
    }

    fn try_back(&self) -> Result<&T> {
        self.back().ok_or(DequeError::EmptyCollection)
    }

    fn clear(&mut self);
}

/// Membership and occurrence removal on top of [`AnyDeque`].
pub trait SearchableDeque<T: PartialEq>: AnyDeque<T> {
    fn contains(&self, item: &T) -> bool;

    /// Removes the element equal to `item` closest to the front. Returns whether one was found.
    fn remove_first_occurrence(&mut self, item: &T) -> bool;

    /// Removes the element equal to `item` closest to the back. Returns whether one was found.
    fn remove_last_occurrence(&mut self, item: &T) -> bool;
}

impl<T> AnyDeque<T> for HybridDeque<T> {
    fn len(&self) -> usize {
        self.len
    }
    fn push_front(&mut self, item: T) {
        HybridDeque::push_front(self, item);
    }
    fn push_back(&mut self, item: T) {
        HybridDeque::push_back(self, item);
    }
    fn pop_front(&mut self) -> Option<T> {
        HybridDeque::pop_front(self)
    }
    fn pop_back(&mut self) -> Option<T> {
        HybridDeque::pop_back(self)
    }
    fn front(&self) -> Option<&T> {
        HybridDeque::front(self)
    }
    fn back(&self) -> Option<&T> {
        HybridDeque::back(self)
    }
    fn clear(&mut self) {
        HybridDeque::clear(self);
    }
}

impl<T: PartialEq> SearchableDeque<T> for HybridDeque<T> {
    fn contains(&self, item: &T) -> bool {
        HybridDeque::contains(self, item)
    }
    fn remove_first_occurrence(&mut self, item: &T) -> bool {
        HybridDeque::remove_first_occurrence(self, item)
    }
    fn remove_last_occurrence(&mut self, item: &T) -> bool {
        HybridDeque::remove_last_occurrence(self, item)
    }
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
    fn push_front(&mut self, item: T) {
        VecDeque::push_front(self, item);
    }
    fn push_back(&mut self, item: T) {
        VecDeque::push_back(self, item);
    }
    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }
    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }
    fn front(&self) -> Option<&T> {
        VecDeque::front(self)
    }
    fn back(&self) -> Option<&T> {
        VecDeque::back(self)
    }
    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

impl<T: PartialEq> SearchableDeque<T> for VecDeque<T> {
    fn contains(&self, item: &T) -> bool {
        VecDeque::contains(self, item)
    }
    fn remove_first_occurrence(&mut self, item: &T) -> bool {
        match self.iter().position(|x| x == item) {
            Some(index) => self.remove(index).is_some(),
            None => false,
        }
    }
    fn remove_last_occurrence(&mut self, item: &T) -> bool {
        match self.iter().rposition(|x| x == item) {
            Some(index) => self.remove(index).is_some(),
            None => false,
        }
    }
}
