//! Block capacity configuration.
//!
//! The capacity of a block is fixed for the lifetime of a deque. It comes either from an
//! explicit [`DequeConfig`] or from the process-wide default, which
//! [`set_default_block_size`] may change for deques constructed afterwards.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{DequeError, Result};

/// Block capacity used when nothing else is configured.
pub const DEFAULT_BLOCK_SIZE: usize = 64;

/// Smallest capacity able to hold the canonical empty state (`CENTER + 1 < BLOCK_SIZE`).
pub const MIN_BLOCK_SIZE: usize = 2;

static DEFAULT: AtomicUsize = AtomicUsize::new(DEFAULT_BLOCK_SIZE);

/// Returns the block capacity that [`DequeConfig::default`] currently uses.
#[inline]
pub fn default_block_size() -> usize {
    DEFAULT.load(Ordering::Relaxed)
}

/// Changes the block capacity of every deque constructed from now on with the default
/// configuration. Existing deques are unaffected.
///
/// Meant for tests and tuning, not for general runtime reconfiguration.
pub fn set_default_block_size(block_size: usize) -> Result<()> {
    validate(block_size)?;
    DEFAULT.store(block_size, Ordering::Relaxed);
    Ok(())
}

fn validate(block_size: usize) -> Result<()> {
    if block_size < MIN_BLOCK_SIZE {
        return Err(DequeError::InvalidBlockSize { got: block_size, min: MIN_BLOCK_SIZE });
    }
    Ok(())
}

/// Per-instance configuration of a [`HybridDeque`](crate::HybridDeque).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DequeConfig {
    block_size: usize,
}

impl DequeConfig {
    /// Creates a configuration with blocks of `block_size` slots.
    ///
    /// Fails with [`DequeError::InvalidBlockSize`] when `block_size < 2`.
    pub fn new(block_size: usize) -> Result<Self> {
        validate(block_size)?;
        Ok(Self { block_size })
    }

    /// Number of slots per block.
    #[inline(always)]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Slot where the empty deque's right cursor rests; the left cursor rests one past it.
    #[inline(always)]
    pub fn center(&self) -> usize {
        (self.block_size - 1) / 2
    }
}

impl Default for DequeConfig {
    fn default() -> Self {
        Self { block_size: default_block_size() }
    }
}
