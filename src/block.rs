//! Fixed-capacity element blocks and the arena that chains them together.
//!
//! Blocks refer to their neighbours through [`BlockId`] handles into a [`BlockChain`]
//! instead of pointers, so the doubly linked chain needs neither reference counting nor
//! `unsafe`. The chain owns every block; a handle is only a name for one.

use core::ops::{Index, IndexMut};

/// Handle of a block inside its [`BlockChain`].
///
/// Handles are only meaningful for the chain that issued them, and a released handle may be
/// reissued to a later block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct BlockId(usize);

impl BlockId {
    /// Raw arena slot, for diagnostics.
    #[inline(always)]
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A chain node holding `block_size` element slots.
///
/// `None` marks an unoccupied slot. Slots outside the occupied range are kept `None` so a
/// removed element is never retained.
pub(crate) struct Block<T> {
    slots: Box<[Option<T>]>,
    pub(crate) prev: Option<BlockId>,
    pub(crate) next: Option<BlockId>,
}

impl<T> Block<T> {
    fn new(block_size: usize, prev: Option<BlockId>, next: Option<BlockId>) -> Self {
        Self { slots: (0..block_size).map(|_| None).collect(), prev, next }
    }

    #[inline(always)]
    pub(crate) fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    #[inline(always)]
    pub(crate) fn slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots
    }

    fn is_vacant(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Empties every slot and detaches the block from its neighbours.
    fn wipe(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.prev = None;
        self.next = None;
    }
}

/// Arena owning every block of a deque.
///
/// # Invariants
/// * At least one block is live at all times.
/// * Live blocks form a single non-circular chain through `prev`/`next`.
/// * Released arena entries are `None` and their handles wait in `vacant` for reuse.
pub(crate) struct BlockChain<T> {
    blocks: Vec<Option<Block<T>>>,
    vacant: Vec<BlockId>,
    block_size: usize,
    linked: usize,
}

impl<T> BlockChain<T> {
    /// Creates a chain made of one fresh block, returning the chain and that block.
    pub(crate) fn new(block_size: usize) -> (Self, BlockId) {
        let chain = Self {
            blocks: vec![Some(Block::new(block_size, None, None))],
            vacant: Vec::new(),
            block_size,
            linked: 1,
        };
        (chain, BlockId(0))
    }

    /// Number of slots per block.
    #[inline(always)]
    pub(crate) fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of blocks currently linked into the chain.
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.linked
    }

    fn allocate(&mut self, prev: Option<BlockId>, next: Option<BlockId>) -> BlockId {
        let block = Block::new(self.block_size, prev, next);
        self.linked += 1;
        match self.vacant.pop() {
            Some(id) => {
                self.blocks[id.0] = Some(block);
                id
            }
            None => {
                self.blocks.push(Some(block));
                BlockId(self.blocks.len() - 1)
            }
        }
    }

    fn release(&mut self, id: BlockId) {
        if let Some(block) = self.blocks[id.0].take() {
            debug_assert!(block.is_vacant(), "released block {id:?} still holds elements");
            self.vacant.push(id);
            self.linked -= 1;
        }
    }

    /// Links a new block in front of `id`, which must be the first block of the chain.
    pub(crate) fn link_before(&mut self, id: BlockId) -> BlockId {
        debug_assert!(self[id].prev.is_none());
        let new = self.allocate(None, Some(id));
        self[id].prev = Some(new);
        new
    }

    /// Links a new block behind `id`, which must be the last block of the chain.
    pub(crate) fn link_after(&mut self, id: BlockId) -> BlockId {
        debug_assert!(self[id].next.is_none());
        let new = self.allocate(Some(id), None);
        self[id].next = Some(new);
        new
    }

    /// Detaches and destroys the (drained) block preceding `id`.
    pub(crate) fn unlink_before(&mut self, id: BlockId) -> Option<BlockId> {
        let drained = self[id].prev.take()?;
        self.release(drained);
        Some(drained)
    }

    /// Detaches and destroys the (drained) block following `id`.
    pub(crate) fn unlink_after(&mut self, id: BlockId) -> Option<BlockId> {
        let drained = self[id].next.take()?;
        self.release(drained);
        Some(drained)
    }

    /// Drops every element and every block but one, whose storage is emptied and returned
    /// as the sole block of the chain.
    pub(crate) fn reset(&mut self) -> BlockId {
        let mut survivor = None;
        for block in self.blocks.drain(..).flatten() {
            if survivor.is_none() {
                survivor = Some(block);
            }
        }
        let mut block = survivor.unwrap_or_else(|| Block::new(self.block_size, None, None));
        block.wipe();
        self.blocks.push(Some(block));
        self.vacant.clear();
        self.linked = 1;
        BlockId(0)
    }
}

impl<T> Index<BlockId> for BlockChain<T> {
    type Output = Block<T>;

    #[inline(always)]
    fn index(&self, id: BlockId) -> &Block<T> {
        match &self.blocks[id.0] {
            Some(block) => block,
            None => unreachable!("Logic Error: block {id:?} was released"),
        }
    }
}

impl<T> IndexMut<BlockId> for BlockChain<T> {
    #[inline(always)]
    fn index_mut(&mut self, id: BlockId) -> &mut Block<T> {
        match &mut self.blocks[id.0] {
            Some(block) => block,
            None => unreachable!("Logic Error: block {id:?} was released"),
        }
    }
}
