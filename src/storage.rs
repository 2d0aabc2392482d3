use crate::{StackConfig, StackError};
use std::vec::Drain;

/// Contiguous slot buffer with an explicitly managed capacity.
///
/// `capacity` is the logical capacity: it only changes through `reserve`, `grow` and `shrink_to`,
/// never as a side effect of reading or pushing within it. The backing `Vec` always holds at least
/// that much room, so pushes below `capacity` never relocate the buffer.
pub(crate) struct Storage<S> {
    slots: Vec<S>,
    capacity: usize,
    config: StackConfig,
}

impl<S> Storage<S> {
    pub fn new(config: StackConfig) -> Result<Storage<S>, StackError> {
        let mut storage = Storage {
            slots: Vec::new(),
            capacity: 0,
            config,
        };
        if config.initial_capacity() > 0 {
            storage.try_allocate(config.initial_capacity())?;
        }
        Ok(storage)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn config(&self) -> StackConfig {
        self.config
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[S] {
        &self.slots
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [S] {
        &mut self.slots
    }

    /// Requests a buffer of exactly `new_capacity` slots. On refusal nothing changes.
    fn try_allocate(&mut self, new_capacity: usize) -> Result<(), StackError> {
        debug_assert!(new_capacity >= self.slots.len(), "allocation keeps every slot");
        let refused = StackError::AllocationExhausted {
            requested: new_capacity,
        };
        if !self.config.admits(new_capacity) {
            return Err(refused);
        }
        self.slots
            .try_reserve_exact(new_capacity - self.slots.len())
            .map_err(|_| refused)?;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Ensures room for `additional` more slots with a single allocation.
    pub fn reserve(&mut self, additional: usize) -> Result<(), StackError> {
        let required = self
            .slots
            .len()
            .checked_add(additional)
            .ok_or(StackError::CapacityOverflow)?;
        if required <= self.capacity {
            return Ok(());
        }
        self.try_allocate(required)?;
        debug!("reserved slots: capacity raised to {}", required);
        Ok(())
    }

    /// Grows the buffer for at least one more slot.
    ///
    /// Tries to double the capacity. Every refused request is retried at the midpoint between the
    /// current capacity and the refused target, until a request succeeds or no larger capacity is
    /// left to ask for.
    pub fn grow(&mut self) -> Result<(), StackError> {
        let old_capacity = self.capacity;
        let mut target = if old_capacity == 0 {
            self.config.initial_capacity().max(1)
        } else {
            old_capacity.saturating_mul(2)
        };

        while target > old_capacity {
            match self.try_allocate(target) {
                Ok(()) => {
                    debug!("grew slots: capacity {} -> {}", old_capacity, target);
                    return Ok(());
                }
                Err(_) => {
                    trace!("allocation of {} slots refused", target);
                    target = old_capacity + (target - old_capacity) / 2;
                }
            }
        }

        warn!("no capacity above {} slots can be allocated", old_capacity);
        Err(StackError::AllocationExhausted {
            requested: old_capacity.saturating_add(1),
        })
    }

    /// Moves the slots into a smaller buffer of `target` slots (never below `len`).
    ///
    /// Advisory: if the smaller buffer can not be obtained, the current one is kept.
    pub fn shrink_to(&mut self, target: usize) {
        let target = target.max(self.slots.len());
        if target >= self.capacity {
            return;
        }

        let mut relocated = Vec::new();
        if relocated.try_reserve_exact(target).is_err() {
            warn!("shrink to {} slots refused, keeping {}", target, self.capacity);
            return;
        }
        relocated.extend(self.slots.drain(..));

        debug!("shrinking slots: capacity {} -> {}", self.capacity, target);
        self.slots = relocated;
        self.capacity = target;
    }

    /// Grows the buffer if every slot is in use, so that one more slot fits.
    pub fn make_room(&mut self) -> Result<(), StackError> {
        if self.slots.len() == self.capacity {
            self.grow()?;
        }
        Ok(())
    }

    /// Appends a slot at the end of the buffer, growing it when full.
    pub fn push(&mut self, slot: S) -> Result<(), StackError> {
        self.make_room()?;
        self.push_within(slot);
        Ok(())
    }

    /// Appends a slot to a buffer that has room for it.
    #[inline(always)]
    pub fn push_within(&mut self, slot: S) {
        debug_assert!(self.slots.len() < self.capacity, "push within capacity");
        self.slots.push(slot);
    }

    #[inline(always)]
    pub fn pop(&mut self) -> Option<S> {
        self.slots.pop()
    }

    /// Keeps the slots accepted by `keep`, in their original order.
    pub fn retain(&mut self, keep: impl FnMut(&S) -> bool) {
        self.slots.retain(keep);
    }

    /// Removes every slot, keeping the buffer and its capacity.
    pub fn drain(&mut self) -> Drain<'_, S> {
        self.slots.drain(..)
    }
}
