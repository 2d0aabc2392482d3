use crate::iter::Slots;
use crate::storage::Storage;
use crate::{CopyDisabled, CopyEnabled, Ownership, StackConfig, StackError};

/// Array-backed LIFO container.
///
/// Index 0 is the top of the stack (the most recently pushed slot) and indices grow towards the
/// bottom. Removing an element leaves a hole in its slot: the slot keeps its index and still
/// counts towards `len` until `compact` reclaims it.
///
/// What happens to the elements is decided by the ownership policy `P`:
///
/// - `CopyEnabled<T>`: the stack owns `T` values. Peeks and copies duplicate them with the copy
///   operator, and every element the stack gives up is destroyed with the delete operator.
/// - `CopyDisabled`: the stack holds `&T` references and never copies or frees the referenced data.
///
/// Internally the top lives at the end of the buffer, so `push` and `pop` touch only the last slot.
pub struct Stack<E, P>
where
    P: Ownership<E>,
{
    pub(crate) storage: Storage<Option<E>>,
    pub(crate) policy: P,
    /// Number of slots holding an element.
    pub(crate) live: usize,
}

impl<T> Stack<T, CopyEnabled<T>> {
    /// Creates an empty owning stack with the default configuration.
    pub fn copy_enabled(
        copy: impl Fn(&T) -> T + 'static,
        delete: impl Fn(T) + 'static,
    ) -> Result<Self, StackError> {
        Stack::with_config(CopyEnabled::new(copy, delete), StackConfig::default())
    }
}

impl<'a, T: ?Sized> Stack<&'a T, CopyDisabled> {
    /// Creates an empty borrowing stack with the default configuration.
    pub fn copy_disabled() -> Result<Self, StackError> {
        Stack::with_config(CopyDisabled, StackConfig::default())
    }
}

impl<E, P> Stack<E, P>
where
    P: Ownership<E>,
{
    pub fn with_config(policy: P, config: StackConfig) -> Result<Self, StackError> {
        Ok(Stack {
            storage: Storage::new(config)?,
            policy,
            live: 0,
        })
    }

    #[inline(always)]
    pub fn is_copy_enabled(&self) -> bool {
        self.policy.is_copy_enabled()
    }

    /// Number of slots in use, holes included.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    /// Number of slots that hold an element.
    #[inline(always)]
    pub fn live_len(&self) -> usize {
        self.live
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    #[inline(always)]
    pub fn config(&self) -> StackConfig {
        self.storage.config()
    }

    /// Ensures room for `additional` more pushes with a single allocation.
    pub fn reserve(&mut self, additional: usize) -> Result<(), StackError> {
        self.storage.reserve(additional)
    }

    /// Releases unused capacity down to `target` slots, if the allocator allows.
    pub fn shrink_to(&mut self, target: usize) {
        self.storage.shrink_to(target)
    }

    /// Buffer position of stack index `index`.
    pub(crate) fn position(&self, index: usize) -> Result<usize, StackError> {
        let len = self.storage.len();
        if index < len {
            Ok(len - 1 - index)
        } else {
            Err(StackError::IndexOutOfRange { index, len })
        }
    }

    /// Puts `elem` on top of the stack, growing the buffer when it is full.
    ///
    /// If no room can be obtained the stack is left unchanged and `elem` is dropped without
    /// running the delete operator. Use [`Stack::try_push`] to get it back.
    pub fn push(&mut self, elem: E) -> Result<(), StackError> {
        self.try_push(elem).map_err(|(_, err)| err)
    }

    /// Like [`Stack::push`], but hands `elem` back together with the error when no room can be
    /// obtained.
    pub fn try_push(&mut self, elem: E) -> Result<(), (E, StackError)> {
        if let Err(err) = self.storage.make_room() {
            return Err((elem, err));
        }
        self.storage.push_within(Some(elem));
        self.live += 1;
        Ok(())
    }

    /// Puts a duplicate of `elem` on top of the stack. The duplicate is released if it can not
    /// be stored.
    pub fn push_copy(&mut self, elem: &E) -> Result<(), StackError> {
        let copy = self.policy.duplicate(elem);
        self.try_push(copy).map_err(|(copy, err)| {
            self.policy.release(copy);
            err
        })
    }

    /// Removes the top slot and hands its element to the caller, or `None` if the slot is a hole.
    ///
    /// Fails with `Empty` and changes nothing if no slot holds an element.
    pub fn pop(&mut self) -> Result<Option<E>, StackError> {
        if self.live == 0 {
            return Err(StackError::Empty);
        }
        let slot = self.storage.pop().ok_or(StackError::Empty)?;
        if slot.is_some() {
            self.live -= 1;
        }
        Ok(slot)
    }

    /// Returns the top element, duplicated under the owning policy.
    pub fn peek_top(&self) -> Result<E, StackError> {
        self.peek_nth(0)
    }

    /// Returns the element at `index`, duplicated under the owning policy.
    pub fn peek_nth(&self, index: usize) -> Result<E, StackError> {
        if self.live == 0 {
            return Err(StackError::Empty);
        }
        let position = self.position(index)?;
        match &self.storage.as_slice()[position] {
            Some(elem) => Ok(self.policy.duplicate(elem)),
            None => Err(StackError::Hole { index }),
        }
    }

    /// Borrows the element at `index`. Holes and out-of-range indices give `None`.
    pub fn get(&self, index: usize) -> Option<&E> {
        let position = self.position(index).ok()?;
        self.storage.as_slice()[position].as_ref()
    }

    /// Turns slot `index` into a hole. Neighbouring slots do not move and `len` does not change.
    pub fn remove_nth(&mut self, index: usize) -> Result<(), StackError> {
        let position = self.position(index)?;
        if let Some(elem) = self.storage.as_mut_slice()[position].take() {
            self.live -= 1;
            self.policy.release(elem);
        }
        Ok(())
    }

    /// Exchanges the slots at `i` and `j`, holes included.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), StackError> {
        let a = self.position(i)?;
        let b = self.position(j)?;
        self.storage.as_mut_slice().swap(a, b);
        Ok(())
    }

    /// Creates an independent stack with the same policy, configuration and slots.
    ///
    /// Elements are duplicated through the policy; holes stay holes.
    pub fn copy(&self) -> Result<Self, StackError>
    where
        P: Clone,
    {
        let mut copy = Stack::with_config(self.policy.clone(), self.config())?;
        copy.storage.reserve(self.len())?;
        for slot in self.storage.as_slice() {
            let slot = slot.as_ref().map(|elem| self.policy.duplicate(elem));
            copy.storage.push(slot)?;
        }
        copy.live = self.live;
        Ok(copy)
    }

    /// Structural equality: same length, and at every index either both slots are holes or
    /// `matches` accepts the two elements.
    pub fn cmp_by<Q, F>(&self, other: &Stack<E, Q>, mut matches: F) -> bool
    where
        Q: Ownership<E>,
        F: FnMut(&E, &E) -> bool,
    {
        self.len() == other.len()
            && self
                .storage
                .as_slice()
                .iter()
                .zip(other.storage.as_slice())
                .all(|pair| match pair {
                    (None, None) => true,
                    (Some(a), Some(b)) => matches(a, b),
                    _ => false,
                })
    }

    /// Removes every hole, keeping the survivors in order. Capacity is unchanged.
    pub fn compact(&mut self) {
        trace!("compacting {} holes", self.storage.len() - self.live);
        self.storage.retain(Option::is_some);
    }

    /// Releases every element and empties the stack. The buffer is kept for reuse.
    pub fn clear(&mut self) {
        let policy = &self.policy;
        for elem in self.storage.drain().flatten() {
            policy.release(elem);
        }
        self.live = 0;
    }

    /// Releases every element and the buffer.
    pub fn free(mut self) {
        self.clear();
    }

    /// Iterates over all slots from the top down.
    pub fn iter(&self) -> Slots<'_, E> {
        Slots::new(self.storage.as_slice())
    }

    /// Calls `printer` once per slot from the top down, with `None` for holes.
    pub fn debug(&self, mut printer: impl FnMut(Option<&E>)) {
        for slot in self.iter() {
            printer(slot);
        }
    }
}

impl<E, P> Drop for Stack<E, P>
where
    P: Ownership<E>,
{
    fn drop(&mut self) {
        self.clear();
    }
}

impl<E, P> std::fmt::Debug for Stack<E, P>
where
    E: std::fmt::Debug,
    P: Ownership<E>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
