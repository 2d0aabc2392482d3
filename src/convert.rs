//! Moving elements between a `Stack` and plain arrays.
//!
//! Arrays are in push order: the bottom of the stack comes first and the top comes last, so
//! importing an exported array rebuilds the same stack.

use crate::{Import, Ownership, Stack, StackError};

impl<E, P> Stack<E, P>
where
    P: Ownership<E>,
{
    /// Moves every element out of the stack into a new array, leaving the stack empty and
    /// reusable at its current capacity. Holes are discarded.
    ///
    /// Fails with `Empty` and changes nothing if the stack holds no element.
    pub fn dump(&mut self) -> Result<Vec<E>, StackError> {
        let live = self.live_len();
        if live == 0 {
            return Err(StackError::Empty);
        }
        let mut elems = Vec::new();
        elems
            .try_reserve_exact(live)
            .map_err(|_| StackError::AllocationExhausted { requested: live })?;
        elems.extend(self.storage.drain().flatten());
        self.live = 0;
        Ok(elems)
    }

    /// Copies every element into a new array, duplicating through the policy. The stack is left
    /// unchanged. Holes are skipped.
    pub fn to_array(&self) -> Result<Vec<E>, StackError> {
        let live = self.live_len();
        if live == 0 {
            return Err(StackError::Empty);
        }
        let mut elems = Vec::new();
        elems
            .try_reserve_exact(live)
            .map_err(|_| StackError::AllocationExhausted { requested: live })?;
        let policy = &self.policy;
        elems.extend(self.storage.as_slice().iter().flatten().map(|elem| policy.duplicate(elem)));
        Ok(elems)
    }

    /// Pushes the first `n_elems` items of `source` in order, so the last one ends up on top.
    /// Elements already on the stack stay below them. A missing source leaves the stack
    /// untouched.
    ///
    /// Room for all items is reserved up front: either every item is pushed or none is.
    pub fn from_array<'a>(
        &mut self,
        source: Option<&'a [<P as Import<'a, E>>::Source]>,
        n_elems: usize,
    ) -> Result<(), StackError>
    where
        P: Import<'a, E>,
    {
        let source = match source {
            Some(source) => source,
            None => return Ok(()),
        };
        let items = source.get(..n_elems).ok_or(StackError::IndexOutOfRange {
            index: n_elems,
            len: source.len(),
        })?;
        self.storage.reserve(items.len())?;
        for item in items {
            let elem = self.policy.import(item);
            self.storage.push_within(Some(elem));
            self.live += 1;
        }
        Ok(())
    }
}
