//! Traversal, search and reordering over the slots of a `Stack`.
//!
//! Every algorithm uses the stack's index convention (0 is the top) and skips holes unless it
//! reorders slots, in which case holes move like any other slot.

use crate::{Ownership, Stack};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_hc::Hc128Rng;
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Index returned by searches that find no match.
pub const NOT_FOUND: usize = usize::MAX;

impl<E, P> Stack<E, P>
where
    P: Ownership<E>,
{
    /// Calls `f` on every element from the top down.
    pub fn for_each(&mut self, mut f: impl FnMut(&mut E)) {
        for elem in self.storage.as_mut_slice().iter_mut().rev().flatten() {
            f(elem);
        }
    }

    /// Turns every element rejected by `keep` into a hole, releasing it through the policy.
    pub fn filter(&mut self, mut keep: impl FnMut(&E) -> bool) {
        let policy = &self.policy;
        for slot in self.storage.as_mut_slice().iter_mut().rev() {
            if slot.as_ref().map_or(false, |elem| !keep(elem)) {
                if let Some(elem) = slot.take() {
                    self.live -= 1;
                    policy.release(elem);
                }
            }
        }
    }

    /// True if `predicate` holds for every element. Vacuously true without elements.
    pub fn all(&self, predicate: impl FnMut(&E) -> bool) -> bool {
        self.iter().flatten().all(predicate)
    }

    /// True if `predicate` holds for some element. False without elements.
    pub fn any(&self, predicate: impl FnMut(&E) -> bool) -> bool {
        self.iter().flatten().any(predicate)
    }

    /// Index of the first element `eq` matches with `target`, or `NOT_FOUND`.
    ///
    /// A `None` target matches nothing.
    pub fn search(&self, target: Option<&E>, mut eq: impl FnMut(&E, &E) -> bool) -> usize {
        let target = match target {
            Some(target) => target,
            None => return NOT_FOUND,
        };
        self.iter()
            .position(|slot| slot.map_or(false, |elem| eq(elem, target)))
            .unwrap_or(NOT_FOUND)
    }

    pub fn contains(&self, target: Option<&E>, eq: impl FnMut(&E, &E) -> bool) -> bool {
        self.search(target, eq) != NOT_FOUND
    }

    /// Index of the first element that is `target` itself (same address), or `NOT_FOUND`.
    ///
    /// Under the owning policy the stack only holds its own duplicates, so caller data is never
    /// found.
    pub fn ptr_search<Q>(&self, target: Option<&Q>) -> usize
    where
        Q: ?Sized,
        E: Borrow<Q>,
    {
        let target = match target {
            Some(target) => target,
            None => return NOT_FOUND,
        };
        self.iter()
            .position(|slot| slot.map_or(false, |elem| std::ptr::eq(Borrow::<Q>::borrow(elem), target)))
            .unwrap_or(NOT_FOUND)
    }

    pub fn ptr_contains<Q>(&self, target: Option<&Q>) -> bool
    where
        Q: ?Sized,
        E: Borrow<Q>,
    {
        self.ptr_search(target) != NOT_FOUND
    }

    /// Reverses the slot order, holes included.
    pub fn reverse(&mut self) {
        self.storage.as_mut_slice().reverse();
    }

    /// Randomly permutes all slots with a generator seeded by `seed`.
    pub fn shuffle(&mut self, seed: u64) {
        self.shuffle_with(&mut Hc128Rng::seed_from_u64(seed));
    }

    /// Randomly permutes all slots, visiting each slot once (Fisher-Yates).
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.storage.as_mut_slice().shuffle(rng);
    }

    /// Sorts the elements so that reading from the top down gives a non-decreasing sequence
    /// under `compare`. Holes sink to the bottom. The sort is stable.
    pub fn sort_by(&mut self, mut compare: impl FnMut(&E, &E) -> Ordering) {
        // the top is at the end of the buffer, so the buffer is sorted in descending order
        self.storage.as_mut_slice().sort_by(|a, b| match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => compare(b, a),
        });
    }
}
