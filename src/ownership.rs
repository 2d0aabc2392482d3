use std::rc::Rc;

/// Decides what a `Stack` does with the elements it stores.
///
/// The policy is part of the stack type, so it is fixed when the stack is created and one stack
/// can never mix both behaviours.
pub trait Ownership<E> {
    /// Produces an independent element equal to `elem`.
    fn duplicate(&self, elem: &E) -> E;

    /// Disposes of an element the stack no longer holds.
    fn release(&self, elem: E);

    /// Returns true if the stack owns, duplicates and destroys its elements.
    fn is_copy_enabled(&self) -> bool;
}

/// Converts borrowed source data into a stored element.
pub trait Import<'a, E>: Ownership<E> {
    type Source: 'a;

    fn import(&self, item: &'a Self::Source) -> E;
}

/// Owning policy: elements are duplicated with the copy operator and destroyed with the delete
/// operator.
pub struct CopyEnabled<T> {
    copy: Rc<dyn Fn(&T) -> T>,
    delete: Rc<dyn Fn(T)>,
}

impl<T> CopyEnabled<T> {
    pub fn new(copy: impl Fn(&T) -> T + 'static, delete: impl Fn(T) + 'static) -> CopyEnabled<T> {
        CopyEnabled {
            copy: Rc::new(copy),
            delete: Rc::new(delete),
        }
    }
}

impl<T: Clone + 'static> CopyEnabled<T> {
    /// Uses `Clone` to duplicate and `drop` to destroy.
    pub fn cloning() -> CopyEnabled<T> {
        CopyEnabled::new(T::clone, std::mem::drop)
    }
}

impl<T> Clone for CopyEnabled<T> {
    fn clone(&self) -> Self {
        CopyEnabled {
            copy: self.copy.clone(),
            delete: self.delete.clone(),
        }
    }
}

impl<T> Ownership<T> for CopyEnabled<T> {
    #[inline(always)]
    fn duplicate(&self, elem: &T) -> T {
        (self.copy)(elem)
    }

    #[inline(always)]
    fn release(&self, elem: T) {
        (self.delete)(elem)
    }

    #[inline(always)]
    fn is_copy_enabled(&self) -> bool {
        true
    }
}

impl<'a, T: 'a> Import<'a, T> for CopyEnabled<T> {
    type Source = T;

    #[inline(always)]
    fn import(&self, item: &'a T) -> T {
        (self.copy)(item)
    }
}

/// Borrowing policy: the stack holds caller-owned references and never copies or frees what they
/// point to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyDisabled;

impl<'a, T: ?Sized> Ownership<&'a T> for CopyDisabled {
    #[inline(always)]
    fn duplicate(&self, elem: &&'a T) -> &'a T {
        *elem
    }

    #[inline(always)]
    fn release(&self, _elem: &'a T) {}

    #[inline(always)]
    fn is_copy_enabled(&self) -> bool {
        false
    }
}

impl<'a, T: 'a> Import<'a, &'a T> for CopyDisabled {
    type Source = T;

    #[inline(always)]
    fn import(&self, item: &'a T) -> &'a T {
        item
    }
}

#[cfg(test)]
mod ownership_tests {
    use super::{CopyDisabled, CopyEnabled, Import, Ownership};
    use crate::dropflag::DropFlag;
    use std::cell::RefCell;

    #[test]
    fn copy_enabled_runs_the_operators() {
        let deleted = DropFlag::new(RefCell::new(Vec::new()));
        let log = deleted.clone();
        let policy = CopyEnabled::new(|v: &u32| *v + 100, move |v: u32| log.borrow_mut().push(v));

        assert!(policy.is_copy_enabled());
        assert_eq!(105, policy.duplicate(&5));
        assert_eq!(107, policy.import(&7));
        policy.release(3);
        assert_eq!(vec![3], *deleted.borrow());
    }

    #[test]
    fn copy_disabled_hands_back_the_same_reference() {
        let value = 11u32;
        let policy = CopyDisabled;
        let stored: &u32 = policy.import(&value);

        assert!(!Ownership::<&u32>::is_copy_enabled(&policy));
        assert!(std::ptr::eq(&value, policy.duplicate(&stored)));
        policy.release(stored);
        assert_eq!(11, value);
    }
}
