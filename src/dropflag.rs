//! This module is for testing only

use crate::CopyEnabled;
use std::cell::RefCell;
use std::rc::Rc;

pub type DropFlag<T> = Rc<RefCell<T>>;

/// Counts how often the operators of a copy-enabled policy ran.
pub struct OperatorCounts {
    pub copies: DropFlag<usize>,
    pub deletes: DropFlag<usize>,
}

impl OperatorCounts {
    pub fn copies(&self) -> usize {
        *self.copies.borrow()
    }

    pub fn deletes(&self) -> usize {
        *self.deletes.borrow()
    }
}

/// Returns a `u32` policy that counts copy and delete calls.
pub fn counting_policy() -> (CopyEnabled<u32>, OperatorCounts) {
    let counts = OperatorCounts {
        copies: DropFlag::new(RefCell::new(0)),
        deletes: DropFlag::new(RefCell::new(0)),
    };
    let copies = counts.copies.clone();
    let deletes = counts.deletes.clone();
    let policy = CopyEnabled::new(
        move |v: &u32| {
            *copies.borrow_mut() += 1;
            *v
        },
        move |_: u32| *deletes.borrow_mut() += 1,
    );
    (policy, counts)
}

/// Increments its flag when dropped.
pub struct Droppable {
    pub value: u32,
    pub dropflag: DropFlag<usize>,
}

impl Clone for Droppable {
    fn clone(&self) -> Self {
        Droppable {
            value: self.value,
            dropflag: self.dropflag.clone(),
        }
    }
}

impl Drop for Droppable {
    fn drop(&mut self) {
        *self.dropflag.borrow_mut() += 1;
    }
}

#[test]
fn dropflag() {
    let flag = DropFlag::new(RefCell::new(0));
    let droppable = Droppable { value: 1, dropflag: flag.clone() };
    let copy = droppable.clone();
    assert_eq!(0, *flag.borrow());
    std::mem::drop(droppable);
    std::mem::drop(copy);
    assert_eq!(2, *flag.borrow());
}

#[test]
fn counting_policy_counts() {
    use crate::Ownership;

    let (policy, counts) = counting_policy();
    let copy = policy.duplicate(&4);
    policy.release(copy);
    assert_eq!(1, counts.copies());
    assert_eq!(1, counts.deletes());
}
