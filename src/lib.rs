//! Array-backed stack with a choice of owning or borrowing elements.
//!
//! A [`Stack`] is created with one of two ownership policies:
//!
//! - [`CopyEnabled`]: the stack owns its elements, duplicates them with a copy operator and
//!   destroys them with a delete operator.
//! - [`CopyDisabled`]: the stack holds caller-owned references and never copies or frees them.
//!
//! Index 0 is always the top of the stack. Removing an element leaves a hole that keeps its slot
//! until [`Stack::compact`] runs.
//!
//! ```
//! use slotstack::Stack;
//!
//! let values = [1u32, 2, 3];
//! let mut stack = Stack::copy_disabled().unwrap();
//! for value in &values {
//!     stack.push(value).unwrap();
//! }
//! stack.remove_nth(1).unwrap();
//! assert_eq!(3, stack.len());
//! stack.compact();
//! assert_eq!(Ok(Some(&3)), stack.pop());
//! assert_eq!(Ok(Some(&1)), stack.pop());
//! ```

#[macro_use]
mod logging;
mod algorithms;
mod config;
mod convert;
mod error;
mod iter;
mod ownership;
mod stack;
mod storage;
mod traits;

pub use algorithms::NOT_FOUND;
pub use config::{StackConfig, StackConfigBuilder, DEFAULT_INITIAL_CAPACITY};
pub use error::StackError;
pub use iter::Slots;
pub use ownership::{CopyDisabled, CopyEnabled, Import, Ownership};
pub use stack::Stack;
pub use traits::StackIterator;

#[cfg(test)]
pub mod dropflag;
