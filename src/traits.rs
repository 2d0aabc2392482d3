use crate::{Ownership, Stack, StackConfig, StackError};

/// Implements collect to `Stack`.
pub trait StackIterator: Iterator {
    /// Pushes every item in iteration order, so the last item ends up on top.
    fn collect_stack<P>(self, policy: P) -> Result<Stack<Self::Item, P>, StackError>
        where
            P: Ownership<Self::Item>;

    fn collect_stack_with_config<P>(self, policy: P, config: StackConfig) -> Result<Stack<Self::Item, P>, StackError>
        where
            P: Ownership<Self::Item>;
}

impl<Q: Iterator> StackIterator for Q {
    fn collect_stack<P>(self, policy: P) -> Result<Stack<Self::Item, P>, StackError>
        where
            P: Ownership<Self::Item>
    {
        self.collect_stack_with_config(policy, StackConfig::default())
    }

    fn collect_stack_with_config<P>(self, policy: P, config: StackConfig) -> Result<Stack<Self::Item, P>, StackError>
        where
            P: Ownership<Self::Item>
    {
        let (lower, _) = self.size_hint();
        let mut stack = Stack::with_config(policy, config)?;
        stack.reserve(lower)?;
        for item in self {
            stack.push(item)?;
        }
        Ok(stack)
    }
}

#[cfg(test)]
mod collect_tests {
    use crate::{CopyDisabled, CopyEnabled, StackConfig, StackError, StackIterator};

    #[test]
    fn collects_with_last_item_on_top() {
        let stack = (0..12u32).collect_stack(CopyEnabled::cloning()).unwrap();
        assert_eq!(12, stack.len());
        for i in 0..12 {
            assert_eq!(Ok(11 - i as u32), stack.peek_nth(i), "at index {}", i);
        }
    }

    #[test]
    fn collects_references() {
        let values = vec![1i16, 2, 3];
        let stack = values.iter().collect_stack(CopyDisabled).unwrap();
        assert_eq!(0, stack.ptr_search(Some(&values[2])));
    }

    #[test]
    fn collect_respects_capacity_limit() {
        let config = StackConfig::builder().initial_capacity(2).capacity_limit(4).build();
        let result = (0..5u8).collect_stack_with_config(CopyEnabled::cloning(), config);
        assert_eq!(Some(StackError::AllocationExhausted { requested: 5 }), result.err());
    }
}
