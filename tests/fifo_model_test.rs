//! Model Test - FIFO Order vs VecDeque
//!
//! Urutan operasi acak (push/pop/peek/retrieve) dijalankan pada
//! `RingBuffer` dan `VecDeque` sekaligus, hasilnya harus identik.
//!
//! Usage:
//!   cargo test --test fifo_model_test

use std::collections::VecDeque;

use circq::core::{QueueError, RingBuffer};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(u32),
    Pop,
    Peek,
    Retrieve,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        1 => Just(Op::Peek),
        1 => Just(Op::Retrieve),
    ]
}

proptest! {
    #[test]
    fn matches_vecdeque_model(
        capacity in 1usize..8,
        ops in prop::collection::vec(op_strategy(), 0..256),
    ) {
        let mut rb = RingBuffer::with_capacity(capacity).unwrap();
        let mut model: VecDeque<u32> = VecDeque::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    let before = rb.len();
                    rb.push(v);
                    model.push_back(v);
                    prop_assert_eq!(rb.len(), before + 1);
                }
                Op::Pop => {
                    prop_assert_eq!(rb.pop().ok(), model.pop_front());
                }
                Op::Peek => {
                    prop_assert_eq!(rb.peek().ok(), model.front());
                }
                Op::Retrieve => {
                    let expected = if model.pop_front().is_some() {
                        Ok(())
                    } else {
                        Err(QueueError::EmptyQueue)
                    };
                    prop_assert_eq!(rb.retrieve(), expected);
                }
            }

            prop_assert_eq!(rb.len(), model.len());
            prop_assert_eq!(rb.is_empty(), rb.len() == 0);
            prop_assert!(rb.len() <= rb.capacity());
        }

        let drained: Vec<u32> = std::iter::from_fn(|| rb.pop().ok()).collect();
        let expected: Vec<u32> = model.into_iter().collect();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn growth_preserves_order(capacity in 1usize..16, count in 0usize..200) {
        let mut rb = RingBuffer::with_capacity(capacity).unwrap();
        for i in 0..count {
            rb.push(i);
        }
        prop_assert_eq!(rb.len(), count);
        prop_assert_eq!(rb.iter().copied().collect::<Vec<_>>(), (0..count).collect::<Vec<_>>());
        for i in 0..count {
            prop_assert_eq!(rb.pop(), Ok(i));
        }
        prop_assert!(rb.is_empty());
    }
}

#[test]
fn default_capacity_scenario() {
    let mut rb: RingBuffer<u64> = RingBuffer::new();
    assert_eq!(rb.len(), 0);
    assert_eq!(rb.retrieve(), Err(QueueError::EmptyQueue));
    assert_eq!(rb.capacity(), circq::DEFAULT_CAPACITY);
}

#[test]
fn capacity_two_grows_on_third_push() {
    let mut rb = RingBuffer::with_capacity(2).unwrap();
    rb.push("first");
    rb.push("second");
    assert!(rb.is_full());

    rb.push("third");
    assert!(rb.capacity() >= 5);
    assert_eq!(rb.len(), 3);
    assert_eq!(rb.pop(), Ok("first"));
    assert_eq!(rb.pop(), Ok("second"));
    assert_eq!(rb.pop(), Ok("third"));
    assert_eq!(rb.pop(), Err(QueueError::EmptyQueue));
}

#[test]
fn failed_operations_keep_state() {
    let mut rb = RingBuffer::with_capacity(3).unwrap();
    rb.push(1u8);
    rb.pop().unwrap();

    let capacity = rb.capacity();
    assert_eq!(rb.pop(), Err(QueueError::EmptyQueue));
    assert_eq!(rb.peek(), Err(QueueError::EmptyQueue));
    assert_eq!(rb.retrieve(), Err(QueueError::EmptyQueue));
    assert!(rb.is_empty());
    assert_eq!(rb.len(), 0);
    assert_eq!(rb.capacity(), capacity);

    rb.push(2);
    assert_eq!(rb.pop(), Ok(2));
}
