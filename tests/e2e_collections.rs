//! End-to-end tests for the container primitives.
//!
//! Both list variants are driven through the shared `UnorderedList` trait
//! and checked against a plain `Vec` model; the queue is checked against
//! FIFO order.

use labyrinth_graph::{
    ArrayUnorderedList, Error, LinkedQueue, LinkedUnorderedList, UnorderedList,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ============================================================================
// Model-based script
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Rear(u8),
    Front(u8),
    Remove(u8),
    RemoveFirst,
    RemoveLast,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..8).prop_map(Op::Rear),
        (0u8..8).prop_map(Op::Front),
        (0u8..8).prop_map(Op::Remove),
        Just(Op::RemoveFirst),
        Just(Op::RemoveLast),
    ]
}

/// Apply `ops` to `list` and to a `Vec` model, comparing after each step.
fn check_against_model<L: UnorderedList<u8> + Default>(ops: &[Op]) {
    let mut list = L::default();
    let mut model: Vec<u8> = Vec::new();

    for op in ops {
        match op {
            Op::Rear(v) => {
                list.add_to_rear(*v);
                model.push(*v);
            }
            Op::Front(v) => {
                list.add_to_front(*v);
                model.insert(0, *v);
            }
            Op::Remove(v) => match model.iter().position(|m| m == v) {
                Some(i) => assert_eq!(list.remove(v), Ok(model.remove(i))),
                None => assert!(matches!(list.remove(v), Err(Error::ElementNotFound(_)))),
            },
            Op::RemoveFirst => {
                if model.is_empty() {
                    assert!(matches!(list.remove_first(), Err(Error::EmptyCollection(_))));
                } else {
                    assert_eq!(list.remove_first(), Ok(model.remove(0)));
                }
            }
            Op::RemoveLast => match model.pop() {
                Some(v) => assert_eq!(list.remove_last(), Ok(v)),
                None => assert!(matches!(list.remove_last(), Err(Error::EmptyCollection(_)))),
            },
        }

        assert_eq!(list.len(), model.len());
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), model);
        assert_eq!(list.first().ok(), model.first());
        assert_eq!(list.last().ok(), model.last());
    }
}

proptest! {
    #[test]
    fn array_list_matches_vec(ops in prop::collection::vec(op(), 0..64)) {
        check_against_model::<ArrayUnorderedList<u8>>(&ops);
    }

    #[test]
    fn linked_list_matches_vec(ops in prop::collection::vec(op(), 0..64)) {
        check_against_model::<LinkedUnorderedList<u8>>(&ops);
    }

    #[test]
    fn queue_is_fifo(values in prop::collection::vec(any::<u16>(), 0..32)) {
        let mut queue = LinkedQueue::new();
        for v in &values {
            queue.enqueue(*v);
        }
        let mut drained = Vec::new();
        while let Ok(v) = queue.dequeue() {
            drained.push(v);
        }
        prop_assert_eq!(drained, values);
        prop_assert!(queue.is_empty());
    }
}

// ============================================================================
// Interchangeability
// ============================================================================

/// Written once against the trait; runs on either variant.
fn drain_matching<L: UnorderedList<String>>(list: &mut L, prefix: &str) -> usize {
    let matching: Vec<String> = list.iter().filter(|s| s.starts_with(prefix)).cloned().collect();
    for s in &matching {
        list.remove(s).unwrap();
    }
    matching.len()
}

#[test]
fn test_variants_interchangeable_at_call_site() {
    let names = ["Entrada Norte", "Sala 1", "Entrada Sul", "Tesouro"];

    let mut array: ArrayUnorderedList<String> = names.iter().map(|s| s.to_string()).collect();
    let mut linked: LinkedUnorderedList<String> = names.iter().map(|s| s.to_string()).collect();

    assert_eq!(drain_matching(&mut array, "Entrada"), 2);
    assert_eq!(drain_matching(&mut linked, "Entrada"), 2);
    assert_eq!(
        array.iter().collect::<Vec<_>>(),
        linked.iter().collect::<Vec<_>>(),
    );
}

// ============================================================================
// Queue edge cases
// ============================================================================

#[test]
fn test_dequeue_empty_queue() {
    let mut queue: LinkedQueue<String> = LinkedQueue::new();
    assert_eq!(queue.dequeue(), Err(Error::EmptyCollection("LinkedQueue")));
}

#[test]
fn test_enqueue_dequeue_singleton() {
    let mut queue = LinkedQueue::new();
    queue.enqueue(7);
    assert_eq!(queue.dequeue(), Ok(7));
    assert!(queue.is_empty());
    assert!(queue.dequeue().is_err());
}

#[test]
fn test_iteration_is_single_pass_snapshot() {
    let list: LinkedUnorderedList<u8> = (1..=3).collect();
    let mut it = list.iter();
    assert_eq!(it.len(), 3);
    assert_eq!(it.next(), Some(&1));
    assert_eq!(it.by_ref().count(), 2);
    assert_eq!(it.next(), None);
}
