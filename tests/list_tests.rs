// Integration tests for the linked list and its algorithms

use linkview::list::{
    cycle_entry, has_cycle, has_cycle_by_visit, reverse, LinkedList, ListError, Node, NodeArena,
};

fn list_of(values: &[i32]) -> LinkedList<i32> {
    values.iter().copied().collect()
}

#[test]
fn test_append_preserves_order_and_size() {
    for n in 0..20 {
        let mut list = LinkedList::new();
        for v in 0..n {
            list.append(v * 3);
        }

        let expected: Vec<i32> = (0..n).map(|v| v * 3).collect();
        assert_eq!(list.to_vec(), expected);
        assert_eq!(list.len(), n as usize);
        assert_eq!(list.arena().live(), list.len());
    }
}

#[test]
fn test_operations_walkthrough() {
    let mut list = LinkedList::new();
    list.append(10);
    list.append(20);
    list.append(30);
    assert_eq!(list.to_vec(), vec![10, 20, 30]);

    list.prepend(5);
    assert_eq!(list.to_vec(), vec![5, 10, 20, 30]);

    assert!(list.insert_at(15, 2));
    assert_eq!(list.to_vec(), vec![5, 10, 15, 20, 30]);
    assert_eq!(list.len(), 5);
    assert_eq!(list.get_at(2), Some(&15));

    assert_eq!(list.remove_at(2), Some(15));
    assert_eq!(list.to_vec(), vec![5, 10, 20, 30]);
    assert_eq!(list.get_at(1), Some(&10));
    assert_eq!(list.to_string(), "5 -> 10 -> 20 -> 30 -> null");
}

#[test]
fn test_insert_then_get_at_every_valid_index() {
    let base = [1, 2, 3, 4, 5];
    for i in 0..=base.len() {
        let mut list = list_of(&base);
        assert!(list.insert_at(99, i), "insert at {} failed", i);
        assert_eq!(list.get_at(i), Some(&99));
        assert_eq!(list.len(), base.len() + 1);
    }
}

#[test]
fn test_insert_out_of_range_is_noop() {
    let mut list = list_of(&[1, 2, 3]);
    assert!(!list.insert_at(9, 4));
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
    assert_eq!(
        list.try_insert_at(9, 10),
        Err(ListError::OutOfRange { index: 10, len: 3 })
    );

    // Inserting at len() appends
    assert!(list.insert_at(4, 3));
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_remove_then_insert_restores_sequence() {
    let base = [7, 8, 9, 10, 11, 12];
    for i in 0..base.len() {
        let mut list = list_of(&base);
        let removed = list.remove_at(i).expect("valid index");
        assert_eq!(removed, base[i]);
        assert_eq!(list.len(), base.len() - 1);

        assert!(list.insert_at(removed, i));
        assert_eq!(list.to_vec(), base.to_vec());
    }
}

#[test]
fn test_remove_out_of_range_and_empty() {
    let mut list: LinkedList<i32> = LinkedList::new();
    assert_eq!(list.remove_at(0), None);
    assert_eq!(list.try_remove_at(0), Err(ListError::EmptyList));

    list.append(1);
    assert_eq!(list.remove_at(1), None);
    assert_eq!(
        list.try_remove_at(3),
        Err(ListError::OutOfRange { index: 3, len: 1 })
    );
    assert_eq!(list.remove_at(0), Some(1));
    assert!(list.is_empty());
    assert_eq!(list.head(), None);
}

#[test]
fn test_get_at_bounds() {
    let list = list_of(&[4, 5]);
    assert_eq!(list.get_at(0), Some(&4));
    assert_eq!(list.get_at(1), Some(&5));
    assert_eq!(list.get_at(2), None);
    assert_eq!(list.get_at(usize::MAX), None);
}

#[test]
fn test_clear_resets() {
    let mut list = list_of(&[1, 2, 3]);
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.to_vec(), Vec::<i32>::new());
    assert_eq!(list.to_string(), "null");
    assert_eq!(list.arena().slot_count(), 0);

    list.append(8);
    assert_eq!(list.to_vec(), vec![8]);
}

#[test]
fn test_removed_slots_are_reused() {
    let mut list = list_of(&[1, 2, 3]);
    list.remove_at(1);
    assert_eq!(list.arena().slot_count(), 3);
    assert_eq!(list.arena().live(), 2);

    list.append(4);
    assert_eq!(list.arena().slot_count(), 3);
    assert_eq!(list.to_vec(), vec![1, 3, 4]);
}

#[test]
fn test_reverse_scenario() {
    let mut list = list_of(&[1, 2, 3, 4]);
    list.reverse();
    assert_eq!(list.to_vec(), vec![4, 3, 2, 1]);
    assert_eq!(list.len(), 4);
}

#[test]
fn test_reverse_is_an_involution() {
    for n in 0..12 {
        let values: Vec<i32> = (0..n).collect();
        let original = list_of(&values);
        let mut list = original.clone();

        list.reverse();
        let mut expected = values.clone();
        expected.reverse();
        assert_eq!(list.to_vec(), expected);

        list.reverse();
        assert_eq!(list, original);
    }
}

#[test]
fn test_reverse_rewires_without_allocating() {
    let mut list = list_of(&[1, 2, 3]);
    let ids = list.node_ids();
    let slots = list.arena().slot_count();

    list.reverse();

    let mut reversed_ids = ids.clone();
    reversed_ids.reverse();
    assert_eq!(list.node_ids(), reversed_ids);
    assert_eq!(list.arena().slot_count(), slots);
    assert_eq!(list.head(), ids.last().copied());
}

#[test]
fn test_reverse_free_function_edge_cases() {
    let mut arena: NodeArena<i32> = NodeArena::new();
    assert_eq!(reverse(&mut arena, None), None);

    let only = arena.insert(Node::new(1));
    assert_eq!(reverse(&mut arena, Some(only)), Some(only));
    assert_eq!(arena.next_of(only), None);
}

#[test]
fn test_acyclic_lists_have_no_cycle() {
    for n in 0..16 {
        let values: Vec<i32> = (0..n).collect();
        let list = list_of(&values);
        assert!(!list.has_cycle());
        assert!(!has_cycle(list.arena(), list.head()));
        assert_eq!(cycle_entry(list.arena(), list.head()), None);
    }
}

#[test]
fn test_cycle_scenario() {
    let list = list_of(&[1, 2, 3]);
    assert!(!list.has_cycle());

    // node(3).next = node(2)
    let fixture = list.into_cyclic(1).expect("valid target");
    assert!(fixture.has_cycle());
    assert_eq!(fixture.cycle_entry(), Some(&2));
    assert_eq!(fixture.to_string(), "1 -> 2 -> 3 -> (back to 2)");
}

#[test]
fn test_tail_redirected_to_any_earlier_node_is_detected() {
    for n in 1..12 {
        for target in 0..n {
            let values: Vec<i32> = (0..n as i32).collect();
            let fixture = list_of(&values).into_cyclic(target).unwrap();

            assert!(fixture.has_cycle(), "n={} target={}", n, target);
            assert!(has_cycle_by_visit(fixture.arena(), fixture.head()));
            assert_eq!(fixture.cycle_entry(), Some(&(target as i32)));
            assert_eq!(fixture.len(), n);
        }
    }
}

#[test]
fn test_floyd_agrees_with_visited_set() {
    // Hand-built chains, including a detached cycle behind a long tail
    let mut arena = NodeArena::new();
    let ids: Vec<_> = (0..8).map(|v| arena.insert(Node::new(v))).collect();
    for pair in ids.windows(2) {
        arena.set_next(pair[0], Some(pair[1]));
    }

    assert_eq!(
        has_cycle(&arena, Some(ids[0])),
        has_cycle_by_visit(&arena, Some(ids[0]))
    );

    arena.set_next(ids[7], Some(ids[5]));
    assert!(has_cycle(&arena, Some(ids[0])));
    assert!(has_cycle_by_visit(&arena, Some(ids[0])));
    assert_eq!(cycle_entry(&arena, Some(ids[0])), Some(ids[5]));

    assert!(!has_cycle(&arena, None));
    assert!(!has_cycle_by_visit(&arena, None));
}

#[test]
fn test_repair_restores_original_list() {
    let original = list_of(&[3, 1, 4, 1, 5]);
    for target in 0..original.len() {
        let repaired = original.clone().into_cyclic(target).unwrap().repair();
        assert_eq!(repaired, original);
        assert!(!repaired.has_cycle());
    }
}

#[test]
fn test_into_cyclic_rejection_returns_list() {
    let empty: LinkedList<i32> = LinkedList::new();
    let err = empty.into_cyclic(0).unwrap_err();
    assert_eq!(err.reason, ListError::EmptyList);

    let err = list_of(&[1, 2]).into_cyclic(2).unwrap_err();
    assert_eq!(err.reason, ListError::OutOfRange { index: 2, len: 2 });
    assert_eq!(err.list.to_vec(), vec![1, 2]);
    assert_eq!(
        err.to_string(),
        "Cannot close a cycle: Index 2 out of range for list of length 2"
    );
}

#[test]
fn test_self_loop_on_single_node() {
    let fixture = list_of(&[42]).into_cyclic(0).unwrap();
    assert!(fixture.has_cycle());
    assert_eq!(fixture.cycle_entry(), Some(&42));
    assert_eq!(fixture.to_string(), "42 -> (back to 42)");
}

#[test]
fn test_iterators() {
    let list = list_of(&[1, 2, 3]);
    let doubled: Vec<i32> = list.iter().map(|v| v * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6]);
    assert_eq!(list.iter().len(), 3);

    let mut sum = 0;
    for v in &list {
        sum += v;
    }
    assert_eq!(sum, 6);

    let owned: Vec<i32> = list.into_iter().collect();
    assert_eq!(owned, vec![1, 2, 3]);
}

#[test]
fn test_extend_and_debug() {
    let mut list = list_of(&[1]);
    list.extend([2, 3]);
    assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    assert_eq!(list.len(), 3);
}
