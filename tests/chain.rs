use universal_hashtable::{Chain, ChainError};

// Pushed 5, 3, 9 so the stored order is [9, 3, 5].
fn five_three_nine() -> Chain<i32> {
    let mut c = Chain::new();
    for v in [5, 3, 9] {
        c.push(v);
    }
    c
}

#[test]
fn delete_preserves_order_of_remaining_entries() {
    let cases = [(9, vec![3, 5]), (3, vec![9, 5]), (5, vec![9, 3]), (4, vec![9, 3, 5])];
    for (target, expected) in cases {
        let mut c = five_three_nine();
        c.delete(&target);
        assert_eq!(c.to_vec(), expected, "delete({target})");
    }
}

#[test]
fn delete_sole_entry_empties_chain() {
    let mut c = Chain::new();
    c.push(1);
    c.delete(&1);
    assert!(c.is_empty());
    assert_eq!(c.to_string(), "[]");
}

#[test]
fn drain_by_pop_then_try_pop_errors() {
    let mut c = five_three_nine();
    let mut out = Vec::new();
    while !c.is_empty() {
        out.push(c.pop());
    }
    assert_eq!(out, vec![9, 3, 5]);
    assert_eq!(c.try_pop(), Err(ChainError::Empty));
    assert_eq!(ChainError::Empty.to_string(), "chain is empty");
}

#[test]
#[should_panic]
fn pop_empty_fails_fast() {
    let mut c: Chain<i32> = Chain::default();
    c.pop();
}

#[test]
fn release_consumes_chain() {
    let c: Chain<i64> = (0..10_000).collect();
    assert_eq!(c.len(), 10_000);
    c.release();
}
