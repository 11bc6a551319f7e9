// Chain property test against a Vec model (head at index 0).
//  - push inserts at the front; pop/try_pop take from the front.
//  - delete removes the first equal element and keeps the rest in order.
//  - contains, len, is_empty and to_vec agree with the model after each op.
use proptest::prelude::*;
use universal_hashtable::{Chain, ChainError};

#[derive(Clone, Debug)]
enum Op {
    Push(i8),
    Pop,
    Delete(i8),
    Contains(i8),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-4i8..4).prop_map(Op::Push),
        2 => Just(Op::Pop),
        3 => (-4i8..4).prop_map(Op::Delete),
        2 => (-4i8..4).prop_map(Op::Contains),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_chain_matches_vec_model(ops in proptest::collection::vec(arb_op(), 1..100)) {
        let mut sut: Chain<i8> = Chain::new();
        let mut model: Vec<i8> = Vec::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    sut.push(v);
                    model.insert(0, v);
                }
                Op::Pop => {
                    if model.is_empty() {
                        prop_assert_eq!(sut.try_pop(), Err(ChainError::Empty));
                    } else {
                        let expected = model.remove(0);
                        prop_assert_eq!(sut.pop(), expected);
                    }
                }
                Op::Delete(v) => {
                    let pos = model.iter().position(|&x| x == v);
                    if let Some(i) = pos {
                        model.remove(i);
                    }
                    prop_assert_eq!(sut.delete(&v), pos.is_some());
                }
                Op::Contains(v) => {
                    prop_assert_eq!(sut.contains(&v), model.contains(&v));
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(sut.to_vec(), model.clone());
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }
    }
}
