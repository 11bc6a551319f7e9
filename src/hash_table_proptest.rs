#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can reach
// bucket-level accessors alongside the public operations.

use crate::hash_table::HashTable;
use crate::params::HashParams;
use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(i64),
    Remove(i64),
    Search(i64),
    Count(i64),
    Iterate,
    Clear,
}

// Keys come from a small pool so duplicates and removals of present keys are
// common; the pool mixes negatives and values near i64 extremes.
fn arb_key() -> impl Strategy<Value = i64> {
    prop_oneof![
        8 => -8i64..8,
        1 => prop_oneof![Just(i64::MIN), Just(i64::MAX), Just(15_733), Just(-15_733)],
    ]
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        4 => arb_key().prop_map(Op::Insert),
        3 => arb_key().prop_map(Op::Remove),
        3 => arb_key().prop_map(Op::Search),
        1 => arb_key().prop_map(Op::Count),
        1 => Just(Op::Iterate),
        1 => Just(Op::Clear),
    ];
    proptest::collection::vec(op, 1..80)
}

fn run(sut: &mut HashTable, ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut model: BTreeMap<i64, usize> = BTreeMap::new();
    for op in ops {
        match op {
            Op::Insert(k) => {
                sut.insert(k);
                *model.entry(k).or_default() += 1;
            }
            Op::Remove(k) => {
                let expected = match model.get_mut(&k) {
                    Some(n) => {
                        *n -= 1;
                        if *n == 0 {
                            model.remove(&k);
                        }
                        true
                    }
                    None => false,
                };
                prop_assert_eq!(sut.remove(k), expected, "remove({}) parity", k);
            }
            Op::Search(k) => {
                prop_assert_eq!(sut.search(k), model.contains_key(&k));
            }
            Op::Count(k) => {
                prop_assert_eq!(sut.count(k), model.get(&k).copied().unwrap_or(0));
            }
            Op::Iterate => {
                let mut seen: BTreeMap<i64, usize> = BTreeMap::new();
                for &k in sut.iter() {
                    *seen.entry(k).or_default() += 1;
                }
                prop_assert_eq!(&seen, &model);
            }
            Op::Clear => {
                sut.clear();
                model.clear();
            }
        }

        // Post-conditions after each op
        // 1) Size parity
        let model_len: usize = model.values().sum();
        prop_assert_eq!(sut.len(), model_len);
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        // 2) Bucket lengths account for every entry
        prop_assert_eq!(sut.chain_lengths().sum::<usize>(), model_len);
        // 3) Every live key sits in the bucket its hash selects
        for &k in model.keys() {
            let b = sut.params().hash(k);
            prop_assert!(sut.bucket(b).is_some_and(|c| c.contains(&k)));
        }
    }
    Ok(())
}

// Property: State-machine equivalence against a BTreeMap multiset.
// - insert always adds one entry; remove drops one copy iff present.
// - search/count agree with the model; iteration yields the same multiset.
// - len and per-bucket lengths match the model after every op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(buckets in 1usize..=32, seed in any::<u64>(), ops in arb_ops()) {
        let params = HashParams::builder(buckets).seed(seed).build().unwrap();
        let mut sut: HashTable = HashTable::new(params);
        run(&mut sut, ops)?;
    }
}

// Property: Same invariants when every key collides into one chain.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_single_bucket(ops in arb_ops()) {
        let mut sut: HashTable = HashTable::new(HashParams::initialize(1).unwrap());
        run(&mut sut, ops)?;
        prop_assert_eq!(sut.max_chain_len(), sut.len());
    }
}

// Property: Hashing is deterministic and in range for any key and parameters.
proptest! {
    #[test]
    fn prop_hash_in_range(
        buckets in 1usize..=20_000,
        multiplier in 1u64..crate::params::PRIME,
        increment in 0u64..crate::params::PRIME,
        key in any::<i64>(),
    ) {
        let p = HashParams::builder(buckets).coefficients(multiplier, increment).build().unwrap();
        let h = p.hash(key);
        prop_assert!(h < buckets);
        prop_assert_eq!(h, p.hash(key));
    }
}
