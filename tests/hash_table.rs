use universal_hashtable::{HashParams, HashTable, ParamsError, PRIME};

fn table(buckets: usize) -> HashTable {
    HashTable::new(HashParams::initialize(buckets).expect("valid bucket count"))
}

#[test]
fn demonstration_scenario() {
    let mut h = table(100);
    h.insert(1);
    h.insert(10);
    h.insert(20);

    for i in 0..=20 {
        let expected = i == 1 || i == 10 || i == 20;
        assert_eq!(h.search(i), expected, "search({i})");
    }

    h.remove(10);
    assert!(!h.search(10));
    assert!(h.search(1));
    assert!(h.search(20));
    h.release();
}

#[test]
fn inserted_keys_round_trip() {
    let mut h = table(31);
    let keys = [i64::MIN, -1_000_000, -1, 0, 1, 15_732, 15_733, i64::MAX];
    for k in keys {
        h.insert(k);
    }
    for k in keys {
        assert!(h.search(k), "lost {k}");
    }
    assert!(!h.search(2));
    assert_eq!(h.len(), keys.len());
}

#[test]
fn remove_once_after_double_insert_keeps_one_copy() {
    let mut h = table(10);
    h.insert(42);
    h.insert(42);
    h.remove(42);
    assert!(h.search(42));
    h.remove(42);
    assert!(!h.search(42));
}

#[test]
fn fully_removed_keys_are_absent() {
    let mut h = table(5);
    h.extend(0..50);
    for k in (0..50).step_by(2) {
        assert!(h.remove(k));
    }
    for k in 0..50 {
        assert_eq!(h.search(k), k % 2 == 1);
    }
    assert_eq!(h.len(), 25);
}

#[test]
fn zero_buckets_is_rejected() {
    assert!(matches!(
        HashParams::initialize(0),
        Err(ParamsError::ZeroBuckets)
    ));
}

#[test]
fn oversized_table_still_works() {
    let params = HashParams::initialize(PRIME as usize + 10).unwrap();
    assert!(params.exceeds_prime());
    let mut h: HashTable<u32> = HashTable::new(params);
    h.extend([1, 2, 3]);
    assert!(h.search(2));
    assert!(h.remove(2));
    assert!(!h.search(2));
}

#[test]
fn reinitializing_does_not_affect_existing_table() {
    let first = HashParams::builder(8).seed(1).build().unwrap();
    let mut h: HashTable = HashTable::new(first);
    h.extend([3, 5, 7]);

    let second = HashParams::builder(64).seed(2).build().unwrap();
    let other: HashTable = HashTable::new(second);

    assert_eq!(h.params(), &first);
    assert_eq!(h.bucket_count(), 8);
    assert_eq!(other.bucket_count(), 64);
    assert!(h.search(3) && h.search(5) && h.search(7));
}

#[test]
fn chains_stay_short_for_sequential_keys() {
    // Keys below PRIME map to distinct residues mod PRIME, so no bucket can
    // receive more than ceil(PRIME / 1000) = 16 of them.
    let mut h = table(1000);
    h.extend(0..1000);
    assert!(h.max_chain_len() <= 16, "max chain {}", h.max_chain_len());
}
