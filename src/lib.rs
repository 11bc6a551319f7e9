//! universal-hashtable: a fixed-size integer hash multiset using separate
//! chaining and universal hashing.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small keyed-set structure whose expected cost per operation
//!   is O(1) regardless of key distribution, with no resizing.
//! - Layers:
//!   - Chain<T>: singly-linked bucket list. Nodes live in a per-chain
//!     `SlotMap`; links are generational keys. Push-front, membership,
//!     first-match delete, pop. The arena is created on first push, so
//!     an empty bucket costs no heap allocation.
//!   - HashParams: the universal hash `((a * k + b) mod P) mod m` with
//!     `a`, `b` drawn at random against the fixed prime `P`.
//!   - HashTable<K>: `m` chains, each operation hashes once and touches a
//!     single bucket.
//!
//! Usage
//!
//! ```
//! use universal_hashtable::{HashParams, HashTable};
//!
//! let params = HashParams::initialize(100).unwrap();
//! let mut t: HashTable = HashTable::new(params);
//! t.insert(10);
//! assert!(t.search(10));
//! t.remove(10);
//! assert!(!t.search(10));
//! ```
//!
//! Constraints
//! - Single-threaded; mutation goes through `&mut`.
//! - Keys are primitive integers (`IntKey`); no payload beyond the key.
//! - Duplicates are allowed. `remove` drops one copy, the most recently
//!   inserted one in its bucket.
//! - Bucket count is fixed by the parameters; there is no rehashing.
//!
//! Parameters and tables
//! - Parameters are drawn once and copied into the table at construction,
//!   so a table can never observe a different bucket count than it was
//!   allocated with. Drawing new parameters builds a new generation of
//!   tables; existing ones are unaffected.
//! - A bucket count above `PRIME` is accepted with a `log::warn!` since
//!   collision bounds no longer hold. A bucket count of zero is an error.
//!
//! Failure semantics
//! - `Chain::pop` on an empty chain panics; `Chain::try_pop` returns
//!   `ChainError::Empty`.
//! - Searching for or removing an absent key is not an error.

pub mod chain;
pub mod hash_table;
mod hash_table_proptest;
mod key;
pub mod params;

// Public surface
pub use chain::{Chain, ChainError};
pub use hash_table::HashTable;
pub use key::IntKey;
pub use params::{HashParams, HashParamsBuilder, ParamsError, PRIME};
