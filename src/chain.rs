//! Chain: the bucket representation, a singly-linked list whose nodes live
//! in a per-chain slot arena.
//!
//! Links are generational `DefaultKey`s into the arena rather than boxed
//! pointers. Unlinking a node is a key rewrite plus `SlotMap::remove`, and
//! dropping a chain frees the arena in one pass with no recursive drop.
//!
//! The arena is created by the first `push`. A chain that has never held an
//! entry owns no heap memory, so a table's empty buckets cost nothing
//! beyond the bucket array itself.

use core::fmt;
use slotmap::{DefaultKey, SlotMap};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("chain is empty")]
    Empty,
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<DefaultKey>,
}

/// Ordered singly-linked sequence, head first. `push` prepends, so values
/// come back in LIFO order. Duplicates are allowed; `contains` and `delete`
/// act on the first match from the head.
#[derive(Clone)]
pub struct Chain<T> {
    head: Option<DefaultKey>,
    nodes: Option<SlotMap<DefaultKey, Node<T>>>,
}

impl<T> Chain<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            nodes: None,
        }
    }

    /// True once the chain has allocated its node arena. `clear` keeps the
    /// arena for reuse.
    pub fn is_allocated(&self) -> bool {
        self.nodes.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.nodes.as_ref().map_or(0, SlotMap::len)
    }

    /// Prepend `value` as the new head. O(1).
    pub fn push(&mut self, value: T) {
        let nodes = self.nodes.get_or_insert_with(SlotMap::with_key);
        let k = nodes.insert(Node {
            value,
            next: self.head,
        });
        self.head = Some(k);
    }

    /// Remove and return the head value.
    ///
    /// # Panics
    /// If the chain is empty. Use [`Chain::try_pop`] when emptiness is an
    /// expected condition.
    pub fn pop(&mut self) -> T {
        match self.try_pop() {
            Ok(v) => v,
            Err(e) => panic!("Chain::pop: {e}"),
        }
    }

    pub fn try_pop(&mut self) -> Result<T, ChainError> {
        let head = self.head.ok_or(ChainError::Empty)?;
        let node = self
            .nodes
            .as_mut()
            .and_then(|n| n.remove(head))
            .expect("chain head must point at a live node");
        self.head = node.next;
        Ok(node.value)
    }

    pub fn peek(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Drop every entry, leaving an empty chain that can be reused.
    pub fn clear(&mut self) {
        if let Some(n) = self.nodes.as_mut() {
            n.clear();
        }
        self.head = None;
    }

    /// Consume the chain and free all of its entries.
    pub fn release(self) {}

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: self.nodes.as_ref(),
            cur: self.head,
            remaining: self.len(),
        }
    }

    /// Values head to tail.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> Chain<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Unlink the first entry equal to `value`. Order of the remaining
    /// entries is unchanged. Returns `false` (and does nothing) if absent.
    pub fn delete(&mut self, value: &T) -> bool {
        let Some(nodes) = self.nodes.as_mut() else {
            return false;
        };
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.head;
        while let Some(k) = cur {
            let node = &nodes[k];
            if node.value == *value {
                let next = node.next;
                match prev {
                    None => self.head = next,
                    Some(p) => nodes[p].next = next,
                }
                nodes.remove(k);
                return true;
            }
            prev = cur;
            cur = node.next;
        }
        false
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a chain by pushing each item in turn, so the last item ends up
/// at the head.
impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut c = Chain::new();
        for v in iter {
            c.push(v);
        }
        c
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

/// Iterator over chain values, head to tail.
pub struct Iter<'a, T> {
    nodes: Option<&'a SlotMap<DefaultKey, Node<T>>>,
    cur: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let k = self.cur?;
        let node = &self.nodes?[k];
        self.cur = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
