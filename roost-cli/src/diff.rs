//! Set partitions over keyed lists.

use std::hash::Hash;

use indexmap::IndexMap;

use serde::Serialize;

/// A three-way partition of two lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diff<T> {
    /// Only in the left list.
    pub left: Vec<T>,
    /// In both lists. Holds the left list's instance.
    pub middle: Vec<T>,
    /// Only in the right list.
    pub right: Vec<T>,
}

/// Partitions `a` and `b` by the identity `key` returns.
///
/// Each identity appears in exactly one part. When a list repeats an
/// identity, the later element replaces the earlier one but keeps its
/// position.
pub fn diff_by<T, K, F>(a: &[T], b: &[T], key: F) -> Diff<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut in_a = IndexMap::with_capacity(a.len());
    for elem in a {
        in_a.insert(key(elem), elem);
    }

    let mut middle = IndexMap::new();
    let mut right = IndexMap::new();
    for elem in b {
        let id = key(elem);
        match in_a.get(&id) {
            Some(left_elem) => middle.insert(id, *left_elem),
            None => right.insert(id, elem),
        };
    }

    let mut left = IndexMap::new();
    for elem in a {
        let id = key(elem);
        if !middle.contains_key(&id) {
            left.insert(id, elem);
        }
    }

    Diff {
        left: left.into_values().cloned().collect(),
        middle: middle.into_values().cloned().collect(),
        right: right.into_values().cloned().collect(),
    }
}

/// The elements of `a` whose identity also appears in `b`.
pub fn intersect_by<T, K, F>(a: &[T], b: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    diff_by(a, b, key).middle
}
