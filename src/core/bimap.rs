// Bijective map with swap-on-conflict assignment

use std::collections::HashMap;
use std::hash::Hash;

/// A one-to-one mapping kept in two synchronized hash maps.
///
/// Every left value maps to at most one right value and vice versa, so both
/// directions can be looked up in O(1). Assignments never create a duplicate:
/// assigning a right value that is already taken swaps the two entries, and
/// no assignment ever leaves a left value without its right value.
#[derive(Debug, Clone)]
pub struct BiMap<L, R> {
    forward: HashMap<L, R>,
    reverse: HashMap<R, L>,
}

impl<L, R> BiMap<L, R>
where
    L: Copy + Eq + Hash,
    R: Copy + Eq + Hash,
{
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            forward: HashMap::new(),
            reverse: HashMap::new(),
        }
    }

    /// Build a map from pairs, failing on the first left or right duplicate
    pub fn from_pairs<I>(pairs: I) -> Result<Self, (L, R)>
    where
        I: IntoIterator<Item = (L, R)>,
    {
        let mut map = Self::new();
        for (left, right) in pairs {
            if map.forward.contains_key(&left) || map.reverse.contains_key(&right) {
                return Err((left, right));
            }
            map.forward.insert(left, right);
            map.reverse.insert(right, left);
        }
        Ok(map)
    }

    /// Right value assigned to `left`
    pub fn get(&self, left: L) -> Option<R> {
        self.forward.get(&left).copied()
    }

    /// Left value that owns `right`
    pub fn owner(&self, right: R) -> Option<L> {
        self.reverse.get(&right).copied()
    }

    /// Assign `right` to `left`.
    ///
    /// If another left value already owns `right`, the two trade values.
    /// Returns the left value that was swapped, if any. When `left` has no
    /// value to give back and `right` is taken, nothing changes and the
    /// current owner is returned as the error.
    pub fn assign(&mut self, left: L, right: R) -> Result<Option<L>, L> {
        let previous = self.forward.get(&left).copied();
        if previous == Some(right) {
            return Ok(None);
        }

        let displaced = self.reverse.get(&right).copied();

        match (previous, displaced) {
            (None, Some(other)) => return Err(other),
            (Some(old), Some(other)) => {
                self.forward.insert(other, old);
                self.reverse.insert(old, other);
            }
            (Some(old), None) => {
                self.reverse.remove(&old);
            }
            (None, None) => {}
        }

        self.forward.insert(left, right);
        self.reverse.insert(right, left);

        debug_assert_eq!(self.forward.len(), self.reverse.len());
        Ok(displaced)
    }

    /// Iterate over all (left, right) pairs
    pub fn iter(&self) -> impl Iterator<Item = (L, R)> + '_ {
        self.forward.iter().map(|(l, r)| (*l, *r))
    }

    /// Number of assigned pairs
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Check whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

impl<L, R> Default for BiMap<L, R>
where
    L: Copy + Eq + Hash,
    R: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
