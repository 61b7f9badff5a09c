use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Index;

/// Ordered list backing every table and tab set in the editor.
///
/// Element identity is its position. Every structural change (insert, remove, move)
/// bumps `revision`, which views use to tell "same index, same element" apart from
/// "same index, different element".
#[derive(Debug, Clone)]
pub struct OrderedCollection<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }
}

impl<T> OrderedCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Insert at `index`, clamped to the end. Returns the position actually used.
    pub fn insert(&mut self, index: usize, item: T) -> usize {
        let at = index.min(self.items.len());
        self.items.insert(at, item);
        self.revision += 1;
        at
    }

    pub fn push(&mut self, item: T) -> usize {
        self.insert(self.items.len(), item)
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        self.revision += 1;
        Some(self.items.remove(index))
    }

    /// Swap the element at `from` with its neighbour at `to`.
    /// Both indices must be in range; otherwise nothing changes.
    pub fn swap(&mut self, from: usize, to: usize) -> bool {
        if from >= self.items.len() || to >= self.items.len() || from == to {
            return false;
        }
        self.items.swap(from, to);
        self.revision += 1;
        true
    }
}

// Equality is by content; two collections with different edit histories compare equal.
impl<T: PartialEq> PartialEq for OrderedCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T> Index<usize> for OrderedCollection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> From<Vec<T>> for OrderedCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items, revision: 0 }
    }
}

impl<T> FromIterator<T> for OrderedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// Serialized as a plain sequence; the revision is view bookkeeping, not document data.
impl<T: Serialize> Serialize for OrderedCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedCollection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::OrderedCollection;

    #[test]
    fn insert_clamps_to_end_and_bumps_revision() {
        let mut c: OrderedCollection<i32> = vec![1, 2].into();
        assert_eq!(c.insert(10, 3), 2);
        assert_eq!(c.as_slice(), &[1, 2, 3]);
        assert_eq!(c.revision(), 1);
    }

    #[test]
    fn out_of_range_ops_change_nothing() {
        let mut c: OrderedCollection<i32> = vec![1].into();
        assert!(c.remove(1).is_none());
        assert!(!c.swap(0, 1));
        assert!(!c.swap(0, 0));
        assert_eq!(c.revision(), 0);
    }

    #[test]
    fn swap_twice_restores_order() {
        let mut c: OrderedCollection<&str> = vec!["a", "b", "c"].into();
        assert!(c.swap(0, 1));
        assert!(c.swap(1, 0));
        assert_eq!(c.as_slice(), &["a", "b", "c"]);
        assert_eq!(c.revision(), 2);
    }
}
