//! Fixed-capacity insertion-ordered set
//!
//! A face pair contributes at most six index entries, so de-duplicating them
//! never needs a heap-allocated hash set.

/// Set of up to `N` values, kept in first-insertion order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmallSet<T: Copy + PartialEq + Default, const N: usize> {
    items: [T; N],
    len: usize,
}

impl<T: Copy + PartialEq + Default, const N: usize> SmallSet<T, N> {
    pub fn new() -> Self {
        Self {
            items: [T::default(); N],
            len: 0,
        }
    }

    /// Insert a value. Returns false if it was already present or the set is full.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) || self.len == N {
            return false;
        }
        self.items[self.len] = value;
        self.len += 1;
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }
}

impl<T: Copy + PartialEq + Default, const N: usize> Default for SmallSet<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + PartialEq + Default, const N: usize> FromIterator<T> for SmallSet<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_order() {
        let set: SmallSet<u32, 6> = [4, 5, 6, 4, 6, 7].into_iter().collect();
        assert_eq!(set.as_slice(), &[4, 5, 6, 7]);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_full_set_rejects() {
        let mut set: SmallSet<u32, 2> = SmallSet::new();
        assert!(set.insert(1));
        assert!(set.insert(2));
        assert!(!set.insert(3));
        assert!(!set.contains(&3));
    }

    #[test]
    fn test_empty() {
        let set: SmallSet<u32, 4> = SmallSet::default();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
