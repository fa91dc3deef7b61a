use core::any::TypeId;
use core::fmt;

use hashbrown::hash_map::Entry;

use crate::hash::{HashMap, NoOpHashState};

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map keyed by [`TypeId`].
///
/// Used wherever something is computed once per concrete type and then reused,
/// for example resolved paths and generic type information.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use rp_utils::TypeIdMap;
///
/// let mut map = TypeIdMap::new();
/// let first = *map.get_or_insert(TypeId::of::<u8>(), || "u8");
/// let again = *map.get_or_insert(TypeId::of::<u8>(), || "unused");
///
/// assert_eq!(first, "u8");
/// assert_eq!(again, "u8");
/// assert_eq!(map.len(), 1);
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    /// Creates an empty map.
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Returns the value stored for `type_id`, inserting `f()` first if absent.
    ///
    /// `f` runs only when the key is missing.
    #[inline]
    pub fn get_or_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> &mut V {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => entry.insert(f()),
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }

    /// Returns a reference to the value stored for `type_id`.
    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    /// Returns a reference to the value stored for `T`.
    #[inline(always)]
    pub fn get_type<T: ?Sized + 'static>(&self) -> Option<&V> {
        self.get(&TypeId::of::<T>())
    }

    /// Inserts a value, returning the previous one.
    #[inline]
    pub fn insert(&mut self, type_id: TypeId, value: V) -> Option<V> {
        self.0.insert(type_id, value)
    }

    /// Returns `true` if a value is stored for `type_id`.
    #[inline]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    /// Removes every entry, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeIdMap;

    #[test]
    fn get_or_insert_runs_once() {
        let mut map = TypeIdMap::new();
        let mut calls = 0;

        for _ in 0..3 {
            map.get_or_insert(TypeId::of::<i32>(), || {
                calls += 1;
                calls
            });
        }

        assert_eq!(calls, 1);
        assert_eq!(map.get_type::<i32>(), Some(&1));
        assert!(map.get_type::<u32>().is_none());
    }

    #[test]
    fn clear_keeps_nothing() {
        let mut map = TypeIdMap::new();
        map.insert(TypeId::of::<u8>(), 'a');
        map.insert(TypeId::of::<u16>(), 'b');
        assert_eq!(map.len(), 2);
        assert!(map.contains(&TypeId::of::<u16>()));

        map.clear();
        assert!(map.is_empty());
        assert!(!map.contains(&TypeId::of::<u8>()));
    }
}
