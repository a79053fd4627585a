use std::cmp::Ordering;
use std::marker::PhantomData;

/// Injected comparator, the generic stand-in for the original engine's
/// `compareKeys(a, b) -> {-1, 0, +1}` vtable slot.
///
/// Implementations must define a strict total order: antisymmetric
/// (`compare(a, b)` and `compare(b, a)` are mirror images) and transitive.
/// The engine does not verify this itself; an implementation that violates
/// it will silently corrupt the tree's sort invariant. `Llrb::validate`
/// exercises the current ordering and will surface the corruption as a
/// `ValidationError::SortError`, but only after the fact.
pub trait KeyCompare<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Default comparator, deferring to `K: Ord`.
pub struct OrdComparator<K: ?Sized>(PhantomData<fn(&K)>);

impl<K: ?Sized> OrdComparator<K> {
    pub fn new() -> Self {
        OrdComparator(PhantomData)
    }
}

impl<K: ?Sized> Default for OrdComparator<K> {
    fn default() -> Self {
        OrdComparator::new()
    }
}

impl<K: ?Sized> Clone for OrdComparator<K> {
    fn clone(&self) -> Self {
        OrdComparator::new()
    }
}

impl<K: ?Sized + Ord> KeyCompare<K> for OrdComparator<K> {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}
