//! Finite sets with Cartesian algebra.
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::slice;

use crate::error::Error;

/// An immutable finite set.
///
/// Elements are deduplicated at construction and never change afterwards.
/// The order in which distinct elements are first seen becomes the canonical
/// iteration order of the instance; every later call to [`FiniteSet::iter`]
/// replays that same order, which group element ordering and symbol-table
/// printing rely on.
///
/// Equality and hashing are structural: two sets with the same elements are
/// equal and hash alike no matter how they were built. Sets may contain sets,
/// which subgroup enumeration and coset construction both use.
#[derive(Clone)]
pub struct FiniteSet<T> {
    items: Vec<T>,
    index: HashSet<T>,
}

impl<T> FiniteSet<T>
where
    T: Clone + Eq + Hash,
{
    /// Create a set from any iterable, keeping the first occurrence of each
    /// distinct element.
    pub fn new<I>(items: I) -> FiniteSet<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = FiniteSet {
            items: Vec::new(),
            index: HashSet::new(),
        };
        for item in items {
            set.insert(item);
        }
        set
    }

    fn insert(&mut self, item: T) {
        if self.index.insert(item.clone()) {
            self.items.push(item);
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the elements in canonical order. Restartable.
    pub fn iter(&self) -> slice::Iter<T> {
        self.items.iter()
    }

    /// Cartesian product.
    ///
    /// Pairs come out in row-major canonical order.
    pub fn product<U>(&self, other: &FiniteSet<U>) -> FiniteSet<(T, U)>
    where
        U: Clone + Eq + Hash,
    {
        FiniteSet::new(
            self.items
                .iter()
                .flat_map(|x| other.items.iter().map(move |y| (x.clone(), y.clone()))),
        )
    }

    /// The set of ordered pairs over this set, `self.product(self)`.
    pub fn square(&self) -> FiniteSet<(T, T)> {
        self.product(self)
    }

    /// Repeated Cartesian product, as a set of `exponent`-long tuples.
    ///
    /// Fails for exponents below one.
    pub fn power(&self, exponent: u32) -> Result<FiniteSet<Vec<T>>, Error> {
        if exponent < 1 {
            return Err(Error::SetExponent);
        }
        let mut tuples: Vec<Vec<T>> = self.items.iter().map(|x| vec![x.clone()]).collect();
        for _ in 1..exponent {
            tuples = tuples
                .iter()
                .flat_map(|prefix| {
                    self.items.iter().map(move |x| {
                        let mut next = prefix.clone();
                        next.push(x.clone());
                        next
                    })
                })
                .collect();
        }
        Ok(FiniteSet::new(tuples))
    }

    pub fn union(&self, other: &FiniteSet<T>) -> FiniteSet<T> {
        FiniteSet::new(self.items.iter().chain(other.items.iter()).cloned())
    }

    pub fn intersection(&self, other: &FiniteSet<T>) -> FiniteSet<T> {
        FiniteSet::new(self.items.iter().filter(|&x| other.contains(x)).cloned())
    }

    pub fn difference(&self, other: &FiniteSet<T>) -> FiniteSet<T> {
        FiniteSet::new(self.items.iter().filter(|&x| !other.contains(x)).cloned())
    }

    pub fn symmetric_difference(&self, other: &FiniteSet<T>) -> FiniteSet<T> {
        FiniteSet::new(
            self.items
                .iter()
                .filter(|&x| !other.contains(x))
                .chain(other.items.iter().filter(|&x| !self.contains(x)))
                .cloned(),
        )
    }
}

impl<T> FromIterator<T> for FiniteSet<T>
where
    T: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> FiniteSet<T> {
        FiniteSet::new(items)
    }
}

impl<T> PartialEq for FiniteSet<T>
where
    T: Eq + Hash,
{
    fn eq(&self, other: &FiniteSet<T>) -> bool {
        self.items.len() == other.items.len() && self.items.iter().all(|x| other.index.contains(x))
    }
}

impl<T> Eq for FiniteSet<T> where T: Eq + Hash {}

/// Order-independent hash, consistent with the structural equality.
impl<T> Hash for FiniteSet<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut combined: u64 = 0;
        for item in &self.items {
            let mut hasher = DefaultHasher::new();
            item.hash(&mut hasher);
            combined = combined.wrapping_add(hasher.finish());
        }
        state.write_usize(self.items.len());
        state.write_u64(combined);
    }
}

impl<T> fmt::Debug for FiniteSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(&self.items).finish()
    }
}

impl<T> fmt::Display for FiniteSet<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;
        for (position, item) in self.items.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::collection;
    use proptest::prelude::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn dedup_and_equality() {
        assert_eq!(FiniteSet::new(0..3), FiniteSet::new(vec![0, 1, 2, 1]));
        assert_eq!(FiniteSet::new(vec![0, 1, 2, 1]).len(), 3);
        assert_eq!(FiniteSet::new(0..10), FiniteSet::new((0..10).rev()));
    }

    #[test]
    fn canonical_order_is_first_occurrence() {
        let set = FiniteSet::new(vec![3, 1, 3, 2, 1]);
        let order: Vec<u32> = set.iter().cloned().collect();
        assert_eq!(order, vec![3, 1, 2]);
        // a second pass sees the same order
        let again: Vec<u32> = set.iter().cloned().collect();
        assert_eq!(order, again);
    }

    #[test]
    fn products() {
        let set = FiniteSet::new(0..3u32);
        let product = set.product(&set);
        assert_eq!(product.len(), 9);
        assert!(product.contains(&(2, 1)));
        assert_eq!(product, set.square());

        let empty = FiniteSet::new(Vec::<u32>::new());
        assert_eq!(set.product(&empty).len(), 0);
    }

    #[test]
    fn powers() {
        let set = FiniteSet::new(0..4u32);
        assert_eq!(set.power(0), Err(Error::SetExponent));
        let first = set.power(1).unwrap();
        assert_eq!(first.len(), set.len());
        assert!(set.iter().all(|x| first.contains(&vec![*x])));
        assert_eq!(set.power(2).unwrap().len(), 16);
        assert!(set.power(2).unwrap().contains(&vec![3, 0]));
    }

    #[test]
    fn set_algebra() {
        let a = FiniteSet::new(0..4u32);
        let b = FiniteSet::new(2..6u32);
        assert_eq!(a.union(&b), FiniteSet::new(0..6));
        assert_eq!(a.intersection(&b), FiniteSet::new(2..4));
        assert_eq!(a.difference(&b), FiniteSet::new(0..2));
        assert_eq!(
            a.symmetric_difference(&b),
            FiniteSet::new(vec![0, 1, 4, 5])
        );
    }

    #[test]
    fn nested_sets() {
        let inner_a = FiniteSet::new(vec![1, 2]);
        let inner_b = FiniteSet::new(vec![3]);
        let nested = FiniteSet::new(vec![inner_a, inner_b]);
        assert_eq!(nested.len(), 2);
        assert!(nested.contains(&FiniteSet::new(vec![2, 1])));
        assert!(!nested.contains(&FiniteSet::new(vec![1, 3])));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", FiniteSet::new(vec![1, 2, 3])), "{1, 2, 3}");
        assert_eq!(format!("{}", FiniteSet::new(Vec::<u32>::new())), "{}");
    }

    proptest! {
        #[test]
        fn dedup_law(values in collection::vec(0..50u32, 0..60)) {
            let set = FiniteSet::new(values.iter().cloned());
            let reference: HashSet<u32> = values.iter().cloned().collect();
            prop_assert_eq!(set.len(), reference.len());
            prop_assert!(values.iter().all(|v| set.contains(v)));
        }

        #[test]
        fn product_cardinality(
            a in collection::hash_set(0..100u32, 0..12),
            b in collection::hash_set(0..100u32, 0..12),
        ) {
            let left = FiniteSet::new(a.iter().cloned());
            let right = FiniteSet::new(b.iter().cloned());
            prop_assert_eq!(left.product(&right).len(), left.len() * right.len());
        }

        #[test]
        fn construction_order_is_irrelevant(mut values in collection::vec(0..50u32, 0..40)) {
            let forward = FiniteSet::new(values.iter().cloned());
            values.reverse();
            let backward = FiniteSet::new(values.iter().cloned());
            prop_assert_eq!(hash_of(&forward), hash_of(&backward));
            prop_assert_eq!(forward, backward);
        }
    }
}
