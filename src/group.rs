//! Finite groups with construction-time axiom checking.
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use itertools::{iproduct, Itertools};

use crate::element::Element;
use crate::error::Error;
use crate::func::FiniteFunction;
use crate::hom::GroupHomomorphism;
use crate::set::FiniteSet;

/// Construction options for [`Group`].
pub struct GroupOptions<T> {
    /// Iteration order for the elements; must be a permutation of them.
    pub display_order: Option<Vec<T>>,
    /// Skip the O(n³) associativity sweep.
    ///
    /// This is a trust boundary: a construction that sets this flag vouches
    /// for associativity itself, and a misplaced vouch admits a structurally
    /// invalid group. Reserved for archetypes whose operation is associative
    /// by definition and for subgroups of already-verified groups.
    pub trust_associativity: bool,
}

impl<T> Default for GroupOptions<T> {
    fn default() -> GroupOptions<T> {
        GroupOptions {
            display_order: None,
            trust_associativity: false,
        }
    }
}

struct GroupCore<T> {
    elements: FiniteSet<T>,
    bin_op: FiniteFunction<(T, T), T>,
    identity: T,
    abelian: bool,
    // resolved iteration order: the display order if one was given, else
    // identity first and the rest in canonical set order
    ordering: Vec<T>,
}

/// A finite group: a set of elements closed under an associative binary
/// operation, with an identity and inverses.
///
/// All four axioms are verified when the group is built; a `Group` that
/// exists is known to be valid and nothing is re-checked afterwards.
/// Construction is atomic: on any failure an error is returned and no
/// partially-built group can be observed.
///
/// `Group` is a cheap handle (a reference-counted immutable core), so
/// elements can carry their owning group around by value. The model is
/// single-threaded throughout; nothing here is `Send`.
pub struct Group<T> {
    core: Rc<GroupCore<T>>,
}

impl<T> Group<T>
where
    T: Clone + Eq + Hash + 'static,
{
    /// Build a group from its elements and binary operation, verifying the
    /// group axioms.
    pub fn new(elements: FiniteSet<T>, bin_op: FiniteFunction<(T, T), T>) -> Result<Group<T>, Error> {
        Self::with_options(elements, bin_op, GroupOptions::default())
    }

    /// Build a group with explicit construction options.
    pub fn with_options(
        elements: FiniteSet<T>,
        bin_op: FiniteFunction<(T, T), T>,
        options: GroupOptions<T>,
    ) -> Result<Group<T>, Error> {
        if *bin_op.codomain() != elements {
            return Err(Error::OperationCodomain);
        }
        let order = elements.len();
        if bin_op.domain().len() != order * order
            || iproduct!(elements.iter(), elements.iter())
                .any(|(a, b)| !bin_op.domain().contains(&(a.clone(), b.clone())))
        {
            return Err(Error::OperationDomain);
        }
        // products close over the elements from here on: every output of the
        // operation was checked into its codomain when the function was built
        let op = |a: &T, b: &T| bin_op.apply(&(a.clone(), b.clone()));

        let mut identities = elements
            .iter()
            .filter(|&e| elements.iter().all(|a| op(e, a) == *a && op(a, e) == *a));
        let identity = match identities.next() {
            Some(e) => e.clone(),
            None => return Err(Error::NoIdentity),
        };
        assert!(
            identities.next().is_none(),
            "two distinct identity elements survived the closure checks"
        );

        if !options.trust_associativity {
            for (a, b, c) in iproduct!(elements.iter(), elements.iter(), elements.iter()) {
                if op(&op(a, b), c) != op(a, &op(b, c)) {
                    return Err(Error::NotAssociative);
                }
            }
        }

        if elements
            .iter()
            .any(|a| !elements.iter().any(|b| op(a, b) == identity))
        {
            return Err(Error::MissingInverse);
        }

        let abelian = elements
            .iter()
            .tuple_combinations()
            .all(|(a, b)| op(a, b) == op(b, a));

        let ordering = match options.display_order {
            Some(ordered) => {
                if ordered.len() != order
                    || FiniteSet::new(ordered.iter().cloned()) != elements
                {
                    return Err(Error::DisplayOrderMismatch);
                }
                ordered
            }
            None => {
                let mut ordering = Vec::with_capacity(order);
                ordering.push(identity.clone());
                ordering.extend(elements.iter().filter(|v| **v != identity).cloned());
                ordering
            }
        };

        Ok(Group {
            core: Rc::new(GroupCore {
                elements,
                bin_op,
                identity,
                abelian,
                ordering,
            }),
        })
    }

    /// The element set, in canonical order.
    pub fn elements(&self) -> &FiniteSet<T> {
        &self.core.elements
    }

    /// The binary operation on element pairs.
    pub fn bin_op(&self) -> &FiniteFunction<(T, T), T> {
        &self.core.bin_op
    }

    /// Wrap a member value as an [`Element`] of this group.
    pub fn element(&self, value: T) -> Result<Element<T>, Error> {
        if !self.core.elements.contains(&value) {
            return Err(Error::NotInGroup);
        }
        Ok(self.wrap(value))
    }

    pub fn identity(&self) -> Element<T> {
        self.wrap(self.core.identity.clone())
    }

    /// The number of elements (the order of the group).
    pub fn order(&self) -> usize {
        self.core.elements.len()
    }

    pub fn contains(&self, element: &Element<T>) -> bool {
        self.contains_value(element.value())
    }

    pub fn contains_value(&self, value: &T) -> bool {
        self.core.elements.contains(value)
    }

    pub fn is_abelian(&self) -> bool {
        self.core.abelian
    }

    /// Iterate over the elements in display order, identity first by
    /// default. Deterministic and restartable.
    pub fn iter(&self) -> Elements<'_, T> {
        Elements {
            group: self,
            position: 0,
        }
    }

    /// The inverse of a member element, found by linear scan.
    pub fn invert(&self, element: &Element<T>) -> Result<Element<T>, Error> {
        if !self.contains(element) {
            return Err(Error::NotInGroup);
        }
        Ok(self.wrap(self.invert_raw(element.value())))
    }

    pub(crate) fn wrap(&self, value: T) -> Element<T> {
        Element::raw(value, self.clone())
    }

    pub(crate) fn apply_raw(&self, a: &T, b: &T) -> T {
        self.core.bin_op.apply(&(a.clone(), b.clone()))
    }

    pub(crate) fn invert_raw(&self, value: &T) -> T {
        for candidate in &self.core.ordering {
            if self.apply_raw(value, candidate) == self.core.identity {
                return candidate.clone();
            }
        }
        panic!("a group element has no inverse despite passing construction");
    }

    /// Whether this group is a proper subgroup of `other`: a strict subset
    /// of its elements on which both operations agree.
    ///
    /// The operation agreement sweep is required because a subset sharing
    /// element labels need not share operation behavior.
    pub fn is_subgroup_of(&self, other: &Group<T>) -> bool {
        self.order() < other.order()
            && self.core.elements.iter().all(|v| other.contains_value(v))
            && iproduct!(self.core.elements.iter(), self.core.elements.iter())
                .all(|(a, b)| self.apply_raw(a, b) == other.apply_raw(a, b))
    }

    /// Whether this group is a normal subgroup of (or equal to) `other`.
    pub fn is_normal_subgroup_of(&self, other: &Group<T>) -> bool {
        (self == other || self.is_subgroup_of(other))
            && other.iter().all(|g| {
                let left = FiniteSet::new(
                    self.core
                        .elements
                        .iter()
                        .map(|h| other.apply_raw(g.value(), h)),
                );
                let right = FiniteSet::new(
                    self.core
                        .elements
                        .iter()
                        .map(|h| other.apply_raw(h, g.value())),
                );
                left == right
            })
    }

    // Smallest subset of the elements containing `seed` and closed under the
    // operation, by iterated recomputation of all pairwise products.
    fn closure_raw(&self, seed: &FiniteSet<T>) -> FiniteSet<T> {
        let mut current = seed.clone();
        loop {
            let mut items: Vec<T> = current.iter().cloned().collect();
            for a in current.iter() {
                for b in current.iter() {
                    items.push(self.apply_raw(a, b));
                }
            }
            let next = FiniteSet::new(items);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    /// The smallest subgroup containing the seed values.
    ///
    /// Fails on an empty seed or on values outside the group.
    pub fn generate(&self, seed: &[T]) -> Result<Group<T>, Error> {
        if seed.is_empty() {
            return Err(Error::EmptyGenerators);
        }
        if seed.iter().any(|value| !self.contains_value(value)) {
            return Err(Error::NotInGroup);
        }
        let members = self.closure_raw(&FiniteSet::new(seed.iter().cloned()));
        let parent = self.clone();
        let bin_op = FiniteFunction::new(members.square(), members.clone(), move |pair: &(T, T)| {
            parent.apply_raw(&pair.0, &pair.1)
        })?;
        Group::with_options(
            members,
            bin_op,
            GroupOptions {
                display_order: None,
                trust_associativity: true,
            },
        )
    }

    /// A generating set of size at most log₂|G| + 1.
    ///
    /// Greedy: repeatedly adjoin the first element (in canonical order) not
    /// yet generated. The identity is dropped for nontrivial groups.
    pub fn generators(&self) -> Vec<Element<T>> {
        let mut values = vec![self.core.identity.clone()];
        let mut generated = self.closure_raw(&FiniteSet::new(values.iter().cloned()));
        while generated.len() < self.order() {
            let next = self
                .core
                .elements
                .iter()
                .find(|&v| !generated.contains(v))
                .expect("a proper subgroup always leaves elements to adjoin")
                .clone();
            values.push(next);
            generated = self.closure_raw(&FiniteSet::new(values.iter().cloned()));
        }
        if self.order() != 1 {
            values.remove(0);
        }
        values.into_iter().map(|v| self.wrap(v)).collect()
    }

    /// Whether some element's order equals the group order.
    pub fn is_cyclic(&self) -> bool {
        self.iter().any(|g| g.order() == self.order() as u64)
    }

    /// Every subgroup, found by breadth-first closure search.
    ///
    /// Each known subgroup is extended by one outside element and
    /// regenerated until no new subgroups appear. Worst-case exponential in
    /// the group order; intended for the small orders this crate targets.
    pub fn subgroups(&self) -> Result<FiniteSet<Group<T>>, Error> {
        let mut known = FiniteSet::new(vec![self.generate(&[self.core.identity.clone()])?]);
        loop {
            let mut next: Vec<Group<T>> = known.iter().cloned().collect();
            for subgroup in known.iter() {
                for value in self.core.elements.iter() {
                    if !subgroup.contains_value(value) {
                        let mut seed: Vec<T> =
                            subgroup.core.elements.iter().cloned().collect();
                        seed.push(value.clone());
                        next.push(self.generate(&seed)?);
                    }
                }
            }
            let next = FiniteSet::new(next);
            if next == known {
                return Ok(known);
            }
            known = next;
        }
    }

    /// The quotient group by a normal subgroup; elements are cosets.
    pub fn quotient(&self, normal: &Group<T>) -> Result<Group<FiniteSet<T>>, Error> {
        if !normal.is_normal_subgroup_of(self) {
            return Err(Error::NotNormal);
        }
        let cosets = FiniteSet::new(self.core.elements.iter().map(|g| {
            FiniteSet::new(normal.core.elements.iter().map(|h| self.apply_raw(g, h)))
        }));
        let parent = self.clone();
        let bin_op = FiniteFunction::new(
            cosets.square(),
            cosets.clone(),
            move |pair: &(FiniteSet<T>, FiniteSet<T>)| {
                let representative = pair
                    .0
                    .iter()
                    .next()
                    .expect("cosets are never empty")
                    .clone();
                FiniteSet::new(pair.1.iter().map(|g| parent.apply_raw(&representative, g)))
            },
        )?;
        Group::with_options(
            cosets,
            bin_op,
            GroupOptions {
                display_order: None,
                trust_associativity: true,
            },
        )
    }

    /// The direct product, with the componentwise operation on pairs.
    pub fn direct_product<U>(&self, other: &Group<U>) -> Result<Group<(T, U)>, Error>
    where
        U: Clone + Eq + Hash + 'static,
    {
        let elements = self.core.elements.product(&other.core.elements);
        let (left, right) = (self.clone(), other.clone());
        let bin_op = FiniteFunction::new(
            elements.square(),
            elements.clone(),
            move |pair: &((T, U), (T, U))| {
                (
                    left.apply_raw(&(pair.0).0, &(pair.1).0),
                    right.apply_raw(&(pair.0).1, &(pair.1).1),
                )
            },
        )?;
        Group::with_options(
            elements,
            bin_op,
            GroupOptions {
                display_order: None,
                trust_associativity: true,
            },
        )
    }

    /// Search for an isomorphism onto `other`.
    ///
    /// Orders and Abelian-ness are compared first. Then every assignment of
    /// `other`'s elements onto a generating set of this group is tried,
    /// extending the candidate mapping by closure under the operation and
    /// rejecting on the first homomorphism violation or image collision.
    /// Returns the first consistent total mapping; exponential worst case,
    /// for small groups only.
    pub fn find_isomorphism<U>(&self, other: &Group<U>) -> Option<GroupHomomorphism<T, U>>
    where
        U: Clone + Eq + Hash + 'static,
    {
        if self.order() != other.order() || self.is_abelian() != other.is_abelian() {
            return None;
        }
        let generators: Vec<T> = self.generators().into_iter().map(Element::into_value).collect();
        let candidates: Vec<U> = other.iter().map(Element::into_value).collect();

        for assignment in candidates.iter().cloned().permutations(generators.len()) {
            let mut mapping: HashMap<T, U> =
                generators.iter().cloned().zip(assignment).collect();
            let mut counterexample = false;
            while !counterexample {
                let mapped: Vec<T> = mapping.keys().cloned().collect();
                let mut extensions: HashMap<T, U> = HashMap::new();
                'pairs: for g in &mapped {
                    for h in &mapped {
                        let product = self.apply_raw(g, h);
                        let image = other.apply_raw(&mapping[g], &mapping[h]);
                        match mapping.get(&product) {
                            Some(expected) => {
                                if image != *expected {
                                    counterexample = true;
                                    break 'pairs;
                                }
                            }
                            None => {
                                extensions.insert(product, image);
                            }
                        }
                    }
                }
                if counterexample || mapping.len() == self.order() {
                    break;
                }
                let image_count = mapping
                    .values()
                    .chain(extensions.values())
                    .collect::<HashSet<_>>()
                    .len();
                if image_count != mapping.len() + extensions.len() {
                    counterexample = true;
                }
                mapping.extend(extensions);
            }
            if !counterexample && mapping.len() == self.order() {
                let table = Rc::new(mapping);
                let function = FiniteFunction::new(
                    self.core.elements.clone(),
                    other.core.elements.clone(),
                    move |x: &T| table[x].clone(),
                );
                match function
                    .and_then(|function| GroupHomomorphism::new(self.clone(), other.clone(), function))
                {
                    Ok(hom) => return Some(hom),
                    Err(_) => panic!("the isomorphism search produced a mapping that fails validation"),
                }
            }
        }
        None
    }

    pub fn is_isomorphic<U>(&self, other: &Group<U>) -> bool
    where
        U: Clone + Eq + Hash + 'static,
    {
        self.find_isomorphism(other).is_some()
    }
}

impl<T> Clone for Group<T> {
    fn clone(&self) -> Group<T> {
        Group {
            core: Rc::clone(&self.core),
        }
    }
}

impl<T> PartialEq for Group<T>
where
    T: Clone + Eq + Hash + 'static,
{
    fn eq(&self, other: &Group<T>) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
            || (self.core.bin_op == other.core.bin_op && self.core.elements == other.core.elements)
    }
}

impl<T> Eq for Group<T> where T: Clone + Eq + Hash + 'static {}

impl<T> Hash for Group<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.core.bin_op.hash(state);
        self.core.elements.hash(state);
    }
}

impl<T> fmt::Debug for Group<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Group")
            .field("elements", &self.core.elements)
            .field("abelian", &self.core.abelian)
            .finish()
    }
}

/// Iterator over the elements of a group, in display order.
pub struct Elements<'a, T> {
    group: &'a Group<T>,
    position: usize,
}

impl<'a, T> Iterator for Elements<'a, T>
where
    T: Clone + Eq + Hash + 'static,
{
    type Item = Element<T>;

    fn next(&mut self) -> Option<Element<T>> {
        let value = self.group.core.ordering.get(self.position)?.clone();
        self.position += 1;
        Some(self.group.wrap(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.group.core.ordering.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for Elements<'a, T> where T: Clone + Eq + Hash + 'static {}
