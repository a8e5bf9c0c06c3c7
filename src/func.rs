//! Total functions between finite sets.
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::error::Error;
use crate::set::FiniteSet;

/// A total mapping from a finite domain into a finite codomain.
///
/// The evaluator is arbitrary code; construction checks eagerly that it maps
/// every domain element into the codomain, so a `FiniteFunction` that exists
/// is known to be well-formed.
///
/// Equality is extensional: two functions are equal when their domains and
/// codomains match and their outputs agree on every domain element, an
/// O(|domain|) comparison. Hashing covers the domain and codomain only,
/// never the evaluator, since semantically equal mappings can have distinct
/// implementations.
pub struct FiniteFunction<X, Y> {
    domain: FiniteSet<X>,
    codomain: FiniteSet<Y>,
    map: Rc<dyn Fn(&X) -> Y>,
}

impl<X, Y> FiniteFunction<X, Y>
where
    X: Clone + Eq + Hash + 'static,
    Y: Clone + Eq + Hash + 'static,
{
    /// Create a function, verifying that the image lies in the codomain.
    pub fn new<F>(
        domain: FiniteSet<X>,
        codomain: FiniteSet<Y>,
        map: F,
    ) -> Result<FiniteFunction<X, Y>, Error>
    where
        F: Fn(&X) -> Y + 'static,
    {
        if domain.iter().any(|x| !codomain.contains(&map(x))) {
            return Err(Error::OutsideCodomain);
        }
        Ok(FiniteFunction {
            domain,
            codomain,
            map: Rc::new(map),
        })
    }

    /// The function tabulated by a list of `(input, output)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<FiniteFunction<X, Y>, Error>
    where
        I: IntoIterator<Item = (X, Y)>,
    {
        let mut table: HashMap<X, Y> = HashMap::new();
        let mut inputs = Vec::new();
        let mut outputs = Vec::new();
        for (input, output) in pairs {
            match table.get(&input) {
                Some(existing) if *existing != output => return Err(Error::DuplicateKey),
                Some(_) => {}
                None => {
                    table.insert(input.clone(), output.clone());
                    inputs.push(input);
                    outputs.push(output);
                }
            }
        }
        let table = Rc::new(table);
        Ok(FiniteFunction {
            domain: FiniteSet::new(inputs),
            codomain: FiniteSet::new(outputs),
            map: Rc::new(move |x: &X| table[x].clone()),
        })
    }

    pub fn domain(&self) -> &FiniteSet<X> {
        &self.domain
    }

    pub fn codomain(&self) -> &FiniteSet<Y> {
        &self.codomain
    }

    /// Evaluate on a domain element.
    pub fn evaluate(&self, x: &X) -> Result<Y, Error> {
        if !self.domain.contains(x) {
            return Err(Error::OutsideDomain);
        }
        Ok(self.apply(x))
    }

    // Unchecked evaluation; callers guarantee domain membership.
    pub(crate) fn apply(&self, x: &X) -> Y {
        (self.map)(x)
    }

    /// The image of the domain, recomputed on each call.
    pub fn image(&self) -> FiniteSet<Y> {
        FiniteSet::new(self.domain.iter().map(|x| self.apply(x)))
    }

    pub fn is_surjective(&self) -> bool {
        self.image() == self.codomain
    }

    pub fn is_injective(&self) -> bool {
        self.domain.len() == self.image().len()
    }

    pub fn is_bijective(&self) -> bool {
        self.is_surjective() && self.is_injective()
    }

    /// The composition `x -> self(inner(x))`.
    ///
    /// The inner function's codomain must match this function's domain.
    pub fn compose<W>(&self, inner: &FiniteFunction<W, X>) -> Result<FiniteFunction<W, Y>, Error>
    where
        W: Clone + Eq + Hash + 'static,
    {
        if self.domain != *inner.codomain() {
            return Err(Error::ComposeMismatch);
        }
        let outer = self.clone();
        let inner = inner.clone();
        FiniteFunction::new(inner.domain.clone(), self.codomain.clone(), move |x: &W| {
            outer.apply(&inner.apply(x))
        })
    }
}

impl<X> FiniteFunction<X, X>
where
    X: Clone + Eq + Hash + 'static,
{
    /// The identity function on a set.
    pub fn identity(set: &FiniteSet<X>) -> FiniteFunction<X, X> {
        FiniteFunction {
            domain: set.clone(),
            codomain: set.clone(),
            map: Rc::new(|x: &X| x.clone()),
        }
    }
}

impl<X, Y> Clone for FiniteFunction<X, Y>
where
    X: Clone,
    Y: Clone,
{
    fn clone(&self) -> FiniteFunction<X, Y> {
        FiniteFunction {
            domain: self.domain.clone(),
            codomain: self.codomain.clone(),
            map: Rc::clone(&self.map),
        }
    }
}

impl<X, Y> PartialEq for FiniteFunction<X, Y>
where
    X: Clone + Eq + Hash + 'static,
    Y: Clone + Eq + Hash + 'static,
{
    fn eq(&self, other: &FiniteFunction<X, Y>) -> bool {
        if self.domain != other.domain || self.codomain != other.codomain {
            return false;
        }
        Rc::ptr_eq(&self.map, &other.map)
            || self.domain.iter().all(|x| self.apply(x) == other.apply(x))
    }
}

impl<X, Y> Eq for FiniteFunction<X, Y>
where
    X: Clone + Eq + Hash + 'static,
    Y: Clone + Eq + Hash + 'static,
{
}

/// Hash over the domain and codomain, combined non-commutatively so that
/// swapping the two produces a different hash.
impl<X, Y> Hash for FiniteFunction<X, Y>
where
    X: Hash,
    Y: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.domain.hash(state);
        self.codomain.hash(state);
    }
}

impl<X, Y> fmt::Debug for FiniteFunction<X, Y>
where
    X: Clone + Eq + Hash + fmt::Debug + 'static,
    Y: Clone + Eq + Hash + fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list()
            .entries(self.domain.iter().map(|x| (x.clone(), self.apply(x))))
            .finish()
    }
}

impl<X, Y> fmt::Display for FiniteFunction<X, Y>
where
    X: Clone + Eq + Hash + fmt::Display + 'static,
    Y: Clone + Eq + Hash + fmt::Display + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Domain & Image:")?;
        for x in self.domain.iter() {
            write!(f, "\n{} -> {}", x, self.apply(x))?;
        }
        f.write_str("\nRemaining Codomain:")?;
        for y in self.codomain.difference(&self.image()).iter() {
            write!(f, "\n -> {}", y)?;
        }
        Ok(())
    }
}
