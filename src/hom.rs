//! Homomorphisms between finite groups.
use std::hash::Hash;

use itertools::iproduct;

use crate::error::Error;
use crate::func::FiniteFunction;
use crate::group::Group;

/// A function between the element sets of two groups that respects both
/// operations: `f(a * b) == f(a) * f(b)` on every pair.
///
/// The axiom is verified at construction, so a `GroupHomomorphism` that
/// exists is known to be a morphism. [`Group::find_isomorphism`] returns its
/// results in this form.
pub struct GroupHomomorphism<T, U> {
    domain: Group<T>,
    codomain: Group<U>,
    function: FiniteFunction<T, U>,
}

impl<T, U> GroupHomomorphism<T, U>
where
    T: Clone + Eq + Hash + 'static,
    U: Clone + Eq + Hash + 'static,
{
    /// Validate a function as a homomorphism between two groups.
    pub fn new(
        domain: Group<T>,
        codomain: Group<U>,
        function: FiniteFunction<T, U>,
    ) -> Result<GroupHomomorphism<T, U>, Error> {
        if function.domain() != domain.elements() || function.codomain() != codomain.elements() {
            return Err(Error::HomomorphismSets);
        }
        for (a, b) in iproduct!(domain.elements().iter(), domain.elements().iter()) {
            let image_of_product = function.apply(&domain.apply_raw(a, b));
            let product_of_images = codomain.apply_raw(&function.apply(a), &function.apply(b));
            if image_of_product != product_of_images {
                return Err(Error::NotHomomorphism);
            }
        }
        Ok(GroupHomomorphism {
            domain,
            codomain,
            function,
        })
    }

    pub fn domain(&self) -> &Group<T> {
        &self.domain
    }

    pub fn codomain(&self) -> &Group<U> {
        &self.codomain
    }

    pub fn function(&self) -> &FiniteFunction<T, U> {
        &self.function
    }

    /// Evaluate on a domain group member.
    pub fn evaluate(&self, value: &T) -> Result<U, Error> {
        self.function.evaluate(value)
    }

    /// The subgroup of the domain mapping onto the codomain's identity.
    pub fn kernel(&self) -> Result<Group<T>, Error> {
        let identity = self.codomain.identity();
        let members: Vec<T> = self
            .domain
            .elements()
            .iter()
            .filter(|&g| self.function.apply(g) == *identity.value())
            .cloned()
            .collect();
        self.domain.generate(&members)
    }

    /// The image of the domain, as a subgroup of the codomain.
    pub fn image(&self) -> Result<Group<U>, Error> {
        let values: Vec<U> = self
            .domain
            .elements()
            .iter()
            .map(|g| self.function.apply(g))
            .collect();
        self.codomain.generate(&values)
    }

    /// A homomorphism is an isomorphism exactly when it is bijective.
    pub fn is_isomorphism(&self) -> bool {
        self.function.is_bijective()
    }
}
