//! Group-bound elements with algebraic notation.
use std::fmt;
use std::hash::{Hash, Hasher};

use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::error::Error;
use crate::group::Group;

/// A group member wrapped together with a handle to its owning group.
///
/// This is mainly notation: it lets callers write `g.multiply(&h)` or
/// `g.pow(5)` instead of threading the group's binary operation around.
/// Elements are created on demand and are cheap to clone.
///
/// Equality and hashing look only at the underlying value, never at the
/// owning group. Two elements of different groups with equal values compare
/// equal; this enables cross-group notation but makes elements of unrelated
/// groups collide as map keys, a known sharp edge.
#[derive(Clone)]
pub struct Element<T> {
    value: T,
    group: Group<T>,
}

/// The product of two elements, carrying whether the fallback group
/// performed the operation.
#[derive(Clone, Debug)]
pub struct CrossProduct<T> {
    pub element: Element<T>,
    pub used_fallback: bool,
}

impl<T> Element<T>
where
    T: Clone + Eq + Hash + 'static,
{
    pub(crate) fn raw(value: T, group: Group<T>) -> Element<T> {
        Element { value, group }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn group(&self) -> &Group<T> {
        &self.group
    }

    /// The group product `self * other`.
    ///
    /// Both operands are assumed to live in this element's group. When that
    /// fails the product is retried under the other element's group, with a
    /// warning; see [`Element::cross_multiply`] for the explicit variant.
    pub fn multiply(&self, other: &Element<T>) -> Result<Element<T>, Error> {
        Ok(self.cross_multiply(other)?.element)
    }

    /// The group product `self * other`, reporting which group performed it.
    ///
    /// The pair is evaluated under this element's group when possible, and
    /// otherwise under the other element's group. The fallback is best
    /// effort, not a guaranteed semantics, and is flagged in the result.
    pub fn cross_multiply(&self, other: &Element<T>) -> Result<CrossProduct<T>, Error> {
        if self.group.contains_value(&other.value) {
            let product = self.group.apply_raw(&self.value, &other.value);
            Ok(CrossProduct {
                element: self.group.wrap(product),
                used_fallback: false,
            })
        } else if other.group.contains_value(&self.value) {
            tracing::warn!(
                "multiplying elements from different groups; the result may be unexpected"
            );
            let product = other.group.apply_raw(&self.value, &other.value);
            Ok(CrossProduct {
                element: other.group.wrap(product),
                used_fallback: true,
            })
        } else {
            Err(Error::OutsideDomain)
        }
    }

    /// The integer multiple `self * factor`, defined as `self.pow(factor)`.
    ///
    /// Only Abelian elements can be self-multiplied.
    pub fn scalar_multiply<E>(&self, factor: E) -> Result<Element<T>, Error>
    where
        E: Integer + ToPrimitive,
    {
        if !self.group.is_abelian() {
            return Err(Error::NonAbelianScalar);
        }
        self.pow(factor)
    }

    /// Raise to an integer power by iterated squaring.
    ///
    /// Exponent 0 yields the identity; negative exponents invert first.
    pub fn pow<E>(&self, exponent: E) -> Result<Element<T>, Error>
    where
        E: Integer + ToPrimitive,
    {
        let negative = exponent < E::zero();
        let magnitude = if negative {
            E::zero() - exponent
        } else {
            exponent
        };
        let steps = magnitude.to_u128().ok_or(Error::ExponentRange)?;
        let base = if negative { self.inverse() } else { self.clone() };
        Ok(base.pow_unsigned(steps))
    }

    fn pow_unsigned(&self, mut exponent: u128) -> Element<T> {
        let mut result = self.group.identity();
        let mut base = self.clone();
        while exponent > 0 {
            if exponent.is_odd() {
                result = self.group.wrap(self.group.apply_raw(&result.value, &base.value));
            }
            exponent /= 2;
            if exponent > 0 {
                base = self.group.wrap(self.group.apply_raw(&base.value, &base.value));
            }
        }
        result
    }

    /// The inverse in the owning group.
    pub fn inverse(&self) -> Element<T> {
        self.group.wrap(self.group.invert_raw(&self.value))
    }

    /// The multiplicative order: the least k >= 1 with `self.pow(k)`
    /// equal to the identity.
    pub fn order(&self) -> u64 {
        let identity = self.group.identity();
        let mut current = self.clone();
        let mut count = 1;
        while current != identity {
            current = self
                .group
                .wrap(self.group.apply_raw(&current.value, &self.value));
            count += 1;
        }
        count
    }

    /// Additive notation for Abelian elements: `self + other`.
    pub fn add(&self, other: &Element<T>) -> Result<Element<T>, Error> {
        if self.group.is_abelian() && other.group.is_abelian() {
            self.multiply(other)
        } else {
            Err(Error::NonAbelianPair)
        }
    }

    /// Additive notation for Abelian elements: `self - other`.
    pub fn subtract(&self, other: &Element<T>) -> Result<Element<T>, Error> {
        if self.group.is_abelian() && other.group.is_abelian() {
            self.multiply(&other.inverse())
        } else {
            Err(Error::NonAbelianPair)
        }
    }

    /// Additive notation for Abelian elements: `-self`.
    pub fn negate(&self) -> Result<Element<T>, Error> {
        if self.group.is_abelian() {
            Ok(self.inverse())
        } else {
            Err(Error::NonAbelianNegate)
        }
    }
}

impl<T: PartialEq> PartialEq for Element<T> {
    fn eq(&self, other: &Element<T>) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Element<T> {}

impl<T: Hash> Hash for Element<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Element<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Element<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::archetype::{dn, zn, Dihedral};
    use crate::func::FiniteFunction;
    use crate::set::FiniteSet;

    fn units_mod_5() -> Group<u64> {
        let elements = FiniteSet::new(1..5u64);
        let bin_op = FiniteFunction::new(elements.square(), elements.clone(), |pair: &(u64, u64)| {
            (pair.0 * pair.1) % 5
        })
        .unwrap();
        Group::new(elements, bin_op).unwrap()
    }

    #[test]
    fn construction() {
        let group = units_mod_5();
        let a = group.element(3).unwrap();
        assert_eq!(*a.value(), 3);
        assert_eq!(a.group(), &group);
        assert_eq!(group.element(8).err(), Some(Error::NotInGroup));
    }

    #[test]
    fn representation_and_equality() {
        let d3 = dn(3).unwrap();
        let d5 = dn(5).unwrap();
        let r1s_d3 = d3.element(Dihedral::flip(1)).unwrap();
        let r1s_d5 = d5.element(Dihedral::flip(1)).unwrap();
        let r4_d5 = d5.element(Dihedral::rotation(4)).unwrap();

        assert_eq!(format!("{}", r1s_d3), "r1s");
        assert_eq!(format!("{}", r4_d5), "r4");

        // equal underlying values, regardless of the owning group
        assert_eq!(r1s_d3, r1s_d5);
    }

    #[test]
    fn powers() {
        let d3 = dn(3).unwrap();
        let d5 = dn(5).unwrap();
        let r1s = d3.element(Dihedral::flip(1)).unwrap();
        let r4 = d5.element(Dihedral::rotation(4)).unwrap();

        assert_eq!(r1s.pow(-1).unwrap(), r1s);
        assert_eq!(r1s.pow(0).unwrap(), d3.identity());
        assert_eq!(r1s.pow(1).unwrap(), r1s);
        assert_eq!(r1s.pow(2).unwrap(), d3.identity());
        assert_eq!(r1s.pow(3).unwrap(), r1s);
        assert_eq!(
            r4.pow(-2).unwrap(),
            d5.element(Dihedral::rotation(2)).unwrap()
        );
    }

    #[test]
    fn multiplication_and_fallback() {
        let d3 = dn(3).unwrap();
        let d5 = dn(5).unwrap();
        let r2_d3 = d3.element(Dihedral::rotation(2)).unwrap();
        let r1s_d3 = d3.element(Dihedral::flip(1)).unwrap();
        let r1s_d5 = d5.element(Dihedral::flip(1)).unwrap();
        let r4_d5 = d5.element(Dihedral::rotation(4)).unwrap();

        assert_eq!(
            r2_d3.multiply(&r1s_d3).unwrap(),
            d3.element(Dihedral::flip(0)).unwrap()
        );

        // r1s also lives in D3, so no fallback happens
        let same = r2_d3.cross_multiply(&r1s_d5).unwrap();
        assert!(!same.used_fallback);
        assert_eq!(same.element, d3.element(Dihedral::flip(0)).unwrap());

        let reversed = r1s_d5.cross_multiply(&r2_d3).unwrap();
        assert!(!reversed.used_fallback);
        assert_eq!(reversed.element, d5.element(Dihedral::flip(4)).unwrap());

        // r4 is not a D3 value, so the product falls back to D5
        let fallback = r2_d3.cross_multiply(&r4_d5).unwrap();
        assert!(fallback.used_fallback);
        assert_eq!(
            fallback.element,
            d5.element(Dihedral::rotation(1)).unwrap()
        );
        assert_eq!(*fallback.element.group(), d5);
    }

    #[test]
    fn scalar_multiples() {
        let z3 = zn(3).unwrap();
        let one = z3.element(1).unwrap();
        let two = z3.element(2).unwrap();

        assert_eq!(one.scalar_multiply(0).unwrap(), z3.identity());
        assert_eq!(one.scalar_multiply(1).unwrap(), one);
        assert_eq!(one.scalar_multiply(2).unwrap(), two);
        assert_eq!(one.scalar_multiply(-2).unwrap(), one);

        let d3 = dn(3).unwrap();
        let r2 = d3.element(Dihedral::rotation(2)).unwrap();
        assert_eq!(r2.scalar_multiply(5).err(), Some(Error::NonAbelianScalar));
    }

    #[test]
    fn abelian_sugar() {
        let z3 = zn(3).unwrap();
        let z5 = zn(5).unwrap();
        let z3_1 = z3.element(1).unwrap();
        let z3_2 = z3.element(2).unwrap();
        let z5_1 = z5.element(1).unwrap();
        let z5_4 = z5.element(4).unwrap();

        assert_eq!(z3_1.add(&z3_2).unwrap(), z3.identity());
        assert_eq!(z3_1.subtract(&z3_1).unwrap(), z3.identity());
        assert_eq!(z3_1.negate().unwrap(), z3_2);

        // cross-group addition follows the multiplication fallback rules
        assert_eq!(z5_1.add(&z3_2).unwrap(), z5.element(3).unwrap());
        assert_eq!(z3_2.add(&z5_1).unwrap(), z3.identity());
        assert_eq!(z3_1.add(&z5_4).unwrap(), z5.identity());
    }

    #[test]
    fn non_abelian_sugar_is_rejected() {
        let d3 = dn(3).unwrap();
        let r1s = d3.element(Dihedral::flip(1)).unwrap();
        let r2 = d3.element(Dihedral::rotation(2)).unwrap();

        assert_eq!(r1s.add(&r2).err(), Some(Error::NonAbelianPair));
        assert_eq!(r1s.subtract(&r2).err(), Some(Error::NonAbelianPair));
        assert_eq!(r1s.negate().err(), Some(Error::NonAbelianNegate));
    }

    #[test]
    fn orders() {
        let d3 = dn(3).unwrap();
        assert_eq!(d3.identity().order(), 1);
        assert_eq!(d3.element(Dihedral::rotation(1)).unwrap().order(), 3);
        assert_eq!(d3.element(Dihedral::flip(0)).unwrap().order(), 2);

        let z5 = zn(5).unwrap();
        assert_eq!(z5.element(1).unwrap().order(), 5);
    }

    proptest! {
        #[test]
        fn adding_exponents(v in 0..6u64, a in -40..40i32, b in -40..40i32) {
            let group = zn(6).unwrap();
            let g = group.element(v).unwrap();
            let combined = g.pow(a).unwrap().multiply(&g.pow(b).unwrap()).unwrap();
            prop_assert_eq!(combined, g.pow(a + b).unwrap());
        }
    }
}
