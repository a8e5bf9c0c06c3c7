//! Archetype group constructors.
//!
//! These are the public entry points that assemble raw element sets and
//! binary operations and hand them to [`Group`]'s constructor. Their
//! operations are associative by definition, so they skip the O(n³)
//! associativity sweep.
use std::fmt;

use itertools::Itertools;
use num_integer::Roots;

use crate::error::Error;
use crate::func::FiniteFunction;
use crate::group::{Group, GroupOptions};
use crate::perm::Permutation;
use crate::set::FiniteSet;
use crate::El;

/// Largest degree [`sn`] will construct; n! elements make anything beyond
/// this unreasonable for construction-time verification.
pub const MAX_SYMMETRIC_DEGREE: u32 = 6;

/// The additive group of integers modulo n.
///
/// This is the archetype of a cyclic group of order n.
pub fn zn(n: u64) -> Result<Group<u64>, Error> {
    let elements = FiniteSet::new(0..n);
    let bin_op = FiniteFunction::new(elements.square(), elements.clone(), move |pair: &(u64, u64)| {
        (pair.0 + pair.1) % n
    })?;
    Group::with_options(
        elements,
        bin_op,
        GroupOptions {
            display_order: None,
            trust_associativity: true,
        },
    )
}

/// The multiplicative group of integers modulo a prime p.
///
/// Fails unless the modulus is a prime greater than 1.
pub fn multiplicative_zn(p: u64) -> Result<Group<u64>, Error> {
    if !is_prime(p) {
        return Err(Error::NotPrime);
    }
    let elements = FiniteSet::new(1..p);
    let bin_op = FiniteFunction::new(elements.square(), elements.clone(), move |pair: &(u64, u64)| {
        (pair.0 * pair.1) % p
    })?;
    Group::with_options(
        elements,
        bin_op,
        GroupOptions {
            display_order: None,
            trust_associativity: true,
        },
    )
}

fn is_prime(n: u64) -> bool {
    n > 1 && (2..=n.sqrt()).all(|divisor| n % divisor != 0)
}

/// The symmetric group of all permutations of n points.
///
/// Elements come out in lexicographic order of their image vectors. Degrees
/// above [`MAX_SYMMETRIC_DEGREE`] are refused outright; n! elements mean a
/// factorially growing pair domain.
pub fn sn(n: u32) -> Result<Group<Permutation>, Error> {
    if n > MAX_SYMMETRIC_DEGREE {
        return Err(Error::SymmetricDegree(MAX_SYMMETRIC_DEGREE));
    }
    let ordered = (0..n as El)
        .permutations(n as usize)
        .map(Permutation::from_images)
        .collect::<Result<Vec<Permutation>, Error>>()?;
    let elements = FiniteSet::new(ordered.iter().cloned());
    let bin_op = FiniteFunction::new(
        elements.square(),
        elements.clone(),
        |pair: &(Permutation, Permutation)| pair.0.compose(&pair.1),
    )?;
    Group::with_options(
        elements,
        bin_op,
        GroupOptions {
            display_order: Some(ordered),
            trust_associativity: true,
        },
    )
}

/// An element of a dihedral group: a rotation, optionally followed by a
/// flip. Displayed as `r2` or `r2s`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Dihedral {
    pub rotation: u32,
    pub flipped: bool,
}

impl Dihedral {
    /// The plain rotation by k steps.
    pub fn rotation(k: u32) -> Dihedral {
        Dihedral {
            rotation: k,
            flipped: false,
        }
    }

    /// The flip preceded by a rotation by k steps.
    pub fn flip(k: u32) -> Dihedral {
        Dihedral {
            rotation: k,
            flipped: true,
        }
    }
}

impl fmt::Display for Dihedral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "r{}{}", self.rotation, if self.flipped { "s" } else { "" })
    }
}

impl fmt::Debug for Dihedral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// The dihedral group of order 2n: the symmetries of a regular n-gon.
///
/// As a matter of convention, multiplication treats the element on the
/// right as the first operation. This is consistent with `r2s` meaning a
/// flip followed by two rotations, so in D5 one should expect
/// `r1 * r2s == r3s` and `r1s * r2 == r4s`.
pub fn dn(n: u32) -> Result<Group<Dihedral>, Error> {
    let ordered: Vec<Dihedral> = (0..n)
        .map(Dihedral::rotation)
        .chain((0..n).map(Dihedral::flip))
        .collect();
    let elements = FiniteSet::new(ordered.iter().cloned());
    let bin_op = FiniteFunction::new(
        elements.square(),
        elements.clone(),
        move |pair: &(Dihedral, Dihedral)| {
            let (a, b) = (&pair.0, &pair.1);
            // a's flip reverses the later rotation; flips cancel pairwise
            Dihedral {
                rotation: if a.flipped {
                    (a.rotation + n - b.rotation) % n
                } else {
                    (a.rotation + b.rotation) % n
                },
                flipped: a.flipped != b.flipped,
            }
        },
    )?;
    Group::with_options(
        elements,
        bin_op,
        GroupOptions {
            display_order: Some(ordered),
            trust_associativity: true,
        },
    )
}
