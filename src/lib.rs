//! A finite abstract algebra library.
//!
//! This crate provides data structures and algorithms for working with finite
//! sets, total functions between them, and the groups built on top: the group
//! axioms are verified when a [`Group`] is constructed, and the structural
//! algorithms (subgroup generation, subgroup enumeration, quotients,
//! isomorphism search) are machine-checked rather than fast. It is aimed at
//! small and moderate group orders.
//!
//! ```
//! use algebra::zn;
//!
//! let z5 = zn(5).unwrap();
//! let two = z5.element(2).unwrap();
//! let four = z5.element(4).unwrap();
//!
//! assert_eq!(z5.order(), 5);
//! assert!(z5.is_abelian());
//! assert_eq!(two.multiply(&four).unwrap(), z5.element(1).unwrap());
//! assert_eq!(z5.invert(&two).unwrap(), z5.element(3).unwrap());
//! ```
pub mod archetype;
mod cayley;
pub mod element;
pub mod error;
pub mod func;
pub mod group;
pub mod hom;
pub mod perm;
pub mod set;

pub use crate::archetype::{dn, multiplicative_zn, sn, zn, Dihedral, MAX_SYMMETRIC_DEGREE};
pub use crate::element::{CrossProduct, Element};
pub use crate::error::Error;
pub use crate::func::FiniteFunction;
pub use crate::group::{Group, GroupOptions};
pub use crate::hom::GroupHomomorphism;
pub use crate::perm::Permutation;
pub use crate::set::FiniteSet;

/// Permutation point.
///
/// Points permuted by [`Permutation`] are represented by non-negative
/// integers (`u32`).
pub type El = u32;
