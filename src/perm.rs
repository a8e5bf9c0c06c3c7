//! Permutations of finite sets.
use std::cmp::max;
use std::fmt;

use crate::error::Error;
use crate::El;

/// A permutation of a finite set.
///
/// A permutation rearranges the elements of a finite set. It is a bijection
/// from a set to the same set; here the set is always {0, ..., n-1} for some
/// degree n, and a permutation is stored as the vector of images of each
/// point. Permutations on another finite set X can be represented by fixing
/// a bijection from X to {0, ..., |X|-1}.
///
/// The degree is part of the value: two permutations of different degrees
/// are never equal, even when they move no points. Points at or beyond the
/// degree are treated as fixed by [`Permutation::apply`] and
/// [`Permutation::compose`], so mixed-degree products still make sense.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    images: Vec<El>,
}

impl Permutation {
    /// The identity permutation on {0, ..., degree-1}.
    pub fn identity(degree: u32) -> Permutation {
        Permutation {
            images: (0..degree).collect(),
        }
    }

    /// Create a permutation from a vector containing the images of 0..n.
    ///
    /// Fails if the vector does not correspond to a permutation.
    pub fn from_images(images: Vec<El>) -> Result<Permutation, Error> {
        let mut seen = vec![false; images.len()];
        for &image in images.iter() {
            let image = image as usize;
            if image >= images.len() || seen[image] {
                return Err(Error::NotPermutation);
            }
            seen[image] = true;
        }
        Ok(Permutation { images })
    }

    pub fn degree(&self) -> u32 {
        self.images.len() as u32
    }

    /// The image of a point. Points beyond the degree are fixed.
    pub fn apply(&self, el: El) -> El {
        self.images.get(el as usize).cloned().unwrap_or(el)
    }

    /// The composition applying `other` first, then `self`.
    pub fn compose(&self, other: &Permutation) -> Permutation {
        let degree = max(self.degree(), other.degree());
        Permutation {
            images: (0..degree).map(|el| self.apply(other.apply(el))).collect(),
        }
    }

    /// The inverse of this permutation.
    pub fn inverse(&self) -> Permutation {
        let mut images = vec![0; self.images.len()];
        for (el, &image) in self.images.iter().enumerate() {
            images[image as usize] = el as El;
        }
        Permutation { images }
    }
}

/// Cycle notation, with `()` for the identity.
impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut seen = vec![false; self.images.len()];
        let mut empty = true;

        for start in 0..self.images.len() as El {
            if seen[start as usize] || self.apply(start) == start {
                continue;
            }
            empty = false;
            f.write_str("(")?;
            let mut el = start;
            let mut first = true;
            loop {
                seen[el as usize] = true;
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                fmt::Display::fmt(&el, f)?;
                el = self.apply(el);
                if el == start {
                    break;
                }
            }
            f.write_str(")")?;
        }

        if empty {
            f.write_str("()")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn random_perm<S>(size: S) -> impl Strategy<Value = Permutation>
    where
        S: Strategy<Value = El>,
    {
        size.prop_map(|v| (0..v).collect::<Vec<_>>())
            .prop_shuffle()
            .prop_map(|vec| Permutation::from_images(vec).unwrap())
    }

    #[test]
    fn fmt_identity() {
        assert_eq!(format!("{}", Permutation::identity(0)), "()");
        assert_eq!(format!("{:?}", Permutation::identity(5)), "()");
    }

    #[test]
    fn fmt_perms() {
        assert_eq!(
            format!("{}", Permutation::from_images(vec![4, 1, 5, 2, 3, 0]).unwrap()),
            "(0 4 3 2 5)"
        );
        assert_eq!(
            format!("{:?}", Permutation::from_images(vec![2, 3, 1, 0, 5, 4]).unwrap()),
            "(0 2 1 3)(4 5)"
        );
    }

    #[test]
    fn invalid_images() {
        assert_eq!(
            Permutation::from_images(vec![0, 2]).err(),
            Some(Error::NotPermutation)
        );
        assert_eq!(
            Permutation::from_images(vec![0, 0]).err(),
            Some(Error::NotPermutation)
        );
    }

    #[test]
    fn composition_order() {
        let a = Permutation::from_images(vec![1, 0]).unwrap();
        let b = Permutation::from_images(vec![2, 3, 0, 1]).unwrap();
        // b moves first, then a
        assert_eq!(
            a.compose(&b),
            Permutation::from_images(vec![2, 3, 1, 0]).unwrap()
        );
        assert_eq!(
            b.compose(&a),
            Permutation::from_images(vec![3, 2, 0, 1]).unwrap()
        );
    }

    #[test]
    fn points_beyond_the_degree_are_fixed() {
        let a = Permutation::from_images(vec![1, 0]).unwrap();
        assert_eq!(a.apply(7), 7);
    }

    proptest! {
        #[test]
        fn from_images_ok(v in (0..200u32).prop_map(|v| (0..v).collect::<Vec<_>>()).prop_shuffle()) {
            let perm = Permutation::from_images(v.clone()).unwrap();
            prop_assert!((0..v.len()).all(|i| perm.apply(i as El) == v[i]));
        }

        #[test]
        fn inverse_composes_to_identity(perm in random_perm(0..200u32)) {
            let degree = perm.degree();
            prop_assert_eq!(perm.compose(&perm.inverse()), Permutation::identity(degree));
            prop_assert_eq!(perm.inverse().compose(&perm), Permutation::identity(degree));
        }

        #[test]
        fn double_inverse(perm in random_perm(0..200u32)) {
            prop_assert_eq!(perm.inverse().inverse(), perm);
        }
    }
}
