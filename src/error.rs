//! Crate-wide error type.
use thiserror::Error;

/// Errors reported by set, function, and group operations.
///
/// Construction errors are returned before any partially-built value can
/// escape. Internal-consistency defects (for example an element losing its
/// inverse after the inverse-existence check passed) are not representable
/// here; they panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Set exponentiation with an exponent below one.
    #[error("the exponent must be at least 1")]
    SetExponent,

    /// A mapping produced a value outside of the declared codomain.
    #[error("the function returns a value outside of the codomain")]
    OutsideCodomain,

    /// A function was evaluated on a value outside of its domain.
    #[error("the function must be called on elements of the domain")]
    OutsideDomain,

    /// Composition of two functions whose sets do not line up.
    #[error("the codomain of the inner function must match the domain of the outer")]
    ComposeMismatch,

    /// A tabulated mapping assigned two outputs to the same input.
    #[error("the pairs map the same input to more than one output")]
    DuplicateKey,

    /// An image vector that does not describe a bijection.
    #[error("the images do not describe a permutation")]
    NotPermutation,

    #[error("the binary operation must have the elements as its codomain")]
    OperationCodomain,

    #[error("the binary operation must have all element pairs as its domain")]
    OperationDomain,

    #[error("the binary operation is not associative")]
    NotAssociative,

    #[error("there must be one identity element")]
    NoIdentity,

    #[error("some elements are missing inverses")]
    MissingInverse,

    /// A requested display order that is not a permutation of the elements.
    #[error("the ordered and unordered elements do not match")]
    DisplayOrderMismatch,

    #[error("the element is not in the group")]
    NotInGroup,

    /// Integer multiples are only defined for Abelian elements.
    #[error("cannot self-multiply elements of non-Abelian groups")]
    NonAbelianScalar,

    /// Additive notation applied to a non-Abelian pair.
    #[error("both elements must belong to Abelian groups")]
    NonAbelianPair,

    #[error("the element must belong to an Abelian group")]
    NonAbelianNegate,

    #[error("the generating set must contain at least one element")]
    EmptyGenerators,

    /// Quotient by a subgroup that is not normal.
    #[error("the divisor must be a normal subgroup")]
    NotNormal,

    /// A homomorphism whose function does not map between the two groups.
    #[error("the function must map between the elements of the two groups")]
    HomomorphismSets,

    #[error("the function does not satisfy the homomorphism axioms")]
    NotHomomorphism,

    #[error("the modulus must be a prime greater than 1")]
    NotPrime,

    /// Refused symmetric group construction above the degree cap.
    #[error("symmetric groups of degree above {0} are too large to construct")]
    SymmetricDegree(u32),

    /// An exponent whose magnitude cannot be represented for iteration.
    #[error("the exponent magnitude is too large")]
    ExponentRange,
}
