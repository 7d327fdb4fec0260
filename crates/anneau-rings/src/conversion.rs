//! Conversion maps between rings.
//!
//! A target ring declares which source rings it can take elements from.
//! The declaration distinguishes a map into the target from a map that only
//! exists the other way, so ideal extension can report which case failed.

use crate::error::{Result, RingError};
use crate::ring::Ring;

/// Availability of a conversion map from a source ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// Elements of the source map into the target.
    Direct,
    /// Only the target maps into the source.
    ReverseOnly,
    /// No map in either direction.
    Unavailable,
}

/// A ring that can receive elements of `S`.
pub trait ConvertFrom<S: Ring>: Ring {
    /// Which map, if any, connects `source` to `self`.
    fn conversion_from(&self, source: &S) -> Conversion;

    /// Maps `x` along the direct conversion.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::ConversionError`] if `x` has no image.
    fn convert(&self, source: &S, x: &S::Element) -> Result<Self::Element>;

    /// Whether the direct conversion is injective.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::Unproven`] unless the ring decides it.
    fn is_injective_from(&self, source: &S) -> Result<bool> {
        Err(RingError::Unproven(format!(
            "injectivity of {} -> {}",
            source.name(),
            self.name()
        )))
    }
}

/// Maps every element of `xs` from `source` into `target`.
///
/// # Errors
///
/// Returns [`RingError::Unsupported`] if only the reverse map exists,
/// [`RingError::Incompatible`] if no map exists, and conversion errors of
/// individual elements.
pub fn convert_all<S: Ring, T: ConvertFrom<S>>(
    target: &T,
    source: &S,
    xs: &[S::Element],
) -> Result<Vec<T::Element>> {
    match target.conversion_from(source) {
        Conversion::Direct => xs.iter().map(|x| target.convert(source, x)).collect(),
        Conversion::ReverseOnly => Err(RingError::Unsupported(format!(
            "elements of {} do not map into {}; only the reverse map exists",
            source.name(),
            target.name()
        ))),
        Conversion::Unavailable => Err(RingError::Incompatible {
            from: source.name().to_string(),
            to: target.name().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::{IntegerModRing, IntegerRing, RationalField};
    use anneau_integers::{Integer, Rational};

    #[test]
    fn test_direct_map() {
        let zz = IntegerRing::new();
        let qq = RationalField::new();
        let xs = [Integer::new(3), Integer::new(-4)];
        let ys = convert_all(&*qq, &*zz, &xs).unwrap();
        assert_eq!(ys, vec![Rational::from_i64(3, 1), Rational::from_i64(-4, 1)]);
    }

    #[test]
    fn test_reverse_only_is_unsupported() {
        let zz = IntegerRing::new();
        let qq = RationalField::new();
        let err = convert_all(&*zz, &*qq, &[Rational::from_i64(1, 2)]).unwrap_err();
        assert!(matches!(err, RingError::Unsupported(_)));
    }

    #[test]
    fn test_unrelated_moduli_are_incompatible() {
        let z8 = IntegerModRing::new(8).unwrap();
        let z3 = IntegerModRing::new(3).unwrap();
        let err = convert_all(&*z8, &*z3, &[1]).unwrap_err();
        assert!(matches!(err, RingError::Incompatible { .. }));
    }
}
