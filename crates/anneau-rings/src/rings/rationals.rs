//! The field of rational numbers Q.

use std::fmt;
use std::sync::Arc;

use anneau_integers::{Integer, Rational};
use num_traits::{One, Zero};

use super::IntegerRing;
use crate::capability::Capabilities;
use crate::conversion::{Conversion, ConvertFrom};
use crate::descriptor::{Characteristic, RingDescriptor};
use crate::error::{Result, RingError};
use crate::ring::{own_fraction_field, Cardinality, CommutativeRing, Ring, RingCaches};
use crate::roots::rational_roots;
use crate::univariate::Polynomial;

/// The field of rational numbers.
#[derive(Debug)]
pub struct RationalField {
    descriptor: RingDescriptor,
    caches: RingCaches<Rational>,
}

impl RationalField {
    /// Creates the rational field.
    #[must_use]
    pub fn new() -> Arc<Self> {
        let field = Self {
            descriptor: RingDescriptor::provisional("Rational Field", Characteristic::zero()),
            caches: RingCaches::new(),
        };
        field
            .descriptor
            .finish_closed(Capabilities::FIELD | Capabilities::EXACT);
        Arc::new(field)
    }

    /// The rational `num / den`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::ConversionError`] for a zero denominator.
    pub fn fraction(&self, num: i64, den: i64) -> Result<Rational> {
        Rational::new(Integer::new(num), Integer::new(den))
            .ok_or_else(|| RingError::ConversionError(format!("{num}/{den}: zero denominator")))
    }
}

impl fmt::Display for RationalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.descriptor, f)
    }
}

impl Ring for RationalField {
    type Element = Rational;

    fn descriptor(&self) -> &RingDescriptor {
        &self.descriptor
    }

    fn caches(&self) -> &RingCaches<Rational> {
        &self.caches
    }

    fn from_i64(&self, n: i64) -> Rational {
        Rational::from(n)
    }

    fn from_integer(&self, n: &Integer) -> Result<Rational> {
        Ok(Rational::from_integer(n.clone()))
    }

    fn add_ref(&self, a: &Rational, b: &Rational) -> Rational {
        a + b
    }

    fn negate(&self, a: &Rational) -> Rational {
        -a
    }

    fn mul_ref(&self, a: &Rational, b: &Rational) -> Rational {
        a * b
    }

    fn sub_ref(&self, a: &Rational, b: &Rational) -> Rational {
        a - b
    }

    fn eq_el(&self, a: &Rational, b: &Rational) -> bool {
        a == b
    }

    fn is_zero(&self, a: &Rational) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Rational) -> bool {
        a.is_one()
    }

    fn fmt_element(&self, a: &Rational, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{a}")
    }

    fn gcd(&self, a: &Rational, b: &Rational) -> Result<Rational> {
        if a.is_zero() && b.is_zero() {
            Ok(Rational::zero())
        } else {
            Ok(Rational::one())
        }
    }

    fn checked_inverse(&self, a: &Rational) -> Option<Rational> {
        a.checked_recip()
    }

    fn polynomial_roots(&self, p: &Polynomial<Rational>) -> Result<Vec<Rational>> {
        if p.is_zero() {
            return Err(RingError::InvalidArgument(
                "roots of the zero polynomial".to_string(),
            ));
        }
        rational_roots(p.coeffs()).ok_or_else(|| {
            RingError::NotImplemented("rational roots with huge coefficients".to_string())
        })
    }

    fn krull_dimension(&self) -> Result<usize> {
        Ok(0)
    }

    fn cardinality(&self) -> Cardinality {
        Cardinality::Infinite
    }

    fn is_prime_field(&self) -> bool {
        true
    }
}

impl CommutativeRing for RationalField {
    type FractionField = Self;

    fn fraction_field(self: &Arc<Self>) -> Result<Arc<Self>> {
        own_fraction_field(self)
    }
}

impl ConvertFrom<IntegerRing> for RationalField {
    fn conversion_from(&self, _source: &IntegerRing) -> Conversion {
        Conversion::Direct
    }

    fn convert(&self, _source: &IntegerRing, x: &Integer) -> Result<Rational> {
        Ok(Rational::from_integer(x.clone()))
    }

    fn is_injective_from(&self, _source: &IntegerRing) -> Result<bool> {
        Ok(true)
    }
}

impl ConvertFrom<RationalField> for RationalField {
    fn conversion_from(&self, _source: &RationalField) -> Conversion {
        Conversion::Direct
    }

    fn convert(&self, _source: &RationalField, x: &Rational) -> Result<Rational> {
        Ok(x.clone())
    }

    fn is_injective_from(&self, _source: &RationalField) -> Result<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Category;

    #[test]
    fn test_is_its_own_fraction_field() {
        let qq = RationalField::new();
        assert!(Arc::ptr_eq(&qq.fraction_field().unwrap(), &qq));
        assert!(qq.is_field(true).unwrap());
        assert!(qq.is_prime_field());
        assert!(qq.category().is_subcategory_of(Category::FIELDS));
    }

    #[test]
    fn test_epsilon_is_zero() {
        let qq = RationalField::new();
        let eps = qq.epsilon().unwrap();
        assert!(qq.is_zero(eps));
        assert!(std::ptr::eq(eps, qq.epsilon().unwrap()));
    }

    #[test]
    fn test_roots_of_unity() {
        let qq = RationalField::new();
        assert_eq!(qq.zeta(1), Ok(Rational::one()));
        assert_eq!(qq.zeta(2), Ok(Rational::from_i64(-1, 1)));
        assert_eq!(qq.zeta_all(3), Err(RingError::NoRootOfUnity(3)));
        assert!(matches!(qq.zeta(0), Err(RingError::InvalidArgument(_))));
    }

    #[test]
    fn test_fraction_rejects_zero_denominator() {
        let qq = RationalField::new();
        assert_eq!(qq.fraction(2, 4), Ok(Rational::from_i64(1, 2)));
        assert!(matches!(qq.fraction(1, 0), Err(RingError::ConversionError(_))));
    }

    #[test]
    fn test_integers_are_a_subring() {
        let zz = IntegerRing::new();
        let qq = RationalField::new();
        assert!(zz.is_subring(&qq));
        assert!(qq.is_subring(&qq));
    }
}
