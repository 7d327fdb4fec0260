//! Formal fraction fields of integral domains.
//!
//! Fractions are kept reduced when the base ring can compute gcds, and
//! compared by cross multiplication, so an unreduced representation never
//! changes equality.

use std::fmt;
use std::sync::Arc;

use anneau_integers::Integer;
use tracing::trace;

use crate::capability::Capabilities;
use crate::config::RingConfig;
use crate::conversion::{Conversion, ConvertFrom};
use crate::descriptor::{RingDescriptor, RingInfo};
use crate::error::{Result, RingError};
use crate::ring::{own_fraction_field, Cardinality, CommutativeRing, Ring, RingCaches};

/// A quotient `num / den` of elements of a domain.
///
/// # Invariants
///
/// - `den` is nonzero
/// - zero is represented with a unit denominator
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction<E> {
    num: E,
    den: E,
}

impl<E> Fraction<E> {
    /// The numerator.
    pub fn numerator(&self) -> &E {
        &self.num
    }

    /// The denominator.
    pub fn denominator(&self) -> &E {
        &self.den
    }
}

/// The field of fractions of a commutative integral domain `R`.
#[derive(Debug)]
pub struct FractionField<R: Ring> {
    ring: Arc<R>,
    descriptor: RingDescriptor,
    caches: RingCaches<Fraction<R::Element>>,
}

impl<R: CommutativeRing> FractionField<R> {
    /// Builds the fraction field of `ring`, which must be a domain.
    pub(crate) fn new(ring: &Arc<R>) -> Arc<Self> {
        let mut caps = Capabilities::FIELD;
        if ring.is_exact() {
            caps |= Capabilities::EXACT;
        }
        let info: Arc<dyn RingInfo> = Arc::clone(ring) as Arc<dyn RingInfo>;
        let field = Self {
            ring: Arc::clone(ring),
            descriptor: RingDescriptor::provisional(
                format!("Fraction Field of {}", ring.name()),
                ring.characteristic().clone(),
            )
            .with_base(info),
            caches: RingCaches::new(),
        };
        field.descriptor.finish_closed(caps);
        Arc::new(field)
    }

    /// The ring of numerators and denominators.
    #[must_use]
    pub fn ring(&self) -> &Arc<R> {
        &self.ring
    }

    /// The fraction `num / den`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::ConversionError`] for a zero denominator.
    pub fn fraction(&self, num: R::Element, den: R::Element) -> Result<Fraction<R::Element>> {
        if self.ring.is_zero(&den) {
            return Err(RingError::ConversionError(format!(
                "{} / 0 in {}",
                self.ring.display(&num),
                self.name()
            )));
        }
        Ok(self.reduce(num, den))
    }

    /// The fraction `x / 1`.
    #[must_use]
    pub fn from_ring(&self, x: R::Element) -> Fraction<R::Element> {
        Fraction {
            num: x,
            den: self.ring.one().clone(),
        }
    }

    /// Cancels common factors and unit denominators.
    fn reduce(&self, num: R::Element, den: R::Element) -> Fraction<R::Element> {
        let ring = self.ring.as_ref();
        if ring.is_zero(&num) {
            return self.from_ring(num);
        }
        if let Some(inv) = ring.checked_inverse(&den) {
            return self.from_ring(ring.mul_ref(&num, &inv));
        }

        match ring.gcd(&num, &den) {
            Ok(g) if !ring.is_zero(&g) && !ring.is_one(&g) => {
                let quotients = (ring.checked_div(&num, &g), ring.checked_div(&den, &g));
                if let (Some(n), Some(d)) = quotients {
                    return match ring.checked_inverse(&d) {
                        Some(inv) => self.from_ring(ring.mul_ref(&n, &inv)),
                        None => Fraction { num: n, den: d },
                    };
                }
            }
            Ok(_) => {}
            Err(err) => trace!(ring = %ring.name(), %err, "fraction left unreduced"),
        }
        Fraction { num, den }
    }
}

impl<R: Ring> fmt::Display for FractionField<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.descriptor, f)
    }
}

impl<R: CommutativeRing> Ring for FractionField<R> {
    type Element = Fraction<R::Element>;

    fn descriptor(&self) -> &RingDescriptor {
        &self.descriptor
    }

    fn caches(&self) -> &RingCaches<Self::Element> {
        &self.caches
    }

    fn config(&self) -> &RingConfig {
        self.ring.config()
    }

    fn from_i64(&self, n: i64) -> Self::Element {
        self.from_ring(self.ring.from_i64(n))
    }

    fn from_integer(&self, n: &Integer) -> Result<Self::Element> {
        self.ring.from_integer(n).map(|x| self.from_ring(x))
    }

    fn add_ref(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let ring = self.ring.as_ref();
        let num = ring.add_ref(&ring.mul_ref(&a.num, &b.den), &ring.mul_ref(&b.num, &a.den));
        self.reduce(num, ring.mul_ref(&a.den, &b.den))
    }

    fn negate(&self, a: &Self::Element) -> Self::Element {
        Fraction {
            num: self.ring.negate(&a.num),
            den: a.den.clone(),
        }
    }

    fn mul_ref(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let ring = self.ring.as_ref();
        self.reduce(ring.mul_ref(&a.num, &b.num), ring.mul_ref(&a.den, &b.den))
    }

    fn eq_el(&self, a: &Self::Element, b: &Self::Element) -> bool {
        let ring = self.ring.as_ref();
        ring.eq_el(&ring.mul_ref(&a.num, &b.den), &ring.mul_ref(&b.num, &a.den))
    }

    fn is_zero(&self, a: &Self::Element) -> bool {
        self.ring.is_zero(&a.num)
    }

    fn fmt_element(&self, a: &Self::Element, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ring.is_one(&a.den) {
            write!(f, "{}", self.ring.display(&a.num))
        } else {
            write!(f, "({})/({})", self.ring.display(&a.num), self.ring.display(&a.den))
        }
    }

    fn normalize_element(&self, x: &Self::Element) -> Result<Self::Element> {
        let num = self.ring.normalize_element(&x.num)?;
        let den = self.ring.normalize_element(&x.den)?;
        self.fraction(num, den)
    }

    fn checked_inverse(&self, a: &Self::Element) -> Option<Self::Element> {
        if self.is_zero(a) {
            None
        } else {
            Some(self.reduce(a.den.clone(), a.num.clone()))
        }
    }

    fn epsilon_from_base(&self) -> Result<Self::Element> {
        Ok(self.from_ring(self.ring.epsilon()?.clone()))
    }

    fn decide_field(&self) -> Option<bool> {
        Some(true)
    }

    fn krull_dimension(&self) -> Result<usize> {
        Ok(0)
    }

    fn gens(&self) -> Vec<Self::Element> {
        self.ring.gens().into_iter().map(|g| self.from_ring(g)).collect()
    }

    fn cardinality(&self) -> Cardinality {
        self.ring.cardinality()
    }
}

impl<R: CommutativeRing> CommutativeRing for FractionField<R> {
    type FractionField = Self;

    fn fraction_field(self: &Arc<Self>) -> Result<Arc<Self>> {
        own_fraction_field(self)
    }
}

impl<R: CommutativeRing> ConvertFrom<R> for FractionField<R> {
    fn conversion_from(&self, _source: &R) -> Conversion {
        Conversion::Direct
    }

    fn convert(&self, _source: &R, x: &R::Element) -> Result<Self::Element> {
        Ok(self.from_ring(self.ring.normalize_element(x)?))
    }

    fn is_injective_from(&self, _source: &R) -> Result<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Category;
    use crate::rings::{IntegerRing, PolynomialRing, RationalField};

    #[test]
    fn test_rational_functions() {
        let qx = PolynomialRing::new(&RationalField::new(), "x");
        let k = qx.fraction_field().unwrap();
        assert!(k.category().is_subcategory_of(Category::FIELDS));
        assert!(k.is_exact());

        let x = qx.x();
        let inv_x = k.fraction(qx.one().clone(), x.clone()).unwrap();
        let sum = k.add_ref(&inv_x, &inv_x);
        assert_eq!(sum, k.fraction(qx.from_i64(2), x.clone()).unwrap());
        assert_eq!(k.display(&sum).to_string(), "(2)/(x)");
        assert!(k.is_one(&k.mul_ref(&inv_x, &k.from_ring(x))));
    }

    #[test]
    fn test_common_factors_cancel() {
        let qx = PolynomialRing::new(&RationalField::new(), "x");
        let k = qx.fraction_field().unwrap();
        let x = qx.x();
        let x_minus_1 = qx.sub_ref(&x, qx.one());
        let x_plus_1 = qx.add_ref(&x, qx.one());

        // (x^2 - 1) / (x - 1) = x + 1
        let f = k.fraction(qx.mul_ref(&x_minus_1, &x_plus_1), x_minus_1).unwrap();
        assert_eq!(f.numerator(), &x_plus_1);
        assert!(qx.is_one(f.denominator()));
    }

    #[test]
    fn test_zero_denominator() {
        let qx = PolynomialRing::new(&RationalField::new(), "x");
        let k = qx.fraction_field().unwrap();
        let err = k.fraction(qx.one().clone(), qx.zero().clone());
        assert!(matches!(err, Err(RingError::ConversionError(_))));
        assert_eq!(k.checked_inverse(k.zero()), None);
    }

    #[test]
    fn test_unreduced_fractions_compare_equal() {
        let zx = PolynomialRing::new(&IntegerRing::new(), "t");
        let k = zx.fraction_field().unwrap();
        let t = zx.x();
        let t2 = zx.mul_ref(&t, &t);
        let a = k.fraction(t2.clone(), t.clone()).unwrap();
        let b = k.from_ring(t);
        assert!(k.eq_el(&a, &b));
        assert_eq!(k.epsilon().map(|e| k.is_zero(e)), Ok(true));
    }

    #[test]
    fn test_ring_embeds() {
        let qx = PolynomialRing::new(&RationalField::new(), "x");
        let k = qx.fraction_field().unwrap();
        assert!(qx.is_subring(&k));
        assert_eq!(k.gens().len(), 1);
    }
}
