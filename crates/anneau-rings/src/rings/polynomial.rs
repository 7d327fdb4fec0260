//! Univariate polynomial rings `R[x]`.
//!
//! The capabilities of `R[x]` are derived from those of `R` when the ring
//! is built: commutativity, exactness and the noetherian property carry
//! over, a domain gives a domain, and a field gives a principal ideal
//! domain.

use std::fmt;
use std::sync::{Arc, Weak};

use anneau_integers::Integer;

use super::{FractionField, PolynomialQuotientRing};
use crate::capability::Capabilities;
use crate::config::RingConfig;
use crate::conversion::{Conversion, ConvertFrom};
use crate::descriptor::{RingDescriptor, RingInfo};
use crate::error::{Result, RingError};
use crate::ring::{Cardinality, CommutativeRing, FractionFieldSlot, Ring, RingCaches};
use crate::univariate::{self, Polynomial};

/// The ring of univariate polynomials over `R`.
#[derive(Debug)]
pub struct PolynomialRing<R: Ring> {
    base: Arc<R>,
    var: String,
    descriptor: Arc<RingDescriptor>,
    caches: Arc<RingCaches<Polynomial<R::Element>>>,
    // Set on the handle held by the fraction field; points back at the
    // ring that owns the field.
    owner: Weak<Self>,
    fractions: FractionFieldSlot<FractionField<Self>>,
}

impl<R: Ring> PolynomialRing<R> {
    /// Creates `base[var]`.
    #[must_use]
    pub fn new(base: &Arc<R>, var: &str) -> Arc<Self> {
        let base_caps = base.capabilities();
        let mut caps = base_caps
            & (Capabilities::COMMUTATIVE | Capabilities::NOETHERIAN | Capabilities::EXACT);
        if base.is_integral_domain(false).unwrap_or(false) {
            caps |= Capabilities::INTEGRAL_DOMAIN;
        }
        if base.is_field(false).unwrap_or(false) {
            caps |= Capabilities::PRINCIPAL_IDEAL_DOMAIN;
        }

        let info: Arc<dyn RingInfo> = Arc::clone(base) as Arc<dyn RingInfo>;
        let ring = Self {
            base: Arc::clone(base),
            var: var.to_string(),
            descriptor: Arc::new(
                RingDescriptor::provisional(
                    format!("Univariate Polynomial Ring in {var} over {}", base.name()),
                    base.characteristic().clone(),
                )
                .with_base(info),
            ),
            caches: Arc::new(RingCaches::new()),
            owner: Weak::new(),
            fractions: FractionFieldSlot::new(),
        };
        ring.descriptor.finish_closed(caps);
        Arc::new(ring)
    }

    /// The coefficient ring.
    #[must_use]
    pub fn base(&self) -> &Arc<R> {
        &self.base
    }

    /// Name of the variable.
    #[must_use]
    pub fn variable_name(&self) -> &str {
        &self.var
    }

    /// The generator `x`.
    #[must_use]
    pub fn x(&self) -> Polynomial<R::Element> {
        Polynomial::x(self.base.as_ref())
    }

    /// The polynomial with the given coefficients, lowest degree first.
    #[must_use]
    pub fn polynomial(&self, coeffs: Vec<R::Element>) -> Polynomial<R::Element> {
        Polynomial::new(self.base.as_ref(), coeffs)
    }

    /// `self / (modulus)`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidArgument`] for a constant modulus or one
    /// whose leading coefficient is not a unit.
    pub fn quotient_by(
        self: &Arc<Self>,
        modulus: Polynomial<R::Element>,
    ) -> Result<Arc<PolynomialQuotientRing<R>>> {
        PolynomialQuotientRing::new(self, modulus)
    }

    /// The same ring without a fraction-field slot of its own.
    fn numerators(self: &Arc<Self>) -> Arc<Self> {
        Arc::new(Self {
            base: Arc::clone(&self.base),
            var: self.var.clone(),
            descriptor: Arc::clone(&self.descriptor),
            caches: Arc::clone(&self.caches),
            owner: Arc::downgrade(self),
            fractions: FractionFieldSlot::new(),
        })
    }

    fn constant(&self, c: R::Element) -> Polynomial<R::Element> {
        Polynomial::constant(self.base.as_ref(), c)
    }
}

impl<R: Ring> fmt::Display for PolynomialRing<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.descriptor, f)
    }
}

impl<R: Ring> Ring for PolynomialRing<R> {
    type Element = Polynomial<R::Element>;

    fn descriptor(&self) -> &RingDescriptor {
        &self.descriptor
    }

    fn caches(&self) -> &RingCaches<Self::Element> {
        &self.caches
    }

    fn config(&self) -> &RingConfig {
        self.base.config()
    }

    fn from_i64(&self, n: i64) -> Self::Element {
        self.constant(self.base.from_i64(n))
    }

    fn from_integer(&self, n: &Integer) -> Result<Self::Element> {
        self.base.from_integer(n).map(|c| self.constant(c))
    }

    fn add_ref(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        univariate::add(self.base.as_ref(), a, b)
    }

    fn negate(&self, a: &Self::Element) -> Self::Element {
        univariate::negate(self.base.as_ref(), a)
    }

    fn mul_ref(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        univariate::mul(self.base.as_ref(), a, b)
    }

    fn sub_ref(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        univariate::sub(self.base.as_ref(), a, b)
    }

    fn eq_el(&self, a: &Self::Element, b: &Self::Element) -> bool {
        univariate::eq(self.base.as_ref(), a, b)
    }

    fn is_zero(&self, a: &Self::Element) -> bool {
        a.is_zero()
    }

    fn fmt_element(&self, a: &Self::Element, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        univariate::fmt_polynomial(self.base.as_ref(), a, &self.var, f)
    }

    fn normalize_element(&self, x: &Self::Element) -> Result<Self::Element> {
        let coeffs = x
            .coeffs()
            .iter()
            .map(|c| self.base.normalize_element(c))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.polynomial(coeffs))
    }

    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element> {
        if !self.base.is_field(false)? {
            return Err(RingError::NotImplemented(format!("gcd in {}", self.name())));
        }
        univariate::gcd(self.base.as_ref(), a, b).ok_or_else(|| {
            RingError::NotImplemented(format!("gcd in {}: inexact remainder", self.name()))
        })
    }

    fn checked_inverse(&self, a: &Self::Element) -> Option<Self::Element> {
        match a.coeffs() {
            [c] => self.base.checked_inverse(c).map(|inv| self.constant(inv)),
            _ => None,
        }
    }

    fn checked_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        if let [c] = b.coeffs() {
            let coeffs = a
                .coeffs()
                .iter()
                .map(|x| self.base.checked_div(x, c))
                .collect::<Option<Vec<_>>>()?;
            return Some(self.polynomial(coeffs));
        }
        let (quot, rem) = univariate::div_rem(self.base.as_ref(), a, b)?;
        rem.is_zero().then_some(quot)
    }

    fn epsilon_from_base(&self) -> Result<Self::Element> {
        Ok(self.constant(self.base.epsilon()?.clone()))
    }

    /// Roots in `R[x]` of a polynomial with constant coefficients are the
    /// roots in `R`; anything else is beyond reach.
    fn polynomial_roots(&self, p: &Polynomial<Self::Element>) -> Result<Vec<Self::Element>> {
        if p.is_zero() {
            return Err(RingError::InvalidArgument(
                "roots of the zero polynomial".to_string(),
            ));
        }
        let constants = p
            .coeffs()
            .iter()
            .map(|c| match c.coeffs() {
                [] => Some(self.base.zero().clone()),
                [c0] => Some(c0.clone()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                RingError::NotImplemented(format!(
                    "roots over {} with non-constant coefficients",
                    self.name()
                ))
            })?;

        let roots = self.base.polynomial_roots(&self.polynomial(constants))?;
        Ok(roots.into_iter().map(|r| self.constant(r)).collect())
    }

    fn decide_field(&self) -> Option<bool> {
        Some(false)
    }

    fn decide_integral_domain(&self) -> Option<bool> {
        self.base.is_integral_domain(true).ok()
    }

    fn krull_dimension(&self) -> Result<usize> {
        Ok(self.base.krull_dimension()? + 1)
    }

    fn gens(&self) -> Vec<Self::Element> {
        vec![self.x()]
    }

    fn cardinality(&self) -> Cardinality {
        if self.base.is_zero_ring() {
            Cardinality::Finite(Integer::new(1))
        } else {
            Cardinality::Infinite
        }
    }
}

impl<R: CommutativeRing> CommutativeRing for PolynomialRing<R> {
    type FractionField = FractionField<Self>;

    fn fraction_field(self: &Arc<Self>) -> Result<Arc<FractionField<Self>>> {
        if let Some(owner) = self.owner.upgrade() {
            return owner.fraction_field();
        }
        self.fractions
            .get_or_build(self, |ring| Ok(FractionField::new(&ring.numerators())))
    }
}

impl<R: Ring> ConvertFrom<R> for PolynomialRing<R> {
    fn conversion_from(&self, _source: &R) -> Conversion {
        Conversion::Direct
    }

    fn convert(&self, _source: &R, x: &R::Element) -> Result<Self::Element> {
        Ok(self.constant(self.base.normalize_element(x)?))
    }

    fn is_injective_from(&self, _source: &R) -> Result<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Category;
    use crate::ring::DivisionParent;
    use crate::rings::{IntegerModRing, IntegerRing, RationalField, RealDoubleField};
    use anneau_integers::Rational;

    fn q(n: i64) -> Rational {
        Rational::from(n)
    }

    #[test]
    fn test_capabilities_follow_the_base() {
        let qx = PolynomialRing::new(&RationalField::new(), "x");
        assert!(qx.category().is_subcategory_of(Category::PRINCIPAL_IDEAL_DOMAINS));
        assert!(qx.is_exact());
        assert_eq!(qx.is_field(true), Ok(false));
        assert_eq!(qx.name(), "Univariate Polynomial Ring in x over Rational Field");
        assert!(!qx.is_basal());

        let zx = PolynomialRing::new(&IntegerRing::new(), "t");
        assert!(zx.category().is_subcategory_of(Category::INTEGRAL_DOMAINS));
        assert!(!zx.capabilities().contains(Capabilities::PRINCIPAL_IDEAL_DOMAIN));
        assert_eq!(zx.krull_dimension(), Ok(2));

        let z8x = PolynomialRing::new(&IntegerModRing::new(8).unwrap(), "x");
        assert_eq!(z8x.is_integral_domain(true), Ok(false));
        assert_eq!(z8x.cardinality(), Cardinality::Infinite);
    }

    #[test]
    fn test_arithmetic_and_display() {
        let qx = PolynomialRing::new(&RationalField::new(), "x");
        let x = qx.x();
        let p = qx.add_ref(&qx.mul_ref(&x, &x), qx.one());
        assert_eq!(qx.display(&p).to_string(), "x^2 + 1");
        assert_eq!(qx.checked_div(&qx.mul_ref(&p, &x), &x), Some(p.clone()));
        assert_eq!(qx.checked_div(&p, &x), None);
        let half = qx.constant(Rational::from_i64(1, 2));
        assert_eq!(qx.checked_inverse(&qx.from_i64(2)), Some(half));
    }

    #[test]
    fn test_ideal_is_principal_over_a_field() {
        let qx = PolynomialRing::new(&RationalField::new(), "x");
        let x = qx.x();
        let a = qx.mul_ref(&x, &qx.sub_ref(&x, qx.one()));
        let b = qx.mul_ref(&x, &qx.add_ref(&x, qx.one()));
        let ideal = qx.ideal(vec![a, b], Default::default()).unwrap();
        assert_eq!(ideal.gens(), &[x]);
        assert!(ideal.is_principal());
    }

    #[test]
    fn test_roots_delegate_to_base() {
        let qx = PolynomialRing::new(&RationalField::new(), "x");
        assert_eq!(qx.zeta(2), Ok(qx.from_i64(-1)));
        assert_eq!(qx.zeta(3), Err(RingError::NoRootOfUnity(3)));

        let f7x = PolynomialRing::new(&IntegerModRing::new(7).unwrap(), "y");
        assert_eq!(f7x.zeta_all(3), Ok(vec![f7x.from_i64(2), f7x.from_i64(4)]));
    }

    #[test]
    fn test_fraction_field_is_memoized() {
        let qx = PolynomialRing::new(&RationalField::new(), "x");
        let a = qx.fraction_field().unwrap();
        let b = qx.fraction_field().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&a.fraction_field().unwrap(), &a));
        assert_eq!(
            a.name(),
            "Fraction Field of Univariate Polynomial Ring in x over Rational Field"
        );
    }

    #[test]
    fn test_fraction_field_lives_as_long_as_the_ring() {
        let qx = PolynomialRing::new(&RationalField::new(), "x");
        let first = Arc::downgrade(&qx.fraction_field().unwrap());
        assert!(first.upgrade().is_some());

        let again = qx.fraction_field().unwrap();
        assert!(Arc::ptr_eq(&first.upgrade().unwrap(), &again));
        assert!(Arc::ptr_eq(&again.ring().fraction_field().unwrap(), &again));
    }

    #[test]
    fn test_fraction_field_outlives_its_ring() {
        let qq = RationalField::new();
        let field = PolynomialRing::new(&qq, "x").fraction_field().unwrap();
        let x = field.from_ring(field.ring().x());
        let y = field.add_ref(&x, field.one());
        assert!(field.is_one(&field.mul_ref(&y, &field.checked_inverse(&y).unwrap())));
        assert_eq!(field.ring().name(), "Univariate Polynomial Ring in x over Rational Field");
    }

    #[test]
    fn test_dropping_the_ring_drops_its_fraction_field() {
        let qx = PolynomialRing::new(&RationalField::new(), "x");
        let field = Arc::downgrade(&qx.fraction_field().unwrap());
        drop(qx);
        assert!(field.upgrade().is_none());
    }

    #[test]
    fn test_pseudo_fraction_field_falls_back() {
        let z8x = PolynomialRing::new(&IntegerModRing::new(8).unwrap(), "x");
        match z8x.pseudo_fraction_field() {
            DivisionParent::Itself(ring) => assert!(Arc::ptr_eq(&ring, &z8x)),
            DivisionParent::Fractions(_) => panic!("Z/8[x] has no fraction field"),
        }
    }

    #[test]
    fn test_epsilon() {
        let qx = PolynomialRing::new(&RationalField::new(), "x");
        assert!(qx.epsilon().unwrap().is_zero());

        let rx = PolynomialRing::new(&RealDoubleField::new(), "x");
        assert_eq!(rx.epsilon().unwrap().coeffs(), &[f64::EPSILON]);
    }

    #[test]
    fn test_base_embeds() {
        let qq = RationalField::new();
        let qx = PolynomialRing::new(&qq, "x");
        assert!(qq.is_subring(&qx));
        assert_eq!(qx.convert(qq.as_ref(), &q(3)), Ok(qx.from_i64(3)));
    }
}
