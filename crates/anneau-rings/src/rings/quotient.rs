//! Quotients `R[x]/(f)` of univariate polynomial rings.
//!
//! Elements are polynomials of degree below `deg f`. The modulus is stored
//! monic, so reduction never divides in `R`.

use std::fmt;
use std::sync::Arc;

use anneau_integers::Integer;

use super::PolynomialRing;
use crate::capability::Capabilities;
use crate::config::RingConfig;
use crate::conversion::{Conversion, ConvertFrom};
use crate::descriptor::{RingDescriptor, RingInfo};
use crate::error::{Result, RingError};
use crate::ring::{own_fraction_field, Cardinality, CommutativeRing, Ring, RingCaches};
use crate::univariate::{self, Polynomial};

/// The ring `R[x]/(f)` for a non-constant `f` with unit leading coefficient.
#[derive(Debug)]
pub struct PolynomialQuotientRing<R: Ring> {
    ambient: Arc<PolynomialRing<R>>,
    modulus: Polynomial<R::Element>,
    degree: usize,
    var: String,
    descriptor: RingDescriptor,
    caches: RingCaches<Polynomial<R::Element>>,
}

impl<R: Ring> PolynomialQuotientRing<R> {
    /// Creates `ambient / (modulus)`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidArgument`] for a constant modulus or one
    /// whose leading coefficient is not a unit.
    pub fn new(
        ambient: &Arc<PolynomialRing<R>>,
        modulus: Polynomial<R::Element>,
    ) -> Result<Arc<Self>> {
        let base = ambient.base();
        let degree = match modulus.degree() {
            Some(d) if d > 0 => d,
            _ => {
                return Err(RingError::InvalidArgument(format!(
                    "modulus {} is constant",
                    ambient.display(&modulus)
                )))
            }
        };
        let modulus = univariate::monic(base.as_ref(), &modulus).ok_or_else(|| {
            RingError::InvalidArgument(format!(
                "leading coefficient of {} is not a unit",
                ambient.display(&modulus)
            ))
        })?;

        let mut caps = base.capabilities()
            & (Capabilities::COMMUTATIVE
                | Capabilities::NOETHERIAN
                | Capabilities::EXACT
                | Capabilities::FINITE);
        if degree == 1 && base.is_field(false).unwrap_or(false) {
            caps |= Capabilities::FIELD;
        }

        let var = format!("{}bar", ambient.variable_name());
        let name = format!(
            "Univariate Quotient Polynomial Ring in {var} over {} with modulus {}",
            base.name(),
            ambient.display(&modulus)
        );
        let info: Arc<dyn RingInfo> = Arc::clone(base) as Arc<dyn RingInfo>;
        let ring = Self {
            ambient: Arc::clone(ambient),
            modulus,
            degree,
            var,
            descriptor: RingDescriptor::provisional(name, base.characteristic().clone())
                .with_base(info),
            caches: RingCaches::new(),
        };
        ring.descriptor.finish_closed(caps);
        Ok(Arc::new(ring))
    }

    /// The coefficient ring.
    #[must_use]
    pub fn base(&self) -> &Arc<R> {
        self.ambient.base()
    }

    /// The polynomial ring this is a quotient of.
    #[must_use]
    pub fn polynomial_ring(&self) -> &Arc<PolynomialRing<R>> {
        &self.ambient
    }

    /// The monic modulus.
    #[must_use]
    pub fn modulus(&self) -> &Polynomial<R::Element> {
        &self.modulus
    }

    /// Degree of the modulus.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The canonical representative of `a` in the polynomial ring.
    #[must_use]
    pub fn lift(&self, a: &Polynomial<R::Element>) -> Polynomial<R::Element> {
        a.clone()
    }

    /// The class of an arbitrary polynomial.
    #[must_use]
    pub fn reduce(&self, p: Polynomial<R::Element>) -> Polynomial<R::Element> {
        let base = self.base().as_ref();
        let d = self.degree;
        let low = &self.modulus.coeffs()[..d];

        let mut coeffs = p.into_coeffs();
        while coeffs.len() > d {
            let Some(top) = coeffs.pop() else { break };
            let shift = coeffs.len() - d;
            for (j, mj) in low.iter().enumerate() {
                coeffs[shift + j] = base.sub_ref(&coeffs[shift + j], &base.mul_ref(&top, mj));
            }
        }
        Polynomial::new(base, coeffs)
    }

    fn base_is_field(&self) -> bool {
        self.base().is_field(false).unwrap_or(false)
    }

    /// Inverse by the extended Euclidean algorithm over a field.
    fn euclid_inverse(&self, a: &Polynomial<R::Element>) -> Option<Polynomial<R::Element>> {
        let base = self.base().as_ref();
        let (mut r0, mut r1) = (self.modulus.clone(), a.clone());
        let mut s0 = Polynomial::zero();
        let mut s1 = Polynomial::constant(base, base.one().clone());
        while !r1.is_zero() {
            let (q, r) = univariate::div_rem(base, &r0, &r1)?;
            let s = univariate::sub(base, &s0, &univariate::mul(base, &q, &s1));
            (r0, r1) = (r1, r);
            (s0, s1) = (s1, s);
        }

        let [unit] = r0.coeffs() else { return None };
        let inv = base.checked_inverse(unit)?;
        Some(self.reduce(univariate::scale(base, &s0, &inv)))
    }

    /// Field and domain are the same question for `k[x]/(f)`: is `f`
    /// irreducible. A root settles it negatively; without roots, only low
    /// degrees are settled.
    fn decide_irreducible(&self) -> Option<bool> {
        if !self.base_is_field() {
            return None;
        }
        if self.degree == 1 {
            return Some(true);
        }
        match self.base().polynomial_roots(&self.modulus) {
            Ok(roots) if !roots.is_empty() => Some(false),
            Ok(_) if self.degree <= 3 => Some(true),
            _ => None,
        }
    }
}

impl<R: Ring> fmt::Display for PolynomialQuotientRing<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.descriptor, f)
    }
}

impl<R: Ring> Ring for PolynomialQuotientRing<R> {
    type Element = Polynomial<R::Element>;

    fn descriptor(&self) -> &RingDescriptor {
        &self.descriptor
    }

    fn caches(&self) -> &RingCaches<Self::Element> {
        &self.caches
    }

    fn config(&self) -> &RingConfig {
        self.base().config()
    }

    fn from_i64(&self, n: i64) -> Self::Element {
        self.ambient.from_i64(n)
    }

    fn from_integer(&self, n: &Integer) -> Result<Self::Element> {
        self.ambient.from_integer(n)
    }

    fn add_ref(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.ambient.add_ref(a, b)
    }

    fn negate(&self, a: &Self::Element) -> Self::Element {
        self.ambient.negate(a)
    }

    fn mul_ref(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.reduce(self.ambient.mul_ref(a, b))
    }

    fn sub_ref(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.ambient.sub_ref(a, b)
    }

    fn eq_el(&self, a: &Self::Element, b: &Self::Element) -> bool {
        self.ambient.eq_el(a, b)
    }

    fn is_zero(&self, a: &Self::Element) -> bool {
        a.is_zero()
    }

    fn fmt_element(&self, a: &Self::Element, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        univariate::fmt_polynomial(self.base().as_ref(), a, &self.var, f)
    }

    fn normalize_element(&self, x: &Self::Element) -> Result<Self::Element> {
        Ok(self.reduce(self.ambient.normalize_element(x)?))
    }

    fn checked_inverse(&self, a: &Self::Element) -> Option<Self::Element> {
        if a.is_zero() {
            return None;
        }
        if self.base_is_field() {
            return self.euclid_inverse(a);
        }
        match a.coeffs() {
            [c] => self
                .base()
                .checked_inverse(c)
                .map(|inv| Polynomial::constant(self.base().as_ref(), inv)),
            _ => None,
        }
    }

    fn epsilon_from_base(&self) -> Result<Self::Element> {
        self.ambient.epsilon_from_base()
    }

    fn elements(&self) -> Option<Vec<Self::Element>> {
        let digits = self.base().elements()?;
        let q = digits.len();
        let total = u64::try_from(q)
            .ok()?
            .checked_pow(u32::try_from(self.degree).ok()?)?;
        if total > self.config().enumeration_limit {
            return None;
        }

        let base = self.base().as_ref();
        let elements = (0..usize::try_from(total).ok()?)
            .map(|mut index| {
                let coeffs = (0..self.degree)
                    .map(|_| {
                        let digit = digits[index % q].clone();
                        index /= q;
                        digit
                    })
                    .collect();
                Polynomial::new(base, coeffs)
            })
            .collect();
        Some(elements)
    }

    fn decide_field(&self) -> Option<bool> {
        self.decide_irreducible()
    }

    fn decide_integral_domain(&self) -> Option<bool> {
        self.decide_irreducible()
    }

    fn krull_dimension(&self) -> Result<usize> {
        if self.base_is_field() {
            Ok(0)
        } else {
            Err(RingError::NotImplemented(format!(
                "Krull dimension of {}",
                self.name()
            )))
        }
    }

    fn gens(&self) -> Vec<Self::Element> {
        vec![self.reduce(self.ambient.x())]
    }

    fn cardinality(&self) -> Cardinality {
        match self.base().cardinality() {
            Cardinality::Finite(q) => match u32::try_from(self.degree) {
                Ok(d) => Cardinality::Finite(q.pow(d)),
                Err(_) => Cardinality::Unknown,
            },
            other => other,
        }
    }

    fn is_prime_field(&self) -> bool {
        self.degree == 1 && self.base().is_prime_field()
    }
}

impl<R: CommutativeRing> CommutativeRing for PolynomialQuotientRing<R> {
    type FractionField = Self;

    fn fraction_field(self: &Arc<Self>) -> Result<Arc<Self>> {
        own_fraction_field(self)
    }
}

impl<R: Ring> ConvertFrom<R> for PolynomialQuotientRing<R> {
    fn conversion_from(&self, _source: &R) -> Conversion {
        Conversion::Direct
    }

    fn convert(&self, _source: &R, x: &R::Element) -> Result<Self::Element> {
        let c = self.base().normalize_element(x)?;
        Ok(Polynomial::constant(self.base().as_ref(), c))
    }

    fn is_injective_from(&self, _source: &R) -> Result<bool> {
        Ok(true)
    }
}

impl<R: Ring> ConvertFrom<PolynomialRing<R>> for PolynomialQuotientRing<R> {
    fn conversion_from(&self, source: &PolynomialRing<R>) -> Conversion {
        if std::ptr::eq(source, self.ambient.as_ref()) {
            Conversion::Direct
        } else {
            Conversion::Unavailable
        }
    }

    fn convert(
        &self,
        source: &PolynomialRing<R>,
        x: &Polynomial<R::Element>,
    ) -> Result<Self::Element> {
        match self.conversion_from(source) {
            Conversion::Direct => self.normalize_element(x),
            _ => Err(RingError::ConversionError(format!(
                "{} is not the polynomial ring of {}",
                source.name(),
                self.name()
            ))),
        }
    }

    fn is_injective_from(&self, _source: &PolynomialRing<R>) -> Result<bool> {
        Ok(false)
    }
}
