//! The ring trait and its generic default operations.
//!
//! Elements are plain values; all arithmetic goes through the parent ring
//! object, which also owns the descriptor and the memoization slots. A ring
//! supplies a handful of element primitives and may override any hook; every
//! other operation has a default driven by the ring's capabilities.

use std::fmt;
use std::sync::{Arc, OnceLock};

use anneau_integers::Integer;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::capability::{Capabilities, Category};
use crate::config::{ExtensionOptions, RingConfig};
use crate::conversion::{self, Conversion, ConvertFrom};
use crate::descriptor::{Characteristic, RingDescriptor, RingInfo};
use crate::error::{Result, RingError};
use crate::ideal::{self, Ideal, IdealConstructor, IdealOptions};
use crate::rings::{PolynomialQuotientRing, PolynomialRing};
use crate::roots::cyclotomic_polynomial;
use crate::univariate::{self, Polynomial};

/// Write-once memoization slots shared by every ring.
pub struct RingCaches<E> {
    zero: OnceLock<E>,
    one: OnceLock<E>,
    epsilon: OnceLock<E>,
}

impl<E> RingCaches<E> {
    /// Empty caches.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            zero: OnceLock::new(),
            one: OnceLock::new(),
            epsilon: OnceLock::new(),
        }
    }
}

impl<E> Default for RingCaches<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for RingCaches<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingCaches")
            .field("zero", &self.zero.get())
            .field("one", &self.one.get())
            .field("epsilon", &self.epsilon.get())
            .finish()
    }
}

/// Number of elements of a ring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cardinality {
    /// Finitely many elements.
    Finite(Integer),
    /// Infinitely many elements.
    Infinite,
    /// Not determined.
    Unknown,
}

/// Primitive roots of unity, either one or all of them.
#[derive(Clone, Debug, PartialEq)]
pub enum RootsOfUnity<E> {
    /// A single primitive root.
    One(E),
    /// Every primitive root found.
    All(Vec<E>),
}

/// Where division of ring elements takes place.
pub enum DivisionParent<F, R> {
    /// The fraction field of the ring.
    Fractions(Arc<F>),
    /// The ring itself, acting as its own division domain.
    Itself(Arc<R>),
}

impl<F: fmt::Debug, R: fmt::Debug> fmt::Debug for DivisionParent<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fractions(field) => f.debug_tuple("Fractions").field(field).finish(),
            Self::Itself(ring) => f.debug_tuple("Itself").field(ring).finish(),
        }
    }
}

/// The defining polynomial of an extension.
#[derive(Clone, Debug)]
pub enum ExtensionModulus<E> {
    /// A polynomial over the ring.
    Polynomial(Polynomial<E>),
    /// Coefficients in ascending degree order.
    Coefficients(Vec<E>),
}

impl<E> From<Polynomial<E>> for ExtensionModulus<E> {
    fn from(poly: Polynomial<E>) -> Self {
        Self::Polynomial(poly)
    }
}

impl<E> From<Vec<E>> for ExtensionModulus<E> {
    fn from(coeffs: Vec<E>) -> Self {
        Self::Coefficients(coeffs)
    }
}

/// Formats an element through its ring.
pub struct DisplayElement<'a, R: Ring> {
    ring: &'a R,
    element: &'a R::Element,
}

impl<R: Ring> fmt::Display for DisplayElement<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ring.fmt_element(self.element, f)
    }
}

/// A ring: a parent object that performs arithmetic on its elements.
///
/// # Required
///
/// [`Ring::descriptor`], [`Ring::caches`], [`Ring::from_i64`],
/// [`Ring::from_integer`], [`Ring::add_ref`], [`Ring::negate`],
/// [`Ring::mul_ref`] and [`Ring::eq_el`].
///
/// # Hooks
///
/// The remaining non-provided methods have conservative defaults
/// (`NotImplemented`, `None`, identity) and are overridden by rings that
/// know better.
pub trait Ring: fmt::Debug + Send + Sync + Sized + 'static {
    /// The element type.
    type Element: Clone + fmt::Debug + Send + Sync + 'static;

    /// Identity and capabilities of this ring.
    fn descriptor(&self) -> &RingDescriptor;

    /// Memoization slots.
    fn caches(&self) -> &RingCaches<Self::Element>;

    /// Limits used by the default algorithms.
    fn config(&self) -> &RingConfig {
        &RingConfig::DEFAULT
    }

    /// The image of a machine integer.
    fn from_i64(&self, n: i64) -> Self::Element;

    /// The image of an arbitrary integer.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::ConstructionError`] if the value has no image.
    fn from_integer(&self, n: &Integer) -> Result<Self::Element>;

    /// `a + b`.
    fn add_ref(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// `-a`.
    fn negate(&self, a: &Self::Element) -> Self::Element;

    /// `a * b`.
    fn mul_ref(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Equality of elements.
    fn eq_el(&self, a: &Self::Element, b: &Self::Element) -> bool;

    /// `a - b`.
    fn sub_ref(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.add_ref(a, &self.negate(b))
    }

    /// True if `a` is zero.
    fn is_zero(&self, a: &Self::Element) -> bool {
        self.eq_el(a, self.zero())
    }

    /// True if `a` is one.
    fn is_one(&self, a: &Self::Element) -> bool {
        self.eq_el(a, self.one())
    }

    /// `a^exp` by binary exponentiation.
    fn power(&self, a: &Self::Element, mut exp: u64) -> Self::Element {
        let mut result = self.one().clone();
        let mut base = a.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul_ref(&result, &base);
            }
            exp >>= 1;
            if exp > 0 {
                base = self.mul_ref(&base, &base);
            }
        }
        result
    }

    /// Writes `a` in human-readable form.
    ///
    /// # Errors
    ///
    /// Propagates formatter errors.
    fn fmt_element(&self, a: &Self::Element, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{a:?}")
    }

    /// A `Display` adapter for `a`.
    fn display<'a>(&'a self, a: &'a Self::Element) -> DisplayElement<'a, Self> {
        DisplayElement {
            ring: self,
            element: a,
        }
    }

    // Hooks

    /// Brings a foreign-built element into canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::ConversionError`] if `x` is not an element.
    fn normalize_element(&self, x: &Self::Element) -> Result<Self::Element> {
        Ok(x.clone())
    }

    /// A greatest common divisor of `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::NotImplemented`] unless the ring provides one.
    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element> {
        let _ = (a, b);
        Err(RingError::NotImplemented(format!("gcd in {}", self.name())))
    }

    /// Unit in the last place at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::NotImplemented`] for rings without one.
    fn ulp(&self, x: &Self::Element) -> Result<Self::Element> {
        let _ = x;
        Err(RingError::NotImplemented(format!("ulp in {}", self.name())))
    }

    /// Unit in the last place of the real part of `x`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::NotImplemented`] for rings without one.
    fn real_part_ulp(&self, x: &Self::Element) -> Result<Self::Element> {
        let _ = x;
        Err(RingError::NotImplemented(format!(
            "real part ulp in {}",
            self.name()
        )))
    }

    /// The base ring's epsilon mapped into this ring.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::NotImplemented`] for basal rings.
    fn epsilon_from_base(&self) -> Result<Self::Element> {
        Err(RingError::NotImplemented(format!(
            "{} has no base ring epsilon",
            self.name()
        )))
    }

    /// Distinct roots of `p` in this ring.
    ///
    /// The default enumerates [`Ring::elements`].
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidArgument`] for the zero polynomial and
    /// [`RingError::NotImplemented`] if the ring cannot be enumerated.
    fn polynomial_roots(&self, p: &Polynomial<Self::Element>) -> Result<Vec<Self::Element>> {
        if p.is_zero() {
            return Err(RingError::InvalidArgument(
                "roots of the zero polynomial".to_string(),
            ));
        }
        match self.elements() {
            Some(elements) => Ok(elements
                .into_iter()
                .filter(|x| self.is_zero(&univariate::eval(self, p, x)))
                .collect()),
            None => Err(RingError::NotImplemented(format!(
                "polynomial roots over {}",
                self.name()
            ))),
        }
    }

    /// Every element, if the ring is finite and small enough to list.
    fn elements(&self) -> Option<Vec<Self::Element>> {
        None
    }

    /// Decides whether the ring is a field, if an algorithm is known.
    fn decide_field(&self) -> Option<bool> {
        None
    }

    /// Decides whether the ring is an integral domain, if an algorithm is known.
    fn decide_integral_domain(&self) -> Option<bool> {
        None
    }

    /// Krull dimension.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::NotImplemented`] unless the ring provides it.
    fn krull_dimension(&self) -> Result<usize> {
        Err(RingError::NotImplemented(format!(
            "Krull dimension of {}",
            self.name()
        )))
    }

    /// Generators of the ring over its base.
    fn gens(&self) -> Vec<Self::Element> {
        vec![self.one().clone()]
    }

    /// Number of elements.
    fn cardinality(&self) -> Cardinality {
        Cardinality::Unknown
    }

    /// True if the ring is its own prime subfield.
    fn is_prime_field(&self) -> bool {
        false
    }

    /// Two-sided inverse of `a`, if it exists and can be found.
    fn checked_inverse(&self, a: &Self::Element) -> Option<Self::Element> {
        if self.is_one(a) || self.eq_el(a, &self.negate(self.one())) {
            Some(a.clone())
        } else {
            None
        }
    }

    /// `a * b^-1`, if `b` is a unit.
    fn checked_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        let inv = self.checked_inverse(b)?;
        Some(self.mul_ref(a, &inv))
    }

    /// The constructor used when [`IdealOptions`] names none.
    fn default_ideal_constructor(&self, ngens: usize) -> IdealConstructor<Self> {
        if ngens == 1 && self.is_commutative() {
            Ideal::principal
        } else {
            Ideal::general
        }
    }

    // Identity and capabilities

    /// Display name.
    fn name(&self) -> &str {
        self.descriptor().name()
    }

    /// The category given by the current capability set.
    fn category(&self) -> Category {
        self.descriptor().category()
    }

    /// The current capability set.
    fn capabilities(&self) -> Capabilities {
        self.descriptor().capabilities()
    }

    /// True if multiplication is known to commute.
    fn is_commutative(&self) -> bool {
        self.capabilities().contains(Capabilities::COMMUTATIVE)
    }

    /// True if the ring is known to be noetherian.
    fn is_noetherian(&self) -> bool {
        self.capabilities().contains(Capabilities::NOETHERIAN)
    }

    /// True if arithmetic is exact.
    fn is_exact(&self) -> bool {
        self.capabilities().contains(Capabilities::EXACT)
    }

    /// True if the ring is known to be finite.
    fn is_finite(&self) -> bool {
        self.capabilities().contains(Capabilities::FINITE)
    }

    /// The characteristic.
    fn characteristic(&self) -> &Characteristic {
        self.descriptor().characteristic()
    }

    /// The ring this one is built over.
    fn base_ring(&self) -> Option<&Arc<dyn RingInfo>> {
        self.descriptor().base()
    }

    /// True if the ring is not built over another ring.
    fn is_basal(&self) -> bool {
        self.base_ring().is_none()
    }

    // Identities

    /// The memoized additive identity.
    fn zero(&self) -> &Self::Element {
        self.caches().zero.get_or_init(|| self.from_i64(0))
    }

    /// The memoized multiplicative identity.
    fn one(&self) -> &Self::Element {
        self.caches().one.get_or_init(|| self.from_i64(1))
    }

    /// True if `one == zero`.
    fn is_zero_ring(&self) -> bool {
        self.eq_el(self.one(), self.zero())
    }

    // Structural tests

    /// Whether the ring is a field.
    ///
    /// A positive answer from an algorithm is recorded in the capabilities.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::Unproven`] if `proof` is set and no algorithm
    /// decides the question.
    fn is_field(&self, proof: bool) -> Result<bool> {
        let caps = self.capabilities();
        if caps.contains(Capabilities::FIELD) {
            return Ok(true);
        }
        if self.is_zero_ring() {
            return Ok(false);
        }
        if caps.contains(Capabilities::INTEGRAL_DOMAIN | Capabilities::FINITE) {
            self.descriptor().refine(Capabilities::FIELD);
            return Ok(true);
        }
        match self.decide_field() {
            Some(true) => {
                self.descriptor().refine(Capabilities::FIELD);
                Ok(true)
            }
            Some(false) => Ok(false),
            None if proof => Err(RingError::Unproven(format!(
                "whether {} is a field",
                self.name()
            ))),
            None => Ok(false),
        }
    }

    /// Whether the ring is an integral domain.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::Unproven`] if `proof` is set and no algorithm
    /// decides the question.
    fn is_integral_domain(&self, proof: bool) -> Result<bool> {
        if self.capabilities().contains(Capabilities::INTEGRAL_DOMAIN) {
            return Ok(true);
        }
        if self.is_zero_ring() {
            return Ok(false);
        }
        if self.is_field(false)? {
            return Ok(true);
        }
        match self.decide_integral_domain() {
            Some(true) => {
                self.descriptor().refine(Capabilities::INTEGRAL_DOMAIN);
                Ok(true)
            }
            Some(false) => Ok(false),
            None if proof => Err(RingError::Unproven(format!(
                "whether {} is an integral domain",
                self.name()
            ))),
            None => Ok(false),
        }
    }

    // Roots of unity

    /// A primitive `n`-th root of unity.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidArgument`] for `n == 0`,
    /// [`RingError::NoRootOfUnity`] if none exists, and propagates root
    /// finding failures.
    fn zeta(&self, n: u64) -> Result<Self::Element> {
        match n {
            0 => Err(RingError::InvalidArgument(
                "root of unity of order 0".to_string(),
            )),
            1 => Ok(self.one().clone()),
            2 => Ok(self.negate(self.one())),
            _ => primitive_roots(self, n)?
                .into_iter()
                .next()
                .ok_or(RingError::NoRootOfUnity(n)),
        }
    }

    /// Every primitive `n`-th root of unity.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::NotIntegralDomain`] if the ring is not an
    /// integral domain, otherwise the errors of [`Ring::zeta`].
    fn zeta_all(&self, n: u64) -> Result<Vec<Self::Element>> {
        if !self.is_integral_domain(false)? {
            return Err(RingError::NotIntegralDomain(self.name().to_string()));
        }
        match n {
            0 | 1 | 2 => self.zeta(n).map(|z| vec![z]),
            _ => {
                let roots = primitive_roots(self, n)?;
                if roots.is_empty() {
                    Err(RingError::NoRootOfUnity(n))
                } else {
                    Ok(roots)
                }
            }
        }
    }

    /// [`Ring::zeta`] or [`Ring::zeta_all`], selected by `all`.
    ///
    /// # Errors
    ///
    /// See the selected operation.
    fn roots_of_unity(&self, n: u64, all: bool) -> Result<RootsOfUnity<Self::Element>> {
        if all {
            self.zeta_all(n).map(RootsOfUnity::All)
        } else {
            self.zeta(n).map(RootsOfUnity::One)
        }
    }

    /// Multiplicative order of [`Ring::zeta`].
    ///
    /// # Errors
    ///
    /// Propagates errors of [`Ring::zeta`] and [`Ring::multiplicative_order`].
    fn zeta_order(&self, n: u64) -> Result<u64> {
        let z = self.zeta(n)?;
        self.multiplicative_order(&z)
    }

    /// Smallest `k >= 1` with `x^k == 1`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InfiniteOrder`] if no such `k` exists within
    /// [`RingConfig::order_search_limit`].
    fn multiplicative_order(&self, x: &Self::Element) -> Result<u64> {
        let limit = self.config().order_search_limit;
        if self.is_zero(x) && !self.is_zero_ring() {
            return Err(RingError::InfiniteOrder(limit));
        }

        let mut acc = x.clone();
        for k in 1..=limit {
            if self.is_one(&acc) {
                return Ok(k);
            }
            acc = self.mul_ref(&acc, x);
        }
        Err(RingError::InfiniteOrder(limit))
    }

    // Precision

    /// The memoized precision of the ring; zero for exact rings.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::Unsupported`] for inexact rings with no way to
    /// measure their precision.
    fn epsilon(&self) -> Result<&Self::Element> {
        if let Some(eps) = self.caches().epsilon.get() {
            return Ok(eps);
        }

        let one = self.one();
        let eps = self
            .ulp(one)
            .or_else(|_| self.real_part_ulp(one))
            .or_else(|_| self.epsilon_from_base())
            .or_else(|err| {
                if self.is_exact() {
                    Ok(self.zero().clone())
                } else {
                    Err(RingError::Unsupported(format!(
                        "epsilon of {}: {err}",
                        self.name()
                    )))
                }
            })?;
        trace!(ring = %self.name(), epsilon = %self.display(&eps), "epsilon computed");
        Ok(self.caches().epsilon.get_or_init(|| eps))
    }

    // Sampling

    /// The image of a uniform integer in `[-bound, bound]`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::ConstructionError`] if the integer has no image.
    fn random_element<G: rand::Rng + ?Sized>(
        &self,
        rng: &mut G,
        bound: u64,
    ) -> Result<Self::Element> {
        let bound = i128::from(bound);
        let n = Integer::from(rng.gen_range(-bound..=bound));
        self.from_integer(&n).map_err(|err| match err {
            RingError::ConstructionError(_) => err,
            other => RingError::ConstructionError(other.to_string()),
        })
    }

    /// [`Ring::random_element`] with the configured default bound.
    ///
    /// # Errors
    ///
    /// See [`Ring::random_element`].
    fn random_element_default<G: rand::Rng + ?Sized>(&self, rng: &mut G) -> Result<Self::Element> {
        self.random_element(rng, self.config().random_bound)
    }

    /// A nonzero random element.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::ConstructionError`] if every attempt drew zero.
    fn random_nonzero_element<G: rand::Rng + ?Sized>(
        &self,
        rng: &mut G,
    ) -> Result<Self::Element> {
        let config = self.config();
        let bound = config.random_bound.max(1);
        for _ in 0..config.nonzero_attempts {
            let x = self.random_element(rng, bound)?;
            if !self.is_zero(&x) {
                return Ok(x);
            }
        }
        Err(RingError::ConstructionError(format!(
            "no nonzero element of {} after {} draws",
            self.name(),
            config.nonzero_attempts
        )))
    }

    // Ideals

    /// The ideal generated by `gens`.
    ///
    /// # Errors
    ///
    /// Propagates normalization failures as [`RingError::ConversionError`].
    fn ideal(
        self: &Arc<Self>,
        gens: Vec<Self::Element>,
        options: IdealOptions<Self>,
    ) -> Result<Ideal<Self>> {
        ideal::build(self, gens, options)
    }

    /// The ideal generated by machine integers.
    ///
    /// # Errors
    ///
    /// See [`Ring::ideal`].
    fn ideal_from_integers(self: &Arc<Self>, gens: &[i64]) -> Result<Ideal<Self>> {
        let gens = gens.iter().map(|&n| self.from_i64(n)).collect();
        self.ideal(gens, IdealOptions::default())
    }

    /// The extension of an ideal of another ring.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::Unsupported`] or [`RingError::Incompatible`] if
    /// the generators cannot be mapped, otherwise the errors of [`Ring::ideal`].
    fn ideal_from_ideal<S: Ring>(
        self: &Arc<Self>,
        other: &Ideal<S>,
        options: IdealOptions<Self>,
    ) -> Result<Ideal<Self>>
    where
        Self: ConvertFrom<S>,
    {
        let gens = conversion::convert_all(self.as_ref(), other.ring().as_ref(), other.gens())?;
        self.ideal(gens, options)
    }

    /// The ideal generated by the generators of another ring.
    ///
    /// # Errors
    ///
    /// See [`Ring::ideal_from_ideal`].
    fn ideal_from_ring<S: Ring>(
        self: &Arc<Self>,
        other: &Arc<S>,
        options: IdealOptions<Self>,
    ) -> Result<Ideal<Self>>
    where
        Self: ConvertFrom<S>,
    {
        let gens = conversion::convert_all(self.as_ref(), other.as_ref(), &other.gens())?;
        self.ideal(gens, options)
    }

    /// The ideal generated by `g`.
    ///
    /// # Errors
    ///
    /// See [`Ring::ideal`].
    fn principal_ideal(self: &Arc<Self>, g: Self::Element) -> Result<Ideal<Self>> {
        self.ideal(vec![g], IdealOptions::default())
    }

    /// The ideal `(0)`.
    ///
    /// # Errors
    ///
    /// See [`Ring::ideal`].
    fn zero_ideal(self: &Arc<Self>) -> Result<Ideal<Self>> {
        self.ideal(Vec::new(), IdealOptions::default())
    }

    /// The ideal `(1)`.
    ///
    /// # Errors
    ///
    /// See [`Ring::ideal`].
    fn unit_ideal(self: &Arc<Self>) -> Result<Ideal<Self>> {
        self.ideal(vec![self.one().clone()], IdealOptions::default())
    }

    // Subrings and extensions

    /// True if `self` embeds into `other` by its conversion map.
    ///
    /// Undecidable cases answer `false`.
    fn is_subring<S>(self: &Arc<Self>, other: &Arc<S>) -> bool
    where
        S: ConvertFrom<Self>,
    {
        if std::ptr::eq(Arc::as_ptr(self).cast::<()>(), Arc::as_ptr(other).cast::<()>()) {
            return true;
        }

        match other.conversion_from(self.as_ref()) {
            Conversion::Direct => {}
            conversion => {
                debug!(from = %self.name(), to = %other.name(), ?conversion, "no embedding");
                return false;
            }
        }

        match other.is_injective_from(self.as_ref()) {
            Ok(injective) => injective,
            Err(err) => {
                debug!(from = %self.name(), to = %other.name(), %err, "subring test undecided");
                false
            }
        }
    }

    /// `self[name] / (modulus)`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::NotImplemented`] for options carrying a value
    /// and [`RingError::InvalidArgument`] for an unusable modulus.
    fn extension(
        self: &Arc<Self>,
        modulus: impl Into<ExtensionModulus<Self::Element>>,
        name: &str,
        options: &ExtensionOptions,
    ) -> Result<Arc<PolynomialQuotientRing<Self>>> {
        options.ensure_unset()?;
        let modulus = match modulus.into() {
            ExtensionModulus::Polynomial(p) => p,
            ExtensionModulus::Coefficients(coeffs) => Polynomial::new(self.as_ref(), coeffs),
        };
        PolynomialRing::new(self, name).quotient_by(modulus)
    }
}

/// Primitive `n`-th roots among the roots of the `n`-th cyclotomic polynomial.
///
/// When the characteristic divides `n`, the cyclotomic polynomial also has
/// roots of smaller order; only those of order exactly `n` are kept.
fn primitive_roots<R: Ring>(ring: &R, n: u64) -> Result<Vec<R::Element>> {
    let limit = ring.config().order_search_limit;
    if n > limit {
        return Err(RingError::InvalidArgument(format!(
            "root of unity of order {n} exceeds the search limit {limit}"
        )));
    }
    let phi = Polynomial::from_integers(ring, &cyclotomic_polynomial(n)?)?;
    let roots = ring.polynomial_roots(&phi)?;
    Ok(roots
        .into_iter()
        .filter(|z| ring.multiplicative_order(z).is_ok_and(|k| k == n))
        .collect())
}

impl<R: Ring> RingInfo for R {
    fn ring_descriptor(&self) -> &RingDescriptor {
        self.descriptor()
    }
}

/// A commutative ring, which has a fraction field when it is a domain.
pub trait CommutativeRing: Ring {
    /// The ring of formal quotients.
    type FractionField: CommutativeRing;

    /// The fraction field; a field is its own.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::NotIntegralDomain`] if the ring is not (known
    /// to be) an integral domain.
    fn fraction_field(self: &Arc<Self>) -> Result<Arc<Self::FractionField>>;

    /// The external division domain used when there is no fraction field.
    fn division_parent(self: &Arc<Self>) -> Arc<Self> {
        Arc::clone(self)
    }

    /// The fraction field, or the division parent if there is none.
    fn pseudo_fraction_field(self: &Arc<Self>) -> DivisionParent<Self::FractionField, Self> {
        match self.fraction_field() {
            Ok(field) => DivisionParent::Fractions(field),
            Err(err) => {
                debug!(ring = %self.name(), %err, "falling back to division parent");
                DivisionParent::Itself(self.division_parent())
            }
        }
    }
}

/// Fraction field of a ring that is its own fraction field when a field.
///
/// # Errors
///
/// Returns [`RingError::NotIntegralDomain`] if `ring` is not a field.
pub fn own_fraction_field<R: Ring>(ring: &Arc<R>) -> Result<Arc<R>> {
    if ring.is_field(false)? {
        Ok(Arc::clone(ring))
    } else {
        Err(RingError::NotIntegralDomain(ring.name().to_string()))
    }
}

/// A memoization slot for a fraction field built over the ring.
///
/// Once built, the field stays in the slot for the lifetime of the ring.
/// The field must not hold the owning ring strongly, or the two never drop.
pub struct FractionFieldSlot<F> {
    field: Mutex<Option<Arc<F>>>,
}

impl<F> FractionFieldSlot<F> {
    /// An empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            field: Mutex::new(None),
        }
    }

    /// The memoized field of `ring`, building it with `build` if needed.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::NotIntegralDomain`] if `ring` is not an integral
    /// domain, and propagates errors of `build`.
    pub fn get_or_build<R: Ring>(
        &self,
        ring: &Arc<R>,
        build: impl FnOnce(&Arc<R>) -> Result<Arc<F>>,
    ) -> Result<Arc<F>> {
        let mut slot = self.field.lock();
        if let Some(field) = slot.as_ref() {
            return Ok(Arc::clone(field));
        }
        if !ring.is_integral_domain(false)? {
            return Err(RingError::NotIntegralDomain(ring.name().to_string()));
        }

        let field = build(ring)?;
        *slot = Some(Arc::clone(&field));
        debug!(ring = %ring.name(), "fraction field built");
        Ok(field)
    }
}

impl<F> Default for FractionFieldSlot<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> fmt::Debug for FractionFieldSlot<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FractionFieldSlot")
            .field("built", &self.field.lock().is_some())
            .finish()
    }
}
