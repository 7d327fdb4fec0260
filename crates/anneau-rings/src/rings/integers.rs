//! The ring of integers Z.

use std::fmt;
use std::sync::{Arc, OnceLock};

use anneau_integers::{Integer, Rational};
use num_traits::{One, Zero};

use super::{IntegerModRing, RationalField};
use crate::capability::Capabilities;
use crate::conversion::{Conversion, ConvertFrom};
use crate::descriptor::{Characteristic, RingDescriptor};
use crate::error::{Result, RingError};
use crate::ideal::Ideal;
use crate::ring::{Cardinality, CommutativeRing, Ring, RingCaches};
use crate::roots::integer_roots;
use crate::univariate::Polynomial;

/// The ring of integers.
///
/// A Euclidean domain with exact arithmetic on arbitrary precision
/// [`Integer`]s. Its fraction field is built once and then shared.
#[derive(Debug)]
pub struct IntegerRing {
    descriptor: RingDescriptor,
    caches: RingCaches<Integer>,
    fractions: OnceLock<Arc<RationalField>>,
}

impl IntegerRing {
    /// Creates the ring of integers.
    #[must_use]
    pub fn new() -> Arc<Self> {
        let ring = Self {
            descriptor: RingDescriptor::provisional("Integer Ring", Characteristic::zero()),
            caches: RingCaches::new(),
            fractions: OnceLock::new(),
        };
        ring.descriptor.finish_closed(
            Capabilities::PRINCIPAL_IDEAL_DOMAIN | Capabilities::NOETHERIAN | Capabilities::EXACT,
        );
        Arc::new(ring)
    }

    /// `Z / I` for a nonzero ideal `I`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidArgument`] for the zero ideal, an ideal
    /// with more than one generator, or a modulus that exceeds a word.
    pub fn quotient(self: &Arc<Self>, ideal: &Ideal<Self>) -> Result<Arc<IntegerModRing>> {
        let [g] = ideal.gens() else {
            return Err(RingError::InvalidArgument(format!(
                "quotient by non-principal ideal {ideal}"
            )));
        };
        let n = g.abs().to_u64().ok_or_else(|| {
            RingError::InvalidArgument(format!("modulus {g} does not fit in a word"))
        })?;
        if n == 0 {
            return Err(RingError::InvalidArgument(
                "quotient by the zero ideal".to_string(),
            ));
        }
        IntegerModRing::new(n)
    }
}

impl fmt::Display for IntegerRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.descriptor, f)
    }
}

impl Ring for IntegerRing {
    type Element = Integer;

    fn descriptor(&self) -> &RingDescriptor {
        &self.descriptor
    }

    fn caches(&self) -> &RingCaches<Integer> {
        &self.caches
    }

    fn from_i64(&self, n: i64) -> Integer {
        Integer::new(n)
    }

    fn from_integer(&self, n: &Integer) -> Result<Integer> {
        Ok(n.clone())
    }

    fn add_ref(&self, a: &Integer, b: &Integer) -> Integer {
        a + b
    }

    fn negate(&self, a: &Integer) -> Integer {
        -a
    }

    fn mul_ref(&self, a: &Integer, b: &Integer) -> Integer {
        a * b
    }

    fn sub_ref(&self, a: &Integer, b: &Integer) -> Integer {
        a - b
    }

    fn eq_el(&self, a: &Integer, b: &Integer) -> bool {
        a == b
    }

    fn is_zero(&self, a: &Integer) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Integer) -> bool {
        a.is_one()
    }

    fn fmt_element(&self, a: &Integer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{a}")
    }

    fn gcd(&self, a: &Integer, b: &Integer) -> Result<Integer> {
        Ok(a.gcd(b))
    }

    fn checked_div(&self, a: &Integer, b: &Integer) -> Option<Integer> {
        a.checked_div_exact(b)
    }

    fn polynomial_roots(&self, p: &Polynomial<Integer>) -> Result<Vec<Integer>> {
        if p.is_zero() {
            return Err(RingError::InvalidArgument(
                "roots of the zero polynomial".to_string(),
            ));
        }
        integer_roots(p.coeffs()).ok_or_else(|| {
            RingError::NotImplemented("integer roots with a huge constant term".to_string())
        })
    }

    fn decide_field(&self) -> Option<bool> {
        Some(false)
    }

    fn decide_integral_domain(&self) -> Option<bool> {
        Some(true)
    }

    fn krull_dimension(&self) -> Result<usize> {
        Ok(1)
    }

    fn cardinality(&self) -> Cardinality {
        Cardinality::Infinite
    }
}

impl CommutativeRing for IntegerRing {
    type FractionField = RationalField;

    fn fraction_field(self: &Arc<Self>) -> Result<Arc<RationalField>> {
        Ok(Arc::clone(self.fractions.get_or_init(RationalField::new)))
    }
}

impl ConvertFrom<IntegerRing> for IntegerRing {
    fn conversion_from(&self, _source: &IntegerRing) -> Conversion {
        Conversion::Direct
    }

    fn convert(&self, _source: &IntegerRing, x: &Integer) -> Result<Integer> {
        Ok(x.clone())
    }

    fn is_injective_from(&self, _source: &IntegerRing) -> Result<bool> {
        Ok(true)
    }
}

impl ConvertFrom<RationalField> for IntegerRing {
    fn conversion_from(&self, _source: &RationalField) -> Conversion {
        Conversion::ReverseOnly
    }

    fn convert(&self, _source: &RationalField, x: &Rational) -> Result<Integer> {
        x.to_integer()
            .ok_or_else(|| RingError::ConversionError(format!("{x} is not an integer")))
    }
}
