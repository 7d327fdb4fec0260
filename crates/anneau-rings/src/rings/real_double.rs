//! Machine double precision reals.

use std::fmt;
use std::sync::Arc;

use anneau_integers::{Integer, Rational};

use super::{IntegerRing, RationalField};
use crate::capability::Capabilities;
use crate::conversion::{Conversion, ConvertFrom};
use crate::descriptor::{Characteristic, RingDescriptor};
use crate::error::{Result, RingError};
use crate::ring::{own_fraction_field, Cardinality, CommutativeRing, Ring, RingCaches};

/// The inexact field of `f64` values.
#[derive(Debug)]
pub struct RealDoubleField {
    descriptor: RingDescriptor,
    caches: RingCaches<f64>,
}

impl RealDoubleField {
    /// Creates the field.
    #[must_use]
    pub fn new() -> Arc<Self> {
        let field = Self {
            descriptor: RingDescriptor::provisional("Real Double Field", Characteristic::zero()),
            caches: RingCaches::new(),
        };
        field.descriptor.finish_closed(Capabilities::FIELD);
        Arc::new(field)
    }
}

/// Distance from `|x|` to the next larger double.
pub(super) fn ulp_of(x: f64) -> Result<f64> {
    if !x.is_finite() {
        return Err(RingError::InvalidArgument(format!("ulp of {x}")));
    }
    let a = x.abs();
    Ok(f64::from_bits(a.to_bits() + 1) - a)
}

impl fmt::Display for RealDoubleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.descriptor, f)
    }
}

impl Ring for RealDoubleField {
    type Element = f64;

    fn descriptor(&self) -> &RingDescriptor {
        &self.descriptor
    }

    fn caches(&self) -> &RingCaches<f64> {
        &self.caches
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_i64(&self, n: i64) -> f64 {
        n as f64
    }

    fn from_integer(&self, n: &Integer) -> Result<f64> {
        let x = n.to_f64();
        if x.is_finite() {
            Ok(x)
        } else {
            Err(RingError::ConstructionError(format!(
                "{n} is out of range for {}",
                self.name()
            )))
        }
    }

    fn add_ref(&self, a: &f64, b: &f64) -> f64 {
        a + b
    }

    fn negate(&self, a: &f64) -> f64 {
        -a
    }

    fn mul_ref(&self, a: &f64, b: &f64) -> f64 {
        a * b
    }

    fn sub_ref(&self, a: &f64, b: &f64) -> f64 {
        a - b
    }

    #[allow(clippy::float_cmp)]
    fn eq_el(&self, a: &f64, b: &f64) -> bool {
        a == b
    }

    fn fmt_element(&self, a: &f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{a}")
    }

    fn ulp(&self, x: &f64) -> Result<f64> {
        ulp_of(*x)
    }

    fn checked_inverse(&self, a: &f64) -> Option<f64> {
        (*a != 0.0).then(|| a.recip())
    }

    fn krull_dimension(&self) -> Result<usize> {
        Ok(0)
    }

    fn cardinality(&self) -> Cardinality {
        Cardinality::Infinite
    }
}

impl CommutativeRing for RealDoubleField {
    type FractionField = Self;

    fn fraction_field(self: &Arc<Self>) -> Result<Arc<Self>> {
        own_fraction_field(self)
    }
}

impl ConvertFrom<IntegerRing> for RealDoubleField {
    fn conversion_from(&self, _source: &IntegerRing) -> Conversion {
        Conversion::Direct
    }

    fn convert(&self, _source: &IntegerRing, x: &Integer) -> Result<f64> {
        self.from_integer(x)
            .map_err(|err| RingError::ConversionError(err.to_string()))
    }
}

impl ConvertFrom<RationalField> for RealDoubleField {
    fn conversion_from(&self, _source: &RationalField) -> Conversion {
        Conversion::Direct
    }

    fn convert(&self, _source: &RationalField, x: &Rational) -> Result<f64> {
        Ok(x.to_f64())
    }
}
