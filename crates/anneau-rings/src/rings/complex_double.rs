//! Machine double precision complex numbers.

use std::fmt;
use std::sync::Arc;

use anneau_integers::Integer;

use super::real_double::ulp_of;
use super::{IntegerRing, RealDoubleField};
use crate::capability::Capabilities;
use crate::conversion::{Conversion, ConvertFrom};
use crate::descriptor::{Characteristic, RingDescriptor};
use crate::error::{Result, RingError};
use crate::ring::{own_fraction_field, Cardinality, CommutativeRing, Ring, RingCaches};

/// A complex number with `f64` parts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex {
    /// Creates `re + im*i`.
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

/// The inexact field of [`Complex`] values.
///
/// There is no single ulp for a complex number; precision is measured on
/// the real part only.
#[derive(Debug)]
pub struct ComplexDoubleField {
    descriptor: RingDescriptor,
    caches: RingCaches<Complex>,
}

impl ComplexDoubleField {
    /// Creates the field.
    #[must_use]
    pub fn new() -> Arc<Self> {
        let field = Self {
            descriptor: RingDescriptor::provisional(
                "Complex Double Field",
                Characteristic::zero(),
            ),
            caches: RingCaches::new(),
        };
        field.descriptor.finish_closed(Capabilities::FIELD);
        Arc::new(field)
    }

    /// The imaginary unit.
    #[must_use]
    pub fn i(&self) -> Complex {
        Complex::new(0.0, 1.0)
    }
}

impl fmt::Display for ComplexDoubleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.descriptor, f)
    }
}

impl Ring for ComplexDoubleField {
    type Element = Complex;

    fn descriptor(&self) -> &RingDescriptor {
        &self.descriptor
    }

    fn caches(&self) -> &RingCaches<Complex> {
        &self.caches
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_i64(&self, n: i64) -> Complex {
        Complex::new(n as f64, 0.0)
    }

    fn from_integer(&self, n: &Integer) -> Result<Complex> {
        let re = n.to_f64();
        if re.is_finite() {
            Ok(Complex::new(re, 0.0))
        } else {
            Err(RingError::ConstructionError(format!(
                "{n} is out of range for {}",
                self.name()
            )))
        }
    }

    fn add_ref(&self, a: &Complex, b: &Complex) -> Complex {
        Complex::new(a.re + b.re, a.im + b.im)
    }

    fn negate(&self, a: &Complex) -> Complex {
        Complex::new(-a.re, -a.im)
    }

    fn mul_ref(&self, a: &Complex, b: &Complex) -> Complex {
        Complex::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
    }

    fn eq_el(&self, a: &Complex, b: &Complex) -> bool {
        a == b
    }

    fn fmt_element(&self, a: &Complex, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if a.im < 0.0 {
            write!(f, "{} - {}*I", a.re, -a.im)
        } else {
            write!(f, "{} + {}*I", a.re, a.im)
        }
    }

    fn real_part_ulp(&self, x: &Complex) -> Result<Complex> {
        Ok(Complex::new(ulp_of(x.re)?, 0.0))
    }

    fn checked_inverse(&self, a: &Complex) -> Option<Complex> {
        let norm = a.re * a.re + a.im * a.im;
        (norm != 0.0).then(|| Complex::new(a.re / norm, -a.im / norm))
    }

    fn krull_dimension(&self) -> Result<usize> {
        Ok(0)
    }

    fn cardinality(&self) -> Cardinality {
        Cardinality::Infinite
    }
}

impl CommutativeRing for ComplexDoubleField {
    type FractionField = Self;

    fn fraction_field(self: &Arc<Self>) -> Result<Arc<Self>> {
        own_fraction_field(self)
    }
}

impl ConvertFrom<IntegerRing> for ComplexDoubleField {
    fn conversion_from(&self, _source: &IntegerRing) -> Conversion {
        Conversion::Direct
    }

    fn convert(&self, _source: &IntegerRing, x: &Integer) -> Result<Complex> {
        self.from_integer(x)
            .map_err(|err| RingError::ConversionError(err.to_string()))
    }
}

impl ConvertFrom<RealDoubleField> for ComplexDoubleField {
    fn conversion_from(&self, _source: &RealDoubleField) -> Conversion {
        Conversion::Direct
    }

    fn convert(&self, _source: &RealDoubleField, x: &f64) -> Result<Complex> {
        Ok(Complex::new(*x, 0.0))
    }

    fn is_injective_from(&self, _source: &RealDoubleField) -> Result<bool> {
        Ok(true)
    }
}
