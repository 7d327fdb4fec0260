//! Residue rings Z/nZ.
//!
//! Elements are canonical residues in `[0, n)`. Whether the ring is a field
//! is not declared up front; the first field test proves it from the
//! primality of `n` and records the result in the capabilities.

use std::fmt;
use std::sync::Arc;

use anneau_integers::{Integer, Modulus};

use super::IntegerRing;
use crate::capability::Capabilities;
use crate::config::RingConfig;
use crate::conversion::{Conversion, ConvertFrom};
use crate::descriptor::{Characteristic, RingDescriptor};
use crate::error::{Result, RingError};
use crate::ring::{own_fraction_field, Cardinality, CommutativeRing, Ring, RingCaches};

/// The ring of integers modulo `n`.
#[derive(Debug)]
pub struct IntegerModRing {
    modulus: Modulus,
    descriptor: RingDescriptor,
    caches: RingCaches<u64>,
    config: RingConfig,
}

impl IntegerModRing {
    /// Creates `Z/nZ` with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidArgument`] for `n == 0`.
    pub fn new(n: u64) -> Result<Arc<Self>> {
        Self::with_config(n, RingConfig::DEFAULT)
    }

    /// Creates `Z/nZ` with custom limits.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidArgument`] for `n == 0`.
    pub fn with_config(n: u64, config: RingConfig) -> Result<Arc<Self>> {
        let modulus = Modulus::new(n)
            .ok_or_else(|| RingError::InvalidArgument("modulus must be positive".to_string()))?;
        let ring = Self {
            modulus,
            descriptor: RingDescriptor::provisional(
                format!("Ring of integers modulo {n}"),
                Characteristic::Known(Integer::from(n)),
            ),
            caches: RingCaches::new(),
            config,
        };
        ring.descriptor.finish(
            Capabilities::COMMUTATIVE
                | Capabilities::NOETHERIAN
                | Capabilities::EXACT
                | Capabilities::FINITE,
        )?;
        Ok(Arc::new(ring))
    }

    /// The modulus `n`.
    #[must_use]
    pub fn order(&self) -> u64 {
        self.modulus.value()
    }
}

impl fmt::Display for IntegerModRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.descriptor, f)
    }
}

impl Ring for IntegerModRing {
    type Element = u64;

    fn descriptor(&self) -> &RingDescriptor {
        &self.descriptor
    }

    fn caches(&self) -> &RingCaches<u64> {
        &self.caches
    }

    fn config(&self) -> &RingConfig {
        &self.config
    }

    fn from_i64(&self, n: i64) -> u64 {
        self.modulus.reduce_signed(n)
    }

    fn from_integer(&self, n: &Integer) -> Result<u64> {
        Ok(self.modulus.reduce_integer(n))
    }

    fn add_ref(&self, a: &u64, b: &u64) -> u64 {
        self.modulus.add(*a, *b)
    }

    fn negate(&self, a: &u64) -> u64 {
        self.modulus.neg(*a)
    }

    fn mul_ref(&self, a: &u64, b: &u64) -> u64 {
        self.modulus.mul(*a, *b)
    }

    fn sub_ref(&self, a: &u64, b: &u64) -> u64 {
        self.modulus.sub(*a, *b)
    }

    fn eq_el(&self, a: &u64, b: &u64) -> bool {
        self.modulus.reduce(*a) == self.modulus.reduce(*b)
    }

    fn power(&self, a: &u64, exp: u64) -> u64 {
        self.modulus.pow(*a, exp)
    }

    fn fmt_element(&self, a: &u64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{a}")
    }

    fn normalize_element(&self, x: &u64) -> Result<u64> {
        Ok(self.modulus.reduce(*x))
    }

    fn checked_inverse(&self, a: &u64) -> Option<u64> {
        self.modulus.inv(*a)
    }

    fn elements(&self) -> Option<Vec<u64>> {
        let n = self.modulus.value();
        (n <= self.config.enumeration_limit).then(|| (0..n).collect())
    }

    fn decide_field(&self) -> Option<bool> {
        Some(self.modulus.is_prime())
    }

    fn decide_integral_domain(&self) -> Option<bool> {
        Some(self.modulus.is_prime())
    }

    fn krull_dimension(&self) -> Result<usize> {
        Ok(0)
    }

    fn cardinality(&self) -> Cardinality {
        Cardinality::Finite(Integer::from(self.modulus.value()))
    }

    fn is_prime_field(&self) -> bool {
        self.modulus.is_prime()
    }
}

impl CommutativeRing for IntegerModRing {
    type FractionField = Self;

    fn fraction_field(self: &Arc<Self>) -> Result<Arc<Self>> {
        own_fraction_field(self)
    }
}

impl ConvertFrom<IntegerRing> for IntegerModRing {
    fn conversion_from(&self, _source: &IntegerRing) -> Conversion {
        Conversion::Direct
    }

    fn convert(&self, _source: &IntegerRing, x: &Integer) -> Result<u64> {
        Ok(self.modulus.reduce_integer(x))
    }

    fn is_injective_from(&self, _source: &IntegerRing) -> Result<bool> {
        Ok(false)
    }
}

impl ConvertFrom<IntegerModRing> for IntegerModRing {
    /// `Z/m -> Z/n` exists when `n | m`.
    fn conversion_from(&self, source: &IntegerModRing) -> Conversion {
        let (n, m) = (self.order(), source.order());
        if m % n == 0 {
            Conversion::Direct
        } else if n % m == 0 {
            Conversion::ReverseOnly
        } else {
            Conversion::Unavailable
        }
    }

    fn convert(&self, source: &IntegerModRing, x: &u64) -> Result<u64> {
        match self.conversion_from(source) {
            Conversion::Direct => Ok(self.modulus.reduce(*x)),
            _ => Err(RingError::ConversionError(format!(
                "{x} of {} has no image in {}",
                source.name(),
                self.name()
            ))),
        }
    }

    fn is_injective_from(&self, source: &IntegerModRing) -> Result<bool> {
        Ok(self.order() == source.order())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Category;
    use crate::ideal::IdealOptions;

    #[test]
    fn test_zero_modulus_rejected() {
        assert!(matches!(
            IntegerModRing::new(0),
            Err(RingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_prime_modulus_is_refined_to_field() {
        let f7 = IntegerModRing::new(7).unwrap();
        assert_eq!(f7.category().to_string(), "Category of finite noetherian rings");
        assert_eq!(f7.is_field(true), Ok(true));
        let expected = Category::FINITE_FIELDS.join(Category::of(Capabilities::EXACT));
        assert_eq!(f7.category(), expected);
        assert!(f7.is_prime_field());
    }

    #[test]
    fn test_composite_modulus() {
        let z8 = IntegerModRing::new(8).unwrap();
        assert_eq!(z8.is_field(true), Ok(false));
        assert_eq!(z8.is_integral_domain(true), Ok(false));
        assert!(matches!(z8.fraction_field(), Err(RingError::NotIntegralDomain(_))));
        assert_eq!(z8.cardinality(), Cardinality::Finite(Integer::new(8)));
    }

    #[test]
    fn test_zeta_all_needs_domain() {
        let z8 = IntegerModRing::new(8).unwrap();
        assert!(matches!(z8.zeta_all(2), Err(RingError::NotIntegralDomain(_))));
        assert_eq!(z8.zeta(2), Ok(7));
    }

    #[test]
    fn test_roots_of_unity_in_prime_field() {
        let f7 = IntegerModRing::new(7).unwrap();
        assert_eq!(f7.zeta_all(3), Ok(vec![2, 4]));
        assert_eq!(f7.zeta(6), Ok(3));
        assert_eq!(f7.zeta_order(6), Ok(6));
        assert_eq!(f7.zeta(4), Err(RingError::NoRootOfUnity(4)));
    }

    #[test]
    fn test_no_root_of_unity_of_the_characteristic() {
        let f3 = IntegerModRing::new(3).unwrap();
        assert_eq!(f3.zeta(3), Err(RingError::NoRootOfUnity(3)));
        assert_eq!(f3.zeta_order(3), Err(RingError::NoRootOfUnity(3)));
        assert_eq!(f3.zeta_all(3), Err(RingError::NoRootOfUnity(3)));
        assert_eq!(f3.zeta(6), Err(RingError::NoRootOfUnity(6)));

        let f2 = IntegerModRing::new(2).unwrap();
        assert_eq!(f2.zeta(4), Err(RingError::NoRootOfUnity(4)));
        assert_eq!(f2.zeta_all(4), Err(RingError::NoRootOfUnity(4)));
        assert_eq!(f2.zeta(2), Ok(1));
    }

    #[test]
    fn test_zero_ring() {
        let z1 = IntegerModRing::new(1).unwrap();
        assert!(z1.is_zero_ring());
        assert_eq!(z1.is_field(true), Ok(false));
        assert_eq!(z1.is_integral_domain(true), Ok(false));
    }

    #[test]
    fn test_conversions_between_moduli() {
        let z8 = IntegerModRing::new(8).unwrap();
        let z4 = IntegerModRing::new(4).unwrap();
        let z3 = IntegerModRing::new(3).unwrap();

        let opts = IdealOptions::default;

        let from_z8 = z4.ideal_from_ideal(&z8.ideal(vec![6], opts()).unwrap(), opts());
        assert_eq!(from_z8.unwrap().gens(), &[2]);

        let from_z4 = z8.ideal_from_ideal(&z4.ideal(vec![2], opts()).unwrap(), opts());
        assert!(matches!(from_z4, Err(RingError::Unsupported(_))));

        let from_z3 = z8.ideal_from_ideal(&z3.ideal(vec![1], opts()).unwrap(), opts());
        assert!(matches!(from_z3, Err(RingError::Incompatible { .. })));
    }

    #[test]
    fn test_subrings() {
        let zz = IntegerRing::new();
        let z8 = IntegerModRing::new(8).unwrap();
        let z4 = IntegerModRing::new(4).unwrap();
        assert!(!zz.is_subring(&z8));
        assert!(!z8.is_subring(&z4));
        assert!(z8.is_subring(&z8));
    }

    #[test]
    fn test_epsilon_of_exact_ring() {
        let z8 = IntegerModRing::new(8).unwrap();
        assert_eq!(z8.epsilon(), Ok(&0));
    }

    #[test]
    fn test_enumeration_limit() {
        let config = RingConfig {
            enumeration_limit: 4,
            ..RingConfig::DEFAULT
        };
        let f7 = IntegerModRing::with_config(7, config).unwrap();
        assert!(f7.elements().is_none());
        assert!(matches!(f7.zeta(3), Err(RingError::NotImplemented(_))));
    }
}
