//! # anneau-rings
//!
//! Composable ring capabilities for anneau.
//!
//! A ring is a parent object implementing [`Ring`]. It carries a
//! [`RingDescriptor`] with a set of independent [`Capabilities`]
//! (commutative, integral domain, field, noetherian, exact, ...) and the
//! generic algorithms consult that set rather than a fixed class hierarchy.
//! Properties that are proven later, such as a residue ring turning out to
//! be a field, are added to the descriptor as they are discovered.
//!
//! This crate provides:
//! - Capabilities and the named categories built from them
//! - Generic defaults: field tests, ideals, fraction fields, roots of
//!   unity, precision, random elements, subrings and extensions
//! - Concrete rings hosting the defaults: Z, Q, Z/nZ, floats,
//!   polynomial rings and their quotients, fraction fields, matrices
//!
//! ## Example
//!
//! ```
//! use anneau_rings::{IntegerModRing, Ring};
//!
//! let f7 = IntegerModRing::new(7).unwrap();
//! assert!(f7.is_field(true).unwrap());
//! assert_eq!(f7.zeta_all(3).unwrap(), vec![2, 4]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod capability;
pub mod config;
pub mod conversion;
pub mod descriptor;
pub mod error;
pub mod ideal;
pub mod ring;
pub mod rings;
pub mod roots;
pub mod univariate;

#[cfg(test)]
mod proptests;

pub use capability::{Capabilities, Category};
pub use config::{ExtensionOptions, OptionValue, RingConfig};
pub use conversion::{Conversion, ConvertFrom};
pub use descriptor::{Characteristic, RingDescriptor, RingInfo};
pub use error::{Result, RingError};
pub use ideal::{Ideal, IdealKind, IdealOperand, IdealOptions, Side};
pub use ring::{
    Cardinality, CommutativeRing, DivisionParent, ExtensionModulus, Ring, RingCaches,
    RootsOfUnity,
};
pub use rings::{
    Complex, ComplexDoubleField, Fraction, FractionField, IntegerModRing, IntegerRing, Matrix,
    MatrixAlgebra, PolynomialQuotientRing, PolynomialRing, RationalField, RealDoubleField,
};
pub use univariate::Polynomial;
