//! # Anneau
//!
//! Ring capabilities for computer algebra in Rust.
//!
//! Rings are parent objects whose algebraic properties are combined from
//! independent capabilities instead of a fixed class hierarchy, so a ring
//! can be noetherian without being a domain, or a domain that only later
//! turns out to be a field.
//!
//! ## Features
//!
//! - **Capabilities**: Commutative, integral domain, field, noetherian, exact
//! - **Lazy Proofs**: Field tests record what they prove on the ring
//! - **Generic Algorithms**: Ideals, fraction fields, roots of unity, precision
//! - **Concrete Rings**: Z, Q, Z/nZ, floats, polynomials, quotients, matrices
//!
//! ## Quick Start
//!
//! ```rust
//! use anneau::prelude::*;
//!
//! let zz = IntegerRing::new();
//! let ideal = zz.ideal_from_integers(&[12, 18]).unwrap();
//! assert_eq!(ideal.gens(), &[Integer::new(6)]);
//!
//! let f7 = zz.quotient(&zz.ideal_from_integers(&[7]).unwrap()).unwrap();
//! assert!(f7.is_field(true).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use anneau_integers as integers;
pub use anneau_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use anneau_integers::{Integer, Rational};
    pub use anneau_rings::{
        Capabilities, Category, CommutativeRing, ConvertFrom, ExtensionOptions, Ideal,
        IdealOptions, IntegerModRing, IntegerRing, PolynomialRing, RationalField, Ring,
        RingError, Side,
    };
}
