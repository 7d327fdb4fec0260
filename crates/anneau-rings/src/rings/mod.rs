//! Concrete rings.
//!
//! - [`IntegerRing`]: the integers, a Euclidean domain
//! - [`RationalField`]: the rationals, the prime field of characteristic zero
//! - [`IntegerModRing`]: residues modulo `n`, a field exactly when `n` is prime
//! - [`RealDoubleField`] and [`ComplexDoubleField`]: inexact machine floats
//! - [`PolynomialRing`]: univariate polynomials over any ring
//! - [`PolynomialQuotientRing`]: `R[x]/(f)`, the target of [`crate::Ring::extension`]
//! - [`FractionField`]: formal quotients of an integral domain
//! - [`MatrixAlgebra`]: square matrices, the non-commutative example

mod complex_double;
mod fraction_field;
mod integer_mod;
mod integers;
mod matrix;
mod polynomial;
mod quotient;
mod rationals;
mod real_double;

pub use complex_double::{Complex, ComplexDoubleField};
pub use fraction_field::{Fraction, FractionField};
pub use integer_mod::IntegerModRing;
pub use integers::IntegerRing;
pub use matrix::{Matrix, MatrixAlgebra};
pub use polynomial::PolynomialRing;
pub use quotient::PolynomialQuotientRing;
pub use rationals::RationalField;
pub use real_double::RealDoubleField;
