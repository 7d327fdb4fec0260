//! # anneau-integers
//!
//! Arbitrary precision integer and rational arithmetic for anneau.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//! - Word-sized runtime moduli with primality testing (`Modulus`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod modular;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use modular::{gcd_u64, is_prime_u64, Modulus};
pub use rational::Rational;
