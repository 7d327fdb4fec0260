//! Errors raised by ring operations.
//!
//! Failures that mean "this heuristic did not apply" are handled where they
//! occur and never reach callers; everything here propagates.

use thiserror::Error;

/// Errors that can occur in the ring capability model.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RingError {
    /// The property could not be decided with the available algorithms.
    #[error("unproven: {0}")]
    Unproven(String),

    /// The operation requires an integral domain.
    #[error("{0} is not an integral domain")]
    NotIntegralDomain(String),

    /// No generic default exists; the concrete ring must provide one.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// An element could not be converted into the ring.
    #[error("conversion failed: {0}")]
    ConversionError(String),

    /// An element could not be constructed in the ring.
    #[error("construction failed: {0}")]
    ConstructionError(String),

    /// Two ideal sides cannot be combined into an ideal.
    #[error("incompatible ideal sides: {0}")]
    IncompatibleSides(String),

    /// No conversion map exists in either direction.
    #[error("no conversion between {from} and {to}")]
    Incompatible {
        /// Source ring.
        from: String,
        /// Target ring.
        to: String,
    },

    /// A map exists only in the unsupported direction.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// The ring contains no primitive root of unity of this order.
    #[error("no primitive {0}-th root of unity")]
    NoRootOfUnity(u64),

    /// An option key outside the accepted set.
    #[error("unexpected option `{0}`")]
    UnexpectedOption(String),

    /// The asserted capability set violates a mathematical law.
    #[error("invalid capabilities: {0}")]
    InvalidCapabilities(String),

    /// An argument is outside the operation's domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No finite multiplicative order was found.
    #[error("element has no finite multiplicative order within {0} steps")]
    InfiniteOrder(u64),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RingError>;
