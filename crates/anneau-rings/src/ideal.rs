//! Ideals and their construction.
//!
//! Construction normalizes the generator list before choosing an ideal
//! class: fields collapse to `(0)` or `(1)`, principal ideal domains fold
//! the generators into a single gcd, and commutative rings only have
//! two-sided ideals.

use std::fmt;
use std::ops::Mul;
use std::sync::Arc;

use tracing::debug;

use crate::capability::Capabilities;
use crate::error::{Result, RingError};
use crate::ring::Ring;

/// Which side an ideal absorbs multiplication from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    /// Closed under multiplication from the left.
    Left,
    /// Closed under multiplication from the right.
    Right,
    /// Closed under multiplication from both sides.
    #[default]
    Twosided,
}

impl Side {
    /// Side of the product `I * J` of ideals with sides `lhs` and `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::IncompatibleSides`] for a right ideal times a
    /// left ideal, which is not an ideal in general.
    pub fn product(lhs: Self, rhs: Self) -> Result<Self> {
        match (lhs, rhs) {
            (Self::Right, Self::Left) => Err(RingError::IncompatibleSides(
                "a right ideal times a left ideal".to_string(),
            )),
            (Self::Left | Self::Twosided, Self::Left) => Ok(Self::Left),
            (Self::Right, Self::Right | Self::Twosided) => Ok(Self::Right),
            (Self::Left | Self::Twosided, Self::Right | Self::Twosided) => Ok(Self::Twosided),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("Left"),
            Self::Right => f.write_str("Right"),
            Self::Twosided => f.write_str("Twosided"),
        }
    }
}

/// The class an ideal was built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdealKind {
    /// Generated by a single element.
    Principal,
    /// Generated by an arbitrary list.
    General,
}

/// Builds an ideal from a finished generator list.
pub type IdealConstructor<R> = fn(&Arc<R>, Vec<<R as Ring>::Element>, Side) -> Ideal<R>;

/// An ideal of a ring, given by generators.
pub struct Ideal<R: Ring> {
    ring: Arc<R>,
    gens: Vec<R::Element>,
    side: Side,
    kind: IdealKind,
}

impl<R: Ring> Ideal<R> {
    /// The principal ideal class.
    #[must_use]
    pub fn principal(ring: &Arc<R>, gens: Vec<R::Element>, side: Side) -> Self {
        Self {
            ring: Arc::clone(ring),
            gens,
            side,
            kind: IdealKind::Principal,
        }
    }

    /// The general ideal class.
    #[must_use]
    pub fn general(ring: &Arc<R>, gens: Vec<R::Element>, side: Side) -> Self {
        Self {
            ring: Arc::clone(ring),
            gens,
            side,
            kind: IdealKind::General,
        }
    }

    /// The ambient ring.
    #[must_use]
    pub fn ring(&self) -> &Arc<R> {
        &self.ring
    }

    /// The generators.
    #[must_use]
    pub fn gens(&self) -> &[R::Element] {
        &self.gens
    }

    /// Consumes the ideal, returning its generators.
    #[must_use]
    pub fn into_gens(self) -> Vec<R::Element> {
        self.gens
    }

    /// Number of generators.
    #[must_use]
    pub fn ngens(&self) -> usize {
        self.gens.len()
    }

    /// The `i`-th generator.
    #[must_use]
    pub fn gen(&self, i: usize) -> Option<&R::Element> {
        self.gens.get(i)
    }

    /// The side.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// The class the ideal was built with.
    #[must_use]
    pub fn kind(&self) -> IdealKind {
        self.kind
    }

    /// True if built as a principal ideal.
    #[must_use]
    pub fn is_principal(&self) -> bool {
        self.kind == IdealKind::Principal
    }

    /// True if every generator is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.gens.iter().all(|g| self.ring.is_zero(g))
    }

    /// True if some generator is one.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.gens.iter().any(|g| self.ring.is_one(g))
    }
}

impl<R: Ring> Clone for Ideal<R> {
    fn clone(&self) -> Self {
        Self {
            ring: Arc::clone(&self.ring),
            gens: self.gens.clone(),
            side: self.side,
            kind: self.kind,
        }
    }
}

impl<R: Ring> PartialEq for Ideal<R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ring, &other.ring)
            && self.side == other.side
            && self.gens.len() == other.gens.len()
            && self
                .gens
                .iter()
                .zip(&other.gens)
                .all(|(a, b)| self.ring.eq_el(a, b))
    }
}

impl<R: Ring> fmt::Debug for Ideal<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ideal")
            .field("ring", &self.ring.name())
            .field("gens", &self.gens)
            .field("side", &self.side)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<R: Ring> fmt::Display for Ideal<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.side) {
            (IdealKind::Principal, _) => f.write_str("Principal ideal (")?,
            (IdealKind::General, Side::Twosided) => f.write_str("Ideal (")?,
            (IdealKind::General, side) => write!(f, "{side} Ideal (")?,
        }
        for (i, g) in self.gens.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", self.ring.display(g))?;
        }
        write!(f, ") of {}", self.ring.name())
    }
}

/// Options for [`Ring::ideal`].
pub struct IdealOptions<R: Ring> {
    /// Normalize generators before use.
    pub coerce: bool,
    /// Requested side; ignored by commutative rings.
    pub side: Side,
    /// Constructor overriding [`Ring::default_ideal_constructor`].
    pub constructor: Option<IdealConstructor<R>>,
}

impl<R: Ring> IdealOptions<R> {
    /// Sets [`IdealOptions::coerce`].
    #[must_use]
    pub fn coerce(mut self, coerce: bool) -> Self {
        self.coerce = coerce;
        self
    }

    /// Sets [`IdealOptions::side`].
    #[must_use]
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Sets [`IdealOptions::constructor`].
    #[must_use]
    pub fn constructor(mut self, constructor: IdealConstructor<R>) -> Self {
        self.constructor = Some(constructor);
        self
    }
}

impl<R: Ring> Default for IdealOptions<R> {
    fn default() -> Self {
        Self {
            coerce: true,
            side: Side::Twosided,
            constructor: None,
        }
    }
}

impl<R: Ring> Clone for IdealOptions<R> {
    fn clone(&self) -> Self {
        Self {
            coerce: self.coerce,
            side: self.side,
            constructor: self.constructor,
        }
    }
}

impl<R: Ring> fmt::Debug for IdealOptions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdealOptions")
            .field("coerce", &self.coerce)
            .field("side", &self.side)
            .field("constructor", &self.constructor.is_some())
            .finish()
    }
}

pub(crate) fn build<R: Ring>(
    ring: &Arc<R>,
    gens: Vec<R::Element>,
    options: IdealOptions<R>,
) -> Result<Ideal<R>> {
    let mut gens = if gens.is_empty() {
        vec![ring.zero().clone()]
    } else {
        gens
    };

    if options.coerce {
        gens = gens
            .iter()
            .map(|g| {
                ring.normalize_element(g).map_err(|err| match err {
                    RingError::ConversionError(_) => err,
                    other => RingError::ConversionError(other.to_string()),
                })
            })
            .collect::<Result<_>>()?;
    }

    let gens = if ring.is_field(false)? {
        if gens.iter().all(|g| ring.is_zero(g)) {
            vec![ring.zero().clone()]
        } else {
            vec![ring.one().clone()]
        }
    } else if ring
        .capabilities()
        .contains(Capabilities::PRINCIPAL_IDEAL_DOMAIN)
    {
        fold_gcd(ring.as_ref(), gens)
    } else {
        gens
    };

    let side = if ring.is_commutative() {
        Side::Twosided
    } else {
        options.side
    };
    let constructor = options
        .constructor
        .unwrap_or_else(|| ring.default_ideal_constructor(gens.len()));
    Ok(constructor(ring, gens, side))
}

/// Replaces `gens` by their gcd; keeps them if any gcd step fails.
fn fold_gcd<R: Ring>(ring: &R, gens: Vec<R::Element>) -> Vec<R::Element> {
    let folded = gens.split_first().map(|(first, rest)| {
        rest.iter()
            .try_fold(ring.gcd(first, first)?, |acc, g| ring.gcd(&acc, g))
    });
    match folded {
        Some(Ok(g)) => vec![g],
        Some(Err(err)) => {
            debug!(ring = %ring.name(), %err, "gcd failed, keeping generators");
            gens
        }
        None => gens,
    }
}

/// The non-ring factor of `ring * x` or `x * ring`.
pub enum IdealOperand<R: Ring> {
    /// Bare generators, which take their side from the ring's position.
    Elements(Vec<R::Element>),
    /// An ideal, which already carries a side.
    Ideal(Ideal<R>),
}

impl<R: Ring> From<Vec<R::Element>> for IdealOperand<R> {
    fn from(gens: Vec<R::Element>) -> Self {
        Self::Elements(gens)
    }
}

impl<R: Ring> From<Ideal<R>> for IdealOperand<R> {
    fn from(ideal: Ideal<R>) -> Self {
        Self::Ideal(ideal)
    }
}

fn ring_times<R: Ring>(ring: &Arc<R>, operand: IdealOperand<R>, ring_on_left: bool) -> Result<Ideal<R>> {
    let (gens, side) = match operand {
        IdealOperand::Elements(gens) => (gens, if ring_on_left { Side::Left } else { Side::Right }),
        IdealOperand::Ideal(ideal) => {
            if !Arc::ptr_eq(ideal.ring(), ring) {
                return Err(RingError::Incompatible {
                    from: ideal.ring().name().to_string(),
                    to: ring.name().to_string(),
                });
            }
            let side = if ring_on_left {
                Side::product(Side::Twosided, ideal.side())?
            } else {
                Side::product(ideal.side(), Side::Twosided)?
            };
            (ideal.into_gens(), side)
        }
    };
    ring.ideal(gens, IdealOptions::default().side(side))
}

impl<R: Ring> Mul<IdealOperand<R>> for &Arc<R> {
    type Output = Result<Ideal<R>>;

    fn mul(self, rhs: IdealOperand<R>) -> Self::Output {
        ring_times(self, rhs, true)
    }
}

impl<R: Ring> Mul<&Arc<R>> for IdealOperand<R> {
    type Output = Result<Ideal<R>>;

    fn mul(self, rhs: &Arc<R>) -> Self::Output {
        ring_times(rhs, self, false)
    }
}

impl<R: Ring> Mul for &Ideal<R> {
    type Output = Result<Ideal<R>>;

    fn mul(self, rhs: Self) -> Self::Output {
        if !Arc::ptr_eq(&self.ring, &rhs.ring) {
            return Err(RingError::Incompatible {
                from: rhs.ring.name().to_string(),
                to: self.ring.name().to_string(),
            });
        }

        let side = Side::product(self.side, rhs.side)?;
        let gens = self
            .gens
            .iter()
            .flat_map(|a| rhs.gens.iter().map(move |b| self.ring.mul_ref(a, b)))
            .collect();
        self.ring.ideal(gens, IdealOptions::default().side(side))
    }
}
