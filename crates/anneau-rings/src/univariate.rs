//! Dense univariate polynomials over an arbitrary ring.
//!
//! Elements do not know their ring, so every operation takes the ring as
//! an explicit argument and performs coefficient arithmetic through it.

use std::fmt;

use anneau_integers::Integer;

use crate::error::Result;
use crate::ring::Ring;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order.
/// Invariant: no trailing zero coefficients; the zero polynomial is empty.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Polynomial<E> {
    coeffs: Vec<E>,
}

impl<E: Clone> Polynomial<E> {
    /// Creates a polynomial, trimming trailing zeros with `ring`.
    #[must_use]
    pub fn new<R: Ring<Element = E>>(ring: &R, mut coeffs: Vec<E>) -> Self {
        while coeffs.last().is_some_and(|c| ring.is_zero(c)) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// Maps integer coefficients into `ring`.
    ///
    /// # Errors
    ///
    /// Propagates conversion failures of the ring.
    pub fn from_integers<R: Ring<Element = E>>(ring: &R, coeffs: &[Integer]) -> Result<Self> {
        let coeffs = coeffs
            .iter()
            .map(|c| ring.from_integer(c))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(ring, coeffs))
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant<R: Ring<Element = E>>(ring: &R, c: E) -> Self {
        Self::new(ring, vec![c])
    }

    /// The monomial `x`.
    #[must_use]
    pub fn x<R: Ring<Element = E>>(ring: &R) -> Self {
        Self::new(ring, vec![ring.zero().clone(), ring.one().clone()])
    }

    /// Degree, `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// True for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// True if the degree is at most zero.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// All coefficients, lowest degree first.
    #[must_use]
    pub fn coeffs(&self) -> &[E] {
        &self.coeffs
    }

    /// Consumes the polynomial, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<E> {
        self.coeffs
    }

    /// The leading coefficient, `None` for zero.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&E> {
        self.coeffs.last()
    }

    /// The coefficient of `x^i`.
    #[must_use]
    pub fn coeff<R: Ring<Element = E>>(&self, ring: &R, i: usize) -> E {
        self.coeffs
            .get(i)
            .cloned()
            .unwrap_or_else(|| ring.zero().clone())
    }
}

/// Coefficient-wise equality through the ring.
pub fn eq<R: Ring>(ring: &R, a: &Polynomial<R::Element>, b: &Polynomial<R::Element>) -> bool {
    a.coeffs.len() == b.coeffs.len()
        && a.coeffs.iter().zip(&b.coeffs).all(|(x, y)| ring.eq_el(x, y))
}

/// Sum of two polynomials.
pub fn add<R: Ring>(
    ring: &R,
    a: &Polynomial<R::Element>,
    b: &Polynomial<R::Element>,
) -> Polynomial<R::Element> {
    let n = a.coeffs.len().max(b.coeffs.len());
    let coeffs = (0..n)
        .map(|i| match (a.coeffs.get(i), b.coeffs.get(i)) {
            (Some(x), Some(y)) => ring.add_ref(x, y),
            (Some(x), None) | (None, Some(x)) => x.clone(),
            (None, None) => ring.zero().clone(),
        })
        .collect();
    Polynomial::new(ring, coeffs)
}

/// Additive inverse.
pub fn negate<R: Ring>(ring: &R, a: &Polynomial<R::Element>) -> Polynomial<R::Element> {
    Polynomial::new(ring, a.coeffs.iter().map(|c| ring.negate(c)).collect())
}

/// Difference of two polynomials.
pub fn sub<R: Ring>(
    ring: &R,
    a: &Polynomial<R::Element>,
    b: &Polynomial<R::Element>,
) -> Polynomial<R::Element> {
    add(ring, a, &negate(ring, b))
}

/// Schoolbook product.
pub fn mul<R: Ring>(
    ring: &R,
    a: &Polynomial<R::Element>,
    b: &Polynomial<R::Element>,
) -> Polynomial<R::Element> {
    if a.is_zero() || b.is_zero() {
        return Polynomial::zero();
    }

    let mut coeffs = vec![ring.zero().clone(); a.coeffs.len() + b.coeffs.len() - 1];
    for (i, x) in a.coeffs.iter().enumerate() {
        for (j, y) in b.coeffs.iter().enumerate() {
            coeffs[i + j] = ring.add_ref(&coeffs[i + j], &ring.mul_ref(x, y));
        }
    }
    Polynomial::new(ring, coeffs)
}

/// Multiplies every coefficient by `c`.
pub fn scale<R: Ring>(ring: &R, a: &Polynomial<R::Element>, c: &R::Element) -> Polynomial<R::Element> {
    Polynomial::new(ring, a.coeffs.iter().map(|x| ring.mul_ref(c, x)).collect())
}

/// Evaluates at `x` with Horner's method.
pub fn eval<R: Ring>(ring: &R, p: &Polynomial<R::Element>, x: &R::Element) -> R::Element {
    p.coeffs
        .iter()
        .rev()
        .fold(ring.zero().clone(), |acc, c| ring.add_ref(&ring.mul_ref(&acc, x), c))
}

/// Division with remainder by a polynomial with invertible leading coefficient.
///
/// Returns `None` for a zero divisor or a non-invertible leading coefficient.
pub fn div_rem<R: Ring>(
    ring: &R,
    a: &Polynomial<R::Element>,
    b: &Polynomial<R::Element>,
) -> Option<(Polynomial<R::Element>, Polynomial<R::Element>)> {
    let lead_inv = ring.checked_inverse(b.leading_coeff()?)?;
    let db = b.coeffs.len() - 1;

    let mut rem = a.coeffs.clone();
    if rem.len() <= db {
        return Some((Polynomial::zero(), a.clone()));
    }

    let mut quot = vec![ring.zero().clone(); rem.len() - db];
    for k in (0..quot.len()).rev() {
        let c = ring.mul_ref(&rem[k + db], &lead_inv);
        if ring.is_zero(&c) {
            continue;
        }
        for (j, bj) in b.coeffs.iter().enumerate() {
            rem[k + j] = ring.sub_ref(&rem[k + j], &ring.mul_ref(&c, bj));
        }
        quot[k] = c;
    }

    rem.truncate(db);
    Some((Polynomial::new(ring, quot), Polynomial::new(ring, rem)))
}

/// Scales to leading coefficient one, if the leading coefficient is a unit.
pub fn monic<R: Ring>(ring: &R, p: &Polynomial<R::Element>) -> Option<Polynomial<R::Element>> {
    match p.leading_coeff() {
        None => Some(Polynomial::zero()),
        Some(lead) => {
            let inv = ring.checked_inverse(lead)?;
            Some(scale(ring, p, &inv))
        }
    }
}

/// Monic greatest common divisor over a field.
///
/// Returns `None` if a remainder step needs a non-invertible coefficient.
pub fn gcd<R: Ring>(
    ring: &R,
    a: &Polynomial<R::Element>,
    b: &Polynomial<R::Element>,
) -> Option<Polynomial<R::Element>> {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let (_, r) = div_rem(ring, &a, &b)?;
        a = b;
        b = r;
    }
    monic(ring, &a)
}

/// Formats `p` in the variable `var`, highest degree first.
///
/// # Errors
///
/// Propagates formatter errors.
pub fn fmt_polynomial<R: Ring>(
    ring: &R,
    p: &Polynomial<R::Element>,
    var: &str,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    if p.is_zero() {
        return f.write_str("0");
    }

    let mut first = true;
    for (i, c) in p.coeffs.iter().enumerate().rev() {
        if ring.is_zero(c) {
            continue;
        }
        if !first {
            f.write_str(" + ")?;
        }
        first = false;

        let unit = ring.is_one(c) && i > 0;
        if !unit {
            if i > 0 {
                write!(f, "({})*", ring.display(c))?;
            } else {
                write!(f, "{}", ring.display(c))?;
            }
        }
        match i {
            0 => {}
            1 => f.write_str(var)?,
            _ => write!(f, "{var}^{i}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::{IntegerModRing, RationalField};
    use anneau_integers::Rational;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        let qq = RationalField::new();
        let p = Polynomial::new(&*qq, vec![q(1, 1), q(0, 1), q(0, 1)]);
        assert_eq!(p.degree(), Some(0));
        assert!(Polynomial::new(&*qq, vec![q(0, 1)]).is_zero());
    }

    #[test]
    fn test_mul_and_eval() {
        let qq = RationalField::new();
        // (x + 1)(x - 1) = x^2 - 1
        let a = Polynomial::new(&*qq, vec![q(1, 1), q(1, 1)]);
        let b = Polynomial::new(&*qq, vec![q(-1, 1), q(1, 1)]);
        let p = mul(&*qq, &a, &b);
        assert_eq!(p.coeffs(), &[q(-1, 1), q(0, 1), q(1, 1)]);
        assert_eq!(eval(&*qq, &p, &q(3, 1)), q(8, 1));
    }

    #[test]
    fn test_div_rem() {
        let qq = RationalField::new();
        // x^3 + 2 = (x^2 - x + 1)(x + 1) + 1
        let a = Polynomial::new(&*qq, vec![q(2, 1), q(0, 1), q(0, 1), q(1, 1)]);
        let b = Polynomial::new(&*qq, vec![q(1, 1), q(1, 1)]);
        let (quot, rem) = div_rem(&*qq, &a, &b).unwrap();
        assert_eq!(quot.coeffs(), &[q(1, 1), q(-1, 1), q(1, 1)]);
        assert_eq!(rem.coeffs(), &[q(1, 1)]);
    }

    #[test]
    fn test_div_rem_needs_unit_leading_coefficient() {
        let z8 = IntegerModRing::new(8).unwrap();
        let a = Polynomial::new(&*z8, vec![1, 0, 1]);
        let b = Polynomial::new(&*z8, vec![1, 2]);
        assert!(div_rem(&*z8, &a, &b).is_none());
    }

    #[test]
    fn test_gcd_is_monic() {
        let qq = RationalField::new();
        // gcd(2x^2 - 2, 3x - 3) = x - 1
        let a = Polynomial::new(&*qq, vec![q(-2, 1), q(0, 1), q(2, 1)]);
        let b = Polynomial::new(&*qq, vec![q(-3, 1), q(3, 1)]);
        let g = gcd(&*qq, &a, &b).unwrap();
        assert_eq!(g.coeffs(), &[q(-1, 1), q(1, 1)]);
    }
}
