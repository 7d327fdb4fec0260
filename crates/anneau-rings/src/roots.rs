//! Cyclotomic polynomials and exact root searches over Z and Q.

use anneau_integers::{Integer, Rational};
use num_traits::{One, Zero};

use crate::error::{Result, RingError};

/// Coefficients (ascending) of the `n`-th cyclotomic polynomial.
///
/// Uses `Φ_n = ∏_{d | n} (x^d - 1)^μ(n/d)`, multiplying all factors with
/// `μ = 1` before dividing out those with `μ = -1`.
///
/// # Errors
///
/// Returns [`RingError::InvalidArgument`] for `n == 0` or an `n` too large
/// to index coefficients.
pub fn cyclotomic_polynomial(n: u64) -> Result<Vec<Integer>> {
    if n == 0 {
        return Err(RingError::InvalidArgument(
            "cyclotomic polynomial of order 0".to_string(),
        ));
    }
    let too_large = || RingError::InvalidArgument(format!("cyclotomic order {n} is too large"));

    let divisors: Vec<u64> = (1..=n).filter(|d| n % d == 0).collect();
    let mut coeffs = vec![Integer::one()];

    for &d in &divisors {
        if mobius(n / d) == 1 {
            coeffs = mul_by_binomial(&coeffs, usize::try_from(d).map_err(|_| too_large())?);
        }
    }
    for &d in &divisors {
        if mobius(n / d) == -1 {
            coeffs = div_by_binomial(&coeffs, usize::try_from(d).map_err(|_| too_large())?);
        }
    }
    Ok(coeffs)
}

fn mobius(mut m: u64) -> i8 {
    let mut sign = 1;
    let mut p = 2;
    while p <= m / p {
        if m % p == 0 {
            m /= p;
            if m % p == 0 {
                return 0;
            }
            sign = -sign;
        }
        p += 1;
    }
    if m > 1 {
        sign = -sign;
    }
    sign
}

/// `a * (x^d - 1)`.
fn mul_by_binomial(a: &[Integer], d: usize) -> Vec<Integer> {
    let mut out = vec![Integer::zero(); a.len() + d];
    for (i, c) in a.iter().enumerate() {
        out[i + d] = &out[i + d] + c;
        out[i] = &out[i] - c;
    }
    out
}

/// `a / (x^d - 1)`, assuming the division is exact.
fn div_by_binomial(a: &[Integer], d: usize) -> Vec<Integer> {
    let m = a.len() - d;
    let mut q = vec![Integer::zero(); m];
    for j in (0..m).rev() {
        q[j] = if j + d < m {
            &a[j + d] + &q[j + d]
        } else {
            a[j + d].clone()
        };
    }
    q
}

/// Distinct integer roots of a nonzero polynomial, in increasing order.
///
/// Returns `None` if the constant term is too large to enumerate divisors.
#[must_use]
pub fn integer_roots(coeffs: &[Integer]) -> Option<Vec<Integer>> {
    let (has_zero, reduced) = strip_zero_roots(coeffs);
    let mut roots = Vec::new();
    if has_zero {
        roots.push(Integer::zero());
    }

    if reduced.len() > 1 {
        for d in reduced[0].positive_divisors()? {
            for candidate in [-d.clone(), d] {
                if eval_scaled(&reduced, &candidate, &Integer::one()).is_zero() {
                    roots.push(candidate);
                }
            }
        }
    }

    roots.sort();
    Some(roots)
}

/// Distinct rational roots of a nonzero polynomial, in increasing order.
///
/// Clears denominators, then applies the rational root theorem. Returns
/// `None` if a coefficient is too large to enumerate divisors.
#[must_use]
pub fn rational_roots(coeffs: &[Rational]) -> Option<Vec<Rational>> {
    let lcm = coeffs
        .iter()
        .fold(Integer::one(), |acc, c| acc.lcm(&c.denominator()));
    let scaled: Vec<Integer> = coeffs
        .iter()
        .map(|c| c.numerator() * lcm.checked_div_exact(&c.denominator()).unwrap_or_default())
        .collect();

    let (has_zero, reduced) = strip_zero_roots(&scaled);
    let mut roots = Vec::new();
    if has_zero {
        roots.push(Rational::zero());
    }

    if reduced.len() > 1 {
        let leading = reduced.last()?;
        let numerators = reduced[0].positive_divisors()?;
        let denominators = leading.positive_divisors()?;
        for p in &numerators {
            for q in &denominators {
                if !p.gcd(q).is_one() {
                    continue;
                }
                for candidate in [-p.clone(), p.clone()] {
                    if eval_scaled(&reduced, &candidate, q).is_zero() {
                        roots.extend(Rational::new(candidate, q.clone()));
                    }
                }
            }
        }
    }

    roots.sort();
    Some(roots)
}

/// Removes trailing zeros and the factor `x^k`; reports whether `k > 0`.
fn strip_zero_roots(coeffs: &[Integer]) -> (bool, Vec<Integer>) {
    let end = coeffs
        .iter()
        .rposition(|c| !c.is_zero())
        .map_or(0, |i| i + 1);
    let start = coeffs[..end]
        .iter()
        .position(|c| !c.is_zero())
        .unwrap_or(end);
    (start > 0 && start < end, coeffs[start..end].to_vec())
}

/// `q^deg * f(p / q)`, which vanishes iff `p / q` is a root.
fn eval_scaled(coeffs: &[Integer], p: &Integer, q: &Integer) -> Integer {
    let deg = coeffs.len() - 1;
    let mut acc = Integer::zero();
    let mut p_pow = Integer::one();
    let mut q_pows = vec![Integer::one(); deg + 1];
    for i in 1..=deg {
        q_pows[i] = &q_pows[i - 1] * q;
    }
    for (i, c) in coeffs.iter().enumerate() {
        acc = &acc + &(&(c * &p_pow) * &q_pows[deg - i]);
        p_pow = &p_pow * p;
    }
    acc
}
