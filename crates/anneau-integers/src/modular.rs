//! Word-sized modular arithmetic.
//!
//! [`Modulus`] carries a runtime modulus `n >= 1` and performs all
//! operations on canonical residues in `[0, n)`. Products go through
//! `u128` so any `u64` modulus is safe.

use crate::Integer;

/// A runtime modulus for residues in `[0, n)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Modulus(u64);

impl Modulus {
    /// Creates a modulus, `None` for zero.
    #[must_use]
    pub const fn new(n: u64) -> Option<Self> {
        if n == 0 {
            None
        } else {
            Some(Self(n))
        }
    }

    /// Returns `n`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Canonical residue of an unsigned value.
    #[must_use]
    pub const fn reduce(self, value: u64) -> u64 {
        value % self.0
    }

    /// Canonical residue of a signed value.
    #[must_use]
    pub fn reduce_signed(self, value: i64) -> u64 {
        let m = i128::from(self.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let r = i128::from(value).rem_euclid(m) as u64;
        r
    }

    /// Canonical residue of an arbitrary precision integer.
    #[must_use]
    pub fn reduce_integer(self, value: &Integer) -> u64 {
        value
            .rem_euclid(&Integer::from(self.0))
            .to_u64()
            .unwrap_or_default()
    }

    /// `a + b mod n`.
    #[must_use]
    pub fn add(self, a: u64, b: u64) -> u64 {
        #[allow(clippy::cast_possible_truncation)]
        let r = ((u128::from(a) + u128::from(b)) % u128::from(self.0)) as u64;
        r
    }

    /// `-a mod n`.
    #[must_use]
    pub fn neg(self, a: u64) -> u64 {
        let a = a % self.0;
        if a == 0 {
            0
        } else {
            self.0 - a
        }
    }

    /// `a - b mod n`.
    #[must_use]
    pub fn sub(self, a: u64, b: u64) -> u64 {
        self.add(a, self.neg(b))
    }

    /// `a * b mod n`.
    #[must_use]
    pub fn mul(self, a: u64, b: u64) -> u64 {
        #[allow(clippy::cast_possible_truncation)]
        let r = ((u128::from(a) * u128::from(b)) % u128::from(self.0)) as u64;
        r
    }

    /// `a^exp mod n` by binary exponentiation.
    #[must_use]
    pub fn pow(self, a: u64, mut exp: u64) -> u64 {
        let mut base = a % self.0;
        let mut result = 1 % self.0;

        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exp >>= 1;
        }

        result
    }

    /// Modular inverse by the extended Euclidean algorithm.
    ///
    /// Returns `None` if `gcd(a, n) != 1`.
    #[must_use]
    pub fn inv(self, a: u64) -> Option<u64> {
        let n = i128::from(self.0);
        let mut t = 0i128;
        let mut new_t = 1i128;
        let mut r = n;
        let mut new_r = i128::from(a % self.0);

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        if r != 1 {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let inv = t.rem_euclid(n) as u64;
        Some(inv)
    }

    /// Greatest common divisor of `a` and `n`.
    #[must_use]
    pub fn gcd_with(self, a: u64) -> u64 {
        gcd_u64(a, self.0)
    }

    /// Deterministic primality test of `n`.
    #[must_use]
    pub fn is_prime(self) -> bool {
        is_prime_u64(self.0)
    }
}

/// Euclidean gcd on words.
#[must_use]
pub fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Deterministic Miller-Rabin for all `u64` values.
#[must_use]
pub fn is_prime_u64(n: u64) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if n < 2 {
        return false;
    }
    for &p in &WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    let m = Modulus(n);
    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for &a in &WITNESSES {
        let mut x = m.pow(a, d);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = m.mul(x, x);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let m = Modulus::new(7).unwrap();

        assert_eq!(m.add(5, 4), 2);
        assert_eq!(m.sub(5, 4), 1);
        assert_eq!(m.sub(4, 5), 6);
        assert_eq!(m.mul(5, 4), 6);
        assert_eq!(m.neg(0), 0);
    }

    #[test]
    fn test_inverse() {
        let m = Modulus::new(7).unwrap();
        assert_eq!(m.inv(3), Some(5));
        assert_eq!(m.inv(0), None);

        let composite = Modulus::new(8).unwrap();
        assert_eq!(composite.inv(2), None);
        assert_eq!(composite.inv(3), Some(3));
    }

    #[test]
    fn test_pow() {
        let m = Modulus::new(7).unwrap();
        assert_eq!(m.pow(3, 0), 1);
        assert_eq!(m.pow(3, 2), 2);
        assert_eq!(m.pow(3, 6), 1);
        assert_eq!(Modulus::new(1).unwrap().pow(3, 0), 0);
    }

    #[test]
    fn test_reduce_signed() {
        let m = Modulus::new(8).unwrap();
        assert_eq!(m.reduce_signed(-1), 7);
        assert_eq!(m.reduce_integer(&Integer::new(-17)), 7);
    }

    #[test]
    fn test_primality() {
        assert!(!is_prime_u64(0));
        assert!(!is_prime_u64(1));
        assert!(is_prime_u64(2));
        assert!(!is_prime_u64(8));
        assert!(is_prime_u64(998_244_353));
        assert!(!is_prime_u64(3_215_031_751));
        assert!(is_prime_u64((1 << 61) - 1));
    }

    #[test]
    fn test_zero_modulus_rejected() {
        assert!(Modulus::new(0).is_none());
    }
}
