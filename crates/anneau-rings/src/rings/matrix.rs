//! Full matrix algebras `M_n(R)`.
//!
//! The non-commutative ring of the crate: for `n >= 2` left and right
//! ideals differ, which is what gives [`crate::ideal::Side`] its meaning.

use std::fmt;
use std::sync::Arc;

use anneau_integers::Integer;

use crate::capability::Capabilities;
use crate::config::RingConfig;
use crate::conversion::{Conversion, ConvertFrom};
use crate::descriptor::{RingDescriptor, RingInfo};
use crate::error::{Result, RingError};
use crate::ring::{Cardinality, Ring, RingCaches};

/// A square matrix stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<E> {
    /// Entries in row-major order.
    entries: Vec<E>,
    /// Number of rows and columns.
    n: usize,
}

impl<E> Matrix<E> {
    /// Number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }

    /// The entry in row `i` and column `j`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<&E> {
        if i < self.n && j < self.n {
            self.entries.get(i * self.n + j)
        } else {
            None
        }
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[E]> {
        self.entries.chunks(self.n.max(1))
    }
}

/// The algebra of `n x n` matrices over `R`.
#[derive(Debug)]
pub struct MatrixAlgebra<R: Ring> {
    base: Arc<R>,
    n: usize,
    descriptor: RingDescriptor,
    caches: RingCaches<Matrix<R::Element>>,
}

impl<R: Ring> MatrixAlgebra<R> {
    /// Creates `M_n(base)`.
    ///
    /// `M_1(R)` is `R` itself and inherits all its capabilities; larger
    /// algebras keep only the noetherian property, exactness and finiteness.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidArgument`] for `n == 0`.
    pub fn new(base: &Arc<R>, n: usize) -> Result<Arc<Self>> {
        if n == 0 {
            return Err(RingError::InvalidArgument(
                "matrices must have at least one row".to_string(),
            ));
        }

        let base_caps = base.capabilities();
        let caps = if n == 1 {
            base_caps
        } else {
            base_caps & (Capabilities::NOETHERIAN | Capabilities::EXACT | Capabilities::FINITE)
        };

        let info: Arc<dyn RingInfo> = Arc::clone(base) as Arc<dyn RingInfo>;
        let algebra = Self {
            base: Arc::clone(base),
            n,
            descriptor: RingDescriptor::provisional(
                format!("Full MatrixSpace of {n} by {n} dense matrices over {}", base.name()),
                base.characteristic().clone(),
            )
            .with_base(info),
            caches: RingCaches::new(),
        };
        algebra.descriptor.finish_closed(caps);
        Ok(Arc::new(algebra))
    }

    /// The coefficient ring.
    #[must_use]
    pub fn base(&self) -> &Arc<R> {
        &self.base
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }

    /// `c` times the identity.
    #[must_use]
    pub fn scalar(&self, c: R::Element) -> Matrix<R::Element> {
        let mut entries = vec![self.base.zero().clone(); self.n * self.n];
        for i in 0..self.n {
            entries[i * self.n + i] = c.clone();
        }
        Matrix { entries, n: self.n }
    }

    /// The matrix unit with a one in row `i` and column `j`.
    #[must_use]
    pub fn elementary(&self, i: usize, j: usize) -> Option<Matrix<R::Element>> {
        if i >= self.n || j >= self.n {
            return None;
        }
        let mut entries = vec![self.base.zero().clone(); self.n * self.n];
        entries[i * self.n + j] = self.base.one().clone();
        Some(Matrix { entries, n: self.n })
    }

    /// A matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::ConstructionError`] if the shape is not `n x n`.
    pub fn matrix(&self, rows: Vec<Vec<R::Element>>) -> Result<Matrix<R::Element>> {
        if rows.len() != self.n || rows.iter().any(|row| row.len() != self.n) {
            return Err(RingError::ConstructionError(format!(
                "expected {n} rows of {n} entries for {}",
                self.name(),
                n = self.n
            )));
        }
        Ok(Matrix {
            entries: rows.into_iter().flatten().collect(),
            n: self.n,
        })
    }

    fn zip_with(
        &self,
        a: &Matrix<R::Element>,
        b: &Matrix<R::Element>,
        op: impl Fn(&R::Element, &R::Element) -> R::Element,
    ) -> Matrix<R::Element> {
        Matrix {
            entries: a.entries.iter().zip(&b.entries).map(|(x, y)| op(x, y)).collect(),
            n: self.n,
        }
    }

    /// Inverse by Gauss-Jordan elimination over a field.
    fn gauss_jordan_inverse(&self, a: &Matrix<R::Element>) -> Option<Matrix<R::Element>> {
        let base = self.base.as_ref();
        let n = self.n;

        let mut rows: Vec<Vec<R::Element>> = a
            .rows()
            .enumerate()
            .map(|(i, row)| {
                let mut aug = row.to_vec();
                aug.extend((0..n).map(|j| {
                    if i == j {
                        base.one().clone()
                    } else {
                        base.zero().clone()
                    }
                }));
                aug
            })
            .collect();

        for col in 0..n {
            let pivot = (col..n).find(|&r| !base.is_zero(&rows[r][col]))?;
            rows.swap(col, pivot);

            let inv = base.checked_inverse(&rows[col][col])?;
            for x in &mut rows[col] {
                *x = base.mul_ref(x, &inv);
            }

            let pivot_row = rows[col].clone();
            for (r, row) in rows.iter_mut().enumerate() {
                if r == col || base.is_zero(&row[col]) {
                    continue;
                }
                let factor = row[col].clone();
                for (x, p) in row.iter_mut().zip(&pivot_row) {
                    *x = base.sub_ref(x, &base.mul_ref(&factor, p));
                }
            }
        }

        Some(Matrix {
            entries: rows.into_iter().flat_map(|row| row.into_iter().skip(n)).collect(),
            n,
        })
    }
}

impl<R: Ring> fmt::Display for MatrixAlgebra<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.descriptor, f)
    }
}

impl<R: Ring> Ring for MatrixAlgebra<R> {
    type Element = Matrix<R::Element>;

    fn descriptor(&self) -> &RingDescriptor {
        &self.descriptor
    }

    fn caches(&self) -> &RingCaches<Self::Element> {
        &self.caches
    }

    fn config(&self) -> &RingConfig {
        self.base.config()
    }

    fn from_i64(&self, n: i64) -> Self::Element {
        self.scalar(self.base.from_i64(n))
    }

    fn from_integer(&self, n: &Integer) -> Result<Self::Element> {
        self.base.from_integer(n).map(|c| self.scalar(c))
    }

    fn add_ref(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.zip_with(a, b, |x, y| self.base.add_ref(x, y))
    }

    fn negate(&self, a: &Self::Element) -> Self::Element {
        Matrix {
            entries: a.entries.iter().map(|x| self.base.negate(x)).collect(),
            n: self.n,
        }
    }

    fn mul_ref(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let base = self.base.as_ref();
        let n = self.n;
        let entries = (0..n * n)
            .map(|idx| {
                let (i, j) = (idx / n, idx % n);
                (0..n).fold(base.zero().clone(), |acc, k| {
                    let term = base.mul_ref(&a.entries[i * n + k], &b.entries[k * n + j]);
                    base.add_ref(&acc, &term)
                })
            })
            .collect();
        Matrix { entries, n }
    }

    fn sub_ref(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.zip_with(a, b, |x, y| self.base.sub_ref(x, y))
    }

    fn eq_el(&self, a: &Self::Element, b: &Self::Element) -> bool {
        a.entries.len() == b.entries.len()
            && a.entries.iter().zip(&b.entries).all(|(x, y)| self.base.eq_el(x, y))
    }

    fn fmt_element(&self, a: &Self::Element, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, row) in a.rows().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", self.base.display(x))?;
            }
        }
        f.write_str("]")
    }

    fn normalize_element(&self, x: &Self::Element) -> Result<Self::Element> {
        if x.n != self.n || x.entries.len() != self.n * self.n {
            return Err(RingError::ConversionError(format!(
                "a {0} by {0} matrix is not an element of {1}",
                x.n,
                self.name()
            )));
        }
        let entries = x
            .entries
            .iter()
            .map(|e| self.base.normalize_element(e))
            .collect::<Result<Vec<_>>>()?;
        Ok(Matrix { entries, n: self.n })
    }

    fn checked_inverse(&self, a: &Self::Element) -> Option<Self::Element> {
        if self.base.is_field(false).unwrap_or(false) {
            return self.gauss_jordan_inverse(a);
        }
        if self.n == 1 {
            let inv = self.base.checked_inverse(a.entries.first()?)?;
            return Some(self.scalar(inv));
        }
        (self.is_one(a) || self.eq_el(a, &self.negate(self.one()))).then(|| a.clone())
    }

    fn epsilon_from_base(&self) -> Result<Self::Element> {
        Ok(self.scalar(self.base.epsilon()?.clone()))
    }

    fn decide_field(&self) -> Option<bool> {
        if self.n == 1 {
            self.base.is_field(true).ok()
        } else {
            Some(false)
        }
    }

    fn decide_integral_domain(&self) -> Option<bool> {
        if self.n == 1 {
            self.base.is_integral_domain(true).ok()
        } else {
            Some(false)
        }
    }

    /// The matrix units `E_ij`, which generate `M_n(R)` as an `R`-module.
    fn gens(&self) -> Vec<Self::Element> {
        (0..self.n)
            .flat_map(|i| (0..self.n).map(move |j| (i, j)))
            .filter_map(|(i, j)| self.elementary(i, j))
            .collect()
    }

    fn cardinality(&self) -> Cardinality {
        match self.base.cardinality() {
            Cardinality::Finite(q) => match u32::try_from(self.n * self.n) {
                Ok(e) => Cardinality::Finite(q.pow(e)),
                Err(_) => Cardinality::Unknown,
            },
            other => other,
        }
    }
}

impl<R: Ring> ConvertFrom<R> for MatrixAlgebra<R> {
    fn conversion_from(&self, _source: &R) -> Conversion {
        Conversion::Direct
    }

    fn convert(&self, _source: &R, x: &R::Element) -> Result<Self::Element> {
        Ok(self.scalar(self.base.normalize_element(x)?))
    }

    fn is_injective_from(&self, _source: &R) -> Result<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Category;
    use crate::rings::{IntegerModRing, IntegerRing, RationalField};
    use anneau_integers::Rational;

    fn q(n: i64) -> Rational {
        Rational::from(n)
    }

    #[test]
    fn test_zero_size_rejected() {
        let qq = RationalField::new();
        assert!(matches!(
            MatrixAlgebra::new(&qq, 0),
            Err(RingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_non_commutative() {
        let qq = RationalField::new();
        let m2 = MatrixAlgebra::new(&qq, 2).unwrap();
        assert!(!m2.is_commutative());
        assert_eq!(m2.category(), Category::of(Capabilities::NOETHERIAN | Capabilities::EXACT));
        assert_eq!(m2.is_field(true), Ok(false));
        assert_eq!(m2.is_integral_domain(true), Ok(false));

        let e01 = m2.elementary(0, 1).unwrap();
        let e10 = m2.elementary(1, 0).unwrap();
        assert!(!m2.eq_el(&m2.mul_ref(&e01, &e10), &m2.mul_ref(&e10, &e01)));
        assert!(m2.is_zero(&m2.mul_ref(&e01, &e01)));
        assert_eq!(m2.gens().len(), 4);
    }

    #[test]
    fn test_one_by_one_is_the_base() {
        let f5 = IntegerModRing::new(5).unwrap();
        let m1 = MatrixAlgebra::new(&f5, 1).unwrap();
        assert_eq!(m1.is_field(true), Ok(true));
        assert!(m1.is_commutative());
        assert_eq!(m1.cardinality(), Cardinality::Finite(Integer::new(5)));
    }

    #[test]
    fn test_inverse_over_a_field() {
        let qq = RationalField::new();
        let m2 = MatrixAlgebra::new(&qq, 2).unwrap();
        let a = m2.matrix(vec![vec![q(0), q(1)], vec![q(2), q(3)]]).unwrap();
        let inv = m2.checked_inverse(&a).unwrap();
        assert!(m2.is_one(&m2.mul_ref(&a, &inv)));
        assert!(m2.is_one(&m2.mul_ref(&inv, &a)));

        let singular = m2.matrix(vec![vec![q(1), q(2)], vec![q(2), q(4)]]).unwrap();
        assert_eq!(m2.checked_inverse(&singular), None);
    }

    #[test]
    fn test_display_and_shape() {
        let zz = IntegerRing::new();
        let m2 = MatrixAlgebra::new(&zz, 2).unwrap();
        let z = Integer::new;
        let a = m2.matrix(vec![vec![z(1), z(2)], vec![z(3), z(4)]]).unwrap();
        assert_eq!(m2.display(&a).to_string(), "[1, 2; 3, 4]");
        assert!(matches!(
            m2.matrix(vec![vec![Integer::new(1)]]),
            Err(RingError::ConstructionError(_))
        ));
        assert_eq!(m2.checked_inverse(&m2.from_i64(2)), None);
        assert_eq!(m2.checked_inverse(&m2.from_i64(-1)), Some(m2.from_i64(-1)));
    }

    #[test]
    fn test_scalars_embed() {
        let qq = RationalField::new();
        let m3 = MatrixAlgebra::new(&qq, 3).unwrap();
        assert!(qq.is_subring(&m3));
        assert_eq!(m3.characteristic().to_string(), "0");
        assert!(m3.epsilon().is_ok_and(|e| m3.is_zero(e)));
    }
}
