//! Composable ring capabilities and the categories built from them.
//!
//! A ring does not sit at a fixed point of a class lattice. Instead it
//! carries a set of independent [`Capabilities`], and every default
//! algorithm consults that set. A [`Category`] is the same set viewed as a
//! tag that can be joined, compared and named.
//!
//! ```text
//! Rings
//!  └── CommutativeRings
//!       ├── NoetherianRings
//!       └── IntegralDomains
//!            └── DedekindDomains
//!                 └── PrincipalIdealDomains
//!                      └── Fields
//!                           └── FiniteFields
//! ```

use std::fmt;

use bitflags::bitflags;

use crate::error::{Result, RingError};

bitflags! {
    /// Independent mathematical properties a ring may be known to have.
    ///
    /// The empty set is the plain ring capability. Absence of a flag means
    /// "not known", never "known to be false".
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Capabilities: u16 {
        /// Multiplication is commutative.
        const COMMUTATIVE = 1 << 0;
        /// Commutative without zero divisors.
        const INTEGRAL_DOMAIN = 1 << 1;
        /// Every nonzero element is invertible.
        const FIELD = 1 << 2;
        /// Every ideal is finitely generated.
        const NOETHERIAN = 1 << 3;
        /// Arithmetic is exact (no rounding).
        const EXACT = 1 << 4;
        /// Every ideal is principal.
        const PRINCIPAL_IDEAL_DOMAIN = 1 << 5;
        /// Noetherian, integrally closed, Krull dimension at most one.
        const DEDEKIND_DOMAIN = 1 << 6;
        /// Finitely many elements.
        const FINITE = 1 << 7;
    }
}

impl Capabilities {
    /// Checks the laws a capability set must obey.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidCapabilities`] naming the first violated law.
    pub fn validate(self) -> Result<()> {
        let laws = [
            (Self::FIELD, Self::INTEGRAL_DOMAIN, "a field must be an integral domain"),
            (Self::INTEGRAL_DOMAIN, Self::COMMUTATIVE, "an integral domain must be commutative"),
            (
                Self::PRINCIPAL_IDEAL_DOMAIN,
                Self::INTEGRAL_DOMAIN.union(Self::NOETHERIAN),
                "a principal ideal domain must be a noetherian integral domain",
            ),
            (
                Self::DEDEKIND_DOMAIN,
                Self::INTEGRAL_DOMAIN.union(Self::NOETHERIAN),
                "a Dedekind domain must be a noetherian integral domain",
            ),
        ];

        for (flag, required, law) in laws {
            if self.contains(flag) && !self.contains(required) {
                return Err(RingError::InvalidCapabilities(law.to_string()));
            }
        }
        Ok(())
    }

    /// Adds every capability implied by the ones present.
    ///
    /// The result always passes [`Capabilities::validate`].
    #[must_use]
    pub fn closure(self) -> Self {
        let mut caps = self;
        loop {
            let mut next = caps;
            if next.contains(Self::FINITE | Self::INTEGRAL_DOMAIN) {
                next |= Self::FIELD;
            }
            if next.contains(Self::FIELD) {
                next |= Self::PRINCIPAL_IDEAL_DOMAIN;
            }
            if next.contains(Self::PRINCIPAL_IDEAL_DOMAIN) {
                next |= Self::DEDEKIND_DOMAIN;
            }
            if next.contains(Self::DEDEKIND_DOMAIN) {
                next |= Self::INTEGRAL_DOMAIN | Self::NOETHERIAN;
            }
            if next.contains(Self::INTEGRAL_DOMAIN) {
                next |= Self::COMMUTATIVE;
            }
            if next.contains(Self::FINITE) {
                next |= Self::NOETHERIAN;
            }
            if next == caps {
                return caps;
            }
            caps = next;
        }
    }
}

/// A capability set used as a composable category tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Category(Capabilities);

impl Category {
    /// The category of all rings.
    pub const RINGS: Self = Self(Capabilities::empty());
    /// Commutative rings.
    pub const COMMUTATIVE_RINGS: Self = Self(Capabilities::COMMUTATIVE);
    /// Commutative noetherian rings.
    pub const NOETHERIAN_RINGS: Self =
        Self(Capabilities::COMMUTATIVE.union(Capabilities::NOETHERIAN));
    /// Integral domains.
    pub const INTEGRAL_DOMAINS: Self =
        Self(Capabilities::COMMUTATIVE.union(Capabilities::INTEGRAL_DOMAIN));
    /// Dedekind domains.
    pub const DEDEKIND_DOMAINS: Self = Self(
        Self::INTEGRAL_DOMAINS
            .0
            .union(Capabilities::NOETHERIAN)
            .union(Capabilities::DEDEKIND_DOMAIN),
    );
    /// Principal ideal domains.
    pub const PRINCIPAL_IDEAL_DOMAINS: Self =
        Self(Self::DEDEKIND_DOMAINS.0.union(Capabilities::PRINCIPAL_IDEAL_DOMAIN));
    /// Fields.
    pub const FIELDS: Self = Self(Self::PRINCIPAL_IDEAL_DOMAINS.0.union(Capabilities::FIELD));
    /// Finite fields.
    pub const FINITE_FIELDS: Self = Self(Self::FIELDS.0.union(Capabilities::FINITE));

    const NAMED: [(Self, &'static str); 8] = [
        (Self::FINITE_FIELDS, "finite fields"),
        (Self::FIELDS, "fields"),
        (Self::PRINCIPAL_IDEAL_DOMAINS, "principal ideal domains"),
        (Self::DEDEKIND_DOMAINS, "Dedekind domains"),
        (Self::INTEGRAL_DOMAINS, "integral domains"),
        (Self::NOETHERIAN_RINGS, "noetherian rings"),
        (Self::COMMUTATIVE_RINGS, "commutative rings"),
        (Self::RINGS, "rings"),
    ];

    /// Wraps a capability set.
    #[must_use]
    pub const fn of(caps: Capabilities) -> Self {
        Self(caps)
    }

    /// The underlying capability set.
    #[must_use]
    pub const fn capabilities(self) -> Capabilities {
        self.0
    }

    /// The category whose objects have both sets of capabilities.
    #[must_use]
    pub const fn join(self, other: Self) -> Self {
        Self(self.0.union(other.0))
    }

    /// True if every object of `self` is an object of `other`.
    #[must_use]
    pub const fn is_subcategory_of(self, other: Self) -> bool {
        self.0.contains(other.0)
    }

    /// True if objects of this category have all of `caps`.
    #[must_use]
    pub const fn contains(self, caps: Capabilities) -> bool {
        self.0.contains(caps)
    }

    /// Name of the most specific named category containing this one.
    #[must_use]
    pub fn name(self) -> &'static str {
        Self::NAMED
            .iter()
            .find(|(named, _)| self.is_subcategory_of(*named))
            .map_or("rings", |(_, name)| name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        if self.0.contains(Capabilities::FINITE) && !self.is_subcategory_of(Self::FINITE_FIELDS) {
            write!(f, "Category of finite {name}")
        } else {
            write!(f, "Category of {name}")
        }
    }
}

/// Former ring base classes, kept as aliases for their categories.
pub mod deprecated {
    use super::Category;

    /// A ring with a distinguished base ring.
    #[deprecated(since = "0.1.0", note = "use `Category::RINGS` with a base ring")]
    pub const ALGEBRA: Category = Category::RINGS;

    /// A commutative ring with a distinguished base ring.
    #[deprecated(since = "0.1.0", note = "use `Category::COMMUTATIVE_RINGS` with a base ring")]
    pub const COMMUTATIVE_ALGEBRA: Category = Category::COMMUTATIVE_RINGS;

    /// A commutative noetherian ring.
    #[deprecated(since = "0.1.0", note = "use `Category::NOETHERIAN_RINGS`")]
    pub const NOETHERIAN_RING: Category = Category::NOETHERIAN_RINGS;

    /// A Dedekind domain.
    #[deprecated(since = "0.1.0", note = "use `Category::DEDEKIND_DOMAINS`")]
    pub const DEDEKIND_DOMAIN: Category = Category::DEDEKIND_DOMAINS;

    /// A principal ideal domain.
    #[deprecated(since = "0.1.0", note = "use `Category::PRINCIPAL_IDEAL_DOMAINS`")]
    pub const PRINCIPAL_IDEAL_DOMAIN: Category = Category::PRINCIPAL_IDEAL_DOMAINS;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_without_domain_is_rejected() {
        let err = Capabilities::FIELD.validate().unwrap_err();
        assert!(matches!(err, RingError::InvalidCapabilities(_)));
        assert!(Capabilities::INTEGRAL_DOMAIN.validate().is_err());
        assert!((Capabilities::FIELD | Capabilities::INTEGRAL_DOMAIN | Capabilities::COMMUTATIVE)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_any_independent_subset_is_valid() {
        let caps = Capabilities::COMMUTATIVE | Capabilities::EXACT | Capabilities::FINITE;
        assert!(caps.validate().is_ok());
        assert!(Capabilities::empty().validate().is_ok());
    }

    #[test]
    fn test_closure_of_field() {
        let caps = Capabilities::FIELD.closure();
        assert!(caps.contains(
            Capabilities::INTEGRAL_DOMAIN
                | Capabilities::COMMUTATIVE
                | Capabilities::PRINCIPAL_IDEAL_DOMAIN
                | Capabilities::NOETHERIAN
        ));
        assert!(caps.validate().is_ok());
        assert!(!caps.contains(Capabilities::EXACT));
    }

    #[test]
    fn test_finite_domain_closes_to_field() {
        let caps = (Capabilities::FINITE | Capabilities::INTEGRAL_DOMAIN).closure();
        assert!(caps.contains(Capabilities::FIELD));
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::RINGS.to_string(), "Category of rings");
        assert_eq!(Category::FIELDS.to_string(), "Category of fields");
        assert_eq!(Category::FINITE_FIELDS.to_string(), "Category of finite fields");

        let z8 = Category::of(
            Capabilities::COMMUTATIVE | Capabilities::NOETHERIAN | Capabilities::FINITE,
        );
        assert_eq!(z8.to_string(), "Category of finite noetherian rings");
    }

    #[test]
    fn test_subcategories() {
        assert!(Category::FIELDS.is_subcategory_of(Category::INTEGRAL_DOMAINS));
        assert!(Category::FIELDS.is_subcategory_of(Category::RINGS));
        assert!(!Category::COMMUTATIVE_RINGS.is_subcategory_of(Category::FIELDS));
        assert_eq!(
            Category::NOETHERIAN_RINGS.join(Category::INTEGRAL_DOMAINS),
            Category::of(
                Capabilities::COMMUTATIVE
                    | Capabilities::NOETHERIAN
                    | Capabilities::INTEGRAL_DOMAIN
            )
        );
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_aliases() {
        assert_eq!(deprecated::PRINCIPAL_IDEAL_DOMAIN, Category::PRINCIPAL_IDEAL_DOMAINS);
        assert_eq!(deprecated::ALGEBRA, Category::RINGS);
        assert!(deprecated::DEDEKIND_DOMAIN.is_subcategory_of(deprecated::NOETHERIAN_RING));
        assert!(deprecated::COMMUTATIVE_ALGEBRA.is_subcategory_of(Category::RINGS));
    }
}
