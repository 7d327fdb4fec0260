//! Ring identity and static properties.
//!
//! A [`RingDescriptor`] is built in two phases. It is first allocated with
//! the provisional plain-ring capability set so the ring can already answer
//! "am I a ring" while it is still being assembled (a ring may be queried
//! through its own base chain during construction). The full set is then
//! published once with [`RingDescriptor::finish`]. After that, capabilities
//! only grow, through [`RingDescriptor::refine`], when a property is proven.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};
use std::sync::Arc;

use anneau_integers::Integer;
use tracing::{debug, trace};

use crate::capability::{Capabilities, Category};
use crate::error::{Result, RingError};

/// The characteristic of a ring, fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Characteristic {
    /// A known non-negative integer.
    Known(Integer),
    /// Not determined.
    Unknown,
}

impl Characteristic {
    /// Characteristic zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::Known(Integer::new(0))
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(c) => write!(f, "{c}"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Type-erased view of a ring, enough to follow base-ring chains.
pub trait RingInfo: fmt::Debug + Send + Sync {
    /// The ring's descriptor.
    fn ring_descriptor(&self) -> &RingDescriptor;
}

/// Identity and static properties of a ring instance.
pub struct RingDescriptor {
    name: String,
    base: Option<Arc<dyn RingInfo>>,
    characteristic: Characteristic,
    capabilities: AtomicU16,
    finished: AtomicBool,
}

impl RingDescriptor {
    /// Phase one: a descriptor holding only the plain ring capability.
    #[must_use]
    pub fn provisional(name: impl Into<String>, characteristic: Characteristic) -> Self {
        Self {
            name: name.into(),
            base: None,
            characteristic,
            capabilities: AtomicU16::new(Capabilities::empty().bits()),
            finished: AtomicBool::new(false),
        }
    }

    /// Records the ring this one is built over.
    #[must_use]
    pub fn with_base(mut self, base: Arc<dyn RingInfo>) -> Self {
        self.base = Some(base);
        self
    }

    /// Phase two: validates and publishes the full capability set.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidCapabilities`] if `caps` breaks a
    /// capability law or the set was already published.
    pub fn finish(&self, caps: Capabilities) -> Result<()> {
        caps.validate()?;
        if self.finished.swap(true, Ordering::AcqRel) {
            return Err(RingError::InvalidCapabilities(format!(
                "capabilities of {} were already published",
                self.name
            )));
        }
        self.capabilities.fetch_or(caps.bits(), Ordering::AcqRel);
        trace!(ring = %self.name, ?caps, "capabilities published");
        Ok(())
    }

    /// Publishes the closure of `caps`, which is always law-abiding.
    pub(crate) fn finish_closed(&self, caps: Capabilities) {
        self.finished.store(true, Ordering::Release);
        self.capabilities
            .fetch_or(caps.closure().bits(), Ordering::AcqRel);
    }

    /// Adds a proven capability together with everything it implies.
    pub fn refine(&self, added: Capabilities) {
        let current = self.capabilities();
        let refined = (current | added).closure();
        if refined != current {
            self.capabilities.fetch_or(refined.bits(), Ordering::AcqRel);
            debug!(ring = %self.name, ?added, "capabilities refined");
        }
    }

    /// The current capability set (provisional before phase two).
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::from_bits_truncate(self.capabilities.load(Ordering::Acquire))
    }

    /// The current capability set as a category.
    #[must_use]
    pub fn category(&self) -> Category {
        Category::of(self.capabilities())
    }

    /// True once the full capability set has been published.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }

    /// Display name of the ring.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ring this one is built over, `None` for basal rings.
    #[must_use]
    pub fn base(&self) -> Option<&Arc<dyn RingInfo>> {
        self.base.as_ref()
    }

    /// The characteristic.
    #[must_use]
    pub fn characteristic(&self) -> &Characteristic {
        &self.characteristic
    }
}

impl fmt::Debug for RingDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingDescriptor")
            .field("name", &self.name)
            .field("base", &self.base.as_ref().map(|b| b.ring_descriptor().name()))
            .field("characteristic", &self.characteristic)
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

impl fmt::Display for RingDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provisional_answers_plain_ring() {
        let desc = RingDescriptor::provisional("R", Characteristic::Unknown);
        assert_eq!(desc.category(), Category::RINGS);
        assert!(!desc.is_finished());

        desc.finish(Capabilities::COMMUTATIVE).unwrap();
        assert_eq!(desc.category(), Category::COMMUTATIVE_RINGS);
        assert!(desc.is_finished());
    }

    #[test]
    fn test_finish_rejects_broken_laws() {
        let desc = RingDescriptor::provisional("R", Characteristic::Unknown);
        assert!(desc.finish(Capabilities::FIELD).is_err());
        assert_eq!(desc.category(), Category::RINGS);
    }

    #[test]
    fn test_finish_only_once() {
        let desc = RingDescriptor::provisional("R", Characteristic::zero());
        desc.finish(Capabilities::COMMUTATIVE).unwrap();
        assert!(desc.finish(Capabilities::COMMUTATIVE).is_err());
    }

    #[test]
    fn test_refine_adds_implied_capabilities() {
        let desc = RingDescriptor::provisional("R", Characteristic::zero());
        desc.finish(Capabilities::COMMUTATIVE | Capabilities::EXACT).unwrap();
        desc.refine(Capabilities::FIELD);

        let caps = desc.capabilities();
        assert!(caps.contains(Capabilities::FIELD | Capabilities::INTEGRAL_DOMAIN));
        assert!(caps.contains(Capabilities::EXACT));
        assert!(caps.validate().is_ok());
    }
}
