//! Tunable limits and operation options.

use crate::error::{Result, RingError};

/// Limits used by the default algorithms of a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingConfig {
    /// Default bound for [`crate::Ring::random_element_default`].
    pub random_bound: u64,
    /// Draws attempted by [`crate::Ring::random_nonzero_element`].
    pub nonzero_attempts: usize,
    /// Largest multiplicative order searched before giving up.
    pub order_search_limit: u64,
    /// Largest ring (or extension) enumerated by brute-force root search.
    pub enumeration_limit: u64,
}

impl RingConfig {
    /// The defaults shared by all rings.
    pub const DEFAULT: Self = Self {
        random_bound: 2,
        nonzero_attempts: 64,
        order_search_limit: 1 << 16,
        enumeration_limit: 1 << 20,
    };
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A value supplied for an extension option.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum OptionValue {
    /// No value given.
    #[default]
    Unset,
    /// A textual value.
    Text(String),
    /// An integral value, e.g. a precision.
    Integer(i64),
    /// A boolean switch.
    Flag(bool),
}

impl OptionValue {
    /// True for [`OptionValue::Unset`].
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

/// Auxiliary options accepted by [`crate::Ring::extension`].
///
/// Only unset values are honoured for now; a concrete value for any key
/// is rejected as not implemented.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtensionOptions {
    /// Structure maps to attach.
    pub structure: OptionValue,
    /// Backend implementation to use.
    pub implementation: OptionValue,
    /// Working precision.
    pub prec: OptionValue,
    /// Embedding of the generator.
    pub embedding: OptionValue,
    /// Label used when printing the generator.
    pub label_name: OptionValue,
}

impl ExtensionOptions {
    /// The accepted option keys.
    pub const KEYS: [&'static str; 5] =
        ["structure", "implementation", "prec", "embedding", "label_name"];

    /// Builds options from key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::UnexpectedOption`] for a key outside [`Self::KEYS`].
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, OptionValue)>,
        K: AsRef<str>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "structure" => &mut options.structure,
                "implementation" => &mut options.implementation,
                "prec" => &mut options.prec,
                "embedding" => &mut options.embedding,
                "label_name" => &mut options.label_name,
                other => return Err(RingError::UnexpectedOption(other.to_string())),
            };
            *slot = value;
        }
        Ok(options)
    }

    /// Rejects any option that carries a value.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::NotImplemented`] naming the first set option.
    pub fn ensure_unset(&self) -> Result<()> {
        let values = [
            &self.structure,
            &self.implementation,
            &self.prec,
            &self.embedding,
            &self.label_name,
        ];
        match Self::KEYS.iter().zip(values).find(|(_, v)| !v.is_unset()) {
            Some((key, value)) => Err(RingError::NotImplemented(format!(
                "extension option `{key}` = {value:?}"
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RingConfig::default();
        assert_eq!(config.random_bound, 2);
        assert_eq!(config, RingConfig::DEFAULT);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ExtensionOptions::from_pairs([("names", OptionValue::Unset)]).unwrap_err();
        assert_eq!(err, RingError::UnexpectedOption("names".to_string()));
    }

    #[test]
    fn test_unset_values_accepted() {
        let opts = ExtensionOptions::from_pairs([
            ("prec", OptionValue::Unset),
            ("embedding", OptionValue::Unset),
        ])
        .unwrap();
        assert!(opts.ensure_unset().is_ok());
    }

    #[test]
    fn test_concrete_values_not_implemented() {
        let opts = ExtensionOptions::from_pairs([("prec", OptionValue::Integer(53))]).unwrap();
        assert!(matches!(opts.ensure_unset(), Err(RingError::NotImplemented(_))));
    }
}
