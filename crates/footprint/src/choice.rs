//! Categorical form fields.
//!
//! Every select input maps to a closed enum implementing [`Categorical`].
//! Keys that do not match a variant are preserved as
//! [`Choice::Unrecognized`] instead of failing, so a stale or hand-edited
//! record still loads and the estimator can apply its fallback rules.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A closed set of options selected by a string key.
pub trait Categorical: Copy + PartialEq + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// The form key for this variant.
    fn key(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|variant| variant.key() == key)
    }
}

/// A selected option: either a known variant or the raw key as entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: Categorical> Choice<T> {
    pub fn parse(key: &str) -> Self {
        match T::from_key(key) {
            Some(known) => Choice::Known(known),
            None => Choice::Unrecognized(key.to_string()),
        }
    }

    /// The known variant, or `None` for an unrecognized key.
    pub fn known(&self) -> Option<T> {
        match self {
            Choice::Known(value) => Some(*value),
            Choice::Unrecognized(_) => None,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Choice::Known(value) => value.key(),
            Choice::Unrecognized(raw) => raw,
        }
    }

    pub fn is(&self, variant: T) -> bool {
        self.known() == Some(variant)
    }
}

impl<T: Categorical> From<T> for Choice<T> {
    fn from(value: T) -> Self {
        Choice::Known(value)
    }
}

impl<T: Categorical> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// `deserialize_with` helper for `Option<Choice<T>>` fields.
///
/// Null and the empty string (an untouched select) are absent.
pub fn deserialize_optional<'de, D, T>(deserializer: D) -> Result<Option<Choice<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Categorical,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .filter(|key| !key.is_empty())
        .map(|key| Choice::parse(&key)))
}
