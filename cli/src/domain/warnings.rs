//! Non-fatal diagnostics that travel alongside every remote result.

use serde::Serialize;

/// Ordered, append-only log of warning messages.
///
/// Messages are never deduplicated or reordered; callers merge the warnings
/// of each remote call in the order the calls were made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Warnings(Vec<String>);

impl Warnings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single message.
    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    /// Append every message of `other`, preserving its order.
    pub fn append(&mut self, other: Warnings) {
        self.0.extend(other.0);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Warnings {
    fn from(messages: Vec<String>) -> Self {
        Self(messages)
    }
}

impl FromIterator<String> for Warnings {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Warnings {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A result paired with the warnings gathered while producing it.
///
/// Warnings are kept on both the success and the failure path.
#[derive(Debug)]
pub struct Warned<T, E = anyhow::Error> {
    pub result: Result<T, E>,
    pub warnings: Warnings,
}

impl<T, E> Warned<T, E> {
    pub fn ok(value: T, warnings: Warnings) -> Self {
        Self {
            result: Ok(value),
            warnings,
        }
    }

    pub fn err(error: E, warnings: Warnings) -> Self {
        Self {
            result: Err(error),
            warnings,
        }
    }

    /// Split into the result and the warnings.
    pub fn into_parts(self) -> (Result<T, E>, Warnings) {
        (self.result, self.warnings)
    }
}
