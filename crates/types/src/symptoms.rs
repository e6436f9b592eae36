//! Symptom text and the deduplicated symptom set.

use crate::{FormError, FormResult};

/// A symptom description that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symptom(String);

impl Symptom {
    /// Creates a new `Symptom` from the given input.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(Symptom)` if the trimmed input is non-empty,
    /// or `Err(FormError::EmptySymptom)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> FormResult<Self> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FormError::EmptySymptom);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symptom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Set of symptoms in insertion order.
///
/// Duplicates are never stored: inserting a symptom that is already present leaves the set
/// unchanged. Comparison is exact on the trimmed text. Order only matters for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SymptomSet(Vec<Symptom>);

impl SymptomSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `symptom` unless an identical one is already present.
    ///
    /// Returns `true` if the set changed.
    pub fn insert(&mut self, symptom: Symptom) -> bool {
        if self.contains(symptom.as_str()) {
            return false;
        }
        self.0.push(symptom);
        true
    }

    /// Removes the symptom matching `text` (after trimming).
    ///
    /// Returns `true` if a symptom was removed.
    pub fn remove(&mut self, text: &str) -> bool {
        let text = text.trim();
        let before = self.0.len();
        self.0.retain(|s| s.as_str() != text);
        self.0.len() != before
    }

    pub fn contains(&self, text: &str) -> bool {
        let text = text.trim();
        self.0.iter().any(|s| s.as_str() == text)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symptom> {
        self.0.iter()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<'a> IntoIterator for &'a SymptomSet {
    type Item = &'a Symptom;
    type IntoIter = std::slice::Iter<'a, Symptom>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Vec<String>> for SymptomSet {
    type Error = FormError;

    fn try_from(values: Vec<String>) -> FormResult<Self> {
        let mut set = SymptomSet::new();
        for value in values {
            set.insert(Symptom::new(value)?);
        }
        Ok(set)
    }
}

impl From<SymptomSet> for Vec<String> {
    fn from(set: SymptomSet) -> Self {
        set.0.into_iter().map(|s| s.0).collect()
    }
}
