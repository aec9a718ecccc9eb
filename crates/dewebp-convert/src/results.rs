//! The ordered list of conversion results.

use crate::types::{ConversionResult, EncodedImage};

/// Conversion results in arrival order.
///
/// Entries are only appended, removed, or cleared; an entry is never
/// modified in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultList<R = EncodedImage> {
    entries: Vec<ConversionResult<R>>,
}

impl<R> ResultList<R> {
    /// An empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a result at the end.
    pub fn push(&mut self, result: ConversionResult<R>) {
        self.entries.push(result);
    }

    /// Remove and return the entry at `index`, shifting later entries.
    ///
    /// An out-of-range index leaves the list unchanged and returns `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<ConversionResult<R>> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ConversionResult<R>> {
        self.entries.get(index)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConversionResult<R>> {
        self.entries.iter()
    }

    /// Output names in list order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(ConversionResult::name)
    }
}

impl<R> Default for ResultList<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> FromIterator<ConversionResult<R>> for ResultList<R> {
    fn from_iter<I: IntoIterator<Item = ConversionResult<R>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, R> IntoIterator for &'a ResultList<R> {
    type Item = &'a ConversionResult<R>;
    type IntoIter = std::slice::Iter<'a, ConversionResult<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
