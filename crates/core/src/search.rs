//! Linear substring search over in-memory lists.

/// A record that can be found by typing part of one of its keys.
pub trait Searchable {
    /// Text fields a search term is matched against.
    fn search_keys(&self) -> Vec<&str>;
}

/// Case-insensitive substring filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    /// Creates a filter for `term`. Surrounding whitespace is ignored.
    #[must_use]
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.trim().to_lowercase(),
        }
    }

    /// Returns true if the filter is empty (matches everything).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns true if any key of `record` contains the term.
    #[must_use]
    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        self.is_empty()
            || record
                .search_keys()
                .iter()
                .any(|key| key.to_lowercase().contains(&self.needle))
    }

    /// Returns the matching records in their original order.
    #[must_use]
    pub fn apply<'a, T: Searchable>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}
