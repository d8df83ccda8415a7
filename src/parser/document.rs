use indexmap::IndexMap;

/// Ordered key/value document produced by parsing a configuration file.
///
/// Keys keep first-seen order; a repeated key appends to its value sequence
/// in file order rather than overwriting. An empty file parses to an empty
/// document, which is itself a checkable condition (local-resolution hosts
/// require an empty resolver file).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    entries: IndexMap<String, Vec<String>>,
}

impl ConfigDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under a key, preserving insertion order.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Values recorded for a key, empty if the key is absent.
    #[must_use]
    pub fn values(&self, key: &str) -> &[String] {
        self.get(key).unwrap_or(&[])
    }

    /// Values for a key split on whitespace into individual tokens.
    ///
    /// An nsswitch-style `hosts: files dns` line parses to a single value
    /// `"files dns"`; membership checks need the tokens.
    #[must_use]
    pub fn tokens(&self, key: &str) -> Vec<String> {
        self.values(key)
            .iter()
            .flat_map(|v| v.split_whitespace())
            .map(ToString::to_string)
            .collect()
    }

    /// Number of values for a key, optionally counting distinct values only.
    #[must_use]
    pub fn value_count(&self, key: &str, distinct: bool) -> usize {
        if distinct {
            let mut seen: Vec<&str> = Vec::new();
            for value in self.values(key) {
                if !seen.contains(&value.as_str()) {
                    seen.push(value);
                }
            }
            seen.len()
        } else {
            self.values(key).len()
        }
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
