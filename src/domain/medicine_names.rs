//! Normalised list of medicine names supplied by a client.

use std::collections::HashSet;

use crate::error::RegistryError;

/// Non-empty, duplicate-free list of medicine names in first-occurrence
/// order.
///
/// Names are matched exactly; no trimming or case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicineNames(Vec<String>);

impl MedicineNames {
    /// Builds the list from raw request input, collapsing repeated names.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if `names` is empty.
    pub fn parse(names: Vec<String>) -> Result<Self, RegistryError> {
        if names.is_empty() {
            return Err(RegistryError::Validation("empty medicine list".to_string()));
        }
        let mut seen = HashSet::with_capacity(names.len());
        let unique = names
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .collect();
        Ok(Self(unique))
    }

    /// Returns the names as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty. Never true for a parsed list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position of `name` in the list, used to keep responses in request
    /// order.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|n| n == name)
    }

    /// Names not contained in `found`.
    #[must_use]
    pub fn unmatched<'a, I>(&self, found: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let found: HashSet<&str> = found.into_iter().collect();
        self.0
            .iter()
            .filter(|name| !found.contains(name.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn empty_list_is_rejected() {
        let result = MedicineNames::parse(Vec::new());
        assert!(matches!(result, Err(RegistryError::Validation(_))));
    }

    #[test]
    fn duplicates_collapse_in_first_occurrence_order() {
        let Ok(list) = MedicineNames::parse(names(&["Broufen", "Alp", "Broufen"])) else {
            panic!("valid list");
        };
        assert_eq!(list.as_slice(), names(&["Broufen", "Alp"]).as_slice());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn unmatched_reports_missing_names() {
        let Ok(list) = MedicineNames::parse(names(&["Paracetamol", "Aspirin"])) else {
            panic!("valid list");
        };
        assert_eq!(list.unmatched(["Paracetamol"]), names(&["Aspirin"]));
        assert!(list.unmatched(["Paracetamol", "Aspirin"]).is_empty());
    }

    #[test]
    fn position_follows_request_order() {
        let Ok(list) = MedicineNames::parse(names(&["Calpol", "Alp"])) else {
            panic!("valid list");
        };
        assert_eq!(list.position("Alp"), Some(1));
        assert_eq!(list.position("Panadol"), None);
    }
}
