//! The fixed table of damaged systems and their repair codes.

use crate::errors::DiagnosticError;

/// Built-in systems, in the order they are offered to the picker.
const DEFAULT_ENTRIES: [(&str, &str); 5] = [
    ("navigation", "NAV-01"),
    ("communications", "COM-02"),
    ("life_support", "LIFE-03"),
    ("engines", "ENG-04"),
    ("deflector_shield", "SHLD-05"),
];

/// Immutable mapping from fault identifier to repair code.
///
/// Never empty. Fault identifiers are unique and keep insertion order, so
/// `fault_ids()` is a stable slice a picker can index into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultCatalog {
    fault_ids: Vec<String>,
    repair_codes: Vec<String>,
}

impl Default for FaultCatalog {
    fn default() -> Self {
        Self {
            fault_ids: DEFAULT_ENTRIES.iter().map(|(id, _)| id.to_string()).collect(),
            repair_codes: DEFAULT_ENTRIES
                .iter()
                .map(|(_, code)| code.to_string())
                .collect(),
        }
    }
}

impl FaultCatalog {
    /// Build a catalog from `(fault_id, repair_code)` pairs.
    ///
    /// A repeated fault identifier keeps its first position and the last
    /// repair code given for it.
    pub fn new<I, K, V>(entries: I) -> Result<Self, DiagnosticError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fault_ids: Vec<String> = Vec::new();
        let mut repair_codes: Vec<String> = Vec::new();

        for (id, code) in entries {
            let id = id.into();
            let code = code.into();
            match fault_ids.iter().position(|existing| *existing == id) {
                Some(idx) => repair_codes[idx] = code,
                None => {
                    fault_ids.push(id);
                    repair_codes.push(code);
                }
            }
        }

        if fault_ids.is_empty() {
            return Err(DiagnosticError::EmptyCatalog);
        }

        Ok(Self {
            fault_ids,
            repair_codes,
        })
    }

    pub fn fault_ids(&self) -> &[String] {
        &self.fault_ids
    }

    /// Repair code for `fault_id`, if the catalog knows it.
    pub fn repair_code(&self, fault_id: &str) -> Option<&str> {
        self.fault_ids
            .iter()
            .position(|id| id == fault_id)
            .map(|idx| self.repair_codes[idx].as_str())
    }

    pub fn contains(&self, fault_id: &str) -> bool {
        self.repair_code(fault_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.fault_ids.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.fault_ids.is_empty()
    }

    /// Iterate `(fault_id, repair_code)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fault_ids
            .iter()
            .zip(self.repair_codes.iter())
            .map(|(id, code)| (id.as_str(), code.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_entries() {
        let catalog = FaultCatalog::default();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.repair_code("navigation"), Some("NAV-01"));
        assert_eq!(catalog.repair_code("communications"), Some("COM-02"));
        assert_eq!(catalog.repair_code("life_support"), Some("LIFE-03"));
        assert_eq!(catalog.repair_code("engines"), Some("ENG-04"));
        assert_eq!(catalog.repair_code("deflector_shield"), Some("SHLD-05"));
    }

    #[test]
    fn test_default_catalog_order() {
        let catalog = FaultCatalog::default();
        assert_eq!(
            catalog.fault_ids(),
            &[
                "navigation",
                "communications",
                "life_support",
                "engines",
                "deflector_shield"
            ]
        );
    }

    #[test]
    fn test_unknown_fault_has_no_code() {
        let catalog = FaultCatalog::default();
        assert_eq!(catalog.repair_code("warp_core"), None);
        assert!(!catalog.contains("warp_core"));
        // Lookups are exact, not case-folded
        assert!(!catalog.contains("Engines"));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let entries: Vec<(String, String)> = Vec::new();
        assert_eq!(
            FaultCatalog::new(entries),
            Err(DiagnosticError::EmptyCatalog)
        );
    }

    #[test]
    fn test_duplicate_fault_keeps_last_code() {
        let catalog = FaultCatalog::new([
            ("engines", "ENG-04"),
            ("navigation", "NAV-01"),
            ("engines", "ENG-99"),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.fault_ids(), &["engines", "navigation"]);
        assert_eq!(catalog.repair_code("engines"), Some("ENG-99"));
    }

    #[test]
    fn test_iter_pairs_ids_with_codes() {
        let catalog = FaultCatalog::default();
        let pairs: Vec<_> = catalog.iter().collect();
        assert_eq!(pairs[3], ("engines", "ENG-04"));
        assert!(!catalog.is_empty());
    }
}
