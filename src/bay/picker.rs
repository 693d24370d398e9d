//! Fault selection.
//!
//! The service never calls an RNG directly; it asks a [`FaultPicker`] for one
//! of the catalog's fault identifiers. [`RandomPicker`] is the production
//! implementation. Tests substitute deterministic pickers.

use rand::Rng;

/// Chooses one fault identifier from a non-empty slice.
pub trait FaultPicker: Send + Sync {
    /// Return an index into `fault_ids`. Callers guarantee the slice is
    /// non-empty and fall back to the first entry on an out-of-range index.
    fn pick(&self, fault_ids: &[String]) -> usize;
}

/// Uniform, non-cryptographic selection using the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl FaultPicker for RandomPicker {
    fn pick(&self, fault_ids: &[String]) -> usize {
        if fault_ids.is_empty() {
            return 0;
        }
        rand::thread_rng().gen_range(0..fault_ids.len())
    }
}

/// Always picks the same position, wrapping around the slice.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl FaultPicker for FixedPicker {
    fn pick(&self, fault_ids: &[String]) -> usize {
        self.0 % fault_ids.len().max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("system-{}", i)).collect()
    }

    #[test]
    fn test_random_picker_stays_in_range() {
        let fault_ids = ids(5);
        for _ in 0..500 {
            assert!(RandomPicker.pick(&fault_ids) < fault_ids.len());
        }
    }

    #[test]
    fn test_random_picker_reaches_every_entry() {
        let fault_ids = ids(5);
        let seen: HashSet<usize> = (0..2_000).map(|_| RandomPicker.pick(&fault_ids)).collect();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_random_picker_single_entry() {
        let fault_ids = ids(1);
        assert_eq!(RandomPicker.pick(&fault_ids), 0);
    }

    #[test]
    fn test_fixed_picker_wraps() {
        let fault_ids = ids(5);
        assert_eq!(FixedPicker(3).pick(&fault_ids), 3);
        assert_eq!(FixedPicker(7).pick(&fault_ids), 2);
    }
}
