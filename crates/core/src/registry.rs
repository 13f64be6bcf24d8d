//! Denomination registry.
//!
//! Process-scope mapping from denomination name to its unit multiplier and
//! to the name of its smallest registered ("base") denomination. The
//! registry is created empty, grows only through [`DenomRegistry::register`],
//! and is never torn down. Both maps live behind one `RwLock` so the
//! duplicate check and the inserts are atomic against concurrent
//! registrations while readers stay lock-cheap.

use crate::errors::{DenomError, Result};
use crate::types::is_valid_denom;
use denom_dec::Dec;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Pure predicate deciding whether a denomination name is well formed.
/// Swappable per deployment; defaults to [`is_valid_denom`].
pub type DenomValidator = fn(&str) -> bool;

#[derive(Debug, Default)]
struct RegistryState {
    /// Denomination → unit multiplier relative to the shared reference scale
    /// (e.g. `atom = 1`, `uatom = 10^-6`).
    units: HashMap<String, Dec>,
    /// Denomination → name of the smallest registered unit. The base
    /// denomination maps to itself.
    base: HashMap<String, String>,
}

/// Registry of denomination unit multipliers and base-denom links.
#[derive(Debug)]
pub struct DenomRegistry {
    state: RwLock<RegistryState>,
    validate: DenomValidator,
}

impl DenomRegistry {
    /// Create an empty registry using the default name grammar.
    pub fn new() -> Self {
        Self::with_validator(is_valid_denom)
    }

    /// Create an empty registry with a custom name-validation predicate.
    pub fn with_validator(validate: DenomValidator) -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            validate,
        }
    }

    /// Register `denom` with its unit multiplier and link it to `base_denom`.
    ///
    /// Fails with [`DenomError::InvalidDenom`] if `denom` does not match the
    /// grammar and with [`DenomError::AlreadyRegistered`] if it already has a
    /// multiplier; in both failure cases the registry is left untouched.
    /// `base_denom` itself is not grammar-checked, and a multiplier already
    /// recorded for it is overwritten.
    pub fn register(
        &self,
        denom: &str,
        unit: Dec,
        base_denom: &str,
        base_unit: Dec,
    ) -> Result<()> {
        if !(self.validate)(denom) {
            return Err(DenomError::InvalidDenom {
                denom: denom.to_string(),
            });
        }

        let mut state = self.state.write();
        if state.units.contains_key(denom) {
            return Err(DenomError::AlreadyRegistered {
                denom: denom.to_string(),
            });
        }

        state.units.insert(denom.to_string(), unit);
        state.units.insert(base_denom.to_string(), base_unit);
        state.base.insert(denom.to_string(), base_denom.to_string());
        state
            .base
            .insert(base_denom.to_string(), base_denom.to_string());

        debug!(denom, base_denom, "registered denom unit");
        Ok(())
    }

    /// Unit multiplier for `denom`, or `None` if the name fails the grammar
    /// or was never registered. The two causes are not distinguishable from
    /// this call alone.
    pub fn denom_unit(&self, denom: &str) -> Option<Dec> {
        if !(self.validate)(denom) {
            return None;
        }
        self.state.read().units.get(denom).cloned()
    }

    pub(crate) fn validator(&self) -> DenomValidator {
        self.validate
    }

    /// Name of the smallest registered unit for `denom`. An empty base-link
    /// value counts as not registered, same as a missing entry.
    pub fn base_denom(&self, denom: &str) -> Result<String> {
        match self.state.read().base.get(denom) {
            Some(base) if !base.is_empty() => Ok(base.clone()),
            _ => Err(DenomError::NotRegistered {
                denom: denom.to_string(),
            }),
        }
    }
}

impl Default for DenomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(s: &str) -> Dec {
        s.parse().unwrap()
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = DenomRegistry::new();
        registry
            .register("atom", Dec::one(), "uatom", unit("0.000001"))
            .unwrap();

        assert_eq!(registry.denom_unit("atom"), Some(Dec::one()));
        assert_eq!(registry.denom_unit("uatom"), Some(unit("0.000001")));
        assert_eq!(registry.base_denom("atom").unwrap(), "uatom");
        assert_eq!(registry.base_denom("uatom").unwrap(), "uatom");
    }

    #[test]
    fn test_duplicate_registration_leaves_registry_unchanged() {
        let registry = DenomRegistry::new();
        registry
            .register("atom", Dec::one(), "uatom", unit("0.000001"))
            .unwrap();

        let err = registry
            .register("atom", unit("42"), "matom", unit("0.001"))
            .unwrap_err();
        assert!(matches!(err, DenomError::AlreadyRegistered { .. }));

        // Original multiplier and base link still in place, nothing new added.
        assert_eq!(registry.denom_unit("atom"), Some(Dec::one()));
        assert_eq!(registry.base_denom("atom").unwrap(), "uatom");
        assert_eq!(registry.denom_unit("matom"), None);
    }

    #[test]
    fn test_invalid_denom_rejected_before_lookup() {
        let registry = DenomRegistry::new();
        let err = registry
            .register("1bad", Dec::one(), "ubad", unit("0.000001"))
            .unwrap_err();
        assert!(matches!(err, DenomError::InvalidDenom { .. }));
        assert!(registry.base_denom("ubad").is_err());
    }

    #[test]
    fn test_denom_unit_conflates_invalid_and_missing() {
        let registry = DenomRegistry::new();
        assert_eq!(registry.denom_unit("??"), None);
        assert_eq!(registry.denom_unit("never"), None);
    }

    #[test]
    fn test_base_denom_missing() {
        let registry = DenomRegistry::new();
        let err = registry.base_denom("atom").unwrap_err();
        assert!(matches!(err, DenomError::NotRegistered { .. }));
        assert!(registry.base_denom("").is_err());
    }

    #[test]
    fn test_empty_base_link_counts_as_missing() {
        let registry = DenomRegistry::new();
        // base_denom is not grammar-checked, so an empty base name can be
        // installed; lookups through it must still report "not registered".
        registry
            .register("atom", Dec::one(), "", unit("0.000001"))
            .unwrap();
        let err = registry.base_denom("atom").unwrap_err();
        assert!(matches!(err, DenomError::NotRegistered { .. }));
        assert!(registry.base_denom("").is_err());
    }

    #[test]
    fn test_reregistering_base_overwrites_its_multiplier() {
        let registry = DenomRegistry::new();
        registry
            .register("atom", Dec::one(), "uatom", unit("0.000001"))
            .unwrap();
        // Registering another denomination against the same base silently
        // rewrites the base's multiplier.
        registry
            .register("matom", unit("0.001"), "uatom", unit("0.0000001"))
            .unwrap();
        assert_eq!(registry.denom_unit("uatom"), Some(unit("0.0000001")));
    }

    #[test]
    fn test_custom_validator() {
        fn only_xyz(denom: &str) -> bool {
            denom == "xyz"
        }
        let registry = DenomRegistry::with_validator(only_xyz);
        assert!(registry
            .register("atom", Dec::one(), "uatom", Dec::one())
            .is_err());
        assert!(registry.register("xyz", Dec::one(), "uxyz", Dec::one()).is_ok());
    }
}
