//! Read-only methodology registry.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::builtin::{DEFAULT_METHODOLOGY_ID, builtin_methodologies};
use super::model::Methodology;
use crate::error::{Result, StepwiseError};

static BUILTIN: Lazy<Arc<MethodologyCatalog>> = Lazy::new(|| {
    Arc::new(MethodologyCatalog {
        methodologies: builtin_methodologies(),
        default_index: 0,
    })
});

/// The outcome of resolving a methodology identifier.
///
/// Distinguishes a genuine match from the default fallback so callers can
/// warn when a session refers to a methodology the catalog no longer knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Known(&'a Methodology),
    Fallback(&'a Methodology),
}

impl<'a> Resolved<'a> {
    pub fn methodology(&self) -> &'a Methodology {
        match *self {
            Resolved::Known(m) | Resolved::Fallback(m) => m,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolved::Fallback(_))
    }
}

/// Static registry mapping methodology identifiers to their definitions.
///
/// Lookups are total: an unrecognized identifier resolves to the default
/// methodology. The catalog offers no mutation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodologyCatalog {
    methodologies: Vec<Methodology>,
    default_index: usize,
}

impl MethodologyCatalog {
    /// Builds a catalog from `methodologies`, using `default_id` as fallback.
    ///
    /// # Errors
    ///
    /// Returns a configuration error on duplicate identifiers, or a not-found
    /// error if no methodology has `default_id`.
    pub fn new(methodologies: Vec<Methodology>, default_id: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        for methodology in &methodologies {
            if !seen.insert(methodology.id.as_str()) {
                return Err(StepwiseError::config(format!(
                    "duplicate methodology id '{}'",
                    methodology.id
                )));
            }
        }

        let default_index = methodologies
            .iter()
            .position(|m| m.id == default_id)
            .ok_or_else(|| StepwiseError::not_found("methodology", default_id))?;

        Ok(Self {
            methodologies,
            default_index,
        })
    }

    /// The built-in catalog, shared for the lifetime of the process.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Strict lookup; `None` for unknown identifiers.
    pub fn get(&self, id: &str) -> Option<&Methodology> {
        self.methodologies.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Total lookup; falls back to the default methodology.
    pub fn lookup(&self, id: &str) -> &Methodology {
        self.resolve(id).methodology()
    }

    pub fn resolve(&self, id: &str) -> Resolved<'_> {
        match self.get(id) {
            Some(methodology) => Resolved::Known(methodology),
            None => {
                tracing::debug!("Unknown methodology '{}', using default", id);
                Resolved::Fallback(self.default_methodology())
            }
        }
    }

    pub fn default_methodology(&self) -> &Methodology {
        &self.methodologies[self.default_index]
    }

    pub fn default_id(&self) -> &str {
        &self.default_methodology().id
    }

    /// Identifiers in display order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.methodologies.iter().map(|m| m.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Methodology> {
        self.methodologies.iter()
    }

    pub fn len(&self) -> usize {
        self.methodologies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methodologies.is_empty()
    }
}

impl Default for MethodologyCatalog {
    fn default() -> Self {
        Self::builtin().as_ref().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methodology::builtin::{FIVE_WHYS, PDCA};
    use crate::methodology::model::Step;

    #[test]
    fn test_builtin_default_is_four_step() {
        let catalog = MethodologyCatalog::builtin();
        assert_eq!(catalog.default_id(), DEFAULT_METHODOLOGY_ID);
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_known_ids_resolve_exactly() {
        let catalog = MethodologyCatalog::builtin();
        for id in [FIVE_WHYS, PDCA] {
            let resolved = catalog.resolve(id);
            assert!(!resolved.is_fallback());
            assert_eq!(resolved.methodology().id, id);
        }
    }

    #[test]
    fn test_unknown_ids_fall_back_to_default() {
        let catalog = MethodologyCatalog::builtin();
        for id in ["", "six-sigma", "4-STEP", " 5-whys", "pdca2"] {
            assert!(catalog.get(id).is_none());
            let resolved = catalog.resolve(id);
            assert!(resolved.is_fallback(), "{id}");
            assert_eq!(catalog.lookup(id).id, DEFAULT_METHODOLOGY_ID);
        }
    }

    #[test]
    fn test_ids_in_display_order() {
        let catalog = MethodologyCatalog::builtin();
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(
            ids,
            vec!["4-step", "5-whys", "design-thinking", "pdca", "first-principles"]
        );
    }

    #[test]
    fn test_custom_catalog_requires_default() {
        let only = Methodology::new("only", "Only", "", vec![Step::new(1, "a", "", "", &[])]);
        let err = MethodologyCatalog::new(vec![only.clone()], "missing").unwrap_err();
        assert!(err.is_not_found());

        let catalog = MethodologyCatalog::new(vec![only], "only").unwrap();
        assert_eq!(catalog.lookup("whatever").id, "only");
    }

    #[test]
    fn test_custom_catalog_rejects_duplicates() {
        let a = Methodology::new("dup", "A", "", vec![]);
        let b = Methodology::new("dup", "B", "", vec![]);
        let err = MethodologyCatalog::new(vec![a, b], "dup").unwrap_err();
        assert!(err.is_config());
    }
}
