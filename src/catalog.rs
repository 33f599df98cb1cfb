//! Settings catalog: the validated, ordered list of setting descriptors
//!
//! A `Catalog` can only be obtained through validation, so every value in
//! circulation has unique ids and non-empty requirement lists. The console's
//! own catalog is a process-wide singleton built on first use.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use tracing::{info, warn};

use crate::builtin;
use crate::error::{err, CatalogError, Result};
use crate::types::SettingDescriptor;

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Immutable, ordered settings catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<SettingDescriptor>,
}

impl Catalog {
    /// Validate `entries` and freeze them in the given order
    pub fn new(entries: Vec<SettingDescriptor>) -> Result<Self> {
        validate(&entries)?;
        info!(entries = entries.len(), "settings catalog loaded");
        Ok(Catalog { entries })
    }

    /// Parse a JSON array of descriptors
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<SettingDescriptor> = serde_json::from_str(json).map_err(err)?;
        Self::new(entries)
    }

    /// Read and validate a JSON catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Malformed(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// The console's built-in catalog.
    ///
    /// Panics on first use if the built-in entries fail validation; a broken
    /// catalog must not be served at all.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| match Catalog::new(builtin::entries()) {
            Ok(c) => c,
            Err(e) => panic!("built-in settings catalog is invalid: {}", e),
        })
    }

    /// All descriptors in catalog order
    #[inline]
    pub fn all_entries(&self) -> &[SettingDescriptor] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&SettingDescriptor> {
        self.entries.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(entries: &[SettingDescriptor]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for d in entries {
        if !seen.insert(d.id.as_str()) {
            warn!(id = %d.id, "duplicate setting id");
            return Err(CatalogError::DuplicateIdentifier(d.id.clone()));
        }
        if let Some((service, _)) = d.required.iter().find(|(_, perms)| perms.is_empty()) {
            warn!(id = %d.id, service = %service, "empty permission list");
            return Err(CatalogError::InvalidRequirement { id: d.id.clone(), service: *service });
        }
    }
    Ok(())
}
