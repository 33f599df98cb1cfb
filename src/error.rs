//! Error types for settings-nav

use crate::types::ServiceType;

/// Catalog construction errors. Queries never fail; only building a catalog can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two descriptors share an id
    DuplicateIdentifier(String),
    /// A requirement list for a service type is present but empty
    InvalidRequirement { id: String, service: ServiceType },
    /// The catalog source could not be read or parsed
    Malformed(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::DuplicateIdentifier(id) => write!(f, "duplicate setting id '{}'", id),
            CatalogError::InvalidRequirement { id, service } => {
                write!(f, "setting '{}' has an empty permission list for {}", id, service)
            }
            CatalogError::Malformed(msg) => write!(f, "malformed catalog: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Convert any error to CatalogError::Malformed
pub fn err<E: std::error::Error>(e: E) -> CatalogError {
    CatalogError::Malformed(e.to_string())
}
