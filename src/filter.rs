//! Access filter: which descriptors a caller may see

use tracing::debug;

use crate::catalog::Catalog;
use crate::types::{PermissionSet, SettingDescriptor};

/// A descriptor is visible when it is ungated, or when at least one of its
/// gating service types has every listed permission held by the caller.
#[inline]
pub fn is_visible(descriptor: &SettingDescriptor, permissions: &PermissionSet) -> bool {
    descriptor.is_ungated()
        || descriptor
            .required
            .iter()
            .any(|(service, required)| permissions.holds_all(*service, required))
}

/// Visible descriptors in catalog order
pub fn filter<'a>(catalog: &'a Catalog, permissions: &PermissionSet) -> Vec<&'a SettingDescriptor> {
    let visible: Vec<_> = catalog
        .all_entries()
        .iter()
        .filter(|d| is_visible(d, permissions))
        .collect();
    debug!(visible = visible.len(), total = catalog.len(), "filtered settings");
    visible
}
