//! Setting descriptors, service types and caller permission sets

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::service_name;

/// Administrative scope a permission is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ServiceType {
    /// Organization management
    #[serde(rename = "MGMT")]
    Mgmt,
    /// Instance administration
    #[serde(rename = "ADMIN")]
    Admin,
}

impl ServiceType {
    pub const ALL: [ServiceType; 2] = [ServiceType::Mgmt, ServiceType::Admin];

    pub fn name(self) -> &'static str {
        service_name(self)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One navigable settings page.
///
/// `label_key` and `group_key` are localization keys and are never inspected.
/// `required` maps each gating service type to the permissions needed in that
/// scope; an empty map means the page is visible to everyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingDescriptor {
    pub id: String,
    pub label_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_key: Option<String>,
    #[serde(default, rename = "requiredPermissions")]
    pub required: BTreeMap<ServiceType, Vec<String>>,
}

impl SettingDescriptor {
    pub fn new(id: impl Into<String>, label_key: impl Into<String>) -> Self {
        SettingDescriptor {
            id: id.into(),
            label_key: label_key.into(),
            group_key: None,
            required: BTreeMap::new(),
        }
    }

    pub fn group(mut self, group_key: impl Into<String>) -> Self {
        self.group_key = Some(group_key.into());
        self
    }

    /// Gate on `service`, replacing any earlier requirement for it
    pub fn require(mut self, service: ServiceType, permissions: &[&str]) -> Self {
        self.required
            .insert(service, permissions.iter().map(|p| p.to_string()).collect());
        self
    }

    pub fn requirement(&self, service: ServiceType) -> Option<&[String]> {
        self.required.get(&service).map(Vec::as_slice)
    }

    #[inline]
    pub fn is_ungated(&self) -> bool {
        self.required.is_empty()
    }
}

/// Permissions a caller holds, partitioned by service type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(HashMap<ServiceType, HashSet<String>>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<I, S>(mut self, service: ServiceType, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .entry(service)
            .or_default()
            .extend(permissions.into_iter().map(Into::into));
        self
    }

    pub fn grant(&mut self, service: ServiceType, permission: impl Into<String>) {
        self.0.entry(service).or_default().insert(permission.into());
    }

    #[inline]
    pub fn holds(&self, service: ServiceType, permission: &str) -> bool {
        self.0.get(&service).is_some_and(|held| held.contains(permission))
    }

    /// True when every permission in `required` is held for `service`.
    /// An empty list is never satisfied.
    pub fn holds_all(&self, service: ServiceType, required: &[String]) -> bool {
        !required.is_empty()
            && self
                .0
                .get(&service)
                .is_some_and(|held| required.iter().all(|p| held.contains(p)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(HashSet::is_empty)
    }
}
