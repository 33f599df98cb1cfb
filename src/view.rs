//! Grouped view builder
//!
//! Groups appear in the order their key is first seen; there is no separate
//! group ordering. Entries without a group key share one `None` group.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::filter::filter;
use crate::types::{PermissionSet, SettingDescriptor};

/// One navigation heading and its entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group<'a> {
    pub group_key: Option<&'a str>,
    pub entries: Vec<&'a SettingDescriptor>,
}

pub fn build_groups<'a, I>(entries: I) -> Vec<Group<'a>>
where
    I: IntoIterator<Item = &'a SettingDescriptor>,
{
    let mut groups: Vec<Group<'a>> = Vec::new();
    for d in entries {
        let key = d.group_key.as_deref();
        // linear scan: a catalog holds only a handful of groups
        match groups.iter_mut().find(|g| g.group_key == key) {
            Some(g) => g.entries.push(d),
            None => groups.push(Group { group_key: key, entries: vec![d] }),
        }
    }
    groups
}

/// Filter then group: what the navigation renders for one caller
pub fn navigation<'a>(catalog: &'a Catalog, permissions: &PermissionSet) -> Vec<Group<'a>> {
    build_groups(filter(catalog, permissions))
}

/// Flatten groups back into display order
pub fn flatten<'a>(groups: &[Group<'a>]) -> Vec<&'a SettingDescriptor> {
    groups.iter().flat_map(|g| g.entries.iter().copied()).collect()
}
