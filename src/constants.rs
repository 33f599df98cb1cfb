//! Permission strings, group keys and service type names

use crate::types::ServiceType;

// Permission strings checked by the built-in catalog
pub const POLICY_READ: &str = "policy.read";
pub const ORG_READ: &str = "org.read";
pub const ORG_IDP_READ: &str = "org.idp.read";
pub const IAM_POLICY_READ: &str = "iam.policy.read";
pub const IAM_POLICY_WRITE: &str = "iam.policy.write";

// Group label keys
pub const GROUP_LOGIN: &str = "SETTINGS.GROUPS.LOGIN";
pub const GROUP_DOMAIN: &str = "SETTINGS.GROUPS.DOMAIN";
pub const GROUP_NOTIFICATIONS: &str = "SETTINGS.GROUPS.NOTIFICATIONS";
pub const GROUP_APPEARANCE: &str = "SETTINGS.GROUPS.APPEARANCE";
pub const GROUP_OTHER: &str = "SETTINGS.GROUPS.OTHER";

/// Wire name of a service type
pub fn service_name(service: ServiceType) -> &'static str {
    match service {
        ServiceType::Mgmt => "MGMT",
        ServiceType::Admin => "ADMIN",
    }
}
