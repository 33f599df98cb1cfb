//! Built-in console settings, in default display order

use crate::constants::{
    GROUP_APPEARANCE, GROUP_DOMAIN, GROUP_LOGIN, GROUP_NOTIFICATIONS, GROUP_OTHER, IAM_POLICY_READ,
    IAM_POLICY_WRITE, ORG_IDP_READ, ORG_READ, POLICY_READ,
};
use crate::types::ServiceType::{Admin, Mgmt};
use crate::types::SettingDescriptor;

/// Instance-only page: visible to instance administrators with `iam.policy.read`
fn instance(id: &str, label: &str) -> SettingDescriptor {
    SettingDescriptor::new(id, label).require(Admin, &[IAM_POLICY_READ])
}

/// Policy page readable from either scope
fn policy(id: &str, label: &str, group: &str) -> SettingDescriptor {
    SettingDescriptor::new(id, label)
        .group(group)
        .require(Mgmt, &[POLICY_READ])
        .require(Admin, &[IAM_POLICY_READ])
}

pub(crate) fn entries() -> Vec<SettingDescriptor> {
    vec![
        instance("languages", "SETTINGS.LIST.LANGUAGES"),
        instance("oidc", "SETTINGS.LIST.OIDC"),
        instance("secrets", "SETTINGS.LIST.SECRETS"),
        instance("security", "SETTINGS.LIST.SECURITY"),
        policy("login", "SETTINGS.LIST.LOGIN", GROUP_LOGIN),
        SettingDescriptor::new("verified_domains", "SETTINGS.LIST.VERIFIED_DOMAINS")
            .group(GROUP_DOMAIN)
            .require(Mgmt, &[ORG_READ]),
        SettingDescriptor::new("domain", "SETTINGS.LIST.DOMAIN")
            .group(GROUP_DOMAIN)
            .require(Mgmt, &[IAM_POLICY_WRITE])
            .require(Admin, &[IAM_POLICY_WRITE]),
        policy("lockout", "SETTINGS.LIST.LOCKOUT", GROUP_LOGIN),
        policy("complexity", "SETTINGS.LIST.COMPLEXITY", GROUP_LOGIN),
        SettingDescriptor::new("idp", "SETTINGS.LIST.IDP")
            .group(GROUP_LOGIN)
            .require(Mgmt, &[POLICY_READ, ORG_IDP_READ])
            .require(Admin, &[IAM_POLICY_READ, ORG_IDP_READ]),
        policy("notifications", "SETTINGS.LIST.NOTIFICATIONS", GROUP_NOTIFICATIONS),
        instance("smtpprovider", "SETTINGS.LIST.SMTP_PROVIDER").group(GROUP_NOTIFICATIONS),
        instance("smsprovider", "SETTINGS.LIST.SMS_PROVIDER").group(GROUP_NOTIFICATIONS),
        policy("messagetexts", "SETTINGS.LIST.MESSAGETEXTS", GROUP_APPEARANCE),
        policy("logintexts", "SETTINGS.LIST.LOGINTEXTS", GROUP_APPEARANCE),
        policy("privacypolicy", "SETTINGS.LIST.PRIVACYPOLICY", GROUP_OTHER),
        policy("branding", "SETTINGS.LIST.BRANDING", GROUP_APPEARANCE),
    ]
}
