//! Validated access key form data

use super::key_type::KeyType;
use crate::domain::region::RegionId;

/// SSH port used when the request does not carry one. Cloud access keys are
/// normally created together with their provider, so this matches on-prem hosts.
pub const DEFAULT_SSH_PORT: u16 = 22;
pub const DEFAULT_PASSWORDLESS_SUDO_ACCESS: bool = true;
pub const DEFAULT_AIR_GAP_INSTALL: bool = false;

/// Access key creation request after binding and validation
///
/// Instances only come out of [`AccessKeyFormBuilder::build`] or the request
/// binder, so `key_code` and `region_uuid` are always present.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKeyFormData {
    key_code: String,
    region_uuid: RegionId,
    key_type: Option<KeyType>,
    key_content: Option<String>,
    ssh_user: Option<String>,
    ssh_port: u16,
    passwordless_sudo_access: bool,
    air_gap_install: bool,
}

impl AccessKeyFormData {
    pub fn builder(key_code: impl Into<String>, region_uuid: RegionId) -> AccessKeyFormBuilder {
        AccessKeyFormBuilder::new(key_code, region_uuid)
    }

    pub fn key_code(&self) -> &str {
        &self.key_code
    }

    pub fn region_uuid(&self) -> RegionId {
        self.region_uuid
    }

    pub fn key_type(&self) -> Option<KeyType> {
        self.key_type
    }

    pub fn key_content(&self) -> Option<&str> {
        self.key_content.as_deref()
    }

    pub fn ssh_user(&self) -> Option<&str> {
        self.ssh_user.as_deref()
    }

    pub fn ssh_port(&self) -> u16 {
        self.ssh_port
    }

    pub fn passwordless_sudo_access(&self) -> bool {
        self.passwordless_sudo_access
    }

    pub fn air_gap_install(&self) -> bool {
        self.air_gap_install
    }
}

impl std::fmt::Debug for AccessKeyFormData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessKeyFormData")
            .field("key_code", &self.key_code)
            .field("region_uuid", &self.region_uuid)
            .field("key_type", &self.key_type)
            .field("key_content", &self.key_content.as_ref().map(|_| "[REDACTED]"))
            .field("ssh_user", &self.ssh_user)
            .field("ssh_port", &self.ssh_port)
            .field("passwordless_sudo_access", &self.passwordless_sudo_access)
            .field("air_gap_install", &self.air_gap_install)
            .finish()
    }
}

/// Builder for [`AccessKeyFormData`]
#[derive(Debug, Clone)]
pub struct AccessKeyFormBuilder {
    key_code: String,
    region_uuid: RegionId,
    key_type: Option<KeyType>,
    key_content: Option<String>,
    ssh_user: Option<String>,
    ssh_port: Option<u16>,
    passwordless_sudo_access: Option<bool>,
    air_gap_install: Option<bool>,
}

impl AccessKeyFormBuilder {
    pub fn new(key_code: impl Into<String>, region_uuid: RegionId) -> Self {
        Self {
            key_code: key_code.into(),
            region_uuid,
            key_type: None,
            key_content: None,
            ssh_user: None,
            ssh_port: None,
            passwordless_sudo_access: None,
            air_gap_install: None,
        }
    }

    pub fn key_type(mut self, key_type: KeyType) -> Self {
        self.key_type = Some(key_type);
        self
    }

    pub fn key_content(mut self, content: impl Into<String>) -> Self {
        self.key_content = Some(content.into());
        self
    }

    pub fn ssh_user(mut self, user: impl Into<String>) -> Self {
        self.ssh_user = Some(user.into());
        self
    }

    pub fn ssh_port(mut self, port: u16) -> Self {
        self.ssh_port = Some(port);
        self
    }

    pub fn passwordless_sudo_access(mut self, enabled: bool) -> Self {
        self.passwordless_sudo_access = Some(enabled);
        self
    }

    pub fn air_gap_install(mut self, enabled: bool) -> Self {
        self.air_gap_install = Some(enabled);
        self
    }

    pub fn build(self) -> AccessKeyFormData {
        AccessKeyFormData {
            key_code: self.key_code,
            region_uuid: self.region_uuid,
            key_type: self.key_type,
            key_content: self.key_content,
            ssh_user: self.ssh_user,
            ssh_port: self.ssh_port.unwrap_or(DEFAULT_SSH_PORT),
            passwordless_sudo_access: self
                .passwordless_sudo_access
                .unwrap_or(DEFAULT_PASSWORDLESS_SUDO_ACCESS),
            air_gap_install: self.air_gap_install.unwrap_or(DEFAULT_AIR_GAP_INSTALL),
        }
    }
}
