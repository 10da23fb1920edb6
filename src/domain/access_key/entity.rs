//! Access key entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::form::AccessKeyFormData;
use super::key_type::KeyType;
use crate::domain::region::RegionId;

/// Access key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessKeyId(Uuid);

impl AccessKeyId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for AccessKeyId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::str::FromStr for AccessKeyId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl std::fmt::Display for AccessKeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connection settings stored with an access key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessKeyInfo {
    pub key_type: Option<KeyType>,
    pub ssh_user: Option<String>,
    pub ssh_port: u16,
    pub passwordless_sudo_access: bool,
    pub air_gap_install: bool,
    /// SHA-256 of the submitted key material, hex encoded
    pub key_fingerprint: Option<String>,
}

/// An access key registered for a region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessKey {
    id: AccessKeyId,
    key_code: String,
    region_uuid: RegionId,
    key_info: AccessKeyInfo,
    created_at: DateTime<Utc>,
}

impl AccessKey {
    /// Build a new key from a validated form. The raw key content is reduced
    /// to its fingerprint and not kept.
    pub fn from_form(form: &AccessKeyFormData) -> Self {
        Self {
            id: AccessKeyId::generate(),
            key_code: form.key_code().to_string(),
            region_uuid: form.region_uuid(),
            key_info: AccessKeyInfo {
                key_type: form.key_type(),
                ssh_user: form.ssh_user().map(String::from),
                ssh_port: form.ssh_port(),
                passwordless_sudo_access: form.passwordless_sudo_access(),
                air_gap_install: form.air_gap_install(),
                key_fingerprint: form.key_content().map(fingerprint),
            },
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> AccessKeyId {
        self.id
    }

    pub fn key_code(&self) -> &str {
        &self.key_code
    }

    pub fn region_uuid(&self) -> RegionId {
        self.region_uuid
    }

    pub fn key_info(&self) -> &AccessKeyInfo {
        &self.key_info
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// File name the key material would be written under
    pub fn file_name(&self) -> Option<String> {
        self.key_info
            .key_type
            .map(|t| format!("{}{}", self.key_code, t.extension()))
    }
}

/// Hex SHA-256 of key material
pub fn fingerprint(content: &str) -> String {
    hex::encode(Sha256::digest(content.trim().as_bytes()))
}
