//! Access key response types

use serde::{Deserialize, Serialize};

use crate::domain::access_key::{AccessKey, AccessKeyFormData, AccessKeyInfo, KeyType};

/// Registered access key
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessKeyResponse {
    pub uuid: String,
    pub key_code: String,
    #[serde(rename = "regionUUID")]
    pub region_uuid: String,
    pub key_info: AccessKeyInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub created_at: String,
}

impl From<&AccessKey> for AccessKeyResponse {
    fn from(key: &AccessKey) -> Self {
        Self {
            uuid: key.id().to_string(),
            key_code: key.key_code().to_string(),
            region_uuid: key.region_uuid().to_string(),
            key_info: key.key_info().clone(),
            file_name: key.file_name(),
            created_at: key.created_at().to_rfc3339(),
        }
    }
}

/// Normalised form as the server understood it; key material is never echoed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessKeyFormResponse {
    pub key_code: String,
    #[serde(rename = "regionUUID")]
    pub region_uuid: String,
    pub key_type: Option<KeyType>,
    pub has_key_content: bool,
    pub ssh_user: Option<String>,
    pub ssh_port: u16,
    pub passwordless_sudo_access: bool,
    pub air_gap_install: bool,
}

impl From<&AccessKeyFormData> for AccessKeyFormResponse {
    fn from(form: &AccessKeyFormData) -> Self {
        Self {
            key_code: form.key_code().to_string(),
            region_uuid: form.region_uuid().to_string(),
            key_type: form.key_type(),
            has_key_content: form.key_content().is_some(),
            ssh_user: form.ssh_user().map(String::from),
            ssh_port: form.ssh_port(),
            passwordless_sudo_access: form.passwordless_sudo_access(),
            air_gap_install: form.air_gap_install(),
        }
    }
}

/// List access keys response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAccessKeysResponse {
    pub access_keys: Vec<AccessKeyResponse>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_response_field_names() {
        let form = AccessKeyFormData::builder(
            "my-key",
            "11111111-1111-1111-1111-111111111111".parse().unwrap(),
        )
        .key_content("secret material")
        .build();

        let json = serde_json::to_value(AccessKeyFormResponse::from(&form)).unwrap();

        assert_eq!(json["keyCode"], "my-key");
        assert_eq!(json["regionUUID"], "11111111-1111-1111-1111-111111111111");
        assert_eq!(json["sshPort"], 22);
        assert_eq!(json["passwordlessSudoAccess"], true);
        assert_eq!(json["airGapInstall"], false);
        assert_eq!(json["hasKeyContent"], true);
        assert!(json["keyType"].is_null());
        assert!(!json.to_string().contains("secret material"));
    }
}
