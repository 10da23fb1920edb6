//! Access key type

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of key material carried by an access key request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeyType {
    /// Public half of an SSH key pair
    Public,
    /// Private key in PEM format
    Private,
}

impl KeyType {
    pub const ALL: [KeyType; 2] = [KeyType::Public, KeyType::Private];

    /// Wire name of the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
        }
    }

    /// File extension used when the key is written to disk
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Public => ".pub",
            Self::Private => ".pem",
        }
    }
}

impl FromStr for KeyType {
    type Err = UnknownKeyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownKeyType(s.to_string()))
    }
}

impl std::fmt::Display for KeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string does not name a [`KeyType`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key type '{0}'")]
pub struct UnknownKeyType(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_type() {
        assert_eq!("PUBLIC".parse::<KeyType>().unwrap(), KeyType::Public);
        assert_eq!("PRIVATE".parse::<KeyType>().unwrap(), KeyType::Private);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "private".parse::<KeyType>(),
            Err(UnknownKeyType("private".to_string()))
        );
    }

    #[test]
    fn test_extensions() {
        assert_eq!(KeyType::Public.extension(), ".pub");
        assert_eq!(KeyType::Private.extension(), ".pem");
    }

    #[test]
    fn test_serde_matches_wire_names() {
        for key_type in KeyType::ALL {
            let json = serde_json::to_string(&key_type).unwrap();
            assert_eq!(json, format!("\"{}\"", key_type.as_str()));
        }
    }
}
