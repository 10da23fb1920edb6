//! In-memory access key repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::access_key::{AccessKey, AccessKeyId, AccessKeyRepository};
use crate::domain::region::RegionId;
use crate::domain::DomainError;

/// In-memory implementation of AccessKeyRepository
#[derive(Debug, Default)]
pub struct InMemoryAccessKeyRepository {
    keys: Arc<RwLock<HashMap<AccessKeyId, AccessKey>>>,
}

impl InMemoryAccessKeyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccessKeyRepository for InMemoryAccessKeyRepository {
    async fn create(&self, key: AccessKey) -> Result<AccessKey, DomainError> {
        let mut keys = self.keys.write().await;

        let duplicate = keys
            .values()
            .any(|k| k.region_uuid() == key.region_uuid() && k.key_code() == key.key_code());

        if duplicate {
            return Err(DomainError::conflict(format!(
                "Access key '{}' already exists in region {}",
                key.key_code(),
                key.region_uuid()
            )));
        }

        if keys.contains_key(&key.id()) {
            return Err(DomainError::conflict(format!(
                "Access key with ID '{}' already exists",
                key.id()
            )));
        }

        keys.insert(key.id(), key.clone());
        Ok(key)
    }

    async fn get(&self, id: &AccessKeyId) -> Result<Option<AccessKey>, DomainError> {
        let keys = self.keys.read().await;
        Ok(keys.get(id).cloned())
    }

    async fn list(&self, region: Option<RegionId>) -> Result<Vec<AccessKey>, DomainError> {
        let keys = self.keys.read().await;

        let mut result: Vec<AccessKey> = keys
            .values()
            .filter(|k| region.is_none_or(|r| k.region_uuid() == r))
            .cloned()
            .collect();

        result.sort_by(|a, b| a.created_at().cmp(&b.created_at()));
        Ok(result)
    }

    async fn delete(&self, id: &AccessKeyId) -> Result<bool, DomainError> {
        let mut keys = self.keys.write().await;
        Ok(keys.remove(id).is_some())
    }
}
