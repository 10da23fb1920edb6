//! Access key service
//!
//! Takes validated creation forms and registers the resulting keys.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::access_key::{AccessKey, AccessKeyFormData, AccessKeyId, AccessKeyRepository};
use crate::domain::region::RegionId;
use crate::domain::DomainError;

/// Access key service for managing registered keys
#[derive(Debug)]
pub struct AccessKeyService<R>
where
    R: AccessKeyRepository,
{
    repository: Arc<R>,
}

impl<R: AccessKeyRepository> AccessKeyService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a key described by a validated form
    ///
    /// The repository rejects a code already used in the same region.
    pub async fn create(&self, form: &AccessKeyFormData) -> Result<AccessKey, DomainError> {
        info!(
            "Creating access key: code={}, region={}",
            form.key_code(),
            form.region_uuid()
        );

        let created = self.repository.create(AccessKey::from_form(form)).await?;

        info!("Access key created: id={}", created.id());

        Ok(created)
    }

    pub async fn get(&self, id: &AccessKeyId) -> Result<Option<AccessKey>, DomainError> {
        self.repository.get(id).await
    }

    pub async fn list(&self, region: Option<RegionId>) -> Result<Vec<AccessKey>, DomainError> {
        debug!("Listing access keys: region={:?}", region);
        self.repository.list(region).await
    }

    /// Delete a key, failing if it does not exist
    pub async fn delete(&self, id: &AccessKeyId) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(format!("Access key '{}' not found", id)));
        }

        info!("Access key deleted: id={}", id);
        Ok(())
    }
}
