//! Application state for shared services

use std::sync::Arc;

use crate::domain::access_key::{AccessKey, AccessKeyFormData, AccessKeyId, AccessKeyRepository};
use crate::domain::region::RegionId;
use crate::domain::DomainError;
use crate::infrastructure::access_key::{AccessKeyService, InMemoryAccessKeyRepository};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub access_key_service: Arc<dyn AccessKeyServiceTrait>,
}

impl AppState {
    pub fn new(access_key_service: Arc<dyn AccessKeyServiceTrait>) -> Self {
        Self { access_key_service }
    }

    /// State backed by the in-memory repository
    pub fn in_memory() -> Self {
        let repository = Arc::new(InMemoryAccessKeyRepository::new());
        Self::new(Arc::new(AccessKeyService::new(repository)))
    }
}

/// Trait for access key service operations
#[async_trait::async_trait]
pub trait AccessKeyServiceTrait: Send + Sync {
    async fn create(&self, form: &AccessKeyFormData) -> Result<AccessKey, DomainError>;
    async fn get(&self, id: &AccessKeyId) -> Result<Option<AccessKey>, DomainError>;
    async fn list(&self, region: Option<RegionId>) -> Result<Vec<AccessKey>, DomainError>;
    async fn delete(&self, id: &AccessKeyId) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R: AccessKeyRepository + 'static> AccessKeyServiceTrait for AccessKeyService<R> {
    async fn create(&self, form: &AccessKeyFormData) -> Result<AccessKey, DomainError> {
        AccessKeyService::create(self, form).await
    }

    async fn get(&self, id: &AccessKeyId) -> Result<Option<AccessKey>, DomainError> {
        AccessKeyService::get(self, id).await
    }

    async fn list(&self, region: Option<RegionId>) -> Result<Vec<AccessKey>, DomainError> {
        AccessKeyService::list(self, region).await
    }

    async fn delete(&self, id: &AccessKeyId) -> Result<(), DomainError> {
        AccessKeyService::delete(self, id).await
    }
}
