//! Access key repository trait

use async_trait::async_trait;

use super::entity::{AccessKey, AccessKeyId};
use crate::domain::error::DomainError;
use crate::domain::region::RegionId;

#[cfg(test)]
use mockall::automock;

/// Storage for registered access keys
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccessKeyRepository: Send + Sync {
    /// Store a new key; fails with a conflict if the region already has the code
    async fn create(&self, key: AccessKey) -> Result<AccessKey, DomainError>;

    async fn get(&self, id: &AccessKeyId) -> Result<Option<AccessKey>, DomainError>;

    /// List keys, optionally restricted to one region
    async fn list(&self, region: Option<RegionId>) -> Result<Vec<AccessKey>, DomainError>;

    async fn delete(&self, id: &AccessKeyId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_repository() {
        let mut mock = MockAccessKeyRepository::new();
        mock.expect_list().returning(|_| Ok(vec![]));

        let result = mock.list(None).await;
        assert!(result.unwrap().is_empty());
    }
}
