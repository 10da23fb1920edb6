//! Domain layer - Core business logic and entities

pub mod access_key;
pub mod error;
pub mod region;

pub use access_key::{
    AccessKey, AccessKeyFormData, AccessKeyId, AccessKeyRepository, FieldError, FieldErrorKind,
    FormErrors, KeyType,
};
pub use error::DomainError;
pub use region::RegionId;
