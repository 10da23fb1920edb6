//! Request and response types shared by the HTTP handlers

pub mod access_key;
pub mod error;
pub mod form;

pub use access_key::{AccessKeyFormResponse, AccessKeyResponse, ListAccessKeysResponse};
pub use error::{ApiError, ApiErrorResponse};
pub use form::FormFields;
