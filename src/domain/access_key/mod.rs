//! Access key domain
//!
//! Form binding and validation for access key creation requests, plus the
//! entity and repository used once a request has been accepted.

mod binding;
mod entity;
mod form;
mod key_type;
mod repository;
mod validation;

pub use binding::{bind_fields, RawAccessKeyForm};
pub use entity::{fingerprint, AccessKey, AccessKeyId, AccessKeyInfo};
pub use form::{
    AccessKeyFormBuilder, AccessKeyFormData, DEFAULT_AIR_GAP_INSTALL,
    DEFAULT_PASSWORDLESS_SUDO_ACCESS, DEFAULT_SSH_PORT,
};
pub use key_type::{KeyType, UnknownKeyType};
pub use repository::AccessKeyRepository;
#[cfg(test)]
pub use repository::MockAccessKeyRepository;
pub use validation::{FieldError, FieldErrorKind, FormErrors};

pub mod fields {
    pub use super::validation::{
        AIR_GAP_INSTALL, KEY_CODE, KEY_CONTENT, KEY_TYPE, PASSWORDLESS_SUDO_ACCESS, REGION_UUID,
        SSH_PORT, SSH_USER,
    };
}
