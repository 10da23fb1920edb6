//! Infrastructure layer - Service and storage implementations

pub mod access_key;
pub mod logging;
