//! Access key forms
//!
//! Binds and validates access key creation requests for cloud and on-prem
//! providers, and registers the accepted keys:
//! - Typed form contract with documented defaults
//! - Field-level validation errors for every rejected field
//! - HTTP API accepting JSON or url-encoded bodies

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::access_key::{AccessKeyFormData, FormErrors, KeyType};
