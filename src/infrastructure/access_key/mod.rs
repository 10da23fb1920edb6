//! Access key infrastructure implementations

mod repository;
mod service;

pub use repository::InMemoryAccessKeyRepository;
pub use service::AccessKeyService;
