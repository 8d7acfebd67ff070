mod config;
mod local_layer;
mod locator;
mod memory_layer;
mod object_store;
#[cfg(feature = "s3")]
mod s3_layer;

pub use self::config::{open_store, StoreBackend, StoreConfig, DEFAULT_S3_REGION};
pub use self::local_layer::LocalObjectStore;
pub use self::locator::{Locator, LOCATOR_SCHEME};
pub use self::memory_layer::InMemoryObjectStore;
pub use self::object_store::ObjectStore;
#[cfg(feature = "s3")]
pub use self::s3_layer::AmazonS3ObjectStore;
