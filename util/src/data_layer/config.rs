use std::path::PathBuf;

use errors::*;

use data_layer::LocalObjectStore;
use data_layer::object_store::ObjectStore;

pub const DEFAULT_S3_REGION: &str = "us-west-2";

/// Which object store the pipeline stages talk to.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreBackend {
    /// Buckets are directories under the given root.
    Local(PathBuf),
    /// Amazon S3 in the given region.
    S3(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
}

impl StoreConfig {
    /// A local root always wins over S3, so tests and local runs never reach the network.
    pub fn new(store_root: Option<PathBuf>, region: Option<String>) -> Self {
        let backend = match store_root {
            Some(root) => StoreBackend::Local(root),
            None => StoreBackend::S3(region.unwrap_or_else(|| DEFAULT_S3_REGION.to_owned())),
        };
        StoreConfig { backend }
    }
}

/// `open_store` builds the object store described by `config`.
pub fn open_store(config: &StoreConfig) -> Result<Box<dyn ObjectStore>> {
    match config.backend {
        StoreBackend::Local(ref root) => {
            info!("Using local object store rooted at {:?}", root);
            Ok(Box::new(LocalObjectStore::new(root)))
        }
        StoreBackend::S3(ref region) => open_s3_store(region),
    }
}

#[cfg(feature = "s3")]
fn open_s3_store(region: &str) -> Result<Box<dyn ObjectStore>> {
    use data_layer::AmazonS3ObjectStore;

    let store = AmazonS3ObjectStore::new(region)?;
    Ok(Box::new(store))
}

#[cfg(not(feature = "s3"))]
fn open_s3_store(_region: &str) -> Result<Box<dyn ObjectStore>> {
    Err(
        ErrorKind::StoreConfiguration(
            "no store root given and S3 support is not enabled (build with --features s3)"
                .to_owned(),
        ).into(),
    )
}
