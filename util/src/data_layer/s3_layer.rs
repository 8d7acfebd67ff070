use std::str::FromStr;

use futures::{Future, Stream};
use rusoto_core::Region;
use rusoto_s3::{GetObjectError, GetObjectRequest, PutObjectRequest, S3, S3Client};

use errors::*;

use data_layer::Locator;
use data_layer::object_store::ObjectStore;

pub struct AmazonS3ObjectStore {
    client: S3Client,
}

impl AmazonS3ObjectStore {
    pub fn new(region: &str) -> Result<Self> {
        let region = Region::from_str(region).chain_err(|| {
            ErrorKind::StoreConfiguration(format!("unknown AWS region '{}'", region))
        })?;
        info!("Using Amazon S3 object store in {:?}", region);

        Ok(AmazonS3ObjectStore { client: S3Client::simple(region) })
    }
}

impl ObjectStore for AmazonS3ObjectStore {
    fn get(&self, locator: &Locator) -> Result<Vec<u8>> {
        debug!(
            "Downloading: bucket={}, key={}",
            locator.bucket(),
            locator.key()
        );

        let request = GetObjectRequest {
            bucket: locator.bucket().to_owned(),
            key: locator.key().to_owned(),
            ..Default::default()
        };

        let response = match self.client.get_object(&request).sync() {
            Ok(response) => response,
            Err(GetObjectError::NoSuchKey(_)) => {
                return Err(ErrorKind::ObjectNotFound(locator.to_string()).into())
            }
            Err(err) => {
                return Err(err).chain_err(|| format!("Unable to get object {}", locator))
            }
        };

        let streaming_body = match response.body {
            Some(body) => body,
            None => return Ok(Vec::new()),
        };

        let data: Vec<u8> = streaming_body.concat2().wait().chain_err(|| {
            format!("Unable to read body of object {}", locator)
        })?;
        Ok(data)
    }

    // A single PutObject call is atomic on S3: the object is either fully replaced or untouched.
    fn put(&self, locator: &Locator, data: &[u8]) -> Result<()> {
        debug!(
            "Uploading: bucket={}, key={} ({} bytes)",
            locator.bucket(),
            locator.key(),
            data.len()
        );

        let request = PutObjectRequest {
            bucket: locator.bucket().to_owned(),
            key: locator.key().to_owned(),
            body: Some(data.to_vec()),
            ..Default::default()
        };

        self.client.put_object(&request).sync().chain_err(|| {
            format!("Unable to put object {}", locator)
        })?;
        Ok(())
    }
}
