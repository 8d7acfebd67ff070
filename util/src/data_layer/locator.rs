use std::fmt;

use errors::*;

pub const LOCATOR_SCHEME: &str = "s3://";

/// `Locator` addresses a single object in the store as a bucket and a key.
///
/// The textual form is `s3://bucket/key`. Everything after the first `/` following the bucket is
/// the key, so keys may themselves contain `/`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locator {
    bucket: String,
    key: String,
}

impl Locator {
    pub fn new<B, K>(bucket: B, key: K) -> Self
    where
        B: Into<String>,
        K: Into<String>,
    {
        Locator {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Parses a locator naming a single object. Both the bucket and the key must be non-empty.
    pub fn parse(locator: &str) -> Result<Self> {
        let parsed = Locator::parse_prefix(locator)?;
        if parsed.key.is_empty() {
            return Err(ErrorKind::InvalidLocator(locator.to_owned()).into());
        }
        Ok(parsed)
    }

    /// Parses a locator used as an output prefix. The key may be empty (`s3://bucket` or
    /// `s3://bucket/`), meaning the root of the bucket.
    pub fn parse_prefix(locator: &str) -> Result<Self> {
        if !locator.starts_with(LOCATOR_SCHEME) {
            return Err(ErrorKind::InvalidLocator(locator.to_owned()).into());
        }
        let remainder = &locator[LOCATOR_SCHEME.len()..];

        let (bucket, key) = match remainder.find('/') {
            Some(index) => (&remainder[..index], &remainder[index + 1..]),
            None => (remainder, ""),
        };
        if bucket.is_empty() {
            return Err(ErrorKind::InvalidLocator(locator.to_owned()).into());
        }

        Ok(Locator::new(bucket, key))
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the locator of `name` inside this locator, treating the key as a directory-like
    /// prefix. Trailing slashes on the prefix are dropped before joining.
    pub fn child(&self, name: &str) -> Locator {
        let prefix = self.key.trim_end_matches('/');
        let key = if prefix.is_empty() {
            name.to_owned()
        } else {
            format!("{}/{}", prefix, name)
        };
        Locator::new(self.bucket.clone(), key)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}/{}", LOCATOR_SCHEME, self.bucket, self.key)
    }
}
