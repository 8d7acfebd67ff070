use std::fs::{self, File};
use std::io::{ErrorKind as IoErrorKind, Write};
use std::path::{Component, Path, PathBuf};

use uuid::Uuid;

use errors::*;

use data_layer::Locator;
use data_layer::object_store::ObjectStore;

/// `LocalObjectStore` maps locators onto a directory tree: bucket `b` and key `k` live at
/// `<root>/b/k`.
pub struct LocalObjectStore {
    root: PathBuf,
}

impl LocalObjectStore {
    pub fn new(root: &Path) -> Self {
        LocalObjectStore { root: PathBuf::from(root) }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn object_path(&self, locator: &Locator) -> Result<PathBuf> {
        let relative = Path::new(locator.bucket()).join(locator.key());
        for component in relative.components() {
            match component {
                Component::Normal(_) => {}
                _ => return Err(ErrorKind::InvalidLocator(locator.to_string()).into()),
            }
        }
        Ok(self.root.join(relative))
    }
}

impl ObjectStore for LocalObjectStore {
    fn get(&self, locator: &Locator) -> Result<Vec<u8>> {
        let path = self.object_path(locator)?;
        debug!("Reading object {} from {:?}", locator, path);

        match fs::read(&path) {
            Ok(data) => Ok(data),
            Err(ref err) if err.kind() == IoErrorKind::NotFound => {
                Err(ErrorKind::ObjectNotFound(locator.to_string()).into())
            }
            Err(err) => Err(err).chain_err(|| format!("Unable to read file {:?}", path)),
        }
    }

    // The object is written to a temporary sibling and renamed into place, so readers only ever
    // observe a complete object.
    fn put(&self, locator: &Locator, data: &[u8]) -> Result<()> {
        let path = self.object_path(locator)?;
        let parent = match path.parent() {
            Some(parent) => parent.to_path_buf(),
            None => return Err(ErrorKind::InvalidLocator(locator.to_string()).into()),
        };
        debug!("Writing object {} to {:?} ({} bytes)", locator, path, data.len());

        fs::create_dir_all(&parent).chain_err(|| {
            format!("Unable to create directory {:?}", parent)
        })?;

        let temp_path = parent.join(format!(".{}.tmp", Uuid::new_v4()));
        let written = write_synced(&temp_path, data).and_then(|_| {
            fs::rename(&temp_path, &path).chain_err(|| {
                format!("Unable to move {:?} to {:?}", temp_path, path)
            })
        });

        if written.is_err() {
            if let Err(err) = fs::remove_file(&temp_path) {
                warn!("Unable to remove temporary file {:?}: {}", temp_path, err);
            }
        }
        written
    }
}

fn write_synced(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::create(path).chain_err(
        || format!("Unable to create file {:?}", path),
    )?;
    file.write_all(data).chain_err(
        || format!("Unable to write content to {:?}", path),
    )?;
    file.sync_all().chain_err(
        || format!("Unable to sync {:?}", path),
    )
}
