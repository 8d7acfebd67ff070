use std::collections::HashMap;
use std::sync::RwLock;

use errors::*;

use data_layer::Locator;
use data_layer::object_store::ObjectStore;

// InMemoryObjectStore keeps every object in a process-local map. It backs the unit tests of the
// pipeline stages.
#[derive(Default)]
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<Locator, Vec<u8>>>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns every stored locator, sorted.
    pub fn locators(&self) -> Result<Vec<Locator>> {
        let objects = match self.objects.read() {
            Ok(objects) => objects,
            Err(_) => return Err("In-memory object store lock is poisoned".into()),
        };
        let mut locators: Vec<Locator> = objects.keys().cloned().collect();
        locators.sort();
        Ok(locators)
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn get(&self, locator: &Locator) -> Result<Vec<u8>> {
        debug!("Reading object: {}", locator);
        let objects = match self.objects.read() {
            Ok(objects) => objects,
            Err(_) => return Err("In-memory object store lock is poisoned".into()),
        };
        match objects.get(locator) {
            Some(data) => Ok(data.clone()),
            None => Err(ErrorKind::ObjectNotFound(locator.to_string()).into()),
        }
    }

    fn put(&self, locator: &Locator, data: &[u8]) -> Result<()> {
        debug!("Writing object: {} ({} bytes)", locator, data.len());
        let mut objects = match self.objects.write() {
            Ok(objects) => objects,
            Err(_) => return Err("In-memory object store lock is poisoned".into()),
        };
        objects.insert(locator.clone(), data.to_vec());
        Ok(())
    }
}
