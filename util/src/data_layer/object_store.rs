use data_layer::Locator;
use errors::*;

/// `ObjectStore` is the gateway every pipeline stage reads from and writes to.
///
/// Implementations must treat `put` as a whole-object replacement: a failed put never leaves a
/// partially written object visible under the locator.
pub trait ObjectStore {
    fn get(&self, locator: &Locator) -> Result<Vec<u8>>;

    fn put(&self, locator: &Locator, data: &[u8]) -> Result<()>;
}

impl<'a, S: ObjectStore + ?Sized> ObjectStore for &'a S {
    fn get(&self, locator: &Locator) -> Result<Vec<u8>> {
        (**self).get(locator)
    }

    fn put(&self, locator: &Locator, data: &[u8]) -> Result<()> {
        (**self).put(locator, data)
    }
}

impl<S: ObjectStore + ?Sized> ObjectStore for Box<S> {
    fn get(&self, locator: &Locator) -> Result<Vec<u8>> {
        (**self).get(locator)
    }

    fn put(&self, locator: &Locator, data: &[u8]) -> Result<()> {
        (**self).put(locator, data)
    }
}
