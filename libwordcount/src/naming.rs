use util::data_layer::Locator;

pub fn chunk_file_name(index: usize) -> String {
    format!("chunk{}.txt", index)
}

/// Locator of the 1-based chunk `index` under `prefix`, i.e. `prefix/chunk{index}.txt`.
pub fn chunk_locator(prefix: &Locator, index: usize) -> Locator {
    prefix.child(&chunk_file_name(index))
}
