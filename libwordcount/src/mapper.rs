use frequency::FrequencyTable;
use tokenizer::tokenize;

/// `map_chunk` counts the words of one chunk.
///
/// The result depends only on `chunk_text`, so any number of mappers can run side by side on
/// different chunks without coordinating.
pub fn map_chunk(chunk_text: &str) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for token in tokenize(chunk_text) {
        table.increment(&token);
    }
    table
}
