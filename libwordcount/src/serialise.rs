use serde_json;

use errors::*;
use frequency::FrequencyTable;

/// `encode_table` serialises a table as a JSON object of word to count, keys in sorted order.
pub fn encode_table(table: &FrequencyTable) -> Result<Vec<u8>> {
    let data = serde_json::to_vec(table).chain_err(
        || "Error encoding frequency table as JSON.",
    )?;
    Ok(data)
}

/// `decode_table` parses the output of `encode_table`. Counts must be non-negative integers.
pub fn decode_table(data: &[u8]) -> Result<FrequencyTable> {
    let table = serde_json::from_slice(data).chain_err(
        || "Error parsing JSON frequency table.",
    )?;
    Ok(table)
}
