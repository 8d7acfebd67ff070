use errors::*;
use frequency::FrequencyTable;

/// `reduce` merges partial tables into one by summing the counts of every word.
///
/// Summation makes the result independent of the order of `tables` and of how they are grouped,
/// so partial results may be reduced in any tree shape.
pub fn reduce<I>(tables: I) -> Result<FrequencyTable>
where
    I: IntoIterator<Item = FrequencyTable>,
{
    let mut merged = FrequencyTable::new();
    for table in tables {
        merged.merge(&table)?;
    }
    Ok(merged)
}
