use util::data_layer::{Locator, ObjectStore};

use errors::*;
use frequency::FrequencyTable;
use mapper::map_chunk;
use naming::chunk_locator;
use reducer::reduce;
use serialise::{decode_table, encode_table};
use splitter::{split, validate_chunk_count};

fn download<S: ObjectStore + ?Sized>(store: &S, locator: &Locator) -> Result<Vec<u8>> {
    let data = store.get(locator).chain_err(
        || ErrorKind::Download(locator.to_string()),
    )?;
    info!("Downloaded {} bytes from {}", data.len(), locator);
    Ok(data)
}

fn download_text<S: ObjectStore + ?Sized>(store: &S, locator: &Locator) -> Result<String> {
    let data = download(store, locator)?;
    let text = String::from_utf8(data).chain_err(
        || ErrorKind::Decode(locator.to_string()),
    )?;
    Ok(text)
}

fn upload<S: ObjectStore + ?Sized>(store: &S, locator: &Locator, data: &[u8]) -> Result<()> {
    store.put(locator, data).chain_err(
        || ErrorKind::Upload(locator.to_string()),
    )?;
    info!("Uploaded {} bytes to {}", data.len(), locator);
    Ok(())
}

/// `run_split` reads the corpus at `input`, splits it into `chunk_count` chunks and writes chunk
/// `i` to `output_prefix/chunk{i}.txt`.
///
/// Stops at the first failed write; chunks after it are not written. Returns the locators of
/// every chunk, in order.
pub fn run_split<S: ObjectStore + ?Sized>(
    store: &S,
    input: &Locator,
    output_prefix: &Locator,
    chunk_count: usize,
) -> Result<Vec<Locator>> {
    validate_chunk_count(chunk_count)?;
    info!("Input: {}", input);
    info!("Output prefix: {}", output_prefix);

    let corpus = download_text(store, input)?;
    let chunks = split(&corpus, chunk_count)?;
    info!("Total lines: {}", chunks.iter().map(|c| c.line_count()).sum::<usize>());

    let mut written = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        let locator = chunk_locator(output_prefix, chunk.index());
        info!("Chunk {}: {} lines", chunk.index(), chunk.line_count());
        upload(store, &locator, chunk.text().as_bytes())?;
        written.push(locator);
    }

    info!("Created {} chunks under {}", written.len(), output_prefix);
    Ok(written)
}

/// `run_map` counts the words of the chunk at `input` and writes the table to `output`.
pub fn run_map<S: ObjectStore + ?Sized>(
    store: &S,
    input: &Locator,
    output: &Locator,
) -> Result<FrequencyTable> {
    info!("Input: {}", input);
    info!("Output: {}", output);

    let text = download_text(store, input)?;
    let table = map_chunk(&text);
    info!(
        "Counted {} words, {} unique",
        table.total(),
        table.len()
    );

    let data = encode_table(&table)?;
    upload(store, output, &data)?;
    Ok(table)
}

/// `run_reduce` merges the tables at `inputs` and writes the result to `output`.
///
/// Every input is read and parsed before anything is written, so a missing or malformed input
/// leaves `output` untouched.
pub fn run_reduce<S: ObjectStore + ?Sized>(
    store: &S,
    inputs: &[Locator],
    output: &Locator,
) -> Result<FrequencyTable> {
    if inputs.is_empty() {
        return Err(ErrorKind::NoInputs.into());
    }
    info!("Input files: {}", inputs.len());
    info!("Output: {}", output);

    let mut tables = Vec::with_capacity(inputs.len());
    for (i, locator) in inputs.iter().enumerate() {
        info!("Processing {}: {}", i + 1, locator);
        let data = download(store, locator)?;
        let table = decode_table(&data).chain_err(
            || ErrorKind::Parse(locator.to_string()),
        )?;
        info!("Words in {}: {}", locator, table.len());
        tables.push(table);
    }

    let merged = reduce(tables)?;
    info!("Total unique words: {}", merged.len());

    let data = encode_table(&merged)?;
    upload(store, output, &data)?;
    Ok(merged)
}
