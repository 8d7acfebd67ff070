use clap::ArgMatches;

use util::data_layer::{open_store, Locator};
use wordcount;

use errors::*;
use parser::store_config;

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str> {
    matches.value_of(name).chain_err(
        || format!("Argument '{}' must be specified", name),
    )
}

pub fn run_splitter(matches: &ArgMatches) -> Result<()> {
    let input = Locator::parse(required(matches, "input")?)?;
    let output_prefix = Locator::parse_prefix(required(matches, "output_prefix")?)?;
    let chunk_count = value_t!(matches, "chunks", usize)?;

    let store = open_store(&store_config(matches))?;
    let written = wordcount::run_split(&store, &input, &output_prefix, chunk_count)?;

    info!("Success! {} chunks created", written.len());
    Ok(())
}

pub fn run_mapper(matches: &ArgMatches) -> Result<()> {
    let input = Locator::parse(required(matches, "input")?)?;
    let output = Locator::parse(required(matches, "output")?)?;

    let store = open_store(&store_config(matches))?;
    wordcount::run_map(&store, &input, &output)?;

    info!("Success! Result saved to {}", output);
    Ok(())
}

/// The last locator is the output, every one before it is an input.
pub fn run_reducer(matches: &ArgMatches) -> Result<()> {
    let mut locators = match matches.values_of("locators") {
        Some(values) => values
            .map(Locator::parse)
            .collect::<::util::errors::Result<Vec<Locator>>>()?,
        None => Vec::new(),
    };
    let output = match locators.pop() {
        Some(output) => output,
        None => return Err("An output locator must be specified".into()),
    };

    let store = open_store(&store_config(matches))?;
    wordcount::run_reduce(&store, &locators, &output)?;

    info!("Success! Final result saved to {}", output);
    Ok(())
}
