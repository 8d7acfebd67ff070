use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};

use util::data_layer::{StoreConfig, DEFAULT_S3_REGION};

const AUTHOR: &str = "Wordcount Authors";
// Must equal wordcount::DEFAULT_CHUNK_COUNT; splitter_defaults_to_three_chunks checks it.
const DEFAULT_CHUNKS: &str = "3";

/// Object store selection, shared by every stage.
fn store_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("store_root")
            .long("store-root")
            .help("Serve buckets from directories under this path instead of Amazon S3")
            .env("WORDCOUNT_STORE_ROOT")
            .takes_value(true)
            .required(false),
        Arg::with_name("region")
            .long("region")
            .help("AWS region of the S3 buckets")
            .env("AWS_REGION")
            .takes_value(true)
            .default_value(DEFAULT_S3_REGION),
    ]
}

pub fn splitter_command<'a, 'b>() -> App<'a, 'b> {
    App::new("splitter")
        .version(crate_version!())
        .author(AUTHOR)
        .about("Splits a corpus into line-balanced chunks")
        .arg(
            Arg::with_name("input")
                .help("Locator of the corpus, e.g. s3://bucket/input.txt")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output_prefix")
                .help("Prefix the chunks are written under, e.g. s3://bucket/chunks/")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("chunks")
                .long("chunks")
                .short("c")
                .help("Number of chunks to create")
                .takes_value(true)
                .default_value(DEFAULT_CHUNKS),
        )
        .args(&store_args())
}

pub fn mapper_command<'a, 'b>() -> App<'a, 'b> {
    App::new("mapper")
        .version(crate_version!())
        .author(AUTHOR)
        .about("Counts the words of one chunk")
        .arg(
            Arg::with_name("input")
                .help("Locator of the chunk, e.g. s3://bucket/chunks/chunk1.txt")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Locator the frequency table is written to, e.g. s3://bucket/result1.json")
                .required(true)
                .index(2),
        )
        .args(&store_args())
}

pub fn reducer_command<'a, 'b>() -> App<'a, 'b> {
    App::new("reducer")
        .version(crate_version!())
        .author(AUTHOR)
        .about("Merges frequency tables into a final table")
        .arg(
            Arg::with_name("locators")
                .help("Input table locators followed by the output locator")
                .value_name("LOCATOR")
                .multiple(true)
                .min_values(2)
                .required(true),
        )
        .args(&store_args())
}

pub fn store_config(matches: &ArgMatches) -> StoreConfig {
    StoreConfig::new(
        matches.value_of("store_root").map(PathBuf::from),
        matches.value_of("region").map(|region| region.to_owned()),
    )
}
